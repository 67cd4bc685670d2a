//! Declarative rule packs.
//!
//! Rule authors can add alert rules without recompiling by placing YAML files
//! in the configured rules directory. [`YamlFrontend`] parses them into
//! [`DeclarativeRule`]s that evaluate exactly like the built-in rules.

mod condition;
mod frontend;
mod parser;
mod rule;

pub use condition::{CompareOp, Condition, ContextField};
pub use frontend::{YamlFrontend, compile_rule};
pub use parser::{YamlCondition, YamlRule, YamlRuleFile};
pub use rule::DeclarativeRule;
