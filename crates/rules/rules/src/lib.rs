pub mod engine;
pub mod error;
pub mod frontend;
pub mod ir;
pub mod repository;

pub use engine::context::EvalContext;
pub use engine::scoring::{compare_titles, dedup_by_id, rank, sort_alerts};
pub use engine::trace::{RuleEvaluationTrace, RuleTraceEntry, RuleTraceResult};
pub use engine::{collect_alerts, evaluate, evaluate_with_trace};
pub use error::RuleError;
pub use frontend::{RuleFrontend, load_directory};
pub use ir::rule::{AlertTemplate, Predicate, Rule, RuleSource, StaticRule};
pub use repository::{GroupSummary, RuleGroup, RuleRepository};
