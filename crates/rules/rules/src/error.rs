use crivet_core::{CoreError, DrugScope};
use thiserror::Error;

/// Errors that can occur while loading, compiling, or validating rules.
///
/// Evaluation itself is infallible: unknown clinical data is handled by the
/// predicates, and a predicate that panics is a defect in rule content.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A parse error when loading rules from a frontend.
    #[error("parse error: {0}")]
    Parse(String),

    /// A structurally valid rule whose condition cannot be compiled.
    #[error("invalid condition in rule `{rule}`: {reason}")]
    InvalidCondition {
        /// Id of the offending rule.
        rule: String,
        /// What is wrong with the condition.
        reason: String,
    },

    /// Two rules with the same drug scope share an id.
    #[error("duplicate rule id `{id}` for drug {drug}")]
    DuplicateRuleId {
        /// The scope both rules are attached to.
        drug: DrugScope,
        /// The colliding rule id.
        id: String,
    },

    /// A vocabulary value in rule content was not recognised.
    #[error(transparent)]
    Vocabulary(#[from] CoreError),
}
