use crivet_rules::RuleError;
use thiserror::Error;

/// Errors raised while building an [`AlertService`](crate::AlertService).
///
/// Evaluation itself never fails; these only surface at construction time.
#[derive(Debug, Error)]
pub enum AlertsError {
    /// A rule pack failed to load or the repository failed validation.
    #[error(transparent)]
    Rules(#[from] RuleError),

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
