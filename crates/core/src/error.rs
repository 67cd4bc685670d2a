use thiserror::Error;

/// Errors raised while interpreting vocabulary values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name any member of a closed vocabulary.
    #[error("unknown {kind}: {value}")]
    UnknownKey {
        /// The vocabulary that was searched (e.g. `"drug"`).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = CoreError::UnknownKey {
            kind: "drug",
            value: "aspirin".into(),
        };
        assert_eq!(err.to_string(), "unknown drug: aspirin");
    }
}
