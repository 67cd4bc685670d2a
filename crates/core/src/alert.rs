use serde::{Deserialize, Serialize};

use crate::severity::Severity;
use crate::types::DrugKey;

/// A single clinical warning produced by the alert engine.
///
/// Alerts are plain output values: built once by a rule and handed to the
/// caller, never persisted or mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// `"{rule_id}:{drug}"`, see [`alert_id`].
    pub id: String,
    pub severity: Severity,
    /// Ranking score; always `severity.score()`.
    pub score: u32,
    pub title: String,
    /// Clinical rationale.
    pub why: String,
    /// Recommended action.
    #[serde(rename = "do")]
    pub do_action: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Alert {
    /// Create an alert whose score is derived from `severity`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        why: impl Into<String>,
        do_action: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            score: severity.score(),
            title: title.into(),
            why: why.into(),
            do_action: do_action.into(),
            tags: Vec::new(),
        }
    }

    /// Set the tags of this alert.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Compose the identifier of an alert raised by `rule_id` for `drug`.
///
/// The evaluated (concrete) drug is always used, so a rule scoped to every
/// drug yields a distinct id per drug.
#[must_use]
pub fn alert_id(rule_id: &str, drug: DrugKey) -> String {
    format!("{rule_id}:{drug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_follows_severity() {
        let alert = Alert::new("r:propofol", Severity::Red, "t", "w", "d");
        assert_eq!(alert.score, 85);
        assert!(alert.tags.is_empty());
    }

    #[test]
    fn alert_id_uses_drug_key() {
        assert_eq!(
            alert_id("dobu_arrhythmia_orange", DrugKey::Dobutamine),
            "dobu_arrhythmia_orange:dobutamina"
        );
    }

    #[test]
    fn serializes_do_field() {
        let alert = Alert::new("x:meropenem", Severity::Orange, "t", "w", "act")
            .with_tags(["stewardship"]);
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["do"], "act");
        assert_eq!(json["severity"], "orange");
        assert_eq!(json["score"], 60);
        assert_eq!(json["tags"][0], "stewardship");
    }

    #[test]
    fn empty_tags_are_omitted() {
        let alert = Alert::new("x:meropenem", Severity::Green, "t", "w", "d");
        let json = serde_json::to_value(&alert).unwrap();
        assert!(json.get("tags").is_none());
    }
}
