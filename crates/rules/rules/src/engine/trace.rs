use serde::{Deserialize, Serialize};

use crivet_core::{DrugKey, Severity, Species};

/// Outcome of considering a single rule during an evaluation pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleTraceResult {
    /// The rule's condition held and it produced an alert.
    Matched,
    /// The rule's condition evaluated to `false`.
    NotMatched,
    /// The rule is attached to other drugs.
    SkippedDrug,
    /// The rule's species restriction excludes the patient.
    SkippedSpecies,
}

impl RuleTraceResult {
    /// Return the `snake_case` string representation (matches serde serialization).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::NotMatched => "not_matched",
            Self::SkippedDrug => "skipped_drug",
            Self::SkippedSpecies => "skipped_species",
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedDrug | Self::SkippedSpecies)
    }
}

/// Trace entry for a single rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTraceEntry {
    /// Base id of the rule.
    pub rule_id: String,
    /// The rule's drug scope (`"any"` for every drug).
    pub drug: String,
    /// Species restriction, if the rule has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    pub result: RuleTraceResult,
    /// Severity of the produced alert, only for matched rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Id of the produced alert, only for matched rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<String>,
    /// Where the rule was loaded from (e.g. `"inline"`, `"yaml:extra.yaml"`).
    pub source: String,
    /// Time spent on this rule in microseconds.
    pub evaluation_duration_us: u64,
}

/// Complete trace of one evaluation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEvaluationTrace {
    /// The evaluated drug.
    pub drug: DrugKey,
    /// The patient's species.
    pub species: Species,
    /// Number of rules whose conditions were actually evaluated.
    pub total_rules_evaluated: usize,
    /// Number of rules filtered out by drug or species.
    pub total_rules_skipped: usize,
    /// Number of rules that produced an alert.
    pub total_rules_matched: usize,
    /// Alerts dropped because a higher-scoring alert shared their id.
    pub duplicates_collapsed: usize,
    /// Total wall-clock time for the pass in microseconds.
    pub evaluation_duration_us: u64,
    /// Per-rule entries in repository order.
    pub trace: Vec<RuleTraceEntry>,
}

impl RuleEvaluationTrace {
    /// Entries for rules that fired.
    pub fn matched(&self) -> impl Iterator<Item = &RuleTraceEntry> {
        self.trace
            .iter()
            .filter(|entry| entry.result == RuleTraceResult::Matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_strings_match_serde() {
        for result in [
            RuleTraceResult::Matched,
            RuleTraceResult::NotMatched,
            RuleTraceResult::SkippedDrug,
            RuleTraceResult::SkippedSpecies,
        ] {
            let json = serde_json::to_value(result).unwrap();
            assert_eq!(json, result.as_str());
        }
    }

    #[test]
    fn skipped_classification() {
        assert!(RuleTraceResult::SkippedDrug.is_skipped());
        assert!(RuleTraceResult::SkippedSpecies.is_skipped());
        assert!(!RuleTraceResult::NotMatched.is_skipped());
    }

    #[test]
    fn unmatched_entry_omits_alert_fields() {
        let entry = RuleTraceEntry {
            rule_id: "dex_cardiac_disease_red".into(),
            drug: "dexmedetomidine".into(),
            species: None,
            result: RuleTraceResult::NotMatched,
            severity: None,
            alert_id: None,
            source: "inline".into(),
            evaluation_duration_us: 0,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["result"], "not_matched");
        assert!(json.get("alert_id").is_none());
        assert!(json.get("severity").is_none());
    }
}
