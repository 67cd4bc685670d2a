use std::fmt;

use serde::{Deserialize, Serialize};

use crivet_core::{Alert, DrugKey, DrugScope, Severity, Species, alert_id};

use crate::engine::context::EvalContext;

/// Where a rule was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSource {
    /// Compiled into the binary.
    Inline,
    /// Loaded from a YAML rule pack.
    Yaml {
        /// The file path, if available.
        file: Option<String>,
    },
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => f.write_str("inline"),
            Self::Yaml { file: Some(file) } => write!(f, "yaml:{file}"),
            Self::Yaml { file: None } => f.write_str("yaml"),
        }
    }
}

/// A single clinical alert rule.
///
/// Rules are immutable and side-effect free. The engine first narrows the
/// rule set by [`drug`](Self::drug) and [`species`](Self::species), then asks
/// each remaining rule whether it [`matches`](Self::matches) and, if so, to
/// [`build_alert`](Self::build_alert).
///
/// `id` must be unique among the rules attached to the same concrete drug.
/// [`RuleRepository::validate`](crate::RuleRepository::validate) checks this.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Base identifier; the alert id is `"{id}:{drug}"`.
    fn id(&self) -> &str;

    /// The drugs this rule is attached to.
    fn drug(&self) -> DrugScope;

    /// Species restriction. `None` and `Some(Species::Any)` both match every patient.
    fn species(&self) -> Option<Species> {
        None
    }

    /// Whether the rule fires for `ctx`.
    ///
    /// Must return `false`, never panic, when a context field it reads is unknown.
    fn matches(&self, ctx: &EvalContext<'_>) -> bool;

    /// Build the alert for a matching evaluation.
    fn build_alert(&self, ctx: &EvalContext<'_>) -> Alert;

    fn source(&self) -> RuleSource {
        RuleSource::Inline
    }

    /// Whether the rule is attached to `drug`.
    fn applies_to_drug(&self, drug: DrugKey) -> bool {
        self.drug().admits(drug)
    }

    /// Whether the rule's species restriction admits `species`.
    fn applies_to_species(&self, species: Species) -> bool {
        self.species().is_none_or(|own| own.admits(species))
    }
}

/// Predicate signature used by [`StaticRule`].
pub type Predicate = fn(&EvalContext<'_>) -> bool;

/// Fixed alert text carried by a [`StaticRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertTemplate {
    pub severity: Severity,
    pub title: &'static str,
    pub why: &'static str,
    pub do_action: &'static str,
    pub tags: &'static [&'static str],
}

impl AlertTemplate {
    /// Materialize the template for the rule `rule_id` and drug `drug`.
    pub fn render(&self, rule_id: &str, drug: DrugKey) -> Alert {
        Alert::new(
            alert_id(rule_id, drug),
            self.severity,
            self.title,
            self.why,
            self.do_action,
        )
        .with_tags(self.tags.iter().copied())
    }
}

fn always(_: &EvalContext<'_>) -> bool {
    true
}

/// A rule made of a plain predicate function and a fixed alert template.
///
/// This covers nearly all authored rules; rules whose alert text depends on
/// the patient implement [`Rule`] directly.
///
/// ```
/// use crivet_core::{ComorbidityKey, DrugKey, Severity};
/// use crivet_rules::StaticRule;
///
/// let rule = StaticRule::new("morphine_renal_accumulation", DrugKey::Morphine, Severity::Red)
///     .when(|c| c.has_any(&[ComorbidityKey::Ckd, ComorbidityKey::Aki]))
///     .title("CKD/AKI + morphine")
///     .why("Active metabolites accumulate.")
///     .action("Prefer remifentanil.")
///     .tags(&["renal_clearance"]);
/// ```
#[derive(Debug, Clone)]
pub struct StaticRule {
    id: String,
    drug: DrugScope,
    species: Option<Species>,
    when: Predicate,
    template: AlertTemplate,
}

impl StaticRule {
    /// Create a rule that always fires, with empty alert text.
    ///
    /// Use the builder methods to restrict it and fill in the text.
    pub fn new(id: impl Into<String>, drug: impl Into<DrugScope>, severity: Severity) -> Self {
        Self {
            id: id.into(),
            drug: drug.into(),
            species: None,
            when: always,
            template: AlertTemplate {
                severity,
                title: "",
                why: "",
                do_action: "",
                tags: &[],
            },
        }
    }

    /// Restrict the rule to one species (or mark it explicitly as `Species::Any`).
    #[must_use]
    pub fn for_species(mut self, species: Species) -> Self {
        self.species = Some(species);
        self
    }

    /// Set the firing condition.
    #[must_use]
    pub fn when(mut self, predicate: Predicate) -> Self {
        self.when = predicate;
        self
    }

    #[must_use]
    pub fn title(mut self, title: &'static str) -> Self {
        self.template.title = title;
        self
    }

    #[must_use]
    pub fn why(mut self, why: &'static str) -> Self {
        self.template.why = why;
        self
    }

    /// Set the recommended action (the alert's `do` field).
    #[must_use]
    pub fn action(mut self, do_action: &'static str) -> Self {
        self.template.do_action = do_action;
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: &'static [&'static str]) -> Self {
        self.template.tags = tags;
        self
    }

    pub fn severity(&self) -> Severity {
        self.template.severity
    }

    /// Box the rule for insertion into a [`RuleGroup`](crate::RuleGroup).
    pub fn boxed(self) -> Box<dyn Rule> {
        Box::new(self)
    }
}

impl Rule for StaticRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn drug(&self) -> DrugScope {
        self.drug
    }

    fn species(&self) -> Option<Species> {
        self.species
    }

    fn matches(&self, ctx: &EvalContext<'_>) -> bool {
        (self.when)(ctx)
    }

    fn build_alert(&self, ctx: &EvalContext<'_>) -> Alert {
        self.template.render(&self.id, ctx.drug)
    }
}

#[cfg(test)]
mod tests {
    use crivet_core::{ComorbidityKey, ComorbiditySet, PatientContext};

    use super::*;

    fn sample_rule() -> StaticRule {
        StaticRule::new("lido_hypoalbuminemia", DrugKey::Lidocaine, Severity::Orange)
            .for_species(Species::Any)
            .when(|c| c.has(ComorbidityKey::Hypoalbuminemia))
            .title("Hypoalbuminemia + lidocaine")
            .why("Higher free fraction.")
            .action("Reduce the rate.")
            .tags(&["protein_binding"])
    }

    #[test]
    fn rule_construction() {
        let rule = sample_rule();
        assert_eq!(rule.id(), "lido_hypoalbuminemia");
        assert_eq!(rule.drug(), DrugScope::Only(DrugKey::Lidocaine));
        assert_eq!(rule.species(), Some(Species::Any));
        assert_eq!(rule.severity(), Severity::Orange);
        assert_eq!(rule.source(), RuleSource::Inline);
    }

    #[test]
    fn default_predicate_always_fires() {
        let rule = StaticRule::new("always", DrugKey::Meropenem, Severity::Orange);
        let set = ComorbiditySet::new();
        let patient = PatientContext::new(Species::Dog);
        assert!(rule.matches(&EvalContext::new(DrugKey::Meropenem, &set, &patient)));
    }

    #[test]
    fn predicate_and_alert() {
        let rule = sample_rule();
        let patient = PatientContext::new(Species::Cat);
        let empty = ComorbiditySet::new();
        assert!(!rule.matches(&EvalContext::new(DrugKey::Lidocaine, &empty, &patient)));

        let set: ComorbiditySet = [ComorbidityKey::Hypoalbuminemia].into_iter().collect();
        let ctx = EvalContext::new(DrugKey::Lidocaine, &set, &patient);
        assert!(rule.matches(&ctx));

        let alert = rule.build_alert(&ctx);
        assert_eq!(alert.id, "lido_hypoalbuminemia:lidocaine");
        assert_eq!(alert.severity, Severity::Orange);
        assert_eq!(alert.score, 60);
        assert_eq!(alert.do_action, "Reduce the rate.");
        assert_eq!(alert.tags, vec!["protein_binding".to_owned()]);
    }

    #[test]
    fn scope_filters() {
        let rule = sample_rule();
        assert!(rule.applies_to_drug(DrugKey::Lidocaine));
        assert!(!rule.applies_to_drug(DrugKey::Propofol));
        assert!(rule.applies_to_species(Species::Dog));

        let cat_only = StaticRule::new("cat", DrugKey::Lidocaine, Severity::Red)
            .for_species(Species::Cat);
        assert!(cat_only.applies_to_species(Species::Cat));
        assert!(!cat_only.applies_to_species(Species::Dog));
        assert!(!cat_only.applies_to_species(Species::Any));

        let unscoped = StaticRule::new("any", DrugScope::Any, Severity::Green);
        assert!(unscoped.applies_to_species(Species::Any));
        assert!(unscoped.applies_to_drug(DrugKey::Esmolol));
    }

    #[test]
    fn rule_source_display() {
        assert_eq!(RuleSource::Inline.to_string(), "inline");
        let yaml = RuleSource::Yaml {
            file: Some("packs/extra.yaml".into()),
        };
        assert_eq!(yaml.to_string(), "yaml:packs/extra.yaml");
    }
}
