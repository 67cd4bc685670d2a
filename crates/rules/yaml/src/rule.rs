use crivet_core::{Alert, DrugScope, Severity, Species, alert_id};
use crivet_rules::{EvalContext, Rule, RuleSource};

use crate::condition::Condition;

/// A rule loaded from a YAML rule pack.
#[derive(Debug, Clone)]
pub struct DeclarativeRule {
    pub(crate) id: String,
    pub(crate) drug: DrugScope,
    pub(crate) species: Option<Species>,
    pub(crate) condition: Condition,
    pub(crate) severity: Severity,
    pub(crate) title: String,
    pub(crate) why: String,
    pub(crate) do_action: String,
    pub(crate) tags: Vec<String>,
    pub(crate) source: RuleSource,
}

impl DeclarativeRule {
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl Rule for DeclarativeRule {
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
        self.condition.holds(ctx)
    }

    fn build_alert(&self, ctx: &EvalContext<'_>) -> Alert {
        Alert::new(
            alert_id(&self.id, ctx.drug),
            self.severity,
            self.title.as_str(),
            self.why.as_str(),
            self.do_action.as_str(),
        )
        .with_tags(self.tags.iter().map(String::as_str))
    }

    fn source(&self) -> RuleSource {
        self.source.clone()
    }
}
