use std::collections::{BTreeSet, HashSet};
use std::hash::{DefaultHasher, Hash, Hasher};

use serde::Serialize;
use tracing::info;

use crivet_core::{DrugKey, DrugScope};

use crate::error::RuleError;
use crate::ir::rule::Rule;

/// A named list of rules, usually one drug or drug family.
#[derive(Debug)]
pub struct RuleGroup {
    name: String,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleGroup {
    pub fn new(name: impl Into<String>, rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn summary(&self) -> GroupSummary {
        let drugs: BTreeSet<DrugScope> = self.rules.iter().map(|rule| rule.drug()).collect();
        GroupSummary {
            name: self.name.clone(),
            rule_count: self.rules.len(),
            drugs: drugs.into_iter().collect(),
        }
    }
}

/// Lightweight description of a group kept after its rules are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub rule_count: usize,
    /// Distinct drug scopes the group's rules attach to.
    pub drugs: Vec<DrugScope>,
}

/// The complete, immutable rule set the engine evaluates.
///
/// Built once by concatenating rule groups in the order given. The order is
/// deterministic for a given list of groups; it never affects the ranked
/// output because the engine sorts, but it does fix the order of raw alerts
/// and trace entries.
#[derive(Debug, Default)]
pub struct RuleRepository {
    rules: Vec<Box<dyn Rule>>,
    groups: Vec<GroupSummary>,
}

impl RuleRepository {
    /// Concatenate `groups` into a repository.
    pub fn new(groups: Vec<RuleGroup>) -> Self {
        let mut repository = Self::default();
        for group in groups {
            repository.push_group(group);
        }
        info!(
            groups = repository.groups.len(),
            rules = repository.rules.len(),
            "rule repository built"
        );
        repository
    }

    /// Append a group after the existing ones.
    pub fn push_group(&mut self, group: RuleGroup) {
        self.groups.push(group.summary());
        self.rules.extend(group.rules);
    }

    /// Every rule, in repository order.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn groups(&self) -> &[GroupSummary] {
        &self.groups
    }

    /// Rules that apply to `drug`, including those scoped to every drug.
    pub fn rules_for(&self, drug: DrugKey) -> impl Iterator<Item = &dyn Rule> {
        self.rules
            .iter()
            .map(|rule| &**rule)
            .filter(move |rule| rule.applies_to_drug(drug))
    }

    /// Look up the first rule with the given base id.
    pub fn rule_by_id(&self, id: &str) -> Option<&dyn Rule> {
        self.rules.iter().map(|rule| &**rule).find(|rule| rule.id() == id)
    }

    /// Compute a fingerprint of the rule set.
    ///
    /// The hash combines each rule's id, drug scope, species restriction and
    /// source, in repository order.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for rule in &self.rules {
            rule.id().hash(&mut hasher);
            rule.drug().hash(&mut hasher);
            rule.species().hash(&mut hasher);
            rule.source().to_string().hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Check that no two rules with the same drug scope share an id.
    ///
    /// A rule scoped to every drug may reuse the id of a drug-specific rule;
    /// the engine keeps the higher-scoring alert in that case.
    pub fn validate(&self) -> Result<(), RuleError> {
        match self.duplicate_ids().into_iter().next() {
            Some((drug, id)) => Err(RuleError::DuplicateRuleId { drug, id }),
            None => Ok(()),
        }
    }

    /// Every `(scope, id)` pair that occurs more than once, in repository order.
    pub fn duplicate_ids(&self) -> Vec<(DrugScope, String)> {
        let mut seen: HashSet<(DrugScope, &str)> = HashSet::with_capacity(self.rules.len());
        let mut duplicates = Vec::new();
        for rule in &self.rules {
            let key = (rule.drug(), rule.id());
            if !seen.insert(key) {
                duplicates.push((key.0, key.1.to_owned()));
            }
        }
        duplicates
    }
}

impl From<Vec<RuleGroup>> for RuleRepository {
    fn from(groups: Vec<RuleGroup>) -> Self {
        Self::new(groups)
    }
}

#[cfg(test)]
mod tests {
    use crivet_core::{ComorbidityKey, Severity, Species};

    use super::*;
    use crate::ir::rule::StaticRule;

    fn propofol_group() -> RuleGroup {
        RuleGroup::new(
            "propofol",
            vec![
                StaticRule::new("propofol_a", DrugKey::Propofol, Severity::Black)
                    .when(|c| c.has(ComorbidityKey::HypovolemiaUnresolved))
                    .boxed(),
                StaticRule::new("propofol_b", DrugKey::Propofol, Severity::Red).boxed(),
            ],
        )
    }

    fn global_group() -> RuleGroup {
        RuleGroup::new(
            "global",
            vec![StaticRule::new("global", DrugScope::Any, Severity::Yellow).boxed()],
        )
    }

    #[test]
    fn concatenates_in_group_order() {
        let repo = RuleRepository::new(vec![propofol_group(), global_group()]);
        let ids: Vec<_> = repo.rules().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["propofol_a", "propofol_b", "global"]);
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.groups().len(), 2);
        assert_eq!(repo.groups()[0].rule_count, 2);
        assert_eq!(
            repo.groups()[0].drugs,
            vec![DrugScope::Only(DrugKey::Propofol)]
        );
    }

    #[test]
    fn rules_for_includes_wildcard() {
        let repo = RuleRepository::new(vec![propofol_group(), global_group()]);
        assert_eq!(repo.rules_for(DrugKey::Propofol).count(), 3);
        let ketamine: Vec<_> = repo.rules_for(DrugKey::Ketamine).map(|r| r.id()).collect();
        assert_eq!(ketamine, vec!["global"]);
    }

    #[test]
    fn rule_lookup() {
        let repo = RuleRepository::new(vec![propofol_group()]);
        assert!(repo.rule_by_id("propofol_b").is_some());
        assert!(repo.rule_by_id("missing").is_none());
    }

    #[test]
    fn validate_rejects_duplicate_ids_for_same_drug() {
        let mut repo = RuleRepository::new(vec![propofol_group()]);
        assert!(repo.validate().is_ok());

        repo.push_group(RuleGroup::new(
            "again",
            vec![StaticRule::new("propofol_b", DrugKey::Propofol, Severity::Green).boxed()],
        ));
        let err = repo.validate().unwrap_err();
        assert!(matches!(
            err,
            RuleError::DuplicateRuleId { drug: DrugScope::Only(DrugKey::Propofol), ref id } if id == "propofol_b"
        ));
    }

    #[test]
    fn duplicates_are_keyed_by_scope_and_id() {
        let repo = RuleRepository::new(vec![RuleGroup::new(
            "shared",
            vec![
                StaticRule::new("shared", DrugKey::Propofol, Severity::Red).boxed(),
                StaticRule::new("shared", DrugKey::Ketamine, Severity::Red).boxed(),
                StaticRule::new("shared", DrugScope::Any, Severity::Green).boxed(),
                StaticRule::new("shared", DrugKey::Propofol, Severity::Red)
                    .for_species(Species::Cat)
                    .boxed(),
            ],
        )]);
        // Same scope and id, different species: still a collision.
        assert_eq!(
            repo.duplicate_ids(),
            vec![(DrugScope::Only(DrugKey::Propofol), "shared".to_owned())]
        );
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = RuleRepository::new(vec![propofol_group()]);
        let b = RuleRepository::new(vec![propofol_group()]);
        let c = RuleRepository::new(vec![propofol_group(), global_group()]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn empty_repository() {
        let repo = RuleRepository::new(Vec::new());
        assert!(repo.is_empty());
        assert!(repo.validate().is_ok());
    }
}
