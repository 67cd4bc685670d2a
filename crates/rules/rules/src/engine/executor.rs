use std::time::Instant;

use tracing::{debug, instrument};

use crivet_core::{Alert, ComorbidityKey, ComorbiditySet, DrugKey, PatientContext};

use crate::engine::context::EvalContext;
use crate::engine::scoring::rank;
use crate::engine::trace::{RuleEvaluationTrace, RuleTraceEntry, RuleTraceResult};
use crate::ir::rule::Rule;

/// Run every applicable rule and return the raw alert multiset.
///
/// A rule applies when its drug scope admits `drug` and its species
/// restriction admits the patient. Output order follows `rules`; ids may
/// repeat. Use [`evaluate`] for the deduplicated, ranked list.
#[instrument(skip_all, fields(drug = %drug, species = %patient.species, rules_count = rules.len()))]
pub fn collect_alerts(
    drug: DrugKey,
    comorbidities: &ComorbiditySet,
    patient: &PatientContext,
    rules: &[Box<dyn Rule>],
) -> Vec<Alert> {
    let ctx = EvalContext::new(drug, comorbidities, patient);
    let mut alerts = Vec::new();

    for rule in rules {
        if !rule.applies_to_drug(drug) || !rule.applies_to_species(patient.species) {
            continue;
        }
        if rule.matches(&ctx) {
            debug!(rule = rule.id(), "rule matched");
            alerts.push(rule.build_alert(&ctx));
        }
    }

    alerts
}

/// Evaluate `rules` for one drug and patient.
///
/// Returns the alerts deduplicated by id (highest score wins) and sorted by
/// score descending, then title. Unknown context fields never trigger a rule.
pub fn evaluate(
    drug: DrugKey,
    comorbidities: &[ComorbidityKey],
    patient: &PatientContext,
    rules: &[Box<dyn Rule>],
) -> Vec<Alert> {
    let set: ComorbiditySet = comorbidities.iter().collect();
    let alerts = rank(collect_alerts(drug, &set, patient, rules));
    debug!(drug = %drug, alerts = alerts.len(), "evaluation complete");
    alerts
}

/// Like [`evaluate`], but also records what happened to every rule.
///
/// The returned alerts are identical to those of [`evaluate`].
#[instrument(skip_all, fields(drug = %drug, species = %patient.species, rules_count = rules.len()))]
pub fn evaluate_with_trace(
    drug: DrugKey,
    comorbidities: &[ComorbidityKey],
    patient: &PatientContext,
    rules: &[Box<dyn Rule>],
) -> (Vec<Alert>, RuleEvaluationTrace) {
    let started = Instant::now();
    let set: ComorbiditySet = comorbidities.iter().collect();
    let ctx = EvalContext::new(drug, &set, patient);

    let mut raw = Vec::new();
    let mut entries = Vec::with_capacity(rules.len());
    let mut evaluated = 0;
    let mut skipped = 0;

    for rule in rules {
        let rule_started = Instant::now();
        let mut entry = RuleTraceEntry {
            rule_id: rule.id().to_owned(),
            drug: rule.drug().to_string(),
            species: rule.species(),
            result: RuleTraceResult::NotMatched,
            severity: None,
            alert_id: None,
            source: rule.source().to_string(),
            evaluation_duration_us: 0,
        };

        if !rule.applies_to_drug(drug) {
            entry.result = RuleTraceResult::SkippedDrug;
            skipped += 1;
        } else if !rule.applies_to_species(patient.species) {
            debug!(rule = rule.id(), "skipping rule for species");
            entry.result = RuleTraceResult::SkippedSpecies;
            skipped += 1;
        } else {
            evaluated += 1;
            if rule.matches(&ctx) {
                debug!(rule = rule.id(), "rule matched");
                let alert = rule.build_alert(&ctx);
                entry.result = RuleTraceResult::Matched;
                entry.severity = Some(alert.severity);
                entry.alert_id = Some(alert.id.clone());
                raw.push(alert);
            }
        }

        entry.evaluation_duration_us = elapsed_us(rule_started);
        entries.push(entry);
    }

    let matched = raw.len();
    let alerts = rank(raw);

    let trace = RuleEvaluationTrace {
        drug,
        species: patient.species,
        total_rules_evaluated: evaluated,
        total_rules_skipped: skipped,
        total_rules_matched: matched,
        duplicates_collapsed: matched - alerts.len(),
        evaluation_duration_us: elapsed_us(started),
        trace: entries,
    };

    (alerts, trace)
}

fn elapsed_us(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use crivet_core::{DrugScope, Severity, Species};

    use super::*;
    use crate::ir::rule::StaticRule;

    fn rules() -> Vec<Box<dyn Rule>> {
        vec![
            StaticRule::new("cat_only", DrugKey::Lidocaine, Severity::Red)
                .for_species(Species::Cat)
                .title("Cat")
                .boxed(),
            StaticRule::new("hepatic", DrugKey::Lidocaine, Severity::Orange)
                .when(|c| c.has(ComorbidityKey::HepaticDysfunction))
                .title("Hepatic")
                .boxed(),
            StaticRule::new("other_drug", DrugKey::Propofol, Severity::Black)
                .title("Other")
                .boxed(),
            StaticRule::new("everywhere", DrugScope::Any, Severity::Green)
                .title("Everywhere")
                .boxed(),
            // Same id as the first rule, lower severity.
            StaticRule::new("cat_only", DrugKey::Lidocaine, Severity::Yellow)
                .for_species(Species::Cat)
                .title("Cat again")
                .boxed(),
        ]
    }

    #[test]
    fn collect_filters_by_drug_and_species() {
        let dog = PatientContext::new(Species::Dog);
        let set = ComorbiditySet::new();
        let ids: Vec<_> = collect_alerts(DrugKey::Lidocaine, &set, &dog, &rules())
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["everywhere:lidocaine"]);
    }

    #[test]
    fn collect_keeps_duplicates() {
        let cat = PatientContext::new(Species::Cat);
        let set = ComorbiditySet::new();
        let raw = collect_alerts(DrugKey::Lidocaine, &set, &cat, &rules());
        assert_eq!(
            raw.iter().filter(|a| a.id == "cat_only:lidocaine").count(),
            2
        );
    }

    #[test]
    fn evaluate_dedups_and_ranks() {
        let cat = PatientContext::new(Species::Cat);
        let alerts = evaluate(
            DrugKey::Lidocaine,
            &[ComorbidityKey::HepaticDysfunction],
            &cat,
            &rules(),
        );
        let summary: Vec<_> = alerts.iter().map(|a| (a.id.as_str(), a.score)).collect();
        assert_eq!(
            summary,
            vec![
                ("cat_only:lidocaine", 85),
                ("hepatic:lidocaine", 60),
                ("everywhere:lidocaine", 10),
            ]
        );
    }

    #[test]
    fn empty_rule_set_yields_nothing() {
        let dog = PatientContext::new(Species::Dog);
        assert!(evaluate(DrugKey::Propofol, &[], &dog, &[]).is_empty());
    }

    #[test]
    fn trace_matches_plain_evaluation() {
        let cat = PatientContext::new(Species::Cat);
        let comorbidities = [ComorbidityKey::HepaticDysfunction];
        let plain = evaluate(DrugKey::Lidocaine, &comorbidities, &cat, &rules());
        let (traced, trace) =
            evaluate_with_trace(DrugKey::Lidocaine, &comorbidities, &cat, &rules());

        assert_eq!(plain, traced);
        assert_eq!(trace.trace.len(), 5);
        assert_eq!(trace.total_rules_evaluated, 4);
        assert_eq!(trace.total_rules_skipped, 1);
        assert_eq!(trace.total_rules_matched, 4);
        assert_eq!(trace.duplicates_collapsed, 1);
        assert_eq!(trace.trace[2].result, RuleTraceResult::SkippedDrug);
        assert_eq!(trace.matched().count(), 4);
    }

    #[test]
    fn trace_records_species_skip() {
        let dog = PatientContext::new(Species::Dog);
        let (_, trace) = evaluate_with_trace(DrugKey::Lidocaine, &[], &dog, &rules());
        assert_eq!(trace.trace[0].result, RuleTraceResult::SkippedSpecies);
        assert_eq!(trace.trace[1].result, RuleTraceResult::NotMatched);
        assert_eq!(
            trace.trace[3].alert_id.as_deref(),
            Some("everywhere:lidocaine")
        );
    }
}
