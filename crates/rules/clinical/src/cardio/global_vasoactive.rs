use crivet_core::{DrugKey, DrugScope, Severity};
use crivet_rules::{Rule, StaticRule};

/// Drugs titrated against perfusion targets.
pub const VASOACTIVES: [DrugKey; 5] = [
    DrugKey::Norepinephrine,
    DrugKey::Vasopressin,
    DrugKey::Dopamine,
    DrugKey::Ephedrine,
    DrugKey::Dobutamine,
];

/// Rules attached to every drug. Each one narrows itself by drug in its condition.
pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("vasoactive_no_perf_targets_orange", DrugScope::Any, Severity::Yellow)
            .when(|c| VASOACTIVES.contains(&c.drug) && !c.patient.has_perfusion_targets())
            .title("Vasoativo sem alvo de perfusão registrado: risco de “tratar número”")
            .why("Sem MAP/lactato/diurese, aumenta chance de sub ou supertitular e perder perfusão real.")
            .action("Registrar pelo menos MAP e um marcador de perfusão (lactato/diurese/tempo de preenchimento capilar) para orientar titulação.")
            .tags(&["monitoring"])
            .boxed(),
    ]
}

#[cfg(test)]
mod tests {
    use crivet_core::{ComorbiditySet, PatientContext, Species};
    use crivet_rules::EvalContext;

    use super::*;

    fn fires(drug: DrugKey, patient: &PatientContext) -> bool {
        let set = ComorbiditySet::new();
        let ctx = EvalContext::new(drug, &set, patient);
        rules().iter().any(|rule| rule.matches(&ctx))
    }

    #[test]
    fn fires_for_vasoactive_without_targets() {
        let patient = PatientContext::new(Species::Dog);
        for drug in VASOACTIVES {
            assert!(fires(drug, &patient), "{drug}");
        }
    }

    #[test]
    fn silent_once_a_target_is_recorded() {
        let with_map = PatientContext::new(Species::Dog).with_map(70.0);
        let with_lactate = PatientContext::new(Species::Cat).with_lactate(3.2);
        assert!(!fires(DrugKey::Norepinephrine, &with_map));
        assert!(!fires(DrugKey::Dopamine, &with_lactate));
    }

    #[test]
    fn silent_for_other_drugs() {
        let patient = PatientContext::new(Species::Dog);
        assert!(!fires(DrugKey::Esmolol, &patient));
        assert!(!fires(DrugKey::Propofol, &patient));
    }
}
