use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::{CARDIAC, HEPATIC, LOW_VOLUME_SHOCK, RENAL};

/// Full and partial mu agonists that share the respiratory depression warning.
const RESPIRATORY_DEPRESSANTS: [DrugKey; 5] = [
    DrugKey::Fentanyl,
    DrugKey::Remifentanil,
    DrugKey::Morphine,
    DrugKey::Methadone,
    DrugKey::Butorphanol,
];

/// Respiratory disease, or a patient known to be breathing unassisted.
///
/// An unknown ventilator status does not fire the rule.
fn respiratory_depression(drug: DrugKey) -> Box<dyn Rule> {
    StaticRule::new(format!("opioid_resp_disease_{drug}"), drug, Severity::Orange)
        .when(|c| c.has(ComorbidityKey::RespDisease) || c.patient.is_off_ventilator())
        .title("Doença respiratória + Opioide = maior risco de hipoventilação")
        .why("Opioides deprimem centro respiratório e podem reduzir drive ventilatório, especialmente com sedação concomitante.")
        .action("Titulagem lenta, monitorar ETCO₂/SpO₂ e padrão ventilatório. Considerar suporte ventilatório se necessário. Preferir analgesia multimodal para reduzir dose.")
        .tags(&["resp_depression"])
        .boxed()
}

pub fn rules() -> Vec<Box<dyn Rule>> {
    let mut rules: Vec<Box<dyn Rule>> = RESPIRATORY_DEPRESSANTS
        .into_iter()
        .map(respiratory_depression)
        .collect();

    rules.extend([
        StaticRule::new("morphine_renal_accumulation", DrugKey::Morphine, Severity::Red)
            .when(|c| c.has_any(RENAL))
            .title("DRC/IRA + Morfina = risco de acúmulo de metabólitos e sedação prolongada")
            .why("Em disfunção renal, metabólitos podem acumular → depressão do SNC/respiração e recuperação lenta.")
            .action("Evitar se possível. Preferir remifentanil (mais previsível) ou ajustar estratégia analgésica. Se usar, reduzir dose e monitorar sedação/ventilação.")
            .tags(&["renal_clearance", "active_metabolites"])
            .boxed(),
        StaticRule::new("morphine_hypotension_shock", DrugKey::Morphine, Severity::Red)
            .when(|c| c.has_any(LOW_VOLUME_SHOCK) || c.patient.map_below(60.0))
            .title("Hipotensão/choque + Morfina = piora hemodinâmica possível")
            .why("Pode causar vasodilatação e liberação de histamina (especialmente bolus/IV rápido), piorando perfusão.")
            .action("Evitar bolus rápido. Preferir opioide mais titulável (fentanil/remifentanil) e corrigir perfusão antes.")
            .tags(&["hemodynamics"])
            .boxed(),
        StaticRule::new("fentanyl_bradycardia_risk", DrugKey::Fentanyl, Severity::Yellow)
            .when(|c| c.has_any(CARDIAC))
            .title("Cardiopata/risco de arritmia + Fentanil: monitorar FC/ECG")
            .why("Pode aumentar tônus vagal → bradicardia; em cardiopatas isso pode reduzir DC e piorar perfusão.")
            .action("Titulagem lenta; monitorar ECG/PA. Se bradicardia com hipotensão: reavaliar dose e considerar anticolinérgico conforme cenário.")
            .tags(&["bradycardia", "ecg_monitoring"])
            .boxed(),
        StaticRule::new("remi_prefer_in_hepatic_renal", DrugKey::Remifentanil, Severity::Green)
            .when(|c| c.has_any(HEPATIC) || c.has_any(RENAL))
            .title("Hepato/renal: Remifentanil costuma ser mais previsível (sem “cauda” longa)")
            .why("Tende a ter offset rápido e menor risco de sedação prolongada comparado a opioides com metabólitos/depuração dependente de órgão.")
            .action("Pode ser uma boa escolha quando você quer controle fino e despertar rápido. Ainda exige monitor de ventilação (apneia/hipoventilação podem ocorrer).")
            .tags(&["predictable_offset"])
            .boxed(),
        StaticRule::new("butorphanol_ceiling_analgesia", DrugKey::Butorphanol, Severity::Yellow)
            .title("Butorfanol: analgesia limitada para dor moderada–grave")
            .why("Agonista-antagonista → efeito analgésico com “teto”; pode ser insuficiente para dor intensa e pode antagonizar parcialmente agonistas μ.")
            .action("Se dor moderada–grave: preferir agonista μ pleno (metadona/morfina/fentanil) + multimodal. Use butorfanol mais para sedação/antitussígeno e dor leve.")
            .tags(&["analgesia_ceiling"])
            .boxed(),
        StaticRule::new("methadone_hepatic_caution", DrugKey::Methadone, Severity::Orange)
            .when(|c| c.has_any(HEPATIC))
            .title("Hepatopata/Shunt + Metadona: risco de efeito prolongado")
            .why("Em disfunção hepática, depuração pode cair → sedação/efeitos mais duradouros.")
            .action("Reduzir dose e titular ao efeito. Monitorar ventilação e tempo de recuperação.")
            .tags(&["hepatic_metabolism"])
            .boxed(),
    ]);

    rules
}

#[cfg(test)]
mod tests {
    use crivet_core::{ComorbiditySet, PatientContext, Species};
    use crivet_rules::evaluate;

    use super::*;

    #[test]
    fn every_opioid_has_its_own_respiratory_rule() {
        let rules = rules();
        for drug in RESPIRATORY_DEPRESSANTS {
            let id = format!("opioid_resp_disease_{drug}");
            let rule = rules.iter().find(|r| r.id() == id).unwrap();
            assert!(rule.applies_to_drug(drug));
        }
    }

    #[test]
    fn ventilated_patient_without_lung_disease_is_not_flagged() {
        let patient = PatientContext::new(Species::Dog).with_ventilator(true);
        let alerts = evaluate(DrugKey::Fentanyl, &[], &patient, &rules());
        assert!(alerts.iter().all(|a| !a.id.starts_with("opioid_resp_disease_")));
    }

    #[test]
    fn spontaneous_breathing_is_flagged() {
        let patient = PatientContext::new(Species::Cat).with_ventilator(false);
        let alerts = evaluate(DrugKey::Methadone, &[], &patient, &rules());
        assert_eq!(alerts[0].id, "opioid_resp_disease_methadone:methadone");
    }

    #[test]
    fn unknown_ventilator_status_needs_lung_disease() {
        let patient = PatientContext::new(Species::Dog);
        let set = ComorbiditySet::new();
        let ctx = crivet_rules::EvalContext::new(DrugKey::Morphine, &set, &patient);
        let rule = respiratory_depression(DrugKey::Morphine);
        assert!(!rule.matches(&ctx));

        let alerts = evaluate(
            DrugKey::Morphine,
            &[ComorbidityKey::RespDisease],
            &patient,
            &rules(),
        );
        assert!(alerts.iter().any(|a| a.id == "opioid_resp_disease_morphine:morphine"));
    }

    #[test]
    fn butorphanol_always_carries_ceiling_note() {
        let patient = PatientContext::new(Species::Dog);
        let alerts = evaluate(DrugKey::Butorphanol, &[], &patient, &rules());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "butorphanol_ceiling_analgesia:butorphanol");
    }
}
