use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::RENAL;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("enro_neonate_pregnant_red", DrugKey::Enrofloxacin, Severity::Red)
            .when(|c| c.has_any(&[ComorbidityKey::Neonate, ComorbidityKey::Pregnant]))
            .title("Neonato/gestação + Enrofloxacina: evitar quando possível")
            .why("Fluoroquinolonas podem afetar cartilagem em animais em crescimento; em gestação/lactação a decisão deve ser muito bem justificada.")
            .action("Evitar por padrão; se uso for inevitável, registrar justificativa e preferir alternativa segura quando houver.")
            .tags(&["developmental_risk"])
            .boxed(),
        StaticRule::new("enro_ckd_orange", DrugKey::Enrofloxacin, Severity::Orange)
            .when(|c| c.has_any(RENAL))
            .title("DRC/IRA + Enrofloxacina: cautela e reavaliar dose/intervalo")
            .why("Disfunção renal pode alterar exposição e aumentar risco de efeitos adversos; precisa de dose/intervalo ajustados ao paciente.")
            .action("Revisar ajuste por função renal e monitorar resposta/EA. Preferir cultura/antibiograma quando possível.")
            .tags(&["renal_adjustment"])
            .boxed(),
    ]
}
