use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::{NEUROLOGIC, RENAL};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("metoclopramide_renal_red", DrugKey::Metoclopramide, Severity::Red)
            .when(|c| c.has_any(RENAL))
            .title("DRC/IRA + Metoclopramida = risco de acúmulo e efeitos extrapiramidais")
            .why("Disfunção renal pode reduzir eliminação → maior risco de agitação, tremores, vocalização, alterações comportamentais.")
            .action("Preferir maropitant ou reduzir dose/taxa e monitorar sinais neurológicos. Suspender se surgirem sinais extrapiramidais.")
            .tags(&["renal_clearance", "extrapyramidal"])
            .boxed(),
        StaticRule::new("metoclopramide_neuro_orange", DrugKey::Metoclopramide, Severity::Orange)
            .when(|c| c.has_any(NEUROLOGIC))
            .title("Doença neurológica/TCE + Metoclopramida: maior risco de efeitos centrais")
            .why("Bloqueio dopaminérgico central pode precipitar sinais extrapiramidais e alterar avaliação neurológica.")
            .action("Preferir maropitant quando possível. Se usar, monitorar de perto comportamento e exame neurológico.")
            .tags(&["cns_effects"])
            .boxed(),
        StaticRule::new("metoclopramide_possible_obstruction_black", DrugKey::Metoclopramide, Severity::Yellow)
            .when(|c| c.has_any(&[ComorbidityKey::ShockHypovolemic, ComorbidityKey::ShockCardiogenic]))
            .title("Paciente muito instável: pró-cinético pode piorar desconforto se causa não for esclarecida")
            .why("Em casos com íleo/hipoperfusão ou suspeita de obstrução, estimular motilidade sem diagnóstico pode piorar dor/náusea e atrasar decisão cirúrgica.")
            .action("Se suspeita de obstrução/abdome agudo: priorizar imagem (US/RX) e analgesia/estabilização antes de pró-cinético.")
            .tags(&["gi_workup"])
            .boxed(),
    ]
}
