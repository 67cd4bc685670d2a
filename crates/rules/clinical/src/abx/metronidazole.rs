use crivet_core::{DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::{HEPATIC, NEUROLOGIC};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("metro_hepatic_red", DrugKey::Metronidazole, Severity::Red)
            .when(|c| c.has_any(HEPATIC))
            .title("Hepatopata/Shunt + Metronidazol = risco maior de neurotoxicidade")
            .why("Em disfunção hepática, o fármaco pode acumular → sinais neurológicos (ataxia, nistagmo, alteração de comportamento, convulsões).")
            .action("Evitar ou reduzir dose e duração. Se surgirem sinais neurológicos: suspender imediatamente e reavaliar terapia.")
            .tags(&["neurotoxicity", "hepatic_clearance"])
            .boxed(),
        StaticRule::new("metro_neuro_disease_red", DrugKey::Metronidazole, Severity::Red)
            .when(|c| c.has_any(NEUROLOGIC))
            .title("Doença neurológica/TCE + Metronidazol: maior risco/ruído diagnóstico")
            .why("Pode induzir ou piorar sinais neurológicos e confundir monitoramento do paciente.")
            .action("Preferir alternativa quando possível. Se uso for necessário, monitorar neuro de perto e manter dose mínima eficaz.")
            .tags(&["cns_effects"])
            .boxed(),
    ]
}
