use crivet_core::{DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::RENAL;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("mero_stewardship_orange", DrugKey::Meropenem, Severity::Orange)
            .title("Meropenem: reservar para infecção grave/ESBL ou falha documentada (stewardship)")
            .why("Carbapenêmico é recurso crítico; uso indiscriminado aumenta pressão seletiva e resistência.")
            .action("Idealmente usar com cultura/antibiograma e/ou forte suspeita de multirresistência em paciente grave. Reavaliar descalonamento assim que possível.")
            .tags(&["stewardship"])
            .boxed(),
        StaticRule::new("mero_renal_orange", DrugKey::Meropenem, Severity::Orange)
            .when(|c| c.has_any(RENAL))
            .title("DRC/IRA + Meropenem: ajustar dose/intervalo e vigiar neurotoxicidade")
            .why("Exposição pode aumentar em disfunção renal; em alguns beta-lactâmicos, níveis altos podem predispor a sinais neurológicos.")
            .action("Ajustar por função renal e monitorar status neurológico. Preferir PA/fluido guiado para melhorar perfusão renal.")
            .tags(&["renal_adjustment", "neuro_watch"])
            .boxed(),
    ]
}
