use crivet_core::{DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::RENAL;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("cephalexin_renal_yellow", DrugKey::Cephalexin, Severity::Yellow)
            .when(|c| c.has_any(RENAL))
            .title("DRC/IRA + Cefalexina: ajustar intervalo")
            .why("Excreção predominantemente renal; em disfunção renal a meia-vida aumenta.")
            .action("Aumentar intervalo entre doses conforme função renal e monitorar resposta clínica.")
            .tags(&["renal_adjustment"])
            .boxed(),
        StaticRule::new("cephalexin_gi_green", DrugKey::Cephalexin, Severity::Green)
            .title("Cefalexina: efeitos GI leves são os mais comuns")
            .why("Vômito e diarreia leves podem ocorrer, especialmente com estômago vazio; geralmente bem tolerada.")
            .action("Administrar com alimento se houver sinais GI. Reavaliar se diarreia persistente.")
            .tags(&["gi_adverse_effects"])
            .boxed(),
    ]
}
