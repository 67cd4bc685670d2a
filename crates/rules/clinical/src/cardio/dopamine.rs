use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::CARDIAC;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("dopamine_arrhythmia_red", DrugKey::Dopamine, Severity::Red)
            .when(|c| c.has_any(CARDIAC))
            .title("Cardiopata/risco de arritmia + Dopamina = maior risco de taquiarritmia")
            .why("Efeito β/α dose-dependente pode aumentar FC e ectopia, principalmente em miocárdio irritável.")
            .action("Preferir norepinefrina (vasoplegia) ou dobutamina (baixo débito) conforme fenótipo. Se usar dopamina: ECG contínuo e dose mínima eficaz.")
            .tags(&["tachyarrhythmia"])
            .boxed(),
        StaticRule::new("dopamine_hypovolemia_black", DrugKey::Dopamine, Severity::Black)
            .when(|c| c.has(ComorbidityKey::HypovolemiaUnresolved))
            .title("Hipovolemia não corrigida + Dopamina: pode mascarar choque e piorar perfusão")
            .why("Aumentar catecolamina sem volume efetivo pode piorar microcirculação e consumo miocárdico de O₂.")
            .action("Otimizar volume/perfusão primeiro. Se precisar amina: escolher baseada no tipo de choque e monitorar resposta real (lactato/diurese).")
            .tags(&["shock"])
            .boxed(),
    ]
}
