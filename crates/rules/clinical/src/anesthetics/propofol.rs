use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::LOW_VOLUME_SHOCK;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("propofol_hypovolemia_shock_black", DrugKey::Propofol, Severity::Black)
            .when(|c| c.has_any(LOW_VOLUME_SHOCK) || c.patient.map_below(60.0))
            .title("Hipovolemia/choque + Propofol = risco alto de colapso hemodinâmico")
            .why("Propofol causa vasodilatação e depressão miocárdica dose-dependente → pode derrubar MAP e perfusão rapidamente em pacientes com reserva baixa.")
            .action("Evitar indução padrão. Se inevitável: microtitulagem muito lenta + suporte hemodinâmico preparado (fluido/vasopressor/inotrópico conforme caso). Considerar alternativas.")
            .tags(&["hemodynamics", "vasodilation"])
            .boxed(),
        StaticRule::new("propofol_hypoalbuminemia_reduce", DrugKey::Propofol, Severity::Orange)
            .when(|c| c.has(ComorbidityKey::Hypoalbuminemia))
            .title("Hipoalbuminemia + Propofol = fração livre ↑ (dose efetiva ↑)")
            .why("Maior fração livre aumenta potência clínica → risco de apneia/hipotensão com dose “usual”.")
            .action("Reduzir dose e titular lentamente. Monitorar ventilação e PA.")
            .tags(&["protein_binding", "resp_depression"])
            .boxed(),
        StaticRule::new("propofol_resp_disease_apnea", DrugKey::Propofol, Severity::Red)
            .when(|c| c.has(ComorbidityKey::RespDisease))
            .title("Doença respiratória + Propofol = risco de apneia/hipoventilação")
            .why("Propofol pode causar apneia e reduzir drive ventilatório, principalmente na indução.")
            .action("Pré-oxigenar, titular lentamente e ter ventilação assistida pronta. Preferir protocolo que minimize depressão respiratória quando possível.")
            .tags(&["resp_depression"])
            .boxed(),
    ]
}
