use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::LOW_VOLUME_SHOCK;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("esmolol_shock_black", DrugKey::Esmolol, Severity::Black)
            .when(|c| c.has_any(LOW_VOLUME_SHOCK) || c.patient.map_below(65.0))
            .title("Instabilidade/choque + Esmolol = pode derrubar débito e perfusão")
            .why("Beta-bloqueio reduz FC/contratilidade; em choque pode precipitar colapso.")
            .action("Evitar se perfusão não estiver segura. Se taquiarritmia ameaça vida, usar com monitorização invasiva e titulação micro.")
            .tags(&["negative_inotropy", "map"])
            .boxed(),
        StaticRule::new("esmolol_resp_disease_orange", DrugKey::Esmolol, Severity::Orange)
            .when(|c| c.has(ComorbidityKey::RespDisease))
            .title("Doença respiratória/broncoespasmo + beta-bloqueador: cautela")
            .why("Mesmo sendo mais β1, pode piorar broncoconstrição em pacientes suscetíveis.")
            .action("Preferir estratégias alternativas se broncoespasmo ativo. Monitorar padrão respiratório e oxigenação.")
            .tags(&["bronchospasm_risk"])
            .boxed(),
    ]
}
