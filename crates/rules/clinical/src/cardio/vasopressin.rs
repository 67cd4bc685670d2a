use crivet_core::{DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::{DISTRIBUTIVE, HYPOVOLEMIA};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("vaso_hypovolemia_black", DrugKey::Vasopressin, Severity::Black)
            .when(|c| c.has_any(HYPOVOLEMIA))
            .title("Hipovolemia não corrigida + Vasopressina = risco de isquemia periférica/visceral")
            .why("Vasoconstrição adicional em paciente com pouco volume pode piorar entrega de O₂ e causar vasoespasmo em leitos vulneráveis.")
            .action("Não iniciar antes de otimizar volume/perfusão. Se uso inevitável, dose mínima e vigilância estreita de perfusão periférica e GI.")
            .tags(&["ischemia_risk", "perfusion"])
            .boxed(),
        StaticRule::new("vaso_distributive_orange", DrugKey::Vasopressin, Severity::Orange)
            .when(|c| c.has_any(DISTRIBUTIVE))
            .title("Sepse/vasoplegia + Vasopressina: útil como adjuvante, mas monitorar isquemia")
            .why("Pode reduzir necessidade de catecolamina e ajudar em vasoplegia refratária; porém aumenta risco de hipoperfusão regional.")
            .action("Usar como adjuvante quando norepi escalando. Monitorar perfusão, lactato, mucosas, extremidades e sinais GI.")
            .tags(&["catecholamine_sparing"])
            .boxed(),
    ]
}
