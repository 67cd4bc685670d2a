use crivet_core::{DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::{CARDIAC, HYPOVOLEMIA, INTRACRANIAL};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("ketamine_cardiac_or_arrhythmia_orange", DrugKey::Ketamine, Severity::Orange)
            .when(|c| c.has_any(CARDIAC))
            .title("Cardiopata/risco de arritmia + Cetamina: pode aumentar demanda miocárdica")
            .why("Estimulação simpática pode elevar FC/PA e consumo de O₂ do miocárdio, potencialmente piorando isquemia/arrítmias em alguns cardiopatas.")
            .action("Evitar em cardiopatia instável. Se benefício superar risco (analgesia/hipotensão), usar dose baixa titulada + monitorização (ECG/PA).")
            .tags(&["sympathomimetic", "ecg_monitoring"])
            .boxed(),
        StaticRule::new("ketamine_increased_icp_caution", DrugKey::Ketamine, Severity::Yellow)
            .when(|c| c.has_any(INTRACRANIAL))
            .title("TCE/ICP ↑: Cetamina = usar com critério e ventilação adequada")
            .why("Dependendo do cenário (CO₂, ventilação, sedação associada), pode haver preocupação com hemodinâmica cerebral; o risco é mais relevante se hipoventilar e subir CO₂.")
            .action("Se usar: garantir ventilação/controle de CO₂ e analgesia/sedação adequada. Monitorar neurológico e perfusão.")
            .tags(&["neuro", "ventilation"])
            .boxed(),
        StaticRule::new("ketamine_hypovolemia_green_note", DrugKey::Ketamine, Severity::Green)
            .when(|c| c.has_any(HYPOVOLEMIA))
            .title("Hipovolemia/choque: Cetamina pode preservar PA melhor que indutores vasodilatadores")
            .why("Em muitos pacientes, tende a manter tônus simpático relativo, ajudando a evitar quedas abruptas de PA (ainda depende do estado catecolamínico do paciente).")
            .action("Não é “garantia”. Use dose baixa titulada, trate a causa do choque e monitore PA/perfusão.")
            .tags(&["hemodynamics"])
            .boxed(),
    ]
}
