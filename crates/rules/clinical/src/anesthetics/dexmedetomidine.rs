use crivet_core::{DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::{CARDIAC, DISTRIBUTIVE, LOW_VOLUME_SHOCK};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("dex_shock_hypovolemia_black", DrugKey::Dexmedetomidine, Severity::Black)
            .when(|c| c.has_any(LOW_VOLUME_SHOCK) || c.patient.map_below(60.0))
            .title("Hipovolemia/choque + Dexmedetomidina = risco hemodinâmico alto")
            .why("Pode causar vasoconstrição periférica + bradicardia → queda de débito cardíaco e piora de perfusão em pacientes instáveis.")
            .action("Evitar até estabilizar perfusão. Se uso excepcional: dose muito baixa, titulada, com monitorização intensiva (ECG/PA).")
            .tags(&["hemodynamics", "bradycardia"])
            .boxed(),
        StaticRule::new("dex_cardiac_disease_red", DrugKey::Dexmedetomidine, Severity::Red)
            .when(|c| c.has_any(CARDIAC))
            .title("Cardiopata/risco de arritmia + Dex: bradicardia/AV block e DC ↓")
            .why("Alfa-2 pode reduzir FC e DC; em cardiopatas isso pode precipitar hipotensão e hipoperfusão.")
            .action("Evitar em doença cardíaca significativa/instável. Se usar: dose mínima, ECG contínuo e plano de reversão (atipamezol) se necessário.")
            .tags(&["ecg_monitoring", "bradycardia"])
            .boxed(),
        StaticRule::new("dex_sepsis_or_distributive_orange", DrugKey::Dexmedetomidine, Severity::Orange)
            .when(|c| c.has_any(DISTRIBUTIVE))
            .title("Sepse/choque distributivo + Dex: cautela (perfusão primeiro)")
            .why("Efeito vasomotor e bradicardia podem reduzir entrega de O₂ se paciente ainda não está bem ressuscitado.")
            .action("Se for usar como sedação (ex.: paciente ventilado/agitado), preferir microdoses e reavaliar perfusão (MAP, lactato, diurese).")
            .tags(&["perfusion"])
            .boxed(),
    ]
}
