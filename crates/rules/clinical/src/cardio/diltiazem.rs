use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::CARDIAC;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("diltiazem_cardiogenic_black", DrugKey::Diltiazem, Severity::Black)
            .when(|c| c.has(ComorbidityKey::ShockCardiogenic))
            .title("Choque cardiogênico + Diltiazem = risco de piorar débito (inotropismo negativo)")
            .why("Bloqueio de canal de Ca reduz contratilidade e pode agravar baixo débito.")
            .action("Evitar em cardiogênico/hipotenso. Se for controle de taquiarritmia supraventricular, considerar alternativas conforme estabilidade.")
            .tags(&["negative_inotropy"])
            .boxed(),
        StaticRule::new("diltiazem_brady_or_avblock_red", DrugKey::Diltiazem, Severity::Orange)
            .when(|c| c.has_any(CARDIAC))
            .title("Diltiazem: monitorar bradicardia/AV block e hipotensão")
            .why("Pode reduzir condução AV e FC; risco maior em pacientes já vagotônicos ou com doença de condução.")
            .action("ECG/PA contínuos durante ajuste. Se bradicardia com hipotensão, reduzir/cessar e reavaliar.")
            .tags(&["av_block", "ecg_monitoring"])
            .boxed(),
    ]
}
