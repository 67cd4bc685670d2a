use crivet_core::{DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::{DISTRIBUTIVE, RENAL};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("ceftriaxone_sepsis_green", DrugKey::Ceftriaxone, Severity::Green)
            .when(|c| c.has_any(DISTRIBUTIVE))
            .title("Sepse: antibiótico precoce + coleta de cultura antes (se não atrasar) melhora decisão")
            .why("Em sepse, tempo importa; mas cultura antes do antibiótico aumenta chance de direcionar e descalonar depois.")
            .action("Se possível sem atrasar: coletar cultura (sangue/urina/tecido) e iniciar cobertura. Reavaliar em 24–48h.")
            .tags(&["sepsis_workflow"])
            .boxed(),
        StaticRule::new("ceftriaxone_renal_yellow", DrugKey::Ceftriaxone, Severity::Yellow)
            .when(|c| c.has_any(RENAL))
            .title("DRC/IRA + Ceftriaxona: revisar ajuste e hidratação/perfusão")
            .why("Em disfunção renal, a depuração pode estar alterada; ajuste evita superexposição e EA.")
            .action("Rever dose/intervalo conforme função renal e monitorar resposta clínica.")
            .tags(&["renal_adjustment"])
            .boxed(),
    ]
}
