use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::HEPATIC;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("maropitant_hepatic_yellow", DrugKey::Maropitant, Severity::Yellow)
            .when(|c| c.has_any(HEPATIC))
            .title("Hepatopata/Shunt + Maropitant: metabolismo hepático, risco de acúmulo")
            .why("Maropitant é metabolizado no fígado e excretado pela bile; em hepatopatas o uso diário prolongado pode levar a acúmulo.")
            .action("Reduzir dose ou espaçar administrações em uso prolongado. Monitorar enzimas hepáticas se tratamento acima de 48 h.")
            .tags(&["hepatic_metabolism"])
            .boxed(),
        StaticRule::new("maropitant_shock_workup_yellow", DrugKey::Maropitant, Severity::Yellow)
            .when(|c| c.has_any(&[ComorbidityKey::ShockHypovolemic, ComorbidityKey::ShockCardiogenic]))
            .title("Choque + Maropitant: antiemético pode mascarar obstrução GI")
            .why("Controlar o vômito sem diagnóstico pode ocultar obstrução gastrointestinal ou abdome cirúrgico em paciente instável.")
            .action("Descartar obstrução GI (imagem/exame) antes de antiemético. Priorizar estabilização hemodinâmica.")
            .tags(&["gi_workup"])
            .boxed(),
    ]
}
