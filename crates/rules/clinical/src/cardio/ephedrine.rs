use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::HYPOVOLEMIA;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("ephedrine_arrhythmia_red", DrugKey::Ephedrine, Severity::Red)
            .when(|c| c.has(ComorbidityKey::ArrhythmiaRisk))
            .title("Arritmia/taquiarritmia + Efedrina = risco de piora elétrica")
            .why("Efedrina tem ação simpatomimética direta e indireta (liberação de norepinefrina): aumenta FC e automatismo, podendo precipitar ou agravar taquiarritmias.")
            .action("Evitar se arritmia ativa. Preferir vasopressor sem efeito cronotrópico relevante (norepinefrina/vasopressina) e manter ECG contínuo.")
            .tags(&["tachyarrhythmia", "ecg_monitoring"])
            .boxed(),
        StaticRule::new("ephedrine_hcm_orange", DrugKey::Ephedrine, Severity::Orange)
            .when(|c| c.has(ComorbidityKey::CardiacDisease))
            .title("Cardiopata (CMH) + Efedrina: taquicardia pode piorar enchimento")
            .why("Em cardiomiopatia hipertrófica, aumento de FC e contratilidade reduz tempo de enchimento diastólico e pode agravar obstrução dinâmica de via de saída.")
            .action("Preferir alternativa sem efeito inotrópico/cronotrópico. Se usar, bolus pequeno, ECG/PA contínuos e reavaliar rapidamente.")
            .tags(&["cardiac", "hemodynamics"])
            .boxed(),
        StaticRule::new("ephedrine_hypovolemia_orange", DrugKey::Ephedrine, Severity::Orange)
            .when(|c| c.has_any(HYPOVOLEMIA))
            .title("Hipovolemia não corrigida + Efedrina: resposta pobre e transitória")
            .why("Parte do efeito depende da liberação de catecolaminas endógenas; com depleção (choque/hipovolemia prolongada) a resposta cai e mascara o déficit de volume.")
            .action("Corrigir volume primeiro. Usar efedrina apenas como ponte na hipotensão anestésica; se não responder, migrar para vasopressor em infusão.")
            .tags(&["perfusion", "shock"])
            .boxed(),
        StaticRule::new("ephedrine_hypertension_red", DrugKey::Ephedrine, Severity::Red)
            .when(|c| c.patient.map_above(120.0))
            .title("MAP > 120 mmHg + Efedrina = risco de hipertensão excessiva")
            .why("Paciente já hipertenso: novo bolus pode provocar pico pressórico, bradicardia reflexa e aumento do consumo miocárdico de O₂.")
            .action("Não administrar novo bolus. Reavaliar profundidade anestésica e necessidade real de suporte pressor.")
            .tags(&["overdose", "hemodynamics"])
            .boxed(),
    ]
}
