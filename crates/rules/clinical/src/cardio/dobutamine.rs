use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("dobu_arrhythmia_orange", DrugKey::Dobutamine, Severity::Orange)
            .when(|c| c.has(ComorbidityKey::ArrhythmiaRisk))
            .title("Risco de arritmia + Dobutamina: pode precipitar taquiarritmias")
            .why("Inotrópico β1 pode aumentar automaticidade e consumo de O₂ do miocárdio.")
            .action("ECG contínuo, começar baixo e titular. Se taquiarritmia piorar, reduzir/cessar e reavaliar estratégia.")
            .tags(&["ecg_monitoring"])
            .boxed(),
        StaticRule::new("dobu_hypotension_orange", DrugKey::Dobutamine, Severity::Orange)
            .when(|c| c.patient.map_below(60.0))
            .title("MAP baixa + Dobutamina: pode piorar hipotensão (vasodilatação β2)")
            .why("Alguns pacientes caem MAP com dobutamina por vasodilatação relativa, apesar de melhorar débito.")
            .action("Se MAP muito baixa, considerar norepi associado (fenótipo: baixo débito + vasoplegia) e titular com PA invasiva se possível.")
            .tags(&["hemodynamics"])
            .boxed(),
    ]
}
