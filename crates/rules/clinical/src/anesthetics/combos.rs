use crivet_core::{DrugKey, Severity, Species};
use crivet_rules::{Rule, StaticRule};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("mlk_cat_red_default", DrugKey::Mlk, Severity::Red)
            .for_species(Species::Cat)
            .title("MLK em gato: risco alto (principalmente por lidocaína sistêmica)")
            .why("No combo, o componente mais limitante em gatos costuma ser a lidocaína sistêmica.")
            .action("Evitar por padrão. Se for fazer “MLK-like”, construir multimodal sem lidocaína sistêmica ou com protocolo alternativo bem justificado.")
            .tags(&["species_sensitivity"])
            .boxed(),
        StaticRule::new("flk_cat_orange", DrugKey::Flk, Severity::Orange)
            .for_species(Species::Cat)
            .title("FLK em gato: cautela (lidocaína + depressão respiratória por opioide)")
            .why("Somatório de riscos: lidocaína sistêmica + opioide → atenção redobrada em ventilação/perfusão.")
            .action("Se usar, microtitulagem e monitorização contínua. Considerar versões modificadas do combo.")
            .tags(&["resp_depression", "neurotoxicity"])
            .boxed(),
    ]
}
