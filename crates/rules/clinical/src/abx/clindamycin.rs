use crivet_core::{ComorbidityKey, DrugKey, Severity};
use crivet_rules::{Rule, StaticRule};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("clinda_gi_yellow", DrugKey::Clindamycin, Severity::Yellow)
            .title("Clindamicina: comum causar intolerância GI (náusea/diarreia)")
            .why("Antimicrobianos podem alterar microbiota e irritar trato GI; clinda é notória por isso em alguns pacientes.")
            .action("Orientar administração com alimento (se não contraindicado), monitorar diarreia e reavaliar se sinais GI importantes.")
            .tags(&["gi_adverse_effects"])
            .boxed(),
        StaticRule::new("clinda_hepatic_yellow", DrugKey::Clindamycin, Severity::Yellow)
            .when(|c| c.has(ComorbidityKey::HepaticDysfunction))
            .title("Hepatopata + Clindamicina: usar com reavaliação (tolerância/metabolismo)")
            .why("Em doença hepática, metabolismo pode ser menos previsível e EA podem ser menos tolerados.")
            .action("Monitorar sinais GI e apetite; reavaliar necessidade e duração.")
            .tags(&["hepatic_caution"])
            .boxed(),
    ]
}
