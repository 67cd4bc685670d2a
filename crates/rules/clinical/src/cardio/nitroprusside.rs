use crivet_core::{ComorbidityKey, DrugKey, Severity, Species};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::{INTRACRANIAL, LOW_VOLUME_SHOCK, RENAL};

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("nitroprusside_hypotension_shock_black", DrugKey::Nitroprusside, Severity::Black)
            .when(|c| c.patient.map_below(60.0) || c.has_any(LOW_VOLUME_SHOCK) || c.has(ComorbidityKey::ShockDistributive))
            .title("Hipotensão/choque + Nitroprussiato = contraindicado")
            .why("Vasodilatador arterial e venoso potente, de início imediato: derruba MAP e perfusão em paciente já hipotenso ou em choque.")
            .action("Não usar. Estabilizar perfusão primeiro; só considerar em crise hipertensiva com MAP monitorada continuamente (PA invasiva).")
            .tags(&["hemodynamics", "vasodilation"])
            .boxed(),
        StaticRule::new("nitroprusside_intracranial_black", DrugKey::Nitroprusside, Severity::Black)
            .when(|c| c.has_any(INTRACRANIAL))
            .title("Hipertensão intracraniana/TCE + Nitroprussiato = risco de elevar PIC")
            .why("Vasodilatação cerebral aumenta volume sanguíneo cerebral e pode manter ou elevar a PIC, além de reduzir pressão de perfusão cerebral.")
            .action("Evitar. Preferir controle pressórico que preserve a perfusão cerebral e manejo neuroprotetor da PIC.")
            .tags(&["neuro", "icp"])
            .boxed(),
        StaticRule::new("nitroprusside_hepatic_cyanide_red", DrugKey::Nitroprusside, Severity::Red)
            .when(|c| c.has(ComorbidityKey::HepaticDysfunction))
            .title("Hepatopata + Nitroprussiato = risco de intoxicação por cianeto")
            .why("O cianeto liberado nos eritrócitos é convertido em tiocianato no fígado; com disfunção hepática o cianeto acumula (acidose metabólica, lactato ↑).")
            .action("Evitar se possível. Se indispensável: menor dose e menor tempo, monitorar lactato/gasometria e considerar tiossulfato.")
            .tags(&["cyanide_toxicity", "hepatic_clearance"])
            .boxed(),
        StaticRule::new("nitroprusside_renal_thiocyanate_red", DrugKey::Nitroprusside, Severity::Red)
            .when(|c| c.has_any(RENAL))
            .title("DRC/IRA + Nitroprussiato = acúmulo de tiocianato")
            .why("Tiocianato é eliminado pelo rim; em disfunção renal acumula e pode causar psicose, convulsões e hipotireoidismo com infusão prolongada.")
            .action("Limitar duração e dose. Monitorar sinais neurológicos; preferir alternativa em infusões acima de 24–48 h.")
            .tags(&["renal_clearance", "neurotoxicity"])
            .boxed(),
        StaticRule::new("nitroprusside_cat_yellow", DrugKey::Nitroprusside, Severity::Yellow)
            .for_species(Species::Cat)
            .title("Gato + Nitroprussiato: cautela com hipotensão abrupta e infusão prolongada")
            .why("Gatos parecem mais sensíveis à queda pressórica abrupta e à toxicidade por cianeto em infusões longas.")
            .action("Iniciar na menor dose, titular lentamente com PA contínua e evitar infusões acima de 24 h.")
            .tags(&["species_sensitivity", "cyanide_toxicity"])
            .boxed(),
    ]
}
