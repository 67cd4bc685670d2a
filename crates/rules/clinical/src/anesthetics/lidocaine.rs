use crivet_core::{ComorbidityKey, DrugKey, Severity, Species};
use crivet_rules::{Rule, StaticRule};

use crate::predicates::HEPATIC;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        StaticRule::new("lido_cat_high_risk_systemic", DrugKey::Lidocaine, Severity::Red)
            .for_species(Species::Cat)
            .title("Gato + Lidocaína sistêmica = maior risco de toxicidade")
            .why("Gatos tendem a ter menor margem de segurança para anestésicos locais sistêmicos, com risco aumentado de sinais neurológicos (tremores/convulsões) e cardiovasculares.")
            .action("Evitar por padrão no CRIVET. Se uso excepcional, dose mínima titulada, monitorização contínua (ECG/PA/neurológico) e critério de suspensão precoce.")
            .tags(&["species_sensitivity", "neurotoxicity"])
            .boxed(),
        StaticRule::new("lido_hepatic_reduce_or_avoid", DrugKey::Lidocaine, Severity::Red)
            .for_species(Species::Dog)
            .when(|c| c.has_any(HEPATIC))
            .title("Hepatopata/Shunt + Lidocaína = risco de acúmulo/toxicidade")
            .why("Disfunção hepática pode reduzir clearance → maior risco de neurotoxicidade e efeitos cardiovasculares.")
            .action("Preferir evitar se disfunção moderada–grave. Se optar por usar, reduzir significativamente e titular; monitorar sinais neurológicos e ECG.")
            .tags(&["hepatic_clearance", "neurotoxicity"])
            .boxed(),
        StaticRule::new("lido_hypoalbuminemia_more_free_drug", DrugKey::Lidocaine, Severity::Orange)
            .when(|c| c.has(ComorbidityKey::Hypoalbuminemia))
            .title("Hipoalbuminemia + Lidocaína = fração livre ↑ (toxicidade relativa)")
            .why("Maior fração livre aumenta efeito clínico e risco de toxicidade mesmo com dose “padrão”.")
            .action("Reduzir dose/taxa e titular ao efeito. Monitorar tremores, nistagmo, alteração de comportamento e ECG.")
            .tags(&["protein_binding"])
            .boxed(),
        StaticRule::new("lido_arrhythmia_caution", DrugKey::Lidocaine, Severity::Yellow)
            .when(|c| c.has(ComorbidityKey::ArrhythmiaRisk))
            .title("Arritmia/risco elétrico + Lidocaína: usar com alvo claro e ECG")
            .why("Apesar de ser antiarrítmico ventricular, pode deprimir condução/contratilidade em alguns cenários e mascarar piora se não houver monitorização.")
            .action("Se for indicação antiarrítmica: usar com ECG contínuo e objetivos (redução de VPC/TV). Se for analgesia/MLK: reavaliar custo-benefício.")
            .tags(&["ecg_monitoring"])
            .boxed(),
    ]
}
