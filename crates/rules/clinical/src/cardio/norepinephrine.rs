use crivet_core::{Alert, ComorbidityKey, DrugKey, DrugScope, Severity, Species, alert_id};
use crivet_rules::{EvalContext, Rule, StaticRule};

use crate::predicates::{DISTRIBUTIVE, HYPOVOLEMIA, RENAL};

/// MAP above which norepinephrine is considered overdosed, mmHg.
const HYPERTENSION_MAP: f64 = 100.0;

/// Minimum therapeutic MAP for `species`, mmHg.
fn target_map(species: Species) -> f64 {
    match species {
        Species::Dog => 65.0,
        Species::Cat | Species::Any => 60.0,
    }
}

/// MAP recorded and below the species target. The text quotes both values.
#[derive(Debug)]
struct LowMapWarning;

impl LowMapWarning {
    const ID: &'static str = "norepi_low_map_warning";
}

impl Rule for LowMapWarning {
    fn id(&self) -> &str {
        Self::ID
    }

    fn drug(&self) -> DrugScope {
        DrugKey::Norepinephrine.into()
    }

    fn matches(&self, ctx: &EvalContext<'_>) -> bool {
        ctx.patient.map_below(target_map(ctx.patient.species))
    }

    fn build_alert(&self, ctx: &EvalContext<'_>) -> Alert {
        let target = target_map(ctx.patient.species);
        let map = ctx.patient.map.unwrap_or_default();
        Alert::new(
            alert_id(Self::ID, ctx.drug),
            Severity::Orange,
            format!("MAP abaixo do alvo ({target} mmHg) - considerar titulação"),
            format!(
                "MAP atual ({map} mmHg) abaixo do alvo terapêutico (≥{target} mmHg). Pode indicar necessidade de aumentar dose de norepinefrina ou reavaliar volume responsivo."
            ),
            "Titular +0.05 mcg/kg/min a cada 5–10 min se volume já otimizado. Reavaliar volume intravascular. Monitorar perfusão: lactato, diurese, extremidades. Se oligúria persistir ou lactato não reduzir, aumentar dose progressivamente.",
        )
        .with_tags(["monitoring", "map"])
    }
}

#[derive(Debug)]
struct HighMapWarning;

impl HighMapWarning {
    const ID: &'static str = "norepi_high_map_warning";
}

impl Rule for HighMapWarning {
    fn id(&self) -> &str {
        Self::ID
    }

    fn drug(&self) -> DrugScope {
        DrugKey::Norepinephrine.into()
    }

    fn matches(&self, ctx: &EvalContext<'_>) -> bool {
        ctx.patient.map_above(HYPERTENSION_MAP)
    }

    fn build_alert(&self, ctx: &EvalContext<'_>) -> Alert {
        let map = ctx.patient.map.unwrap_or_default();
        Alert::new(
            alert_id(Self::ID, ctx.drug),
            Severity::Red,
            "Sobredose: Hipertensão severa detectada",
            format!(
                "Hipertensão severa (MAP: {map} mmHg) indica excesso de vasoconstrição. Pode causar bradicardia reflexa (via barorreceptores), arritmias e hipoperfusão periférica paradoxal (extremidades frias, acidose láctica)."
            ),
            "Reduzir dose imediatamente. Monitorar ECG (bradicardia/arritmias). Avaliar extremidades (frias/marmorizadas indicam hipoperfusão periférica). Reavaliar lactato e estratégia global.",
        )
        .with_tags(["overdose", "monitoring", "hemodynamics"])
    }
}

pub fn rules() -> Vec<Box<dyn Rule>> {
    let mut rules = vec![
        StaticRule::new("norepi_hypovolemia_black", DrugKey::Norepinephrine, Severity::Black)
            .when(|c| c.has_any(HYPOVOLEMIA))
            .title("Hipovolemia não corrigida + Norepinefrina = risco alto de hipoperfusão/isquemia")
            .why("Vasoconstrição intensa com volume circulante efetivo baixo pode piorar perfusão (rim/intestino) e mascarar choque.")
            .action("Priorizar ressuscitação volêmica guiada por perfusão. Se precisar vasopressor: dose mínima, reavaliar MAP + perfusão (lactato, diurese, extremidades) frequentemente.")
            .tags(&["perfusion", "shock"])
            .boxed(),
        StaticRule::new("norepi_cardiogenic_orange", DrugKey::Norepinephrine, Severity::Orange)
            .when(|c| c.has(ComorbidityKey::ShockCardiogenic))
            .title("Choque cardiogênico + Norepinefrina: pode ajudar MAP, mas atenção ao pós-carga")
            .why("Aumento de resistência vascular pode elevar pós-carga e piorar débito em alguns cardiogênicos; em outros, melhora perfusão coronariana ao subir MAP.")
            .action("Usar se MAP muito baixo, titulando com monitorização (ECO/USG point-of-care se tiver). Considerar inotrópico associado se baixo débito.")
            .tags(&["afterload", "hemodynamics"])
            .boxed(),
        StaticRule::new("norepi_distributive_green", DrugKey::Norepinephrine, Severity::Green)
            .when(|c| c.has_any(DISTRIBUTIVE))
            .title("Choque distributivo (sepse/anafilaxia) + Norepinefrina: escolha fisiologicamente coerente")
            .why("Vasoplegia é o problema central; norepi reduz o “continente” vascular e melhora MAP/perfusão quando volume já foi otimizado.")
            .action("Titulagem por MAP e perfusão. Reavaliar volume responsivo e necessidade de adicionar vasopressina se doses sobem muito.")
            .tags(&["vasoplegia"])
            .boxed(),
        StaticRule::new("norepi_renal_safe", DrugKey::Norepinephrine, Severity::Green)
            .when(|c| c.has_any(RENAL))
            .title("Renopata + Norepinefrina: SAFE / REQUIRED quando há hipotensão")
            .why("Manter TAM adequada (≥65 mmHg cães, ≥60 mmHg gatos) é mais protetor para o rim que evitar vasopressor. Hipotensão prolongada piora função renal mais que vasoconstrição controlada.")
            .action("Usar quando necessário para manter MAP alvo. Monitorar débito urinário rigorosamente, especialmente em gatos (mais sensíveis à vasoconstrição renal). Titular por MAP e perfusão.")
            .tags(&["renal", "perfusion"])
            .boxed(),
        StaticRule::new("norepi_hepatic_monitor", DrugKey::Norepinephrine, Severity::Orange)
            .when(|c| c.has(ComorbidityKey::HepaticDysfunction))
            .title("Hepatopata + Norepinefrina: monitorar excesso de vasoconstrição")
            .why("Metabolismo da norepinefrina independe do fígado (COMT e MAO em tecidos periféricos), mas excesso de vasoconstrição pode reduzir perfusão hepática.")
            .action("Usar quando necessário, mas evitar doses muito altas. Monitorar sinais de hipoperfusão hepática (acidose láctica, encefalopatia). Titular por MAP e perfusão sistêmica.")
            .tags(&["hepatic", "monitoring"])
            .boxed(),
        StaticRule::new("norepi_cardiac_disease_critical", DrugKey::Norepinephrine, Severity::Red)
            .when(|c| c.has(ComorbidityKey::CardiacDisease))
            .title("Cardiopatia ICC + Norepinefrina: risco crítico de aumento de pós-carga")
            .why("Aumenta resistência vascular sistêmica (pós-carga). Em insuficiência cardíaca, pode piorar débito cardíaco, aumentar trabalho cardíaco e consumo de O₂. Pode precipitar descompensação. Atenção especial em doses >0.5 mcg/kg/min.")
            .action("Monitorar ECO/USG point-of-care se disponível. Avaliar lactato, sinais de baixo débito (extremidades frias, oligúria). Considerar inotrópico associado ou reduzir dose se débito comprometido. Reavaliar estratégia se piorar sinais. Em doses altas (>0.5 mcg/kg/min), monitoramento intensivo obrigatório.")
            .tags(&["afterload", "cardiac", "hemodynamics"])
            .boxed(),
        StaticRule::new("norepi_cat_renal_sensitivity", DrugKey::Norepinephrine, Severity::Orange)
            .for_species(Species::Cat)
            .title("Gato + Norepinefrina: monitorar débito urinário rigorosamente")
            .why("Gatos são mais sensíveis à vasoconstrição renal que cães. Risco maior de redução de perfusão renal mesmo em doses moderadas.")
            .action("Monitorar débito urinário rigorosamente. Titular cuidadosamente por MAP (alvo: ≥60 mmHg). Se oligúria persistir, reavaliar dose e considerar estratégia alternativa. Teto absoluto: 0.5 mcg/kg/min.")
            .tags(&["species_sensitivity", "renal"])
            .boxed(),
    ];
    rules.push(Box::new(LowMapWarning));
    rules.push(Box::new(HighMapWarning));
    rules
}

#[cfg(test)]
mod tests {
    use crivet_core::PatientContext;
    use crivet_rules::evaluate;

    use super::*;

    fn ids(patient: &PatientContext, comorbidities: &[ComorbidityKey]) -> Vec<String> {
        evaluate(DrugKey::Norepinephrine, comorbidities, patient, &rules())
            .into_iter()
            .map(|a| a.id)
            .collect()
    }

    #[test]
    fn low_map_target_depends_on_species() {
        let dog = PatientContext::new(Species::Dog).with_map(62.0);
        let cat = PatientContext::new(Species::Cat).with_map(62.0);
        assert!(ids(&dog, &[]).contains(&"norepi_low_map_warning:norepinephrine".to_owned()));
        assert!(!ids(&cat, &[]).contains(&"norepi_low_map_warning:norepinephrine".to_owned()));
    }

    #[test]
    fn low_map_text_quotes_target_and_reading() {
        let dog = PatientContext::new(Species::Dog).with_map(55.0);
        let alerts = evaluate(DrugKey::Norepinephrine, &[], &dog, &rules());
        let low = alerts
            .iter()
            .find(|a| a.id == "norepi_low_map_warning:norepinephrine")
            .unwrap();
        assert_eq!(low.title, "MAP abaixo do alvo (65 mmHg) - considerar titulação");
        assert!(low.why.starts_with("MAP atual (55 mmHg)"));
        assert!(low.why.contains("≥65 mmHg"));
    }

    #[test]
    fn high_map_is_red_and_quotes_reading() {
        let cat = PatientContext::new(Species::Cat).with_map(112.5);
        let alerts = evaluate(DrugKey::Norepinephrine, &[], &cat, &rules());
        let high = alerts
            .iter()
            .find(|a| a.id == "norepi_high_map_warning:norepinephrine")
            .unwrap();
        assert_eq!(high.severity, Severity::Red);
        assert!(high.why.contains("MAP: 112.5 mmHg"));
    }

    #[test]
    fn unknown_map_fires_neither_warning() {
        let dog = PatientContext::new(Species::Dog);
        let fired = ids(&dog, &[]);
        assert!(fired.iter().all(|id| !id.contains("_map_warning")));
    }

    #[test]
    fn hypovolemia_ranks_black_first() {
        let dog = PatientContext::new(Species::Dog).with_map(70.0);
        let alerts = evaluate(
            DrugKey::Norepinephrine,
            &[ComorbidityKey::HypovolemiaUnresolved, ComorbidityKey::Ckd],
            &dog,
            &rules(),
        );
        assert_eq!(alerts[0].id, "norepi_hypovolemia_black:norepinephrine");
        assert_eq!(alerts[0].score, 100);
        assert_eq!(alerts.last().map(|a| a.score), Some(10));
    }
}
