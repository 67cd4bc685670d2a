use crivet_alerts::AlertService;
use crivet_rules::RuleTraceResult;
use serde::Serialize;

use crate::OutputFormat;
use crate::commands::check::CheckArgs;
use crate::output::format_alert;

#[derive(Serialize)]
struct Explanation<'a> {
    alerts: &'a [crivet_core::Alert],
    trace: &'a crivet_rules::RuleEvaluationTrace,
}

pub fn run(service: &AlertService, args: &CheckArgs, format: OutputFormat) -> anyhow::Result<()> {
    let (alerts, trace) = service.explain(args.drug, &args.comorbidities, &args.patient());

    match format {
        OutputFormat::Json => {
            let explanation = Explanation {
                alerts: &alerts,
                trace: &trace,
            };
            println!("{}", serde_json::to_string_pretty(&explanation)?);
        }
        OutputFormat::Text => {
            println!(
                "{drug} ({species}): {evaluated} rules evaluated, {matched} matched, \
                 {skipped} skipped, {collapsed} duplicates collapsed in {us}us",
                drug = trace.drug,
                species = trace.species,
                evaluated = trace.total_rules_evaluated,
                matched = trace.total_rules_matched,
                skipped = trace.total_rules_skipped,
                collapsed = trace.duplicates_collapsed,
                us = trace.evaluation_duration_us,
            );
            for entry in trace
                .trace
                .iter()
                .filter(|entry| entry.result != RuleTraceResult::SkippedDrug)
            {
                println!(
                    "  {result:<15} {id} [{scope}] ({source})",
                    result = entry.result.as_str(),
                    id = entry.rule_id,
                    scope = entry.drug,
                    source = entry.source,
                );
            }
            println!();
            if alerts.is_empty() {
                println!("No alerts.");
            }
            for alert in &alerts {
                println!("{}", format_alert(alert));
            }
        }
    }

    Ok(())
}
