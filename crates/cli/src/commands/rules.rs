use clap::{Args, Subcommand};
use crivet_alerts::AlertService;
use crivet_core::{DrugKey, DrugScope, Species};
use crivet_rules::Rule;
use serde::Serialize;

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    /// List loaded rules.
    List {
        /// Only rules that apply to this drug.
        #[arg(long)]
        drug: Option<DrugKey>,
    },
    /// Report rules for the same drug that share an id.
    Validate,
}

#[derive(Serialize)]
struct RuleSummary<'a> {
    id: &'a str,
    drug: DrugScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    species: Option<Species>,
    source: String,
}

impl<'a> RuleSummary<'a> {
    fn of(rule: &'a dyn Rule) -> Self {
        Self {
            id: rule.id(),
            drug: rule.drug(),
            species: rule.species(),
            source: rule.source().to_string(),
        }
    }
}

pub fn run(service: &AlertService, args: &RulesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let repository = service.repository();
    match &args.command {
        RulesCommand::List { drug } => {
            let rules: Vec<RuleSummary<'_>> = match drug {
                Some(drug) => repository.rules_for(*drug).map(RuleSummary::of).collect(),
                None => repository
                    .rules()
                    .iter()
                    .map(|rule| RuleSummary::of(&**rule))
                    .collect(),
            };
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&rules)?);
                }
                OutputFormat::Text => {
                    println!(
                        "{} rules loaded in {} groups:",
                        rules.len(),
                        repository.groups().len()
                    );
                    for rule in &rules {
                        let species = rule.species.map_or("any", Species::as_str);
                        println!(
                            "  {id} [{drug}/{species}] ({source})",
                            id = rule.id,
                            drug = rule.drug,
                            source = rule.source,
                        );
                    }
                }
            }
        }
        RulesCommand::Validate => {
            let duplicates = repository.duplicate_ids();
            match format {
                OutputFormat::Json => {
                    let report: Vec<_> = duplicates
                        .iter()
                        .map(|(drug, id)| serde_json::json!({ "drug": drug, "id": id }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Text => {
                    for (drug, id) in &duplicates {
                        println!("duplicate rule id `{id}` for drug {drug}");
                    }
                }
            }
            if !duplicates.is_empty() {
                anyhow::bail!("{} duplicate rule id(s)", duplicates.len());
            }
            if format == OutputFormat::Text {
                println!(
                    "{} rules in {} groups are valid (fingerprint {:016x}).",
                    repository.len(),
                    repository.groups().len(),
                    repository.fingerprint()
                );
            }
        }
    }
    Ok(())
}
