use clap::Args;
use crivet_alerts::{AlertService, LegacyRequest, map_drug_id_to_drug_key};

use crate::OutputFormat;
use crate::commands::check::MeasurementArgs;
use crate::output::print_alerts;

#[derive(Args, Debug)]
pub struct LegacyArgs {
    /// Free-text drug identifier (e.g. `cetamina`, `Fentanil`).
    #[arg(long)]
    pub drug_id: String,
    /// Legacy species (`dog` or `cat`; anything else means any species).
    #[arg(long)]
    pub species: String,
    /// Legacy comorbidity label (e.g. `Cardiopata`); repeat for several.
    #[arg(long = "comorbidity")]
    pub comorbidities: Vec<String>,
    #[command(flatten)]
    pub measurements: MeasurementArgs,
}

impl LegacyArgs {
    fn request(&self) -> LegacyRequest {
        LegacyRequest {
            drug_id: self.drug_id.clone(),
            species: self.species.clone(),
            comorbidities: self.comorbidities.clone(),
            ctx: Some(self.measurements.to_partial()),
        }
    }
}

pub fn run(service: &AlertService, args: &LegacyArgs, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Text && map_drug_id_to_drug_key(&args.drug_id).is_none() {
        eprintln!("Unmapped drug id '{}'.", args.drug_id);
    }
    let alerts = service.evaluate_legacy(&args.request());
    print_alerts(&alerts, format)
}
