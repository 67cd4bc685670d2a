use clap::Args;
use crivet_alerts::AlertService;
use crivet_core::{ComorbidityKey, DrugKey, PartialPatientContext, PatientContext, Species};

use crate::OutputFormat;
use crate::output::print_alerts;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Drug key (e.g. `propofol`, `dobutamina`).
    #[arg(long)]
    pub drug: DrugKey,
    /// Patient species.
    #[arg(long)]
    pub species: Species,
    /// Comorbidity key; repeat for several.
    #[arg(long = "comorbidity")]
    pub comorbidities: Vec<ComorbidityKey>,
    #[command(flatten)]
    pub measurements: MeasurementArgs,
}

impl CheckArgs {
    pub fn patient(&self) -> PatientContext {
        PatientContext::new(self.species).merged(&self.measurements.to_partial())
    }
}

/// Optional clinical measurements. Omitted values stay unknown.
#[derive(Args, Debug, Default)]
pub struct MeasurementArgs {
    /// Mean arterial pressure (mmHg).
    #[arg(long)]
    pub map: Option<f64>,
    /// Blood lactate (mmol/L).
    #[arg(long)]
    pub lactate: Option<f64>,
    /// Serum creatinine (mg/dL).
    #[arg(long)]
    pub creatinine: Option<f64>,
    #[arg(long)]
    pub alt: Option<f64>,
    #[arg(long)]
    pub alp: Option<f64>,
    /// Serum albumin (g/dL).
    #[arg(long)]
    pub albumin: Option<f64>,
    /// Whether the patient is mechanically ventilated.
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub on_ventilator: Option<bool>,
}

impl MeasurementArgs {
    pub fn to_partial(&self) -> PartialPatientContext {
        PartialPatientContext {
            species: None,
            map: self.map,
            lactate: self.lactate,
            creatinine: self.creatinine,
            alt: self.alt,
            alp: self.alp,
            albumin: self.albumin,
            on_ventilator: self.on_ventilator,
        }
    }
}

pub fn run(service: &AlertService, args: &CheckArgs, format: OutputFormat) -> anyhow::Result<()> {
    let alerts = service.evaluate(args.drug, &args.comorbidities, &args.patient());
    print_alerts(&alerts, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurements_build_patient() {
        let args = CheckArgs {
            drug: DrugKey::Propofol,
            species: Species::Cat,
            comorbidities: Vec::new(),
            measurements: MeasurementArgs {
                map: Some(55.0),
                on_ventilator: Some(true),
                ..MeasurementArgs::default()
            },
        };
        let patient = args.patient();
        assert_eq!(patient.species, Species::Cat);
        assert_eq!(patient.map, Some(55.0));
        assert!(patient.is_on_ventilator());
        assert!(patient.lactate.is_none());
    }
}
