//! Public entry points of the CRIVET drug/comorbidity alert engine.
//!
//! [`get_drug_comorbidity_alerts`] evaluates a canonical request against the
//! built-in rule repository; [`get_alerts_for_legacy_system`] accepts the
//! older free-text calling convention and maps it first. Both share one
//! lazily built [`AlertService`]. Hosts that load extra YAML rule packs build
//! their own service with [`AlertService::from_config`].

pub mod config;
pub mod error;
pub mod legacy;
pub mod service;

pub use config::{AlertServiceConfig, OutputConfig, OutputFormat, RulesConfig};
pub use error::AlertsError;
pub use legacy::{
    LegacyComorbidity, LegacyRequest, map_comorbidity_to_keys, map_drug_id_to_drug_key,
    map_species,
};
pub use service::{
    AlertRequest, AlertService, default_service, get_alerts_for_legacy_system,
    get_drug_comorbidity_alerts,
};

pub use crivet_core::{
    Alert, ComorbidityKey, DrugKey, PartialPatientContext, PatientContext, SEVERITY_SCORES,
    Severity, Species,
};
pub use crivet_rules::{Rule, RuleEvaluationTrace};
