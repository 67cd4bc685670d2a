use std::sync::{Arc, OnceLock};

use crivet_core::{Alert, ComorbidityKey, DrugKey, PatientContext};
use crivet_rules::{
    RuleEvaluationTrace, RuleRepository, evaluate, evaluate_with_trace, load_directory,
};
use crivet_rules_clinical::build_rule_repository;
use crivet_rules_yaml::YamlFrontend;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::AlertServiceConfig;
use crate::error::AlertsError;
use crate::legacy::LegacyRequest;

/// One canonical evaluation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRequest {
    pub drug: DrugKey,
    #[serde(default)]
    pub comorbidities: Vec<ComorbidityKey>,
    pub patient: PatientContext,
}

impl AlertRequest {
    pub fn new(drug: DrugKey, comorbidities: Vec<ComorbidityKey>, patient: PatientContext) -> Self {
        Self {
            drug,
            comorbidities,
            patient,
        }
    }
}

/// Evaluates alert requests against an immutable rule repository.
///
/// Cloning is cheap: clones share the repository. The repository is never
/// mutated after construction, so a service can be used from any number of
/// threads without locking.
#[derive(Debug, Clone)]
pub struct AlertService {
    repository: Arc<RuleRepository>,
}

impl AlertService {
    pub fn new(repository: RuleRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// A service over the built-in clinical rules only.
    pub fn builtin() -> Self {
        Self::new(build_rule_repository())
    }

    /// Build the built-in rules, append the YAML packs from the configured
    /// directory and validate the result if requested.
    pub fn from_config(config: &AlertServiceConfig) -> Result<Self, AlertsError> {
        let mut repository = build_rule_repository();

        if let Some(directory) = &config.rules.directory {
            let groups = load_directory(directory, &[&YamlFrontend])?;
            info!(
                directory = %directory.display(),
                packs = groups.len(),
                "loaded rule packs"
            );
            for group in groups {
                repository.push_group(group);
            }
        }

        if config.rules.validate_on_load {
            repository.validate()?;
        }

        Ok(Self::new(repository))
    }

    pub fn repository(&self) -> &RuleRepository {
        &self.repository
    }

    /// Ranked, deduplicated alerts for `drug` given the patient's
    /// comorbidities and context.
    pub fn evaluate(
        &self,
        drug: DrugKey,
        comorbidities: &[ComorbidityKey],
        patient: &PatientContext,
    ) -> Vec<Alert> {
        evaluate(drug, comorbidities, patient, self.repository.rules())
    }

    /// Same as [`evaluate`](Self::evaluate), plus a per-rule trace.
    pub fn explain(
        &self,
        drug: DrugKey,
        comorbidities: &[ComorbidityKey],
        patient: &PatientContext,
    ) -> (Vec<Alert>, RuleEvaluationTrace) {
        evaluate_with_trace(drug, comorbidities, patient, self.repository.rules())
    }

    pub fn evaluate_request(&self, request: &AlertRequest) -> Vec<Alert> {
        self.evaluate(request.drug, &request.comorbidities, &request.patient)
    }

    /// Evaluate independent requests; output order equals input order.
    #[instrument(skip_all, fields(requests = requests.len()))]
    pub fn evaluate_batch(&self, requests: &[AlertRequest]) -> Vec<Vec<Alert>> {
        requests
            .iter()
            .map(|request| self.evaluate_request(request))
            .collect()
    }

    /// Evaluate a legacy request. Unmapped drug ids yield no alerts.
    pub fn evaluate_legacy(&self, request: &LegacyRequest) -> Vec<Alert> {
        match request.to_canonical() {
            Some((drug, comorbidities, patient)) => self.evaluate(drug, &comorbidities, &patient),
            None => Vec::new(),
        }
    }
}

static DEFAULT_SERVICE: OnceLock<AlertService> = OnceLock::new();

/// The process-wide service over the built-in rules, built on first use.
pub fn default_service() -> &'static AlertService {
    DEFAULT_SERVICE.get_or_init(AlertService::builtin)
}

/// Canonical entry point: alerts for `drug` using every built-in rule.
pub fn get_drug_comorbidity_alerts(
    drug: DrugKey,
    comorbidities: &[ComorbidityKey],
    ctx: &PatientContext,
) -> Vec<Alert> {
    default_service().evaluate(drug, comorbidities, ctx)
}

/// Legacy entry point, see [`LegacyRequest`].
pub fn get_alerts_for_legacy_system(request: &LegacyRequest) -> Vec<Alert> {
    default_service().evaluate_legacy(request)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crivet_core::Species;

    use super::*;
    use crate::config::RulesConfig;

    const EXTRA_PACK: &str = r"
rules:
  - id: metronidazole_neonate_yellow
    drug: metronidazol
    when:
      comorbidity: neonate
    alert:
      severity: yellow
      title: Neonato + Metronidazol
      why: Metabolismo hepático imaturo.
      do: Reduzir dose e monitorar sinais neurológicos.
";

    fn config_for(directory: &std::path::Path, validate: bool) -> AlertServiceConfig {
        AlertServiceConfig {
            rules: RulesConfig {
                directory: Some(directory.to_path_buf()),
                validate_on_load: validate,
            },
            ..AlertServiceConfig::default()
        }
    }

    #[test]
    fn default_config_matches_builtin() {
        let service = AlertService::from_config(&AlertServiceConfig::default()).unwrap();
        assert_eq!(
            service.repository().fingerprint(),
            AlertService::builtin().repository().fingerprint()
        );
    }

    #[test]
    fn packs_extend_builtin_rules() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("neonate.yaml"), EXTRA_PACK).unwrap();

        let service = AlertService::from_config(&config_for(dir.path(), true)).unwrap();
        assert_eq!(
            service.repository().len(),
            AlertService::builtin().repository().len() + 1
        );

        let alerts = service.evaluate(
            DrugKey::Metronidazole,
            &[ComorbidityKey::Neonate],
            &PatientContext::new(Species::Dog),
        );
        assert!(
            alerts
                .iter()
                .any(|a| a.id == "metronidazole_neonate_yellow:metronidazol")
        );
    }

    #[test]
    fn duplicate_pack_rejected_only_when_validating() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.yaml"), EXTRA_PACK).unwrap();
        fs::write(dir.path().join("b.yaml"), EXTRA_PACK).unwrap();

        let err = AlertService::from_config(&config_for(dir.path(), true)).unwrap_err();
        assert!(matches!(err, AlertsError::Rules(_)), "{err}");

        assert!(AlertService::from_config(&config_for(dir.path(), false)).is_ok());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(AlertService::from_config(&config_for(&missing, true)).is_err());
    }

    #[test]
    fn batch_preserves_order() {
        let service = AlertService::builtin();
        let requests = vec![
            AlertRequest::new(DrugKey::Lidocaine, Vec::new(), PatientContext::new(Species::Cat)),
            AlertRequest::new(DrugKey::Meropenem, Vec::new(), PatientContext::new(Species::Dog)),
            AlertRequest::new(
                DrugKey::Propofol,
                vec![ComorbidityKey::HypovolemiaUnresolved],
                PatientContext::new(Species::Dog),
            ),
        ];

        let results = service.evaluate_batch(&requests);
        assert_eq!(results.len(), requests.len());
        for (request, alerts) in requests.iter().zip(&results) {
            assert_eq!(*alerts, service.evaluate_request(request));
        }
    }

    #[test]
    fn clones_share_repository() {
        let service = AlertService::builtin();
        let clone = service.clone();
        assert!(std::ptr::eq(service.repository(), clone.repository()));
    }

    #[test]
    fn service_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AlertService>();
    }

    #[test]
    fn explain_agrees_with_evaluate() {
        let service = AlertService::builtin();
        let patient = PatientContext::new(Species::Dog).with_map(55.0);
        let (alerts, trace) =
            service.explain(DrugKey::Norepinephrine, &[ComorbidityKey::Sepsis], &patient);
        assert_eq!(
            alerts,
            service.evaluate(DrugKey::Norepinephrine, &[ComorbidityKey::Sepsis], &patient)
        );
        assert_eq!(trace.drug, DrugKey::Norepinephrine);
    }
}
