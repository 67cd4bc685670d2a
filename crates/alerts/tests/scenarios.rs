use std::cmp::Ordering;

use crivet_alerts::{
    AlertRequest, AlertService, ComorbidityKey, DrugKey, LegacyRequest, PartialPatientContext,
    PatientContext, Severity, Species, get_alerts_for_legacy_system, get_drug_comorbidity_alerts,
};
use crivet_rules::compare_titles;
use proptest::prelude::*;

#[test]
fn lidocaine_in_cats_is_red() {
    let cat = PatientContext::new(Species::Cat);
    let alerts = get_drug_comorbidity_alerts(DrugKey::Lidocaine, &[], &cat);
    let cat_alert = alerts
        .iter()
        .find(|a| a.id.ends_with(":lidocaine") && a.severity == Severity::Red)
        .expect("cat lidocaine alert");
    assert_eq!(cat_alert.score, 85);
}

#[test]
fn propofol_with_unresolved_hypovolemia_ranks_black_first() {
    let alerts = get_drug_comorbidity_alerts(
        DrugKey::Propofol,
        &[ComorbidityKey::HypovolemiaUnresolved],
        &PatientContext::new(Species::Dog),
    );
    let first = alerts.first().expect("at least one alert");
    assert_eq!(first.severity, Severity::Black);
    assert_eq!(first.score, 100);
}

#[test]
fn ventilated_dog_gets_no_opioid_respiratory_alert() {
    let ventilated = PatientContext::new(Species::Dog).with_ventilator(true);
    let alerts = get_drug_comorbidity_alerts(DrugKey::Fentanyl, &[], &ventilated);
    assert!(
        alerts
            .iter()
            .all(|a| a.id != "opioid_resp_disease_fentanyl:fentanyl"),
        "{alerts:#?}"
    );

    let breathing = PatientContext::new(Species::Dog).with_ventilator(false);
    let alerts = get_drug_comorbidity_alerts(DrugKey::Fentanyl, &[], &breathing);
    assert!(
        alerts
            .iter()
            .any(|a| a.id == "opioid_resp_disease_fentanyl:fentanyl")
    );
}

#[test]
fn esmolol_map_threshold_is_strict() {
    let at_threshold = PatientContext::new(Species::Dog).with_map(65.0);
    let alerts = get_drug_comorbidity_alerts(DrugKey::Esmolol, &[], &at_threshold);
    assert!(alerts.iter().all(|a| a.severity != Severity::Black), "{alerts:#?}");

    let below = PatientContext::new(Species::Dog).with_map(64.0);
    let alerts = get_drug_comorbidity_alerts(DrugKey::Esmolol, &[], &below);
    assert_eq!(alerts[0].severity, Severity::Black);
}

#[test]
fn legacy_request_equals_canonical_call() {
    let legacy = get_alerts_for_legacy_system(
        &LegacyRequest::new("cetamina", "cat").with_comorbidity("Cardiopata"),
    );
    let canonical = get_drug_comorbidity_alerts(
        DrugKey::Ketamine,
        &[ComorbidityKey::CardiacDisease],
        &PatientContext::new(Species::Cat),
    );
    assert!(!canonical.is_empty());
    assert_eq!(legacy, canonical);
}

#[test]
fn unknown_legacy_drug_yields_nothing() {
    let alerts = get_alerts_for_legacy_system(
        &LegacyRequest::new("dipirona", "dog").with_comorbidity("Renopata"),
    );
    assert!(alerts.is_empty());
}

#[test]
fn legacy_partial_context_is_applied() {
    let request = LegacyRequest::new("norepinefrina", "dog").with_context(PartialPatientContext {
        map: Some(50.0),
        ..PartialPatientContext::default()
    });
    let legacy = get_alerts_for_legacy_system(&request);
    let canonical = get_drug_comorbidity_alerts(
        DrugKey::Norepinephrine,
        &[],
        &PatientContext::new(Species::Dog).with_map(50.0),
    );
    assert_eq!(legacy, canonical);
}

#[test]
fn alerts_serialize_with_do_field() {
    let cat = PatientContext::new(Species::Cat);
    let alerts = get_drug_comorbidity_alerts(DrugKey::Lidocaine, &[], &cat);
    let json = serde_json::to_value(&alerts).unwrap();
    let first = &json[0];
    assert!(first.get("do").is_some());
    assert!(first.get("do_action").is_none());
    assert_eq!(first["severity"], "red");
}

#[test]
fn batch_requests_round_trip_through_json() {
    let json = r#"[
        {"drug": "propofol", "comorbidities": ["sepsis"], "patient": {"species": "dog", "map": 58}},
        {"drug": "meropenem", "patient": {"species": "cat"}}
    ]"#;
    let requests: Vec<AlertRequest> = serde_json::from_str(json).unwrap();
    let service = AlertService::builtin();
    let results = service.evaluate_batch(&requests);
    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0],
        get_drug_comorbidity_alerts(
            DrugKey::Propofol,
            &[ComorbidityKey::Sepsis],
            &PatientContext::new(Species::Dog).with_map(58.0),
        )
    );
}

fn species() -> impl Strategy<Value = Species> {
    prop::sample::select(Species::ALL.to_vec())
}

fn drug() -> impl Strategy<Value = DrugKey> {
    prop::sample::select(DrugKey::ALL.to_vec())
}

fn comorbidities() -> impl Strategy<Value = Vec<ComorbidityKey>> {
    prop::collection::vec(prop::sample::select(ComorbidityKey::ALL.to_vec()), 0..6)
}

fn patient() -> impl Strategy<Value = PatientContext> {
    (
        species(),
        prop::option::of(20.0..160.0f64),
        prop::option::of(0.5..12.0f64),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(species, map, lactate, on_ventilator)| PatientContext {
            map,
            lactate,
            on_ventilator,
            ..PatientContext::new(species)
        })
}

proptest! {
    #[test]
    fn output_is_ranked_and_unique(drug in drug(), keys in comorbidities(), patient in patient()) {
        let alerts = get_drug_comorbidity_alerts(drug, &keys, &patient);
        for pair in alerts.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert_ne!(compare_titles(&pair[0].title, &pair[1].title), Ordering::Greater);
            }
        }
        let mut ids: Vec<_> = alerts.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), alerts.len());
    }

    #[test]
    fn legacy_synonyms_match_canonical(drug in drug(), patient in patient()) {
        let species = match patient.species {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Any => "ferret",
        };
        let request = LegacyRequest::new(drug.as_str().to_uppercase(), species).with_context(
            PartialPatientContext {
                map: patient.map,
                lactate: patient.lactate,
                on_ventilator: patient.on_ventilator,
                ..PartialPatientContext::default()
            },
        );
        prop_assert_eq!(
            get_alerts_for_legacy_system(&request),
            get_drug_comorbidity_alerts(drug, &[], &patient)
        );
    }
}
