use criterion::{Criterion, black_box, criterion_group, criterion_main};

use crivet_alerts::{
    AlertRequest, AlertService, ComorbidityKey, DrugKey, LegacyRequest, PatientContext, Species,
};

fn bench_single_drug(c: &mut Criterion) {
    let service = AlertService::builtin();
    let patient = PatientContext::new(Species::Dog)
        .with_map(58.0)
        .with_lactate(4.2);
    let comorbidities = [ComorbidityKey::Sepsis, ComorbidityKey::Ckd];

    c.bench_function("evaluate_propofol_septic_dog", |b| {
        b.iter(|| {
            let alerts = service.evaluate(
                black_box(DrugKey::Propofol),
                black_box(&comorbidities),
                black_box(&patient),
            );
            black_box(alerts)
        });
    });
}

fn bench_explain(c: &mut Criterion) {
    let service = AlertService::builtin();
    let patient = PatientContext::new(Species::Cat).with_map(55.0);

    c.bench_function("explain_norepinephrine_cat", |b| {
        b.iter(|| {
            let result = service.explain(
                black_box(DrugKey::Norepinephrine),
                black_box(&[ComorbidityKey::ShockDistributive]),
                black_box(&patient),
            );
            black_box(result)
        });
    });
}

fn bench_every_drug(c: &mut Criterion) {
    let service = AlertService::builtin();
    let requests: Vec<AlertRequest> = DrugKey::ALL
        .iter()
        .map(|drug| {
            AlertRequest::new(
                *drug,
                vec![ComorbidityKey::HepaticDysfunction, ComorbidityKey::CardiacDisease],
                PatientContext::new(Species::Dog).with_ventilator(false),
            )
        })
        .collect();

    c.bench_function("evaluate_batch_all_drugs", |b| {
        b.iter(|| black_box(service.evaluate_batch(black_box(&requests))));
    });
}

fn bench_legacy(c: &mut Criterion) {
    let service = AlertService::builtin();
    let request = LegacyRequest::new("Fentanil", "dog")
        .with_comorbidity("Renopata")
        .with_comorbidity("Cardiopata");

    c.bench_function("evaluate_legacy_fentanil", |b| {
        b.iter(|| black_box(service.evaluate_legacy(black_box(&request))));
    });
}

criterion_group!(
    benches,
    bench_single_drug,
    bench_explain,
    bench_every_drug,
    bench_legacy
);
criterion_main!(benches);
