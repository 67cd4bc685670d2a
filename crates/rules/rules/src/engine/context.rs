use crivet_core::{ComorbidityKey, ComorbiditySet, DrugKey, PatientContext};

/// The input handed to every rule predicate and alert builder.
///
/// Borrowed from the caller for the duration of a single evaluation; rules
/// only ever read from it.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    /// The concrete drug being evaluated.
    pub drug: DrugKey,
    /// The patient's comorbidities, already coalesced into a set.
    pub comorbidities: &'a ComorbiditySet,
    /// Species and optional clinical measurements.
    pub patient: &'a PatientContext,
}

impl<'a> EvalContext<'a> {
    /// Create a new evaluation context.
    pub fn new(
        drug: DrugKey,
        comorbidities: &'a ComorbiditySet,
        patient: &'a PatientContext,
    ) -> Self {
        Self {
            drug,
            comorbidities,
            patient,
        }
    }

    /// Whether the patient has `key`.
    pub fn has(&self, key: ComorbidityKey) -> bool {
        self.comorbidities.contains(key)
    }

    /// Whether the patient has at least one of `keys`.
    pub fn has_any(&self, keys: &[ComorbidityKey]) -> bool {
        self.comorbidities.contains_any(keys)
    }
}
