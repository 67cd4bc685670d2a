//! Adapter for the older calling convention.
//!
//! Legacy callers identify drugs by free text (Portuguese or English names),
//! describe comorbidities with four coarse labels and pass the species as a
//! string. Everything here is a lookup table: unknown input maps to `None` or
//! to an empty expansion, never to an error.

use crivet_core::{ComorbidityKey, DrugKey, PartialPatientContext, PatientContext, Species};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DRUG_SYNONYMS: &[(&str, DrugKey)] = &[
    ("lidocaina", DrugKey::Lidocaine),
    ("lidocaine", DrugKey::Lidocaine),
    ("norepinefrina", DrugKey::Norepinephrine),
    ("norepinephrine", DrugKey::Norepinephrine),
    ("vasopressina", DrugKey::Vasopressin),
    ("vasopressin", DrugKey::Vasopressin),
    ("dopamina", DrugKey::Dopamine),
    ("dopamine", DrugKey::Dopamine),
    ("dobutamina", DrugKey::Dobutamine),
    ("efedrina", DrugKey::Ephedrine),
    ("nitroprussiato", DrugKey::Nitroprusside),
    ("diltiazem", DrugKey::Diltiazem),
    ("esmolol", DrugKey::Esmolol),
    ("fentanil", DrugKey::Fentanyl),
    ("fentanyl", DrugKey::Fentanyl),
    ("remifentanil", DrugKey::Remifentanil),
    ("morfina", DrugKey::Morphine),
    ("morphine", DrugKey::Morphine),
    ("metadona", DrugKey::Methadone),
    ("methadone", DrugKey::Methadone),
    ("butorfanol", DrugKey::Butorphanol),
    ("butorphanol", DrugKey::Butorphanol),
    ("cetamina", DrugKey::Ketamine),
    ("ketamina", DrugKey::Ketamine),
    ("dexmedetomidina", DrugKey::Dexmedetomidine),
    ("dexmedetomidine", DrugKey::Dexmedetomidine),
    ("propofol", DrugKey::Propofol),
    ("metoclopramida", DrugKey::Metoclopramide),
    ("maropitant", DrugKey::Maropitant),
    ("enrofloxacina", DrugKey::Enrofloxacin),
    ("enrofloxacin", DrugKey::Enrofloxacin),
    ("ceftriaxona", DrugKey::Ceftriaxone),
    ("cefalexina", DrugKey::Cephalexin),
    ("cephalexin", DrugKey::Cephalexin),
    ("meropenem", DrugKey::Meropenem),
    ("clindamicina", DrugKey::Clindamycin),
    ("clindamycin", DrugKey::Clindamycin),
    ("metronidazol", DrugKey::Metronidazole),
    ("metronidazole", DrugKey::Metronidazole),
    ("mlk", DrugKey::Mlk),
    ("flk", DrugKey::Flk),
];

/// Resolve a legacy drug identifier, ignoring case.
///
/// Returns `None` for identifiers not in the synonym table.
pub fn map_drug_id_to_drug_key(drug_id: &str) -> Option<DrugKey> {
    let needle = drug_id.trim().to_lowercase();
    DRUG_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == needle)
        .map(|(_, key)| *key)
}

/// Coarse comorbidity categories of the legacy patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegacyComorbidity {
    Hepatopata,
    Renopata,
    Cardiopata,
    Endocrinopata,
}

impl LegacyComorbidity {
    pub const ALL: [Self; 4] = [
        Self::Hepatopata,
        Self::Renopata,
        Self::Cardiopata,
        Self::Endocrinopata,
    ];

    /// Return the label as written in legacy records (matches serde serialization).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hepatopata => "Hepatopata",
            Self::Renopata => "Renopata",
            Self::Cardiopata => "Cardiopata",
            Self::Endocrinopata => "Endocrinopata",
        }
    }

    /// Parse a legacy label, ignoring case.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(label))
    }

    /// Canonical keys this category expands to.
    ///
    /// `Renopata` is read as chronic kidney disease. `Endocrinopata` is too
    /// unspecific to drive any rule and expands to nothing.
    pub fn keys(self) -> &'static [ComorbidityKey] {
        match self {
            Self::Hepatopata => &[ComorbidityKey::HepaticDysfunction],
            Self::Renopata => &[ComorbidityKey::Ckd],
            Self::Cardiopata => &[ComorbidityKey::CardiacDisease],
            Self::Endocrinopata => &[],
        }
    }
}

/// Expand a legacy comorbidity label into canonical keys.
///
/// Unrecognised labels expand to an empty list.
pub fn map_comorbidity_to_keys(label: &str) -> Vec<ComorbidityKey> {
    match LegacyComorbidity::parse(label) {
        Some(category) => category.keys().to_vec(),
        None => {
            debug!(label, "unmapped legacy comorbidity");
            Vec::new()
        }
    }
}

/// Map the legacy species string: `dog` and `cat` (any case) map to
/// themselves, anything else to [`Species::Any`].
pub fn map_species(species: &str) -> Species {
    let species = species.trim();
    if species.eq_ignore_ascii_case("dog") {
        Species::Dog
    } else if species.eq_ignore_ascii_case("cat") {
        Species::Cat
    } else {
        Species::Any
    }
}

/// A request in the legacy calling convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRequest {
    pub drug_id: String,
    pub species: String,
    /// Legacy labels such as `"Cardiopata"`; unknown labels are ignored.
    #[serde(default)]
    pub comorbidities: Vec<String>,
    /// Known measurements. A species set here overrides `species`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctx: Option<PartialPatientContext>,
}

impl LegacyRequest {
    pub fn new(drug_id: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            drug_id: drug_id.into(),
            species: species.into(),
            comorbidities: Vec::new(),
            ctx: None,
        }
    }

    #[must_use]
    pub fn with_comorbidity(mut self, label: impl Into<String>) -> Self {
        self.comorbidities.push(label.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, ctx: PartialPatientContext) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Translate into canonical arguments.
    ///
    /// Returns `None` when the drug id is not in the synonym table.
    pub fn to_canonical(&self) -> Option<(DrugKey, Vec<ComorbidityKey>, PatientContext)> {
        let Some(drug) = map_drug_id_to_drug_key(&self.drug_id) else {
            warn!(drug_id = %self.drug_id, "unmapped legacy drug id, no alerts");
            return None;
        };
        let comorbidities = self
            .comorbidities
            .iter()
            .flat_map(|label| map_comorbidity_to_keys(label))
            .collect();
        let mut patient = PatientContext::new(map_species(&self.species));
        if let Some(partial) = &self.ctx {
            patient = patient.merged(partial);
        }
        Some((drug, comorbidities, patient))
    }
}
