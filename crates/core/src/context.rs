use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{ComorbidityKey, Species};

/// The set of a patient's active comorbidities.
///
/// Only membership matters: duplicates in the input are coalesced and the
/// iteration order is the vocabulary's declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComorbiditySet(BTreeSet<ComorbidityKey>);

impl ComorbiditySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: ComorbidityKey) -> bool {
        self.0.contains(&key)
    }

    /// Whether at least one of `keys` is present.
    pub fn contains_any(&self, keys: &[ComorbidityKey]) -> bool {
        keys.iter().any(|key| self.0.contains(key))
    }

    pub fn insert(&mut self, key: ComorbidityKey) -> bool {
        self.0.insert(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ComorbidityKey> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ComorbidityKey> for ComorbiditySet {
    fn from_iter<I: IntoIterator<Item = ComorbidityKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a ComorbidityKey> for ComorbiditySet {
    fn from_iter<I: IntoIterator<Item = &'a ComorbidityKey>>(iter: I) -> Self {
        Self(iter.into_iter().copied().collect())
    }
}

/// Clinical measurements for a single evaluation.
///
/// Only `species` is required. Every other field may be unknown, and an
/// unknown field never satisfies a clinical condition: the query helpers
/// below return `false` for it instead of assuming zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientContext {
    pub species: Species,
    /// Mean arterial pressure, mmHg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<f64>,
    /// Blood lactate, mmol/L.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lactate: Option<f64>,
    /// Serum creatinine, mg/dL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creatinine: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alp: Option<f64>,
    /// Serum albumin, g/dL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albumin: Option<f64>,
    #[serde(
        default,
        alias = "onVentilator",
        skip_serializing_if = "Option::is_none"
    )]
    pub on_ventilator: Option<bool>,
}

impl PatientContext {
    /// Create a context where only the species is known.
    #[must_use]
    pub fn new(species: Species) -> Self {
        Self {
            species,
            map: None,
            lactate: None,
            creatinine: None,
            alt: None,
            alp: None,
            albumin: None,
            on_ventilator: None,
        }
    }

    /// Set the mean arterial pressure (mmHg).
    #[must_use]
    pub fn with_map(mut self, map: f64) -> Self {
        self.map = Some(map);
        self
    }

    /// Set the blood lactate (mmol/L).
    #[must_use]
    pub fn with_lactate(mut self, lactate: f64) -> Self {
        self.lactate = Some(lactate);
        self
    }

    /// Set the serum creatinine (mg/dL).
    #[must_use]
    pub fn with_creatinine(mut self, creatinine: f64) -> Self {
        self.creatinine = Some(creatinine);
        self
    }

    /// Set the liver enzymes.
    #[must_use]
    pub fn with_liver_enzymes(mut self, alt: f64, alp: f64) -> Self {
        self.alt = Some(alt);
        self.alp = Some(alp);
        self
    }

    /// Set the serum albumin (g/dL).
    #[must_use]
    pub fn with_albumin(mut self, albumin: f64) -> Self {
        self.albumin = Some(albumin);
        self
    }

    /// Set the ventilator status.
    #[must_use]
    pub fn with_ventilator(mut self, on_ventilator: bool) -> Self {
        self.on_ventilator = Some(on_ventilator);
        self
    }

    /// `true` only when MAP is known and strictly below `threshold`.
    pub fn map_below(&self, threshold: f64) -> bool {
        self.map.is_some_and(|map| map < threshold)
    }

    /// `true` only when MAP is known and strictly above `threshold`.
    pub fn map_above(&self, threshold: f64) -> bool {
        self.map.is_some_and(|map| map > threshold)
    }

    /// `true` only when the patient is known to be on a ventilator.
    pub fn is_on_ventilator(&self) -> bool {
        self.on_ventilator == Some(true)
    }

    /// `true` only when the patient is known *not* to be on a ventilator.
    pub fn is_off_ventilator(&self) -> bool {
        self.on_ventilator == Some(false)
    }

    /// Whether at least one perfusion target (MAP or lactate) was recorded.
    pub fn has_perfusion_targets(&self) -> bool {
        self.map.is_some() || self.lactate.is_some()
    }

    /// Overlay the known fields of `partial` on top of this context.
    ///
    /// Fields present in `partial` win, including `species`.
    #[must_use]
    pub fn merged(mut self, partial: &PartialPatientContext) -> Self {
        if let Some(species) = partial.species {
            self.species = species;
        }
        self.map = partial.map.or(self.map);
        self.lactate = partial.lactate.or(self.lactate);
        self.creatinine = partial.creatinine.or(self.creatinine);
        self.alt = partial.alt.or(self.alt);
        self.alp = partial.alp.or(self.alp);
        self.albumin = partial.albumin.or(self.albumin);
        self.on_ventilator = partial.on_ventilator.or(self.on_ventilator);
        self
    }
}

/// A [`PatientContext`] in which even the species may be missing.
///
/// Used by callers that only hold a handful of measurements (the legacy
/// calling convention passes one of these alongside a separate species).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPatientContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lactate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creatinine: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albumin: Option<f64>,
    #[serde(
        default,
        alias = "onVentilator",
        skip_serializing_if = "Option::is_none"
    )]
    pub on_ventilator: Option<bool>,
}
