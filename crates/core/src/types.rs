use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every member of the vocabulary, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the canonical identifier (matches serde serialization).
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(CoreError::UnknownKey {
                        kind: $kind,
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

closed_vocabulary! {
    /// Patient species. `Any` is a wildcard used by rules, and by legacy input
    /// that could not be resolved to a concrete species.
    Species, "species" {
        Dog => "dog",
        Cat => "cat",
        Any => "any",
    }
}

impl Species {
    /// Whether a rule scoped to `self` applies to a patient of `patient` species.
    #[must_use]
    pub fn admits(self, patient: Species) -> bool {
        self == Species::Any || self == patient
    }
}

closed_vocabulary! {
    /// Clinically meaningful conditions that drive alert rules.
    ComorbidityKey, "comorbidity" {
        HepaticDysfunction => "hepatic_dysfunction",
        PortosystemicShunt => "portosystemic_shunt",
        Hypoalbuminemia => "hypoalbuminemia",
        /// Chronic kidney disease.
        Ckd => "ckd",
        /// Acute kidney injury.
        Aki => "aki",
        CardiacDisease => "cardiac_disease",
        ArrhythmiaRisk => "arrhythmia_risk",
        RespDisease => "resp_disease",
        NeuroDisease => "neuro_disease",
        Sepsis => "sepsis",
        HypovolemiaUnresolved => "hypovolemia_unresolved",
        ShockDistributive => "shock_distributive",
        ShockCardiogenic => "shock_cardiogenic",
        ShockHypovolemic => "shock_hypovolemic",
        HeadTrauma => "head_trauma",
        /// Raised intracranial pressure.
        IncreasedIcp => "increased_icp",
        Pregnant => "pregnant",
        Neonate => "neonate",
    }
}

closed_vocabulary! {
    /// Concrete drug or named combination protocol.
    ///
    /// Identifiers are the catalogue keys used across the clinic's drug
    /// profiles, which is why some are in Portuguese (`dobutamina`).
    DrugKey, "drug" {
        Lidocaine => "lidocaine",
        Fentanyl => "fentanyl",
        Remifentanil => "remifentanil",
        Morphine => "morphine",
        Methadone => "methadone",
        Butorphanol => "butorphanol",
        Ketamine => "ketamine",
        Dexmedetomidine => "dexmedetomidine",
        Propofol => "propofol",
        /// Morphine + lidocaine + ketamine infusion.
        Mlk => "mlk",
        /// Fentanyl + lidocaine + ketamine infusion.
        Flk => "flk",
        Norepinephrine => "norepinephrine",
        Vasopressin => "vasopressin",
        Dopamine => "dopamine",
        Dobutamine => "dobutamina",
        Ephedrine => "efedrina",
        Nitroprusside => "nitroprussiato",
        Diltiazem => "diltiazem",
        Esmolol => "esmolol",
        Metoclopramide => "metoclopramida",
        Maropitant => "maropitant",
        Enrofloxacin => "enrofloxacina",
        Ceftriaxone => "ceftriaxona",
        Cephalexin => "cefalexina",
        Clindamycin => "clindamicina",
        Metronidazole => "metronidazol",
        Meropenem => "meropenem",
    }
}

/// The drugs a rule is attached to: every drug, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrugScope {
    /// Matches every drug.
    Any,
    /// Matches a single concrete drug.
    Only(DrugKey),
}

impl DrugScope {
    /// Whether a rule with this scope applies to `drug`.
    #[must_use]
    pub fn admits(self, drug: DrugKey) -> bool {
        match self {
            Self::Any => true,
            Self::Only(own) => own == drug,
        }
    }

    /// Return the scope identifier: `"any"` or the drug key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Only(drug) => drug.as_str(),
        }
    }
}

impl From<DrugKey> for DrugScope {
    fn from(drug: DrugKey) -> Self {
        Self::Only(drug)
    }
}

impl fmt::Display for DrugScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrugScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "any" {
            Ok(Self::Any)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl Serialize for DrugScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DrugScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
