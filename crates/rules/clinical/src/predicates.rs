//! Comorbidity families shared by several drug groups.
//!
//! Rule conditions test these with [`EvalContext::has_any`](crivet_rules::EvalContext::has_any).

use crivet_core::ComorbidityKey;

/// Reduced hepatic clearance.
pub const HEPATIC: &[ComorbidityKey] = &[
    ComorbidityKey::HepaticDysfunction,
    ComorbidityKey::PortosystemicShunt,
];

/// Chronic or acute renal impairment.
pub const RENAL: &[ComorbidityKey] = &[ComorbidityKey::Ckd, ComorbidityKey::Aki];

/// Structural heart disease or an arrhythmogenic substrate.
pub const CARDIAC: &[ComorbidityKey] = &[
    ComorbidityKey::CardiacDisease,
    ComorbidityKey::ArrhythmiaRisk,
];

pub const HYPOVOLEMIA: &[ComorbidityKey] = &[
    ComorbidityKey::HypovolemiaUnresolved,
    ComorbidityKey::ShockHypovolemic,
];

/// Hypovolemia or a shock state with low cardiac output.
pub const LOW_VOLUME_SHOCK: &[ComorbidityKey] = &[
    ComorbidityKey::HypovolemiaUnresolved,
    ComorbidityKey::ShockHypovolemic,
    ComorbidityKey::ShockCardiogenic,
];

/// Vasoplegic states.
pub const DISTRIBUTIVE: &[ComorbidityKey] = &[
    ComorbidityKey::ShockDistributive,
    ComorbidityKey::Sepsis,
];

pub const NEUROLOGIC: &[ComorbidityKey] = &[
    ComorbidityKey::NeuroDisease,
    ComorbidityKey::HeadTrauma,
];

/// Raised or at-risk intracranial pressure.
pub const INTRACRANIAL: &[ComorbidityKey] = &[
    ComorbidityKey::IncreasedIcp,
    ComorbidityKey::HeadTrauma,
];
