use std::fmt;

use crivet_core::{ComorbidityKey, PatientContext};
use crivet_rules::EvalContext;

/// A patient context field a declarative condition can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextField {
    Map,
    Lactate,
    Creatinine,
    Alt,
    Alp,
    Albumin,
    OnVentilator,
}

impl ContextField {
    pub const ALL: [Self; 7] = [
        Self::Map,
        Self::Lactate,
        Self::Creatinine,
        Self::Alt,
        Self::Alp,
        Self::Albumin,
        Self::OnVentilator,
    ];

    /// Return the `snake_case` string representation (matches the rule file syntax).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Lactate => "lactate",
            Self::Creatinine => "creatinine",
            Self::Alt => "alt",
            Self::Alp => "alp",
            Self::Albumin => "albumin",
            Self::OnVentilator => "on_ventilator",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::OnVentilator)
    }

    fn numeric(self, patient: &PatientContext) -> Option<f64> {
        match self {
            Self::Map => patient.map,
            Self::Lactate => patient.lactate,
            Self::Creatinine => patient.creatinine,
            Self::Alt => patient.alt,
            Self::Alp => patient.alp,
            Self::Albumin => patient.albumin,
            Self::OnVentilator => None,
        }
    }

    fn is_known(self, patient: &PatientContext) -> bool {
        match self {
            Self::OnVentilator => patient.on_ventilator.is_some(),
            numeric => numeric.numeric(patient).is_some(),
        }
    }
}

impl fmt::Display for ContextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Lt => lhs < rhs,
            Self::Lte => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Gte => lhs >= rhs,
        }
    }
}

/// Compiled condition tree of a declarative rule.
///
/// Evaluation uses three-valued logic: a comparison on an unrecorded field
/// is *unknown*, `not` keeps it unknown, and a rule fires only when the whole
/// tree is definitely true. So negating a comparison never turns a missing
/// measurement into a match; test for absence with [`Condition::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Always(bool),
    Comorbidity(ComorbidityKey),
    ComorbiditiesAny(Vec<ComorbidityKey>),
    Compare {
        field: ContextField,
        op: CompareOp,
        value: f64,
    },
    Ventilator(bool),
    /// True when the field was not recorded.
    Unknown(ContextField),
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    /// Whether the condition definitely holds for `ctx`.
    pub fn holds(&self, ctx: &EvalContext<'_>) -> bool {
        self.eval(ctx) == Some(true)
    }

    /// Evaluate with `None` standing for "unknown".
    pub fn eval(&self, ctx: &EvalContext<'_>) -> Option<bool> {
        match self {
            Self::Always(value) => Some(*value),
            Self::Comorbidity(key) => Some(ctx.has(*key)),
            Self::ComorbiditiesAny(keys) => Some(ctx.has_any(keys)),
            Self::Compare { field, op, value } => field
                .numeric(ctx.patient)
                .map(|actual| op.apply(actual, *value)),
            Self::Ventilator(expected) => ctx.patient.on_ventilator.map(|on| on == *expected),
            Self::Unknown(field) => Some(!field.is_known(ctx.patient)),
            Self::All(conditions) => {
                let mut result = Some(true);
                for condition in conditions {
                    match condition.eval(ctx) {
                        Some(false) => return Some(false),
                        None => result = None,
                        Some(true) => {}
                    }
                }
                result
            }
            Self::Any(conditions) => {
                let mut result = Some(false);
                for condition in conditions {
                    match condition.eval(ctx) {
                        Some(true) => return Some(true),
                        None => result = None,
                        Some(false) => {}
                    }
                }
                result
            }
            Self::Not(inner) => inner.eval(ctx).map(|value| !value),
        }
    }
}
