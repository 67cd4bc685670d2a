//! Built-in clinical rule content.
//!
//! One module per drug or drug family, grouped by therapeutic class. Each
//! module exposes `rules()`; [`rule_groups`] lists them in a fixed order and
//! [`build_rule_repository`] concatenates them into the repository the alert
//! service evaluates.

pub mod abx;
pub mod anesthetics;
pub mod cardio;
pub mod gi;
mod predicates;

use crivet_rules::{Rule, RuleGroup, RuleRepository};

pub use cardio::global_vasoactive::VASOACTIVES;

type RuleSet = fn() -> Vec<Box<dyn Rule>>;

const GROUPS: &[(&str, RuleSet)] = &[
    ("lidocaine", anesthetics::lidocaine::rules),
    ("opioids", anesthetics::opioids::rules),
    ("propofol", anesthetics::propofol::rules),
    ("dexmedetomidine", anesthetics::dexmedetomidine::rules),
    ("ketamine", anesthetics::ketamine::rules),
    ("combos", anesthetics::combos::rules),
    ("norepinephrine", cardio::norepinephrine::rules),
    ("vasopressin", cardio::vasopressin::rules),
    ("dopamine", cardio::dopamine::rules),
    ("dobutamine", cardio::dobutamine::rules),
    ("ephedrine", cardio::ephedrine::rules),
    ("nitroprusside", cardio::nitroprusside::rules),
    ("diltiazem", cardio::diltiazem::rules),
    ("esmolol", cardio::esmolol::rules),
    ("global_vasoactive", cardio::global_vasoactive::rules),
    ("metoclopramide", gi::metoclopramide::rules),
    ("maropitant", gi::maropitant::rules),
    ("ceftriaxone", abx::ceftriaxone::rules),
    ("meropenem", abx::meropenem::rules),
    ("enrofloxacin", abx::enrofloxacin::rules),
    ("cephalexin", abx::cephalexin::rules),
    ("clindamycin", abx::clindamycin::rules),
    ("metronidazole", abx::metronidazole::rules),
];

/// Every built-in rule group, in the canonical concatenation order.
pub fn rule_groups() -> Vec<RuleGroup> {
    GROUPS
        .iter()
        .map(|(name, rules)| RuleGroup::new(*name, rules()))
        .collect()
}

/// Build the repository holding every built-in rule.
pub fn build_rule_repository() -> RuleRepository {
    RuleRepository::new(rule_groups())
}
