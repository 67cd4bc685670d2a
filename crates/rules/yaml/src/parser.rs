use serde::Deserialize;

/// Top-level YAML rule file containing a list of rules.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlRuleFile {
    /// The list of rules defined in this file.
    pub rules: Vec<YamlRule>,
}

/// A single rule as represented in YAML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlRule {
    /// Base identifier; alert ids are `"{id}:{drug}"`.
    pub id: String,
    /// A drug key, or `any`.
    pub drug: String,
    /// Optional species restriction: `dog`, `cat` or `any`.
    pub species: Option<String>,
    /// The condition that must hold for the rule to fire. Absent means always.
    pub when: Option<YamlCondition>,
    /// The alert raised when the rule fires.
    pub alert: YamlAlert,
}

/// Alert text and severity.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlAlert {
    pub severity: String,
    pub title: String,
    pub why: String,
    #[serde(rename = "do")]
    pub do_action: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A condition tree.
///
/// Every shape is a single-purpose mapping; unknown keys in any of them make
/// the rule file fail to parse.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum YamlCondition {
    /// All sub-conditions must hold (logical AND).
    All(YamlAll),
    /// At least one sub-condition must hold (logical OR).
    Any(YamlAny),
    /// Negation.
    Not(YamlNot),
    /// Constant condition.
    Always(YamlAlways),
    /// The patient has a comorbidity.
    Comorbidity(YamlComorbidity),
    /// The patient has at least one of several comorbidities.
    ComorbiditiesAny(YamlComorbiditiesAny),
    /// A context field was not recorded.
    Unknown(YamlUnknown),
    /// Compare a context field.
    Field(YamlFieldCheck),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlAll {
    pub all: Vec<YamlCondition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlAny {
    pub any: Vec<YamlCondition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlNot {
    pub not: Box<YamlCondition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlAlways {
    pub always: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlComorbidity {
    pub comorbidity: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlComorbiditiesAny {
    pub comorbidities_any: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlUnknown {
    pub unknown: String,
}

/// Comparison against a patient context field.
///
/// Several operators may be set at once; they are combined with logical AND
/// during compilation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlFieldCheck {
    /// Context field name (e.g. `map`, `albumin`, `on_ventilator`).
    pub field: String,
    /// Equality, only for boolean fields.
    pub eq: Option<bool>,
    pub lt: Option<f64>,
    pub lte: Option<f64>,
    pub gt: Option<f64>,
    pub gte: Option<f64>,
}
