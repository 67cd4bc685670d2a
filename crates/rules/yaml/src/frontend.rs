use std::path::Path;

use crivet_core::{ComorbidityKey, DrugScope, Severity, Species};
use crivet_rules::{Rule, RuleError, RuleFrontend, RuleSource};

use crate::condition::{CompareOp, Condition, ContextField};
use crate::parser::{YamlCondition, YamlFieldCheck, YamlRule, YamlRuleFile};
use crate::rule::DeclarativeRule;

/// A [`RuleFrontend`] implementation that parses YAML rule packs and compiles
/// them into [`DeclarativeRule`]s.
pub struct YamlFrontend;

impl RuleFrontend for YamlFrontend {
    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn parse(&self, content: &str) -> Result<Vec<Box<dyn Rule>>, RuleError> {
        let file: YamlRuleFile = serde_yaml_ng::from_str(content)
            .map_err(|e| RuleError::Parse(format!("YAML parse error: {e}")))?;

        compile_file(file, None)
    }

    fn parse_file(&self, path: &Path) -> Result<Vec<Box<dyn Rule>>, RuleError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RuleError::Parse(format!("cannot read {}: {e}", path.display())))?;

        let file: YamlRuleFile = serde_yaml_ng::from_str(&content).map_err(|e| {
            RuleError::Parse(format!("YAML parse error in {}: {e}", path.display()))
        })?;

        compile_file(file, Some(path))
    }
}

fn compile_file(file: YamlRuleFile, path: Option<&Path>) -> Result<Vec<Box<dyn Rule>>, RuleError> {
    file.rules
        .into_iter()
        .map(|yaml_rule| {
            compile_rule(yaml_rule, path).map(|rule| Box::new(rule) as Box<dyn Rule>)
        })
        .collect()
}

/// Compile a single `YamlRule` into a [`DeclarativeRule`].
pub fn compile_rule(yaml: YamlRule, file: Option<&Path>) -> Result<DeclarativeRule, RuleError> {
    if yaml.id.trim().is_empty() {
        return Err(RuleError::Parse("rule with empty id".into()));
    }

    let drug: DrugScope = yaml.drug.parse()?;
    let species = yaml
        .species
        .as_deref()
        .map(str::parse::<Species>)
        .transpose()?;
    let severity: Severity = yaml.alert.severity.parse()?;
    let condition = match &yaml.when {
        Some(when) => compile_condition(&yaml.id, when)?,
        None => Condition::Always(true),
    };

    Ok(DeclarativeRule {
        id: yaml.id,
        drug,
        species,
        condition,
        severity,
        title: yaml.alert.title,
        why: yaml.alert.why,
        do_action: yaml.alert.do_action,
        tags: yaml.alert.tags,
        source: RuleSource::Yaml {
            file: file.map(|p| p.display().to_string()),
        },
    })
}

/// Compile a `YamlCondition` into a [`Condition`].
fn compile_condition(rule: &str, cond: &YamlCondition) -> Result<Condition, RuleError> {
    match cond {
        YamlCondition::All(all) => Ok(Condition::All(compile_list(rule, &all.all)?)),
        YamlCondition::Any(any) => Ok(Condition::Any(compile_list(rule, &any.any)?)),
        YamlCondition::Not(not) => Ok(Condition::Not(Box::new(compile_condition(rule, &not.not)?))),
        YamlCondition::Always(always) => Ok(Condition::Always(always.always)),
        YamlCondition::Comorbidity(c) => Ok(Condition::Comorbidity(c.comorbidity.parse()?)),
        YamlCondition::ComorbiditiesAny(c) => {
            let keys = c
                .comorbidities_any
                .iter()
                .map(|key| key.parse::<ComorbidityKey>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Condition::ComorbiditiesAny(keys))
        }
        YamlCondition::Unknown(u) => Ok(Condition::Unknown(context_field(rule, &u.unknown)?)),
        YamlCondition::Field(check) => compile_field_check(rule, check),
    }
}

fn compile_list(rule: &str, conds: &[YamlCondition]) -> Result<Vec<Condition>, RuleError> {
    conds.iter().map(|c| compile_condition(rule, c)).collect()
}

fn context_field(rule: &str, name: &str) -> Result<ContextField, RuleError> {
    ContextField::parse(name).ok_or_else(|| RuleError::InvalidCondition {
        rule: rule.to_owned(),
        reason: format!("unknown context field `{name}`"),
    })
}

/// Compile a field check. Several operators are combined with logical AND.
fn compile_field_check(rule: &str, check: &YamlFieldCheck) -> Result<Condition, RuleError> {
    let field = context_field(rule, &check.field)?;
    let invalid = |reason: String| RuleError::InvalidCondition {
        rule: rule.to_owned(),
        reason,
    };

    if !field.is_numeric() {
        let has_numeric_op = [check.lt, check.lte, check.gt, check.gte]
            .iter()
            .any(Option::is_some);
        return match check.eq {
            Some(expected) if !has_numeric_op => Ok(Condition::Ventilator(expected)),
            Some(_) => Err(invalid(format!("`{field}` only supports `eq`"))),
            None => Err(invalid(format!("field check on `{field}` has no operator"))),
        };
    }

    if check.eq.is_some() {
        return Err(invalid(format!(
            "`eq` is not supported on numeric field `{field}`"
        )));
    }

    let mut checks: Vec<Condition> = [
        (CompareOp::Lt, check.lt),
        (CompareOp::Lte, check.lte),
        (CompareOp::Gt, check.gt),
        (CompareOp::Gte, check.gte),
    ]
    .into_iter()
    .filter_map(|(op, value)| value.map(|value| Condition::Compare { field, op, value }))
    .collect();

    match checks.len() {
        0 => Err(invalid(format!("field check on `{field}` has no operator"))),
        1 => Ok(checks.remove(0)),
        _ => Ok(Condition::All(checks)),
    }
}
