//! Rule-table validation for request payloads.
//!
//! A schema is a static list of [`FieldRule`]s. Payloads are handed over as
//! `(field, value)` pairs so every request type validates the same way, and
//! the first violated rule is reported with its field name.

use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present and not blank.
    Required,
    /// Blank is rejected when present; absence is fine.
    NotBlank,
    /// At most this many characters.
    MaxLen(usize),
    /// Syntactically an email address.
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

impl FieldRule {
    pub const fn new(field: &'static str, rules: &'static [Rule]) -> Self {
        Self { field, rules }
    }
}

/// Check `input` against `schema`. Fields missing from `input` are treated
/// as absent.
pub fn validate(schema: &[FieldRule], input: &[(&str, Option<&str>)]) -> Result<(), ServiceError> {
    for rule in schema {
        let value = input
            .iter()
            .find(|(name, _)| *name == rule.field)
            .and_then(|(_, v)| *v);
        check_field(rule.field, value, rule.rules)?;
    }
    Ok(())
}

fn check_field(field: &str, value: Option<&str>, rules: &[Rule]) -> Result<(), ServiceError> {
    for rule in rules {
        match (*rule, value) {
            (Rule::Required, None) => return Err(invalid(field, "is required")),
            (Rule::Required | Rule::NotBlank, Some(v)) if v.trim().is_empty() => {
                return Err(invalid(field, "must not be empty"))
            }
            (Rule::MaxLen(max), Some(v)) if v.chars().count() > max => {
                return Err(invalid(field, &format!("must be at most {max} characters")))
            }
            (Rule::Email, Some(v)) if !is_email(v) => return Err(invalid(field, "must be a valid email")),
            _ => {}
        }
    }
    Ok(())
}

fn invalid(field: &str, msg: &str) -> ServiceError {
    ServiceError::Validation(format!("{field} {msg}"))
}

pub fn is_email(v: &str) -> bool {
    if v.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = v.split_once('@') else { return false };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
