use std::fmt;

use bson::oid::ObjectId;

/// One failed constraint on one request field. A request collects all of
/// them before anything reaches a use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub constraint: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.constraint)
    }
}

pub fn invalid_input_message(violations: &[FieldViolation]) -> String {
    let parts: Vec<String> = violations.iter().map(ToString::to_string).collect();
    format!("Invalid input: {}", parts.join(", "))
}

/// Records a violation when the field is absent, passing the value through
/// either way so the remaining checks still run.
pub(crate) fn required<T>(
    value: Option<T>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    if value.is_none() {
        violations.push(FieldViolation {
            field,
            constraint: "is required".to_string(),
        });
    }
    value
}

pub(crate) fn check_length(
    value: &str,
    field: &'static str,
    min: usize,
    max: usize,
    violations: &mut Vec<FieldViolation>,
) {
    let length = value.chars().count();
    if length < min || length > max {
        violations.push(FieldViolation {
            field,
            constraint: format!("must be between {min} and {max} characters"),
        });
    }
}

// The negated comparison also catches NaN, which `value < 0.0` would let
// through.
pub(crate) fn check_non_negative(
    value: f64,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) {
    if !(value >= 0.0) {
        violations.push(FieldViolation {
            field,
            constraint: "must be greater than or equal to zero".to_string(),
        });
    }
}

/// Store identifier format gate for path parameters, checked before body
/// validation and before any use case runs.
pub(crate) fn parse_object_id(raw: &str, field: &'static str) -> Result<ObjectId, FieldViolation> {
    ObjectId::parse_str(raw).map_err(|_| FieldViolation {
        field,
        constraint: "must be a 24-character hex identifier".to_string(),
    })
}
