//! Declarative per-entity field schemas and the generic validator.
//!
//! Each entity declares a constraint table of [`FieldSpec`]s (field name,
//! coercion kind, error message) and hands it to [`validate`], which walks the
//! raw submission and produces either a [`ValidRecord`] of typed values or the
//! full set of per-field errors. Validation is total: malformed input is a
//! normal failure value, never a panic, and the validator touches nothing
//! beyond the submitted fields.

use crate::domain::forms::{FieldErrors, FormData};

/// Error reported for required text fields that are missing or blank.
pub const REQUIRED_MESSAGE: &str = "Required";

/// Coercion applied to a raw field before its predicate is checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Present, non-empty text. The value is kept exactly as supplied.
    Text,
    /// Decimal number strictly greater than `min_exclusive`.
    Decimal {
        /// Lower bound; the parsed value must exceed it.
        min_exclusive: f64,
    },
    /// One of a fixed set of tokens.
    OneOf {
        /// Tokens accepted for the field.
        allowed: &'static [&'static str],
    },
}

/// One row of an entity's constraint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Field name as submitted by the form.
    pub name: &'static str,
    /// Coercion and predicate applied to the raw value.
    pub kind: FieldKind,
    /// Message reported when coercion or the predicate fails.
    pub message: &'static str,
}

impl FieldSpec {
    /// Required non-empty text field reporting [`REQUIRED_MESSAGE`].
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            message: REQUIRED_MESSAGE,
        }
    }

    /// Decimal field that must parse and be strictly greater than zero.
    pub const fn positive_decimal(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Decimal { min_exclusive: 0.0 },
            message,
        }
    }

    /// Enumerated field restricted to `allowed`.
    pub const fn one_of(
        name: &'static str,
        allowed: &'static [&'static str],
        message: &'static str,
    ) -> Self {
        Self {
            name,
            kind: FieldKind::OneOf { allowed },
            message,
        }
    }
}

/// A value that passed its field's coercion and predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Coerced text value.
    Text(String),
    /// Coerced decimal value.
    Decimal(f64),
}

/// Internal inconsistency between a constraint table and its consumer.
///
/// These never arise from user input: a [`ValidRecord`] only exists once every
/// field in the table validated, so a failed lookup means the table and the
/// code reading it disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The record has no value for the named field.
    #[error("validated record has no `{0}` field")]
    Missing(&'static str),
    /// The record's value for the named field has an unexpected type.
    #[error("validated record field `{0}` has the wrong type")]
    Type(&'static str),
}

/// Typed values for every field of a fully-validated submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidRecord {
    values: std::collections::BTreeMap<&'static str, FieldValue>,
}

impl ValidRecord {
    /// Text value of a validated field.
    pub fn text(&self, name: &'static str) -> Result<&str, SchemaError> {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => Ok(value.as_str()),
            Some(FieldValue::Decimal(_)) => Err(SchemaError::Type(name)),
            None => Err(SchemaError::Missing(name)),
        }
    }

    /// Decimal value of a validated field.
    pub fn decimal(&self, name: &'static str) -> Result<f64, SchemaError> {
        match self.values.get(name) {
            Some(FieldValue::Decimal(value)) => Ok(*value),
            Some(FieldValue::Text(_)) => Err(SchemaError::Type(name)),
            None => Err(SchemaError::Missing(name)),
        }
    }
}

/// Parse failure of an entity draft.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    /// The submission failed validation; the caller renders the errors.
    #[error("form input failed validation")]
    Invalid(FieldErrors),
    /// The constraint table and its consumer disagree.
    #[error(transparent)]
    Internal(#[from] SchemaError),
}

/// Evaluate a constraint table against a raw submission.
///
/// Every field is checked even after the first failure so the caller can
/// render the complete error set in one pass.
pub fn validate(table: &[FieldSpec], form: &FormData) -> Result<ValidRecord, FieldErrors> {
    let mut record = ValidRecord::default();
    let mut errors = FieldErrors::new();

    for spec in table {
        match coerce(spec, form.get(spec.name)) {
            Some(value) => {
                record.values.insert(spec.name, value);
            }
            None => errors.push(spec.name, spec.message),
        }
    }

    if errors.is_empty() { Ok(record) } else { Err(errors) }
}

fn coerce(spec: &FieldSpec, raw: Option<&str>) -> Option<FieldValue> {
    let raw = raw?;
    match spec.kind {
        FieldKind::Text => (!raw.is_empty()).then(|| FieldValue::Text(raw.to_owned())),
        FieldKind::Decimal { min_exclusive } => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > min_exclusive)
            .map(FieldValue::Decimal),
        FieldKind::OneOf { allowed } => allowed
            .contains(&raw)
            .then(|| FieldValue::Text(raw.to_owned())),
    }
}
