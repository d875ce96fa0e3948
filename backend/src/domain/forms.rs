//! Form submission primitives shared by every mutation handler.
//!
//! A submission arrives as a flat string-keyed field set ([`FormData`]), is
//! validated into either a typed draft or per-field error lists
//! ([`FieldErrors`]), and produces a transient [`FormState`] for the caller to
//! render. Navigation is modelled as data: handlers return a
//! [`MutationOutcome`] and the inbound adapter decides how to honour a
//! redirect, so no control flow ever unwinds through the handler.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flat string-keyed field set submitted with a form.
///
/// ## Invariants
/// - When a field name is supplied more than once, the first occurrence wins,
///   matching the lookup semantics of the browser's form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field set from name/value pairs, keeping the first occurrence
    /// of each name.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = BTreeMap::new();
        for (name, value) in pairs {
            fields.entry(name).or_insert(value);
        }
        Self { fields }
    }

    /// Builder-style insert used by tests and fixtures.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.entry(name.into()).or_insert(value.into());
        self
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Field name → human-readable error messages, in stable field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field's error list.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// True when no field has errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, empty when the field validated.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Names of the fields that failed validation.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Transient per-submission result surfaced to the presentation layer.
///
/// Exactly one submission produces exactly one state; nothing accumulates
/// across attempts. A state is one of:
/// - rejected input: `errors` plus a summary `message`;
/// - a bare `message` (storage failure, or the delete acknowledgement);
/// - a `success` message (create-user only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FormState {
    /// Field-level validation errors, when the submission was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    /// Human-readable summary shown with rejected or failed submissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Success message, only produced by mutations that do not redirect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl FormState {
    /// State for a submission rejected by validation.
    pub fn rejected(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
            success: None,
        }
    }

    /// State carrying a bare message and no field errors.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
            success: None,
        }
    }

    /// State for a mutation that succeeded without redirecting.
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: None,
            success: Some(message.into()),
        }
    }
}

/// Terminal signal of a mutation handler.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The mutation succeeded; the caller should navigate to `path`.
    Redirect {
        /// Logical view path the caller should navigate to.
        path: String,
    },
    /// The caller should re-render with the given form state.
    Rendered {
        /// Form state to render.
        state: FormState,
    },
}

impl MutationOutcome {
    /// Build a redirect outcome.
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect { path: path.into() }
    }

    /// Build a rendered outcome.
    pub fn rendered(state: FormState) -> Self {
        Self::Rendered { state }
    }
}
