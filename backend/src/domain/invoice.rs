//! Invoice entity, status enum, and the invoice form schema.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::forms::FormData;
use crate::domain::schema::{self, DraftError, FieldSpec, SchemaError};

/// Message reported when the amount is missing, unparsable, or not positive.
pub const AMOUNT_MESSAGE: &str = "Please enter an amount greater than $0.";
/// Message reported when the status token is missing or unrecognised.
pub const STATUS_MESSAGE: &str = "Please select an invoice status.";

/// Status tokens accepted by the invoice form.
pub const INVOICE_STATUSES: [&str; 3] = ["pending", "paid", "overdue"];

const INVOICE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::text("customerId"),
    FieldSpec::positive_decimal("amount", AMOUNT_MESSAGE),
    FieldSpec::one_of("status", &INVOICE_STATUSES, STATUS_MESSAGE),
];

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment.
    Pending,
    /// Paid in full.
    Paid,
    /// Past its due date.
    Overdue,
}

impl InvoiceStatus {
    /// Token stored in the database and submitted by the form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }
}

/// Error returned when a status token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised invoice status `{0}`")]
pub struct ParseInvoiceStatusError(String);

impl FromStr for InvoiceStatus {
    type Err = ParseInvoiceStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            other => Err(ParseInvoiceStatusError(other.to_owned())),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated invoice form fields, amount already converted to cents.
///
/// ## Invariants
/// - `amount_cents` is strictly positive: the form value must parse as a
///   decimal greater than zero, and cents are `round(amount * 100)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    customer_id: String,
    amount_cents: i64,
    status: InvoiceStatus,
}

impl InvoiceDraft {
    /// Validate a raw submission against the invoice schema.
    pub fn parse(form: &FormData) -> Result<Self, DraftError> {
        let record = schema::validate(&INVOICE_FIELDS, form).map_err(DraftError::Invalid)?;

        let customer_id = record.text("customerId")?.to_owned();
        let amount_cents = to_cents(record.decimal("amount")?);
        let status = InvoiceStatus::from_str(record.text("status")?)
            .map_err(|_| SchemaError::Type("status"))?;

        Ok(Self {
            customer_id,
            amount_cents,
            status,
        })
    }

    /// Customer reference exactly as submitted.
    pub fn customer_id(&self) -> &str {
        self.customer_id.as_str()
    }

    /// Amount in integer cents.
    pub fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    /// Validated status.
    pub fn status(&self) -> InvoiceStatus {
        self.status
    }
}

fn to_cents(amount: f64) -> i64 {
    // Validation guarantees a finite, strictly positive value.
    (amount * 100.0).round() as i64
}

/// Row inserted by the create-invoice mutation. The id is generated by the
/// storage engine and the date is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    /// Customer reference as submitted; the persistence adapter parses it.
    pub customer_id: String,
    /// Amount in integer cents.
    pub amount_cents: i64,
    /// Invoice status.
    pub status: InvoiceStatus,
    /// UTC calendar date of creation.
    pub date: NaiveDate,
}

/// Full-row replacement applied by the update-invoice mutation; the creation
/// date is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceUpdate {
    /// Customer reference as submitted; the persistence adapter parses it.
    pub customer_id: String,
    /// Amount in integer cents.
    pub amount_cents: i64,
    /// Invoice status.
    pub status: InvoiceStatus,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn form(customer: &str, amount: &str, status: &str) -> FormData {
        FormData::new()
            .with_field("customerId", customer)
            .with_field("amount", amount)
            .with_field("status", status)
    }

    #[test]
    fn every_accepted_token_parses_to_a_status() {
        for token in INVOICE_STATUSES {
            let status = InvoiceStatus::from_str(token).expect("token must parse");
            assert_eq!(status.as_str(), token);
        }
    }

    #[rstest]
    #[case("12.50", 1250)]
    #[case("0.01", 1)]
    #[case("3", 300)]
    #[case("19.999", 2000)]
    fn amounts_are_stored_as_rounded_integer_cents(#[case] amount: &str, #[case] cents: i64) {
        let draft = InvoiceDraft::parse(&form("c-1", amount, "pending")).expect("valid form");
        assert_eq!(draft.amount_cents(), cents);
    }

    #[rstest]
    #[case("0")]
    #[case("-1.50")]
    #[case("abc")]
    fn non_positive_amounts_are_rejected_on_the_amount_field(#[case] amount: &str) {
        let err = InvoiceDraft::parse(&form("c-1", amount, "pending"))
            .expect_err("amount must be rejected");
        match err {
            DraftError::Invalid(errors) => assert_eq!(errors.get("amount"), [AMOUNT_MESSAGE]),
            DraftError::Internal(err) => panic!("unexpected schema error: {err}"),
        }
    }

    #[test]
    fn unknown_status_reports_the_fixed_message() {
        let err =
            InvoiceDraft::parse(&form("c-1", "5", "draft")).expect_err("status must be rejected");
        match err {
            DraftError::Invalid(errors) => assert_eq!(errors.get("status"), [STATUS_MESSAGE]),
            DraftError::Internal(err) => panic!("unexpected schema error: {err}"),
        }
    }

    #[test]
    fn customer_reference_is_kept_exactly_as_submitted() {
        let draft =
            InvoiceDraft::parse(&form(" c-1 ", "5", "paid")).expect("valid form");
        assert_eq!(draft.customer_id(), " c-1 ");
    }
}
