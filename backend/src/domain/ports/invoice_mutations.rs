//! Driving port for the invoice mutation use-cases.
//!
//! Inbound adapters call these to run the validate → persist → revalidate
//! pipeline without knowing the backing infrastructure, which keeps handler
//! tests deterministic: they substitute a test double instead of wiring
//! persistence.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::forms::{FormData, FormState, MutationOutcome};

/// Invoice mutation handlers, one per business action.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceMutations: Send + Sync {
    /// Validate and insert a new invoice.
    ///
    /// `previous` is the caller's prior form state; it is part of the
    /// submission contract but its content is ignored.
    async fn create_invoice(
        &self,
        previous: &FormState,
        form: &FormData,
    ) -> Result<MutationOutcome, Error>;

    /// Validate and replace the mutable columns of an existing invoice.
    async fn update_invoice(
        &self,
        id: &str,
        previous: &FormState,
        form: &FormData,
    ) -> Result<MutationOutcome, Error>;

    /// Delete an invoice. Always renders a message; never redirects.
    async fn delete_invoice(&self, id: &str) -> Result<FormState, Error>;
}
