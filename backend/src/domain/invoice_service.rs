//! Invoice mutation handlers: validate, persist, revalidate, signal.
//!
//! Each handler performs at most one database round trip. Storage failures
//! of any kind collapse to the handler's single user-facing message; the
//! underlying cause is logged at debug level only.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::Error;
use crate::domain::forms::{FormData, FormState, MutationOutcome};
use crate::domain::invoice::{InvoiceDraft, InvoiceUpdate, NewInvoice};
use crate::domain::ports::{InvoiceMutations, InvoiceRepository, ViewCache};
use crate::domain::schema::DraftError;

/// Logical view path of the invoice list; revalidated by every invoice
/// mutation and the redirect target of create and update.
pub const INVOICES_VIEW: &str = "/dashboard/invoices";

/// Summary message for a rejected create submission.
pub const CREATE_INVOICE_MISSING_FIELDS: &str = "Missing Fields. Failed to Create Invoice.";
/// Message for a create submission that failed in storage.
pub const CREATE_INVOICE_DB_ERROR: &str = "Database Error: Failed to Create Invoice.";
/// Summary message for a rejected update submission.
pub const UPDATE_INVOICE_MISSING_FIELDS: &str = "Missing Fields. Failed to Update Invoice.";
/// Message for an update submission that failed in storage.
pub const UPDATE_INVOICE_DB_ERROR: &str = "Database Error: Failed to Update Invoice.";
/// Acknowledgement message for a completed delete.
pub const INVOICE_DELETED: &str = "Deleted Invoice.";
/// Message for a delete that failed in storage.
pub const DELETE_INVOICE_DB_ERROR: &str = "Database Error: Failed to Delete Invoice.";

/// Stateless invoice mutation service; all collaborators are injected.
pub struct InvoiceMutationService {
    invoices: Arc<dyn InvoiceRepository>,
    views: Arc<dyn ViewCache>,
    clock: Arc<dyn Clock>,
}

impl InvoiceMutationService {
    /// Create a service backed by the given repository, view cache, and
    /// clock.
    pub fn new(
        invoices: Arc<dyn InvoiceRepository>,
        views: Arc<dyn ViewCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            invoices,
            views,
            clock,
        }
    }

    fn parse(form: &FormData, summary: &str) -> Result<Result<InvoiceDraft, FormState>, Error> {
        match InvoiceDraft::parse(form) {
            Ok(draft) => Ok(Ok(draft)),
            Err(DraftError::Invalid(errors)) => Ok(Err(FormState::rejected(errors, summary))),
            Err(DraftError::Internal(err)) => Err(Error::internal(err.to_string())),
        }
    }
}

#[async_trait]
impl InvoiceMutations for InvoiceMutationService {
    async fn create_invoice(
        &self,
        _previous: &FormState,
        form: &FormData,
    ) -> Result<MutationOutcome, Error> {
        let draft = match Self::parse(form, CREATE_INVOICE_MISSING_FIELDS)? {
            Ok(draft) => draft,
            Err(state) => return Ok(MutationOutcome::rendered(state)),
        };

        let invoice = NewInvoice {
            customer_id: draft.customer_id().to_owned(),
            amount_cents: draft.amount_cents(),
            status: draft.status(),
            date: self.clock.utc().date_naive(),
        };

        if let Err(error) = self.invoices.insert(&invoice).await {
            debug!(%error, "invoice insert failed");
            return Ok(MutationOutcome::rendered(FormState::with_message(
                CREATE_INVOICE_DB_ERROR,
            )));
        }

        self.views.revalidate(INVOICES_VIEW);
        Ok(MutationOutcome::redirect(INVOICES_VIEW))
    }

    async fn update_invoice(
        &self,
        id: &str,
        _previous: &FormState,
        form: &FormData,
    ) -> Result<MutationOutcome, Error> {
        let draft = match Self::parse(form, UPDATE_INVOICE_MISSING_FIELDS)? {
            Ok(draft) => draft,
            Err(state) => return Ok(MutationOutcome::rendered(state)),
        };

        let update = InvoiceUpdate {
            customer_id: draft.customer_id().to_owned(),
            amount_cents: draft.amount_cents(),
            status: draft.status(),
        };

        if let Err(error) = self.invoices.update(id, &update).await {
            debug!(%error, "invoice update failed");
            return Ok(MutationOutcome::rendered(FormState::with_message(
                UPDATE_INVOICE_DB_ERROR,
            )));
        }

        self.views.revalidate(INVOICES_VIEW);
        Ok(MutationOutcome::redirect(INVOICES_VIEW))
    }

    async fn delete_invoice(&self, id: &str) -> Result<FormState, Error> {
        if let Err(error) = self.invoices.delete(id).await {
            debug!(%error, "invoice delete failed");
            return Ok(FormState::with_message(DELETE_INVOICE_DB_ERROR));
        }

        self.views.revalidate(INVOICES_VIEW);
        Ok(FormState::with_message(INVOICE_DELETED))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the invoice mutation pipeline.
    use super::*;
    use crate::domain::invoice::{AMOUNT_MESSAGE, InvoiceStatus};
    use crate::domain::ports::{
        InvoicePersistenceError, MockInvoiceRepository, MockViewCache,
    };
    use chrono::{TimeZone, Utc};
    use mockable::MockClock;
    use mockall::predicate::eq;
    use rstest::rstest;

    fn fixed_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_utc().returning(|| {
            Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0)
                .single()
                .expect("valid fixture timestamp")
        });
        clock
    }

    fn service(
        invoices: MockInvoiceRepository,
        views: MockViewCache,
    ) -> InvoiceMutationService {
        InvoiceMutationService::new(Arc::new(invoices), Arc::new(views), Arc::new(fixed_clock()))
    }

    fn valid_form() -> FormData {
        FormData::new()
            .with_field("customerId", "f2c7a7a0-7c55-4de7-8a25-2201d7a58d10")
            .with_field("amount", "12.50")
            .with_field("status", "paid")
    }

    #[tokio::test]
    async fn create_persists_cents_and_creation_date_then_redirects() {
        let mut invoices = MockInvoiceRepository::new();
        invoices
            .expect_insert()
            .withf(|invoice| {
                invoice.amount_cents == 1250
                    && invoice.status == InvoiceStatus::Paid
                    && invoice.date.to_string() == "2026-08-06"
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut views = MockViewCache::new();
        views
            .expect_revalidate()
            .with(eq(INVOICES_VIEW))
            .times(1)
            .return_const(());

        let outcome = service(invoices, views)
            .create_invoice(&FormState::default(), &valid_form())
            .await
            .expect("handler must not fail fatally");

        assert_eq!(outcome, MutationOutcome::redirect(INVOICES_VIEW));
    }

    #[rstest]
    #[case("0")]
    #[case("-4")]
    #[case("not-a-number")]
    #[tokio::test]
    async fn create_rejects_bad_amounts_without_writing(#[case] amount: &str) {
        let mut invoices = MockInvoiceRepository::new();
        invoices.expect_insert().times(0);
        let mut views = MockViewCache::new();
        views.expect_revalidate().times(0);
        let form = FormData::new()
            .with_field("customerId", "c-1")
            .with_field("amount", amount)
            .with_field("status", "paid");

        let outcome = service(invoices, views)
            .create_invoice(&FormState::default(), &form)
            .await
            .expect("handler must not fail fatally");

        let MutationOutcome::Rendered { state } = outcome else {
            panic!("expected rendered state, got {outcome:?}");
        };
        assert_eq!(state.message.as_deref(), Some(CREATE_INVOICE_MISSING_FIELDS));
        let errors = state.errors.expect("field errors present");
        assert_eq!(errors.get("amount"), [AMOUNT_MESSAGE]);
    }

    #[rstest]
    #[case(InvoicePersistenceError::connection("database unavailable"))]
    #[case(InvoicePersistenceError::query("constraint violated"))]
    #[tokio::test]
    async fn create_collapses_storage_failures_to_one_message(
        #[case] failure: InvoicePersistenceError,
    ) {
        let mut invoices = MockInvoiceRepository::new();
        invoices
            .expect_insert()
            .times(1)
            .returning(move |_| Err(failure.clone()));
        let mut views = MockViewCache::new();
        views.expect_revalidate().times(0);

        let outcome = service(invoices, views)
            .create_invoice(&FormState::default(), &valid_form())
            .await
            .expect("storage failures are rendered, not raised");

        assert_eq!(
            outcome,
            MutationOutcome::rendered(FormState::with_message(CREATE_INVOICE_DB_ERROR))
        );
    }

    #[tokio::test]
    async fn update_replaces_columns_and_redirects() {
        let mut invoices = MockInvoiceRepository::new();
        invoices
            .expect_update()
            .withf(|id, update| {
                id == "7ad2c5b4-2cf4-44d4-b13a-2ec8f77c19b8" && update.amount_cents == 1250
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mut views = MockViewCache::new();
        views
            .expect_revalidate()
            .with(eq(INVOICES_VIEW))
            .times(1)
            .return_const(());

        let outcome = service(invoices, views)
            .update_invoice(
                "7ad2c5b4-2cf4-44d4-b13a-2ec8f77c19b8",
                &FormState::default(),
                &valid_form(),
            )
            .await
            .expect("handler must not fail fatally");

        assert_eq!(outcome, MutationOutcome::redirect(INVOICES_VIEW));
    }

    #[tokio::test]
    async fn update_uses_its_own_messages() {
        let mut invoices = MockInvoiceRepository::new();
        invoices.expect_update().times(0);
        let mut views = MockViewCache::new();
        views.expect_revalidate().times(0);

        let outcome = service(invoices, views)
            .update_invoice("inv-1", &FormState::default(), &FormData::new())
            .await
            .expect("handler must not fail fatally");

        let MutationOutcome::Rendered { state } = outcome else {
            panic!("expected rendered state, got {outcome:?}");
        };
        assert_eq!(state.message.as_deref(), Some(UPDATE_INVOICE_MISSING_FIELDS));
    }

    #[tokio::test]
    async fn delete_acknowledges_and_revalidates() {
        let mut invoices = MockInvoiceRepository::new();
        invoices
            .expect_delete()
            .with(eq("inv-1"))
            .times(1)
            .returning(|_| Ok(()));
        let mut views = MockViewCache::new();
        views
            .expect_revalidate()
            .with(eq(INVOICES_VIEW))
            .times(1)
            .return_const(());

        let state = service(invoices, views)
            .delete_invoice("inv-1")
            .await
            .expect("handler must not fail fatally");

        assert_eq!(state, FormState::with_message(INVOICE_DELETED));
    }

    #[tokio::test]
    async fn delete_reports_storage_failure_without_revalidating() {
        let mut invoices = MockInvoiceRepository::new();
        invoices
            .expect_delete()
            .times(1)
            .returning(|_| Err(InvoicePersistenceError::query("gone wrong")));
        let mut views = MockViewCache::new();
        views.expect_revalidate().times(0);

        let state = service(invoices, views)
            .delete_invoice("inv-1")
            .await
            .expect("handler must not fail fatally");

        assert_eq!(state, FormState::with_message(DELETE_INVOICE_DB_ERROR));
    }
}
