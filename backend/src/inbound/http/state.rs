//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{InvoiceMutations, SignIn, UserMutations};

/// Dependency bundle for the form-action handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Invoice mutation use-cases.
    pub invoices: Arc<dyn InvoiceMutations>,
    /// User mutation use-cases.
    pub users: Arc<dyn UserMutations>,
    /// Authenticate use-case.
    pub sign_in: Arc<dyn SignIn>,
}

impl HttpState {
    /// Bundle the driving ports consumed by the HTTP handlers.
    pub fn new(
        invoices: Arc<dyn InvoiceMutations>,
        users: Arc<dyn UserMutations>,
        sign_in: Arc<dyn SignIn>,
    ) -> Self {
        Self {
            invoices,
            users,
            sign_in,
        }
    }
}
