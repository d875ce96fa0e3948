//! Driving port for the create-user use-case.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::forms::{FormData, FormState, MutationOutcome};

/// User mutation handlers. Accounts are created once and never updated or
/// deleted through this surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserMutations: Send + Sync {
    /// Validate and insert a new user account.
    ///
    /// On success the outcome is rendered, not redirected: the caller stays
    /// on the form and shows the success message.
    async fn create_user(
        &self,
        previous: &FormState,
        form: &FormData,
    ) -> Result<MutationOutcome, Error>;
}
