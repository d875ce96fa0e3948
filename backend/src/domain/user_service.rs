//! Create-user mutation handler.
//!
//! Unlike the invoice mutations this handler never redirects: the caller
//! stays on the form and renders either field errors, the storage-failure
//! message, or the success message. A duplicate email is indistinguishable
//! from any other storage failure at this surface.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::Error;
use crate::domain::forms::{FormData, FormState, MutationOutcome};
use crate::domain::ports::{PasswordHasher, UserMutations, UserRepository, ViewCache};
use crate::domain::schema::DraftError;
use crate::domain::user::{NewUser, UserDraft};

/// Logical view path of the create-user form; revalidated on success.
pub const CREATE_USER_VIEW: &str = "/createuser";

/// Summary message for a rejected submission.
pub const CREATE_USER_MISSING_FIELDS: &str = "Missing Fields. Failed to Create User.";
/// Message for a submission that failed in storage (duplicate email
/// included).
pub const CREATE_USER_DB_ERROR: &str = "Database Error: Failed to Create User.";
/// Success message rendered on the form after the account is created.
pub const CREATE_USER_SUCCESS: &str =
    "User created successfully, navigate to the login page and login";

/// Stateless create-user service; all collaborators are injected.
pub struct UserMutationService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    views: Arc<dyn ViewCache>,
    clock: Arc<dyn Clock>,
}

impl UserMutationService {
    /// Create a service backed by the given repository, hasher, view cache,
    /// and clock.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        views: Arc<dyn ViewCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            hasher,
            views,
            clock,
        }
    }
}

#[async_trait]
impl UserMutations for UserMutationService {
    async fn create_user(
        &self,
        _previous: &FormState,
        form: &FormData,
    ) -> Result<MutationOutcome, Error> {
        let draft = match UserDraft::parse(form) {
            Ok(draft) => draft,
            Err(DraftError::Invalid(errors)) => {
                return Ok(MutationOutcome::rendered(FormState::rejected(
                    errors,
                    CREATE_USER_MISSING_FIELDS,
                )));
            }
            Err(DraftError::Internal(err)) => return Err(Error::internal(err.to_string())),
        };

        // Hashing failures are infrastructure faults, not form outcomes.
        let password_hash = self
            .hasher
            .hash(draft.password())
            .await
            .map_err(|err| Error::internal(err.to_string()))?;

        let user = NewUser {
            firstname: draft.firstname().to_owned(),
            lastname: draft.lastname().to_owned(),
            name: draft.fullname(),
            profile: draft.profile(),
            email: draft.email().to_owned(),
            password_hash,
            createddate: self.clock.local().date_naive(),
        };

        if let Err(error) = self.users.insert(&user).await {
            debug!(%error, "user insert failed");
            return Ok(MutationOutcome::rendered(FormState::with_message(
                CREATE_USER_DB_ERROR,
            )));
        }

        self.views.revalidate(CREATE_USER_VIEW);
        Ok(MutationOutcome::rendered(FormState::succeeded(
            CREATE_USER_SUCCESS,
        )))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the create-user pipeline.
    use super::*;
    use crate::domain::ports::{
        MockPasswordHasher, MockUserRepository, MockViewCache, PasswordHashError,
        UserPersistenceError,
    };
    use crate::domain::user::PROFILE_MESSAGE;
    use chrono::{Local, TimeZone};
    use mockable::MockClock;
    use mockall::predicate::eq;

    fn fixed_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_local().returning(|| {
            Local
                .with_ymd_and_hms(2026, 8, 6, 23, 30, 0)
                .single()
                .expect("valid fixture timestamp")
        });
        clock
    }

    fn hasher_returning(hash: &'static str) -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(move |_| Ok(hash.to_owned()));
        hasher
    }

    fn service(
        users: MockUserRepository,
        hasher: MockPasswordHasher,
        views: MockViewCache,
    ) -> UserMutationService {
        UserMutationService::new(
            Arc::new(users),
            Arc::new(hasher),
            Arc::new(views),
            Arc::new(fixed_clock()),
        )
    }

    fn valid_form() -> FormData {
        FormData::new()
            .with_field("firstname", "Grace")
            .with_field("lastname", "Hopper")
            .with_field("profile", "manager")
            .with_field("email", "grace@example.com")
            .with_field("password", "s3cret")
    }

    #[tokio::test]
    async fn create_stores_derived_name_hash_and_local_date() {
        let mut users = MockUserRepository::new();
        users
            .expect_insert()
            .withf(|user| {
                user.name == "Grace Hopper"
                    && user.password_hash == "$2b$10$fixture"
                    && user.createddate.to_string() == "2026-08-06"
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut views = MockViewCache::new();
        views
            .expect_revalidate()
            .with(eq(CREATE_USER_VIEW))
            .times(1)
            .return_const(());

        let outcome = service(users, hasher_returning("$2b$10$fixture"), views)
            .create_user(&FormState::default(), &valid_form())
            .await
            .expect("handler must not fail fatally");

        assert_eq!(
            outcome,
            MutationOutcome::rendered(FormState::succeeded(CREATE_USER_SUCCESS))
        );
    }

    #[tokio::test]
    async fn create_rejects_unknown_profile_without_hashing_or_writing() {
        let mut users = MockUserRepository::new();
        users.expect_insert().times(0);
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().times(0);
        let mut views = MockViewCache::new();
        views.expect_revalidate().times(0);
        let form = FormData::new()
            .with_field("firstname", "Grace")
            .with_field("lastname", "Hopper")
            .with_field("profile", "architect")
            .with_field("email", "grace@example.com")
            .with_field("password", "s3cret");

        let outcome = service(users, hasher, views)
            .create_user(&FormState::default(), &form)
            .await
            .expect("handler must not fail fatally");

        let MutationOutcome::Rendered { state } = outcome else {
            panic!("expected rendered state, got {outcome:?}");
        };
        assert_eq!(state.message.as_deref(), Some(CREATE_USER_MISSING_FIELDS));
        let errors = state.errors.expect("field errors present");
        assert_eq!(errors.get("profile"), [PROFILE_MESSAGE]);
    }

    #[tokio::test]
    async fn duplicate_email_renders_the_generic_storage_message() {
        let mut users = MockUserRepository::new();
        users.expect_insert().times(1).returning(|_| {
            Err(UserPersistenceError::query(
                "duplicate key value violates unique constraint",
            ))
        });
        let mut views = MockViewCache::new();
        views.expect_revalidate().times(0);

        let outcome = service(users, hasher_returning("$2b$10$fixture"), views)
            .create_user(&FormState::default(), &valid_form())
            .await
            .expect("storage failures are rendered, not raised");

        let MutationOutcome::Rendered { state } = outcome else {
            panic!("expected rendered state, got {outcome:?}");
        };
        assert_eq!(state.message.as_deref(), Some(CREATE_USER_DB_ERROR));
        assert_eq!(state.success, None);
    }

    #[tokio::test]
    async fn hashing_failure_propagates_fatally() {
        let mut users = MockUserRepository::new();
        users.expect_insert().times(0);
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(PasswordHashError::new("hash backend failed")));
        let mut views = MockViewCache::new();
        views.expect_revalidate().times(0);

        let err = service(users, hasher, views)
            .create_user(&FormState::default(), &valid_form())
            .await
            .expect_err("hashing failures must propagate");

        assert_eq!(err.code(), crate::domain::ErrorCode::InternalError);
    }
}
