//! Session helpers keeping handlers free of framework-specific logic.
//!
//! Thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: persisting the signed-in account and
//! requiring one before a guarded mutation runs.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::Error;

pub(crate) const USER_EMAIL_KEY: &str = "user_email";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the signed-in account's email in the session cookie.
    pub fn persist_user(&self, email: &str) -> Result<(), Error> {
        self.0
            .insert(USER_EMAIL_KEY, email)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Email of the signed-in account, if a session is established.
    pub fn user_email(&self) -> Result<Option<String>, Error> {
        self.0
            .get::<String>(USER_EMAIL_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// Require a signed-in account or fail with `401 Unauthorized`.
    pub fn require_user(&self) -> Result<String, Error> {
        self.user_email()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
