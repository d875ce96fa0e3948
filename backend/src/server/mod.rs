//! Server wiring: session middleware, route table, and adapter assembly.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use mockable::DefaultClock;

use siteledger::domain::{InvoiceMutationService, SignInService, UserMutationService};
use siteledger::inbound::http::health::{live, ready};
use siteledger::inbound::http::invoices::{create_invoice, delete_invoice, update_invoice};
use siteledger::inbound::http::login::login;
use siteledger::inbound::http::state::HttpState;
use siteledger::inbound::http::users::create_user;
use siteledger::outbound::auth::{BcryptPasswordHasher, CredentialsSignInProvider};
use siteledger::outbound::cache::StaleViewRegistry;
use siteledger::outbound::persistence::{DbPool, DieselInvoiceRepository, DieselUserRepository};

/// Cookie session middleware shared by every route.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// Register every HTTP endpoint.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login)
        .service(create_user)
        .service(create_invoice)
        .service(update_invoice)
        .service(delete_invoice)
        .service(ready)
        .service(live);
}

/// Assemble the production adapter graph behind the driving ports.
pub fn build_http_state(pool: &DbPool) -> HttpState {
    let invoices = Arc::new(DieselInvoiceRepository::new(pool.clone()));
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let hasher = Arc::new(BcryptPasswordHasher::new());
    let views = Arc::new(StaleViewRegistry::new());
    let clock = Arc::new(DefaultClock);

    let provider = Arc::new(CredentialsSignInProvider::new(
        users.clone(),
        hasher.clone(),
    ));

    HttpState::new(
        Arc::new(InvoiceMutationService::new(
            invoices,
            views.clone(),
            clock.clone(),
        )),
        Arc::new(UserMutationService::new(users, hasher, views, clock)),
        Arc::new(SignInService::new(provider)),
    )
}
