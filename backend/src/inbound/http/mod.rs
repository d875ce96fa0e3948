//! Inbound HTTP adapter: form-action endpoints, sessions, error mapping.

pub mod error;
pub mod health;
pub mod invoices;
pub mod login;
pub mod session;
pub mod state;
pub mod users;

pub use error::ApiResult;

use actix_web::{HttpResponse, http::header, web};

use crate::domain::{FormData, MutationOutcome};

/// Convert the urlencoded pair list into the domain's flat field set.
pub(crate) fn into_form_data(form: web::Form<Vec<(String, String)>>) -> FormData {
    FormData::from_pairs(form.into_inner())
}

/// Translate a mutation outcome into its HTTP representation.
///
/// Rendered states are `200 OK` with the state as JSON — validation and
/// storage failures are normal outcomes of the pipeline, not HTTP faults.
/// Redirects are `303 See Other` so the client re-requests with GET.
pub(crate) fn respond(outcome: MutationOutcome) -> HttpResponse {
    match outcome {
        MutationOutcome::Redirect { path } => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, path))
            .finish(),
        MutationOutcome::Rendered { state } => HttpResponse::Ok().json(state),
    }
}
