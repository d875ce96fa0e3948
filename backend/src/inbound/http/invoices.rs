//! Invoice form-action handlers.
//!
//! ```text
//! POST /dashboard/invoices            create (urlencoded form)
//! POST /dashboard/invoices/{id}       update
//! POST /dashboard/invoices/{id}/delete
//! ```
//!
//! All invoice mutations sit behind the session guard, mirroring the
//! dashboard's authenticated area. A rendered outcome answers `200 OK` with
//! the form state as JSON; a redirect outcome answers `303 See Other`.

use actix_web::{HttpResponse, post, web};

use crate::domain::FormState;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, into_form_data, respond};

/// Create a new invoice from the submitted form.
#[utoipa::path(
    post,
    path = "/dashboard/invoices",
    request_body(content = Object, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Submission rejected or failed; form state to render", body = FormState),
        (status = 303, description = "Invoice created; redirect to the invoice list"),
        (status = 401, description = "Login required", body = crate::domain::Error)
    ),
    tags = ["invoices"],
    operation_id = "createInvoice"
)]
#[post("/dashboard/invoices")]
pub async fn create_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    session.require_user()?;
    let form = into_form_data(form);
    let outcome = state
        .invoices
        .create_invoice(&FormState::default(), &form)
        .await?;
    Ok(respond(outcome))
}

/// Replace the mutable columns of an existing invoice.
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}",
    params(("id" = String, Path, description = "Opaque invoice identifier")),
    request_body(content = Object, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Submission rejected or failed; form state to render", body = FormState),
        (status = 303, description = "Invoice updated; redirect to the invoice list"),
        (status = 401, description = "Login required", body = crate::domain::Error)
    ),
    tags = ["invoices"],
    operation_id = "updateInvoice"
)]
#[post("/dashboard/invoices/{id}")]
pub async fn update_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<String>,
    form: web::Form<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    session.require_user()?;
    let form = into_form_data(form);
    let outcome = state
        .invoices
        .update_invoice(&id, &FormState::default(), &form)
        .await?;
    Ok(respond(outcome))
}

/// Delete an invoice. Always renders an acknowledgement message.
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}/delete",
    params(("id" = String, Path, description = "Opaque invoice identifier")),
    responses(
        (status = 200, description = "Acknowledgement or failure message", body = FormState),
        (status = 401, description = "Login required", body = crate::domain::Error)
    ),
    tags = ["invoices"],
    operation_id = "deleteInvoice"
)]
#[post("/dashboard/invoices/{id}/delete")]
pub async fn delete_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user()?;
    let state_out = state.invoices.delete_invoice(&id).await?;
    Ok(HttpResponse::Ok().json(state_out))
}
