//! Login form-action handler.
//!
//! ```text
//! POST /login    (urlencoded form: email, password)
//! ```
//!
//! A rejected or failed attempt renders the failure message; accepted
//! credentials establish the session and redirect to the dashboard. A
//! failure the provider could not classify propagates and surfaces as a
//! server error, never as a credentials message.

use actix_web::{HttpResponse, http::header, post, web};

use crate::domain::FormState;
use crate::domain::ports::SignInOutcome;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, into_form_data};

/// Authenticate the submitted credentials and establish a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = Object, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Credentials rejected; failure message to render", body = FormState),
        (status = 303, description = "Signed in; redirect to the dashboard",
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 500, description = "Unclassified sign-in failure", body = crate::domain::Error)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    let form = into_form_data(form);
    match state.sign_in.authenticate(None, &form).await? {
        SignInOutcome::SignedIn { user, redirect } => {
            session.persist_user(user.email())?;
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, redirect))
                .finish())
        }
        SignInOutcome::Failed { message } => {
            Ok(HttpResponse::Ok().json(FormState::with_message(message)))
        }
    }
}
