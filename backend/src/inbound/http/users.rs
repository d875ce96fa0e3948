//! Create-user form-action handler.
//!
//! ```text
//! POST /createuser    (urlencoded form)
//! ```
//!
//! The endpoint is public: the flow ends by telling the new user to go to
//! the login page, so there is no session to require yet. Success renders —
//! it never redirects.

use actix_web::{HttpResponse, post, web};

use crate::domain::FormState;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, into_form_data, respond};

/// Create a new user account from the submitted form.
#[utoipa::path(
    post,
    path = "/createuser",
    request_body(content = Object, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Form state to render: field errors, failure, or success", body = FormState)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/createuser")]
pub async fn create_user(
    state: web::Data<HttpState>,
    form: web::Form<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    let form = into_form_data(form);
    let outcome = state
        .users
        .create_user(&FormState::default(), &form)
        .await?;
    Ok(respond(outcome))
}
