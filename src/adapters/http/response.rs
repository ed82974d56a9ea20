use crate::adapters::http::flash::{self, PendingFlash};
use crate::core::outcome::{Flash, Model, Outcome};
use crate::utils::error::PetClinicError;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

/// Rendered view as sent to the client: the view name plus its model.
#[derive(Debug, Serialize)]
pub struct ViewEnvelope<'a> {
    pub view: &'static str,
    pub model: &'a Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<&'a Flash>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Maps a controller outcome to a response, consuming any pending flash on render.
pub fn respond(outcome: Outcome, pending: &PendingFlash) -> Response {
    match outcome {
        Outcome::Render(mav) => {
            let envelope = ViewEnvelope {
                view: mav.view.as_str(),
                model: &mav.model,
                flash: pending.0.as_ref(),
            };
            let mut response = Json(envelope).into_response();
            if pending.0.is_some() {
                response
                    .headers_mut()
                    .append(SET_COOKIE, flash::clear_cookie());
            }
            response
        }
        Outcome::Redirect(redirect) => {
            let mut response = Redirect::to(&redirect.location).into_response();
            if let Some(cookie) = redirect.flash.as_ref().and_then(flash::set_cookie) {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            response
        }
    }
}

impl IntoResponse for PetClinicError {
    fn into_response(self) -> Response {
        let status = if self.is_not_found() {
            tracing::warn!("{}", self);
            StatusCode::NOT_FOUND
        } else {
            tracing::error!("Request failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
