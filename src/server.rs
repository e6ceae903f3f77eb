#![cfg(feature = "server")]
//! HTTP surface: the Dioxus app plus the plain form endpoints it posts to

use crate::session::{CSRF_FIELD, expired_session_cookie, session_id_from_cookie_header};
use crate::state::{SESSION_STORE, SessionError};
use axum::Form;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::post;
use dioxus::prelude::*;

#[derive(Debug, serde::Deserialize)]
pub struct LogoutForm {
    #[serde(rename = "_token")]
    pub token: String,
}

pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(session_id_from_cookie_header)
        .map(str::to_string)
}

/// `POST /logout`
pub async fn logout(headers: HeaderMap, Form(form): Form<LogoutForm>) -> Response {
    let Some(session_id) = session_id_from_headers(&headers) else {
        log::debug!("Logout without a session cookie");
        return Redirect::to("/").into_response();
    };

    let result = SESSION_STORE
        .lock()
        .await
        .terminate(&session_id, &form.token);

    match result {
        Ok(user) => {
            log::info!("Session closed for '{}'", user.display_name);
            (
                [(SET_COOKIE, expired_session_cookie())],
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(SessionError::UnknownSession) => {
            log::debug!("Logout for an unknown session");
            (
                [(SET_COOKIE, expired_session_cookie())],
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(e @ SessionError::TokenMismatch) => {
            log::warn!("Logout rejected: {} field did not match: {}", CSRF_FIELD, e);
            (StatusCode::FORBIDDEN, e.to_string()).into_response()
        }
    }
}

/// Router serving the form endpoints, the server functions and the SSR pages
pub fn router(app: fn() -> Element) -> Result<axum::Router, Box<dyn std::error::Error>> {
    let config = ServeConfig::new()
        .map_err(|e| format!("Unable to load the index page: {:?}", e))?;
    Ok(axum::Router::new()
        .route(crate::LOGOUT_PATH, post(logout))
        .serve_dioxus_application(config, app))
}
