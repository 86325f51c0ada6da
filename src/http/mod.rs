//! HTTP surface: mint endpoint, redirect endpoints, error mapping.
//!
//! The router is meant to be merged into the host storefront's own `axum`
//! server. Authentication stays the host's job: its middleware inserts an
//! [`AuthenticatedUser`] extension, and absence of one maps to 401 here.

pub mod mint;
pub mod redirect;
pub mod schemas;

use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::access::AccessManager;
use crate::errors::AccessError;

use self::schemas::ErrorResponse;

/// The authenticated caller, inserted as a request extension by the host's
/// auth middleware.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Stable user identifier.
    pub id: String,
}

/// Shared state for the content-access routes.
#[derive(Clone)]
pub struct AppState {
    /// The orchestrator behind every route.
    pub access: Arc<AccessManager>,
}

/// Build the content-access router.
///
/// Routes:
/// - `POST /content/access` - mint a signed access URL
/// - `GET /content/download/drive` - verify + redirect to Google Drive
/// - `GET /content/video/youtube` - verify + redirect to YouTube
pub fn router(access: Arc<AccessManager>) -> Router {
    Router::new()
        .route("/content/access", post(mint::mint_access))
        .route("/content/download/drive", get(redirect::drive_download))
        .route("/content/video/youtube", get(redirect::youtube_watch))
        .with_state(AppState { access })
        .layer(TraceLayer::new_for_http())
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        // Server-side faults are logged with detail and surfaced only as a
        // generic message; nothing secret-derived reaches a response body.
        if self.is_internal() {
            tracing::error!(error = %self, "content access failure");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate content access".to_string(),
                }),
            )
                .into_response();
        }

        let status = match self {
            AccessError::Unauthorized => StatusCode::UNAUTHORIZED,
            AccessError::MissingFileRef => StatusCode::BAD_REQUEST,
            AccessError::NotFound => StatusCode::NOT_FOUND,
            AccessError::LicenseDenied | AccessError::SignatureInvalid => StatusCode::FORBIDDEN,
            AccessError::Expired => StatusCode::GONE,
            AccessError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            // is_internal() covered the rest above.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut response = (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response();

        if let AccessError::RateLimited { retry_after } = self {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, retry_after.into());
        }

        response
    }
}
