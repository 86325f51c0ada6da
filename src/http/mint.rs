//! `POST /content/access` - mint a signed access URL.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use crate::access::MintOutcome;

use super::schemas::{AccessRequest, AccessResponse};
use super::{AppState, AuthenticatedUser};

/// Mint a signed, short-lived access URL for a catalog file.
///
/// Extractors are deliberately soft: authentication and body validation are
/// pipeline steps inside the orchestrator, so a missing or malformed body
/// yields the documented 400 and a missing identity the documented 401
/// instead of whatever the framework's rejection would say.
pub async fn mint_access(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    payload: Result<Json<AccessRequest>, JsonRejection>,
) -> Response {
    let user_id = user.as_ref().map(|e| e.0.id.as_str());
    let file_ref = payload
        .as_ref()
        .ok()
        .and_then(|b| b.product_file_id.as_deref());

    match state.access.mint(user_id, file_ref).await {
        Ok(MintOutcome::Granted(access)) => {
            (StatusCode::OK, Json(AccessResponse::from(access))).into_response()
        }
        Ok(MintOutcome::NotConfigured { message }) => {
            (StatusCode::OK, Json(AccessResponse::not_configured(message))).into_response()
        }
        Err(error) => error.into_response(),
    }
}
