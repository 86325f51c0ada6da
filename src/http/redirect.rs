//! Redirect endpoints: stateless signed-link verifiers.
//!
//! These deliberately re-check neither license nor session - the signature
//! is the capability, valid for anyone holding the URL until it expires.
//! Short link lifetime substitutes for per-request authorization.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::schemas::ErrorResponse;
use super::AppState;

/// Query parameters of a signed document link.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveQuery {
    #[serde(default)]
    file_id: Option<String>,
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default)]
    expires: Option<i64>,
    #[serde(default)]
    signature: Option<String>,
}

/// Query parameters of a signed video link.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeQuery {
    #[serde(default)]
    video_id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    expires: Option<i64>,
    #[serde(default)]
    signature: Option<String>,
}

/// `GET /content/download/drive` - verify a signed document link and
/// redirect to the Drive download URL.
pub async fn drive_download(
    State(state): State<AppState>,
    Query(query): Query<DriveQuery>,
) -> Response {
    let (Some(file_id), Some(file_name), Some(expires), Some(signature)) = (
        query.file_id,
        query.file_name,
        query.expires,
        query.signature,
    ) else {
        return missing_params();
    };

    match state
        .access
        .verify_document_link(&file_id, &file_name, expires, &signature)
    {
        Ok(()) => found(format!(
            "https://drive.google.com/uc?export=download&id={file_id}"
        )),
        Err(error) => error.into_response(),
    }
}

/// `GET /content/video/youtube` - verify a signed video link and redirect
/// to the YouTube watch URL.
pub async fn youtube_watch(
    State(state): State<AppState>,
    Query(query): Query<YouTubeQuery>,
) -> Response {
    let (Some(video_id), Some(title), Some(expires), Some(signature)) = (
        query.video_id,
        query.title,
        query.expires,
        query.signature,
    ) else {
        return missing_params();
    };

    match state
        .access
        .verify_video_link(&video_id, &title, expires, &signature)
    {
        Ok(()) => found(format!("https://www.youtube.com/watch?v={video_id}")),
        Err(error) => error.into_response(),
    }
}

fn missing_params() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Missing required query parameters".to_string(),
        }),
    )
        .into_response()
}

/// A plain 302 with a Location header. The wire contract promises 302
/// specifically, so the status is set by hand rather than through a
/// framework redirect helper.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)], ()).into_response()
}
