//! Share-link parsing to canonical external identifiers.
//!
//! Catalog authors paste whatever link format Google Drive or YouTube put
//! on their clipboard. This module reduces those to the bare file/video id
//! the rest of the pipeline works with: try a path-embedded-id pattern,
//! then a query-parameter pattern, then treat the whole input as a bare
//! identifier. First matching pattern wins.

use crate::AccessError;

/// Minimum length of a Google Drive file id.
const DRIVE_ID_MIN_LEN: usize = 20;

/// Exact length of a YouTube video id.
const YOUTUBE_ID_LEN: usize = 11;

/// A parsed Google Drive reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveLink {
    /// Canonical Drive file id.
    pub file_id: String,
}

/// A parsed YouTube reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YouTubeLink {
    /// Canonical YouTube video id.
    pub video_id: String,
}

/// Extract a Drive file id from a share link or bare id.
///
/// Accepted shapes, tried in order:
/// 1. `.../file/d/<id>/...` (standard share link)
/// 2. `...?id=<id>` (legacy `open`/`uc` links)
/// 3. the entire input as a bare id
///
/// Drive ids are at least 20 characters of `[A-Za-z0-9_-]`.
pub fn parse_drive_link(raw: &str) -> Result<DriveLink, AccessError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AccessError::InvalidLinkFormat(
            "empty Google Drive link".to_string(),
        ));
    }

    let candidate = if let Some(rest) = after_marker(raw, "/file/d/") {
        leading_id(rest)
    } else if let Some(rest) = query_param(raw, "id") {
        leading_id(rest)
    } else {
        raw
    };

    if candidate.len() < DRIVE_ID_MIN_LEN || !is_id(candidate) {
        return Err(AccessError::InvalidLinkFormat(
            "unrecognized Google Drive link".to_string(),
        ));
    }

    Ok(DriveLink {
        file_id: candidate.to_string(),
    })
}

/// Extract a YouTube video id from a share link or bare id.
///
/// Accepted shapes, tried in order:
/// 1. `...watch?v=<id>`
/// 2. `youtu.be/<id>`
/// 3. `.../embed/<id>`
/// 4. the entire input as a bare id
///
/// Video ids are exactly 11 characters of `[A-Za-z0-9_-]`.
pub fn parse_youtube_link(raw: &str) -> Result<YouTubeLink, AccessError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AccessError::InvalidLinkFormat(
            "empty YouTube link".to_string(),
        ));
    }

    let candidate = if let Some(rest) = query_param(raw, "v") {
        leading_id(rest)
    } else if let Some(rest) = after_marker(raw, "youtu.be/") {
        leading_id(rest)
    } else if let Some(rest) = after_marker(raw, "/embed/") {
        leading_id(rest)
    } else {
        raw
    };

    if candidate.len() != YOUTUBE_ID_LEN || !is_id(candidate) {
        return Err(AccessError::InvalidLinkFormat(
            "unrecognized YouTube link".to_string(),
        ));
    }

    Ok(YouTubeLink {
        video_id: candidate.to_string(),
    })
}

/// The remainder of `raw` after the first occurrence of `marker`.
fn after_marker<'a>(raw: &'a str, marker: &str) -> Option<&'a str> {
    raw.find(marker).map(|pos| &raw[pos + marker.len()..])
}

/// The value of query parameter `name`, i.e. the remainder after `?name=`
/// or `&name=`.
fn query_param<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    let question = format!("?{name}=");
    let ampersand = format!("&{name}=");
    after_marker(raw, &question).or_else(|| after_marker(raw, &ampersand))
}

/// The leading run of id characters.
fn leading_id(s: &str) -> &str {
    let end = s.find(|c| !is_id_char(c)).unwrap_or(s.len());
    &s[..end]
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_id_char)
}
