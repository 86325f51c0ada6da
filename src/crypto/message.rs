//! Canonical byte strings for link signing.
//!
//! The signature format is the one bit-exact contract in this crate:
//! HMAC-SHA256 over `"<id>:<name>:<expires>"`, lowercase hex. Already
//! issued links must keep verifying until they expire naturally, so these
//! encoders must never change shape.
//!
//! The two families keep distinct, unparameterized builders on purpose:
//! each redirect endpoint reconstructs its byte string independently from
//! query parameters, and folding the builders together invites a refactor
//! that breaks that symmetry silently.

/// Delimiter between tuple fields.
const DELIMITER: char = ':';

/// Canonical bytes for a document link: `"<fileId>:<fileName>:<expires>"`.
pub fn document_message(file_id: &str, file_name: &str, expires: i64) -> String {
    format!("{}{}{}{}{}", file_id, DELIMITER, file_name, DELIMITER, expires)
}

/// Canonical bytes for a video link: `"<videoId>:<title>:<expires>"`.
pub fn video_message(video_id: &str, title: &str, expires: i64) -> String {
    format!("{}{}{}{}{}", video_id, DELIMITER, title, DELIMITER, expires)
}
