//! Signing primitives for short-lived access links.

pub mod message;
pub mod signer;
