//! HMAC-SHA256 link signing and verification.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::AccessError;

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex-encoded HMAC-SHA256 digest.
pub const SIGNATURE_LEN: usize = 64;

/// Signs and verifies short-lived access links.
///
/// Signatures are deterministic given the secret and the message: no nonce,
/// no persisted state, so verification is pure recomputation.
#[derive(Clone)]
pub struct LinkSigner {
    secret: Vec<u8>,
}

impl std::fmt::Debug for LinkSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose key material through Debug.
        f.debug_struct("LinkSigner").finish_non_exhaustive()
    }
}

impl LinkSigner {
    /// Create a signer over the given secret.
    ///
    /// Secret length is enforced by [`DeliveryConfig::validate`](crate::DeliveryConfig::validate)
    /// before any signer is constructed.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Compute the signature for a canonical message: lowercase hex,
    /// [`SIGNATURE_LEN`] characters.
    pub fn sign(&self, message: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key size");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Whether `signature` is the correct signature for `message`.
    ///
    /// Comparison is constant-time; string equality would leak how many
    /// leading characters of a guessed signature were right.
    pub fn verify(&self, message: &str, signature: &str) -> bool {
        let expected = self.sign(message);
        expected.as_bytes().ct_eq(signature.as_bytes()).into()
    }

    /// Verify a signature bound to an expiry timestamp.
    ///
    /// The expiry check runs first: an expired link fails with
    /// [`AccessError::Expired`] without the MAC ever being computed.
    pub fn verify_expiring(
        &self,
        message: &str,
        signature: &str,
        expires: i64,
        now: DateTime<Utc>,
    ) -> Result<(), AccessError> {
        if now.timestamp() > expires {
            return Err(AccessError::Expired);
        }
        if !self.verify(message, signature) {
            tracing::debug!("access link signature mismatch");
            return Err(AccessError::SignatureInvalid);
        }
        Ok(())
    }
}
