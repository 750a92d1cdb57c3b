//! High-level Poly1305 MAC interface: [`compute_tag`] and
//! [`verify_tag`].
//!
//! This is the only part of the module meant to be used outside the
//! crate's own AEAD layer. It hides the limb representation in
//! [`super::core`] behind a byte-oriented API.

use core::fmt;

use super::core::Poly1305;
use crate::util::ct_eq;

/// Errors raised by the Poly1305 MAC entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The one-time key was not exactly 32 bytes.
    InvalidMacKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("poly1305 one-time key must be exactly 32 bytes")
    }
}

impl std::error::Error for Error {}

/// Computes the 16-byte Poly1305 tag for `message` under `one_time_key`.
///
/// `one_time_key` must never be reused across two different messages;
/// callers authenticating more than one message must derive a fresh key
/// per message (see [`crate::aead`], which does this from ChaCha20).
pub fn compute_tag(one_time_key: &[u8], message: &[u8]) -> Result<[u8; 16], Error> {
    let key: &[u8; 32] = one_time_key.try_into().map_err(|_| Error::InvalidMacKey)?;

    let mut mac = Poly1305::new(key);
    for chunk in message.chunks(16) {
        mac.update_block(chunk);
    }

    Ok(mac.finalize())
}

/// Recomputes the Poly1305 tag for `message` under `one_time_key` and
/// compares it against `tag` in constant time.
///
/// Returns `Ok(true)`/`Ok(false)` for a correctly sized key; the
/// comparison itself never short-circuits on the first differing byte.
pub fn verify_tag(one_time_key: &[u8], message: &[u8], tag: &[u8; 16]) -> Result<bool, Error> {
    let expected = compute_tag(one_time_key, message)?;
    Ok(ct_eq(&expected, tag))
}
