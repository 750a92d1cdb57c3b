//! `seal`/`open`: one-time key derivation, MAC input framing, and the
//! encrypt-then-authenticate / verify-then-decrypt orchestration.

use core::fmt;

use crate::chacha20;
use crate::chacha20::block::block;
use crate::poly1305::core::Poly1305;
use crate::util::ct_eq;

/// Length of the trailing authentication tag appended by [`seal`] and
/// expected by [`open`].
pub const TAG_LEN: usize = 16;

/// Errors raised by [`seal`] and [`open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key was not exactly 32 bytes.
    InvalidKey,
    /// The nonce was not exactly 12 bytes.
    InvalidNonce,
    /// `open`'s input was shorter than [`TAG_LEN`], so it cannot even
    /// contain a tag.
    InvalidEnvelope,
    /// The plaintext/ciphertext is longer than ChaCha20 can encrypt
    /// under one `(key, nonce)` pair.
    MessageTooLong,
    /// `open`'s recomputed tag did not match the supplied tag. No
    /// plaintext is produced when this is returned.
    AuthFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidKey => "aead key must be exactly 32 bytes",
            Error::InvalidNonce => "aead nonce must be exactly 12 bytes",
            Error::InvalidEnvelope => "aead ciphertext is shorter than the authentication tag",
            Error::MessageTooLong => "message exceeds the maximum chacha20 keystream length",
            Error::AuthFailed => "authentication failed",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

impl From<chacha20::Error> for Error {
    fn from(err: chacha20::Error) -> Self {
        match err {
            chacha20::Error::InvalidKey => Error::InvalidKey,
            chacha20::Error::InvalidNonce => Error::InvalidNonce,
            chacha20::Error::MessageTooLong => Error::MessageTooLong,
        }
    }
}

/// Encrypts `plaintext` and authenticates it together with `aad`,
/// returning `ciphertext ‖ tag` (length = `plaintext.len() + TAG_LEN`).
///
/// `key` must be 32 bytes and `nonce` must be 12 bytes. The `(key,
/// nonce)` pair must be unique across every call; see the module docs.
pub fn seal(key: &[u8], nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, Error> {
    let key: &[u8; 32] = key.try_into().map_err(|_| Error::InvalidKey)?;
    let nonce: &[u8; 12] = nonce.try_into().map_err(|_| Error::InvalidNonce)?;

    let mut output = vec![0u8; plaintext.len() + TAG_LEN];
    let (ciphertext, tag_slot) = output.split_at_mut(plaintext.len());

    let mut otk = one_time_key(key, nonce);
    chacha20::cipher::xor(key, nonce, 1, plaintext, ciphertext)?;

    let tag = compute_aead_tag(&otk, aad, ciphertext);
    tag_slot.copy_from_slice(&tag);

    otk.fill(0);
    Ok(output)
}

/// Verifies and decrypts `ciphertext_with_tag` (ciphertext followed by
/// its 16-byte tag), authenticated together with `aad`.
///
/// Returns `Error::InvalidEnvelope` if the input is shorter than the
/// tag itself, and `Error::AuthFailed` — with no plaintext produced at
/// all — if the recomputed tag does not match.
pub fn open(key: &[u8], nonce: &[u8], ciphertext_with_tag: &[u8], aad: &[u8]) -> Result<Vec<u8>, Error> {
    let key: &[u8; 32] = key.try_into().map_err(|_| Error::InvalidKey)?;
    let nonce: &[u8; 12] = nonce.try_into().map_err(|_| Error::InvalidNonce)?;

    if ciphertext_with_tag.len() < TAG_LEN {
        return Err(Error::InvalidEnvelope);
    }
    let (ciphertext, received_tag) =
        ciphertext_with_tag.split_at(ciphertext_with_tag.len() - TAG_LEN);

    let mut otk = one_time_key(key, nonce);
    let expected_tag = compute_aead_tag(&otk, aad, ciphertext);

    let ok = ct_eq(&expected_tag, received_tag);
    if !ok {
        otk.fill(0);
        return Err(Error::AuthFailed);
    }

    let mut plaintext = vec![0u8; ciphertext.len()];
    chacha20::cipher::xor(key, nonce, 1, ciphertext, &mut plaintext)?;

    otk.fill(0);
    Ok(plaintext)
}

/// Derives the Poly1305 one-time key: the first 32 bytes of the
/// ChaCha20 keystream block at counter 0 (RFC 8439 §2.6).
fn one_time_key(key: &[u8; 32], nonce: &[u8; 12]) -> [u8; 32] {
    let mut block0 = block(key, 0, nonce);
    let mut otk = [0u8; 32];
    otk.copy_from_slice(&block0[..32]);
    block0.fill(0);
    otk
}

/// Computes the Poly1305 tag over the RFC 8439 §2.8 MAC input framing:
/// `aad ‖ pad16(aad) ‖ ciphertext ‖ pad16(ciphertext) ‖ len(aad) ‖
/// len(ciphertext)`, both lengths 8-byte little-endian.
///
/// The framing is absorbed block by block rather than assembled into a
/// single buffer first, so this allocates no more than the `Poly1305`
/// scratch state itself.
fn compute_aead_tag(otk: &[u8; 32], aad: &[u8], ciphertext: &[u8]) -> [u8; 16] {
    let mut mac = Poly1305::new(otk);

    absorb_padded(&mut mac, aad);
    absorb_padded(&mut mac, ciphertext);

    let mut lengths = [0u8; 16];
    lengths[0..8].copy_from_slice(&(aad.len() as u64).to_le_bytes());
    lengths[8..16].copy_from_slice(&(ciphertext.len() as u64).to_le_bytes());
    mac.update_block(&lengths);

    mac.finalize()
}

/// Absorbs `data` into `mac` as whole 16-byte blocks, zero-padding the
/// final partial block up to 16 bytes (RFC 8439's `pad16`) rather than
/// letting Poly1305 treat it as the message's own final short block.
fn absorb_padded(mac: &mut Poly1305, data: &[u8]) {
    let mut chunks = data.chunks_exact(16);
    for chunk in &mut chunks {
        mac.update_block(chunk);
    }

    let remainder = chunks.remainder();
    if !remainder.is_empty() {
        let mut padded = [0u8; 16];
        padded[..remainder.len()].copy_from_slice(remainder);
        mac.update_block(&padded);
    }
}
