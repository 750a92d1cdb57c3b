//! ChaCha20, Poly1305, and ChaCha20-Poly1305 AEAD (RFC 8439).
//!
//! This crate provides the cryptographic core of RFC 8439: the ChaCha20
//! stream cipher, the Poly1305 one-time message authenticator, and their
//! combination into an authenticated encryption construction.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are designed to be dependency-free, explicit in their
//! semantics, and suitable for security-critical code. This crate does
//! not generate keys or nonces, does not manage key storage, and does
//! not provide a streaming/sink abstraction — it consumes and returns
//! plain byte slices, and everything else is the caller's concern.
//!
//! # Module overview
//!
//! - `chacha20`
//!   The ChaCha20 block function and the stream cipher built from it:
//!   state initialization, the 20-round permutation, and the keystream
//!   XOR loop.
//!
//! - `poly1305`
//!   The Poly1305 one-time authenticator: key clamping, 16-byte block
//!   absorption into a field element modulo `2^130 - 5`, and tag
//!   finalization.
//!
//! - `aead`
//!   The ChaCha20-Poly1305 AEAD construction ([`aead::seal`] /
//!   [`aead::open`]): one-time key derivation, associated-data framing,
//!   and constant-time tag verification.
//!
//! - `util`
//!   Constant-time byte comparison, used for tag verification. No key
//!   material and no algorithm-specific logic lives here.
//!
//! # Design goals
//!
//! - No heap allocation beyond the output buffer (`aead::seal`'s and
//!   `aead::open`'s returned `Vec`) and small fixed-size scratch state.
//! - Explicit, minimal APIs: one function per RFC operation.
//! - Constant-time tag comparison; no data-dependent branching on
//!   secret values anywhere else in the protocol.
//! - Bit-exact agreement with RFC 8439, verified against its published
//!   test vectors.
//!
//! This crate is not intended to replace full-featured, externally
//! audited cryptographic libraries. It has not been independently
//! audited, and it makes no attempt at SIMD vectorization, fault-
//! injection resistance, or extended-nonce (XChaCha20) support.
//!
//! # Nonce safety
//!
//! Every public entry point that accepts a nonce requires the caller to
//! guarantee it is never reused with the same key. This crate performs
//! no detection of nonce reuse; reuse silently destroys both
//! confidentiality and authenticity.

pub mod aead;
pub mod chacha20;
pub mod poly1305;
mod util;
