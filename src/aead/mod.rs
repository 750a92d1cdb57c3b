//! ChaCha20-Poly1305 authenticated encryption with associated data
//! (RFC 8439 §2.8).
//!
//! This module composes [`crate::chacha20`] and [`crate::poly1305`] into
//! the AEAD construction: encrypt-then-MAC on [`seal`], verify-then-
//! decrypt on [`open`].
//!
//! # Nonce discipline
//!
//! A `(key, nonce)` pair must never be used for more than one [`seal`]
//! call. This crate performs no nonce-reuse detection of any kind —
//! there is no hidden misuse-resistance here, despite that phrase
//! sometimes being attached to AEAD constructions in other contexts.
//! Reusing a nonce under the same key breaks both confidentiality and
//! authenticity of every message that shares it.

mod seal;

pub use seal::{open, seal, Error};
