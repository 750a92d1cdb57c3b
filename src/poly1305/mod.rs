//! Poly1305 one-time message authenticator (RFC 8439 §2.5).
//!
//! This module provides an internal implementation of Poly1305, designed
//! to be used as a building block for AEAD constructions such as
//! ChaCha20-Poly1305.
//!
//! The implementation is split into two layers:
//!
//! - [`core`]
//!   Low-level field arithmetic and block absorption: key clamping, the
//!   five-limb accumulator, schoolbook multiplication modulo
//!   2^130 - 5, and finalization. Operates on fixed-size limbs, performs
//!   no allocation, and is the piece that must stay constant-time.
//!
//! - [`mac`]
//!   The safe, one-shot MAC interface: `compute_tag` and `verify_tag`.
//!
//! A Poly1305 key is single-use: a fresh key must be derived per message
//! (the AEAD layer does this via the ChaCha20 block function at counter
//! 0). Reusing a key across two different messages allows full key
//! recovery from the two tags.

pub mod core;
pub mod mac;

pub use mac::{compute_tag, verify_tag, Error};
