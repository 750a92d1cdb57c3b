//! ChaCha20 state and block function (RFC 8439 §2.1-2.3).
//!
//! This module owns the 16-word ChaCha20 state, the quarter-round
//! permutation, and the serialization of one 64-byte keystream block. It
//! does not know about messages, counters across a whole stream, or
//! authentication; [`crate::chacha20::cipher`] builds those on top.

/// ChaCha20 constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"`
/// encoded as little-endian `u32` words, as defined in RFC 8439 §2.3.
/// They are public, fixed, and non-secret, and define the ChaCha20
/// permutation domain.
const CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// One 64-byte ChaCha20 keystream block, serialized little-endian.
pub type KeystreamBlock = [u8; 64];

/// The 16-word ChaCha20 state.
///
/// Logically a 4x4 matrix of `u32` words laid out as constants (0-3),
/// key (4-11), block counter (12), nonce (13-15). The state is a value
/// type: built once per block, permuted on a local copy, then discarded.
#[derive(Clone, Copy)]
pub(crate) struct State(pub(crate) [u32; 16]);

impl State {
    /// Builds the initial state for one block of the IETF (96-bit nonce)
    /// variant of ChaCha20.
    ///
    /// `key` and `nonce` are decoded as little-endian 32-bit words
    /// regardless of host byte order.
    pub(crate) fn new(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> Self {
        let mut words = [0u32; 16];

        words[0..4].copy_from_slice(&CONSTANTS);

        words[4..12]
            .iter_mut()
            .zip(key.chunks_exact(4))
            .for_each(|(w, k)| *w = u32::from_le_bytes(k.try_into().unwrap()));

        words[12] = counter;

        words[13..16]
            .iter_mut()
            .zip(nonce.chunks_exact(4))
            .for_each(|(w, n)| *w = u32::from_le_bytes(n.try_into().unwrap()));

        State(words)
    }

    /// Runs the 20-round ChaCha20 permutation and serializes the result
    /// as one keystream block.
    ///
    /// The permutation is applied to a working copy of the state; the
    /// original state is added back word-wise (mod 2^32) after the
    /// rounds, per RFC 8439 §2.3, then the 16 words are serialized
    /// little-endian.
    pub(crate) fn keystream(&self) -> KeystreamBlock {
        let mut w = self.0;

        for _ in 0..10 {
            // Column rounds.
            quarter_round(&mut w, 0, 4, 8, 12);
            quarter_round(&mut w, 1, 5, 9, 13);
            quarter_round(&mut w, 2, 6, 10, 14);
            quarter_round(&mut w, 3, 7, 11, 15);

            // Diagonal rounds.
            quarter_round(&mut w, 0, 5, 10, 15);
            quarter_round(&mut w, 1, 6, 11, 12);
            quarter_round(&mut w, 2, 7, 8, 13);
            quarter_round(&mut w, 3, 4, 9, 14);
        }

        for (out, orig) in w.iter_mut().zip(&self.0) {
            *out = out.wrapping_add(*orig);
        }

        let mut block = [0u8; 64];
        block
            .chunks_exact_mut(4)
            .zip(&w)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

        block
    }
}

/// Performs one ChaCha20 quarter round in place over four indices of
/// `state`.
///
/// Addition is modulo 2^32 (`wrapping_add`); rotations are the fixed
/// distances 16, 12, 8, 7 from RFC 8439 §2.1. Branchless, constant-time
/// with respect to its inputs.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Produces a single 64-byte ChaCha20 keystream block for `(key, counter,
/// nonce)`.
///
/// This is the entry point used both by the stream cipher (for each
/// 64-byte window of the message) and by the AEAD layer (counter 0, to
/// derive the Poly1305 one-time key).
pub(crate) fn block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> KeystreamBlock {
    State::new(key, counter, nonce).keystream()
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8439 §2.3.2.
    #[test]
    fn rfc8439_block_vector() {
        let mut key = [0u8; 32];
        for (i, b) in key.iter_mut().enumerate() {
            *b = i as u8;
        }
        let nonce = [0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x4a, 0x00, 0x00, 0x00, 0x00];

        let ks = block(&key, 1, &nonce);

        assert_eq!(&ks[..16], &[
            0x10, 0xf1, 0xe7, 0xe4, 0xd1, 0x3b, 0x59, 0x15, 0x50, 0x0f, 0xdd, 0x1f, 0xa3, 0x20,
            0x71, 0xc4,
        ]);
        assert_eq!(&ks[48..], &[
            0xe8, 0x83, 0xd0, 0xcb, 0x4e, 0x3c, 0x50, 0xa2, 0xeb, 0x65, 0xe5, 0xd5, 0xe4, 0x03,
            0x0e, 0xca,
        ]);
    }

    #[test]
    fn state_layout_matches_spec() {
        let key = [0u8; 32];
        let nonce = [0u8; 12];
        let state = State::new(&key, 7, &nonce);

        assert_eq!(&state.0[0..4], &CONSTANTS);
        assert_eq!(state.0[12], 7);
    }
}
