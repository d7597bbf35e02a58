//! The ESCH sponge hash: message-injection Feistel, domain-separated last
//! block, and the squeeze loop.
//!
//! Grounded bit-exactly on `examples/original_source/software/esch/src/
//! esch.c` (`Initialize`, `add_msg_blk`, `add_msg_blk_last`,
//! `ProcessMessage`, `Finalize`). Note the message-injection Feistel here is
//! distinct from SCHWAEMM's ρ/rate-whitening step in [`crate::aead`]: ESCH
//! injects the same folded `tmpx`/`tmpy` pair into every capacity word up to
//! `state_words / 2`, rather than whitening the full capacity.

use super::EschInstance;
use crate::permutation::{ell, sparkle};
use crate::sponge::{bytes_to_words_le, pad_block, words_to_bytes_le};

const CONST_M1: u32 = 1 << 24;
const CONST_M2: u32 = 2 << 24;

/// Folds a rate-sized block into `state` via the message-injection Feistel.
fn add_msg_blk(state: &mut [u32], block: &[u32], rate_words: usize) {
    let mut tmpx = 0u32;
    let mut tmpy = 0u32;
    let mut i = 0;
    while i < rate_words {
        tmpx ^= block[i];
        tmpy ^= block[i + 1];
        i += 2;
    }
    tmpx = ell(tmpx);
    tmpy = ell(tmpy);

    let mut i = 0;
    while i < rate_words {
        state[i] ^= block[i] ^ tmpy;
        state[i + 1] ^= block[i + 1] ^ tmpx;
        i += 2;
    }

    let half = state.len() / 2;
    let mut i = rate_words;
    while i < half {
        state[i] ^= tmpy;
        state[i + 1] ^= tmpx;
        i += 2;
    }
}

pub(super) fn process_message(instance: EschInstance, state: &mut [u32], message: &[u8]) {
    let rate_bytes = instance.rate_words() * 4;
    let rate_words = instance.rate_words();
    let last_idx = instance.state_brans() - 1;

    let mut offset = 0;
    while message.len() - offset > rate_bytes {
        let block = bytes_to_words_le(&message[offset..offset + rate_bytes]);
        add_msg_blk(state, &block, rate_words);
        sparkle(state, instance.steps_slim());
        offset += rate_bytes;
    }

    let remaining = &message[offset..];
    state[last_idx] ^= if remaining.len() < rate_bytes { CONST_M1 } else { CONST_M2 };
    let padded = pad_block(remaining, rate_bytes);
    let block = bytes_to_words_le(&padded);
    add_msg_blk(state, &block, rate_words);
    sparkle(state, instance.steps_big());
}

/// Squeezes `digest_bytes` out of `state`, re-running SPARKLE with the slim
/// step count between each rate-sized chunk taken.
pub(super) fn finalize(instance: EschInstance, state: &mut [u32], digest_bytes: usize) -> Vec<u8> {
    let rate_bytes = instance.rate_words() * 4;
    let mut digest = vec![0u8; digest_bytes];

    let mut chunk = vec![0u8; rate_bytes];
    words_to_bytes_le(&state[..instance.rate_words()], &mut chunk);
    digest[..rate_bytes].copy_from_slice(&chunk);

    let mut outlen = rate_bytes;
    while outlen < digest_bytes {
        sparkle(state, instance.steps_slim());
        words_to_bytes_le(&state[..instance.rate_words()], &mut chunk);
        let take = (digest_bytes - outlen).min(rate_bytes);
        digest[outlen..outlen + take].copy_from_slice(&chunk[..take]);
        outlen += take;
    }

    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_msg_blk_is_deterministic() {
        let mut s1 = vec![0u32; 12];
        let mut s2 = vec![0u32; 12];
        let block = vec![1u32, 2, 3, 4];
        add_msg_blk(&mut s1, &block, 4);
        add_msg_blk(&mut s2, &block, 4);
        assert_eq!(s1, s2);
        assert_ne!(s1, vec![0u32; 12]);
    }
}
