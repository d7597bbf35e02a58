//! The SCHWAEMM sponge construction: state initialization, the ρ/ρ′
//! Feistel-and-whitening step, associated-data/plaintext/ciphertext
//! processing, and finalization.
//!
//! Grounded bit-exactly on `examples/original_source/software/schwaemm/src/
//! schwaemm.c` (`rho_whi_*`, `Initialize`, `ProcessAssocData`,
//! `ProcessPlainText`, `ProcessCipherText`, `Finalize`, `GenerateTag`,
//! `VerifyTag`), adapted from the C reference's flat `uint32_t *state`
//! convention (which this crate's [`crate::permutation`] module also uses)
//! rather than `code-of-kai-git_veil`'s parallel-array `x[]`/`y[]` split.

use super::SchwaemmInstance;
use crate::permutation::sparkle;
use crate::sponge::{bytes_to_words_le, words_to_bytes_le};

/// The "tweak" from spec/schwaemm section 2.3.2: when the rate is wider
/// than the capacity (only true for Schwaemm256_128), capacity-word
/// indices used in rate-whitening wrap modulo `cap_words`.
fn cap_index(i: usize, rate_words: usize, cap_words: usize) -> usize {
    if rate_words > cap_words {
        i & (cap_words - 1)
    } else {
        i
    }
}

fn domain_constants(instance: SchwaemmInstance) -> (u32, u32, u32, u32) {
    let cap_brans = (instance.cap_words() / 2) as u32;
    let tweak = 1u32 << cap_brans;
    (
        (0 ^ tweak) << 24,
        (1 ^ tweak) << 24,
        (2 ^ tweak) << 24,
        (3 ^ tweak) << 24,
    )
}

/// Loads nonce into the rate-part and key into the capacity-part of a
/// freshly zeroed state, then runs SPARKLE with the big step count.
pub(super) fn initialize(instance: SchwaemmInstance, key: &[u8], nonce: &[u8]) -> Vec<u32> {
    let mut state = vec![0u32; instance.state_words()];
    let nonce_words = bytes_to_words_le(nonce);
    let key_words = bytes_to_words_le(key);

    state[..nonce_words.len()].copy_from_slice(&nonce_words);
    state[instance.rate_words()..instance.rate_words() + key_words.len()].copy_from_slice(&key_words);

    sparkle(&mut state, instance.steps_big());
    state
}

/// The combined ρ/rate-whitening step for associated-data authentication:
/// a Feistel swap of the two rate halves folded together with whitening
/// from the capacity.
fn rho_whi_aut(state: &mut [u32], block: &[u32], rate_words: usize, cap_words: usize) {
    let half = rate_words / 2;
    for i in 0..half {
        let j = i + half;
        let tmp_i = state[i];
        state[i] = state[j] ^ block[i] ^ state[rate_words + i];
        state[j] ^= tmp_i ^ block[j] ^ state[rate_words + cap_index(j, rate_words, cap_words)];
    }
}

/// The combined ρ/rate-whitening step for encryption: as [`rho_whi_aut`],
/// plus `out[k] = block[k] ^ (old state[k])` to produce ciphertext.
fn rho_whi_enc(state: &mut [u32], out: &mut [u32], block: &[u32], rate_words: usize, cap_words: usize) {
    let half = rate_words / 2;
    for i in 0..half {
        let j = i + half;
        let tmp_i = state[i];
        let tmp_j = state[j];
        state[i] = state[j] ^ block[i] ^ state[rate_words + i];
        state[j] ^= tmp_i ^ block[j] ^ state[rate_words + cap_index(j, rate_words, cap_words)];
        out[i] = block[i] ^ tmp_i;
        out[j] = block[j] ^ tmp_j;
    }
}

/// The combined ρ′/rate-whitening step for decryption: mirrors
/// [`rho_whi_enc`] with the state update inverted so the *plaintext*
/// (rather than the ciphertext) is threaded into the sponge.
fn rho_whi_dec(state: &mut [u32], out: &mut [u32], block: &[u32], rate_words: usize, cap_words: usize) {
    let half = rate_words / 2;
    for i in 0..half {
        let j = i + half;
        let tmp_i = state[i];
        let tmp_j = state[j];
        state[i] ^= state[j] ^ block[i] ^ state[rate_words + i];
        state[j] = tmp_i ^ block[j] ^ state[rate_words + cap_index(j, rate_words, cap_words)];
        out[i] = block[i] ^ tmp_i;
        out[j] = block[j] ^ tmp_j;
    }
}

/// Absorbs associated data. Caller must skip this entirely for empty `ad`
/// (the state update it performs is not a no-op on empty input).
pub(super) fn process_assoc_data(instance: SchwaemmInstance, state: &mut [u32], ad: &[u8]) {
    let rate_bytes = instance.rate_words() * 4;
    let rate_words = instance.rate_words();
    let cap_words = instance.cap_words();
    let (a0, a1, _, _) = domain_constants(instance);
    let last = state.len() - 1;

    let mut offset = 0;
    while ad.len() - offset > rate_bytes {
        let block = bytes_to_words_le(&ad[offset..offset + rate_bytes]);
        rho_whi_aut(state, &block, rate_words, cap_words);
        sparkle(state, instance.steps_slim());
        offset += rate_bytes;
    }

    let remaining = &ad[offset..];
    state[last] ^= if remaining.len() < rate_bytes { a0 } else { a1 };
    let padded = crate::sponge::pad_block(remaining, rate_bytes);
    let block = bytes_to_words_le(&padded);
    rho_whi_aut(state, &block, rate_words, cap_words);
    sparkle(state, instance.steps_big());
}

/// Encrypts plaintext in place of associated data's role; returns the
/// ciphertext. Caller must skip this for empty `pt`.
pub(super) fn process_plaintext(instance: SchwaemmInstance, state: &mut [u32], pt: &[u8]) -> Vec<u8> {
    let rate_bytes = instance.rate_words() * 4;
    let rate_words = instance.rate_words();
    let cap_words = instance.cap_words();
    let (_, _, m2, m3) = domain_constants(instance);
    let last = state.len() - 1;

    let mut ciphertext = Vec::with_capacity(pt.len());
    let mut offset = 0;
    while pt.len() - offset > rate_bytes {
        let block = bytes_to_words_le(&pt[offset..offset + rate_bytes]);
        let mut out = vec![0u32; rate_words];
        rho_whi_enc(state, &mut out, &block, rate_words, cap_words);
        sparkle(state, instance.steps_slim());
        let mut out_bytes = vec![0u8; rate_bytes];
        words_to_bytes_le(&out, &mut out_bytes);
        ciphertext.extend_from_slice(&out_bytes);
        offset += rate_bytes;
    }

    let remaining = &pt[offset..];
    state[last] ^= if remaining.len() < rate_bytes { m2 } else { m3 };
    let padded = crate::sponge::pad_block(remaining, rate_bytes);
    let block = bytes_to_words_le(&padded);
    let mut out = vec![0u32; rate_words];
    rho_whi_enc(state, &mut out, &block, rate_words, cap_words);
    sparkle(state, instance.steps_big());
    let mut out_bytes = vec![0u8; rate_bytes];
    words_to_bytes_le(&out, &mut out_bytes);
    ciphertext.extend_from_slice(&out_bytes[..remaining.len()]);

    ciphertext
}

/// Decrypts ciphertext; returns the recovered plaintext. Caller must skip
/// this for empty `ct`.
pub(super) fn process_ciphertext(instance: SchwaemmInstance, state: &mut [u32], ct: &[u8]) -> Vec<u8> {
    let rate_bytes = instance.rate_words() * 4;
    let rate_words = instance.rate_words();
    let cap_words = instance.cap_words();
    let (_, _, m2, m3) = domain_constants(instance);
    let last = state.len() - 1;

    let mut plaintext = Vec::with_capacity(ct.len());
    let mut offset = 0;
    while ct.len() - offset > rate_bytes {
        let block = bytes_to_words_le(&ct[offset..offset + rate_bytes]);
        let mut out = vec![0u32; rate_words];
        rho_whi_dec(state, &mut out, &block, rate_words, cap_words);
        sparkle(state, instance.steps_slim());
        let mut out_bytes = vec![0u8; rate_bytes];
        words_to_bytes_le(&out, &mut out_bytes);
        plaintext.extend_from_slice(&out_bytes);
        offset += rate_bytes;
    }

    let remaining = &ct[offset..];
    state[last] ^= if remaining.len() < rate_bytes { m2 } else { m3 };

    // Partial last block: the ciphertext bytes beyond `remaining.len()` are
    // implicitly the zero-plaintext keystream, i.e. the pre-whitening rate
    // bytes of `state` itself; the 0x80 padding marker is XORed on top.
    let mut buf = vec![0u8; rate_bytes];
    buf[..remaining.len()].copy_from_slice(remaining);
    if remaining.len() < rate_bytes {
        let mut rate_bytes_snapshot = vec![0u8; rate_bytes];
        words_to_bytes_le(&state[..rate_words], &mut rate_bytes_snapshot);
        buf[remaining.len()..].copy_from_slice(&rate_bytes_snapshot[remaining.len()..]);
        buf[remaining.len()] ^= 0x80;
    }
    let block = bytes_to_words_le(&buf);

    let mut out = vec![0u32; rate_words];
    rho_whi_dec(state, &mut out, &block, rate_words, cap_words);
    sparkle(state, instance.steps_big());
    let mut out_bytes = vec![0u8; rate_bytes];
    words_to_bytes_le(&out, &mut out_bytes);
    plaintext.extend_from_slice(&out_bytes[..remaining.len()]);

    plaintext
}

/// XORs the key into the capacity part of the state.
pub(super) fn finalize(instance: SchwaemmInstance, state: &mut [u32], key: &[u8]) {
    let key_words = bytes_to_words_le(key);
    let rate_words = instance.rate_words();
    for (i, word) in key_words.iter().enumerate() {
        state[rate_words + i] ^= word;
    }
}

/// Reads the tag out of the capacity part of the state.
pub(super) fn generate_tag(instance: SchwaemmInstance, state: &[u32]) -> Vec<u8> {
    let rate_words = instance.rate_words();
    let tag_words = instance.tag_bytes() / 4;
    let mut tag = vec![0u8; instance.tag_bytes()];
    words_to_bytes_le(&state[rate_words..rate_words + tag_words], &mut tag);
    tag
}

/// Constant-time comparison between the capacity part of the state and a
/// caller-supplied tag: every byte is compared regardless of earlier
/// mismatches, folding into a single OR accumulator (no early exit).
pub(super) fn verify_tag(instance: SchwaemmInstance, state: &[u32], tag: &[u8]) -> bool {
    let computed = generate_tag(instance, state);
    let mut diff = 0u8;
    for (a, b) in computed.iter().zip(tag.iter()) {
        diff |= a ^ b;
    }
    diff == 0
}
