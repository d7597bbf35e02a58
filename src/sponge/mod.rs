//! Byte/word conversions and padding shared by the SCHWAEMM sponge AEAD and
//! the ESCH sponge hash.
//!
//! Grounded on `code-of-kai-git_veil`'s `schwaemm_v2.rs`
//! (`bytes_to_words_le`/`words_to_bytes_le`), generalized from its
//! fixed 8/16-word arrays to arbitrary-length slices so both SCHWAEMM's
//! and ESCH's several state widths share one implementation.

/// Packs `bytes` into little-endian 32-bit words, zero-padding the final
/// word if `bytes.len()` isn't a multiple of 4.
pub(crate) fn bytes_to_words_le(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut buf = [0u8; 4];
            buf[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(buf)
        })
        .collect()
}

/// Unpacks `words` into little-endian bytes, truncating to `out.len()`.
pub(crate) fn words_to_bytes_le(words: &[u32], out: &mut [u8]) {
    for (i, &word) in words.iter().enumerate() {
        let start = i * 4;
        if start >= out.len() {
            break;
        }
        let end = (start + 4).min(out.len());
        out[start..end].copy_from_slice(&word.to_le_bytes()[..end - start]);
    }
}

/// Builds a zero-padded, `0x80`-terminated rate-sized block from a
/// (possibly partial) input slice. `input.len()` must be `<= rate_bytes`.
///
/// The `0x80` byte is appended only for partial blocks; a full-rate block
/// is injected unpadded (the domain-separation constant distinguishes the
/// two cases at the caller).
pub(crate) fn pad_block(input: &[u8], rate_bytes: usize) -> Vec<u8> {
    debug_assert!(input.len() <= rate_bytes);
    let mut block = vec![0u8; rate_bytes];
    block[..input.len()].copy_from_slice(input);
    if input.len() < rate_bytes {
        block[input.len()] = 0x80;
    }
    block
}
