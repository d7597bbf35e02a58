//! The ℓ-layer: the Feistel-like linear diffusion step that mixes the
//! ARX-box outputs across branches once per SPARKLE step.
//!
//! Grounded on the `LINEAR LAYER` blocks of `sparkle()`/`sparkle_inv()` in
//! `examples/original_source/software/sparkle/sparkle.c`.

/// The building block of the linear layer: `ℓ(x) = ROTR(x ⊕ (x << 16), 16)`.
/// Also reused directly by the ESCH message-injection Feistel, which applies
/// the same function to its running `tmpx`/`tmpy` accumulators.
#[inline(always)]
pub(crate) fn ell(x: u32) -> u32 {
    (x ^ (x << 16)).rotate_right(16)
}

/// Applies the forward ℓ-layer in place. `brans` is the total number of
/// `(x, y)` branches (state has `2 * brans` words); `half = brans / 2`
/// branches feed the two running XORs `tx`/`ty` that get folded back in.
pub(crate) fn linear_layer(state: &mut [u32], brans: usize) {
    let half = brans / 2;

    let mut tmpx = state[0];
    let mut tmpy = state[1];
    let mut j = 2;
    while j < brans {
        tmpx ^= state[j];
        tmpy ^= state[j + 1];
        j += 2;
    }

    tmpx = ell(tmpx);
    tmpy = ell(tmpy);

    let x0 = state[0];
    let y0 = state[1];

    let mut j = 2;
    while j < brans {
        state[j - 2] = state[j + brans] ^ state[j] ^ tmpy;
        state[j + brans] = state[j];
        state[j - 1] = state[j + brans + 1] ^ state[j + 1] ^ tmpx;
        state[j + brans + 1] = state[j + 1];
        j += 2;
    }

    state[brans - 2] = state[brans] ^ x0 ^ tmpy;
    state[brans] = x0;
    state[brans - 1] = state[brans + 1] ^ y0 ^ tmpx;
    state[brans + 1] = y0;

    debug_assert_eq!(half * 2, brans);
}

/// Applies the inverse ℓ-layer in place. Undoes [`linear_layer`] exactly,
/// transliterated from `sparkle_inv`'s `LINEAR LAYER` block: the rotated
/// accumulators must be rebuilt from the *old* values before the state is
/// overwritten, hence the `xb1`/`yb1` rescue of the about-to-be-clobbered
/// words.
pub(crate) fn linear_layer_inv(state: &mut [u32], brans: usize) {
    let mut tmpx = 0u32;
    let mut tmpy = 0u32;

    let xb1 = state[brans - 2];
    let yb1 = state[brans - 1];

    let mut j = brans as isize - 2;
    while j > 0 {
        let jj = j as usize;
        state[jj] = state[jj + brans];
        tmpx ^= state[jj];
        state[jj + brans] = state[jj - 2];

        state[jj + 1] = state[jj + brans + 1];
        tmpy ^= state[jj + 1];
        state[jj + brans + 1] = state[jj - 1];

        j -= 2;
    }

    state[0] = state[brans];
    tmpx ^= state[0];
    state[brans] = xb1;

    state[1] = state[brans + 1];
    tmpy ^= state[1];
    state[brans + 1] = yb1;

    tmpx = ell(tmpx);
    tmpy = ell(tmpy);

    let mut j = brans as isize - 2;
    while j >= 0 {
        let jj = j as usize;
        state[jj + brans] ^= tmpy ^ state[jj];
        state[jj + brans + 1] ^= tmpx ^ state[jj + 1];
        j -= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ell_matches_reference_values() {
        assert_eq!(ell(0), 0);
        assert_eq!(ell(1), 0x0001_0000);
    }

    #[test]
    fn linear_layer_is_invertible_for_all_instances() {
        for &brans in &[4usize, 6, 8] {
            let mut state: Vec<u32> = (0..2 * brans as u32).map(|i| i * 0x1111_1111 + 7).collect();
            let original = state.clone();
            linear_layer(&mut state, brans);
            assert_ne!(state, original);
            linear_layer_inv(&mut state, brans);
            assert_eq!(state, original);
        }
    }
}
