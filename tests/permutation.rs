use sparkle_suite::permutation::{sparkle, sparkle_inv};

fn involution_holds(words: usize, steps: usize) {
    let mut state: Vec<u32> = (0..words as u32).map(|i| i.wrapping_mul(0x2545_F491) ^ 0xC0FF_EE00).collect();
    let original = state.clone();

    sparkle(&mut state, steps);
    assert_ne!(state, original, "{words}-word state should change under {steps} steps");

    sparkle_inv(&mut state, steps);
    assert_eq!(state, original, "sparkle_inv must undo sparkle exactly");
}

#[test]
fn sparkle256_is_an_involution_pair() {
    involution_holds(8, 7);
    involution_holds(8, 10);
}

#[test]
fn sparkle384_is_an_involution_pair() {
    involution_holds(12, 7);
    involution_holds(12, 11);
}

#[test]
fn sparkle512_is_an_involution_pair() {
    involution_holds(16, 8);
    involution_holds(16, 12);
}

#[test]
fn distinct_inputs_diverge_after_full_steps() {
    let mut a = vec![0u32; 8];
    let mut b = vec![0u32; 8];
    b[0] = 1;

    sparkle(&mut a, 10);
    sparkle(&mut b, 10);

    let differing_words = a.iter().zip(&b).filter(|(x, y)| x != y).count();
    assert!(differing_words > 4, "a single-bit input difference should diffuse across most of the state");
}
