use sparkle_suite::trail::{search_optimal_trail, xdp_add_lm, TrailConfig, LOG_ZERO};

const ALZETTE_ROT_R: [u32; 4] = [31, 17, 0, 24];
const ALZETTE_ROT_S: [u32; 4] = [24, 17, 31, 16];

#[test]
fn s5_four_round_trail_matches_the_published_bound() {
    let config = TrailConfig {
        nrounds: 4,
        rot_r: ALZETTE_ROT_R,
        rot_s: ALZETTE_ROT_S,
        best_b: vec![0, -1, -2],
        word_size: 32,
        find_all: false,
    };

    let (trails, g_bn) = search_optimal_trail(&config).expect("a trail always exists");
    assert_eq!(g_bn, -6);
    assert_eq!(trails[0].len(), 4);
}

#[test]
fn s6_seven_round_trail_matches_the_published_bound() {
    let config = TrailConfig {
        nrounds: 7,
        rot_r: ALZETTE_ROT_R,
        rot_s: ALZETTE_ROT_S,
        best_b: vec![0, -1, -2, -6, -10, -18],
        word_size: 32,
        find_all: false,
    };

    let (trails, g_bn) = search_optimal_trail(&config).expect("a trail always exists");
    assert_eq!(g_bn, -18);
    assert_eq!(trails[0].len(), 7);
}

#[test]
fn xdp_add_lm_is_zero_for_the_zero_differential() {
    assert_eq!(xdp_add_lm(0, 0, 0, 32), 0);
}

#[test]
fn xdp_add_lm_never_exceeds_probability_one() {
    for w in [1u32, 8, 16, 32] {
        assert!(xdp_add_lm(0x1234_5678, 0x89AB_CDEF, 0x5555_5555, w) <= 0);
    }
}

#[test]
fn xdp_add_lm_rejects_an_inconsistent_lsb() {
    assert_eq!(xdp_add_lm(1, 0, 0, 8), LOG_ZERO);
}
