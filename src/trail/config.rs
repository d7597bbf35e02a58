//! Search parameters and the data shapes a trail search produces.
//!
//! Grounded on `examples/original_source/analysis/diffsearch/trail.h`
//! (`Differential`, `Trail`) and `sparkle_best_trail_search.h` (the
//! `best_B[]`/`NROUNDS`/rotation-constant globals, here bundled into a single
//! owned [`TrailConfig`] instead of file-scope globals and preprocessor
//! constants, matching the crate's existing preference for explicit
//! parameters over the reference's global state).

/// One round's differential: the ARX-box input/output differences and the
/// log2 probabilities of this round alone (`p`) and of the trail prefix
/// ending at this round (`cp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Differential {
    pub dx: u32,
    pub dy: u32,
    pub dz: u32,
    pub p: i32,
    pub cp: i32,
}

/// A full differential trail, one [`Differential`] per round. The reference
/// caps this at a fixed-size `array<Differential, 100>`; an owned `Vec` is
/// used here since `TrailConfig::nrounds` is a runtime value, not a compile
/// time constant.
pub type Trail = Vec<Differential>;

/// Search parameters for one Alzette branch's differential trail search.
///
/// `rot_r`/`rot_s` are the four round-dependent rotation amounts used by
/// [`super::search::search_optimal_trail`]'s round-transition formula
/// `beta' = rotl(alpha, rot_r[round]) ^ rotr(gamma, rot_s[round])`; Alzette
/// itself only has 4 distinct (r, s) pairs, reused cyclically across rounds.
#[derive(Debug, Clone)]
pub struct TrailConfig {
    /// Number of rounds to search a trail over.
    pub nrounds: usize,
    /// Left-rotation amounts, one per Alzette sub-round, cycled modulo 4.
    pub rot_r: [u32; 4],
    /// Right-rotation amounts, one per Alzette sub-round, cycled modulo 4.
    pub rot_s: [u32; 4],
    /// Best known log2 probability bound for an `n`-round trail, indexed by
    /// `n - 1` (so `best_b[0]` bounds a 1-round trail). Used both to seed the
    /// outer `g_Bn` search and to prune partial trails.
    pub best_b: Vec<i32>,
    /// Word size of the ARX box operated on (32 for the published Alzette).
    pub word_size: u32,
    /// Mirrors `defs.h`'s `ALL_TRAILS`. When `false` (the default),
    /// [`super::search::search_optimal_trail`] returns as soon as it finds
    /// one trail meeting the bound. When `true`, it keeps exploring every
    /// remaining branch at that bound and returns every trail that meets it.
    pub find_all: bool,
}

impl TrailConfig {
    pub(super) fn rot_r(&self, round: usize) -> u32 {
        self.rot_r[(round - 1) % 4]
    }

    pub(super) fn rot_s(&self, round: usize) -> u32 {
        self.rot_s[(round - 1) % 4]
    }
}

/// Node-visit counters, gated behind the `stats` feature the same way the
/// reference gates its `#ifdef STATS` counters.
#[derive(Debug, Clone, Copy, Default)]
#[cfg(feature = "stats")]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub dead_ends: u64,
    pub trails_found: u64,
}

#[cfg(feature = "stats")]
impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }
}
