//! Differential trail search for the Alzette ARX box: the probability of
//! modular-addition differentials ([`xdp::xdp_add_lm`]) and a branch-and-
//! bound search for the best `n`-round trail ([`search::search_optimal_trail`]).
//!
//! Grounded on `examples/original_source/analysis/diffsearch/` (`xdp_add.h`,
//! `trail.h`, `sparkle_best_trail_search.h`, `main_serial.cpp`). This module
//! is independent of [`crate::permutation`]: it reasons about one Alzette
//! branch's ARX box in isolation, the same scope as the reference tool,
//! rather than the full multi-branch SPARKLE state.

mod config;
mod search;
mod xdp;

pub use config::{Differential, Trail, TrailConfig};
pub use search::search_optimal_trail;
pub use xdp::{xdp_add_lm, LOG_ZERO};

#[cfg(feature = "stats")]
pub use config::SearchStats;
