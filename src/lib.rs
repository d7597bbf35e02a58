//! The SPARKLE permutation family and the two AEAD/hash constructions built
//! on it: SCHWAEMM and ESCH, plus a differential-trail search engine for the
//! underlying Alzette ARX box.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All components
//! are explicit in their semantics and suitable for security-critical code.
//!
//! # Module overview
//!
//! - `permutation`
//!   The SPARKLE permutation itself (`sparkle`/`sparkle_inv`), selected by
//!   the width of the state slice passed in (256/384/512-bit instances).
//!   Built from the Alzette ARX box and the ℓ-layer linear mixing step.
//!
//! - `sponge`
//!   Byte/word conversion and padding shared by the two sponge
//!   constructions below.
//!
//! - `aead`
//!   SCHWAEMM: a sponge AEAD built on SPARKLE, in its four published
//!   instances (Schwaemm128128, Schwaemm192192, Schwaemm256128,
//!   Schwaemm256256).
//!
//! - `hash`
//!   ESCH: a sponge hash built on SPARKLE, in its two published instances
//!   (Esch256, Esch384).
//!
//! - `trail`
//!   A branch-and-bound search for optimal XOR differential trails through
//!   the Alzette ARX box, independent of the permutation/AEAD/hash code
//!   above; a cryptanalysis tool rather than a production primitive.
//!
//! # Design goals
//!
//! - No heap allocations in the permutation core
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and cryptanalysis tooling
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled
//! implementation of the SPARKLE suite.

pub mod aead;
pub mod hash;
pub mod permutation;
pub mod sponge;
pub mod trail;
