//! # seqstat
//!
//! Random integer sequences and their descriptive statistics.
//!
//! This crate generates bounded random integer sequences and computes
//! summary statistics (maximum, minimum, arithmetic mean) over them. It
//! knows nothing about where the numbers come from beyond the injected
//! random source, and nothing about where the report goes beyond a
//! rendered string.
//!
//! ## Modules
//!
//! - [`random`] — Seeded RNG construction
//! - [`sequence`] — Bounded random sequence generation
//! - [`stats`] — Descriptive statistics over integer slices
//! - [`report`] — Fixed-format textual report
//!
//! ## Design Philosophy
//!
//! - **Explicit random sources**: generators take `&mut impl Rng` instead
//!   of touching process-wide state, so every behavior is reproducible
//!   under a fixed seed
//! - **No unnecessary dependencies**: pure Rust for the statistics
//! - **Property-based testing**: invariants verified via proptest

pub mod random;
pub mod report;
pub mod sequence;
pub mod stats;
