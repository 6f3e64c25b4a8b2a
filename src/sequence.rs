//! Bounded random integer sequence generation.
//!
//! A [`Bounds`] describes an inclusive value range; [`generate`] draws an
//! owned sequence of samples from it using a caller-supplied random
//! source. Length is explicit everywhere, so there is no fixed-capacity
//! storage to overrun and an empty sequence is an ordinary value rather
//! than undefined behavior.

use rand::Rng;

/// Reference sequence length used by the demonstration binary.
pub const DEFAULT_LEN: usize = 10;

/// Reference lower bound (inclusive).
pub const MIN_VALUE: i32 = 1;

/// Reference upper bound (inclusive).
pub const MAX_VALUE: i32 = 100;

/// Error type for invalid generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceError {
    /// Bounds violate `min <= max`.
    InvalidBounds(String),
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceError::InvalidBounds(msg) => {
                write!(f, "invalid sequence bounds: {msg}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Inclusive value range `[min, max]` for generated elements.
///
/// # Examples
/// ```
/// use seqstat::sequence::Bounds;
/// let bounds = Bounds::new(1, 100).unwrap();
/// assert_eq!(bounds.min(), 1);
/// assert_eq!(bounds.max(), 100);
/// assert!(Bounds::new(10, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: i32,
    max: i32,
}

impl Bounds {
    /// Creates a new inclusive bounds `[min, max]`.
    ///
    /// `min == max` is allowed and describes a single-value range.
    ///
    /// # Errors
    /// Returns `Err` if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, SequenceError> {
        if min > max {
            return Err(SequenceError::InvalidBounds(format!(
                "Bounds requires min <= max, got min={min}, max={max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Draws one value uniformly from `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.random_range(self.min..=self.max)
    }
}

/// Overwrites every position of `slice` with a uniform draw from `bounds`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use seqstat::random::create_rng;
/// use seqstat::sequence::{fill, Bounds};
/// let bounds = Bounds::new(1, 100).unwrap();
/// let mut rng = create_rng(42);
/// let mut buf = [0_i32; 10];
/// fill(&mut buf, &bounds, &mut rng);
/// assert!(buf.iter().all(|&v| (1..=100).contains(&v)));
/// ```
pub fn fill<R: Rng>(slice: &mut [i32], bounds: &Bounds, rng: &mut R) {
    for v in slice.iter_mut() {
        *v = bounds.sample(rng);
    }
}

/// Generates an owned sequence of `len` uniform draws from `bounds`.
///
/// A `len` of zero yields an empty vector.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Examples
/// ```
/// use seqstat::random::create_rng;
/// use seqstat::sequence::{generate, Bounds};
/// let bounds = Bounds::new(1, 100).unwrap();
/// let mut rng = create_rng(42);
/// let seq = generate(10, &bounds, &mut rng);
/// assert_eq!(seq.len(), 10);
/// ```
pub fn generate<R: Rng>(len: usize, bounds: &Bounds, rng: &mut R) -> Vec<i32> {
    let mut seq = Vec::with_capacity(len);
    for _ in 0..len {
        seq.push(bounds.sample(rng));
    }
    seq
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn generated_values_respect_bounds(
            seed in 0_u64..10000,
            len in 0_usize..200,
            lo in -1000_i32..1000,
            span in 0_i32..1000,
        ) {
            let bounds = Bounds::new(lo, lo + span).unwrap();
            let mut rng = create_rng(seed);
            let seq = generate(len, &bounds, &mut rng);
            prop_assert_eq!(seq.len(), len);
            prop_assert!(seq.iter().all(|&v| (lo..=lo + span).contains(&v)));
        }

        #[test]
        fn same_seed_same_sequence(
            seed in 0_u64..10000,
            len in 0_usize..100,
        ) {
            let bounds = Bounds::new(1, 100).unwrap();
            let a = generate(len, &bounds, &mut create_rng(seed));
            let b = generate(len, &bounds, &mut create_rng(seed));
            prop_assert_eq!(a, b);
        }
    }
}
