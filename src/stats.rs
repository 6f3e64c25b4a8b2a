//! Descriptive statistics over integer slices.
//!
//! All functions handle the empty slice explicitly and return `None`
//! rather than panicking. The running sum for the mean is an `i64`, so
//! no realistic `i32` input can overflow it (a sequence would need more
//! than 2^32 maximal elements).

/// Returns the maximum value in the slice.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use seqstat::stats::max;
/// assert_eq!(max(&[3, 1, 4, 1, 5]), Some(5));
/// assert_eq!(max(&[]), None);
/// ```
pub fn max(data: &[i32]) -> Option<i32> {
    data.iter().copied().max()
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use seqstat::stats::min;
/// assert_eq!(min(&[3, 1, 4, 1, 5]), Some(1));
/// ```
pub fn min(data: &[i32]) -> Option<i32> {
    data.iter().copied().min()
}

/// Computes the arithmetic mean as a floating-point quotient.
///
/// The sum is accumulated in `i64` before the single division, so the
/// result is exact up to the final `f64` rounding.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use seqstat::stats::mean;
/// let v = [5, 3, 9, 1, 7, 2, 8, 4, 6, 10];
/// assert!((mean(&v).unwrap() - 5.5).abs() < 1e-15);
/// ```
pub fn mean(data: &[i32]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: i64 = data.iter().map(|&v| i64::from(v)).sum();
    Some(sum as f64 / data.len() as f64)
}

/// Derived statistics of a sequence: maximum, minimum, arithmetic mean.
///
/// Computed fresh from a sequence, printed, and discarded; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub max: i32,
    pub min: i32,
    pub mean: f64,
}

impl Summary {
    /// Computes the summary in a single pass over `data`.
    ///
    /// # Returns
    /// - `None` if `data` is empty.
    ///
    /// # Examples
    /// ```
    /// use seqstat::stats::Summary;
    /// let s = Summary::from_slice(&[5, 3, 9, 1, 7, 2, 8, 4, 6, 10]).unwrap();
    /// assert_eq!(s.max, 10);
    /// assert_eq!(s.min, 1);
    /// assert!((s.mean - 5.5).abs() < 1e-15);
    /// ```
    pub fn from_slice(data: &[i32]) -> Option<Self> {
        let mut acc = SummaryAccumulator::new();
        for &v in data {
            acc.update(v);
        }
        acc.summary()
    }
}

// ---------------------------------------------------------------------------
// Streaming accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for min, max, and mean.
///
/// Computes running statistics in a single pass with O(1) memory. For
/// the sequence sizes this crate deals in a batch pass would do just as
/// well; the accumulator exists so the statistics are computed in one
/// sweep instead of three.
///
/// # Examples
/// ```
/// use seqstat::stats::SummaryAccumulator;
/// let mut acc = SummaryAccumulator::new();
/// for &v in &[50, 50, 50] {
///     acc.update(v);
/// }
/// assert_eq!(acc.min(), Some(50));
/// assert_eq!(acc.max(), Some(50));
/// assert_eq!(acc.mean(), Some(50.0));
/// ```
#[derive(Debug, Clone)]
pub struct SummaryAccumulator {
    count: u64,
    min: i32,
    max: i32,
    sum: i64,
}

impl SummaryAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            min: i32::MAX,
            max: i32::MIN,
            sum: 0,
        }
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: i32) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += i64::from(value);
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running minimum, or `None` if no samples have been added.
    pub fn min(&self) -> Option<i32> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Returns the running maximum, or `None` if no samples have been added.
    pub fn max(&self) -> Option<i32> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }

    /// Returns the completed [`Summary`], or `None` if no samples have
    /// been added.
    pub fn summary(&self) -> Option<Summary> {
        Some(Summary {
            max: self.max()?,
            min: self.min()?,
            mean: self.mean()?,
        })
    }
}

impl Default for SummaryAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
