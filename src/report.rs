//! Fixed-format textual report.
//!
//! The layout is byte-exact for compatibility with existing consumers of
//! the demonstration program's output, including the trailing space after
//! the final element of the array line.

use std::fmt::Write;

use crate::stats::Summary;

/// Renders a sequence and its [`Summary`] in the fixed report layout.
///
/// Maximum and minimum are printed as integers; the mean is printed with
/// two decimal places.
///
/// # Examples
/// ```
/// use seqstat::report::render;
/// use seqstat::stats::Summary;
/// let values = [5, 3, 9, 1, 7, 2, 8, 4, 6, 10];
/// let summary = Summary::from_slice(&values).unwrap();
/// let out = render(&values, &summary);
/// assert!(out.contains("- Average value: 5.50\n"));
/// ```
pub fn render(values: &[i32], summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str("Generated array: ");
    for v in values {
        let _ = write!(out, "{v} ");
    }
    out.push('\n');
    out.push_str("Statistics:\n");
    let _ = writeln!(out, "- Maximum value: {}", summary.max);
    let _ = writeln!(out, "- Minimum value: {}", summary.min);
    let _ = writeln!(out, "- Average value: {:.2}", summary.mean);
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_reference_scenario() {
        let values = [5, 3, 9, 1, 7, 2, 8, 4, 6, 10];
        let summary = Summary::from_slice(&values).unwrap();
        let expected = "Generated array: 5 3 9 1 7 2 8 4 6 10 \n\
                        Statistics:\n\
                        - Maximum value: 10\n\
                        - Minimum value: 1\n\
                        - Average value: 5.50\n";
        assert_eq!(render(&values, &summary), expected);
    }

    #[test]
    fn test_render_constant_scenario() {
        let values = [50; 10];
        let summary = Summary::from_slice(&values).unwrap();
        let expected = "Generated array: 50 50 50 50 50 50 50 50 50 50 \n\
                        Statistics:\n\
                        - Maximum value: 50\n\
                        - Minimum value: 50\n\
                        - Average value: 50.00\n";
        assert_eq!(render(&values, &summary), expected);
    }

    #[test]
    fn test_render_single_element() {
        let values = [7];
        let summary = Summary::from_slice(&values).unwrap();
        let expected = "Generated array: 7 \n\
                        Statistics:\n\
                        - Maximum value: 7\n\
                        - Minimum value: 7\n\
                        - Average value: 7.00\n";
        assert_eq!(render(&values, &summary), expected);
    }

    #[test]
    fn test_render_rounds_mean_to_two_places() {
        // mean = 10/3 = 3.333... -> "3.33"
        let values = [3, 3, 4];
        let summary = Summary::from_slice(&values).unwrap();
        assert!(render(&values, &summary).ends_with("- Average value: 3.33\n"));
    }

    #[test]
    fn test_render_generated_sequence_end_to_end() {
        use crate::random::create_rng;
        use crate::sequence::{generate, Bounds, DEFAULT_LEN, MAX_VALUE, MIN_VALUE};

        let bounds = Bounds::new(MIN_VALUE, MAX_VALUE).unwrap();
        let mut rng = create_rng(42);
        let values = generate(DEFAULT_LEN, &bounds, &mut rng);
        let summary = Summary::from_slice(&values).unwrap();
        let out = render(&values, &summary);

        assert!(out.starts_with("Generated array: "));
        assert!(out.contains("\nStatistics:\n"));
        assert_eq!(out.lines().count(), 5);
        // Same seed renders the same report.
        let again = generate(DEFAULT_LEN, &bounds, &mut create_rng(42));
        let summary_again = Summary::from_slice(&again).unwrap();
        assert_eq!(out, render(&again, &summary_again));
    }
}
