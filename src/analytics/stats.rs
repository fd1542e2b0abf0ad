//! Mean and standard deviation helpers.

use statrs::statistics::Statistics;

/// Arithmetic mean. NaN on empty input — callers guard before invoking.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// Population standard deviation: sqrt of the mean squared deviation from
/// the mean. NaN on empty input.
pub fn std_dev(values: &[f64]) -> f64 {
    values.iter().population_std_dev()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_known_values() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn test_population_std_dev() {
        // Deviations from mean 4: [-2, 0, 2]; mean square 8/3.
        let expected = (8.0_f64 / 3.0).sqrt();
        assert!((std_dev(&[2.0, 4.0, 6.0]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(std_dev(&[]).is_nan());
    }
}
