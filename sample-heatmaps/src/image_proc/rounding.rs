//! Decimal rounding for sample values.
//!
//! Values are rounded half-to-even on the scaled value, `rint(x * 10^d) / 10^d`.
//! The published sample files were produced this way, so `0.125` becomes
//! `0.12` rather than `0.13`.

use ndarray::Array2;

/// Decimal places kept in every written sample
pub const SAMPLE_DECIMALS: i32 = 2;

/// Round a single value to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Round every element of an array to `decimals` places
pub fn round_array(arr: &Array2<f64>, decimals: i32) -> Array2<f64> {
    arr.mapv(|v| round_to(v, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_round_to_two_places() {
        assert_abs_diff_eq!(round_to(0.1234, 2), 0.12, epsilon = 1e-12);
        assert_abs_diff_eq!(round_to(0.987, 2), 0.99, epsilon = 1e-12);
        assert_abs_diff_eq!(round_to(0.996, 2), 1.0, epsilon = 1e-12);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_ties_round_to_even() {
        // 0.125 and 0.375 are exact in binary, so these are true ties
        assert_abs_diff_eq!(round_to(0.125, 2), 0.12, epsilon = 1e-12);
        assert_abs_diff_eq!(round_to(0.375, 2), 0.38, epsilon = 1e-12);
        assert_abs_diff_eq!(round_to(2.5, 0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_array_keeps_shape() {
        let arr = Array2::from_shape_fn((3, 4), |(r, c)| (r * 4 + c) as f64 / 7.0);
        let rounded = round_array(&arr, 2);
        assert_eq!(rounded.dim(), (3, 4));
        assert_abs_diff_eq!(rounded[[0, 1]], 0.14, epsilon = 1e-12);
        assert_abs_diff_eq!(rounded[[2, 3]], round_to(11.0 / 7.0, 2), epsilon = 1e-12);
    }
}
