//! Standard normal distribution functions.
//!
//! Provides the building blocks for closed-form option pricing:
//! - `erf`: Error function
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! All functions are generic over `T: Float` to support both `f64` and `f32`.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Error function approximation.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) which provides
/// maximum error of 1.5e-7 for all x.
///
/// # Mathematical Definition
/// erf(x) = (2/√π) ∫_0^x e^(-t²) dt
///
/// # Examples
/// ```
/// use engine_models::analytical::distributions::erf;
///
/// assert!(erf(0.0_f64).abs() < 1e-7);
/// assert!((erf(2.0_f64) - 0.9953).abs() < 1e-3);
/// // Odd function: erf(-x) = -erf(x)
/// assert!((erf(1.0_f64) + erf(-1.0_f64)).abs() < 1e-7);
/// ```
#[inline]
pub fn erf<T: Float>(x: T) -> T {
    let one = T::one();

    // erf(-x) = -erf(x), so evaluate on |x| and restore the sign
    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // t = 1 / (1 + p * |x|)
    let t = one / (one + p * abs_x);

    // Horner's method for polynomial evaluation
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));

    let erf_abs = one - t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        -erf_abs
    } else {
        erf_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) via the error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * (1 + erf(x / sqrt(2)))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Accuracy
/// Accurate to at least 1e-7 for all finite x values.
///
/// # Examples
/// ```
/// use engine_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    // Φ(x) = 0.5 * (1 + erf(x / sqrt(2)))
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * (T::one() + erf(x / sqrt_2))
}

/// Standard normal probability density function.
///
/// Computes the density φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use engine_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
///
/// let pdf_1 = norm_pdf(1.0_f64);
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((pdf_1 - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    // -x² / 2
    let exponent = -half * x * x;

    frac_1_sqrt_2pi * exponent.exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // erf tests
    // ==========================================================

    #[test]
    fn test_erf_at_zero() {
        assert_relative_eq!(erf(0.0_f64), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_erf_odd_symmetry() {
        // erf(-x) = -erf(x) for all x
        let test_values = [0.25, 0.5, 1.0, 1.5, 2.0, 3.0];
        for x in test_values {
            assert_relative_eq!(erf(-x), -erf(x), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_erf_reference_values() {
        // Reference values from standard tables
        // erf(0.5) ≈ 0.5204999
        assert_relative_eq!(erf(0.5_f64), 0.5204998778130465, epsilon = 1e-6);

        // erf(1) ≈ 0.8427008
        assert_relative_eq!(erf(1.0_f64), 0.8427007929497149, epsilon = 1e-6);

        // erf(2) ≈ 0.9953223
        assert_relative_eq!(erf(2.0_f64), 0.9953222650189527, epsilon = 1e-6);
    }

    #[test]
    fn test_erf_saturates() {
        // erf approaches ±1 for large |x|
        assert!(erf(5.0_f64) > 0.9999999);
        assert!(erf(5.0_f64) <= 1.0);
        assert!(erf(-5.0_f64) < -0.9999999);
        assert!(erf(-5.0_f64) >= -1.0);
    }

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        // Φ(0) = 0.5 (within approximation accuracy of 1.5e-7)
        let result = norm_cdf(0.0_f64);
        assert_relative_eq!(result, 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(-x) + Φ(x) = 1 for all x (within approximation accuracy)
        let test_values = [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0];
        for x in test_values {
            let cdf_pos = norm_cdf(x);
            let cdf_neg = norm_cdf(-x);
            assert_relative_eq!(cdf_pos + cdf_neg, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values from standard normal tables
        // Φ(1) ≈ 0.8413447
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-6);

        // Φ(-1) ≈ 0.1586553
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-5);

        // Φ(2) ≈ 0.9772499
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-6);

        // Φ(-2) ≈ 0.0227501
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-4);

        // Φ(3) ≈ 0.9986501
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        // |x| > 8 should still produce valid results in [0, 1]
        let cdf_large_pos = norm_cdf(8.0_f64);
        assert!(cdf_large_pos > 0.999999);
        assert!(cdf_large_pos <= 1.0);

        let cdf_large_neg = norm_cdf(-8.0_f64);
        assert!(cdf_large_neg < 0.000001);
        assert!(cdf_large_neg >= 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        // CDF should be non-decreasing
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for i in 0..values.len() - 1 {
            let cdf_a = norm_cdf(values[i]);
            let cdf_b = norm_cdf(values[i + 1]);
            assert!(cdf_b >= cdf_a, "CDF not monotonic at x = {}", values[i]);
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        // Result should always be in [0, 1]
        let test_values: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for x in test_values {
            let result = norm_cdf(x);
            assert!(result >= 0.0, "CDF < 0 at x = {}", x);
            assert!(result <= 1.0, "CDF > 1 at x = {}", x);
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-5);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        // φ(0) = 1 / sqrt(2π) ≈ 0.3989422804014327
        let result = norm_pdf(0.0_f64);
        assert_relative_eq!(result, FRAC_1_SQRT_2PI, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        // φ(x) = φ(-x) for all x
        let test_values = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
        for x in test_values {
            let pdf_pos = norm_pdf(x);
            let pdf_neg = norm_pdf(-x);
            assert_relative_eq!(pdf_pos, pdf_neg, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2419707245
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-7);

        // φ(2) = exp(-2) / sqrt(2π) ≈ 0.0539909665
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-7);

        // φ(3) = exp(-4.5) / sqrt(2π) ≈ 0.0044318484
        assert_relative_eq!(norm_pdf(3.0_f64), 0.004431848411938008, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_pdf_non_negative() {
        let test_values: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for x in test_values {
            let result = norm_pdf(x);
            assert!(result >= 0.0, "PDF < 0 at x = {}", x);
        }
    }

    #[test]
    fn test_norm_pdf_maximum_at_zero() {
        let pdf_0 = norm_pdf(0.0_f64);
        for x in [-0.1, 0.1, -1.0, 1.0, -2.0, 2.0] {
            let pdf_x = norm_pdf(x);
            assert!(pdf_0 > pdf_x, "PDF(0) not greater than PDF({})", x);
        }
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Numerical derivative of CDF should approximate PDF
        // Larger h because the erf approximation error compounds in the difference
        let h = 1e-4;
        let test_values = [-2.0, -1.0, 0.0, 1.0, 2.0];
        for x in test_values {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            let pdf_value = norm_pdf(x);
            assert_relative_eq!(numerical_derivative, pdf_value, epsilon = 1e-4);
        }
    }
}
