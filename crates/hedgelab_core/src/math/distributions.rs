//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` and `norm_pdf`, generic over `T: Float` so the
//! pricing layer can stay generic over the scalar type.
//!
//! The CDF is computed via the complementary error function using the
//! Abramowitz and Stegun approximation (formula 7.1.26), which has a
//! maximum absolute error of 1.5e-7 over the whole real line.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via Horner-evaluated polynomial.
///
/// erfc(x) = 1 - erf(x); the negative half-line uses the reflection
/// erfc(-x) = 2 - erfc(x).
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    // Abramowitz and Stegun 7.1.26 coefficients
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Phi(x) = P(X <= x) for X ~ N(0, 1), computed as
/// 0.5 * erfc(-x / sqrt(2)). Result is always in [0, 1]; infinite
/// arguments map to the correct limit (0 or 1).
///
/// # Examples
/// ```
/// use hedgelab_core::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// phi(x) = exp(-x^2 / 2) / sqrt(2 * pi), always non-negative.
///
/// # Examples
/// ```
/// use hedgelab_core::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let scale = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    scale * (-half * x * x).exp()
}
