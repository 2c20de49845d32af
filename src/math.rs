//! Shared numerical primitives anchored on `nalgebra` and `num-complex`.

use nalgebra::Vector3;

use crate::constants::SQRT_2;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors.
pub type CScalar = num_complex::Complex<Scalar>;
/// One value per phase, ordered a, b, c.
pub type R3 = Vector3<Scalar>;
/// One complex phasor per phase, ordered a, b, c.
pub type C3 = Vector3<CScalar>;

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    num_complex::Complex::from_polar(1.0, theta)
}

/// Computes the RMS magnitude of a sinusoidal waveform with peak value `peak`.
#[must_use]
pub fn sinusoid_rms(peak: Scalar) -> Scalar {
    peak / SQRT_2
}

/// Computes the peak value of a sinusoid with RMS magnitude `rms`.
#[must_use]
pub fn sinusoid_peak(rms: Scalar) -> Scalar {
    rms * SQRT_2
}

/// Clamps tiny negative values produced by cancellation to zero before taking a root.
#[must_use]
pub fn clamped_sqrt(radicand: Scalar) -> Scalar {
    radicand.max(0.0).sqrt()
}
