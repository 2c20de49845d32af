//! Engine constants and default operating parameters.
//!
//! ## Defaults
//!
//! The defaults describe a European-style 50 Hz grid sampled at 120 points per
//! electrical period, which resolves each 120° phase displacement into 40
//! samples.

use std::f64::consts::PI;

/// √2, the RMS-to-peak ratio of a pure sinusoid.
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;
/// √3, the ratio of line-to-line to line-to-neutral voltage in a balanced system.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
/// Grid frequency assumed when the caller does not supply one, in hertz.
pub const DEFAULT_FREQUENCY_HZ: f64 = 50.0;
/// Waveform samples per period assumed when the caller does not supply a count.
pub const DEFAULT_WAVEFORM_SAMPLES: usize = 120;
/// Smallest waveform sample count that still describes a periodic signal.
pub const MIN_WAVEFORM_SAMPLES: usize = 3;
/// Smallest accepted power factor.
///
/// Anything below this is treated as a degenerate zero power factor, since the
/// apparent power `P / cosPhi` would blow up.
pub const MIN_COS_PHI: f64 = 1e-6;
/// Phase displacement between consecutive phases of a positive-sequence set, in degrees.
pub const PHASE_DISPLACEMENT_DEG: f64 = 120.0;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Returns the period in seconds of a signal with frequency `hz`.
#[inline]
#[must_use]
pub fn period_from_frequency(hz: f64) -> f64 {
    1.0 / hz
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn sqrt_constants_match_runtime_values() {
        assert_relative_eq!(SQRT_3, 3.0_f64.sqrt(), max_relative = 1.0e-15);
        assert_relative_eq!(SQRT_2 * SQRT_2, 2.0, max_relative = 1.0e-15);
    }

    #[test]
    fn fifty_hertz_period_is_twenty_milliseconds() {
        assert_relative_eq!(period_from_frequency(50.0), 0.02, max_relative = 1.0e-12);
        assert_relative_eq!(angular_frequency(50.0), 100.0 * PI, max_relative = 1.0e-12);
    }
}
