//! Time-domain sampling of the three-phase voltages and currents over one period.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use crate::constants::{angular_frequency, period_from_frequency, SQRT_3};
use crate::input::WaveformConfig;
use crate::math::{sinusoid_peak, Scalar};
use crate::phasor::impedance_angle;

const PHASE_SHIFT: Scalar = 2.0 * PI / 3.0;

/// Instantaneous values at one sample instant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformPointDto {
    /// Time in seconds from the start of the period.
    pub t: Scalar,
    /// Phase a voltage.
    pub va: Scalar,
    /// Phase b voltage.
    pub vb: Scalar,
    /// Phase c voltage.
    pub vc: Scalar,
    /// Phase a current.
    pub ia: Scalar,
    /// Phase b current.
    pub ib: Scalar,
    /// Phase c current.
    pub ic: Scalar,
}

/// Lazy sampler over one electrical period.
///
/// Yields `samples + 1` points at `t = k · T / samples` for `k = 0..=samples`, so
/// the first and last points are exactly one period apart. Currents lag their
/// phase voltage by the impedance angle, mirroring the phasor convention.
#[derive(Debug, Clone)]
pub struct WaveformSampler {
    voltage_peak: Scalar,
    current_peak: Scalar,
    phi: Scalar,
    omega: Scalar,
    dt: Scalar,
    next: usize,
    last: usize,
}

impl WaveformSampler {
    /// Creates a sampler for a validated operating point.
    #[must_use]
    pub fn new(line_voltage: Scalar, line_current: Scalar, cos_phi: Scalar, config: WaveformConfig) -> Self {
        let period = period_from_frequency(config.frequency_hz);
        Self {
            voltage_peak: sinusoid_peak(line_voltage / SQRT_3),
            current_peak: sinusoid_peak(line_current),
            phi: impedance_angle(cos_phi),
            omega: angular_frequency(config.frequency_hz),
            dt: period / config.samples as Scalar,
            next: 0,
            last: config.samples,
        }
    }

    /// Peak line-to-neutral voltage.
    #[must_use]
    pub const fn voltage_peak(&self) -> Scalar {
        self.voltage_peak
    }

    /// Peak line current.
    #[must_use]
    pub const fn current_peak(&self) -> Scalar {
        self.current_peak
    }

    fn point(&self, index: usize) -> WaveformPointDto {
        let t = index as Scalar * self.dt;
        let theta = self.omega * t;
        WaveformPointDto {
            t,
            va: self.voltage_peak * theta.sin(),
            vb: self.voltage_peak * (theta - PHASE_SHIFT).sin(),
            vc: self.voltage_peak * (theta + PHASE_SHIFT).sin(),
            ia: self.current_peak * (theta - self.phi).sin(),
            ib: self.current_peak * (theta - PHASE_SHIFT - self.phi).sin(),
            ic: self.current_peak * (theta + PHASE_SHIFT - self.phi).sin(),
        }
    }
}

impl Iterator for WaveformSampler {
    type Item = WaveformPointDto;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let point = self.point(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.last {
            0
        } else {
            (self.last - self.next).saturating_add(1)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WaveformSampler {}

impl FusedIterator for WaveformSampler {}

/// Collects one full period of samples.
#[must_use]
pub fn build_waveform_series(
    line_voltage: Scalar,
    line_current: Scalar,
    cos_phi: Scalar,
    config: WaveformConfig,
) -> Vec<WaveformPointDto> {
    WaveformSampler::new(line_voltage, line_current, cos_phi, config).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn config(samples: usize) -> WaveformConfig {
        WaveformConfig {
            frequency_hz: 50.0,
            samples,
        }
    }

    #[test]
    fn series_has_samples_plus_one_points() {
        let sampler = WaveformSampler::new(400.0, 10.0, 0.9, config(120));
        assert_eq!(sampler.len(), 121);
        assert_eq!(sampler.count(), 121);
    }

    #[test]
    fn first_and_last_points_coincide_in_phase() {
        let series = build_waveform_series(400.0, 10.0, 0.8, config(24));
        let first = series.first().expect("non-empty");
        let last = series.last().expect("non-empty");
        assert_eq!(first.t, 0.0);
        assert_relative_eq!(last.t, 0.02, max_relative = 1.0e-12);
        assert_relative_eq!(first.va, last.va, epsilon = 1.0e-9);
        assert_relative_eq!(first.ib, last.ib, epsilon = 1.0e-9);
    }

    #[test]
    fn peaks_use_rms_to_peak_conversion() {
        let sampler = WaveformSampler::new(400.0, 10.0, 1.0, config(4));
        assert_relative_eq!(sampler.voltage_peak(), 400.0 / 3.0_f64.sqrt() * 2.0_f64.sqrt(), epsilon = 1.0e-9);
        let series: Vec<_> = sampler.collect();
        // quarter period: va at its positive peak
        assert_relative_eq!(series[1].va, 326.598_632_371, epsilon = 1.0e-6);
        assert_relative_eq!(series[1].ia, 10.0 * 2.0_f64.sqrt(), epsilon = 1.0e-9);
    }

    #[test]
    fn balanced_instantaneous_values_sum_to_zero() {
        for p in build_waveform_series(400.0, 16.0, 0.7, config(36)) {
            assert_relative_eq!(p.va + p.vb + p.vc, 0.0, epsilon = 1.0e-9);
            assert_relative_eq!(p.ia + p.ib + p.ic, 0.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn sampler_is_fused_and_restartable_by_clone() {
        let mut sampler = WaveformSampler::new(400.0, 1.0, 0.9, config(3));
        let replay = sampler.clone();
        assert_eq!(sampler.by_ref().count(), 4);
        assert!(sampler.next().is_none());
        assert_eq!(replay.collect::<Vec<_>>(), build_waveform_series(400.0, 1.0, 0.9, config(3)));
    }
}
