//! Engine input and default resolution for the optional waveform parameters.

use crate::constants::{DEFAULT_FREQUENCY_HZ, DEFAULT_WAVEFORM_SAMPLES};
use crate::math::Scalar;
use crate::network::ThreePhaseComponents;

/// Operating point and network description for one engine run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ThreePhaseEngineInput {
    /// Line-to-line RMS voltage in volts.
    #[cfg_attr(feature = "serde", serde(rename = "V_L"))]
    pub line_voltage: Scalar,
    /// Active power demand of the load in watts.
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    pub active_power: Scalar,
    /// Load power factor.
    #[cfg_attr(feature = "serde", serde(rename = "cosPhi"))]
    pub cos_phi: Scalar,
    /// Network components.
    pub components: ThreePhaseComponents,
    /// Grid frequency in hertz; [`DEFAULT_FREQUENCY_HZ`] when absent.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "frequencyHz", default, skip_serializing_if = "Option::is_none")
    )]
    pub frequency_hz: Option<Scalar>,
    /// Waveform samples per period; [`DEFAULT_WAVEFORM_SAMPLES`] when absent.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "waveformSamples", default, skip_serializing_if = "Option::is_none")
    )]
    pub waveform_samples: Option<usize>,
}

impl ThreePhaseEngineInput {
    /// Creates an input with default frequency and sample count.
    #[must_use]
    pub fn new(
        line_voltage: Scalar,
        active_power: Scalar,
        cos_phi: Scalar,
        components: ThreePhaseComponents,
    ) -> Self {
        Self {
            line_voltage,
            active_power,
            cos_phi,
            components,
            frequency_hz: None,
            waveform_samples: None,
        }
    }

    /// Sets an explicit grid frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency_hz: Scalar) -> Self {
        self.frequency_hz = Some(frequency_hz);
        self
    }

    /// Sets an explicit waveform sample count.
    #[must_use]
    pub fn with_waveform_samples(mut self, samples: usize) -> Self {
        self.waveform_samples = Some(samples);
        self
    }

    /// Resolves the optional waveform parameters against their defaults.
    #[must_use]
    pub fn waveform_config(&self) -> WaveformConfig {
        WaveformConfig::resolve(self.frequency_hz, self.waveform_samples)
    }
}

/// Effective waveform parameters after default resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformConfig {
    /// Grid frequency in hertz.
    pub frequency_hz: Scalar,
    /// Samples per electrical period; the series holds `samples + 1` points.
    pub samples: usize,
}

impl WaveformConfig {
    /// Fills in [`DEFAULT_FREQUENCY_HZ`] and [`DEFAULT_WAVEFORM_SAMPLES`] for absent values.
    #[must_use]
    pub fn resolve(frequency_hz: Option<Scalar>, samples: Option<usize>) -> Self {
        Self {
            frequency_hz: frequency_hz.unwrap_or(DEFAULT_FREQUENCY_HZ),
            samples: samples.unwrap_or(DEFAULT_WAVEFORM_SAMPLES),
        }
    }
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
