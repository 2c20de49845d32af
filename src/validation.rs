//! Semantic input validation.
//!
//! Rules are checked in a fixed priority order and the first failure wins:
//! voltage, power, power factor, frequency, sample count, fixed component
//! resistances, then converters in input order.
//!
//! Finite inputs can still overflow once combined (`P / cosPhi`, `1 / f`,
//! `3 · I² · R`). The derived quantities the later stages rely on are checked
//! after the sample-count rule, the running loss total alongside each
//! resistance, and each is reported with the error of the input that drives
//! it. A run that passes validation never produces NaN or infinity.

use crate::constants::{angular_frequency, period_from_frequency, MIN_COS_PHI, MIN_WAVEFORM_SAMPLES};
use crate::errors::ValidationError;
use crate::input::ThreePhaseEngineInput;
use crate::math::Scalar;
use crate::network::Dissipative;
use crate::power::{compute_apparent_power, compute_joule_loss, compute_line_current};

/// Caller-enforced upper bounds on the input sizes that drive allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLimits {
    /// Largest accepted waveform sample count.
    pub max_waveform_samples: usize,
    /// Largest accepted number of converter stages.
    pub max_converters: usize,
}

impl EngineLimits {
    /// No bounds beyond the physical rules.
    pub const UNBOUNDED: Self = Self {
        max_waveform_samples: usize::MAX,
        max_converters: usize::MAX,
    };

    /// Creates explicit bounds.
    #[must_use]
    pub const fn bounded(max_waveform_samples: usize, max_converters: usize) -> Self {
        Self {
            max_waveform_samples,
            max_converters,
        }
    }
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Validates `input` without bounds on its size.
pub fn validate_input(input: &ThreePhaseEngineInput) -> Result<(), ValidationError> {
    validate_input_with_limits(input, &EngineLimits::UNBOUNDED)
}

/// Validates `input`, additionally enforcing `limits`.
pub fn validate_input_with_limits(
    input: &ThreePhaseEngineInput,
    limits: &EngineLimits,
) -> Result<(), ValidationError> {
    if !is_positive(input.line_voltage) {
        return Err(ValidationError::LineVoltage);
    }
    if !is_non_negative(input.active_power) {
        return Err(ValidationError::ActivePower);
    }
    if !(MIN_COS_PHI..=1.0).contains(&input.cos_phi) {
        return Err(ValidationError::PowerFactor);
    }

    let waveform = input.waveform_config();
    if !is_positive(waveform.frequency_hz) {
        return Err(ValidationError::Frequency);
    }
    if waveform.samples < MIN_WAVEFORM_SAMPLES {
        return Err(ValidationError::TooFewSamples);
    }

    let apparent_power = compute_apparent_power(input.active_power, input.cos_phi);
    if !apparent_power.powi(2).is_finite() {
        return Err(ValidationError::ActivePower);
    }
    // Only a near-zero V_L can push a representable S into an overflowing current.
    let line_current = compute_line_current(apparent_power, input.line_voltage);
    let unit_loss = compute_joule_loss(line_current, 1.0);
    if !unit_loss.is_finite() {
        return Err(ValidationError::LineVoltage);
    }
    let frequency = waveform.frequency_hz;
    if !period_from_frequency(frequency).is_finite() || !angular_frequency(frequency).is_finite() {
        return Err(ValidationError::Frequency);
    }

    if waveform.samples > limits.max_waveform_samples {
        return Err(ValidationError::TooManySamples {
            max: limits.max_waveform_samples,
        });
    }

    // Running generator-side power P + losses; must stay representable.
    let mut supplied = input.active_power;
    let components = &input.components;
    for (component, element) in components.fixed_elements() {
        if !is_non_negative(element.resistance_ohm())
            || !accumulate(&mut supplied, element.joule_loss(line_current))
        {
            return Err(ValidationError::ComponentResistance { component });
        }
    }

    if components.converters.len() > limits.max_converters {
        return Err(ValidationError::TooManyConverters {
            max: limits.max_converters,
        });
    }
    for (index, converter) in components.converters.iter().enumerate() {
        if converter.id.trim().is_empty() {
            return Err(ValidationError::ConverterId { index });
        }
        if !is_non_negative(converter.resistance_ohm())
            || !accumulate(&mut supplied, converter.joule_loss(line_current))
        {
            return Err(ValidationError::ConverterResistance {
                index,
                id: converter.id.clone(),
            });
        }
    }

    Ok(())
}

// NaN and infinities fail both predicates.
fn is_positive(value: Scalar) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: Scalar) -> bool {
    value.is_finite() && value >= 0.0
}

fn accumulate(total: &mut Scalar, loss: Scalar) -> bool {
    *total += loss;
    loss.is_finite() && total.is_finite()
}
