//! Error types raised before any computation takes place.

use thiserror::Error;

use crate::network::FixedComponent;

/// Semantic validation failure for a [`ThreePhaseEngineInput`](crate::input::ThreePhaseEngineInput).
///
/// Only the first violated rule is reported. The `Display` output is the
/// human-readable message; [`ValidationError::field`] names the offending input
/// field using the wire-level path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Line-to-line voltage is not strictly positive.
    #[error("V_L must be greater than 0.")]
    LineVoltage,
    /// Active power demand is negative.
    #[error("P must be non-negative.")]
    ActivePower,
    /// Power factor lies outside `[MIN_COS_PHI, 1]`.
    #[error("cosPhi must be in (0, 1].")]
    PowerFactor,
    /// Effective frequency is not strictly positive.
    #[error("frequencyHz must be greater than 0.")]
    Frequency,
    /// Effective sample count is below the periodic minimum.
    #[error("waveformSamples must be at least 3.")]
    TooFewSamples,
    /// Effective sample count exceeds the caller's allocation bound.
    #[error("waveformSamples must be at most {max}.")]
    TooManySamples {
        /// Configured upper bound.
        max: usize,
    },
    /// One of the four fixed components carries a negative resistance.
    #[error("{component} resistance must be non-negative.")]
    ComponentResistance {
        /// Offending component.
        component: FixedComponent,
    },
    /// More converters were supplied than the caller allows.
    #[error("at most {max} converters are supported.")]
    TooManyConverters {
        /// Configured upper bound.
        max: usize,
    },
    /// A converter identifier is blank after trimming.
    #[error("converter id must be non-empty.")]
    ConverterId {
        /// Position of the converter in the input sequence.
        index: usize,
    },
    /// A converter carries a negative resistance.
    #[error("converter ({id}) resistance must be non-negative.")]
    ConverterResistance {
        /// Position of the converter in the input sequence.
        index: usize,
        /// Caller-supplied identifier.
        id: String,
    },
}

impl ValidationError {
    /// Wire-level path of the field that violated its constraint.
    #[must_use]
    pub fn field(&self) -> String {
        match self {
            Self::LineVoltage => "V_L".into(),
            Self::ActivePower => "P".into(),
            Self::PowerFactor => "cosPhi".into(),
            Self::Frequency => "frequencyHz".into(),
            Self::TooFewSamples | Self::TooManySamples { .. } => "waveformSamples".into(),
            Self::ComponentResistance { component } => {
                format!("components.{component}.resistanceOhm")
            }
            Self::TooManyConverters { .. } => "components.converters".into(),
            Self::ConverterId { index } => format!("components.converters[{index}].id"),
            Self::ConverterResistance { index, .. } => {
                format!("components.converters[{index}].resistanceOhm")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_component() {
        let err = ValidationError::ComponentResistance {
            component: FixedComponent::Transformer,
        };
        assert_eq!(err.to_string(), "transformer resistance must be non-negative.");
        assert_eq!(err.field(), "components.transformer.resistanceOhm");
    }

    #[test]
    fn converter_errors_carry_identifier_and_position() {
        let err = ValidationError::ConverterResistance {
            index: 2,
            id: "rectifier".into(),
        };
        assert_eq!(err.to_string(), "converter (rectifier) resistance must be non-negative.");
        assert_eq!(err.field(), "components.converters[2].resistanceOhm");
    }
}
