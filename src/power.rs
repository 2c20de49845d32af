//! Power triangle, line current and joule loss calculations.
//!
//! All functions assume input that already passed
//! [`validate_input`](crate::validation::validate_input) and cannot fail.

use crate::constants::SQRT_3;
use crate::math::{clamped_sqrt, Scalar};
use crate::network::{Dissipative, FixedComponent, ThreePhaseComponents};

/// Steady-state power metrics of the balanced load.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerMetrics {
    /// Active power in watts.
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    pub active: Scalar,
    /// Apparent power in volt-amperes.
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    pub apparent: Scalar,
    /// Reactive power in volt-amperes reactive.
    #[cfg_attr(feature = "serde", serde(rename = "Q"))]
    pub reactive: Scalar,
    /// RMS line current in amperes.
    #[cfg_attr(feature = "serde", serde(rename = "I"))]
    pub line_current: Scalar,
    /// Power factor.
    #[cfg_attr(feature = "serde", serde(rename = "cosPhi"))]
    pub cos_phi: Scalar,
}

impl PowerMetrics {
    /// Derives the power triangle and line current from the load operating point.
    #[must_use]
    pub fn compute(line_voltage: Scalar, active_power: Scalar, cos_phi: Scalar) -> Self {
        let apparent = compute_apparent_power(active_power, cos_phi);
        let reactive = compute_reactive_power(apparent, active_power);
        let line_current = compute_line_current(apparent, line_voltage);
        Self {
            active: active_power,
            apparent,
            reactive,
            line_current,
            cos_phi,
        }
    }
}

/// Loss of a single converter stage.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterLossDto {
    /// Converter identifier.
    pub id: String,
    /// Converter resistance in ohms.
    pub resistance_ohm: Scalar,
    /// Dissipated power in watts.
    pub joule_loss_w: Scalar,
}

/// Joule loss breakdown over the whole network, in watts.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct JouleLossesDto {
    /// Generator winding loss.
    #[cfg_attr(feature = "serde", serde(rename = "generatorW"))]
    pub generator_w: Scalar,
    /// Line loss.
    #[cfg_attr(feature = "serde", serde(rename = "lineW"))]
    pub line_w: Scalar,
    /// Transformer winding loss.
    #[cfg_attr(feature = "serde", serde(rename = "transformerW"))]
    pub transformer_w: Scalar,
    /// Load feeder loss.
    #[cfg_attr(feature = "serde", serde(rename = "loadW"))]
    pub load_w: Scalar,
    /// Per-converter losses in input order.
    pub converters: Vec<ConverterLossDto>,
    /// Sum of converter losses.
    #[cfg_attr(feature = "serde", serde(rename = "convertersTotalW"))]
    pub converters_total_w: Scalar,
    /// Sum of every component loss.
    #[cfg_attr(feature = "serde", serde(rename = "totalW"))]
    pub total_w: Scalar,
}

impl JouleLossesDto {
    /// Loss of one fixed component.
    #[must_use]
    pub const fn fixed(&self, component: FixedComponent) -> Scalar {
        match component {
            FixedComponent::Generator => self.generator_w,
            FixedComponent::Line => self.line_w,
            FixedComponent::Transformer => self.transformer_w,
            FixedComponent::Load => self.load_w,
        }
    }

    /// Power the generator must supply to deliver `active_power` to the load.
    #[must_use]
    pub fn generator_side_power(&self, active_power: Scalar) -> Scalar {
        active_power + self.total_w
    }
}

/// Apparent power `S = P / cosPhi`.
#[inline]
#[must_use]
pub fn compute_apparent_power(active_power: Scalar, cos_phi: Scalar) -> Scalar {
    active_power / cos_phi
}

/// Reactive power `Q = sqrt(S² - P²)`, clamped at zero for unity power factor.
#[inline]
#[must_use]
pub fn compute_reactive_power(apparent_power: Scalar, active_power: Scalar) -> Scalar {
    clamped_sqrt(apparent_power.powi(2) - active_power.powi(2))
}

/// Balanced three-phase RMS line current `I = S / (√3 · V_L)`.
#[inline]
#[must_use]
pub fn compute_line_current(apparent_power: Scalar, line_voltage: Scalar) -> Scalar {
    apparent_power / (SQRT_3 * line_voltage)
}

/// Three-phase joule loss `3 · I² · R`.
#[inline]
#[must_use]
pub fn compute_joule_loss(line_current: Scalar, resistance_ohm: Scalar) -> Scalar {
    3.0 * line_current.powi(2) * resistance_ohm
}

/// Computes every component loss for the line current `line_current`.
///
/// Each converter dissipates against the full line current; the total is the
/// plain sum of the fixed components followed by the converter subtotal.
#[must_use]
pub fn compute_losses(components: &ThreePhaseComponents, line_current: Scalar) -> JouleLossesDto {
    let generator_w = components.generator.joule_loss(line_current);
    let line_w = components.line.joule_loss(line_current);
    let transformer_w = components.transformer.joule_loss(line_current);
    let load_w = components.load.joule_loss(line_current);

    let converters: Vec<ConverterLossDto> = components
        .converters
        .iter()
        .map(|converter| ConverterLossDto {
            id: converter.id.clone(),
            resistance_ohm: converter.resistance_ohm,
            joule_loss_w: converter.joule_loss(line_current),
        })
        .collect();

    let converters_total_w = converters.iter().map(|c| c.joule_loss_w).sum::<Scalar>();
    let total_w = generator_w + line_w + transformer_w + load_w + converters_total_w;

    JouleLossesDto {
        generator_w,
        line_w,
        transformer_w,
        load_w,
        converters,
        converters_total_w,
        total_w,
    }
}

/// Efficiency `η = P / (P + losses)`, or zero when nothing flows.
#[must_use]
pub fn compute_efficiency(active_power: Scalar, total_losses_w: Scalar) -> Scalar {
    let generator_power = active_power + total_losses_w;
    if generator_power > 0.0 {
        active_power / generator_power
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::network::ConverterElement;

    #[test]
    fn power_triangle_at_point_nine() {
        let m = PowerMetrics::compute(400.0, 10_000.0, 0.9);
        assert_relative_eq!(m.apparent, 11_111.111_111, epsilon = 1.0e-5);
        assert_relative_eq!(m.reactive, 4_843.221_05, epsilon = 1.0e-4);
        assert_relative_eq!(m.line_current, 16.037_507_5, epsilon = 1.0e-6);
        assert_relative_eq!(
            m.apparent.powi(2),
            m.active.powi(2) + m.reactive.powi(2),
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn unity_power_factor_has_no_reactive_power() {
        let m = PowerMetrics::compute(400.0, 12_345.678, 1.0);
        assert_eq!(m.reactive, 0.0);
        assert_eq!(m.apparent, m.active);
    }

    #[test]
    fn converters_each_see_full_line_current() {
        let components = ThreePhaseComponents::uniform(0.0)
            .with_converter(ConverterElement::new("rect", 0.2))
            .with_converter(ConverterElement::new("inv", 0.2));
        let losses = compute_losses(&components, 10.0);
        assert_eq!(losses.converters.len(), 2);
        assert_eq!(losses.converters[0].id, "rect");
        assert_relative_eq!(losses.converters[0].joule_loss_w, 60.0);
        assert_eq!(losses.converters_total_w, 2.0 * losses.converters[1].joule_loss_w);
        assert_eq!(losses.total_w, losses.converters_total_w);
    }

    #[test]
    fn total_is_sum_of_components() {
        let mut components = ThreePhaseComponents::uniform(0.1)
            .with_converter(ConverterElement::new("c1", 0.03));
        components.line.resistance_ohm = 0.7;
        let l = compute_losses(&components, 16.0);
        assert_eq!(
            l.total_w,
            l.generator_w + l.line_w + l.transformer_w + l.load_w + l.converters_total_w
        );
        assert_eq!(l.fixed(FixedComponent::Line), l.line_w);
    }

    #[test]
    fn efficiency_handles_zero_flow() {
        assert_eq!(compute_efficiency(0.0, 0.0), 0.0);
        assert_relative_eq!(compute_efficiency(900.0, 100.0), 0.9);
        assert_eq!(compute_efficiency(1.0, 0.0), 1.0);
    }
}
