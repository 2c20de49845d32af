//! Power-factor sweeps and spacing helpers.

use crate::errors::ValidationError;
use crate::input::ThreePhaseEngineInput;
use crate::math::Scalar;
use crate::power::{compute_efficiency, compute_losses, PowerMetrics};
use crate::simulation::ThreePhaseEngine;
use crate::validation::validate_input_with_limits;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Scalar metrics of one operating point in a power-factor sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerFactorPoint {
    /// Power factor of this point.
    pub cos_phi: Scalar,
    /// Apparent power in volt-amperes.
    pub apparent_power: Scalar,
    /// Reactive power in volt-amperes reactive.
    pub reactive_power: Scalar,
    /// RMS line current in amperes.
    pub line_current: Scalar,
    /// Sum of all joule losses in watts.
    pub total_losses_w: Scalar,
    /// Efficiency.
    pub eta: Scalar,
}

/// Re-evaluates `base` at each power factor in `cos_phis`.
///
/// Only the scalar stages run; phasors and waveforms are skipped. The sweep
/// stops at the first power factor the engine rejects.
pub fn sweep_power_factor<I>(
    engine: &ThreePhaseEngine,
    base: &ThreePhaseEngineInput,
    cos_phis: I,
) -> Result<Vec<PowerFactorPoint>, ValidationError>
where
    I: IntoIterator<Item = Scalar>,
{
    let mut input = base.clone();
    cos_phis
        .into_iter()
        .map(|cos_phi| -> Result<PowerFactorPoint, ValidationError> {
            input.cos_phi = cos_phi;
            validate_input_with_limits(&input, engine.limits())?;
            let power = PowerMetrics::compute(input.line_voltage, input.active_power, cos_phi);
            let losses = compute_losses(&input.components, power.line_current);
            Ok(PowerFactorPoint {
                cos_phi,
                apparent_power: power.apparent,
                reactive_power: power.reactive,
                line_current: power.line_current,
                total_losses_w: losses.total_w,
                eta: compute_efficiency(input.active_power, losses.total_w),
            })
        })
        .collect()
}
