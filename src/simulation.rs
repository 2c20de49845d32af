//! Engine entry point: validate, then run the power, loss, phasor and waveform stages.

use tracing::{debug, debug_span};

use crate::errors::ValidationError;
use crate::input::ThreePhaseEngineInput;
use crate::math::Scalar;
use crate::phasor::{build_phasors, ThreePhasePhasorDto};
use crate::power::{compute_efficiency, compute_losses, JouleLossesDto, PowerMetrics};
use crate::validation::validate_input_with_limits;
use crate::waveform::{build_waveform_series, WaveformPointDto};

pub use crate::validation::EngineLimits;

/// Trait for simulation engines.
pub trait SimulationEngine {
    /// Engine input.
    type Input;
    /// Engine result.
    type Output;
    /// Failure raised before any result is produced.
    type Error;

    /// Executes the simulation for `input`.
    fn run(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// Full result of one steady-state run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ThreePhaseEngineOutput {
    /// Power triangle and line current.
    pub power: PowerMetrics,
    /// Joule loss breakdown.
    pub losses: JouleLossesDto,
    /// Efficiency `P / (P + losses)` in `[0, 1]`.
    pub eta: Scalar,
    /// Per-phase phasors.
    pub phasors: ThreePhasePhasorDto,
    /// One period of instantaneous values, `samples + 1` points.
    pub waveform_series: Vec<WaveformPointDto>,
}

/// Stateless balanced three-phase engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreePhaseEngine {
    limits: EngineLimits,
}

impl ThreePhaseEngine {
    /// Creates an engine without size limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that rejects inputs exceeding `limits`.
    #[must_use]
    pub const fn with_limits(limits: EngineLimits) -> Self {
        Self { limits }
    }

    /// Configured size limits.
    #[must_use]
    pub const fn limits(&self) -> &EngineLimits {
        &self.limits
    }
}

impl SimulationEngine for ThreePhaseEngine {
    type Input = ThreePhaseEngineInput;
    type Output = ThreePhaseEngineOutput;
    type Error = ValidationError;

    fn run(&self, input: &ThreePhaseEngineInput) -> Result<ThreePhaseEngineOutput, ValidationError> {
        let waveform = input.waveform_config();
        let _span = debug_span!(
            "three_phase_run",
            samples = waveform.samples,
            converters = input.components.converters.len()
        )
        .entered();

        if let Err(err) = validate_input_with_limits(input, &self.limits) {
            debug!(field = %err.field(), reason = %err, "input rejected");
            return Err(err);
        }

        let power = PowerMetrics::compute(input.line_voltage, input.active_power, input.cos_phi);
        debug!(
            s = power.apparent,
            q = power.reactive,
            i = power.line_current,
            "power metrics"
        );

        let losses = compute_losses(&input.components, power.line_current);
        let eta = compute_efficiency(input.active_power, losses.total_w);
        debug!(total_w = losses.total_w, eta, "joule losses");

        let phasors = build_phasors(input.line_voltage, power.line_current, input.cos_phi);
        let waveform_series =
            build_waveform_series(input.line_voltage, power.line_current, input.cos_phi, waveform);
        debug!(points = waveform_series.len(), "waveform sampled");

        Ok(ThreePhaseEngineOutput {
            power,
            losses,
            eta,
            phasors,
            waveform_series,
        })
    }
}

/// Runs the engine once without size limits.
///
/// The waveform holds `waveformSamples + 1` points and the loss breakdown one
/// entry per converter, both allocated up front. Callers that accept untrusted
/// input should bound them with [`ThreePhaseEngine::with_limits`]; an
/// unbounded run with an absurd sample count aborts on allocation instead of
/// returning an error.
pub fn run_three_phase_simulation(
    input: &ThreePhaseEngineInput,
) -> Result<ThreePhaseEngineOutput, ValidationError> {
    ThreePhaseEngine::new().run(input)
}
