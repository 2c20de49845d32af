//! Convenience re-exports for driving the engine.

pub use crate::constants::*;
pub use crate::errors::ValidationError;
pub use crate::input::{ThreePhaseEngineInput, WaveformConfig};
pub use crate::io::{write_losses_csv, write_waveform_csv};
pub use crate::math::{phasor, sinusoid_peak, sinusoid_rms, CScalar, Scalar, C3, R3};
pub use crate::network::{
    ConverterElement, Dissipative, FixedComponent, ResistiveElement, ThreePhaseComponents,
};
pub use crate::phasor::{build_phasors, ComplexPhasorDto, PhaseSet, ThreePhasePhasorDto};
pub use crate::power::{
    compute_apparent_power, compute_efficiency, compute_joule_loss, compute_line_current,
    compute_losses, compute_reactive_power, ConverterLossDto, JouleLossesDto, PowerMetrics,
};
pub use crate::simulation::{
    run_three_phase_simulation, EngineLimits, SimulationEngine, ThreePhaseEngine,
    ThreePhaseEngineOutput,
};
pub use crate::sweep::{linspace, sweep_power_factor, PowerFactorPoint};
pub use crate::validation::{validate_input, validate_input_with_limits};
pub use crate::waveform::{build_waveform_series, WaveformPointDto, WaveformSampler};
