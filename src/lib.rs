#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Engine constants and default operating parameters.
pub mod constants;
/// Shared numerical primitives (scalars, phase vectors, phasors).
pub mod math;
/// Validation error taxonomy.
pub mod errors;
/// Resistive network components.
pub mod network;
/// Engine input and waveform configuration.
pub mod input;
/// Fail-fast semantic validation and size limits.
pub mod validation;
/// Power triangle, line current and joule losses.
pub mod power;
/// Per-phase voltage and current phasors.
pub mod phasor;
/// One-period time-domain sampling.
pub mod waveform;
/// Engine entry point and result assembly.
pub mod simulation;
/// Power-factor sweeps.
pub mod sweep;
/// CSV export helpers.
pub mod io;

/// Common exports for downstream crates.
pub mod prelude;

pub use errors::ValidationError;
pub use input::ThreePhaseEngineInput;
pub use simulation::{run_three_phase_simulation, ThreePhaseEngineOutput};
