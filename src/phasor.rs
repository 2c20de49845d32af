//! Per-phase voltage and current phasors of a balanced positive-sequence system.

use nalgebra::Vector3;

use crate::constants::{PHASE_DISPLACEMENT_DEG, SQRT_3};
use crate::math::{phasor, CScalar, Scalar, C3, R3};

/// Phasor carried in both polar and rectangular form.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexPhasorDto {
    /// RMS magnitude.
    pub magnitude: Scalar,
    /// Angle in degrees.
    pub angle_deg: Scalar,
    /// `magnitude · cos(angle)`.
    pub real: Scalar,
    /// `magnitude · sin(angle)`.
    pub imaginary: Scalar,
}

impl ComplexPhasorDto {
    /// Builds a phasor from its magnitude and angle in degrees.
    #[must_use]
    pub fn from_polar_deg(magnitude: Scalar, angle_deg: Scalar) -> Self {
        let z = phasor(angle_deg.to_radians()) * magnitude;
        Self {
            magnitude,
            angle_deg,
            real: z.re,
            imaginary: z.im,
        }
    }

    /// Rectangular form as a complex number.
    #[must_use]
    pub fn to_complex(&self) -> CScalar {
        CScalar::new(self.real, self.imaginary)
    }
}

/// One phasor per phase.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSet {
    /// Phase a.
    pub a: ComplexPhasorDto,
    /// Phase b.
    pub b: ComplexPhasorDto,
    /// Phase c.
    pub c: ComplexPhasorDto,
}

impl PhaseSet {
    /// Builds a set with common `magnitude` and the given per-phase angles in degrees.
    #[must_use]
    pub fn from_angles(magnitude: Scalar, angles_deg: &R3) -> Self {
        Self {
            a: ComplexPhasorDto::from_polar_deg(magnitude, angles_deg.x),
            b: ComplexPhasorDto::from_polar_deg(magnitude, angles_deg.y),
            c: ComplexPhasorDto::from_polar_deg(magnitude, angles_deg.z),
        }
    }

    /// Phasors as a complex vector ordered a, b, c.
    #[must_use]
    pub fn to_vector(&self) -> C3 {
        Vector3::new(self.a.to_complex(), self.b.to_complex(), self.c.to_complex())
    }

    /// Iterates the phasors in a, b, c order.
    pub fn iter(&self) -> impl Iterator<Item = &ComplexPhasorDto> {
        [&self.a, &self.b, &self.c].into_iter()
    }
}

/// Voltage and current phasors of all three phases.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreePhasePhasorDto {
    /// Line-to-neutral voltages.
    pub voltage_phase: PhaseSet,
    /// Line currents.
    pub current_phase: PhaseSet,
}

/// Positive-sequence voltage angles in degrees: a at 0°, b at -120°, c at +120°.
#[must_use]
pub fn positive_sequence_angles_deg() -> R3 {
    R3::new(0.0, -PHASE_DISPLACEMENT_DEG, PHASE_DISPLACEMENT_DEG)
}

/// Impedance angle `φ = acos(cosPhi)` in radians.
#[inline]
#[must_use]
pub fn impedance_angle(cos_phi: Scalar) -> Scalar {
    cos_phi.acos()
}

/// Builds the voltage and current phasors; currents lag their voltage by `φ`.
#[must_use]
pub fn build_phasors(line_voltage: Scalar, line_current: Scalar, cos_phi: Scalar) -> ThreePhasePhasorDto {
    let phase_voltage_rms = line_voltage / SQRT_3;
    let phi_deg = impedance_angle(cos_phi).to_degrees();

    let voltage_angles = positive_sequence_angles_deg();
    let current_angles = voltage_angles.map(|angle| angle - phi_deg);

    ThreePhasePhasorDto {
        voltage_phase: PhaseSet::from_angles(phase_voltage_rms, &voltage_angles),
        current_phase: PhaseSet::from_angles(line_current, &current_angles),
    }
}
