//! Resistive network components of a balanced three-phase feeder.

use std::fmt;

use crate::math::Scalar;

/// Trait implemented by every element that dissipates power as joule heat.
pub trait Dissipative {
    /// Per-phase resistance in ohms.
    fn resistance_ohm(&self) -> Scalar;

    /// Power dissipated in all three phases when carrying the RMS line current `line_current`.
    fn joule_loss(&self, line_current: Scalar) -> Scalar {
        crate::power::compute_joule_loss(line_current, self.resistance_ohm())
    }
}

/// One fixed network component characterised only by its resistance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResistiveElement {
    /// Per-phase resistance in ohms.
    pub resistance_ohm: Scalar,
}

impl ResistiveElement {
    /// Creates an element with the given resistance.
    #[must_use]
    pub const fn new(resistance_ohm: Scalar) -> Self {
        Self { resistance_ohm }
    }
}

impl Dissipative for ResistiveElement {
    fn resistance_ohm(&self) -> Scalar {
        self.resistance_ohm
    }
}

/// Power converter stage tagged with a caller-supplied identifier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterElement {
    /// Identifier echoed back in the loss breakdown.
    pub id: String,
    /// Per-phase resistance in ohms.
    pub resistance_ohm: Scalar,
}

impl ConverterElement {
    /// Creates a converter.
    #[must_use]
    pub fn new(id: impl Into<String>, resistance_ohm: Scalar) -> Self {
        Self {
            id: id.into(),
            resistance_ohm,
        }
    }
}

impl Dissipative for ConverterElement {
    fn resistance_ohm(&self) -> Scalar {
        self.resistance_ohm
    }
}

/// The four components every network carries.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedComponent {
    /// Generator winding.
    Generator,
    /// Transmission or distribution line.
    Line,
    /// Transformer winding.
    Transformer,
    /// Load feeder.
    Load,
}

impl FixedComponent {
    /// All fixed components in validation and reporting order.
    pub const ALL: [Self; 4] = [Self::Generator, Self::Line, Self::Transformer, Self::Load];

    /// Lower-case wire name of the component.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::Line => "line",
            Self::Transformer => "transformer",
            Self::Load => "load",
        }
    }
}

impl fmt::Display for FixedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed network topology: generator, line, transformer, converters and load.
///
/// Converters are parallel dissipative elements, each carrying the full line
/// current. Their order only matters for presentation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThreePhaseComponents {
    /// Generator winding resistance.
    pub generator: ResistiveElement,
    /// Line resistance.
    pub line: ResistiveElement,
    /// Transformer winding resistance.
    pub transformer: ResistiveElement,
    /// Converter stages in presentation order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub converters: Vec<ConverterElement>,
    /// Load feeder resistance.
    pub load: ResistiveElement,
}

impl ThreePhaseComponents {
    /// Creates a network where all fixed components share `resistance_ohm` and no converters exist.
    #[must_use]
    pub const fn uniform(resistance_ohm: Scalar) -> Self {
        let element = ResistiveElement::new(resistance_ohm);
        Self {
            generator: element,
            line: element,
            transformer: element,
            converters: Vec::new(),
            load: element,
        }
    }

    /// Appends a converter stage.
    #[must_use]
    pub fn with_converter(mut self, converter: ConverterElement) -> Self {
        self.converters.push(converter);
        self
    }

    /// Returns the element backing a fixed component.
    #[must_use]
    pub const fn fixed(&self, component: FixedComponent) -> &ResistiveElement {
        match component {
            FixedComponent::Generator => &self.generator,
            FixedComponent::Line => &self.line,
            FixedComponent::Transformer => &self.transformer,
            FixedComponent::Load => &self.load,
        }
    }

    /// Iterates over the fixed components in reporting order.
    pub fn fixed_elements(&self) -> impl Iterator<Item = (FixedComponent, &ResistiveElement)> {
        FixedComponent::ALL.into_iter().map(move |c| (c, self.fixed(c)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn uniform_network_has_no_converters() {
        let net = ThreePhaseComponents::uniform(0.1);
        assert!(net.converters.is_empty());
        for (_, element) in net.fixed_elements() {
            assert_relative_eq!(element.resistance_ohm, 0.1);
        }
    }

    #[test]
    fn joule_loss_uses_three_phases() {
        let r = ResistiveElement::new(2.0);
        assert_relative_eq!(r.joule_loss(10.0), 600.0);
        let c = ConverterElement::new("inv-1", 2.0);
        assert_relative_eq!(c.joule_loss(10.0), r.joule_loss(10.0));
    }

    #[test]
    fn fixed_components_display_wire_names() {
        let names: Vec<String> = FixedComponent::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["generator", "line", "transformer", "load"]);
    }
}
