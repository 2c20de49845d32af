//! Plain CSV writers over any [`Write`] sink.

use std::io::{self, Write};

use crate::network::ThreePhaseComponents;
use crate::power::JouleLossesDto;
use crate::waveform::WaveformPointDto;

/// Writes a waveform series as `t,va,vb,vc,ia,ib,ic`.
pub fn write_waveform_csv<W: Write>(mut w: W, series: &[WaveformPointDto]) -> io::Result<()> {
    writeln!(w, "t,va,vb,vc,ia,ib,ic")?;
    for p in series {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            p.t, p.va, p.vb, p.vc, p.ia, p.ib, p.ic
        )?;
    }
    Ok(())
}

/// Writes the loss breakdown as `component,resistance_ohm,loss_w`.
///
/// Fixed components come first, then converters in input order, then a `total`
/// row with an empty resistance column.
pub fn write_losses_csv<W: Write>(
    mut w: W,
    components: &ThreePhaseComponents,
    losses: &JouleLossesDto,
) -> io::Result<()> {
    writeln!(w, "component,resistance_ohm,loss_w")?;
    for (component, element) in components.fixed_elements() {
        writeln!(
            w,
            "{},{:.16e},{:.16e}",
            component,
            element.resistance_ohm,
            losses.fixed(component)
        )?;
    }
    for c in &losses.converters {
        writeln!(w, "{},{:.16e},{:.16e}", c.id, c.resistance_ohm, c.joule_loss_w)?;
    }
    writeln!(w, "total,,{:.16e}", losses.total_w)?;
    Ok(())
}
