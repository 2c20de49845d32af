use std::io;

use three_phase_engine::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // 400 V feeder, 10 kW at cos φ = 0.9, 0.1 Ω everywhere plus one rectifier stage.
    let network = ThreePhaseComponents::uniform(0.1)
        .with_converter(ConverterElement::new("rectifier", 0.05));
    let input = ThreePhaseEngineInput::new(400.0, 10_000.0, 0.9, network).with_waveform_samples(24);

    let out = run_three_phase_simulation(&input)?;

    println!("S = {:.2} VA, Q = {:.2} var, I = {:.3} A", out.power.apparent, out.power.reactive, out.power.line_current);
    println!("eta = {:.4}", out.eta);
    for (name, p) in ["a", "b", "c"].iter().zip(out.phasors.current_phase.iter()) {
        println!("I_{name} = {:.3} A ∠ {:.2}°", p.magnitude, p.angle_deg);
    }
    println!();

    let stdout = io::stdout();
    write_losses_csv(stdout.lock(), &input.components, &out.losses)?;
    println!();
    write_waveform_csv(stdout.lock(), &out.waveform_series)?;

    println!();
    println!("cos_phi,total_losses_w,eta");
    let points = sweep_power_factor(&ThreePhaseEngine::new(), &input, linspace(1.0, 0.6, 5))?;
    for p in points {
        println!("{:.2},{:.3},{:.5}", p.cos_phi, p.total_losses_w, p.eta);
    }
    Ok(())
}
