use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use three_phase_engine::network::{ConverterElement, ThreePhaseComponents};
use three_phase_engine::simulation::{SimulationEngine, ThreePhaseEngine};
use three_phase_engine::ThreePhaseEngineInput;

fn build_input(samples: usize) -> ThreePhaseEngineInput {
    let network = ThreePhaseComponents::uniform(0.1)
        .with_converter(ConverterElement::new("rectifier", 0.05))
        .with_converter(ConverterElement::new("inverter", 0.07));
    ThreePhaseEngineInput::new(400.0, 10_000.0, 0.9, network).with_waveform_samples(samples)
}

fn bench_engine_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("three_phase_run");
    let engine = ThreePhaseEngine::new();

    for samples in [120_usize, 1_200, 12_000] {
        let input = build_input(samples);
        group.bench_with_input(BenchmarkId::new("samples", samples), &input, |b, input| {
            b.iter(|| engine.run(input))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine_run);
criterion_main!(benches);
