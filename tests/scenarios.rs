use approx::assert_relative_eq;
use three_phase_engine::prelude::*;

fn scenario_a() -> ThreePhaseEngineInput {
    ThreePhaseEngineInput::new(400.0, 10_000.0, 0.9, ThreePhaseComponents::uniform(0.1))
}

#[test]
fn scenario_a_matches_hand_calculation() {
    let out = run_three_phase_simulation(&scenario_a()).expect("valid input");

    assert_relative_eq!(out.power.apparent, 11_111.11, epsilon = 1.0e-2);
    assert_relative_eq!(out.power.line_current, 16.04, epsilon = 1.0e-2);
    for component in FixedComponent::ALL {
        assert_relative_eq!(out.losses.fixed(component), 77.16, epsilon = 1.0e-2);
    }
    assert!(out.losses.converters.is_empty());
    assert_eq!(out.losses.converters_total_w, 0.0);
    assert_relative_eq!(out.losses.total_w, 308.64, epsilon = 1.0e-2);
    assert_relative_eq!(out.eta, 0.97, epsilon = 1.0e-2);
}

#[test]
fn scenario_b_two_equal_converters_double_a_single_one() {
    let single = scenario_a();
    let mut one = single.clone();
    one.components = one.components.with_converter(ConverterElement::new("c1", 0.25));
    let mut two = one.clone();
    two.components = two.components.with_converter(ConverterElement::new("c2", 0.25));

    let none = run_three_phase_simulation(&single).expect("valid input");
    let one = run_three_phase_simulation(&one).expect("valid input");
    let two = run_three_phase_simulation(&two).expect("valid input");

    assert_eq!(none.losses.converters_total_w, 0.0);
    assert_eq!(two.losses.converters_total_w, 2.0 * one.losses.converters_total_w);
    assert_eq!(two.losses.converters[0].id, "c1");
    assert_eq!(two.losses.converters[1].id, "c2");
    // converters do not change the line current
    assert_eq!(two.power.line_current, none.power.line_current);
}

#[test]
fn scenario_c_out_of_range_power_factor_is_rejected() {
    let mut input = scenario_a();
    input.cos_phi = 1.5;
    let err = run_three_phase_simulation(&input).expect_err("cosPhi above one");
    assert_eq!(err, ValidationError::PowerFactor);
    assert_eq!(err.to_string(), "cosPhi must be in (0, 1].");
    assert_eq!(err.field(), "cosPhi");
}

#[test]
fn scenario_d_waveform_spans_one_period() {
    let input = scenario_a().with_frequency(50.0).with_waveform_samples(120);
    let out = run_three_phase_simulation(&input).expect("valid input");
    assert_eq!(out.waveform_series.len(), 121);
    assert_eq!(out.waveform_series[0].t, 0.0);
    assert_relative_eq!(out.waveform_series[120].t, 0.02, max_relative = 1.0e-12);
    for pair in out.waveform_series.windows(2) {
        assert!(pair[1].t > pair[0].t);
    }
}

#[test]
fn power_factor_threshold_boundary() {
    let mut input = scenario_a();
    input.cos_phi = MIN_COS_PHI;
    assert!(run_three_phase_simulation(&input).is_ok());
    input.cos_phi = 0.0;
    assert_eq!(
        run_three_phase_simulation(&input),
        Err(ValidationError::PowerFactor)
    );
}

#[test]
fn unity_power_factor_boundary() {
    let mut input = scenario_a();
    input.cos_phi = 1.0;
    let out = run_three_phase_simulation(&input).expect("valid input");
    assert_eq!(out.power.reactive, 0.0);
    for (v, i) in out
        .phasors
        .voltage_phase
        .iter()
        .zip(out.phasors.current_phase.iter())
    {
        assert_eq!(v.angle_deg, i.angle_deg);
    }
}

#[test]
fn validation_messages_follow_rule_order() {
    let cases: Vec<(ThreePhaseEngineInput, &str)> = vec![
        (
            ThreePhaseEngineInput::new(-1.0, -1.0, 0.9, ThreePhaseComponents::uniform(0.1)),
            "V_L must be greater than 0.",
        ),
        (
            ThreePhaseEngineInput::new(400.0, -1.0, 0.0, ThreePhaseComponents::uniform(0.1)),
            "P must be non-negative.",
        ),
        (scenario_a().with_frequency(-50.0), "frequencyHz must be greater than 0."),
        (scenario_a().with_waveform_samples(0), "waveformSamples must be at least 3."),
        (
            ThreePhaseEngineInput::new(400.0, 1.0, 0.9, ThreePhaseComponents::uniform(-0.1)),
            "generator resistance must be non-negative.",
        ),
    ];
    for (input, message) in cases {
        let err = run_three_phase_simulation(&input).expect_err(message);
        assert_eq!(err.to_string(), message);
    }
}

#[cfg(feature = "serde")]
mod wire {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_deserializes_from_service_shape() {
        let payload = json!({
            "V_L": 400.0,
            "P": 10000.0,
            "cosPhi": 0.9,
            "components": {
                "generator": { "resistanceOhm": 0.1 },
                "line": { "resistanceOhm": 0.1 },
                "transformer": { "resistanceOhm": 0.1 },
                "converters": [{ "id": "rect", "resistanceOhm": 0.05 }],
                "load": { "resistanceOhm": 0.1 }
            },
            "waveformSamples": 12
        });
        let input: ThreePhaseEngineInput = serde_json::from_value(payload).expect("valid payload");
        assert_eq!(input.frequency_hz, None);
        assert_eq!(input.waveform_samples, Some(12));
        assert_eq!(input.components.converters[0].id, "rect");
        assert_eq!(input.waveform_config().frequency_hz, DEFAULT_FREQUENCY_HZ);
    }

    #[test]
    fn output_serializes_with_service_field_names() {
        let out = run_three_phase_simulation(&scenario_a().with_waveform_samples(3))
            .expect("valid input");
        let value = serde_json::to_value(&out).expect("serializable");

        for key in ["P", "S", "Q", "I", "cosPhi"] {
            assert!(value["power"].get(key).is_some(), "missing power.{key}");
        }
        for key in ["generatorW", "lineW", "transformerW", "loadW", "converters", "convertersTotalW", "totalW"] {
            assert!(value["losses"].get(key).is_some(), "missing losses.{key}");
        }
        assert!(value["eta"].is_number());
        assert!(value["phasors"]["voltagePhase"]["a"]["angleDeg"].is_number());
        assert!(value["phasors"]["currentPhase"]["c"]["imaginary"].is_number());
        assert_eq!(value["waveformSeries"].as_array().map(Vec::len), Some(4));
        assert!(value["waveformSeries"][0]["ic"].is_number());
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let value = serde_json::to_value(scenario_a()).expect("serializable");
        assert!(value.get("frequencyHz").is_none());
        assert!(value.get("waveformSamples").is_none());
        assert_eq!(value["V_L"], json!(400.0));
    }
}
