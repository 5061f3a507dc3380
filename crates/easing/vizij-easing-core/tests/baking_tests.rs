use approx::assert_abs_diff_eq;
use serde_json::json;
use vizij_easing_core::{
    bake_curve, bake_curve_with_derivatives, bake_named, export_baked_json,
    export_baked_with_derivatives_json, BakingConfig, Curve, EasingError,
    DEFAULT_DERIVATIVE_EPSILON, MAX_SAMPLES,
};

#[test]
fn default_config_samples_full_window() {
    let baked = bake_curve(Curve::EaseInQuad, &BakingConfig::default());
    assert_eq!(baked.values.len(), 64);
    assert_eq!(baked.start, 0.0);
    assert_eq!(baked.end, 1.0);
    assert_eq!(baked.values[0], 0.0);
    assert_eq!(*baked.values.last().unwrap(), 1.0);
    for (i, v) in baked.values.iter().enumerate() {
        let u = baked.progress_at(i);
        assert_eq!(*v, u * u);
    }
}

#[test]
fn five_samples_land_on_quarters() {
    let cfg = BakingConfig {
        samples: 5,
        ..Default::default()
    };
    let baked = bake_curve(Curve::Linear, &cfg);
    assert_eq!(baked.values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn partial_window() {
    let cfg = BakingConfig {
        samples: 3,
        start: 0.5,
        end: 1.0,
        derivative_epsilon: None,
    };
    let baked = bake_curve(Curve::EaseOutBounce, &cfg);
    assert_abs_diff_eq!(baked.values[0], 0.765625, epsilon = 1e-12);
    assert_eq!(baked.values[2], 1.0);
}

#[test]
fn single_sample_is_start() {
    let cfg = BakingConfig {
        samples: 1,
        start: 0.25,
        ..Default::default()
    };
    let baked = bake_curve(Curve::EaseInCubic, &cfg);
    assert_eq!(baked.values, vec![0.25f64.powi(3)]);
}

#[test]
fn invalid_config_falls_back() {
    let cfg = BakingConfig {
        samples: 0,
        start: f64::NAN,
        end: f64::NEG_INFINITY,
        derivative_epsilon: Some(0.0),
    };
    let (baked, slopes) = bake_curve_with_derivatives(Curve::Linear, &cfg);
    assert_eq!(baked.values.len(), 64);
    assert_eq!(baked.start, 0.0);
    assert_eq!(baked.end, 1.0);
    assert_eq!(slopes.epsilon, DEFAULT_DERIVATIVE_EPSILON);
}

#[test]
fn oversized_sample_count_is_clamped() {
    let cfg = BakingConfig {
        samples: usize::MAX,
        ..Default::default()
    };
    let baked = bake_curve(Curve::EaseOutQuad, &cfg);
    assert_eq!(baked.values.len(), MAX_SAMPLES);
    assert_eq!(baked.values[0], 0.0);
    assert_eq!(baked.values[MAX_SAMPLES - 1], 1.0);

    let (values, slopes) = bake_curve_with_derivatives(Curve::Linear, &cfg);
    assert_eq!(values.values.len(), MAX_SAMPLES);
    assert_eq!(slopes.values.len(), MAX_SAMPLES);
}

#[test]
fn reversed_window_collapses_to_start() {
    let cfg = BakingConfig {
        samples: 4,
        start: 0.8,
        end: 0.2,
        derivative_epsilon: None,
    };
    let baked = bake_curve(Curve::Linear, &cfg);
    assert_eq!(baked.end, 0.8);
    assert!(baked.values.iter().all(|v| *v == 0.8));
}

#[test]
fn derivatives_match_analytic_slopes() {
    let cfg = BakingConfig {
        samples: 11,
        ..Default::default()
    };
    let (baked, slopes) = bake_curve_with_derivatives(Curve::EaseInCubic, &cfg);
    assert_eq!(baked.values.len(), slopes.values.len());
    for (i, d) in slopes.values.iter().enumerate() {
        let u = baked.progress_at(i);
        assert_abs_diff_eq!(*d, 3.0 * u * u, epsilon = 1e-6);
    }

    let (_, sine) = bake_curve_with_derivatives(Curve::EaseOutSine, &cfg);
    assert_abs_diff_eq!(sine.values[0], std::f64::consts::FRAC_PI_2, epsilon = 1e-6);
}

#[test]
fn bake_named_resolves_aliases_and_rejects_unknown() {
    let cfg = BakingConfig {
        samples: 2,
        ..Default::default()
    };
    let baked = bake_named("ease_in_out_sine", &cfg).unwrap();
    assert_eq!(baked.curve, Curve::EaseInOutSine);

    let err = bake_named("easeInOutWobble", &cfg).unwrap_err();
    assert_eq!(err, EasingError::unknown_curve("easeInOutWobble"));
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: BakingConfig = serde_json::from_value(json!({ "samples": 9 })).unwrap();
    assert_eq!(cfg.samples, 9);
    assert_eq!(cfg.start, 0.0);
    assert_eq!(cfg.end, 1.0);
    assert_eq!(cfg.derivative_epsilon, None);
}

#[test]
fn export_schema() {
    let cfg = BakingConfig {
        samples: 3,
        ..Default::default()
    };
    let baked = bake_curve(Curve::EaseInQuad, &cfg);
    assert_eq!(
        export_baked_json(&baked),
        json!({
            "curve": "easeInQuad",
            "start": 0.0,
            "end": 1.0,
            "values": [0.0, 0.25, 1.0],
        })
    );

    let (baked, slopes) = bake_curve_with_derivatives(Curve::Linear, &cfg);
    let both = export_baked_with_derivatives_json(&baked, &slopes);
    assert_eq!(both["values"]["curve"], "linear");
    assert_eq!(both["derivatives"]["values"].as_array().unwrap().len(), 3);
}
