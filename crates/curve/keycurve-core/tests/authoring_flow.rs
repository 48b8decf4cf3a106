//! End-to-end: authored keys -> builder -> library -> per-tick sampling and baking.

use approx::assert_abs_diff_eq;
use keycurve_core::{
    bake_curve, BakingConfig, Config, Continuity, Curve, CurveBuilder, CurveError, CurveLibrary,
    Keyframe, TangentMode,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
    CameraHeight,
    LightOn,
}

fn camera_path() -> Curve {
    CurveBuilder::new(Config::default())
        .point(0.0, 1.0)
        .point(2.0, 3.0)
        .point(4.0, 2.0)
        .point(6.0, 2.5)
        .build()
        .unwrap()
}

fn light_switch() -> Curve {
    CurveBuilder::new(Config {
        default_continuity: Continuity::Step,
        ..Config::default()
    })
    .point(0.0, 0.0)
    .point(1.0, 1.0)
    .point(3.0, 0.0)
    .build()
    .unwrap()
}

#[test]
fn library_drives_collaborators() {
    init_logging();
    let mut lib = CurveLibrary::new();
    let cam = lib
        .register("camera.height", camera_path(), Target::CameraHeight)
        .unwrap();
    let light = lib
        .register("light.on", light_switch(), Target::LightOn)
        .unwrap();

    let mut t = 0.0_f32;
    let dt = 1.0 / 30.0;
    let mut light_changes = 0;
    let mut last_light = lib.evaluate(light, 0.0).unwrap();
    while t <= 6.5 {
        let h = lib.evaluate(cam, t).unwrap();
        assert!(h.is_finite());
        let l = lib.evaluate(light, t).unwrap();
        assert!(l == 0.0 || l == 1.0);
        if l != last_light {
            light_changes += 1;
            last_light = l;
        }
        t += dt;
    }
    assert_eq!(light_changes, 2);
    assert_eq!(lib.payload(cam), Some(&Target::CameraHeight));
    assert_eq!(lib.id_of("light.on"), Some(light));
}

#[test]
fn authored_json_keys_build_a_curve() {
    init_logging();
    let raw = r#"[
        {"position": 2.0, "value": 4.0},
        {"position": 0.0, "value": 0.0, "tangent_mode": "Linear"},
        {"position": 1.0, "value": 2.0, "tangent_out": 0.0, "authored": {"out": true}}
    ]"#;
    let keys: Vec<Keyframe> = serde_json::from_str(raw).unwrap();
    let mut builder = CurveBuilder::new(Config::default());
    for key in keys {
        builder = builder.key(key);
    }
    let curve = builder.build().unwrap();

    assert_eq!(curve.len(), 3);
    assert_eq!(curve.keys()[0].tangent_out, 2.0);
    assert_eq!(curve.keys()[1].tangent_in, 2.0);
    assert_eq!(curve.keys()[1].tangent_out, 0.0);
    assert_abs_diff_eq!(curve.evaluate(1.0).unwrap(), 2.0, epsilon = 1e-6);
}

#[test]
fn missing_authored_key_aborts_build() {
    let keys = [Some(Keyframe::new(0.0, 0.0)), None, Some(Keyframe::new(1.0, 1.0))];
    let mut builder = CurveBuilder::new(Config {
        default_tangent_mode: TangentMode::Flat,
        ..Config::default()
    });
    for key in keys {
        builder = builder.maybe_key(key);
    }
    assert!(matches!(builder.build(), Err(CurveError::InvalidKey { .. })));
}

#[test]
fn concurrent_readers_agree() {
    let curve = camera_path();
    let expected: Vec<f32> = (0..64)
        .map(|i| curve.evaluate(i as f32 * 0.1).unwrap())
        .collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for (i, want) in expected.iter().enumerate() {
                    assert_eq!(curve.evaluate(i as f32 * 0.1).unwrap(), *want);
                }
            });
        }
    });
}

#[test]
fn bake_matches_direct_evaluation() {
    init_logging();
    let curve = camera_path();
    let baked = bake_curve(
        &curve,
        &BakingConfig {
            frame_rate: 10.0,
            ..BakingConfig::default()
        },
    )
    .unwrap();
    assert_eq!(baked.frame_count(), 61);
    for (i, v) in baked.values.iter().enumerate() {
        let t = baked.position_of(i);
        assert_eq!(*v, curve.evaluate(t).unwrap());
    }
    // smooth tangents keep the derivative continuous at interior keys
    let at_key = curve.evaluate_derivative(2.0).unwrap();
    let before = curve.evaluate_derivative(2.0 - 1e-4).unwrap();
    assert_abs_diff_eq!(at_key, before, epsilon = 1e-2);
}
