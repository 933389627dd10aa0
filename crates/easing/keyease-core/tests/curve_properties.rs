use keyease_core::{evaluate, list_curve_kinds, CurveKind, PresetLibrary};

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

const START_VALUE: f64 = 3.0;
const END_VALUE: f64 = 11.0;
const START_FRAME: f64 = 2.0;
const END_FRAME: f64 = 12.0;

fn eval_at(lib: &PresetLibrary, kind: CurveKind, frame: f64) -> f64 {
    lib.evaluate(kind, frame, START_VALUE, END_VALUE, START_FRAME, END_FRAME)
        .unwrap()
}

#[test]
fn every_curve_starts_on_start_value() {
    let lib = PresetLibrary::default();
    for kind in lib.list_curve_kinds() {
        let v = eval_at(&lib, kind, START_FRAME);
        assert!(approx(v, START_VALUE, 1e-9), "{kind}: {v}");
    }
}

#[test]
fn every_curve_ends_on_its_convention_target() {
    let lib = PresetLibrary::default();
    for kind in lib.list_curve_kinds() {
        let interval = keyease_core::KeyframeInterval::new(
            START_VALUE,
            END_VALUE,
            START_FRAME,
            END_FRAME,
        );
        let target = interval.target(lib.convention(kind));
        let v = eval_at(&lib, kind, END_FRAME);
        assert!(approx(v, target, 1e-9), "{kind}: {v} != {target}");
    }
}

#[test]
fn difference_curves_end_on_end_value() {
    let lib = PresetLibrary::default();
    for name in ["quintic-in-out", "sine-in-out", "sine-in", "bounce-out", "cubic-in"] {
        let v = lib.evaluate(name, END_FRAME, START_VALUE, END_VALUE, START_FRAME, END_FRAME)
            .unwrap();
        assert!(approx(v, END_VALUE, 1e-9), "{name}: {v}");
    }
}

#[test]
fn end_value_curves_add_start_value() {
    // c is the raw end value, so the curve lands on start + end
    let lib = PresetLibrary::default();
    for name in ["quintic-in", "circ-out", "expo-out"] {
        let v = lib.evaluate(name, END_FRAME, START_VALUE, END_VALUE, START_FRAME, END_FRAME)
            .unwrap();
        assert!(approx(v, START_VALUE + END_VALUE, 1e-9), "{name}: {v}");
        // with a zero start value both conventions agree
        let v = lib.evaluate(name, END_FRAME, 0.0, END_VALUE, START_FRAME, END_FRAME)
            .unwrap();
        assert!(approx(v, END_VALUE, 1e-9), "{name}: {v}");
    }
}

#[test]
fn clamping_is_idempotent() {
    let lib = PresetLibrary::default();
    for kind in lib.list_curve_kinds() {
        let at_start = eval_at(&lib, kind, START_FRAME);
        let at_end = eval_at(&lib, kind, END_FRAME);
        for below in [START_FRAME - 0.5, -100.0, f64::NEG_INFINITY] {
            assert_eq!(eval_at(&lib, kind, below), at_start, "{kind} below {below}");
        }
        for above in [END_FRAME + 0.5, 1.0e6, f64::INFINITY] {
            assert_eq!(eval_at(&lib, kind, above), at_end, "{kind} above {above}");
        }
    }
}

#[test]
fn degenerate_interval_is_finite_and_starts() {
    let lib = PresetLibrary::default();
    for kind in lib.list_curve_kinds() {
        for frame in [-3.0, 5.0, 9.0] {
            let v = lib.evaluate(kind, frame, 7.0, 9.0, 5.0, 5.0).unwrap();
            assert!(v.is_finite(), "{kind} at {frame}");
            assert!(approx(v, 7.0, 1e-9), "{kind} at {frame}: {v}");
        }
    }
}

#[test]
fn inverted_interval_never_raises() {
    let lib = PresetLibrary::default();
    for kind in lib.list_curve_kinds() {
        assert!(lib.evaluate(kind, 7.0, 0.0, 1.0, 10.0, 5.0).is_ok(), "{kind}");
    }
}

#[test]
fn curves_are_deterministic() {
    let lib = PresetLibrary::default();
    for kind in lib.list_curve_kinds() {
        let a = eval_at(&lib, kind, 6.25);
        let b = eval_at(&lib, kind, 6.25);
        assert_eq!(a.to_bits(), b.to_bits(), "{kind}");
    }
}

#[test]
fn scenario_quintic_in_out() {
    assert_eq!(evaluate("quintic-in-out", 0.0, 0.0, 10.0, 0.0, 10.0).unwrap(), 0.0);
    assert!(approx(
        evaluate("quintic-in-out", 10.0, 0.0, 10.0, 0.0, 10.0).unwrap(),
        10.0,
        1e-12
    ));
    assert_eq!(evaluate("quintic-in-out", 5.0, 0.0, 10.0, 0.0, 10.0).unwrap(), 5.0);
}

#[test]
fn scenario_bounce_out_end() {
    let v = evaluate("bounce-out", 10.0, 0.0, 10.0, 0.0, 10.0).unwrap();
    assert!(approx(v, 10.0, 1e-12), "{v}");
}

#[test]
fn scenario_sine_in_out_clamped_below() {
    assert_eq!(evaluate("sine-in-out", -5.0, 0.0, 10.0, 0.0, 10.0).unwrap(), 0.0);
}

#[test]
fn listing_is_restartable_and_covers_catalogue() {
    let first = list_curve_kinds();
    let second = list_curve_kinds();
    assert_eq!(first, second);
    assert_eq!(first.len(), 27);
    for name in [
        "quintic-in-out",
        "sine-in",
        "bounce-out",
        "circ-out",
        "expo-out",
        "back-out",
        "circ-in",
        "cubic-in",
        "quad-in-out",
        "quart-in",
        "cubic-out",
    ] {
        let kind: CurveKind = name.parse().unwrap();
        assert!(first.contains(&kind), "{name}");
    }
}

#[test]
fn back_overshoot_is_configurable() {
    let soft = PresetLibrary::new(keyease_core::PresetConfig {
        back_overshoot: 0.0,
        ..Default::default()
    });
    // with no overshoot back-in is a plain cubic
    let back = soft.evaluate("back-in", 4.0, 0.0, 1.0, 0.0, 10.0).unwrap();
    let cubic = soft.evaluate("cubic-in", 4.0, 0.0, 1.0, 0.0, 10.0).unwrap();
    assert!(approx(back, cubic, 1e-12));

    let default = PresetLibrary::default()
        .evaluate("back-in", 1.0, 0.0, 1.0, 0.0, 10.0)
        .unwrap();
    assert!(default < 0.0, "default overshoot dips below start: {default}");
}
