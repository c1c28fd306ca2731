use serde_json::json;
use vizij_motion_core::api::{
    handle_json, handle_path, ApiError, BezierRequest, PhysicsRequest, Route,
};
use vizij_motion_core::{MotionError, Point, MAX_POINTS};

fn xs(resp: &serde_json::Value) -> Vec<f64> {
    resp["path"]
        .as_array()
        .expect("path array")
        .iter()
        .map(|p| p["x"].as_f64().expect("x"))
        .collect()
}

#[test]
fn health_reports_ok() {
    let resp = handle_json(Route::Health, "").unwrap();
    assert_eq!(resp, json!({ "status": "ok" }));
}

#[test]
fn bezier_route_samples_control_points() {
    let body = json!({
        "p0": { "x": 0.0, "y": 0.0 },
        "p1": { "x": 0.0, "y": 0.0 },
        "p2": { "x": 100.0, "y": 0.0 },
        "p3": { "x": 100.0, "y": 0.0 },
        "numPoints": 3
    });
    let resp = handle_path("/api/bezier", &body.to_string()).unwrap();
    assert_eq!(
        resp,
        json!({ "path": [
            { "x": 0.0, "y": 0.0 },
            { "x": 50.0, "y": 0.0 },
            { "x": 100.0, "y": 0.0 }
        ] })
    );
}

#[test]
fn bezier_request_deserializes_camel_case() {
    let req: BezierRequest = serde_json::from_value(json!({
        "p0": { "x": 1, "y": 2 },
        "p1": { "x": 3, "y": 4 },
        "p2": { "x": 5, "y": 6 },
        "p3": { "x": 7, "y": 8 },
        "numPoints": 9
    }))
    .unwrap();
    assert_eq!(req.num_points, 9);
    assert_eq!(req.p3, Point::new(7.0, 8.0));
}

#[test]
fn bezier_path_route_is_seeded() {
    let body = json!({
        "start": { "x": 10, "y": 10 },
        "end": { "x": 500, "y": 300 },
        "numPoints": 30,
        "randomSeed": 42,
        "complexity": 0.9,
        "overshootFactor": 0.2
    })
    .to_string();
    let a = handle_json(Route::BezierPath, &body).unwrap();
    let b = handle_json(Route::BezierPath, &body).unwrap();
    assert_eq!(a, b);
    assert_eq!(a["path"].as_array().unwrap().len(), 30);
}

#[test]
fn minimum_jerk_route_switches_to_two_phase() {
    let single = json!({
        "start": { "x": 0, "y": 0 },
        "end": { "x": 10, "y": 0 },
        "numPoints": 6
    });
    let resp = handle_json(Route::MinimumJerk, &single.to_string()).unwrap();
    assert_eq!(xs(&resp).len(), 6);

    // twoPhase without a positive overshoot stays single-phase.
    let flagged = json!({
        "start": { "x": 0, "y": 0 },
        "end": { "x": 10, "y": 0 },
        "numPoints": 6,
        "twoPhase": true
    });
    let resp = handle_json(Route::MinimumJerk, &flagged.to_string()).unwrap();
    assert_eq!(xs(&resp).len(), 6);

    let two_phase = json!({
        "start": { "x": 0, "y": 0 },
        "end": { "x": 800, "y": 200 },
        "numPoints": 100,
        "twoPhase": true,
        "overshootFactor": 0.5,
        "randomSeed": 7
    });
    let resp = handle_json(Route::MinimumJerk, &two_phase.to_string()).unwrap();
    let path = resp["path"].as_array().unwrap();
    assert_eq!(path.len(), 99);
    assert_eq!(path[98], json!({ "x": 800.0, "y": 200.0 }));
}

#[test]
fn ou_route_returns_both_axes() {
    let body = json!({
        "points": 25,
        "theta": 0.7,
        "sigma": 0.5,
        "dt": 0.1,
        "randomSeed": 99
    })
    .to_string();
    let a = handle_json(Route::OuProcess, &body).unwrap();
    let b = handle_json(Route::OuProcess, &body).unwrap();
    assert_eq!(a, b);
    assert_eq!(a["jitterX"].as_array().unwrap().len(), 25);
    assert_eq!(a["jitterY"].as_array().unwrap().len(), 25);
    assert_eq!(a["jitterX"][0], json!(0.0));

    let pd = json!({
        "points": 25,
        "theta": 0.7,
        "sigma": 0.5,
        "dt": 0.1,
        "randomSeed": 99,
        "positionDependent": true
    })
    .to_string();
    let c = handle_json(Route::OuProcess, &pd).unwrap();
    assert_ne!(a, c);
}

#[test]
fn physics_options_default_when_absent() {
    let req: PhysicsRequest = serde_json::from_value(json!({
        "start": { "x": 0, "y": 0 },
        "end": { "x": 50, "y": 50 }
    }))
    .unwrap();
    assert_eq!(req.options.config.mass, 1.0);
    assert_eq!(req.options.config.max_steps, 1000);
    assert!(!req.options.nonlinear);

    let req: PhysicsRequest = serde_json::from_value(json!({
        "start": { "x": 0, "y": 0 },
        "end": { "x": 50, "y": 50 },
        "options": { "springConstant": 12, "maxSteps": 40, "randomSeed": 5, "nonlinear": true }
    }))
    .unwrap();
    assert_eq!(req.options.config.spring_constant, 12.0);
    assert_eq!(req.options.config.max_steps, 40);
    assert_eq!(req.options.random_seed, Some(5));
    assert!(req.options.nonlinear);

    let resp = req.run().unwrap();
    assert!(resp.path.len() <= 41);
}

#[test]
fn physics_route_rejects_zero_mass() {
    let body = json!({
        "start": { "x": 0, "y": 0 },
        "end": { "x": 50, "y": 50 },
        "options": { "mass": 0 }
    });
    match handle_json(Route::Physics, &body.to_string()) {
        Err(ApiError::Motion(MotionError::InvalidParameter { field, .. })) => assert_eq!(field, "mass"),
        other => panic!("expected invalid mass, got {other:?}"),
    }
}

#[test]
fn velocity_route_falls_back_to_uniform() {
    let path = json!([
        { "x": 0.0, "y": 0.0 },
        { "x": 5.0, "y": 1.0 },
        { "x": 9.0, "y": 3.0 }
    ]);
    let body = json!({ "path": path, "velocityProfile": "zigzag", "numPoints": 3 });
    let resp = handle_json(Route::VelocityProfile, &body.to_string()).unwrap();
    assert_eq!(resp["path"], path);

    let strict = json!({ "path": path, "velocityProfile": "zigzag", "numPoints": 3, "strict": true });
    let err = handle_json(Route::VelocityProfile, &strict.to_string()).unwrap_err();
    assert!(err.to_string().contains("velocityProfile"));
}

#[test]
fn velocity_route_validates_inputs() {
    let empty = json!({ "path": [], "velocityProfile": "sigmoid", "numPoints": 10 });
    let err = handle_json(Route::VelocityProfile, &empty.to_string()).unwrap_err();
    assert!(matches!(err, ApiError::Motion(ref e) if e.field() == "path"));

    let one = json!({ "path": [{ "x": 0, "y": 0 }], "velocityProfile": "sigmoid", "numPoints": 1 });
    let err = handle_json(Route::VelocityProfile, &one.to_string()).unwrap_err();
    assert!(matches!(err, ApiError::Motion(ref e) if e.field() == "numPoints"));
}

#[test]
fn malformed_bodies_and_routes_are_reported() {
    assert!(matches!(
        handle_json(Route::Bezier, "{ not json"),
        Err(ApiError::Parse(_))
    ));
    assert!(matches!(
        handle_json(Route::Physics, r#"{ "start": { "x": 0, "y": 0 } }"#),
        Err(ApiError::Parse(_))
    ));
    assert!(matches!(
        handle_path("/api/warp-drive", "{}"),
        Err(ApiError::UnknownRoute(_))
    ));
}

#[test]
fn oversized_counts_are_rejected_without_allocating() {
    let origin = json!({ "x": 0, "y": 0 });
    let target = json!({ "x": 10, "y": 10 });
    let cases = [
        (
            Route::OuProcess,
            json!({ "points": u64::MAX, "theta": 0.7, "sigma": 0.5, "dt": 0.1 }),
            "points",
        ),
        (
            Route::VelocityProfile,
            json!({ "path": [origin, target], "velocityProfile": "sigmoid", "numPoints": u64::MAX }),
            "numPoints",
        ),
        (
            Route::Bezier,
            json!({ "p0": origin, "p1": origin, "p2": target, "p3": target, "numPoints": u64::MAX }),
            "numPoints",
        ),
        (
            Route::BezierPath,
            json!({ "start": origin, "end": target, "numPoints": MAX_POINTS + 1 }),
            "numPoints",
        ),
        (
            Route::MinimumJerk,
            json!({ "start": origin, "end": target, "numPoints": u64::MAX, "twoPhase": true, "overshootFactor": 0.5 }),
            "numPoints",
        ),
        (
            Route::Physics,
            json!({ "start": origin, "end": target, "options": { "maxSteps": u64::MAX } }),
            "maxSteps",
        ),
    ];
    for (route, body, field) in cases {
        match handle_json(route, &body.to_string()) {
            Err(ApiError::Motion(err)) => assert_eq!(err.field(), field, "{route:?}"),
            other => panic!("{route:?}: expected invalid {field}, got {other:?}"),
        }
    }
}
