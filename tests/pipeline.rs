//! End-to-end properties of the analysis pipeline, exercised through the
//! public API only: equilibrium closure, diagram consistency (dM/dx = V),
//! hinge moment release, support compatibility of the deflection curve,
//! and the classic textbook worked cases.

use approx::assert_relative_eq;
use beam_core::{
    analyze, AppliedMoment, Beam, BeamError, DistributedLoad, PointLoad, Support,
};

const RESOLUTION: usize = 100;

fn simply_supported(length: f64, ei: f64) -> Beam {
    Beam::new(length, ei)
        .with_support(Support::pin(0.0))
        .with_support(Support::roller(length))
}

#[test]
fn simply_supported_midspan_point_load_matches_closed_form() {
    let (p, l, ei) = (-10.0, 10.0, 20_000.0);
    let beam = simply_supported(l, ei).with_point_load(PointLoad::vertical(p, l / 2.0));
    let results = analyze(&beam, RESOLUTION).unwrap();

    // Reactions: P/2 at each support
    assert_relative_eq!(results.reactions.reactions[0].force, 5.0, max_relative = 1e-9);
    assert_relative_eq!(results.reactions.reactions[1].force, 5.0, max_relative = 1e-9);

    // Peak moment PL/4 at midspan
    let (pos, peak) = results.bending_moment.max_value().unwrap();
    assert_relative_eq!(peak, -p * l / 4.0, max_relative = 1e-9);
    assert_relative_eq!(pos, l / 2.0, max_relative = 1e-9);

    // Midspan deflection PL^3/(48 EI), downward
    let expected = p * l.powi(3) / (48.0 * ei);
    assert_relative_eq!(results.deflection.value[50], expected, max_relative = 1e-3);
}

#[test]
fn cantilever_tip_load_matches_closed_form() {
    let (p, l, ei) = (-10.0, 10.0, 20_000.0);
    let beam = Beam::new(l, ei)
        .with_support(Support::fixed(0.0))
        .with_point_load(PointLoad::vertical(p, l));
    let results = analyze(&beam, RESOLUTION).unwrap();

    // Reaction force P up, reaction moment PL
    assert_relative_eq!(results.reactions.reactions[0].force, -p, max_relative = 1e-9);
    assert_relative_eq!(results.reactions.reactions[0].moment, -p * l, max_relative = 1e-9);

    // Largest moment magnitude PL at the fixed end
    let (pos, m) = results.bending_moment.max_abs_value().unwrap();
    assert_relative_eq!(m.abs(), -p * l, max_relative = 1e-9);
    assert!(pos.abs() < 1e-9);

    // Tip deflection PL^3/(3 EI), downward
    let expected = p * l.powi(3) / (3.0 * ei);
    assert_relative_eq!(results.deflection.value[100], expected, max_relative = 1e-3);
}

#[test]
fn equilibrium_residuals_vanish_for_mixed_loading() {
    let beam = simply_supported(12.0, 30_000.0)
        .with_point_load(PointLoad::vertical(-8.0, 3.0))
        .with_point_load(PointLoad::inclined(-6.0, 9.0, 45.0))
        .with_distributed_load(DistributedLoad::trapezoidal(-1.0, -3.0, 2.0, 10.0))
        .with_moment(AppliedMoment::new(12.0, 7.0));
    let results = analyze(&beam, RESOLUTION).unwrap();

    let (force, moment) = results.equilibrium_residual(&beam);
    assert!(force.abs() < 1e-9, "force residual {force}");
    assert!(moment.abs() < 1e-9, "moment residual {moment}");
}

#[test]
fn moment_slope_tracks_shear_between_discontinuities() {
    let beam = simply_supported(10.0, 20_000.0)
        .with_point_load(PointLoad::vertical(-10.0, 5.0))
        .with_distributed_load(DistributedLoad::uniform(-2.0, 0.0, 10.0));
    let results = analyze(&beam, RESOLUTION).unwrap();

    let x = &results.bending_moment.x;
    let m = &results.bending_moment.value;
    let v = &results.shear.value;
    let h = x[1] - x[0];

    for j in 1..RESOLUTION {
        // Skip samples adjacent to the midspan jump
        if (x[j] - 5.0).abs() < 2.0 * h {
            continue;
        }
        let slope = (m[j + 1] - m[j - 1]) / (2.0 * h);
        assert_relative_eq!(slope, v[j], max_relative = 1e-2, epsilon = 1e-6);
    }
}

#[test]
fn hinge_releases_bending_moment() {
    // Compound beam: fixed - hinge - roller
    let beam = Beam::new(10.0, 20_000.0)
        .with_support(Support::fixed(0.0))
        .with_support(Support::internal_hinge(5.0))
        .with_support(Support::roller(10.0))
        .with_point_load(PointLoad::vertical(-10.0, 7.5))
        .with_distributed_load(DistributedLoad::uniform(-1.0, 0.0, 5.0));
    let results = analyze(&beam, RESOLUTION).unwrap();

    // Sample 50 sits exactly on the hinge
    assert!(results.bending_moment.value[50].abs() < 1e-8);

    let (force, moment) = results.equilibrium_residual(&beam);
    assert!(force.abs() < 1e-9);
    assert!(moment.abs() < 1e-9);
}

#[test]
fn deflection_vanishes_at_every_support() {
    let beam = Beam::new(10.0, 20_000.0)
        .with_support(Support::pin(0.0))
        .with_support(Support::internal_hinge(4.0))
        .with_support(Support::roller(7.0))
        .with_support(Support::roller(10.0))
        .with_point_load(PointLoad::vertical(-10.0, 2.0));
    let results = analyze(&beam, RESOLUTION).unwrap();

    let span = results
        .deflection
        .value
        .iter()
        .fold(0.0f64, |acc, d| acc.max(d.abs()));
    assert!(span > 0.0);

    // Grid samples 0, 70, and 100 coincide with the force supports
    for idx in [0, 70, 100] {
        assert!(
            results.deflection.value[idx].abs() < 1e-6 * span,
            "deflection at support sample {idx} = {}",
            results.deflection.value[idx]
        );
    }
}

#[test]
fn unstable_and_indeterminate_inputs_fail_typed() {
    let no_supports = Beam::new(10.0, 20_000.0).with_point_load(PointLoad::vertical(-1.0, 5.0));
    assert!(matches!(
        analyze(&no_supports, RESOLUTION),
        Err(BeamError::Unstable {
            unknowns: 0,
            equations: 2
        })
    ));

    let three_supports = simply_supported(10.0, 20_000.0).with_support(Support::roller(5.0));
    assert!(matches!(
        analyze(&three_supports, RESOLUTION),
        Err(BeamError::Indeterminate {
            unknowns: 3,
            equations: 2
        })
    ));
}

#[test]
fn invalid_geometry_fails_before_any_solve() {
    let beam = Beam::new(0.0, 20_000.0).with_support(Support::pin(0.0));
    let err = analyze(&beam, RESOLUTION).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_GEOMETRY");

    let beam = simply_supported(10.0, 20_000.0)
        .with_distributed_load(DistributedLoad::uniform(-1.0, 8.0, 3.0));
    let err = analyze(&beam, RESOLUTION).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_GEOMETRY");
}

#[test]
fn failure_round_trips_through_json() {
    let beam = Beam::new(10.0, 20_000.0).with_point_load(PointLoad::vertical(-1.0, 5.0));
    let err = analyze(&beam, RESOLUTION).unwrap_err();

    let json = serde_json::to_string(&err).unwrap();
    let roundtrip: BeamError = serde_json::from_str(&json).unwrap();
    assert_eq!(roundtrip, err);
    assert_eq!(roundtrip.error_code(), "UNSTABLE");
}

#[test]
fn uniform_load_deflection_matches_closed_form() {
    // delta_mid = 5wL^4/(384 EI) for a uniform load on a simple span
    let (w, l, ei) = (-2.0, 10.0, 20_000.0);
    let beam = simply_supported(l, ei).with_distributed_load(DistributedLoad::uniform(w, 0.0, l));
    let results = analyze(&beam, RESOLUTION).unwrap();

    let expected = 5.0 * w * l.powi(4) / (384.0 * ei);
    assert_relative_eq!(results.deflection.value[50], expected, max_relative = 1e-3);
}

#[test]
fn applied_moment_steps_bending_moment_only() {
    let beam = simply_supported(10.0, 20_000.0).with_moment(AppliedMoment::new(10.0, 5.0));
    let results = analyze(&beam, RESOLUTION).unwrap();

    // R_left = M/L = 1, so M(x) = x before the couple and x - 10 after it.
    // Sample 50 sits on the couple and reports the right limit.
    assert_relative_eq!(results.bending_moment.value[49], 4.9, max_relative = 1e-9);
    assert_relative_eq!(results.bending_moment.value[50], -5.0, max_relative = 1e-9);
    assert_relative_eq!(
        results.shear.value[49],
        results.shear.value[50],
        max_relative = 1e-9
    );
}
