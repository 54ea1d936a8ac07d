#![cfg(test)]

use std::cell::Cell;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use glam::{DVec2, DVec3};

use crate::{
    body_presets, days_since_j2000, j2000, keplers_equation, CelestialBody, Clock, EngineConfig,
    FixedClock, KeplerSolver, KnownBody, Matrix3x2, Orbit, OrbitTrait, PositionEngine,
    ScaledClock, SystemClock, ANIMATION_DAYS_PER_SECOND, DEFAULT_KEPLER_ITERATIONS,
    DEFAULT_ORBIT_SEGMENTS,
};

const ORBIT_POLL_ANGLES: usize = 4096;
const RANDOM_CASES: usize = 256;


use assertions::*;
use polling::*;
use seeders::*;

fn unit_orbit() -> Orbit {
    Orbit::new(1.0, 0.0, 0.0, 1.0)
}

fn earth_like() -> Orbit {
    Orbit::new(149_600_000.0, 0.0167, 0.0, 365.0)
}

#[test]
fn unit_orbit_mean_anomaly_3d() {
    let engine = PositionEngine::default();

    assert_orbit_positions_3d(
        &engine,
        &unit_orbit(),
        &[
            ("unit orbit 1", 0.0, DVec3::new(1.0, 0.0, 0.0)),
            ("unit orbit 2", 90.0, DVec3::new(0.0, 0.0, 1.0)),
            ("unit orbit 3", 180.0, DVec3::new(-1.0, 0.0, 0.0)),
            ("unit orbit 4", 270.0, DVec3::new(0.0, 0.0, -1.0)),
            ("unit orbit 5", 360.0, DVec3::new(1.0, 0.0, 0.0)),
        ],
    );
}

#[test]
fn unit_orbit_transformation() {
    // With zero inclination, the orbital plane is the x/z plane.
    let orbit = unit_orbit();

    let tests = [(1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)];

    for point in tests {
        let transformed = orbit.transform_pqw_vector(DVec2::new(point.0, point.1));

        assert_eq!(transformed.x, point.0);
        assert_eq!(transformed.y, 0.0);
        assert_eq!(transformed.z, point.1);
    }
}

#[test]
fn tilted_90deg() {
    let orbit = Orbit::new(1.0, 0.0, 90.0, 1.0);

    // Transform test
    let tests = [
        ("Vector 1", (1.0, 0.0), DVec3::new(1.0, 0.0, 0.0)),
        ("Vector 2", (0.0, 1.0), DVec3::new(0.0, 1.0, 0.0)),
        ("Vector 3", (-1.0, 0.0), DVec3::new(-1.0, 0.0, 0.0)),
        ("Vector 4", (0.0, -1.0), DVec3::new(0.0, -1.0, 0.0)),
    ];

    for (what, point, expected) in tests.iter() {
        let transformed = orbit.transform_pqw_vector(DVec2::new(point.0, point.1));
        assert_almost_eq_vec3(transformed, *expected, what);
    }

    // Mean anomaly test
    assert_orbit_positions_3d(
        &PositionEngine::default(),
        &orbit,
        &[
            ("Quarter orbit", 90.0, DVec3::new(0.0, 1.0, 0.0)),
            ("Three quarters", 270.0, DVec3::new(0.0, -1.0, 0.0)),
        ],
    );
}

#[test]
fn tilt_matrix_columns_are_orthonormal() {
    for inclination in [-45.0, 0.0, 7.0, 30.0, 90.0, 179.0] {
        let m = Matrix3x2::from_inclination(inclination);
        let p = DVec3::new(m.e11, m.e21, m.e31);
        let q = DVec3::new(m.e12, m.e22, m.e32);

        assert_almost_eq(p.length(), 1.0, "length of first column");
        assert_almost_eq(q.length(), 1.0, "length of second column");
        assert_almost_eq(p.dot(q), 0.0, "dot of columns");
    }
}

#[test]
fn tilted_equidistant() {
    let engine = PositionEngine::default();
    let orbit = Orbit::new(1.0, 0.0, 48.29, 12.0);

    for point in poll_orbit(&engine, &orbit) {
        assert_almost_eq(point.length(), 1.0, "Distance");
    }
}

#[test]
fn circular_orbit_is_uniform_motion() {
    for _ in 0..RANDOM_CASES {
        let mut orbit = random_circular();
        orbit.inclination = 0.0;
        let scale = rand::random_range(1e-9..1.0);
        let engine = PositionEngine::new(KeplerSolver::default(), scale);
        let a = orbit.semi_major_axis;

        for mean_anomaly in poll_angles().step_by(64) {
            let m = mean_anomaly.to_radians();
            let expected = DVec3::new(a * m.cos(), 0.0, a * m.sin()) * scale;

            assert_almost_eq_vec3_rel(
                engine.position(&orbit, mean_anomaly),
                expected,
                &format!("circular position at M = {mean_anomaly} for {orbit:?}"),
            );
        }
    }
}

#[test]
fn circular_solution_is_degenerate() {
    let solver = KeplerSolver::default();

    for mean_anomaly in poll_angles().step_by(128) {
        let solution = solver.solve(mean_anomaly, 0.0, 42.0);
        let m = mean_anomaly.to_radians();

        assert_eq!(solution.eccentric_anomaly, m);
        assert_almost_eq(solution.true_anomaly.sin(), m.sin(), "sin(v)");
        assert_almost_eq(solution.true_anomaly.cos(), m.cos(), "cos(v)");
        assert_almost_eq(solution.radius, 42.0, "radius");
    }
}

#[test]
fn stationary_bodies_stay_at_origin() {
    let engine = PositionEngine::new(KeplerSolver::default(), 1e-3);
    let sun = body_presets::stars::the_sun();
    let broken = CelestialBody::new("Nameless", 10.0, 5e8, 0.0, 0.3, 12.0);

    assert!(sun.is_stationary());
    assert!(broken.is_stationary());

    for body in [&sun, &broken] {
        for mean_anomaly in poll_angles().step_by(256) {
            assert_eq!(engine.position(body, mean_anomaly), DVec3::ZERO);
        }

        assert_eq!(engine.current_position(body, &SystemClock), DVec3::ZERO);
        assert_eq!(
            engine.current_position(body, &FixedClock(j2000() + TimeDelta::days(1234))),
            DVec3::ZERO
        );
        assert!(engine
            .orbit_path(body, 16)
            .iter()
            .all(|point| *point == DVec3::ZERO));
    }
}

#[test]
fn sun_is_stationary_even_with_orbital_elements() {
    let sun = CelestialBody::new("Sun", 1_392_700.0, 2.5e17, 8.2e10, 0.1, 60.0);

    assert!(sun.is_stationary());
    assert_eq!(PositionEngine::default().position(&sun, 123.0), DVec3::ZERO);
}

#[test]
fn deserialized_body_derives_stationary_flag() {
    let engine = PositionEngine::default();
    let instant = j2000() + TimeDelta::days(10);

    let halted: CelestialBody = serde_json::from_str(
        r##"{
            "name": "Earth",
            "diameter": 12756.0,
            "distance_from_sun": 149600000.0,
            "orbital_period": 0.0,
            "eccentricity": 0.0167,
            "inclination": 0.0,
            "color": "#2196F3",
            "show_orbit": true,
            "is_stationary": false
        }"##,
    )
    .unwrap();

    assert!(halted.is_stationary());
    assert_eq!(engine.position_at_instant(&halted, instant), DVec3::ZERO);

    let earth = body_presets::planets::earth();
    let json = serde_json::to_string(&earth).unwrap();
    assert!(!json.contains("is_stationary"));

    let parsed: CelestialBody = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.name(), earth.name());
    assert_eq!(parsed.color, earth.color);
    assert_eq!(parsed.show_orbit, earth.show_orbit);
    assert_eq!(parsed.orbital_period(), earth.orbital_period());
    assert!(!parsed.is_stationary());
    assert!(engine.position_at_instant(&parsed, instant).is_finite());
}

#[test]
fn changed_period_changes_stationary_state() {
    let engine = PositionEngine::default();
    let instant = j2000() + TimeDelta::days(10);

    let mut orbit = Orbit::new(1.0, 0.1, 0.0, 10.0);
    assert!(!orbit.is_stationary());

    for period in [0.0, -5.0, f64::NAN] {
        orbit.orbital_period = period;

        assert!(orbit.is_stationary(), "period {period}");
        assert_eq!(engine.position_at_instant(&orbit, instant), DVec3::ZERO);
    }

    let parsed: Orbit = serde_json::from_str(
        r#"{ "semi_major_axis": 1.0, "eccentricity": 0.1,
             "inclination": 0.0, "orbital_period": 0.0 }"#,
    )
    .unwrap();
    assert!(parsed.is_stationary());
}

/// Claims to orbit while having no usable period.
struct InconsistentOrbit;

impl OrbitTrait for InconsistentOrbit {
    fn get_semi_major_axis(&self) -> f64 {
        1.0
    }

    fn get_eccentricity(&self) -> f64 {
        0.1
    }

    fn get_inclination(&self) -> f64 {
        0.0
    }

    fn get_orbital_period(&self) -> f64 {
        0.0
    }

    fn is_stationary(&self) -> bool {
        false
    }
}

#[test]
fn mean_motion_never_divides_by_zero() {
    let orbit = InconsistentOrbit;

    assert_eq!(orbit.get_mean_motion(), 0.0);
    assert_eq!(orbit.get_mean_anomaly_at_days(10.0), 0.0);
    assert!(PositionEngine::default()
        .position_at_instant(&orbit, j2000() + TimeDelta::days(10))
        .is_finite());
}

#[test]
fn orbit_path_is_closed() {
    let engine = PositionEngine::new(KeplerSolver::default(), 1e-6);

    for _ in 0..RANDOM_CASES {
        let orbit = random_elliptic();
        let segments = rand::random_range(1..512);
        let path = engine.orbit_path(&orbit, segments);

        assert_eq!(path.len(), segments + 1);
        assert_almost_eq_vec3_rel(
            path[segments],
            path[0],
            &format!("closure of {segments}-segment path for {orbit:?}"),
        );
    }
}

#[test]
fn orbit_path_samples_mean_anomaly() {
    let engine = PositionEngine::default();
    let orbit = Orbit::new(1.0, 0.2056, 7.0, 88.0);
    let path = engine.orbit_path(&orbit, 8);

    for (i, point) in path.iter().enumerate() {
        let mean_anomaly = i as f64 * 45.0;
        assert_almost_eq_vec3(
            *point,
            engine.position(&orbit, mean_anomaly),
            &format!("path point {i}"),
        );
    }
}

#[test]
fn orbit_path_is_time_independent() {
    let engine = PositionEngine::default();
    let earth = body_presets::planets::earth();

    let first = engine.default_orbit_path(&earth);
    let second = engine.default_orbit_path(&earth);

    assert_eq!(first.len(), DEFAULT_ORBIT_SEGMENTS + 1);
    assert_eq!(first, second);
}

#[test]
fn orbit_path_zero_segments() {
    let engine = PositionEngine::default();
    let orbit = earth_like();

    assert_eq!(
        engine.orbit_path(&orbit, 0),
        vec![engine.position(&orbit, 0.0)]
    );
}

#[test]
fn radius_matches_reference_grid() {
    const MEAN_ANOMALIES: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
    const ECCENTRICITIES: [f64; 4] = [0.0, 0.0167, 0.0934, 0.2056];

    let engine = PositionEngine::default();

    for eccentricity in ECCENTRICITIES {
        // Inclination only rotates the plane, so it must not change the radius.
        for inclination in [0.0, 7.0] {
            let orbit = Orbit::new(1.0, eccentricity, inclination, 100.0);

            for mean_anomaly in MEAN_ANOMALIES {
                let expected = reference_radius(1.0, eccentricity, mean_anomaly);
                let what = format!("radius at e = {eccentricity}, M = {mean_anomaly}, i = {inclination}");

                assert_almost_eq(
                    engine.position(&orbit, mean_anomaly).length(),
                    expected,
                    &what,
                );
                assert_almost_eq(
                    engine.pqw_position(&orbit, mean_anomaly).length(),
                    expected,
                    &what,
                );
            }
        }
    }
}

#[test]
fn radius_matches_solution() {
    let engine = PositionEngine::default();

    for _ in 0..RANDOM_CASES {
        let orbit = random_elliptic();
        let mean_anomaly = random_mean_anomaly();
        let solution = engine.solve(&orbit, mean_anomaly);

        assert_almost_eq_rel(
            solution.radius,
            orbit.get_radius_at_true_anomaly(solution.true_anomaly),
            "radius from solution vs orbit",
        );
        assert_almost_eq_rel(
            engine.position(&orbit, mean_anomaly).length(),
            solution.radius,
            "radius from position vs solution",
        );
    }
}

#[test]
fn perihelion_and_aphelion() {
    let engine = PositionEngine::default();

    for _ in 0..RANDOM_CASES {
        let orbit = random_elliptic();
        let a = orbit.semi_major_axis;
        let e = orbit.eccentricity;

        let perihelion = engine.position(&orbit, 0.0);
        let aphelion = engine.position(&orbit, 180.0);

        assert_almost_eq_rel(perihelion.length(), a * (1.0 - e), "perihelion distance");
        assert_almost_eq_rel(aphelion.length(), a * (1.0 + e), "aphelion distance");
        assert_almost_eq_rel(perihelion.length(), orbit.get_periapsis(), "periapsis getter");
        assert_almost_eq_rel(aphelion.length(), orbit.get_apoapsis(), "apoapsis getter");

        // Periapsis lies on +x, apoapsis on -x.
        assert!(perihelion.x > 0.0);
        assert!(aphelion.x < 0.0);
    }
}

#[test]
fn earth_scenario() {
    let orbit = earth_like();

    // The distance scale is applied to every coordinate.
    for scale in [1.0, 1e-4, 1e-6] {
        let engine = PositionEngine::new(KeplerSolver::default(), scale);

        assert_almost_eq_vec3_rel(
            engine.position(&orbit, 0.0) / scale,
            DVec3::new(147_101_680.0, 0.0, 0.0),
            "Earth at perihelion",
        );
        assert_almost_eq_vec3_rel(
            engine.position(&orbit, 180.0) / scale,
            DVec3::new(-152_098_320.0, 0.0, 0.0),
            "Earth at aphelion",
        );
    }
}

#[test]
fn distance_scale_is_linear() {
    let unscaled = PositionEngine::default();

    for _ in 0..RANDOM_CASES {
        let orbit = random_elliptic();
        let scale = rand::random_range(1e-9..1e3);
        let scaled = PositionEngine::new(KeplerSolver::default(), scale);
        let mean_anomaly = random_mean_anomaly();

        assert_almost_eq_vec3_rel(
            scaled.position(&orbit, mean_anomaly),
            unscaled.position(&orbit, mean_anomaly) * scale,
            "scaled position",
        );
    }
}

#[test]
fn inclination_tilts_out_of_plane() {
    let engine = PositionEngine::default();
    let orbit = Orbit::new(1.0, 0.1, 30.0, 10.0);
    let (sin_i, cos_i) = 30f64.to_radians().sin_cos();

    for mean_anomaly in poll_angles().step_by(128) {
        let flat = engine.pqw_position(&orbit, mean_anomaly);
        let position = engine.position(&orbit, mean_anomaly);

        assert_almost_eq_vec3(
            position,
            DVec3::new(flat.x, flat.y * sin_i, flat.y * cos_i),
            &format!("tilted position at M = {mean_anomaly}"),
        );
    }
}

#[test]
fn kepler_solver_converges_for_planetary_orbits() {
    let solver = KeplerSolver::default();
    let precise = KeplerSolver::new(200).with_tolerance(1e-15);

    for _ in 0..RANDOM_CASES {
        let eccentricity = rand::random_range(PLANETARY_ECCENTRICITY);
        let mean_anomaly = random_mean_anomaly().to_radians();

        let e_anom = solver.get_eccentric_anomaly(mean_anomaly, eccentricity);
        assert_almost_eq(
            keplers_equation(mean_anomaly, e_anom, eccentricity),
            0.0,
            &format!("residual with {DEFAULT_KEPLER_ITERATIONS} iterations at e = {eccentricity}"),
        );

        let e_anom = precise.get_eccentric_anomaly(mean_anomaly, eccentricity);
        assert!(
            keplers_equation(mean_anomaly, e_anom, eccentricity).abs() < 1e-12,
            "residual with tolerance at e = {eccentricity}, M = {mean_anomaly}"
        );
    }
}

#[test]
fn kepler_solver_iteration_count() {
    let e = 0.2;
    let m = 1.0;

    // Zero iterations returns the seed.
    assert_eq!(KeplerSolver::new(0).get_eccentric_anomaly(m, e), m);

    // One iteration is a single fixed-point step from the seed.
    assert_eq!(
        KeplerSolver::new(1).get_eccentric_anomaly(m, e),
        m + e * m.sin()
    );

    // A loose tolerance stops before the iteration cap.
    let loose = KeplerSolver::new(1000).with_tolerance(1.0);
    assert_eq!(loose.get_eccentric_anomaly(m, e), m + e * m.sin());

    // More iterations never make the residual worse for these orbits.
    let coarse = KeplerSolver::new(3).get_eccentric_anomaly(m, e);
    let fine = KeplerSolver::new(30).get_eccentric_anomaly(m, e);
    assert!(keplers_equation(m, fine, e).abs() <= keplers_equation(m, coarse, e).abs());
}

#[test]
fn mean_anomaly_from_time() {
    let orbit = earth_like();

    assert_eq!(orbit.get_mean_anomaly_at_days(0.0), 0.0);
    assert_almost_eq(orbit.get_mean_anomaly_at_days(91.25), 90.0, "quarter year");
    let full_year = orbit.get_mean_anomaly_at_days(365.0);
    assert!(full_year < 1e-9 || full_year > 360.0 - 1e-9, "full year gave {full_year}");
    assert_almost_eq(orbit.get_mean_anomaly_at_days(-91.25), 270.0, "before epoch");

    for _ in 0..RANDOM_CASES {
        let days = rand::random_range(-1e6..1e6);
        let mean_anomaly = orbit.get_mean_anomaly_at_days(days);
        assert!((0.0..360.0).contains(&mean_anomaly), "{mean_anomaly} out of range");
    }

    assert_eq!(orbit.get_mean_anomaly_at_instant(j2000()), 0.0);
    assert_eq!(Orbit::stationary().get_mean_anomaly_at_days(1234.5), 0.0);
}

#[test]
fn current_position_uses_clock() {
    let engine = PositionEngine::new(KeplerSolver::default(), 1e-6);
    let mars = body_presets::planets::mars();
    let instant = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let clock = FixedClock(instant);

    let expected = engine.position(&mars, mars.get_mean_anomaly_at_instant(instant));

    assert_eq!(engine.current_position(&mars, &clock), expected);
    assert_eq!(engine.position_at_instant(&mars, instant), expected);

    // At the epoch, every body is at periapsis.
    assert_almost_eq_vec3_rel(
        engine.current_position(&mars, &FixedClock::default()),
        DVec3::new(mars.get_periapsis() * 1e-6, 0.0, 0.0),
        "Mars at J2000",
    );
}

/// A source clock the test moves by hand.
struct ManualClock(Cell<DateTime<Utc>>);

impl ManualClock {
    fn advance(&self, delta: TimeDelta) {
        self.0.set(self.0.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}

#[test]
fn scaled_clock_follows_rate() {
    let engine = PositionEngine::new(KeplerSolver::default(), 1e-6);
    let earth = body_presets::planets::earth();
    let source = ManualClock(Cell::new(Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()));
    let clock = ScaledClock::animation(&source);

    assert_eq!(clock.epoch(), j2000());
    assert_eq!(clock.rate_days_per_second(), ANIMATION_DAYS_PER_SECOND);
    assert_eq!(clock.now(), j2000());

    for seconds in [1, 60, 120, 3_600, 86_400] {
        source.advance(TimeDelta::seconds(seconds));
        let elapsed = clock.elapsed_seconds();
        let expected_days = elapsed * ANIMATION_DAYS_PER_SECOND;

        assert_almost_eq(days_since_j2000(clock.now()), expected_days, "simulated days");
        assert_eq!(
            engine.current_position(&earth, &clock),
            engine.position_at_instant(&earth, clock.now()),
        );
    }

    // Two real minutes is two simulated days.
    let source = ManualClock(Cell::new(j2000()));
    let clock = ScaledClock::animation(&source);
    source.advance(TimeDelta::seconds(120));
    assert_eq!(clock.now(), j2000() + TimeDelta::days(2));
    assert_eq!(
        engine.current_position(&earth, &clock),
        engine.position_at_instant(&earth, j2000() + TimeDelta::days(2)),
    );
}

#[test]
fn scaled_clock_rate_changes_are_continuous() {
    let source = ManualClock(Cell::new(j2000()));
    let mut clock = ScaledClock::new(&source, j2000(), 1.0);

    source.advance(TimeDelta::seconds(10));
    assert_eq!(clock.now(), j2000() + TimeDelta::days(10));

    clock.set_rate_days_per_second(0.0);
    assert_eq!(clock.now(), j2000() + TimeDelta::days(10));
    source.advance(TimeDelta::seconds(100));
    assert_eq!(clock.now(), j2000() + TimeDelta::days(10));

    clock.set_rate_days_per_second(-2.0);
    source.advance(TimeDelta::seconds(10));
    assert_eq!(clock.now(), j2000() - TimeDelta::days(10));
    assert_eq!(clock.epoch(), j2000() + TimeDelta::days(10));
}

#[test]
fn scaled_clock_saturates() {
    let source = ManualClock(Cell::new(j2000()));
    let fast = ScaledClock::new(&source, j2000(), 1e12);
    let backwards = ScaledClock::new(&source, j2000(), -1e12);

    source.advance(TimeDelta::days(365));

    assert_eq!(fast.now(), DateTime::<Utc>::MAX_UTC);
    assert_eq!(backwards.now(), DateTime::<Utc>::MIN_UTC);
}

#[test]
fn fixed_clock_serializes_as_timestamp() {
    let json = serde_json::to_string(&FixedClock::default()).unwrap();
    assert_eq!(json, r#""2000-01-01T12:00:00Z""#);

    let parsed: FixedClock = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.now(), j2000());
}

#[test]
fn days_since_epoch() {
    assert_eq!(days_since_j2000(j2000()), 0.0);
    assert_eq!(days_since_j2000(j2000() + TimeDelta::days(10)), 10.0);
    assert_eq!(days_since_j2000(j2000() - TimeDelta::hours(36)), -1.5);
    assert_eq!(
        j2000(),
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    );
}

#[test]
fn body_and_orbit_agree() {
    let engine = PositionEngine::default();

    for _ in 0..RANDOM_CASES {
        let body = random_body();
        let orbit = body.orbit();
        let mean_anomaly = random_mean_anomaly();

        assert_eq!(
            engine.position(&body, mean_anomaly),
            engine.position(&orbit, mean_anomaly)
        );
    }

    let sun = body_presets::stars::the_sun();
    assert!(sun.orbit().is_stationary());
}

#[test]
fn builtin_planets_are_valid() {
    for body in body_presets::solar_system() {
        let known = body.known_body().expect("built-in bodies are known bodies");

        assert_eq!(body.inclination(), known.inclination());
        assert_eq!(body.color, known.color());

        if known == KnownBody::Sun {
            assert!(body.is_stationary());
            assert!(!body.show_orbit);
            assert_eq!(body.orbital_period(), 0.0);
            assert_eq!(body.distance_from_sun(), 0.0);
        } else {
            assert!(!body.is_stationary());
            assert!(body.show_orbit);
            assert!(body.orbital_period() > 0.0);
            assert!((0.0..1.0).contains(&body.eccentricity()));
        }
    }
}

#[test]
fn known_body_lookup() {
    assert_eq!(KnownBody::from_name("Earth"), Some(KnownBody::Earth));
    assert_eq!(KnownBody::from_name("  neptune "), Some(KnownBody::Neptune));
    assert_eq!(KnownBody::from_name("Vulcan"), None);
    assert_eq!("SUN".parse::<KnownBody>(), Ok(KnownBody::Sun));
    assert!("Ceres".parse::<KnownBody>().is_err());

    assert_eq!(KnownBody::inclination_of("Mercury"), 7.0);
    assert_eq!(KnownBody::inclination_of("Ceres"), 0.0);

    for body in KnownBody::ALL {
        assert_eq!(KnownBody::from_name(&body.to_string()), Some(body));
        assert_eq!(body.is_stationary(), body == KnownBody::Sun);
    }
}

#[test]
fn engine_config_defaults() {
    let config = EngineConfig::default();

    assert_eq!(config.distance_scale, 1.0);
    assert_eq!(config.size_scale, 1.0);
    assert_eq!(config.orbit_segments, DEFAULT_ORBIT_SEGMENTS);
    assert_eq!(config.solver(), KeplerSolver::default());
    assert_eq!(config.engine(), PositionEngine::default());

    let parsed: EngineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn engine_config_overrides() {
    let config: EngineConfig = serde_json::from_str(
        r#"{
            "distance_scale": 0.0001,
            "size_scale": 0.0003,
            "orbit_segments": 32,
            "kepler_iterations": 50,
            "kepler_tolerance": 1e-12
        }"#,
    )
    .unwrap();

    let engine = config.engine();
    assert_eq!(engine.distance_scale, 0.0001);
    assert_eq!(engine.orbit_segments, 32);
    assert_eq!(engine.solver, KeplerSolver::new(50).with_tolerance(1e-12));
    assert_eq!(engine.default_orbit_path(&earth_like()).len(), 33);

    let earth = body_presets::planets::earth();
    assert_almost_eq(config.display_radius(&earth), 12_742.0 * 0.0003 / 2.0, "display radius");
}
