//! Property checks for `Vector2` / `Vector3` over seeded random inputs
use approx::assert_relative_eq;
use toolkit_core::{RandomSource, Vector2, Vector3};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const SAMPLES: usize = 500;

fn sample_2d(src: &mut RandomSource) -> Vector2 {
    Vector2::new(src.random_range(-100.0, 100.0), src.random_range(-100.0, 100.0))
}

fn sample_3d(src: &mut RandomSource) -> Vector3 {
    Vector3::new(
        src.random_range(-100.0, 100.0),
        src.random_range(-100.0, 100.0),
        src.random_range(-100.0, 100.0),
    )
}

#[test]
fn test_clone_equals_and_does_not_alias() {
    let mut src = RandomSource::seeded(11);
    for _ in 0..SAMPLES {
        let v = sample_2d(&mut src);
        let mut c = v.clone();
        assert!(c.equals(&v));
        c.add(&(1.0, 1.0));
        assert!(!c.equals(&v));

        let w = sample_3d(&mut src);
        let mut d = w.clone();
        assert!(d.equals(&w));
        d.set_z(w.z() + 1.0);
        assert!(!d.equals(&w));
    }
}

#[test]
fn test_normalize_gives_unit_length() {
    let mut src = RandomSource::seeded(12);
    for _ in 0..SAMPLES {
        let mut v = sample_2d(&mut src);
        v.normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-9);

        let mut w = sample_3d(&mut src);
        w.normalize();
        assert_relative_eq!(w.magnitude(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_normalize_handles_extreme_magnitudes() {
    for scale in [1e200, 1e-170, f64::MAX / 2.0, f64::MIN_POSITIVE] {
        let mut v = Vector2::new(scale, scale);
        v.normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(v.x(), std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);

        let mut w = Vector3::new(scale, 0.0, -scale);
        w.normalize();
        assert_relative_eq!(w.magnitude(), 1.0, epsilon = 1e-9);

        let mut axis = Vector3::new(scale, 0.0, 0.0);
        axis.normalize();
        assert!(axis.equals(&Vector3::RIGHT), "{axis}");
    }
}

#[test]
fn test_zero_vectors_have_no_nan() {
    let v = Vector2::ZERO;
    assert_eq!(v.magnitude(), 0.0);
    assert_eq!((v.ux(), v.uy()), (0.0, 0.0));

    let w = Vector3::new(0.0, 0.0, 0.0);
    assert_eq!(w.magnitude(), 0.0);
    assert_eq!((w.ux(), w.uy(), w.uz()), (0.0, 0.0, 0.0));

    let mut n = Vector2::new(0.0, 0.0);
    n.normalize();
    assert!(!n.x().is_nan() && !n.y().is_nan());
    assert!(n.normal().equals(&Vector2::ZERO));
}

#[test]
fn test_add_subtract_round_trip() {
    // Integer-valued coordinates keep the round trip exact
    let mut src = RandomSource::seeded(13);
    for _ in 0..SAMPLES {
        let start = Vector2::new(
            src.random_int(-1000, 1000) as f64,
            src.random_int(-1000, 1000) as f64,
        );
        let a = Vector2::new(
            src.random_int(-1000, 1000) as f64,
            src.random_int(-1000, 1000) as f64,
        );
        let mut v = start.clone();
        v.add(&a).subtract(&a);
        assert!(v.equals(&start));

        let start3 = Vector3::new(
            src.random_int(-1000, 1000) as f64,
            src.random_int(-1000, 1000) as f64,
            src.random_int(-1000, 1000) as f64,
        );
        let b = Vector3::from((3.0, -7.0, 11.0));
        let mut w = start3.clone();
        w.add(&b).subtract(&b);
        assert!(w.equals(&start3));
    }
}

#[test]
fn test_derived_values_never_stale() {
    let mut v = Vector2::new(3.0, 4.0);
    assert_eq!(v.length(), 5.0);

    v.scale(2.0);
    assert_eq!(v.length(), 10.0);
    v.negate();
    assert_relative_eq!(v.ux(), -0.6);
    assert_relative_eq!(v.uy(), -0.8);
    v.lerp(&(0.0, 0.0), 1.0);
    assert_eq!(v.length(), 0.0);
    v.copy(&(0.0, -2.0));
    assert_eq!(v.uy(), -1.0);

    let mut w = Vector3::new(1.0, 2.0, 2.0);
    assert_eq!(w.length(), 3.0);
    w.cross(&Vector3::UP);
    assert_relative_eq!(w.length(), 5f64.sqrt());
    w.multiply(&(0.0, 0.0, 0.0));
    assert_eq!(w.length(), 0.0);
    assert_eq!(w.uz(), 0.0);
}

#[test]
fn test_constants_cannot_be_mutated() {
    let mut left = Vector2::LEFT;
    left.set(5.0, 5.0);
    assert!(Vector2::LEFT.equals(&(-1.0, 0.0)));

    let mut forward = Vector3::FORWARD;
    forward.scale(3.0);
    assert!(Vector3::FORWARD.equals(&(0.0, 1.0, 0.0)));
    assert!(Vector3::BACKWARD.equals(&(0.0, -1.0, 0.0)));
}

#[test]
fn test_vectors_interoperate() {
    let planar = Vector2::new(2.0, 3.0);
    let mut spatial = Vector3::new(1.0, 1.0, 1.0);
    spatial.add(&planar);
    assert!(spatial.equals(&(3.0, 4.0, 1.0)));

    let mut flat = Vector2::new(0.0, 0.0);
    flat.copy(&spatial);
    assert!(flat.equals(&(3.0, 4.0)));
    assert_eq!(flat.distance(&spatial), 0.0);
}

#[test]
fn test_serde_shape() {
    let v = Vector2::new(1.5, -2.0);
    assert_eq!(
        serde_json::to_string(&v).expect("serialize"),
        r#"{"x":1.5,"y":-2.0}"#
    );

    let w: Vector3 = serde_json::from_str(r#"{"x":0.0,"y":3.0,"z":4.0}"#).expect("deserialize");
    assert!(w.is_dirty());
    assert_eq!(w.length(), 5.0);
}
