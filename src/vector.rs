use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use rand::Rng;

/// A 2D point or displacement. Every operation returns a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Unit vector pointing at a uniformly random angle in `[0, 2π)`.
    ///
    /// The generator is supplied by the caller, so a seeded or mock `Rng`
    /// gives reproducible results.
    pub fn random_unit(rng: &mut impl Rng) -> Self {
        Vector2D::new(1.0, 0.0).rotated(rng.gen_range(0.0..TAU))
    }

    pub fn magnitude(&self) -> f64 {
        let l2 = self.magnitude_squared();
        if l2 == 0.0 {
            return 0.0;
        }
        l2.sqrt()
    }

    /// Cheaper than `magnitude` when only relative lengths matter.
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns `self` unchanged when its magnitude is exactly zero.
    pub fn normalised(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return *self;
        }
        self.divided(mag)
    }

    pub fn add(&self, other: Vector2D) -> Self {
        *self + other
    }

    pub fn subtract(&self, other: Vector2D) -> Self {
        *self - other
    }

    pub fn dot(&self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn multiplied(&self, scalar: f64) -> Self {
        *self * scalar
    }

    /// No zero check: dividing by zero yields `inf`/`NaN` components.
    pub fn divided(&self, scalar: f64) -> Self {
        *self / scalar
    }

    /// Counter-clockwise rotation for positive angles.
    pub fn rotated(&self, radians: f64) -> Self {
        let (sr, cr) = radians.sin_cos();
        Vector2D::new(self.x * cr - self.y * sr, self.x * sr + self.y * cr)
    }

    /// Wraps both coordinates onto a torus of size `x_limit` by `y_limit`.
    pub fn wrap(&self, x_limit: f64, y_limit: f64) -> Self {
        Vector2D::new(
            wrap_coordinate(self.x, x_limit),
            wrap_coordinate(self.y, y_limit),
        )
    }

    /// Shortest signed displacement from `self` to `to` on a torus.
    ///
    /// An axis offset of exactly half the limit stays positive.
    pub fn wrapped_distance_vector(&self, to: Vector2D, x_limit: f64, y_limit: f64) -> Self {
        Vector2D::new(
            wrapped_offset(self.x, to.x, x_limit),
            wrapped_offset(self.y, to.y, y_limit),
        )
    }

    /// Clamps both coordinates into `[0, limit]`.
    pub fn contain(&self, x_limit: f64, y_limit: f64) -> Self {
        Vector2D::new(clamp_upper(self.x, x_limit), clamp_upper(self.y, y_limit))
    }
}

pub fn wrap_coordinate(value: f64, max: f64) -> f64 {
    let wrapped = value % max;
    if wrapped < 0.0 {
        wrapped + max
    } else {
        wrapped
    }
}

fn clamp_upper(value: f64, limit: f64) -> f64 {
    // f64::min would swallow a NaN coordinate.
    let clamped = if value > limit { limit } else { value };
    if clamped < 0.0 { 0.0 } else { clamped }
}

fn wrapped_offset(from: f64, to: f64, limit: f64) -> f64 {
    let d = (limit + to - from) % limit;
    if d > limit / 2.0 { d - limit } else { d }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        self * -1.0
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    fn approx_vec(a: Vector2D, b: Vector2D) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    fn sample_vectors(count: usize) -> Vec<Vector2D> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        (0..count)
            .map(|_| Vector2D::new(rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0)))
            .collect()
    }

    #[test]
    fn subtracting_self_gives_zero() {
        for v in sample_vectors(200) {
            assert_eq!(v.subtract(v), Vector2D::ZERO);
        }
    }

    #[test]
    fn adding_negated_self_gives_zero() {
        for v in sample_vectors(200) {
            let sum = Vector2D::add(&v, v.multiplied(-1.0));
            assert_eq!(sum, Vector2D::ZERO);
        }
    }

    #[test]
    fn normalised_vectors_have_unit_length() {
        for v in sample_vectors(200) {
            assert!(approx_eq(v.normalised().magnitude(), 1.0), "{v}");
        }
        let n = Vector2D::new(3.0, 4.0).normalised();
        assert!(approx_vec(n, Vector2D::new(0.6, 0.8)));
    }

    #[test]
    fn normalising_zero_returns_zero() {
        assert_eq!(Vector2D::new(0.0, 0.0).normalised(), Vector2D::new(0.0, 0.0));
    }

    #[test]
    fn rotation_preserves_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for v in sample_vectors(200) {
            let theta = rng.gen_range(-10.0..10.0);
            assert!(approx_eq(v.rotated(theta).magnitude(), v.magnitude()));
        }
    }

    #[test]
    fn full_turn_is_identity() {
        for v in sample_vectors(50) {
            let turned = v.rotated(2.0 * PI);
            assert!((turned.x - v.x).abs() < 1e-9 * v.magnitude().max(1.0));
            assert!((turned.y - v.y).abs() < 1e-9 * v.magnitude().max(1.0));
        }
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let r = Vector2D::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert!(r.x.abs() < EPSILON);
        assert!(approx_eq(r.y, 1.0));
    }

    #[test]
    fn orthogonal_dot_is_zero() {
        assert_eq!(Vector2D::new(5.0, 0.0).dot(Vector2D::new(0.0, 5.0)), 0.0);
        assert_eq!(Vector2D::new(1.0, 2.0).dot(Vector2D::new(3.0, 4.0)), 11.0);
    }

    #[test]
    fn three_four_five() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(Vector2D::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn division_by_zero_propagates() {
        let v = Vector2D::new(1.0, 0.0).divided(0.0);
        assert_eq!(v.x, f64::INFINITY);
        assert!(v.y.is_nan());
        assert_eq!(Vector2D::new(4.0, -2.0).divided(2.0), Vector2D::new(2.0, -1.0));
    }

    #[test]
    fn wrap_negative_coordinates() {
        assert_eq!(Vector2D::new(-1.0, -1.0).wrap(10.0, 10.0), Vector2D::new(9.0, 9.0));
        assert_eq!(Vector2D::new(-9.5, 23.0).wrap(10.0, 10.0), Vector2D::new(0.5, 3.0));
        assert_eq!(Vector2D::new(4.0, 7.0).wrap(10.0, 10.0), Vector2D::new(4.0, 7.0));
        assert_eq!(wrap_coordinate(-10.0, 10.0), 0.0);
        assert_eq!(wrap_coordinate(-25.0, 10.0), 5.0);
    }

    #[test]
    fn wrap_lands_inside_the_field() {
        for v in sample_vectors(200) {
            let w = v.wrap(80.0, 24.0);
            assert!(w.x >= 0.0 && w.x < 80.0, "{v} -> {w}");
            assert!(w.y >= 0.0 && w.y < 24.0, "{v} -> {w}");
        }
    }

    #[test]
    fn wrapped_distance_prefers_the_short_way_round() {
        let d = Vector2D::new(1.0, 1.0).wrapped_distance_vector(Vector2D::new(9.0, 9.0), 10.0, 10.0);
        assert_eq!(d, Vector2D::new(-2.0, -2.0));
        assert!(d.magnitude() < Vector2D::new(8.0, 8.0).magnitude());

        let direct = Vector2D::new(2.0, 2.0).wrapped_distance_vector(Vector2D::new(4.0, 1.0), 10.0, 10.0);
        assert_eq!(direct, Vector2D::new(2.0, -1.0));
    }

    #[test]
    fn wrapped_distance_tie_stays_positive() {
        let d = Vector2D::new(1.0, 0.0).wrapped_distance_vector(Vector2D::new(6.0, 5.0), 10.0, 10.0);
        assert_eq!(d, Vector2D::new(5.0, 5.0));
    }

    #[test]
    fn contain_clamps_both_sides() {
        assert_eq!(Vector2D::new(15.0, -3.0).contain(10.0, 10.0), Vector2D::new(10.0, 0.0));
        assert_eq!(Vector2D::new(2.5, 7.0).contain(10.0, 10.0), Vector2D::new(2.5, 7.0));
    }

    #[test]
    fn contain_keeps_nan_coordinates() {
        let c = Vector2D::new(f64::NAN, -3.0).contain(10.0, 10.0);
        assert!(c.x.is_nan());
        assert_eq!(c.y, 0.0);

        let c = Vector2D::new(f64::INFINITY, f64::NEG_INFINITY).contain(10.0, 10.0);
        assert_eq!(c, Vector2D::new(10.0, 0.0));
    }

    #[test]
    fn wrap_keeps_nan_coordinates() {
        let w = Vector2D::new(f64::NAN, -1.0).wrap(10.0, 10.0);
        assert!(w.x.is_nan());
        assert_eq!(w.y, 9.0);
        assert!(wrap_coordinate(f64::INFINITY, 10.0).is_nan());
    }

    #[test]
    fn random_unit_has_unit_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(approx_eq(Vector2D::random_unit(&mut rng).magnitude(), 1.0));
        }
        let mut thread = rand::thread_rng();
        assert!(approx_eq(Vector2D::random_unit(&mut thread).magnitude(), 1.0));
    }

    #[test]
    fn random_unit_is_reproducible_with_injected_source() {
        let mut zero = StepRng::new(0, 0);
        assert_eq!(Vector2D::random_unit(&mut zero), Vector2D::new(1.0, 0.0));

        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            assert_eq!(Vector2D::random_unit(&mut a), Vector2D::random_unit(&mut b));
        }
    }

    #[test]
    fn operators_match_named_methods() {
        let a = Vector2D::new(1.5, -2.0);
        let b = Vector2D::new(0.5, 4.0);
        assert_eq!(a + b, Vector2D::new(2.0, 2.0));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * 2.0, a.multiplied(2.0));
        assert_eq!(a / 2.0, a.divided(2.0));
        assert_eq!(-a, Vector2D::new(-1.5, 2.0));
        assert_eq!(Vector2D::default(), Vector2D::ZERO);
        assert_eq!(a.to_string(), "(1.500, -2.000)");
    }
}
