use core::f64::consts::PI;

use hamilton::vector::{cross, dot, norm};
use hamilton::{rotate, slerp, slerp_with_clearance, Quaternion, QuaternionError, Vec3};

const TOL: f64 = 1e-12;

fn assert_quat_near(a: &Quaternion<f64>, b: &Quaternion<f64>, tol: f64, msg: &str) {
    let (va, vb) = (a.vect(), b.vect());
    assert!(
        (a.w() - b.w()).abs() < tol
            && (va[0] - vb[0]).abs() < tol
            && (va[1] - vb[1]).abs() < tol
            && (va[2] - vb[2]).abs() < tol,
        "{}: {} vs {}",
        msg,
        a,
        b
    );
}

fn assert_vec_near(a: &Vec3<f64>, b: &Vec3<f64>, tol: f64, msg: &str) {
    assert!(
        (0..3).all(|i| (a[i] - b[i]).abs() < tol),
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

fn samples() -> [Quaternion<f64>; 5] {
    [
        Quaternion::new(1.0, [0.6, 0.8, 0.0]),
        Quaternion::new(2.0, [-0.8, 0.0, -0.6]),
        Quaternion::new(1.1, [1.0, 2.9, 3.1]),
        Quaternion::new(1.1, [-2.9, 3.1, -1.0]),
        Quaternion::new(-0.3, [0.05, -1.7, 0.4]),
    ]
}

// ── Algebra ──────────────────────────────────────────────────────────

#[test]
fn conjugate_twice_is_identity() {
    for q in samples() {
        assert_eq!(q.conjugate().conjugate(), q);
    }
}

#[test]
fn product_with_inverse_is_identity() {
    let id = Quaternion::identity();
    for q in samples() {
        let inv = q.inverse().unwrap();
        assert_quat_near(&(q * inv), &id, TOL, "q * q⁻¹");
        assert_quat_near(&(inv * q), &id, TOL, "q⁻¹ * q");
    }
}

#[test]
fn normalized_has_unit_norm() {
    for q in samples() {
        assert!((q.normalize().unwrap().norm() - 1.0).abs() < TOL);
    }
}

#[test]
fn multiplication_is_associative() {
    let s = samples();
    for a in &s {
        for b in &s {
            let c = s[4];
            assert_quat_near(&((a * b) * c), &(a * (b * c)), 1e-10, "associativity");
        }
    }
}

#[test]
fn norm_is_multiplicative() {
    let s = samples();
    for a in &s {
        for b in &s {
            assert!(((a * b).norm() - a.norm() * b.norm()).abs() < 1e-10);
        }
    }
}

#[test]
fn pure_product_is_cross_minus_dot() {
    // (0, u)(0, v) = (-u·v, u×v)
    let u = [1.0_f64, 2.0, 3.0];
    let v = [-0.5, 4.0, 1.5];
    let p = Quaternion::from_vector(u) * Quaternion::from_vector(v);
    assert_eq!(p.w(), -dot(&u, &v));
    assert_vec_near(&p.vect(), &cross(&u, &v), TOL, "vector part");
}

#[test]
fn addition_commutative_and_associative() {
    let [a, b, c, _, _] = samples();
    assert_eq!(a + b, b + a);
    assert_quat_near(&((a + b) + c), &(a + (b + c)), TOL, "associativity");
}

#[test]
fn scalar_multiplication_distributes() {
    let [a, b, _, _, _] = samples();
    let k = 2.2;
    assert_quat_near(&((a + b) * k), &(a * k + b * k), TOL, "distributivity");
}

#[test]
fn demo_arithmetic() {
    let q3 = Quaternion::new(1.1, [1.0, 2.9, 3.1]);
    let q4 = Quaternion::new(1.1, [-2.9, 3.1, -1.0]);
    assert_quat_near(&(q3 + q4), &Quaternion::new(2.2, [-1.9, 6.0, 2.1]), TOL, "q3 + q4");
    assert_quat_near(
        &(q3 * q4),
        &Quaternion::new(-1.78, [-14.6, -1.39, 13.82]),
        TOL,
        "q3 * q4",
    );
    assert_quat_near(
        &(q4 * 2.2),
        &Quaternion::new(2.42, [-6.38, 6.82, -2.2]),
        TOL,
        "q4 * 2.2",
    );
}

// ── Rotation ─────────────────────────────────────────────────────────

#[test]
fn rotation_preserves_length() {
    let v = [1.0, -2.0, 0.5];
    for axis in [[1.0, 0.0, 0.0], [0.0, 0.6, 0.8], [0.48, 0.6, 0.64]] {
        for i in 0..6 {
            let angle = i as f64 * PI / 3.0;
            let r = rotate(v, axis, angle).unwrap();
            assert!((norm(&r) - norm(&v)).abs() < TOL);
        }
    }
}

#[test]
fn rotation_by_zero_is_identity() {
    let v = [1.0, -2.0, 0.5];
    assert_vec_near(&rotate(v, [0.0, 0.6, 0.8], 0.0).unwrap(), &v, TOL, "zero angle");
}

#[test]
fn rotation_demo_half_turn() {
    let r = rotate([1.0, 1.0, 1.0], [1.0, 0.0, 0.0], PI).unwrap();
    assert_vec_near(&r, &[1.0, -1.0, -1.0], TOL, "half turn about x");
}

#[test]
fn rotation_full_turn_returns() {
    let v = [0.2, 0.3, -0.9];
    let r = rotate(v, [0.0, 0.0, 1.0], 2.0 * PI).unwrap();
    assert_vec_near(&r, &v, TOL, "full turn");
}

// ── SLERP ────────────────────────────────────────────────────────────

#[test]
fn slerp_endpoints_up_to_sign() {
    let s = samples();
    for a in &s {
        for b in &s {
            let an = a.normalize().unwrap();
            let bn = b.normalize().unwrap();
            let s0 = slerp(a, b, 0.0).unwrap();
            let s1 = slerp(a, b, 1.0).unwrap();
            assert!(
                (s0.dot(&an).abs() - 1.0).abs() < 1e-9,
                "t = 0: {} vs {}",
                s0,
                an
            );
            assert!(
                (s1.dot(&bn).abs() - 1.0).abs() < 1e-9,
                "t = 1: {} vs {}",
                s1,
                bn
            );
        }
    }
}

#[test]
fn slerp_of_equal_inputs() {
    for q in samples() {
        let qn = q.normalize().unwrap();
        assert_quat_near(&slerp(&q, &q, 0.37).unwrap(), &qn, TOL, "slerp(q, q)");
    }
}

#[test]
fn slerp_demo_golden_value() {
    let q1 = Quaternion::new(1.0, [0.6, 0.8, 0.0]);
    let q2 = Quaternion::new(2.0, [-0.8, 0.0, -0.6]);
    let q = slerp(&q1, &q2, 0.1).unwrap();
    assert_quat_near(
        &q,
        &Quaternion::new(
            0.7705652764449337,
            [0.353471742729083, 0.5293582826456452, -0.03266022694136315],
        ),
        TOL,
        "slerp golden",
    );
    assert_eq!(
        format!("{:.6}", q),
        "(0.770565, 0.353472i, 0.529358j, -0.032660k)"
    );
}

#[test]
fn slerp_constant_angular_velocity() {
    let a = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 0.1);
    let b = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 1.3);
    let mut prev = slerp(&a, &b, 0.0).unwrap();
    let mut steps = [0.0; 4];
    for (i, step) in steps.iter_mut().enumerate() {
        let next = slerp(&a, &b, (i + 1) as f64 / 4.0).unwrap();
        *step = prev.dot(&next).min(1.0).acos();
        prev = next;
    }
    for s in &steps[1..] {
        assert!((s - steps[0]).abs() < 1e-9);
    }
}

#[test]
fn slerp_zero_angle_guard() {
    let q = Quaternion::new(0.5, [0.5, 0.5, 0.5]);
    let s = slerp_with_clearance(&q, &q, 0.5, 1.0).unwrap();
    assert_eq!(s, q);
}

// ── Errors ───────────────────────────────────────────────────────────

#[test]
fn zero_norm_is_reported() {
    let zero = Quaternion::new(0.0, [0.0, 0.0, 0.0]);
    let q = Quaternion::<f64>::identity();
    assert_eq!(zero.normalize(), Err(QuaternionError::ZeroNorm));
    assert_eq!(zero.inverse(), Err(QuaternionError::ZeroNorm));
    assert_eq!(zero.rotate_vector([1.0, 0.0, 0.0]), Err(QuaternionError::ZeroNorm));
    assert_eq!(slerp(&zero, &q, 0.5), Err(QuaternionError::ZeroNorm));
}

#[cfg(feature = "std")]
#[test]
fn error_converts_to_boxed_error() {
    fn run() -> Result<Quaternion<f64>, Box<dyn std::error::Error>> {
        Ok(Quaternion::new(0.0, [0.0, 0.0, 0.0]).inverse()?)
    }
    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "quaternion has zero norm");
}
