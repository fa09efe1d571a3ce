use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;
use shoal_geom::{Vec3, Vec4};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e4)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_vec4() -> impl Strategy<Value = Vec4> {
    (bounded_f32(), bounded_f32(), bounded_f32(), bounded_f32())
        .prop_map(|(x, y, z, w)| Vec4::new(x, y, z, w))
}

proptest! {
    // Addition commutativity: a + b == b + a (element-wise)
    #[test]
    fn vec3_add_commutative(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a + b, b + a, 1e-3));
    }

    // Component-wise product commutes and ONE is its identity
    #[test]
    fn vec3_mul_elem_commutative(a in arb_vec3(), b in arb_vec3()) {
        let ab = a.mul_elem(b);
        let ba = b.mul_elem(a);
        prop_assert!(vapprox(ab, ba, 1e-2));
        prop_assert!(vapprox(a.mul_elem(Vec3::ONE), a, 0.0));
    }

    // Scalar mul distributes over addition: (a + b) * s == a*s + b*s
    #[test]
    fn vec3_scalar_mul_distributive(a in arb_vec3(), b in arb_vec3(), s in bounded_f32()) {
        prop_assert!(vapprox((a + b) * s, a * s + b * s, 1e-1 * (1.0 + s.abs())));
    }

    // Cross product is anti-commutative and orthogonal to both inputs
    #[test]
    fn vec3_cross_anticommutative(a in arb_vec3(), b in arb_vec3()) {
        let c = a.cross(b);
        prop_assert!(vapprox(c, (b.cross(a)) * -1.0, 1e-2));
        // Cancellation error in the cross terms grows with |a||b|, so the
        // dot-product tolerance must too.
        let scale = a.length() * b.length() * (a.length() + b.length());
        prop_assert!(c.dot(a).abs() <= 1e-2 * (1.0 + scale));
        prop_assert!(c.dot(b).abs() <= 1e-2 * (1.0 + scale));
    }

    // extend/mul_elem agree with the Vec3 versions on the xyz lanes
    #[test]
    fn vec4_extend_preserves_lanes(a in arb_vec3(), w in bounded_f32()) {
        let v = a.extend(w);
        prop_assert_eq!(v.x, a.x);
        prop_assert_eq!(v.y, a.y);
        prop_assert_eq!(v.z, a.z);
        prop_assert_eq!(v.w, w);
    }

    #[test]
    fn vec4_one_is_mul_elem_identity(a in arb_vec4()) {
        prop_assert_eq!(a.mul_elem(Vec4::ONE), a);
    }
}
