use num_bigint::BigInt;
use num_traits::Zero;
use proptest::prelude::*;

use super::*;
use crate::plane::harm_conj;
use crate::{elliptic, hyperbolic, projective};

fn big(c: [i64; 3]) -> [BigInt; 3] {
    [BigInt::from(c[0]), BigInt::from(c[1]), BigInt::from(c[2])]
}

#[test]
fn harmonic_range_has_cross_ratio_minus_one() {
    let a = projective::Point::new([1i64, 3, 1]);
    let b = projective::Point::new([4, 2, 1]);
    let c = projective::Point::plucker(&2, &a, &3, &b);
    let d = harm_conj(&a, &b, &c);
    assert_eq!(cross_ratio(&a, &b, &c, &d), -Fraction::one());
}

#[test]
fn cross_ratio_of_a_repeated_point_is_one() {
    let a = projective::Point::new([1i64, 3, 1]);
    let b = projective::Point::new([4, 2, 1]);
    let c = projective::Point::plucker(&1, &a, &2, &b);
    assert_eq!(cross_ratio(&a, &b, &c, &c), Fraction::one());
}

#[test]
fn quadrance_and_spread_vanish_on_equal_arguments() {
    let a = elliptic::Point::new([1i64, 3, 1]);
    assert!(quadrance(&a, &a).is_zero());
    let l = hyperbolic::Line::new([2i64, -5, 4]);
    assert!(spread(&l, &l).is_zero());
}

#[test]
fn quadrance_concrete_values() {
    let a1 = elliptic::Point::new([1i64, 3, 1]);
    let a2 = elliptic::Point::new([4, 2, 1]);
    assert_eq!(quadrance(&a1, &a2), Fraction::new(10, 21));

    let h1 = hyperbolic::Point::new([1i64, 3, 1]);
    let h2 = hyperbolic::Point::new([4, 2, 1]);
    assert_eq!(quadrance(&h1, &h2), Fraction::new(10, 19));
}

#[test]
fn tqf_vanishes_on_the_collinear_reference_triple() {
    // a4 = 2*a1 + 3*a2 is collinear with a1 and a2 by construction.
    let a1 = elliptic::Point::new([1i64, 3, 1]);
    let a2 = elliptic::Point::new([4, 2, 1]);
    let a4 = elliptic::Point::plucker(&2, &a1, &3, &a2);
    let q = tri_quadrance(&[a1, a2, a4]);
    assert!(check_tqf(&q).is_zero());

    let h1 = hyperbolic::Point::new([1i64, 3, 1]);
    let h2 = hyperbolic::Point::new([4, 2, 1]);
    let h4 = hyperbolic::Point::plucker(&2, &h1, &3, &h2);
    let q = tri_quadrance(&[h1, h2, h4]);
    assert!(check_tqf(&q).is_zero());
}

#[test]
fn tqf_does_not_vanish_on_a_proper_triangle() {
    let tri = [
        elliptic::Point::new([1i64, 3, 1]),
        elliptic::Point::new([4, 2, 1]),
        elliptic::Point::new([1, 1, -1]),
    ];
    assert!(!check_tqf(&tri_quadrance(&tri)).is_zero());
}

#[test]
fn tqf_over_bigint_coordinates() {
    let a1 = hyperbolic::Point::new(big([1, 3, 1]));
    let a2 = hyperbolic::Point::new(big([4, 2, 1]));
    let a4 = hyperbolic::Point::plucker(&BigInt::from(2), &a1, &BigInt::from(3), &a2);
    let q = tri_quadrance(&[a1, a2, a4]);
    assert!(check_tqf(&q).is_zero());
}

#[test]
fn spreads_of_the_reference_trilateral() {
    use crate::plane::tri_dual;
    let tri = [
        elliptic::Point::new([1i64, 3, 1]),
        elliptic::Point::new([4, 2, 1]),
        elliptic::Point::new([1, 1, -1]),
    ];
    let trilateral = tri_dual(&tri);
    let s = tri_spread(&trilateral);
    // all three spreads are proper, nonzero measures for this triangle
    for si in &s {
        assert!(!si.is_zero());
    }
}

fn triple(bound: i64) -> impl Strategy<Value = [i64; 3]> {
    prop::array::uniform3(-bound..=bound).prop_filter("nonzero", |c| c.iter().any(|v| *v != 0))
}

fn coeff(bound: i64) -> impl Strategy<Value = i64> {
    (-bound..=bound).prop_filter("nonzero", |v| *v != 0)
}

proptest! {
    #[test]
    fn tqf_vanishes_on_random_collinear_triples(a in triple(10), b in triple(10),
                                                lambda in coeff(5), mu in coeff(5)) {
        let a = elliptic::Point::new(big(a));
        let b = elliptic::Point::new(big(b));
        prop_assume!(a != b);
        let c = elliptic::Point::plucker(&BigInt::from(lambda), &a, &BigInt::from(mu), &b);
        let q = tri_quadrance(&[a, b, c]);
        prop_assert!(check_tqf(&q).is_zero());
    }

    #[test]
    fn tqf_vanishes_on_random_hyperbolic_collinear_triples(a in triple(10), b in triple(10),
                                                           lambda in coeff(5), mu in coeff(5)) {
        let a = hyperbolic::Point::new(big(a));
        let b = hyperbolic::Point::new(big(b));
        prop_assume!(a != b);
        let c = hyperbolic::Point::plucker(&BigInt::from(lambda), &a, &BigInt::from(mu), &b);
        // null points make a denominator vanish and saturate the measure
        for p in [&a, &b, &c] {
            prop_assume!(!p.dot(&p.perp()).is_zero());
        }
        let q = tri_quadrance(&[a, b, c]);
        prop_assert!(check_tqf(&q).is_zero());
    }

    #[test]
    fn random_harmonic_ranges_have_cross_ratio_minus_one(a in triple(20), b in triple(20),
                                                         lambda in coeff(5), mu in coeff(5)) {
        let a = projective::Point::new(big(a));
        let b = projective::Point::new(big(b));
        prop_assume!(a != b);
        let c = projective::Point::plucker(&BigInt::from(lambda), &a, &BigInt::from(mu), &b);
        let d = harm_conj(&a, &b, &c);
        prop_assert_eq!(cross_ratio(&a, &b, &c, &d), -Fraction::one());
    }
}
