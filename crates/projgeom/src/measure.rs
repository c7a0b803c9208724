//! Metric layer: cross-ratio, quadrance, spread.
//!
//! Purpose
//! - Rational (non-transcendental) analogues of squared-distance and
//!   squared-sine-angle over a Cayley–Klein polarity, plus the projective
//!   cross-ratio they are built from.
//!
//! Model
//! - All measures are exact [`Fraction`]s over an [`Integral`] coordinate
//!   scalar. Null objects (`x.dot(x.perp()) == 0`) make a denominator
//!   vanish; the fraction then saturates to its `infinity`/`nan` sentinels
//!   instead of trapping, and downstream arithmetic propagates them.
//!
//! Conventions
//! - `quadrance(a, a) == 0` and `spread(l, l) == 0`.
//! - Four collinear points with `(a, b; c, d) == -1` are a harmonic range;
//!   `plane::harm_conj` constructs exactly that `d`.
//! - Code cross-refs: `fraction::Fraction`, `cayley_klein::CayleyKlein`.

use num_traits::One;

use crate::cayley_klein::CayleyKlein;
use crate::fraction::Fraction;
use crate::plane::{coincident, HomogeneousPlane};
use crate::scalar::Integral;

/// Ratio of dot-product ratios: `(a·l / a·m) / (b·l / b·m)`.
///
/// Invariant under rescaling of any argument; the building block for
/// [`cross_ratio`].
pub fn x_ratio<P, L, K>(a: &P, b: &P, l: &L, m: &L) -> Fraction<K>
where
    K: Integral,
    P: HomogeneousPlane<Dual = L, Scalar = K>,
    L: HomogeneousPlane<Dual = P, Scalar = K>,
{
    Fraction::new(a.dot(l), a.dot(m)) / Fraction::new(b.dot(l), b.dot(m))
}

/// Cross-ratio `(a, b; c, d)` of four collinear points (or dually, four
/// concurrent lines).
///
/// Computed through two auxiliary duals drawn to a common off-line anchor;
/// the choice of anchor cancels. Precondition: all four arguments share a
/// common dual.
pub fn cross_ratio<P, L, K>(a: &P, b: &P, c: &P, d: &P) -> Fraction<K>
where
    K: Integral,
    P: HomogeneousPlane<Dual = L, Scalar = K>,
    L: HomogeneousPlane<Dual = P, Scalar = K>,
{
    debug_assert!(coincident(a, b, c) && coincident(a, b, d));
    let anchor = a.circ(b).aux();
    let lc = c.circ(&anchor);
    let ld = d.circ(&anchor);
    x_ratio(a, b, &lc, &ld)
}

/// Quadrance between two points of a Cayley–Klein plane:
/// `1 - ⟨a1,a2⟩² / (⟨a1,a1⟩⟨a2,a2⟩)` with `⟨a,b⟩ = a.dot(b.perp())`.
///
/// Zero for equal points; saturates to a sentinel when an argument is
/// null for the geometry's polarity.
pub fn quadrance<P, L, K>(a1: &P, a2: &P) -> Fraction<K>
where
    K: Integral,
    P: CayleyKlein<Dual = L, Scalar = K>,
    L: CayleyKlein<Dual = P, Scalar = K>,
{
    let omg = a1.dot(&a2.perp());
    let den = a1.dot(&a1.perp()) * a2.dot(&a2.perp());
    Fraction::one() - Fraction::new(omg.clone() * omg, den)
}

/// Spread between two lines; the dual of [`quadrance`].
pub fn spread<L, P, K>(l1: &L, l2: &L) -> Fraction<K>
where
    K: Integral,
    L: CayleyKlein<Dual = P, Scalar = K>,
    P: CayleyKlein<Dual = L, Scalar = K>,
{
    quadrance(l1, l2)
}

/// The three quadrances of a triangle, one per vertex pair, opposite-side
/// ordered like [`crate::plane::tri_dual`].
pub fn tri_quadrance<P, L, K>(tri: &[P; 3]) -> [Fraction<K>; 3]
where
    K: Integral,
    P: CayleyKlein<Dual = L, Scalar = K>,
    L: CayleyKlein<Dual = P, Scalar = K>,
{
    let [a1, a2, a3] = tri;
    [quadrance(a2, a3), quadrance(a1, a3), quadrance(a1, a2)]
}

/// The three spreads of a trilateral; the dual of [`tri_quadrance`].
pub fn tri_spread<L, P, K>(trilateral: &[L; 3]) -> [Fraction<K>; 3]
where
    K: Integral,
    L: CayleyKlein<Dual = P, Scalar = K>,
    P: CayleyKlein<Dual = L, Scalar = K>,
{
    tri_quadrance(trilateral)
}

/// Triple quad formula residue:
/// `(q1+q2+q3)² - 2(q1²+q2²+q3²) - 4·q1·q2·q3`.
///
/// Zero exactly when the three quadrances come from a collinear triple,
/// in every Cayley–Klein geometry.
pub fn check_tqf<K: Integral>(q: &[Fraction<K>; 3]) -> Fraction<K> {
    let [q1, q2, q3] = q.clone();
    let two = Fraction::<K>::one() + Fraction::one();
    let four = two.clone() + two.clone();
    let sum = q1.clone() + q2.clone() + q3.clone();
    sum.clone() * sum
        - two * (q1.clone() * q1.clone() + q2.clone() * q2.clone() + q3.clone() * q3.clone())
        - four * q1 * q2 * q3
}

#[cfg(test)]
mod tests;
