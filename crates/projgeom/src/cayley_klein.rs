//! Cayley–Klein extension: one polarity primitive, everything metric
//! derived from it.
//!
//! Purpose
//! - [`CayleyKlein`] adds a single primitive to the projective protocol:
//!   `perp`, an involutive point↔line polarity. Perpendicularity,
//!   altitudes, orthocenters, and reflections all follow without new
//!   axioms.
//!
//! Conventions
//! - `perp(perp(x)) == x` up to scale for every non-degenerate `x`; the
//!   perspective (Euclidean-proxy) geometry is the deliberate exception at
//!   its fixed elements (see the `perspective` module docs).
//! - Triangle operations inherit the non-degeneracy precondition of
//!   [`crate::plane::tri_dual`].
//!
//! Code cross-refs: `elliptic`, `hyperbolic`, `scaled`, `perspective`,
//! `measure`.

use crate::plane::{coincident, involution, tri_dual, HomogeneousPlane, ProjectivePlane};

/// Plane with a polarity. Implemented per concrete geometry; each
/// implementation supplies only the `perp` formula.
pub trait CayleyKlein: HomogeneousPlane {
    /// Polar of this object: the dual object assigned by the geometry's
    /// polarity.
    fn perp(&self) -> Self::Dual;
}

/// True iff two lines are perpendicular: the pole of one lies on the
/// other. Dually for two points.
pub fn is_perpendicular<L: CayleyKlein>(m1: &L, m2: &L) -> bool {
    m1.perp().incident(m2)
}

/// Line through `p` perpendicular to `m`: the join of `p` with the pole
/// of `m`.
pub fn altitude<P, L>(p: &P, m: &L) -> L
where
    P: CayleyKlein<Dual = L>,
    L: CayleyKlein<Dual = P, Scalar = P::Scalar>,
{
    m.perp().circ(p)
}

/// Meet of two altitudes of a triangle; the third altitude passes through
/// it. Precondition: non-degenerate triangle.
pub fn orthocenter<P, L>(tri: &[P; 3]) -> P
where
    P: CayleyKlein<Dual = L>,
    L: CayleyKlein<Dual = P, Scalar = P::Scalar>,
{
    let [a1, a2, a3] = tri;
    debug_assert!(!coincident(a1, a2, a3));
    let t1 = altitude(a1, &a2.circ(a3));
    let t2 = altitude(a2, &a3.circ(a1));
    t1.circ(&t2)
}

/// The three altitudes, one per vertex against its opposite side.
pub fn tri_altitude<P, L>(tri: &[P; 3]) -> [L; 3]
where
    P: CayleyKlein<Dual = L>,
    L: CayleyKlein<Dual = P, Scalar = P::Scalar>,
{
    let [l1, l2, l3] = tri_dual(tri);
    let [a1, a2, a3] = tri;
    [altitude(a1, &l1), altitude(a2, &l2), altitude(a3, &l3)]
}

/// Reflection of `p` across `mirror`: the involution through the mirror's
/// pole. Involutive for any involutive polarity.
pub fn reflect<P, L>(mirror: &L, p: &P) -> P
where
    P: CayleyKlein<Dual = L>,
    L: CayleyKlein<Dual = P, Scalar = P::Scalar>,
{
    involution(&mirror.perp(), mirror, p)
}
