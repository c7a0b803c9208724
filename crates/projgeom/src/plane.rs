//! Projective plane traits and the duality-aware protocol.
//!
//! Purpose
//! - [`ProjectivePlane`]: the primitive contract (incidence + join/meet)
//!   over a structurally enforced point/line dual pair.
//! - [`HomogeneousPlane`]: adds the scalar pairing, the auxiliary dual, and
//!   the plücker combination.
//! - Free functions built purely from those primitives: coincidence,
//!   triangle duals, perspectivity, the Desargues and Pappus checks,
//!   harmonic conjugates, involutions.
//!
//! Conventions
//! - Every function here is a pure total function; degenerate inputs
//!   (coincident points fed to `circ`, collinear triangles) produce
//!   zero-triple results and are `debug_assert!`ed, never checked in
//!   release.
//! - Each statement has a dual statement: all bounds come in mirrored
//!   `(P, L)` pairs so the same function serves points and lines.
//!
//! Code cross-refs: `homogeneous::define_plane_pair`, `cayley_klein`.

use crate::scalar::Ring;

/// Primitive projective plane contract for one side of a dual pair.
///
/// `Dual` is the opposite side (the line type for a point type and vice
/// versa); the `Dual = Self` round-trip constraint enforces the pairing
/// structurally. Equality is equality of geometric objects, i.e. up to a
/// nonzero scalar multiple for coordinate-backed implementations.
pub trait ProjectivePlane: Clone + PartialEq + Sized {
    type Dual: ProjectivePlane<Dual = Self>;

    /// Incidence pairing; symmetric across the duality:
    /// `p.incident(l) == l.incident(p)`.
    fn incident(&self, rhs: &Self::Dual) -> bool;

    /// Join of two points, or meet of two lines. Symmetric up to scale:
    /// `a.circ(b) == b.circ(a)`. Degenerate (zero triple) when `a == b`.
    fn circ(&self, rhs: &Self) -> Self::Dual;
}

/// Coordinate-backed plane: scalar measurement and linear combinations.
pub trait HomogeneousPlane: ProjectivePlane {
    type Scalar: Ring;

    /// Some dual object not incident with `self` (coordinate
    /// reinterpretation). Relies on `dot(v, v) != 0` for nonzero `v`,
    /// which holds over ordered rings and floats.
    fn aux(&self) -> Self::Dual;

    /// Scalar pairing with a dual object; `p.dot(l) == l.dot(p)`.
    fn dot(&self, rhs: &Self::Dual) -> Self::Scalar;

    /// `lambda * p + mu * q` on coordinates; the result is collinear with
    /// (or concurrent with, for lines) `p` and `q`.
    fn plucker(lambda: &Self::Scalar, p: &Self, mu: &Self::Scalar, q: &Self) -> Self;
}

/// Primitive axiom check: equality reflexivity and symmetry, incidence
/// symmetry, join/meet symmetry, and incidence of a join with both of its
/// arguments. Holds for every pair of distinct objects.
pub fn check_axiom<P: ProjectivePlane>(p: &P, q: &P, l: &P::Dual) -> bool {
    let m = p.circ(q);
    p == p
        && (p == q) == (q == p)
        && p.incident(l) == l.incident(p)
        && m == q.circ(p)
        && m.incident(p)
        && m.incident(q)
}

/// Measurement axiom check: `dot` symmetry, `aux` non-incidence, and
/// closure of incidence under plücker combinations.
pub fn check_axiom2<P, L>(p: &P, q: &P, l: &L, a: &P::Scalar, b: &P::Scalar) -> bool
where
    P: HomogeneousPlane<Dual = L>,
    L: HomogeneousPlane<Dual = P, Scalar = P::Scalar>,
{
    p.dot(l) == l.dot(p)
        && !p.aux().incident(p)
        && p.circ(q).incident(&P::plucker(a, p, b, q))
}

/// True iff the three objects share a common dual: three points on one
/// line, or dually three concurrent lines.
pub fn coincident<P: ProjectivePlane>(p: &P, q: &P, r: &P) -> bool {
    p.circ(q).incident(r)
}

/// Side-lines of a triangle, one opposite each vertex (dually: vertices of
/// a trilateral). Precondition: the triangle is non-degenerate.
pub fn tri_dual<P: ProjectivePlane>(tri: &[P; 3]) -> [P::Dual; 3] {
    let [a1, a2, a3] = tri;
    debug_assert!(!coincident(a1, a2, a3));
    [a2.circ(a3), a1.circ(a3), a1.circ(a2)]
}

/// True iff the two triangles are perspective from a point: the three
/// joins of corresponding vertices are concurrent.
pub fn persp<P: ProjectivePlane>(tri1: &[P; 3], tri2: &[P; 3]) -> bool {
    let [a, b, c] = tri1;
    let [d, e, f] = tri2;
    let o = a.circ(d).circ(&b.circ(e));
    c.circ(f).incident(&o)
}

/// Desargues self-duality: perspectivity from a point holds exactly when
/// perspectivity from a line holds for the dual triangles. True for every
/// non-degenerate pair.
pub fn check_desargue<P: ProjectivePlane>(tri1: &[P; 3], tri2: &[P; 3]) -> bool {
    let trid1 = tri_dual(tri1);
    let trid2 = tri_dual(tri2);
    persp(tri1, tri2) == persp(&trid1, &trid2)
}

/// Pappus: for two collinear triples, the three cross-joins meet in three
/// collinear points. True for any two genuinely collinear triples.
pub fn check_pappus<P: ProjectivePlane>(co1: &[P; 3], co2: &[P; 3]) -> bool {
    let [a, b, c] = co1;
    let [d, e, f] = co2;
    let g = a.circ(e).circ(&b.circ(d));
    let h = a.circ(f).circ(&c.circ(d));
    let i = b.circ(f).circ(&c.circ(e));
    coincident(&g, &h, &i)
}

/// Harmonic conjugate of `c` with respect to `a`, `b`: the point `d` on
/// the same line with cross-ratio `(a, b; c, d) == -1`.
///
/// One auxiliary line through `c` recovers the coefficients of `c` in the
/// `(a, b)` basis; flipping them yields the conjugate. Precondition:
/// `coincident(a, b, c)`.
pub fn harm_conj<P, L>(a: &P, b: &P, c: &P) -> P
where
    P: HomogeneousPlane<Dual = L>,
    L: HomogeneousPlane<Dual = P, Scalar = P::Scalar>,
{
    debug_assert!(coincident(a, b, c));
    let ab = a.circ(b);
    let lc = ab.aux().circ(c);
    P::plucker(&lc.dot(b), a, &lc.dot(a), b)
}

/// Involutive map fixing `origin` and the meet of `mirror` with each line
/// through `origin`: sends `p` to the harmonic conjugate of `p` with
/// respect to `origin` and the mirror trace. Composed with a polarity this
/// becomes geometric reflection (`cayley_klein::reflect`).
pub fn involution<P, L>(origin: &P, mirror: &L, p: &P) -> P
where
    P: HomogeneousPlane<Dual = L>,
    L: HomogeneousPlane<Dual = P, Scalar = P::Scalar>,
{
    let po = p.circ(origin);
    let b = po.circ(mirror);
    harm_conj(origin, &b, p)
}
