//! Perspective plane: a degenerate polarity modelling the Euclidean
//! metric as a limiting Cayley–Klein geometry.
//!
//! Model
//! - Every point's polar is the fixed line at infinity.
//! - A line's polar is its plücker projection onto the two fixed circular
//!   points, i.e. the ideal point of the perpendicular direction.
//!
//! Conventions
//! - The polarity is involutive nowhere in the two-sided sense; what the
//!   derived operations use is line → pole, which is exactly the
//!   Euclidean altitude construction. Inputs *at* the fixed elements (a
//!   point on the line at infinity, a line through a circular point)
//!   produce degenerate joins and are unsupported.

use crate::cayley_klein::CayleyKlein;
use crate::homogeneous::define_plane_pair;
use crate::plane::HomogeneousPlane;
use crate::scalar::Ring;

define_plane_pair!(
    /// Point of the perspective plane.
    Point,
    /// Line of the perspective plane.
    Line
);

/// The fixed line at infinity `(0, -1, 1)`.
pub fn line_at_infinity<K: Ring>() -> Line<K> {
    Line::new([K::zero(), -K::one(), K::one()])
}

/// First fixed circular point `(0, 1, 1)`.
pub fn circular_point_re<K: Ring>() -> Point<K> {
    Point::new([K::zero(), K::one(), K::one()])
}

/// Second fixed circular point `(1, 0, 0)`.
pub fn circular_point_im<K: Ring>() -> Point<K> {
    Point::new([K::one(), K::zero(), K::zero()])
}

impl<K: Ring> CayleyKlein for Point<K> {
    #[inline]
    fn perp(&self) -> Line<K> {
        line_at_infinity()
    }
}

impl<K: Ring> CayleyKlein for Line<K> {
    fn perp(&self) -> Point<K> {
        let i_re = circular_point_re();
        let i_im = circular_point_im();
        let alpha = self.dot(&i_re);
        let beta = self.dot(&i_im);
        Point::plucker(&alpha, &i_re, &beta, &i_im)
    }
}
