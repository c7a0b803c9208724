//! A Cayley–Klein plane with an anisotropic, asymmetric polarity.
//!
//! The point and line polars use different coordinate scalings
//! (`(-2x, y, -2z)` and `(-x, 2y, -z)`); composing them gives
//! `(2x, 2y, 2z)`, the identity up to scale. Demonstrates that `perp`
//! need not be coordinate-symmetric to be a well-defined involution on
//! equivalence classes.

use crate::cayley_klein::CayleyKlein;
use crate::homogeneous::define_plane_pair;
use crate::scalar::Ring;

define_plane_pair!(
    /// Point of the scaled Cayley–Klein plane.
    Point,
    /// Line of the scaled Cayley–Klein plane.
    Line
);

impl<K: Ring> CayleyKlein for Point<K> {
    #[inline]
    fn perp(&self) -> Line<K> {
        let two = K::one() + K::one();
        let [x, y, z] = self.coord.clone();
        Line::new([-(two.clone() * x), y, -(two * z)])
    }
}

impl<K: Ring> CayleyKlein for Line<K> {
    #[inline]
    fn perp(&self) -> Point<K> {
        let two = K::one() + K::one();
        let [x, y, z] = self.coord.clone();
        Point::new([-x, two * y, -z])
    }
}
