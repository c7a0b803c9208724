//! Elliptic plane: the polarity reinterprets a triple as its dual.
//!
//! The bilinear form is the plain dot product, so the polar of `(x, y, z)`
//! is the dual object with the same coordinates.

use crate::cayley_klein::CayleyKlein;
use crate::homogeneous::define_plane_pair;
use crate::scalar::Ring;

define_plane_pair!(
    /// Point of the elliptic plane.
    Point,
    /// Line of the elliptic plane.
    Line
);

impl<K: Ring> CayleyKlein for Point<K> {
    #[inline]
    fn perp(&self) -> Line<K> {
        Line::new(self.coord.clone())
    }
}

impl<K: Ring> CayleyKlein for Line<K> {
    #[inline]
    fn perp(&self) -> Point<K> {
        Point::new(self.coord.clone())
    }
}
