//! Hyperbolic plane: the polarity negates the third coordinate.
//!
//! The bilinear form is `x1*x2 + y1*y2 - z1*z2`; switching interpretation
//! between point and line flips the sign of `z`.

use crate::cayley_klein::CayleyKlein;
use crate::homogeneous::define_plane_pair;
use crate::scalar::Ring;

define_plane_pair!(
    /// Point of the hyperbolic plane.
    Point,
    /// Line of the hyperbolic plane.
    Line
);

impl<K: Ring> CayleyKlein for Point<K> {
    #[inline]
    fn perp(&self) -> Line<K> {
        let [x, y, z] = self.coord.clone();
        Line::new([x, y, -z])
    }
}

impl<K: Ring> CayleyKlein for Line<K> {
    #[inline]
    fn perp(&self) -> Point<K> {
        let [x, y, z] = self.coord.clone();
        Point::new([x, y, -z])
    }
}
