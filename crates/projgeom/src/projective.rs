//! The plain projective point/line pair, with no metric structure.
//!
//! Everything the projective protocol proves (Pappus, Desargues, harmonic
//! conjugates) holds here; the Cayley–Klein geometries add a polarity on
//! top of the same representation.

use crate::homogeneous::define_plane_pair;

define_plane_pair!(
    /// Projective point in homogeneous coordinates over a ring scalar.
    Point,
    /// Projective line in homogeneous coordinates over a ring scalar.
    Line
);
