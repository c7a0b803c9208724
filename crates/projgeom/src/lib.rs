//! Projective and Cayley–Klein plane geometry over generic ring scalars.
//!
//! Points and lines are homogeneous coordinate triples over a caller-chosen
//! scalar (machine integers, big integers, floats, exact fractions). The
//! duality between the two is enforced structurally: every operation is
//! generic over a mirrored point/line pair, so each projective statement
//! carries its dual statement with it.
//!
//! Layering, leaves first:
//! - [`scalar`]: the arithmetic contracts coordinate types must satisfy.
//! - [`homogeneous`]: the triple kernels (dot, cross, plücker) and the
//!   point/line pair generator.
//! - [`plane`]: incidence, join/meet, triangle duals, Desargues/Pappus
//!   checks, harmonic conjugates, involutions.
//! - [`cayley_klein`]: one polarity primitive per geometry; altitudes,
//!   orthocenters, and reflections derived from it.
//! - [`elliptic`], [`hyperbolic`], [`scaled`], [`perspective`]: concrete
//!   planes, each supplying only its `perp` formula.
//! - [`fraction`], [`measure`]: exact rational measures (cross-ratio,
//!   quadrance, spread) on top of the polarity.
//!
//! The whole crate is purely functional over immutable values: no shared
//! state, no I/O, exact comparisons. Tolerance policy for float
//! instantiations belongs to the caller.

pub mod cayley_klein;
pub mod elliptic;
pub mod fraction;
pub mod homogeneous;
pub mod hyperbolic;
pub mod measure;
pub mod perspective;
pub mod plane;
pub mod projective;
pub mod sample;
pub mod scalar;
pub mod scaled;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cayley_klein::{
        altitude, is_perpendicular, orthocenter, reflect, tri_altitude, CayleyKlein,
    };
    pub use crate::fraction::Fraction;
    pub use crate::measure::{
        check_tqf, cross_ratio, quadrance, spread, tri_quadrance, tri_spread, x_ratio,
    };
    pub use crate::plane::{
        check_axiom, check_axiom2, check_desargue, check_pappus, coincident, harm_conj,
        involution, persp, tri_dual, HomogeneousPlane, ProjectivePlane,
    };
    pub use crate::scalar::{Integral, OrderedRing, Ring};
    pub use crate::{elliptic, hyperbolic, perspective, projective, scaled};
}
