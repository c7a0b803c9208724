//! Scalar contracts for homogeneous coordinates.
//!
//! Purpose
//! - Pin down the arithmetic a coordinate type must provide, as trait
//!   aliases over the `num-traits`/`num-integer` building blocks.
//! - Every derived construction in this crate is an exact algebraic identity
//!   over a [`Ring`]; approximate fields (`f64`) satisfy the same bounds and
//!   get the same formulas, with tolerance policy left to the caller.
//!
//! Exercised instances
//! - Discrete exact rings: `i32`, `i64`, `num_bigint::BigInt`.
//! - Approximate fields: `f64`.
//! - [`crate::fraction::Fraction`] over any [`Integral`] base.

use std::ops::{Mul, Neg, Sub};

use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Commutative ring with identity.
///
/// `Zero` brings addition, `One` brings multiplication; the literals the
/// constructions need (0, 1, -1) are `zero()`, `one()`, `-one()`.
/// `a - b == a + (-b)` is assumed for all `a`, `b`.
pub trait Ring:
    Clone + PartialEq + Zero + One + Neg<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<K> Ring for K where
    K: Clone + PartialEq + Zero + One + Neg<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

/// [`Ring`] with a total order consistent with `+` and with `*` by
/// nonnegative elements.
///
/// `PartialOrd` rather than `Ord` so that `f64` qualifies; exact types are
/// totally ordered in practice.
pub trait OrderedRing: Ring + PartialOrd {}

impl<K> OrderedRing for K where K: Ring + PartialOrd {}

/// [`OrderedRing`] with exact Euclidean division.
///
/// `(a / b) * b + a % b == a` for `b != 0`, and `gcd` is available; this is
/// what fraction normalization runs on. Division by zero is the scalar
/// type's own business (integers trap, see [`crate::fraction`] for the
/// saturating alternative).
pub trait Integral: OrderedRing + Integer + Signed {}

impl<Z> Integral for Z where Z: OrderedRing + Integer + Signed {}
