//! Exact rational scalar with saturating division.
//!
//! Purpose
//! - Provide the division-capable scalar the metric layer (cross-ratio,
//!   quadrance, spread) runs on when coordinates are exact integers.
//!
//! Model
//! - `num / den`, reduced by `gcd` and sign-normalized so `den >= 0`.
//! - Division by zero saturates instead of trapping: `x / 0` is the
//!   `infinity` sentinel `(±1, 0)`, `0 / 0` is the `not-a-number` sentinel
//!   `(0, 0)`.
//! - Absorption laws: `inf * nonzero == inf`, `inf * 0 == nan`,
//!   `inf - inf == nan`, `nan ∘ anything == nan`.
//!
//! Conventions
//! - Comparisons against `nan` are unreliable, as with IEEE floats; callers
//!   filter degenerate configurations first.
//! - Code cross-refs: `measure::{x_ratio, quadrance}`, `scalar::Integral`.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_integer::Integer;
use num_traits::{One, Zero};

use crate::scalar::Integral;

/// Reduced rational `num / den` over an exact integral scalar.
///
/// Invariants:
/// - `gcd(num, den) == 1` unless both are zero (the `nan` sentinel).
/// - `den >= 0`; the sign lives in the numerator.
#[derive(Clone, Debug)]
pub struct Fraction<Z> {
    num: Z,
    den: Z,
}

impl<Z: Integral> Fraction<Z> {
    /// Reduce by `gcd` and normalize the sign into the numerator.
    ///
    /// `new(x, 0)` yields `infinity` (sign of `x`); `new(0, 0)` yields
    /// `not-a-number`.
    pub fn new(num: Z, den: Z) -> Self {
        let common = num.gcd(&den);
        let (mut num, mut den) = if common.is_zero() || common.is_one() {
            (num, den)
        } else {
            (num / common.clone(), den / common)
        };
        if den < Z::zero() {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }

    /// Positive infinity sentinel `1 / 0`.
    pub fn infinity() -> Self {
        Self {
            num: Z::one(),
            den: Z::zero(),
        }
    }

    /// Not-a-number sentinel `0 / 0`.
    pub fn nan() -> Self {
        Self {
            num: Z::zero(),
            den: Z::zero(),
        }
    }

    #[inline]
    pub fn numer(&self) -> &Z {
        &self.num
    }

    #[inline]
    pub fn denom(&self) -> &Z {
        &self.den
    }

    /// Multiplicative inverse; keeps the sign in the numerator.
    ///
    /// `reciprocal(0/1) == infinity`, `reciprocal(nan) == nan`.
    pub fn reciprocal(self) -> Self {
        let Self { num, den } = self;
        if num < Z::zero() {
            Self {
                num: -den,
                den: -num,
            }
        } else {
            Self { num: den, den: num }
        }
    }
}

impl<Z: Integral> From<Z> for Fraction<Z> {
    fn from(value: Z) -> Self {
        Self {
            num: value,
            den: Z::one(),
        }
    }
}

impl<Z: Integral> PartialEq for Fraction<Z> {
    fn eq(&self, other: &Self) -> bool {
        // Same denominator covers the reduced finite forms and keeps the
        // sentinels apart (`inf != -inf`, `nan == nan` by numerator).
        if self.den == other.den {
            return self.num == other.num;
        }
        self.num.clone() * other.den.clone() == other.num.clone() * self.den.clone()
    }
}

impl<Z: Integral> PartialOrd for Fraction<Z> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.den == other.den {
            return self.num.partial_cmp(&other.num);
        }
        // Denominators are nonnegative, so cross-multiplication preserves
        // the order; a zero denominator ranks ±infinity against everything
        // finite by the sign of its numerator.
        (self.num.clone() * other.den.clone()).partial_cmp(&(other.num.clone() * self.den.clone()))
    }
}

impl<Z: Integral> PartialEq<Z> for Fraction<Z> {
    fn eq(&self, other: &Z) -> bool {
        self.num == other.clone() * self.den.clone()
    }
}

impl<Z: Integral> PartialOrd<Z> for Fraction<Z> {
    fn partial_cmp(&self, other: &Z) -> Option<Ordering> {
        self.num
            .partial_cmp(&(other.clone() * self.den.clone()))
    }
}

impl<Z: Integral> Add for Fraction<Z> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // Equal denominators add numerators directly; this is also what
        // makes `inf + inf == inf` and `inf - inf == nan` come out right.
        if self.den == rhs.den {
            return Self::new(self.num + rhs.num, self.den);
        }
        let common = self.den.gcd(&rhs.den);
        debug_assert!(!common.is_zero());
        let l = self.den.clone() / common.clone();
        let r = rhs.den / common;
        Self::new(self.num * r.clone() + rhs.num * l, self.den * r)
    }
}

impl<Z: Integral> Neg for Fraction<Z> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl<Z: Integral> Sub for Fraction<Z> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<Z: Integral> Mul for Fraction<Z> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Cross-reduce before multiplying to keep magnitudes small.
        // `gcd` is zero only when both of its arguments are, in which case
        // there is nothing to divide out and a sentinel propagates.
        let g1 = self.num.gcd(&rhs.den);
        let (n1, d2) = if g1.is_zero() {
            (self.num, rhs.den)
        } else {
            (self.num / g1.clone(), rhs.den / g1)
        };
        let g2 = rhs.num.gcd(&self.den);
        let (n2, d1) = if g2.is_zero() {
            (rhs.num, self.den)
        } else {
            (rhs.num / g2.clone(), self.den / g2)
        };
        Self::new(n1 * n2, d1 * d2)
    }
}

impl<Z: Integral> Div for Fraction<Z> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.reciprocal()
    }
}

impl<Z: Integral> Zero for Fraction<Z> {
    fn zero() -> Self {
        Self {
            num: Z::zero(),
            den: Z::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero() && !self.den.is_zero()
    }
}

impl<Z: Integral> One for Fraction<Z> {
    fn one() -> Self {
        Self {
            num: Z::one(),
            den: Z::one(),
        }
    }
}
