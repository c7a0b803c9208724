//! Random projective configurations (replayable samplers).
//!
//! Purpose
//! - Small deterministic samplers for points, lines, triangles, and
//!   collinear triples over `i64` coordinates, used by benches and
//!   randomized checks. Draws are parameterized by a replay token so any
//!   single configuration can be regenerated from `(seed, index)`.
//!
//! Conventions
//! - Coordinates are drawn uniformly from `[-bound, bound]`, rejecting the
//!   zero triple; triangle draws reject collinear vertex sets.
//! - Code cross-refs: `plane::{ProjectivePlane, HomogeneousPlane}`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::plane::{coincident, HomogeneousPlane, ProjectivePlane};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a nonzero coordinate triple from `[-bound, bound]³`.
pub fn draw_triple<R: Rng>(rng: &mut R, bound: i64) -> [i64; 3] {
    let bound = bound.max(1);
    loop {
        let c = [
            rng.gen_range(-bound..=bound),
            rng.gen_range(-bound..=bound),
            rng.gen_range(-bound..=bound),
        ];
        if c.iter().any(|v| *v != 0) {
            return c;
        }
    }
}

/// Draw a point or line (any type constructible from a triple).
pub fn draw_object<T, R>(rng: &mut R, bound: i64) -> T
where
    T: From<[i64; 3]>,
    R: Rng,
{
    T::from(draw_triple(rng, bound))
}

/// Draw a non-degenerate triangle: three vertices, resampled until they
/// are not collinear.
pub fn draw_triangle<P, R>(rng: &mut R, bound: i64) -> [P; 3]
where
    P: ProjectivePlane + From<[i64; 3]>,
    R: Rng,
{
    loop {
        let tri: [P; 3] = [
            draw_object(rng, bound),
            draw_object(rng, bound),
            draw_object(rng, bound),
        ];
        if !coincident(&tri[0], &tri[1], &tri[2]) {
            return tri;
        }
    }
}

/// Draw three distinct collinear objects: two random anchors and a
/// nonzero plücker combination of them.
pub fn draw_collinear<P, R>(rng: &mut R, bound: i64) -> [P; 3]
where
    P: HomogeneousPlane<Scalar = i64> + From<[i64; 3]>,
    R: Rng,
{
    let a: P = draw_object(rng, bound);
    let b: P = loop {
        let b: P = draw_object(rng, bound);
        if b != a {
            break b;
        }
    };
    let lambda = loop {
        let v = rng.gen_range(-4i64..=4);
        if v != 0 {
            break v;
        }
    };
    let mu = loop {
        let v = rng.gen_range(-4i64..=4);
        if v != 0 {
            break v;
        }
    };
    let c = P::plucker(&lambda, &a, &mu, &b);
    [a, b, c]
}
