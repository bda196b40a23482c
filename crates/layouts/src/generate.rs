//! Deterministic generation of initial particle states.
//!
//! Both layouts draw from a [`Generator`] seeded identically, and the generator always hands out values field by field: all `n` x-positions, then all
//! `n` y-positions, and so on through the masses. Because the draw order does not depend on the layout being filled, the `i`-th particle of an
//! [`AosParticles`](crate::AosParticles) and of a [`SoaParticles`](crate::SoaParticles) built from the same seed are bit-for-bit identical.

use rand::{distr::Uniform, prelude::*};
use rand_distr::StandardNormal;

use crate::Field;

/// The seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// The factor applied to standard-normal samples to get the initial velocities.
pub const VELOCITY_SCALE: f64 = 0.1;

/// The half-open range from which masses are drawn. The lower bound is strictly positive.
pub const MASS_RANGE: std::ops::Range<f64> = 0.5..2.0;

/// A seeded source of initial particle states.
///
/// - Positions are drawn from the standard normal distribution.
/// - Velocities are drawn from the standard normal distribution and scaled by [`VELOCITY_SCALE`].
/// - Masses are drawn uniformly from [`MASS_RANGE`].
#[derive(Debug, Clone)]
pub struct Generator {
    /// The number of particles to generate.
    n: usize,
    /// The seeded random number generator.
    rng: StdRng,
    /// The distribution of masses.
    mass: Uniform<f64>,
}

impl Generator {
    /// Creates a new `Generator` for `n` particles.
    ///
    /// # Errors
    ///
    /// - If `n` is zero.
    /// - If the mass distribution could not be constructed.
    pub fn new(n: usize, seed: u64) -> Result<Self, String> {
        if n == 0 {
            return Err("Cannot generate an empty population of particles".to_string());
        }
        let mass = Uniform::new(MASS_RANGE.start, MASS_RANGE.end).map_err(|e| e.to_string())?;
        let rng = StdRng::seed_from_u64(seed);
        Ok(Self { n, rng, mass })
    }

    /// Returns the number of particles this `Generator` will produce.
    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.n
    }

    /// Draws the next value of the given field.
    pub fn sample(&mut self, field: Field) -> f64 {
        match field {
            Field::X | Field::Y | Field::Z => self.rng.sample(StandardNormal),
            Field::Vx | Field::Vy | Field::Vz => {
                let v: f64 = self.rng.sample(StandardNormal);
                v * VELOCITY_SCALE
            }
            Field::M => self.mass.sample(&mut self.rng),
        }
    }

    /// Draws every value for every particle, in field-major order, handing each one to `sink` as `(field, index, value)`.
    ///
    /// This consumes the `Generator` so that a population cannot be drawn twice from one stream.
    pub fn draw<F: FnMut(Field, usize, f64)>(mut self, mut sink: F) {
        ftlog::debug!("Drawing initial states for {} particles", self.n);
        for field in Field::ALL {
            for i in 0..self.n {
                let value = self.sample(field);
                sink(field, i, value);
            }
        }
    }
}
