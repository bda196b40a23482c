//! The Array-of-Structures layout.

use rayon::prelude::*;

use crate::{Particle, Population, generate::Generator};

/// Particles stored as one contiguous sequence of seven-field records.
///
/// Reading any single field of every particle strides over the other six fields of each record.
#[derive(Debug, Clone, PartialEq)]
pub struct AosParticles {
    /// The particle records.
    particles: Vec<Particle>,
}

impl AosParticles {
    /// Returns the particle records.
    #[must_use]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}

impl Population for AosParticles {
    const NAME: &'static str = "AoS";

    fn generate(n: usize, seed: u64) -> Result<Self, String> {
        let generator = Generator::new(n, seed)?;

        let mut particles = vec![Particle::default(); n];
        generator.draw(|field, i, value| particles[i].set(field, value));

        Ok(Self { particles })
    }

    fn from_particles(particles: &[Particle]) -> Result<Self, String> {
        if particles.is_empty() {
            return Err("Cannot build an empty population of particles".to_string());
        }
        Ok(Self {
            particles: particles.to_vec(),
        })
    }

    fn len(&self) -> usize {
        self.particles.len()
    }

    fn particle(&self, i: usize) -> Option<Particle> {
        self.particles.get(i).copied()
    }

    fn step(&mut self, dt: f64, k: f64) {
        self.particles.iter_mut().for_each(|p| p.advance(dt, k));
    }

    fn par_step(&mut self, dt: f64, k: f64) {
        self.particles.par_iter_mut().for_each(|p| p.advance(dt, k));
    }
}
