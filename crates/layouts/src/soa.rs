//! The Structure-of-Arrays layout.

use rayon::prelude::*;

use crate::{Field, Particle, Population, generate::Generator, particle::advance_axis};

/// Particles stored as seven separate sequences, one per field.
///
/// The `i`-th element of every sequence together make up the `i`-th particle. Reading any single field of every particle is fully contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct SoaParticles {
    /// Positions along x.
    x: Vec<f64>,
    /// Positions along y.
    y: Vec<f64>,
    /// Positions along z.
    z: Vec<f64>,
    /// Velocities along x.
    vx: Vec<f64>,
    /// Velocities along y.
    vy: Vec<f64>,
    /// Velocities along z.
    vz: Vec<f64>,
    /// Masses.
    m: Vec<f64>,
}

impl SoaParticles {
    /// Creates an empty `SoaParticles` with room for `n` particles in every field.
    fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            vx: Vec::with_capacity(n),
            vy: Vec::with_capacity(n),
            vz: Vec::with_capacity(n),
            m: Vec::with_capacity(n),
        }
    }

    /// Returns the sequence holding the given field.
    #[must_use]
    pub fn field(&self, field: Field) -> &[f64] {
        match field {
            Field::X => &self.x,
            Field::Y => &self.y,
            Field::Z => &self.z,
            Field::Vx => &self.vx,
            Field::Vy => &self.vy,
            Field::Vz => &self.vz,
            Field::M => &self.m,
        }
    }

    /// Returns the sequence holding the given field, as mutable.
    fn field_mut(&mut self, field: Field) -> &mut Vec<f64> {
        match field {
            Field::X => &mut self.x,
            Field::Y => &mut self.y,
            Field::Z => &mut self.z,
            Field::Vx => &mut self.vx,
            Field::Vy => &mut self.vy,
            Field::Vz => &mut self.vz,
            Field::M => &mut self.m,
        }
    }
}

/// Advances one axis of every particle, on the current thread.
fn step_axis(pos: &mut [f64], vel: &mut [f64], m: &[f64], dt: f64, k: f64) {
    for ((p, v), &m) in pos.iter_mut().zip(vel.iter_mut()).zip(m) {
        advance_axis(p, v, 1.0 / m, dt, k);
    }
}

impl Population for SoaParticles {
    const NAME: &'static str = "SoA";

    fn generate(n: usize, seed: u64) -> Result<Self, String> {
        let generator = Generator::new(n, seed)?;

        let mut soa = Self::with_capacity(n);
        generator.draw(|field, _, value| soa.field_mut(field).push(value));

        Ok(soa)
    }

    fn from_particles(particles: &[Particle]) -> Result<Self, String> {
        if particles.is_empty() {
            return Err("Cannot build an empty population of particles".to_string());
        }
        let mut soa = Self::with_capacity(particles.len());
        for field in Field::ALL {
            soa.field_mut(field).extend(particles.iter().map(|p| p.get(field)));
        }
        Ok(soa)
    }

    fn len(&self) -> usize {
        self.m.len()
    }

    fn particle(&self, i: usize) -> Option<Particle> {
        (i < self.len()).then(|| Particle::new([self.x[i], self.y[i], self.z[i]], [self.vx[i], self.vy[i], self.vz[i]], self.m[i]))
    }

    /// Sweeps each axis in turn so that every pass reads and writes contiguous memory.
    ///
    /// The axes are independent, so this gives the same result as updating all three axes of one particle before moving to the next.
    fn step(&mut self, dt: f64, k: f64) {
        step_axis(&mut self.x, &mut self.vx, &self.m, dt, k);
        step_axis(&mut self.y, &mut self.vy, &self.m, dt, k);
        step_axis(&mut self.z, &mut self.vz, &self.m, dt, k);
    }

    fn par_step(&mut self, dt: f64, k: f64) {
        (
            self.x.par_iter_mut(),
            self.y.par_iter_mut(),
            self.z.par_iter_mut(),
            self.vx.par_iter_mut(),
            self.vy.par_iter_mut(),
            self.vz.par_iter_mut(),
            self.m.par_iter(),
        )
            .into_par_iter()
            .for_each(|(x, y, z, vx, vy, vz, &m)| {
                let inv_m = 1.0 / m;
                advance_axis(x, vx, inv_m, dt, k);
                advance_axis(y, vy, inv_m, dt, k);
                advance_axis(z, vz, inv_m, dt, k);
            });
    }
}
