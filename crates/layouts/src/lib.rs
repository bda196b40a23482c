//! Array-of-Structures vs Structure-of-Arrays for a large population of point particles.
//!
//! Both layouts hold the same seven `f64` fields per particle (position, velocity, and mass) and advance them by one semi-implicit Euler step under a
//! linear restoring force `F = -k r`. The update is identical for both layouts and independent across particles, so the only thing that differs between
//! them is how the fields are laid out in memory.
//!
//! ## Modules
//!
//! - [`generate`]: Deterministic, seeded initial states shared by both layouts.
//! - [`aos`]: [`AosParticles`], one `Vec` of seven-field records.
//! - [`soa`]: [`SoaParticles`], seven `Vec`s, one per field.
//! - [`harness`]: Warm-up, timing, and reporting of one step of each layout.
//!
//! ## Example
//!
//! ```rust
//! use layouts::{AosParticles, Population, SoaParticles};
//!
//! let (n, seed) = (1_000, 42);
//! let mut aos = AosParticles::generate(n, seed).unwrap();
//! let mut soa = SoaParticles::generate(n, seed).unwrap();
//!
//! aos.par_step(1e-3, 0.7);
//! soa.par_step(1e-3, 0.7);
//!
//! assert!((0..n).all(|i| aos.particle(i) == soa.particle(i)));
//! ```

pub mod aos;
pub mod generate;
pub mod harness;
mod params;
mod particle;
pub mod soa;

pub use aos::AosParticles;
pub use harness::{Harness, Report, Timings};
pub use params::{DEFAULT_DT, DEFAULT_K, DEFAULT_N, StepParams};
pub use particle::{Field, Particle};
pub use soa::SoaParticles;

/// The update contract shared by both particle layouts.
///
/// Implementors own all of their storage. `step` and `par_step` mutate it in place and never allocate.
///
/// # Preconditions
///
/// Every mass must be strictly positive. The kernels do not check this so that the hot loop stays branch-free; a zero or negative mass propagates
/// `NaN` or `Inf` into the velocity and position of that particle.
pub trait Population: Sized + Send {
    /// A short, human-readable name for the layout.
    const NAME: &'static str;

    /// Generates `n` particles from the given `seed`.
    ///
    /// # Errors
    ///
    /// - If `n` is zero.
    fn generate(n: usize, seed: u64) -> Result<Self, String>;

    /// Builds the layout from explicit particle records.
    ///
    /// # Errors
    ///
    /// - If `particles` is empty.
    fn from_particles(particles: &[Particle]) -> Result<Self, String>;

    /// Returns the number of particles.
    fn len(&self) -> usize;

    /// Returns whether there are no particles.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the `i`-th particle, or `None` if `i` is out of bounds.
    fn particle(&self, i: usize) -> Option<Particle>;

    /// Advances every particle by one time step of length `dt` under the spring constant `k`, on the current thread.
    fn step(&mut self, dt: f64, k: f64);

    /// Parallel version of [`Population::step`].
    fn par_step(&mut self, dt: f64, k: f64);
}
