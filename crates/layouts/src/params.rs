//! The parameters of one benchmark run.

use crate::generate::DEFAULT_SEED;

/// The number of particles used when none is given.
pub const DEFAULT_N: usize = 5_000_000;

/// The time step used when none is given.
pub const DEFAULT_DT: f64 = 1e-3;

/// The spring constant used when none is given.
pub const DEFAULT_K: f64 = 0.7;

/// The particle count, time step, spring constant, and seed of a benchmark run.
///
/// The fields can only be set through validating constructors so that a `StepParams` always has `n > 0`, a finite `dt > 0`, and a finite `k >= 0`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    /// The number of particles.
    n: usize,
    /// The time step.
    dt: f64,
    /// The spring constant.
    k: f64,
    /// The seed for the initial states.
    seed: u64,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            dt: DEFAULT_DT,
            k: DEFAULT_K,
            seed: DEFAULT_SEED,
        }
    }
}

impl std::fmt::Display for StepParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N={}, dt={}, k={}, seed={}", self.n, self.dt, self.k, self.seed)
    }
}

impl StepParams {
    /// Creates new `StepParams` with the default seed.
    ///
    /// # Errors
    ///
    /// - If `n` is zero.
    /// - If `dt` is not finite and strictly positive.
    /// - If `k` is not finite and non-negative.
    pub fn new(n: usize, dt: f64, k: f64) -> Result<Self, String> {
        Self::default().with_n(n)?.with_dt(dt)?.with_k(k)
    }

    /// Sets the number of particles.
    ///
    /// # Errors
    ///
    /// - If `n` is zero.
    pub fn with_n(mut self, n: usize) -> Result<Self, String> {
        if n == 0 {
            return Err("The number of particles must be positive".to_string());
        }
        self.n = n;
        Ok(self)
    }

    /// Sets the time step.
    ///
    /// # Errors
    ///
    /// - If `dt` is not finite and strictly positive.
    pub fn with_dt(mut self, dt: f64) -> Result<Self, String> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(format!("The time step must be finite and positive, got {dt}"));
        }
        self.dt = dt;
        Ok(self)
    }

    /// Sets the spring constant.
    ///
    /// # Errors
    ///
    /// - If `k` is not finite and non-negative.
    pub fn with_k(mut self, k: f64) -> Result<Self, String> {
        if !(k.is_finite() && k >= 0.0) {
            return Err(format!("The spring constant must be finite and non-negative, got {k}"));
        }
        self.k = k;
        Ok(self)
    }

    /// Sets the seed for the initial states.
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the number of particles.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Returns the time step.
    #[must_use]
    pub const fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the spring constant.
    #[must_use]
    pub const fn k(&self) -> f64 {
        self.k
    }

    /// Returns the seed for the initial states.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}
