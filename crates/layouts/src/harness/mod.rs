//! Times one step of each layout on the same initial particles.
//!
//! A run proceeds as follows:
//!
//! 1. Generate an [`AosParticles`] and a [`SoaParticles`] from the same seed.
//! 2. Step each layout once, untimed, to absorb first-touch paging and thread-pool start-up.
//! 3. Time one parallel step of the `AoS` layout, then one of the `SoA` layout.
//! 4. Report both durations and their ratio.
//!
//! By default step 3 happens once, which makes this a single-shot measurement with no statistics. [`Harness::with_trials`] repeats step 3 and reports
//! the min, median, and mean of each layout instead.

mod report;

use std::time::{Duration, Instant};

pub use report::{Report, Timings};

use crate::{AosParticles, Population, SoaParticles, StepParams};

/// Times the parallel step of a population once.
fn time_step<P: Population>(population: &mut P, dt: f64, k: f64) -> Duration {
    let start = Instant::now();
    population.par_step(dt, k);
    start.elapsed()
}

/// The benchmark harness, owning both populations.
///
/// The steps of the two layouts never overlap: each call to a kernel returns only after every particle has been updated.
#[derive(Debug, Clone)]
pub struct Harness {
    /// The parameters of the run.
    params: StepParams,
    /// The number of timed steps per layout.
    trials: usize,
    /// The number of steps, timed or not, each layout has taken so far.
    steps: usize,
    /// The Array-of-Structures population.
    aos: AosParticles,
    /// The Structure-of-Arrays population.
    soa: SoaParticles,
}

impl Harness {
    /// Generates both populations from the given parameters.
    ///
    /// # Errors
    ///
    /// - If either population could not be generated.
    pub fn new(params: StepParams) -> Result<Self, String> {
        ftlog::info!("Generating populations with {params}");
        let aos = AosParticles::generate(params.n(), params.seed())?;
        let soa = SoaParticles::generate(params.n(), params.seed())?;
        Ok(Self {
            params,
            trials: 1,
            steps: 0,
            aos,
            soa,
        })
    }

    /// Sets the number of timed steps per layout.
    ///
    /// # Errors
    ///
    /// - If `trials` is zero.
    pub fn with_trials(mut self, trials: usize) -> Result<Self, String> {
        if trials == 0 {
            return Err("The number of trials must be positive".to_string());
        }
        self.trials = trials;
        Ok(self)
    }

    /// Returns the parameters of the run.
    #[must_use]
    pub const fn params(&self) -> &StepParams {
        &self.params
    }

    /// Returns the number of timed steps per layout.
    #[must_use]
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the number of steps each layout has taken so far.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the Array-of-Structures population.
    #[must_use]
    pub const fn aos(&self) -> &AosParticles {
        &self.aos
    }

    /// Returns the Structure-of-Arrays population.
    #[must_use]
    pub const fn soa(&self) -> &SoaParticles {
        &self.soa
    }

    /// Steps each layout once without timing it.
    pub fn warm_up(&mut self) {
        let (dt, k) = (self.params.dt(), self.params.k());
        ftlog::info!("Warming up with one untimed step of each layout");
        self.aos.par_step(dt, k);
        self.soa.par_step(dt, k);
        self.steps += 1;
    }

    /// Times `trials` parallel steps of each layout, alternating between the `AoS` and `SoA` layouts.
    pub fn measure(&mut self) -> Report {
        let (dt, k) = (self.params.dt(), self.params.k());
        let mut aos = Timings::default();
        let mut soa = Timings::default();

        for trial in 0..self.trials {
            let aos_time = time_step(&mut self.aos, dt, k);
            let soa_time = time_step(&mut self.soa, dt, k);
            self.steps += 1;

            ftlog::info!(
                "Trial {}/{}: {} step took {:.6} s, {} step took {:.6} s",
                trial + 1,
                self.trials,
                AosParticles::NAME,
                aos_time.as_secs_f64(),
                SoaParticles::NAME,
                soa_time.as_secs_f64()
            );

            aos.push(aos_time);
            soa.push(soa_time);
        }

        let report = Report {
            n: self.params.n(),
            threads: rayon::current_num_threads(),
            aos,
            soa,
        };
        ftlog::info!("Speedup ({}/{}): {:.4}", AosParticles::NAME, SoaParticles::NAME, report.speedup());
        report
    }

    /// Warms up and then measures both layouts.
    pub fn run(&mut self) -> Report {
        self.warm_up();
        self.measure()
    }

    /// Checks that both layouts still hold the same particles.
    ///
    /// Both layouts always take the same number of steps with the same parameters, so they must agree bit-for-bit.
    ///
    /// # Errors
    ///
    /// - If the layouts hold different numbers of particles.
    /// - If any particle differs in any field, naming the first such particle and field.
    pub fn verify(&self) -> Result<(), String> {
        if self.aos.len() != self.soa.len() {
            return Err(format!(
                "{} holds {} particles but {} holds {}",
                AosParticles::NAME,
                self.aos.len(),
                SoaParticles::NAME,
                self.soa.len()
            ));
        }

        for (i, a) in self.aos.as_slice().iter().enumerate() {
            let s = self
                .soa
                .particle(i)
                .ok_or_else(|| format!("{} has no particle at index {i}", SoaParticles::NAME))?;
            if let Some(field) = a.first_difference(&s) {
                return Err(format!(
                    "Particle {i} differs in field {field} after {} steps: {} has {}, {} has {}",
                    self.steps,
                    AosParticles::NAME,
                    a.get(field),
                    SoaParticles::NAME,
                    s.get(field)
                ));
            }
        }

        ftlog::info!("Both layouts agree on all {} particles after {} steps", self.aos.len(), self.steps);
        Ok(())
    }
}
