//! Timings and the final report of a benchmark run.

use std::time::Duration;

/// The wall-clock durations of the timed steps of one layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Timings {
    /// One duration per timed step, in the order they were measured.
    samples: Vec<Duration>,
}

impl Timings {
    /// Creates `Timings` from the given samples.
    #[must_use]
    pub const fn new(samples: Vec<Duration>) -> Self {
        Self { samples }
    }

    /// Records one more sample.
    pub fn push(&mut self, sample: Duration) {
        self.samples.push(sample);
    }

    /// Returns the samples in the order they were measured.
    #[must_use]
    pub fn samples(&self) -> &[Duration] {
        &self.samples
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the shortest sample, or zero if there are none.
    #[must_use]
    pub fn min(&self) -> Duration {
        self.samples.iter().min().copied().unwrap_or_default()
    }

    /// Returns the median sample, or zero if there are none.
    ///
    /// For an even number of samples, this is the mean of the two middle samples.
    #[must_use]
    pub fn median(&self) -> Duration {
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        match sorted.len() {
            0 => Duration::ZERO,
            n if n % 2 == 1 => sorted[mid],
            _ => (sorted[mid - 1] + sorted[mid]) / 2,
        }
    }

    /// Returns the mean of the samples, or zero if there are none.
    #[must_use]
    pub fn mean(&self) -> Duration {
        let total = self.samples.iter().sum::<Duration>();
        u32::try_from(self.samples.len()).ok().filter(|&n| n > 0).map_or(Duration::ZERO, |n| total / n)
    }
}

/// The outcome of a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The number of particles in each layout.
    pub n: usize,
    /// The number of worker threads in the pool that ran the steps.
    pub threads: usize,
    /// The timed steps of the Array-of-Structures layout.
    pub aos: Timings,
    /// The timed steps of the Structure-of-Arrays layout.
    pub soa: Timings,
}

impl Report {
    /// Returns how many times faster the `SoA` step was than the `AoS` step, comparing medians.
    ///
    /// With a single trial this is just the ratio of the two samples. If the `SoA` step took no measurable time, the result is infinite (or `NaN` if
    /// neither did).
    #[must_use]
    pub fn speedup(&self) -> f64 {
        self.aos.median().as_secs_f64() / self.soa.median().as_secs_f64()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "N={}", self.n)?;
        writeln!(f, "Threads: {}", self.threads)?;
        for (name, timings) in [("AoS", &self.aos), ("SoA", &self.soa)] {
            if timings.len() > 1 {
                writeln!(
                    f,
                    "{name} step: {:.3} s (min {:.3} s, mean {:.3} s, {} trials)",
                    timings.median().as_secs_f64(),
                    timings.min().as_secs_f64(),
                    timings.mean().as_secs_f64(),
                    timings.len()
                )?;
            } else {
                writeln!(f, "{name} step: {:.3} s", timings.median().as_secs_f64())?;
            }
        }
        write!(f, "Speedup (AoS/SoA): {:.2}×", self.speedup())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use float_eq::assert_float_eq;

    use super::{Report, Timings};

    fn millis(ms: &[u64]) -> Timings {
        Timings::new(ms.iter().copied().map(Duration::from_millis).collect())
    }

    #[test]
    fn statistics() {
        let t = millis(&[30, 10, 20]);
        assert_eq!(t.min(), Duration::from_millis(10));
        assert_eq!(t.median(), Duration::from_millis(20));
        assert_eq!(t.mean(), Duration::from_millis(20));

        let t = millis(&[40, 10, 20, 30]);
        assert_eq!(t.median(), Duration::from_millis(25));
        assert_eq!(t.mean(), Duration::from_millis(25));

        let t = Timings::default();
        assert!(t.is_empty());
        assert_eq!(t.min(), Duration::ZERO);
        assert_eq!(t.median(), Duration::ZERO);
        assert_eq!(t.mean(), Duration::ZERO);
    }

    #[test]
    fn single_shot() {
        let report = Report {
            n: 5_000_000,
            threads: 8,
            aos: millis(&[12]),
            soa: millis(&[8]),
        };
        assert_float_eq!(report.speedup(), 1.5, r2nd <= 1e-12);
        assert_eq!(
            report.to_string(),
            "N=5000000\nThreads: 8\nAoS step: 0.012 s\nSoA step: 0.008 s\nSpeedup (AoS/SoA): 1.50×"
        );
    }

    #[test]
    fn repeated() {
        let report = Report {
            n: 100,
            threads: 1,
            aos: millis(&[30, 10, 20]),
            soa: millis(&[10, 10, 10]),
        };
        assert_float_eq!(report.speedup(), 2.0, r2nd <= 1e-12);
        let text = report.to_string();
        assert!(text.contains("AoS step: 0.020 s (min 0.010 s, mean 0.020 s, 3 trials)"), "{text}");
        assert!(text.ends_with("Speedup (AoS/SoA): 2.00×"), "{text}");
    }
}
