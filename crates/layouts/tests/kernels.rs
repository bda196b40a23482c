//! Tests for the physics of a single step.

use float_eq::assert_float_eq;
use layouts::{AosParticles, Particle, Population, SoaParticles};

/// Steps a single particle once with the given layout and returns it.
fn step_one<P: Population>(particle: Particle, dt: f64, k: f64, parallel: bool) -> Particle {
    let mut population = P::from_particles(&[particle]).unwrap();
    if parallel {
        population.par_step(dt, k);
    } else {
        population.step(dt, k);
    }
    population.particle(0).unwrap()
}

/// Runs `check` on the result of stepping `particle` with every layout and kernel.
fn for_all_kernels(particle: Particle, dt: f64, k: f64, check: impl Fn(&str, Particle)) {
    for parallel in [false, true] {
        check(AosParticles::NAME, step_one::<AosParticles>(particle, dt, k, parallel));
        check(SoaParticles::NAME, step_one::<SoaParticles>(particle, dt, k, parallel));
    }
}

#[test]
fn single_step() {
    let particle = Particle::new([1.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0);
    for_all_kernels(particle, 0.001, 0.7, |name, p| {
        assert_float_eq!(p.vx, -0.0007, abs <= 1e-15, "{name}");
        assert_float_eq!(p.x, 0.999_999_3, abs <= 1e-15, "{name}");
        assert_eq!([p.y, p.z, p.vy, p.vz], [0.0; 4], "{name}");
        assert_eq!(p.m, 1.0, "{name}");
    });
}

#[test]
fn velocity_before_position() {
    // Explicit Euler would leave x at 1.0 because the initial velocity is zero.
    let particle = Particle::new([1.0, 1.0, 1.0], [0.0, 0.0, 0.0], 2.0);
    let (dt, k) = (0.1, 1.0);
    for_all_kernels(particle, dt, k, |name, p| {
        let v = -k * 1.0 / 2.0 * dt;
        for (x, vx) in p.position().into_iter().zip(p.velocity()) {
            assert_float_eq!(vx, v, abs <= 1e-15, "{name}");
            assert_float_eq!(x, 1.0 + v * dt, abs <= 1e-15, "{name}");
            assert!(x < 1.0, "{name}");
        }
    });
}

#[test]
fn heavier_is_slower() {
    let (dt, k) = (0.01, 0.7);
    let light = step_one::<SoaParticles>(Particle::new([1.0, 0.0, 0.0], [0.0; 3], 0.5), dt, k, true);
    let heavy = step_one::<SoaParticles>(Particle::new([1.0, 0.0, 0.0], [0.0; 3], 2.0), dt, k, true);
    assert_float_eq!(light.vx, 4.0 * heavy.vx, r2nd <= 1e-12);
}

#[test]
fn zero_force_is_ballistic() {
    let (dt, k) = (0.5, 0.0);
    let mut aos = AosParticles::generate(1_000, 42).unwrap();
    let mut soa = SoaParticles::generate(1_000, 42).unwrap();
    let initial = aos.clone();

    for _ in 0..4 {
        aos.par_step(dt, k);
        soa.par_step(dt, k);
    }

    for (i, p0) in initial.as_slice().iter().enumerate() {
        for p in [aos.particle(i).unwrap(), soa.particle(i).unwrap()] {
            assert_eq!(p.velocity(), p0.velocity(), "particle {i}");
            assert_eq!(p.m, p0.m, "particle {i}");
            for (x, (x0, v)) in p.position().into_iter().zip(p0.position().into_iter().zip(p0.velocity())) {
                assert_float_eq!(x, 4.0f64.mul_add(v * dt, x0), abs <= 1e-12, "particle {i}");
            }
        }
    }
}

#[test]
fn origin_is_fixed_point() {
    let particle = Particle::new([0.0; 3], [0.0; 3], 1.3);
    for_all_kernels(particle, 0.01, 5.0, |name, p| {
        assert_eq!(p, particle, "{name}");
    });
}

#[test]
fn non_positive_mass_propagates() {
    let particle = Particle::new([1.0, 0.0, 0.0], [0.0; 3], 0.0);
    for_all_kernels(particle, 0.001, 0.7, |name, p| {
        assert!(p.vx.is_infinite(), "{name}");
        assert!(p.x.is_infinite(), "{name}");
        // 0 * inf on the zero axes.
        assert!(p.vy.is_nan(), "{name}");
    });
}
