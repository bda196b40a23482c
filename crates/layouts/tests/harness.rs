//! Tests for the benchmark harness.

use layouts::{Harness, Population, StepParams};

#[test]
fn single_shot() {
    let params = StepParams::new(10_000, 1e-3, 0.7).unwrap();
    let mut harness = Harness::new(params).unwrap();
    assert_eq!(harness.trials(), 1);
    assert_eq!(harness.steps(), 0);
    assert_eq!(harness.params(), &params);

    let report = harness.run();
    assert_eq!(report.n, 10_000);
    assert_eq!(report.aos.len(), 1);
    assert_eq!(report.soa.len(), 1);
    assert!(report.threads >= 1);
    assert_eq!(harness.steps(), 2);

    let text = report.to_string();
    assert!(text.starts_with("N=10000\n"), "{text}");
    assert!(text.contains("AoS step: "), "{text}");
    assert!(text.contains("SoA step: "), "{text}");
    assert!(text.contains("Speedup (AoS/SoA): "), "{text}");

    assert!(harness.verify().is_ok());
}

#[test]
fn repeated_trials() {
    let params = StepParams::new(5_000, 1e-2, 2.0).unwrap().with_seed(9);
    let mut harness = Harness::new(params).unwrap().with_trials(5).unwrap();

    let report = harness.run();
    assert_eq!(report.aos.len(), 5);
    assert_eq!(report.soa.len(), 5);
    assert!(report.aos.min() <= report.aos.median());
    assert!(report.soa.min() <= report.soa.median());
    assert_eq!(harness.steps(), 6);
    assert_eq!(harness.aos().len(), 5_000);
    assert_eq!(harness.soa().len(), 5_000);

    assert!(harness.verify().is_ok());
}

#[test]
fn measure_without_warm_up() {
    let params = StepParams::new(1, 1e-3, 0.7).unwrap();
    let mut harness = Harness::new(params).unwrap();
    let report = harness.measure();
    assert_eq!(report.aos.len(), 1);
    assert_eq!(harness.steps(), 1);
    assert!(harness.verify().is_ok());
}

#[test]
fn zero_trials() {
    let params = StepParams::new(10, 1e-3, 0.7).unwrap();
    assert!(Harness::new(params).unwrap().with_trials(0).is_err());
}
