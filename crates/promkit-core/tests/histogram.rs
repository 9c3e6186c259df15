#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promkit_core::{Registry, DEFAULT_BUCKETS};

#[test]
fn cumulative_counts_match_observations() {
    let reg = Registry::new();
    let bounds = [0.1, 0.5, 1.0, 5.0];
    let h = reg
        .histogram_vec("latency", "latency", &[], &bounds)
        .unwrap()
        .with_label_values(&[])
        .unwrap();

    let values = [0.05, 0.1, 0.3, 0.5, 0.7, 1.0, 2.0, 5.0, 7.0, 100.0, -4.0];
    for v in values {
        h.observe(v).unwrap();
    }

    let snap = h.snapshot();
    assert_eq!(snap.buckets.len(), bounds.len() + 1);
    for (bound, cumulative) in &snap.buckets {
        let expected = values.iter().filter(|v| **v <= *bound).count() as u64;
        assert_eq!(*cumulative, expected, "le={bound}");
    }
    let (last_bound, last_count) = *snap.buckets.last().unwrap();
    assert_eq!(last_bound, f64::INFINITY);
    assert_eq!(last_count, values.len() as u64);
    assert_eq!(snap.count, values.len() as u64);

    let sum: f64 = values.iter().sum();
    assert!((snap.sum - sum).abs() < 1e-9);
}

#[test]
fn bound_is_inclusive() {
    let reg = Registry::new();
    let h = reg
        .histogram_vec("h", "h", &[], &[1.0, 2.0])
        .unwrap()
        .with_label_values(&[])
        .unwrap();
    h.observe(1.0).unwrap();
    let snap = h.snapshot();
    assert_eq!(snap.buckets[0], (1.0, 1));
    assert_eq!(snap.buckets[1], (2.0, 1));
}

#[test]
fn larger_than_all_bounds_lands_only_in_inf() {
    let reg = Registry::new();
    let h = reg
        .histogram_vec("h", "h", &[], &[1.0, 2.0])
        .unwrap()
        .with_label_values(&[])
        .unwrap();
    h.observe(3.0).unwrap();
    h.observe(f64::INFINITY).unwrap();
    let snap = h.snapshot();
    assert_eq!(snap.buckets, vec![(1.0, 0), (2.0, 0), (f64::INFINITY, 2)]);
}

#[test]
fn nan_observation_rejected_and_state_unchanged() {
    let reg = Registry::new();
    let h = reg
        .default_histogram_vec("h", "h", &[])
        .unwrap()
        .with_label_values(&[])
        .unwrap();
    h.observe(0.2).unwrap();
    let before = h.snapshot();
    let err = h.observe(f64::NAN).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_VALUE");
    assert_eq!(h.snapshot(), before);
    assert_eq!(h.bounds().len(), DEFAULT_BUCKETS.len() + 1);
}

#[test]
fn bad_bucket_lists_rejected() {
    let reg = Registry::new();
    for bounds in [&[][..], &[1.0, 1.0][..], &[2.0, 1.0][..], &[f64::NAN][..]] {
        let err = reg.histogram_vec("h", "h", &[], bounds).expect_err("must fail");
        assert_eq!(err.code().as_str(), "INVALID_BUCKETS");
    }
    assert!(reg.is_empty());
}

#[test]
fn explicit_inf_bound_is_not_duplicated() {
    let reg = Registry::new();
    let h = reg
        .histogram_vec("h", "h", &[], &[1.0, f64::INFINITY])
        .unwrap()
        .with_label_values(&[])
        .unwrap();
    assert_eq!(h.bounds(), &[1.0, f64::INFINITY]);
}

#[test]
fn timer_observes_on_drop() {
    let reg = Registry::new();
    let h = reg
        .default_histogram_vec("h", "h", &[])
        .unwrap()
        .with_label_values(&[])
        .unwrap();
    {
        let _t = h.start_timer();
    }
    let secs = h.start_timer().observe_duration();
    assert!(secs >= 0.0);
    assert_eq!(h.snapshot().count, 2);
}
