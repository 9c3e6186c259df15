#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use promkit_core::{Desc, MetricHandle, MetricKind, Registry};

#[test]
fn identical_reregistration_returns_same_family() {
    let reg = Registry::new();
    let a = reg.register(Desc::counter("reqs", "requests", &["code"])).unwrap();
    let b = reg.register(Desc::counter("reqs", "requests", &["code"])).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(reg.len(), 1);
}

#[test]
fn mismatched_reregistration_is_duplicate_name() {
    let reg = Registry::new();
    reg.register(Desc::counter("reqs", "requests", &["code"])).unwrap();

    let cases = [
        Desc::gauge("reqs", "requests", &["code"]),
        Desc::counter("reqs", "other help", &["code"]),
        Desc::counter("reqs", "requests", &["method"]),
        Desc::counter("reqs", "requests", &[]),
    ];
    for desc in cases {
        let err = reg.register(desc).expect_err("must fail");
        assert_eq!(err.code().as_str(), "DUPLICATE_NAME");
    }
    // The first registration is untouched.
    assert_eq!(reg.get("reqs").unwrap().kind(), MetricKind::Counter);
}

#[test]
fn histogram_buckets_are_part_of_descriptor() {
    let reg = Registry::new();
    reg.histogram_vec("lat", "l", &[], &[1.0, 2.0]).unwrap();
    // Same bounds with explicit +Inf normalize to the same descriptor.
    reg.histogram_vec("lat", "l", &[], &[1.0, 2.0, f64::INFINITY]).unwrap();
    let err = reg.histogram_vec("lat", "l", &[], &[1.0, 3.0]).expect_err("must fail");
    assert_eq!(err.code().as_str(), "DUPLICATE_NAME");
}

#[test]
fn sample_name_collision_is_duplicate_name() {
    let reg = Registry::new();
    reg.histogram_vec("lat", "l", &[], &[1.0]).unwrap();
    let err = reg.register(Desc::counter("lat_count", "c", &[])).expect_err("must fail");
    assert_eq!(err.code().as_str(), "DUPLICATE_NAME");

    reg.register(Desc::gauge("size_sum", "g", &[])).unwrap();
    let err = reg.histogram_vec("size", "h", &[], &[1.0]).expect_err("must fail");
    assert_eq!(err.code().as_str(), "DUPLICATE_NAME");
}

#[test]
fn unregister_is_idempotent() {
    let reg = Registry::new();
    reg.register(Desc::gauge("g", "g", &[])).unwrap();
    assert!(reg.unregister("g"));
    assert!(!reg.unregister("g"));
    assert!(!reg.unregister("never_registered"));
    assert!(reg.is_empty());
    // Name is free again, even for another kind.
    reg.register(Desc::counter("g", "now a counter", &[])).unwrap();
}

#[test]
fn invalid_names_rejected() {
    let reg = Registry::new();
    for name in ["", "1abc", "a-b", "a:b", "with space"] {
        let err = reg.register(Desc::counter(name, "h", &[])).expect_err("must fail");
        assert_eq!(err.code().as_str(), "INVALID_NAME", "name={name:?}");
    }
    for labels in [&["bad-label"][..], &["__reserved"][..], &["a", "a"][..], &["9x"][..]] {
        let err = reg.register(Desc::counter("ok", "h", labels)).expect_err("must fail");
        assert_eq!(err.code().as_str(), "INVALID_LABEL_NAME");
    }
    let err = reg.histogram_vec("ok", "h", &["le"], &[1.0]).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_LABEL_NAME");
    // `le` is fine outside histograms.
    reg.register(Desc::gauge("ok", "h", &["le"])).unwrap();
}

#[test]
fn get_or_create_returns_same_handle() {
    let reg = Registry::new();
    let fam = reg.register(Desc::counter("reqs", "r", &["method", "code"])).unwrap();
    let a = fam.get_or_create(&["GET", "200"]).unwrap();
    let b = fam.get_or_create(&["GET", "200"]).unwrap();
    let c = fam.get_or_create(&["GET", "500"]).unwrap();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&c));
    assert_eq!(fam.len(), 2);

    match a {
        MetricHandle::Counter(ctr) => assert_eq!(ctr.get(), 0.0),
        other => panic!("unexpected kind {:?}", other.kind()),
    }
}

#[test]
fn label_cardinality_mismatch() {
    let reg = Registry::new();
    let fam = reg.register(Desc::counter("reqs", "r", &["method", "code"])).unwrap();
    for values in [&[][..], &["GET"][..], &["GET", "200", "x"][..]] {
        let err = fam.get_or_create(values).expect_err("must fail");
        assert_eq!(err.code().as_str(), "LABEL_CARDINALITY");
    }
    assert!(fam.is_empty());
}

#[test]
fn labels_by_name_follow_declared_order() {
    let reg = Registry::new();
    let v = reg.counter_vec("reqs", "r", &["method", "code"]).unwrap();
    let a = v.with_labels(&[("code", "200"), ("method", "GET")]).unwrap();
    let b = v.with_label_values(&["GET", "200"]).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let err = v.with_labels(&[("code", "200"), ("path", "/")]).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_LABEL_NAME");
}

#[test]
fn remove_drops_handle_and_recreate_starts_at_zero() {
    let reg = Registry::new();
    let v = reg.counter_vec("reqs", "r", &["code"]).unwrap();
    v.with_label_values(&["200"]).unwrap().inc(5.0).unwrap();
    assert!(v.remove(&["200"]).unwrap());
    assert!(!v.remove(&["200"]).unwrap());
    assert!(v.family().list_handles().is_empty());
    assert_eq!(v.with_label_values(&["200"]).unwrap().get(), 0.0);
}

#[test]
fn unlabeled_family_has_its_series_from_the_start() {
    let reg = Registry::new();
    let fam = reg.register(Desc::gauge("temp", "t", &[])).unwrap();
    let handles = fam.list_handles();
    assert_eq!(handles.len(), 1);
    assert!(handles[0].0.is_empty());
}

#[test]
fn typed_view_rejects_wrong_kind() {
    let reg = Registry::new();
    let fam = reg.register(Desc::gauge("g", "g", &[])).unwrap();
    let err = promkit_core::CounterVec::new(fam).expect_err("must fail");
    assert_eq!(err.code().as_str(), "KIND_MISMATCH");
}

#[test]
fn collect_is_restartable_and_reflects_current_state() {
    let reg = Registry::new();
    reg.register(Desc::counter("b", "b", &[])).unwrap();
    reg.register(Desc::counter("a", "a", &[])).unwrap();

    let names: Vec<String> = reg.collect().map(|(f, _)| f.name().to_string()).collect();
    assert_eq!(names, ["a", "b"]);

    reg.unregister("a");
    reg.register(Desc::gauge("c", "c", &[])).unwrap();
    let names: Vec<String> = reg.collect().map(|(f, _)| f.name().to_string()).collect();
    assert_eq!(names, ["b", "c"]);
}

#[test]
fn collect_list_is_frozen_at_call_time() {
    let reg = Registry::new();
    reg.register(Desc::counter("a", "a", &[])).unwrap();
    let mut it = reg.collect();
    reg.register(Desc::counter("b", "b", &[])).unwrap();
    assert_eq!(it.next().unwrap().0.name(), "a");
    assert!(it.next().is_none());
}

#[test]
fn list_handles_sorted_and_complete() {
    let reg = Registry::new();
    let v = reg.gauge_vec("g", "g", &["k"]).unwrap();
    for k in ["c", "a", "b"] {
        v.with_label_values(&[k]).unwrap();
    }
    let keys: Vec<String> = v
        .family()
        .list_handles()
        .into_iter()
        .map(|(labels, _)| labels[0].clone())
        .collect();
    assert_eq!(keys, ["a", "b", "c"]);
}
