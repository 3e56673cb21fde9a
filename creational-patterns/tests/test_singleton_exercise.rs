//! The Singleton exercise: a producer closed over one list is a singleton,
//! a producer that deep-copies the list on every call is not.

use std::rc::Rc;

use creational_patterns::{check_identity, is_singleton, is_singleton_n, Handle, Settings};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn exercise() {
    init_tracing();
    let obj = vec![1, 2, 3];
    assert!(is_singleton(|| &obj));
    assert!(!is_singleton(|| Rc::new(obj.clone())));
}

#[test]
fn repeated_checks_agree() {
    init_tracing();
    let obj = vec![1, 2, 3];
    for _ in 0..10 {
        assert!(is_singleton(|| &obj));
        assert!(!is_singleton(|| Rc::new(obj.clone())));
    }
}

#[test]
fn copies_stay_equal_by_value() {
    init_tracing();
    let original = Handle::new(vec![1, 2, 3]);
    let report = check_identity(|| original.deep_copy());
    assert!(!report.is_singleton());
    assert_eq!(original.deep_copy().get(), original.get());
}

#[test]
fn settings_accessor_is_singleton() {
    init_tracing();
    assert!(is_singleton(Settings::instance));
    assert_eq!(is_singleton_n(Settings::instance, 8), Ok(true));
}
