use base::Cancel;

#[test]
fn test_cancel_starts_clear() {
    let cancel = Cancel::new();
    assert!(!cancel.is_cancelled());
}

#[test]
fn test_cancel_is_shared_between_clones() {
    let cancel = Cancel::new();
    let other = cancel.clone();

    other.cancel();
    assert!(cancel.is_cancelled());

    // idempotent
    cancel.cancel();
    assert!(other.is_cancelled());
}

#[test]
fn test_cancel_across_threads() {
    let cancel = Cancel::new();
    let handle = std::thread::spawn({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });
    handle.join().unwrap();
    assert!(cancel.is_cancelled());
}
