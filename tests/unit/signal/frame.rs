use super::*;

#[test]
fn gate_starts_disarmed() {
    let gate = FrameGate::new();
    assert!(!gate.is_pending());
    assert!(!gate.take());
}

#[test]
fn requests_coalesce_into_one_take() {
    let gate = FrameGate::new();
    gate.request();
    gate.request();
    gate.request();
    assert!(gate.is_pending());
    assert!(gate.take());
    // Nothing pending until the next request.
    assert!(!gate.take());
}

#[test]
fn request_after_take_rearms() {
    let gate = FrameGate::new();
    gate.request();
    assert!(gate.take());
    gate.request();
    assert!(gate.take());
}
