use super::*;

#[test]
fn latest_ticket_is_current() {
    let mut gate = DebounceGate::default();
    let first = gate.arm();
    let second = gate.arm();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn fresh_gate_has_no_current_ticket() {
    let gate = DebounceGate::default();
    assert!(!gate.is_current(1));
}
