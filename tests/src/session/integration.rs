#![cfg(test)]
use masterhacker_core::console::Transcript;
use masterhacker_core::engine::{CommandEngine, Seeding};
use masterhacker_core::error::SessionError;
use masterhacker_core::session::SessionState;
use masterhacker_core::session::status::{StatusKey, StatusValue};
use masterhacker_core::session::target::SecurityLevel;

fn engine() -> CommandEngine<Transcript> {
    CommandEngine::new(Transcript::default(), Seeding::replay())
}

/// Scan populates the discovery list, after which an infiltration of a
/// reported target succeeds and is recorded.
#[test]
fn scan_then_infiltrate_mainframe() -> anyhow::Result<()> {
    let mut engine = engine();
    let mut state = SessionState::new();

    assert!(engine.execute_line("scan", &mut state));
    let levels: Vec<(&str, SecurityLevel)> = state
        .discovered()
        .iter()
        .map(|target| (target.name(), target.security_level()))
        .collect();
    assert_eq!(
        levels,
        vec![
            ("MAINFRAME-7", SecurityLevel::Low),
            ("QUANTUM-DB", SecurityLevel::High),
            ("SATELLITE-X", SecurityLevel::Medium),
        ]
    );

    engine.console_mut().take();
    assert!(engine.execute_line("infiltrate MAINFRAME-7", &mut state));
    let out = engine.console_mut().take();

    assert!(state.is_infiltrated("MAINFRAME-7"));
    assert!(out.contains("[BYPASSING SECURITY]"));
    assert!(out.ends_with("Root privileges obtained.\n"));
    state.validate()?;
    Ok(())
}

#[test]
fn infiltration_is_gated_on_discovery() {
    let mut engine = engine();
    let mut state = SessionState::new();

    assert!(engine.execute_line("infiltrate SATELLITE-X", &mut state));
    assert_eq!(engine.console_mut().take(), "Target not found. Run 'scan' first.\n");
    assert!(state.infiltrated().is_empty());

    engine.execute_line("scan", &mut state);
    engine.execute_line("infiltrate NEXUS-CORE", &mut state);
    assert!(engine.console().output().ends_with("Target not found. Run 'scan' first.\n"));
    assert!(state.infiltrated().is_empty());
}

#[test]
fn infiltrated_targets_stay_a_subset_of_discovered() {
    let mut engine = engine();
    let mut state = SessionState::new();

    for line in ["infiltrate QUANTUM-DB", "scan", "infiltrate quantum-db", "infiltrate GHOST", "scan"] {
        engine.execute_line(line, &mut state);
        for name in state.infiltrated() {
            assert!(state.find_discovered(name).is_some(), "{name} infiltrated but not discovered");
        }
    }
    assert_eq!(state.infiltrated().len(), 1);
}

#[test]
fn status_is_idempotent() {
    let mut engine = engine();
    let mut state = SessionState::new();
    engine.execute_line("hack", &mut state);
    engine.console_mut().take();

    let before = state.clone();
    engine.execute_line("status", &mut state);
    let first = engine.console_mut().take();
    engine.execute_line("status", &mut state);
    let second = engine.console_mut().take();

    assert_eq!(first, second);
    assert_eq!(state, before);
    assert_eq!(first.lines().count(), 7);
}

#[test]
fn malformed_update_keeps_previous_value() {
    let mut state = SessionState::new();
    let err = state
        .update_status_named("credits", StatusValue::from("lots"))
        .unwrap_err();

    assert!(matches!(err, SessionError::TypeMismatch { key: StatusKey::Credits, .. }));
    assert_eq!(state, SessionState::new());
}

#[test]
fn unrecognized_input_never_touches_state() {
    let mut engine = engine();
    let mut state = SessionState::new();
    engine.execute_line("scan", &mut state);
    let before = state.clone();

    assert!(!engine.execute_line("rm -rf /", &mut state));
    assert!(!engine.execute_line("", &mut state));
    assert_eq!(state, before);
}

#[test]
fn rescan_resets_discovery_but_keeps_infiltrations() {
    let mut engine = engine();
    let mut state = SessionState::new();
    engine.execute_line("scan", &mut state);
    engine.execute_line("infiltrate MAINFRAME-7", &mut state);
    engine.execute_line("scan", &mut state);

    assert_eq!(state.discovered().len(), 3);
    assert!(state.is_infiltrated("MAINFRAME-7"));
}
