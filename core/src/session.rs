//! # Session State
//!
//! Everything a run mutates: the targets a scan discovered, the names that
//! were infiltrated and the status block.
//!
//! One instance is owned by whoever drives the command loop and is passed
//! explicitly to every operation. Every mutation is validated before it is
//! committed, so a rejected call leaves the previous state intact.
//!
//! Whether a name must have been discovered before it can be infiltrated is
//! a policy of the command engine, not of this type, so scripted callers can
//! build arbitrary starting states.

pub mod status;
pub mod target;

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, warn};

use crate::error::SessionError;
use status::{Status, StatusKey, StatusValue};
use target::{SecurityLevel, Target, canonical_name};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Discovery order is preserved.
    discovered: Vec<Target>,
    infiltrated: BTreeSet<String>,
    status: Status,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discovered(&self) -> &[Target] {
        &self.discovered
    }

    pub fn infiltrated(&self) -> &BTreeSet<String> {
        &self.infiltrated
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Looks a target up by name, ignoring case.
    pub fn find_discovered(&self, name: &str) -> Option<&Target> {
        let name = canonical_name(name).ok()?;
        self.discovered.iter().find(|target| target.name() == name)
    }

    pub fn is_infiltrated(&self, name: &str) -> bool {
        canonical_name(name).is_ok_and(|name| self.infiltrated.contains(&name))
    }

    pub fn add_discovered(&mut self, name: &str, level: SecurityLevel) -> Result<(), SessionError> {
        let target = Target::new(name, level)?;
        if self.discovered.iter().any(|known| known.name() == target.name()) {
            return Err(SessionError::DuplicateTarget(target.name().to_string()));
        }
        debug!(name = target.name(), %level, "target discovered");
        self.discovered.push(target);
        Ok(())
    }

    pub fn clear_discovered(&mut self) {
        self.discovered.clear();
    }

    /// Swaps the whole discovery list at once. Nothing changes unless every
    /// entry is valid and names are unique.
    pub fn replace_discovered<'a, I>(&mut self, entries: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = (&'a str, SecurityLevel)>,
    {
        let mut staged = SessionState::default();
        for (name, level) in entries {
            staged.add_discovered(name, level)?;
        }
        self.discovered = staged.discovered;
        Ok(())
    }

    pub fn mark_infiltrated(&mut self, name: &str) -> Result<(), SessionError> {
        let name = canonical_name(name)?;
        debug!(%name, "target infiltrated");
        self.infiltrated.insert(name);
        Ok(())
    }

    pub fn update_status(&mut self, key: StatusKey, value: StatusValue) -> Result<(), SessionError> {
        let next = self.status.with(key, value)?;
        next.validate()?;
        self.status = next;
        Ok(())
    }

    /// String-keyed variant of [`Self::update_status`].
    pub fn update_status_named(&mut self, key: &str, value: StatusValue) -> Result<(), SessionError> {
        let key: StatusKey = key.parse()?;
        self.update_status(key, value)
    }

    pub fn reset(&mut self) {
        *self = SessionState::default();
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        let mut names = HashSet::with_capacity(self.discovered.len());
        for target in &self.discovered {
            if target.name().trim().is_empty() {
                return Err(SessionError::InvalidName);
            }
            if !names.insert(target.name()) {
                return Err(SessionError::DuplicateTarget(target.name().to_string()));
            }
        }

        if self.infiltrated.iter().any(|name| name.trim().is_empty()) {
            return Err(SessionError::InvalidName);
        }

        self.status.validate().inspect_err(|e| warn!("session status is inconsistent: {e}"))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_discovered_canonicalizes_and_keeps_order() {
        let mut state = SessionState::new();
        state.add_discovered("mainframe-7", SecurityLevel::Low).unwrap();
        state.add_discovered("Quantum-DB", SecurityLevel::High).unwrap();

        let names: Vec<&str> = state.discovered().iter().map(Target::name).collect();
        assert_eq!(names, vec!["MAINFRAME-7", "QUANTUM-DB"]);
    }

    #[test]
    fn rediscovery_is_rejected() {
        let mut state = SessionState::new();
        state.add_discovered("SATELLITE-X", SecurityLevel::Medium).unwrap();
        let err = state.add_discovered("satellite-x", SecurityLevel::Low).unwrap_err();

        assert_eq!(err, SessionError::DuplicateTarget("SATELLITE-X".to_string()));
        assert_eq!(state.discovered().len(), 1);
        assert_eq!(state.discovered()[0].security_level(), SecurityLevel::Medium);
    }

    #[test]
    fn blank_names_are_invalid() {
        let mut state = SessionState::new();
        assert_eq!(state.add_discovered("   ", SecurityLevel::Low), Err(SessionError::InvalidName));
        assert_eq!(state.mark_infiltrated(""), Err(SessionError::InvalidName));
        assert!(state.infiltrated().is_empty());
    }

    #[test]
    fn mark_infiltrated_does_not_require_discovery() {
        let mut state = SessionState::new();
        state.mark_infiltrated("ghost-node").unwrap();
        assert!(state.is_infiltrated("GHOST-NODE"));
        assert!(state.validate().is_ok());
    }

    #[test]
    fn replace_discovered_is_all_or_nothing() {
        let mut state = SessionState::new();
        state.add_discovered("ALPHA", SecurityLevel::Low).unwrap();

        let err = state
            .replace_discovered([("BETA", SecurityLevel::Low), ("beta", SecurityLevel::High)])
            .unwrap_err();
        assert_eq!(err, SessionError::DuplicateTarget("BETA".to_string()));
        assert_eq!(state.discovered().len(), 1);
        assert_eq!(state.discovered()[0].name(), "ALPHA");

        state
            .replace_discovered([("BETA", SecurityLevel::Low), ("GAMMA", SecurityLevel::High)])
            .unwrap();
        assert!(state.find_discovered("alpha").is_none());
        assert!(state.find_discovered("gamma").is_some());
    }

    #[test]
    fn malformed_status_update_leaves_field_unchanged() {
        let mut state = SessionState::new();
        let before = state.status().online;

        let err = state
            .update_status_named("online", StatusValue::from("yes"))
            .unwrap_err();

        assert!(matches!(err, SessionError::TypeMismatch { key: StatusKey::Online, .. }));
        assert_eq!(state.status().online, before);
    }

    #[test]
    fn status_update_that_breaks_validation_is_not_committed() {
        let mut state = SessionState::new();
        let err = state
            .update_status(StatusKey::SecurityLevel, StatusValue::from(""))
            .unwrap_err();

        assert_eq!(err, SessionError::MissingKey(StatusKey::SecurityLevel));
        assert_eq!(state.status().security_level, "MAXIMUM");
    }

    #[test]
    fn unknown_status_key_is_rejected() {
        let mut state = SessionState::new();
        let err = state.update_status_named("uptime", StatusValue::Int(1)).unwrap_err();
        assert_eq!(err, SessionError::UnknownStatusKey("uptime".to_string()));
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn typed_status_update_commits() {
        let mut state = SessionState::new();
        state.update_status(StatusKey::Credits, StatusValue::from(1337u32)).unwrap();
        state.update_status_named("firewall", StatusValue::Bool(false)).unwrap();
        assert_eq!(state.status().credits, 1337);
        assert!(!state.status().firewall);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = SessionState::new();
        state.add_discovered("ALPHA", SecurityLevel::Low).unwrap();
        state.mark_infiltrated("ALPHA").unwrap();
        state.update_status(StatusKey::Online, StatusValue::Bool(false)).unwrap();

        state.reset();

        assert!(state.discovered().is_empty());
        assert!(state.infiltrated().is_empty());
        assert_eq!(state.status(), &Status::default());
    }
}
