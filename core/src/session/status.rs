//! # Status Block
//!
//! The seven system-status fields as a typed struct. String-keyed updates
//! go through [`StatusKey`] and [`StatusValue`] so scripted callers get a
//! proper error instead of a silently mistyped field.

use std::fmt;
use std::str::FromStr;

use crate::error::SessionError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub online: bool,
    pub security_level: String,
    pub connections: u32,
    pub firewall: bool,
    pub stealth: bool,
    pub compromised_systems: u32,
    pub credits: u32,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            online: true,
            security_level: String::from("MAXIMUM"),
            connections: 3,
            firewall: true,
            stealth: true,
            compromised_systems: 0,
            credits: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKey {
    Online,
    SecurityLevel,
    Connections,
    Firewall,
    Stealth,
    CompromisedSystems,
    Credits,
}

/// A loosely typed value as a script would hand it over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl StatusKey {
    pub const ALL: [StatusKey; 7] = [
        StatusKey::Online,
        StatusKey::SecurityLevel,
        StatusKey::Connections,
        StatusKey::Firewall,
        StatusKey::Stealth,
        StatusKey::CompromisedSystems,
        StatusKey::Credits,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StatusKey::Online => "online",
            StatusKey::SecurityLevel => "security_level",
            StatusKey::Connections => "connections",
            StatusKey::Firewall => "firewall",
            StatusKey::Stealth => "stealth",
            StatusKey::CompromisedSystems => "compromised_systems",
            StatusKey::Credits => "credits",
        }
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatusKey {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| SessionError::UnknownStatusKey(s.to_string()))
    }
}

impl From<bool> for StatusValue {
    fn from(value: bool) -> Self {
        StatusValue::Bool(value)
    }
}

impl From<i64> for StatusValue {
    fn from(value: i64) -> Self {
        StatusValue::Int(value)
    }
}

impl From<u32> for StatusValue {
    fn from(value: u32) -> Self {
        StatusValue::Int(i64::from(value))
    }
}

impl From<&str> for StatusValue {
    fn from(value: &str) -> Self {
        StatusValue::Text(value.to_string())
    }
}

impl Status {
    /// Returns a copy with `key` set to `value`, leaving `self` untouched.
    pub(crate) fn with(&self, key: StatusKey, value: StatusValue) -> Result<Status, SessionError> {
        let mut next = self.clone();
        match key {
            StatusKey::Online => next.online = expect_bool(key, value)?,
            StatusKey::Firewall => next.firewall = expect_bool(key, value)?,
            StatusKey::Stealth => next.stealth = expect_bool(key, value)?,
            StatusKey::Connections => next.connections = expect_count(key, value)?,
            StatusKey::CompromisedSystems => next.compromised_systems = expect_count(key, value)?,
            StatusKey::Credits => next.credits = expect_count(key, value)?,
            StatusKey::SecurityLevel => next.security_level = expect_text(key, value)?,
        }
        Ok(next)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.security_level.trim().is_empty() {
            return Err(SessionError::MissingKey(StatusKey::SecurityLevel));
        }
        Ok(())
    }
}

fn expect_bool(key: StatusKey, value: StatusValue) -> Result<bool, SessionError> {
    match value {
        StatusValue::Bool(flag) => Ok(flag),
        _ => Err(SessionError::TypeMismatch { key, expected: "a boolean" }),
    }
}

fn expect_count(key: StatusKey, value: StatusValue) -> Result<u32, SessionError> {
    let mismatch = SessionError::TypeMismatch { key, expected: "a non-negative integer" };
    match value {
        StatusValue::Int(n) => u32::try_from(n).map_err(|_| mismatch),
        _ => Err(mismatch),
    }
}

fn expect_text(key: StatusKey, value: StatusValue) -> Result<String, SessionError> {
    match value {
        StatusValue::Text(text) => Ok(text),
        _ => Err(SessionError::TypeMismatch { key, expected: "a string" }),
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
    fn status_key_names_round_trip() {
        for key in StatusKey::ALL {
            assert_eq!(key.name().parse::<StatusKey>(), Ok(key));
        }
    }

    #[test]
    fn unknown_key_is_reported_by_name() {
        assert_eq!(
            "uptime".parse::<StatusKey>(),
            Err(SessionError::UnknownStatusKey("uptime".to_string()))
        );
    }

    #[test]
    fn with_leaves_receiver_untouched() {
        let status = Status::default();
        let next = status.with(StatusKey::Credits, StatusValue::Int(42)).unwrap();
        assert_eq!(next.credits, 42);
        assert_eq!(status.credits, 0);
    }

    #[test]
    fn counts_reject_negative_values() {
        let err = Status::default()
            .with(StatusKey::Connections, StatusValue::Int(-1))
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::TypeMismatch {
                key: StatusKey::Connections,
                expected: "a non-negative integer"
            }
        );
    }

    #[test]
    fn flags_reject_text() {
        let err = Status::default()
            .with(StatusKey::Stealth, StatusValue::from("on"))
            .unwrap_err();
        assert!(matches!(err, SessionError::TypeMismatch { key: StatusKey::Stealth, .. }));
    }

    #[test]
    fn blank_security_level_fails_validation() {
        let status = Status {
            security_level: "  ".to_string(),
            ..Status::default()
        };
        assert_eq!(
            status.validate(),
            Err(SessionError::MissingKey(StatusKey::SecurityLevel))
        );
    }
}
