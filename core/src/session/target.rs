use std::fmt;

use crate::error::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecurityLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SecurityLevel::Low => "low",
            SecurityLevel::Medium => "medium",
            SecurityLevel::High => "high",
        };
        f.write_str(name)
    }
}

/// A simulated system found by a scan. Identity is the upper-cased name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    name: String,
    security_level: SecurityLevel,
}

impl Target {
    pub fn new(name: &str, security_level: SecurityLevel) -> Result<Self, SessionError> {
        Ok(Self {
            name: canonical_name(name)?,
            security_level,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn security_level(&self) -> SecurityLevel {
        self.security_level
    }
}

/// Trims and upper-cases a target name; blank names are rejected.
pub fn canonical_name(name: &str) -> Result<String, SessionError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SessionError::InvalidName);
    }
    Ok(trimmed.to_uppercase())
}
