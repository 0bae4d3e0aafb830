//! Fixed data the simulated operations draw from.

use std::time::Duration;

use crate::progress::Progress;
use crate::session::target::SecurityLevel;

/// Seed used whenever output has to be reproducible.
pub const REPLAY_SEED: u64 = 1337;

pub const SCAN_RESULTS: [(&str, SecurityLevel); 3] = [
    ("MAINFRAME-7", SecurityLevel::Low),
    ("QUANTUM-DB", SecurityLevel::High),
    ("SATELLITE-X", SecurityLevel::Medium),
];

pub const DECRYPTED_MESSAGES: [&str; 6] = [
    "THE CAKE IS A LIE",
    "TRUST NO ONE",
    "FOLLOW THE WHITE RABBIT",
    "THE MATRIX HAS YOU",
    "WAKE UP NEO",
    "I AM ROOT",
];

/// name, coordinates, ISP
pub const KNOWN_LOCATIONS: [(&str, &str, &str); 6] = [
    ("QUANTUM-DB", "37.7749 deg N, 122.4194 deg W", "CyberCorp Industries"),
    ("MAINFRAME-7", "40.7128 deg N, 74.0060 deg W", "MegaCorp Systems"),
    ("SATELLITE-X", "51.5074 deg N, 0.1278 deg W", "SkyNet Communications"),
    ("NEXUS-CORE", "35.6762 deg N, 139.6503 deg E", "Tech Dynamics"),
    ("CRYPTO-VAULT", "52.5200 deg N, 13.4050 deg E", "SecureMax GmbH"),
    ("DATA-CENTER", "34.0522 deg N, 118.2437 deg W", "InfoTech Solutions"),
];

pub const FALLBACK_ISPS: [&str; 3] = ["CyberCorp Industries", "TechMax Solutions", "DataFlow Systems"];

pub const HACK_SYSTEMS: u32 = 5;
pub const HACK_CREDITS: u32 = 1337;

pub const SUCCESS_PAUSE: Duration = Duration::from_secs(1);
pub const WARNING_PAUSE: Duration = Duration::from_millis(1500);

pub const SCAN: Progress = Progress::new("Scanning network", 24, Duration::from_millis(120));
pub const DECRYPT: Progress = Progress::new("Decrypting data", 26, Duration::from_millis(100));
pub const INFILTRATE: Progress = Progress::new("Bypassing security", 28, Duration::from_millis(150));
pub const HACK: Progress = Progress::new("Exploiting vulnerabilities", 30, Duration::from_millis(120));
pub const TRACE: Progress = Progress::new("Triangulating position", 25, Duration::from_millis(130));
pub const COUNTERTRACE: Progress = Progress::new("Scrambling identity", 22, Duration::from_millis(110));

/// The scripted walkthrough run by `--script demo`.
pub const DEMO_SCRIPT: [&str; 7] = [
    "scan",
    "infiltrate MAINFRAME-7",
    "hack",
    "trace QUANTUM-DB",
    "countertrace",
    "status",
    "exit",
];

pub const HELP_TEXT: &str = "Available commands:
  help                    - Show this help
  scan                    - Scan for targets
  decrypt                 - Decrypt intercepted data
  infiltrate <target>     - Infiltrate specified target
  hack                    - Execute hack sequence
  trace <target>          - Trace target location
  countertrace|evade      - Counter enemy traces
  status                  - Show system status
  clear                   - Clear terminal
  exit                    - Exit terminal";

pub fn known_location(name: &str) -> Option<(&'static str, &'static str)> {
    KNOWN_LOCATIONS
        .iter()
        .find(|(known, _, _)| *known == name)
        .map(|&(_, coordinates, isp)| (coordinates, isp))
}
