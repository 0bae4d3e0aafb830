//! # Masterhacker Common
//!
//! Rendering decisions shared by the engine and the command-line front-end.
//!
//! * **[`display`]**: the user's width and Unicode preferences.
//! * **[`terminal`]**: probing the hosting terminal, resolving tiers and
//!   looking up the pre-authored panes.
//! * **[`config`]**: run-wide settings.

pub mod config;
pub mod display;
pub mod terminal;
