//! Terminal capability detection and display asset selection.

pub mod assets;
pub mod probe;
pub mod tier;
