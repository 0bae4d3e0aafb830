//! Simulation core: the session model, the progress animator and the
//! command engine, all writing through the [`console::Console`] port.

pub mod console;
pub mod engine;
pub mod error;
pub mod progress;
pub mod session;
