//! Scenario tests that drive the engine end to end through an in-memory
//! console.

mod display;
mod replay;
mod session;
