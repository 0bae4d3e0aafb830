use std::time::Duration;

use crate::display::{DisplayMode, UnicodeMode, WidthMode};

/// Run-wide settings assembled from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub unicode: UnicodeMode,
    pub width: WidthMode,
    /// Whether animation and pane pauses actually sleep.
    ///
    /// Does not change a single byte of output, only its timing.
    pub pacing: Pacing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pacing {
    #[default]
    Realtime,
    Instant,
}

impl Config {
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::new(self.unicode, self.width)
    }
}

impl Pacing {
    /// Blocks for `delay` unless pauses are disabled.
    pub fn wait(self, delay: Duration) {
        if self == Pacing::Realtime && !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
