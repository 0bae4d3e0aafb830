//! # Progress Animator
//!
//! A progress indicator expressed as a finite sequence of frame strings.
//! [`Progress::frames`] is pure and can be iterated any number of times;
//! [`Progress::run`] hands the frames to a [`Console`] together with the
//! pauses between them, so only the console decides what "waiting" means.

use std::time::Duration;

use masterhacker_common::terminal::tier::ProgressGlyphs;

use crate::console::{Console, Tone};

/// Inner width of the frame borders.
pub const BORDER_WIDTH: usize = 52;

/// Pause after the closing border.
pub const TRAILING_PAUSE: Duration = Duration::from_millis(200);

const DOTS: [&str; 3] = ["...", "..", "."];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    label: &'static str,
    total_steps: usize,
    step_delay: Duration,
}

impl Progress {
    pub const fn new(label: &'static str, total_steps: usize, step_delay: Duration) -> Self {
        Self {
            label,
            total_steps,
            step_delay,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    pub fn frames(&self, glyphs: ProgressGlyphs) -> Frames {
        Frames {
            glyphs,
            total: self.total_steps,
            next: 0,
        }
    }

    /// Label, top border, every frame with its delay, closing border.
    pub fn run<C>(&self, console: &mut C)
    where
        C: Console + ?Sized,
    {
        let border = border();
        console.line(Tone::Plain, "");
        console.line(Tone::Info, &format!("[{}]", self.label.to_uppercase()));
        console.line(Tone::Plain, &border);

        for frame in self.frames(console.glyphs()) {
            console.frame(&frame);
            console.pause(self.step_delay);
        }

        console.line(Tone::Plain, "");
        console.line(Tone::Plain, &border);
        console.pause(TRAILING_PAUSE);
    }
}

pub fn border() -> String {
    format!("+{}+", "-".repeat(BORDER_WIDTH))
}

/// Frames `0..=total`. A zero-step progress yields the 100% frame only.
#[derive(Clone, Debug)]
pub struct Frames {
    glyphs: ProgressGlyphs,
    total: usize,
    next: usize,
}

impl Iterator for Frames {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len() == 0 {
            return None;
        }
        let step = self.next;
        self.next += 1;
        Some(render_frame(self.glyphs, step, self.total))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Frames {
    fn len(&self) -> usize {
        let count = self.total + 1;
        count.saturating_sub(self.next)
    }
}

fn render_frame(glyphs: ProgressGlyphs, step: usize, total: usize) -> String {
    let (filled, empty, percent) = if total == 0 {
        (0, 0, 100)
    } else {
        (step, total - step, step * 100 / total)
    };

    let bar: String = std::iter::repeat_n(glyphs.filled, filled)
        .chain(std::iter::repeat_n(glyphs.empty, empty))
        .collect();
    let dots = DOTS[step % DOTS.len()];

    format!("| [{bar}] {percent:3}% {dots:<3} |")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
