use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const INFO: Color = Color::BrightCyan;
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const ALERT: Color = Color::Red;
pub const SEPARATOR: Color = Color::BrightBlack;
