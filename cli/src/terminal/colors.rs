use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MAC_ADDR: Color = Color::BrightCyan;
pub const VENDOR: Color = Color::Magenta;
pub const GOOD: Color = Color::Green;
pub const BAD: Color = Color::Red;
