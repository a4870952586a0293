use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::TrueColor { r: 150, g: 230, b: 150 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 230, g: 180, b: 120 };
pub const BROADCAST: Color = Color::Yellow;
