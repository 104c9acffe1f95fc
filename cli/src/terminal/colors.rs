use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const SECONDARY: Color = Color::TrueColor { r: 180, g: 140, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::TrueColor { r: 110, g: 110, b: 110 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };

pub const PORT_NUMBER: Color = Color::TrueColor { r: 90, g: 230, b: 160 };
pub const PORT_NEW: Color = Color::TrueColor { r: 255, g: 95, b: 95 };
pub const PORT_KNOWN: Color = Color::TrueColor { r: 140, g: 200, b: 140 };
pub const PORT_CLOSED: Color = Color::TrueColor { r: 255, g: 170, b: 60 };
