//! Built-in baseline configuration

use gust_core::CssColor;

use crate::config::{ContainerPolicy, DarkModeStrategy, ThemeConfig};
use crate::tokens::{ColorValue, Palette};

const ZINC: [(&str, u32); 11] = [
    ("50", 0xFAFAFA),
    ("100", 0xF4F4F5),
    ("200", 0xE4E4E7),
    ("300", 0xD4D4D8),
    ("400", 0xA1A1AA),
    ("500", 0x71717A),
    ("600", 0x52525B),
    ("700", 0x3F3F46),
    ("800", 0x27272A),
    ("900", 0x18181B),
    ("950", 0x09090B),
];

const NEUTRAL: [(&str, u32); 11] = [
    ("50", 0xFAFAFA),
    ("100", 0xF5F5F5),
    ("200", 0xE5E5E5),
    ("300", 0xD4D4D4),
    ("400", 0xA3A3A3),
    ("500", 0x737373),
    ("600", 0x525252),
    ("700", 0x404040),
    ("800", 0x262626),
    ("900", 0x171717),
    ("950", 0x0A0A0A),
];

const BLUE: [(&str, u32); 11] = [
    ("50", 0xEFF6FF),
    ("100", 0xDBEAFE),
    ("200", 0xBFDBFE),
    ("300", 0x93C5FD),
    ("400", 0x60A5FA),
    ("500", 0x3B82F6),
    ("600", 0x2563EB),
    ("700", 0x1D4ED8),
    ("800", 0x1E40AF),
    ("900", 0x1E3A8A),
    ("950", 0x172554),
];

const RED: [(&str, u32); 11] = [
    ("50", 0xFEF2F2),
    ("100", 0xFEE2E2),
    ("200", 0xFECACA),
    ("300", 0xFCA5A5),
    ("400", 0xF87171),
    ("500", 0xEF4444),
    ("600", 0xDC2626),
    ("700", 0xB91C1C),
    ("800", 0x991B1B),
    ("900", 0x7F1D1D),
    ("950", 0x450A0A),
];

const GREEN: [(&str, u32); 11] = [
    ("50", 0xF0FDF4),
    ("100", 0xDCFCE7),
    ("200", 0xBBF7D0),
    ("300", 0x86EFAC),
    ("400", 0x4ADE80),
    ("500", 0x22C55E),
    ("600", 0x16A34A),
    ("700", 0x15803D),
    ("800", 0x166534),
    ("900", 0x14532D),
    ("950", 0x052E16),
];

const YELLOW: [(&str, u32); 11] = [
    ("50", 0xFEFCE8),
    ("100", 0xFEF9C3),
    ("200", 0xFEF08A),
    ("300", 0xFDE047),
    ("400", 0xFACC15),
    ("500", 0xEAB308),
    ("600", 0xCA8A04),
    ("700", 0xA16207),
    ("800", 0x854D0E),
    ("900", 0x713F12),
    ("950", 0x422006),
];

const ORANGE: [(&str, u32); 11] = [
    ("50", 0xFFF7ED),
    ("100", 0xFFEDD5),
    ("200", 0xFED7AA),
    ("300", 0xFDBA74),
    ("400", 0xFB923C),
    ("500", 0xF97316),
    ("600", 0xEA580C),
    ("700", 0xC2410C),
    ("800", 0x9A3412),
    ("900", 0x7C2D12),
    ("950", 0x431407),
];

/// The default color palette.
///
/// `gray` is the zinc scale; `current` maps to `currentColor`.
pub fn default_palette() -> Palette {
    let mut palette = Palette::new();
    palette.insert("transparent", ColorValue::Single(CssColor::transparent()));
    palette.insert("current", ColorValue::Single(CssColor::current_color()));
    palette.insert("black", ColorValue::Single(CssColor::from_hex(0x000000)));
    palette.insert("white", ColorValue::Single(CssColor::from_hex(0xFFFFFF)));
    palette.insert("gray", ColorValue::scale(&ZINC));
    palette.insert("neutral", ColorValue::scale(&NEUTRAL));
    palette.insert("blue", ColorValue::scale(&BLUE));
    palette.insert("red", ColorValue::scale(&RED));
    palette.insert("green", ColorValue::scale(&GREEN));
    palette.insert("yellow", ColorValue::scale(&YELLOW));
    palette.insert("orange", ColorValue::scale(&ORANGE));
    palette
}

/// Baseline configuration every resolution starts from: the default
/// palette, `media` dark mode, an uncentered container and nothing else.
pub fn load_default() -> ThemeConfig {
    ThemeConfig {
        dark_mode: Some(DarkModeStrategy::Media),
        container: ContainerPolicy {
            center: Some(false),
            padding: None,
        },
        colors: default_palette(),
        ..ThemeConfig::empty()
    }
}
