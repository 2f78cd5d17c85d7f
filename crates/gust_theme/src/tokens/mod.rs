//! Design tokens exposed to the generator
//!
//! - Colors: a palette of single colors and shade scales
//! - Screens: named responsive breakpoints (minimum widths)

mod color;
mod screen;

pub use color::*;
pub use screen::*;
