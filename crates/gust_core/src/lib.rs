//! Gust Core Value Types
//!
//! Value types shared by the Gust configuration model:
//!
//! - **Colors**: [`CssColor`] accepts hex (`#RGB`, `#RGBA`, `#RRGGBB`,
//!   `#RRGGBBAA`), CSS named colors, `rgb()`/`rgba()`, `hsl()`/`hsla()` and
//!   the `currentColor`/`inherit` keywords
//! - **Lengths**: [`Length`] is a positive number followed by a CSS unit
//!
//! A [`CssColor`] remembers the text it was parsed from and is emitted back
//! exactly as written. A [`Length`] is normalized: the number is written in
//! its shortest form and the unit in lowercase (`1.50EM` becomes `1.5em`),
//! and parsing that output yields an equal value.
//!
//! # Example
//!
//! ```rust
//! use gust_core::{CssColor, Length, LengthUnit};
//!
//! let primary: CssColor = "#FFCD00".parse().unwrap();
//! assert_eq!(primary.rgba().map(|c| c.to_hex()), Some(0xFFCD00));
//!
//! let ultrawide: Length = "2000px".parse().unwrap();
//! assert_eq!(ultrawide.unit(), LengthUnit::Px);
//! assert!("2000".parse::<Length>().is_err());
//!
//! let em: Length = "1.50EM".parse().unwrap();
//! assert_eq!(em.to_string(), "1.5em");
//! ```

pub mod color;
pub mod length;
mod named;
mod number;

pub use color::{parse_color, ColorSyntax, CssColor, ParseColorError, Rgba};
pub use length::{parse_length, Length, LengthUnit, ParseLengthError};
