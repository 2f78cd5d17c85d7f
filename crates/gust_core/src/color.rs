//! CSS color values
//!
//! [`CssColor`] keeps the exact text a color was written with next to its
//! resolved [`Rgba`] value. Keywords such as `currentColor` have no fixed
//! value and resolve to `None`.

use std::fmt;
use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_while1};
use nom::character::complete::{char, multispace0, multispace1, one_of};
use nom::combinator::{all_consuming, opt, value};
use nom::multi::many0;
use nom::sequence::{delimited, pair};
use nom::IResult;
use thiserror::Error;

use crate::named::lookup_named_color;
use crate::number::number;

/// RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build from `0xRRGGBBAA`
    pub fn from_hex_rgba(hex: u32) -> Self {
        Self::from_hex(hex >> 8).with_alpha((hex & 0xFF) as f32 / 255.0)
    }

    /// Convert from HSL. Hue in degrees, saturation and lightness in `0.0..=1.0`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 360.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let m1 = l * 2.0 - m2;

        Self::rgb(
            hue_to_channel(m1, m2, h + 1.0 / 3.0),
            hue_to_channel(m1, m2, h),
            hue_to_channel(m1, m2, h - 1.0 / 3.0),
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Pack into `0xRRGGBB`, dropping alpha
    pub fn to_hex(&self) -> u32 {
        (to_byte(self.r) << 16) | (to_byte(self.g) << 8) | to_byte(self.b)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

fn to_byte(channel: f32) -> u32 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u32
}

fn hue_to_channel(m1: f32, m2: f32, h: f32) -> f32 {
    let h = if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    };

    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

/// How a color was written
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorSyntax {
    Hex,
    Named,
    RgbFunction,
    HslFunction,
    /// `currentColor` or `inherit`
    Keyword,
}

/// A validated CSS color value
#[derive(Clone, Debug, PartialEq)]
pub struct CssColor {
    source: String,
    syntax: ColorSyntax,
    rgba: Option<Rgba>,
}

impl CssColor {
    /// Build a hex color from `0xRRGGBB`, written as lowercase `#rrggbb`
    pub fn from_hex(hex: u32) -> Self {
        let hex = hex & 0xFF_FFFF;
        Self {
            source: format!("#{hex:06x}"),
            syntax: ColorSyntax::Hex,
            rgba: Some(Rgba::from_hex(hex)),
        }
    }

    pub fn transparent() -> Self {
        Self {
            source: "transparent".to_string(),
            syntax: ColorSyntax::Named,
            rgba: Some(Rgba::TRANSPARENT),
        }
    }

    pub fn current_color() -> Self {
        Self {
            source: "currentColor".to_string(),
            syntax: ColorSyntax::Keyword,
            rgba: None,
        }
    }

    /// The text the color was written as (trimmed)
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn syntax(&self) -> ColorSyntax {
        self.syntax
    }

    /// Resolved value, `None` for keywords that depend on context
    pub fn rgba(&self) -> Option<Rgba> {
        self.rgba
    }

    pub fn is_keyword(&self) -> bool {
        self.syntax == ColorSyntax::Keyword
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for CssColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color value")]
    Empty,

    #[error("invalid hex color `{0}` (expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA)")]
    InvalidHex(String),

    #[error("invalid color function `{0}`")]
    InvalidFunction(String),

    #[error("unrecognized color `{0}` (expected hex, a CSS color name, rgb() or hsl())")]
    Unrecognized(String),
}

/// Parse a CSS color value
pub fn parse_color(input: &str) -> Result<CssColor, ParseColorError> {
    let source = input.trim();
    if source.is_empty() {
        return Err(ParseColorError::Empty);
    }

    let make = |syntax, rgba| CssColor {
        source: source.to_string(),
        syntax,
        rgba,
    };

    if source.starts_with('#') {
        let (_, rgba) = all_consuming(hex_color)(source)
            .map_err(|_| ParseColorError::InvalidHex(source.to_string()))?;
        return Ok(make(ColorSyntax::Hex, Some(rgba)));
    }

    let lower = source.to_ascii_lowercase();

    if lower.starts_with("rgb") || lower.starts_with("hsl") {
        let invalid = || ParseColorError::InvalidFunction(source.to_string());
        let (_, (kind, args)) = all_consuming(color_function)(source).map_err(|_| invalid())?;
        let rgba = kind.evaluate(&args).ok_or_else(invalid)?;
        let syntax = match kind {
            FunctionKind::Rgb => ColorSyntax::RgbFunction,
            FunctionKind::Hsl => ColorSyntax::HslFunction,
        };
        return Ok(make(syntax, Some(rgba)));
    }

    match lower.as_str() {
        "currentcolor" | "inherit" => return Ok(make(ColorSyntax::Keyword, None)),
        "transparent" => return Ok(make(ColorSyntax::Named, Some(Rgba::TRANSPARENT))),
        _ => {}
    }

    lookup_named_color(&lower)
        .map(|hex| make(ColorSyntax::Named, Some(Rgba::from_hex(hex))))
        .ok_or_else(|| ParseColorError::Unrecognized(source.to_string()))
}

// ============================================================================
// Hex
// ============================================================================

/// Parse hex color: #RGB, #RGBA, #RRGGBB or #RRGGBBAA
fn hex_color(input: &str) -> IResult<&str, Rgba> {
    let (rest, _) = char('#')(input)?;
    let (rest, digits) = take_while1(|c: char| c.is_ascii_hexdigit())(rest)?;

    let length_error = || {
        nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::LengthValue,
        ))
    };

    let packed = u32::from_str_radix(digits, 16).map_err(|_| length_error())?;
    let rgba = match digits.len() {
        3 => Rgba::from_hex(expand_short_hex(packed, 3)),
        4 => Rgba::from_hex_rgba(expand_short_hex(packed, 4)),
        6 => Rgba::from_hex(packed),
        8 => Rgba::from_hex_rgba(packed),
        _ => return Err(length_error()),
    };

    Ok((rest, rgba))
}

/// Expand `0xRGB` to `0xRRGGBB` (or `0xRGBA` to `0xRRGGBBAA`)
fn expand_short_hex(packed: u32, nibbles: u32) -> u32 {
    (0..nibbles).rev().fold(0, |acc, i| {
        let nibble = (packed >> (i * 4)) & 0xF;
        (acc << 8) | (nibble * 0x11)
    })
}

// ============================================================================
// rgb() / hsl()
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
enum FunctionKind {
    Rgb,
    Hsl,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Unit {
    Number,
    Percent,
    Deg,
}

#[derive(Clone, Copy, Debug)]
struct Component {
    number: f32,
    unit: Unit,
}

/// Arguments of a color function with the separator preceding each one
/// after the first (`,`, `/` or `' '` for plain whitespace).
#[derive(Debug)]
struct Arguments {
    first: Component,
    rest: Vec<(char, Component)>,
}

impl Arguments {
    /// Split into three channels and an optional alpha.
    ///
    /// Legacy syntax separates everything with commas; modern syntax uses
    /// whitespace between channels and `/` before alpha.
    fn split(&self) -> Option<([Component; 3], Option<Component>)> {
        match self.rest.as_slice() {
            [(s1, c2), (s2, c3)] if s1 == s2 && *s1 != '/' => Some(([self.first, *c2, *c3], None)),
            [(s1, c2), (s2, c3), (s3, alpha)]
                if s1 == s2 && matches!((*s1, *s3), (',', ',') | (' ', '/')) =>
            {
                Some(([self.first, *c2, *c3], Some(*alpha)))
            }
            _ => None,
        }
    }
}

impl FunctionKind {
    fn evaluate(self, args: &Arguments) -> Option<Rgba> {
        let ([c1, c2, c3], alpha) = args.split()?;
        let alpha = match alpha {
            Some(component) => fraction(component, 1.0)?,
            None => 1.0,
        };

        let rgba = match self {
            FunctionKind::Rgb => Rgba::rgb(
                fraction(c1, 255.0)?,
                fraction(c2, 255.0)?,
                fraction(c3, 255.0)?,
            ),
            FunctionKind::Hsl => {
                let hue = match c1.unit {
                    Unit::Number | Unit::Deg if c1.number.is_finite() => c1.number,
                    _ => return None,
                };
                // Bare numbers are accepted as percentages for saturation/lightness
                Rgba::from_hsl(hue, fraction(c2, 100.0)?, fraction(c3, 100.0)?)
            }
        };

        Some(rgba.with_alpha(alpha))
    }
}

/// Normalize a channel to `0.0..=1.0`; bare numbers are divided by `scale`
fn fraction(component: Component, scale: f32) -> Option<f32> {
    if !component.number.is_finite() {
        return None;
    }
    let value = match component.unit {
        Unit::Number => component.number / scale,
        Unit::Percent => component.number / 100.0,
        Unit::Deg => return None,
    };
    Some(value.clamp(0.0, 1.0))
}

fn color_function(input: &str) -> IResult<&str, (FunctionKind, Arguments)> {
    let (input, kind) = alt((
        value(
            FunctionKind::Rgb,
            alt((tag_no_case("rgba"), tag_no_case("rgb"))),
        ),
        value(
            FunctionKind::Hsl,
            alt((tag_no_case("hsla"), tag_no_case("hsl"))),
        ),
    ))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, args) = function_arguments(input)?;
    Ok((input, (kind, args)))
}

fn function_arguments(input: &str) -> IResult<&str, Arguments> {
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, first) = component(input)?;
    let (input, rest) = many0(pair(separator, component))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Arguments { first, rest }))
}

fn component(input: &str) -> IResult<&str, Component> {
    let (input, number) = number(input)?;
    let (input, unit) = opt(alt((
        value(Unit::Percent, tag("%")),
        value(Unit::Deg, tag_no_case("deg")),
    )))(input)?;
    Ok((
        input,
        Component {
            number: number as f32,
            unit: unit.unwrap_or(Unit::Number),
        },
    ))
}

fn separator(input: &str) -> IResult<&str, char> {
    alt((
        delimited(multispace0, one_of(",/"), multispace0),
        value(' ', multispace1),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex_of(input: &str) -> u32 {
        parse_color(input).unwrap().rgba().unwrap().to_hex()
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(hex_of("#FFCD00"), 0xFFCD00);
        assert_eq!(hex_of("#fc0"), 0xFFCC00);
        assert_eq!(hex_of("  #18181b "), 0x18181B);

        let with_alpha = parse_color("#ff000080").unwrap().rgba().unwrap();
        assert_eq!(with_alpha.to_hex(), 0xFF0000);
        assert!((with_alpha.a - 128.0 / 255.0).abs() < 1e-6);

        let short_alpha = parse_color("#f008").unwrap().rgba().unwrap();
        assert_eq!(short_alpha.to_hex(), 0xFF0000);
        assert!((short_alpha.a - 0x88 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn reject_bad_hex() {
        for input in ["#", "#12", "#12345", "#1234567", "#ggg", "#fff fff"] {
            assert!(
                matches!(parse_color(input), Err(ParseColorError::InvalidHex(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn source_is_preserved() {
        let color = parse_color(" #FFCD00 ").unwrap();
        assert_eq!(color.source(), "#FFCD00");
        assert_eq!(color.to_string(), "#FFCD00");
        assert_eq!(color.syntax(), ColorSyntax::Hex);
    }

    #[test]
    fn from_hex_matches_parsed() {
        assert_eq!(CssColor::from_hex(0xFAFAFA), parse_color("#fafafa").unwrap());
        assert_eq!(CssColor::transparent(), parse_color("transparent").unwrap());
        assert_eq!(CssColor::current_color(), parse_color("currentColor").unwrap());
    }

    #[test]
    fn parse_named_and_keywords() {
        assert_eq!(hex_of("RebeccaPurple"), 0x663399);
        assert_eq!(hex_of("white"), 0xFFFFFF);

        let current = parse_color("currentColor").unwrap();
        assert!(current.is_keyword());
        assert_eq!(current.rgba(), None);

        let inherit = parse_color("inherit").unwrap();
        assert_eq!(inherit.syntax(), ColorSyntax::Keyword);

        let transparent = parse_color("transparent").unwrap();
        assert_eq!(transparent.rgba(), Some(Rgba::TRANSPARENT));

        assert_eq!(
            parse_color("notacolor"),
            Err(ParseColorError::Unrecognized("notacolor".to_string()))
        );
        assert_eq!(parse_color("   "), Err(ParseColorError::Empty));
    }

    #[test]
    fn parse_rgb_functions() {
        assert_eq!(hex_of("rgb(255, 205, 0)"), 0xFFCD00);
        assert_eq!(hex_of("RGB(255,205,0)"), 0xFFCD00);
        assert_eq!(hex_of("rgb(255 205 0)"), 0xFFCD00);
        assert_eq!(hex_of("rgb(100%, 0%, 0%)"), 0xFF0000);

        let legacy = parse_color("rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(legacy.syntax(), ColorSyntax::RgbFunction);
        assert_eq!(legacy.rgba().unwrap().a, 0.5);

        let modern = parse_color("rgb(0 0 0 / 25%)").unwrap();
        assert_eq!(modern.rgba().unwrap().a, 0.25);
    }

    #[test]
    fn parse_hsl_functions() {
        assert_eq!(hex_of("hsl(0, 100%, 50%)"), 0xFF0000);
        assert_eq!(hex_of("hsl(120deg 100% 50%)"), 0x00FF00);
        assert_eq!(hex_of("hsl(240, 100%, 50%)"), 0x0000FF);
        assert_eq!(hex_of("hsl(0, 0%, 100%)"), 0xFFFFFF);

        let translucent = parse_color("hsla(0, 0%, 0%, 0.4)").unwrap();
        assert_eq!(translucent.syntax(), ColorSyntax::HslFunction);
        assert!((translucent.rgba().unwrap().a - 0.4).abs() < 1e-6);
    }

    #[test]
    fn reject_malformed_functions() {
        for input in [
            "rgb(1, 2)",
            "rgb(1, 2, 3, 4, 5)",
            "rgb(1 2 3 4)",
            "rgb(1, 2 3)",
            "rgb(1, 2, 3",
            "rgb(a, b, c)",
            "rgb(10deg, 0, 0)",
            "hsl(10%, 50%, 50%)",
            "hsl(0 50% 50%) trailing",
        ] {
            assert!(
                matches!(parse_color(input), Err(ParseColorError::InvalidFunction(_))),
                "{input} should be rejected"
            );
        }
    }
}
