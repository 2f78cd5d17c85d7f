//! CSS lengths for breakpoints and other size tokens

use std::fmt;
use std::str::FromStr;

use nom::bytes::complete::take_while;
use nom::combinator::all_consuming;
use nom::IResult;
use thiserror::Error;

use crate::number::number;

/// Units accepted in a [`Length`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Vw,
    Vh,
    Ch,
    Ex,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
}

impl LengthUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Ch => "ch",
            Self::Ex => "ex",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
        }
    }

    /// Case-insensitive unit lookup
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix.to_ascii_lowercase().as_str() {
            "px" => Self::Px,
            "em" => Self::Em,
            "rem" => Self::Rem,
            "vw" => Self::Vw,
            "vh" => Self::Vh,
            "ch" => Self::Ch,
            "ex" => Self::Ex,
            "cm" => Self::Cm,
            "mm" => Self::Mm,
            "in" => Self::In,
            "pt" => Self::Pt,
            "pc" => Self::Pc,
            _ => return None,
        };
        Some(unit)
    }

    /// Pixels per unit for absolute units, assuming a 16px root font size
    /// for `em`/`rem`. Viewport and font-relative units other than those
    /// have no fixed size.
    pub fn px_per_unit(self) -> Option<f64> {
        match self {
            Self::Px => Some(1.0),
            Self::Em | Self::Rem => Some(16.0),
            Self::In => Some(96.0),
            Self::Cm => Some(96.0 / 2.54),
            Self::Mm => Some(96.0 / 25.4),
            Self::Pt => Some(96.0 / 72.0),
            Self::Pc => Some(16.0),
            Self::Vw | Self::Vh | Self::Ch | Self::Ex => None,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positive length such as `2000px` or `48rem`.
///
/// Values are kept in double precision so any integer pixel width a
/// breakpoint can name is written back unchanged. Units are normalized to
/// lowercase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Result<Self, ParseLengthError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ParseLengthError::NotPositive(format!("{value}{unit}")));
        }
        Ok(Self { value, unit })
    }

    pub fn px(value: f64) -> Result<Self, ParseLengthError> {
        Self::new(value, LengthUnit::Px)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Size in pixels when the unit has a fixed size
    pub fn to_px(&self) -> Option<f64> {
        self.unit.px_per_unit().map(|scale| self.value * scale)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Length {
    type Err = ParseLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_length(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLengthError {
    #[error("empty length value")]
    Empty,

    #[error("length `{0}` has no unit (expected e.g. `2000px`)")]
    MissingUnit(String),

    #[error("length `{0}` has an unknown unit")]
    UnknownUnit(String),

    #[error("length `{0}` must be positive")]
    NotPositive(String),

    #[error("invalid length `{0}`")]
    Invalid(String),
}

fn number_and_suffix(input: &str) -> IResult<&str, (f64, &str)> {
    let (input, value) = number(input)?;
    let (input, suffix) = take_while(|c: char| c.is_ascii_alphabetic())(input)?;
    Ok((input, (value, suffix)))
}

/// Parse a length: a positive decimal number immediately followed by a unit
pub fn parse_length(input: &str) -> Result<Length, ParseLengthError> {
    let source = input.trim();
    if source.is_empty() {
        return Err(ParseLengthError::Empty);
    }

    let (_, (value, suffix)) = all_consuming(number_and_suffix)(source)
        .map_err(|_| ParseLengthError::Invalid(source.to_string()))?;

    if suffix.is_empty() {
        return Err(ParseLengthError::MissingUnit(source.to_string()));
    }
    let unit = LengthUnit::from_suffix(suffix)
        .ok_or_else(|| ParseLengthError::UnknownUnit(source.to_string()))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(ParseLengthError::NotPositive(source.to_string()));
    }

    Ok(Length { value, unit })
}
