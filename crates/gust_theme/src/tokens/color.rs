//! Color tokens for theming

use gust_core::CssColor;
use indexmap::IndexMap;

/// Shade key used when a class names a scale without a shade (`bg-gray`)
pub const DEFAULT_SHADE: &str = "DEFAULT";

/// Value of one color token
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// A single color (`primary = "#FFCD00"`)
    Single(CssColor),
    /// A shade scale (`gray = { 50 = "#fafafa", ..., 950 = "#09090b" }`)
    Shades(IndexMap<String, CssColor>),
}

impl ColorValue {
    /// Build a shade scale from `(shade, 0xRRGGBB)` pairs
    pub fn scale(shades: &[(&str, u32)]) -> Self {
        Self::Shades(
            shades
                .iter()
                .map(|(shade, hex)| (shade.to_string(), CssColor::from_hex(*hex)))
                .collect(),
        )
    }

    /// Look up a shade; a single color answers only to [`DEFAULT_SHADE`]
    pub fn shade(&self, shade: &str) -> Option<&CssColor> {
        match self {
            Self::Single(color) => (shade == DEFAULT_SHADE).then_some(color),
            Self::Shades(shades) => shades.get(shade),
        }
    }

    /// Shade keys in declaration order (empty for single colors)
    pub fn shade_keys(&self) -> impl Iterator<Item = &str> {
        let keys = match self {
            Self::Single(_) => None,
            Self::Shades(shades) => Some(shades.keys().map(String::as_str)),
        };
        keys.into_iter().flatten()
    }

    pub fn is_scale(&self) -> bool {
        matches!(self, Self::Shades(_))
    }
}

/// Ordered set of named color tokens
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    tokens: IndexMap<String, ColorValue>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, replacing any previous value of the same name wholesale.
    /// A replaced token keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: ColorValue) -> Option<ColorValue> {
        self.tokens.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&ColorValue> {
        self.tokens.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Resolve a class-style color reference: `primary`, `gray-500`,
    /// or `gray` for a scale's `DEFAULT` shade.
    pub fn lookup(&self, reference: &str) -> Option<&CssColor> {
        match self.tokens.get(reference) {
            Some(ColorValue::Single(color)) => return Some(color),
            Some(value @ ColorValue::Shades(_)) => return value.shade(DEFAULT_SHADE),
            None => {}
        }

        let (name, shade) = reference.rsplit_once('-')?;
        self.tokens.get(name)?.shade(shade)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.tokens.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Overlay `other` onto this palette. Colliding tokens are replaced as a
    /// whole (no shade-level merge); new tokens are appended in order.
    pub fn extend_from(&mut self, other: &Palette) {
        for (name, value) in &other.tokens {
            if let Some(previous) = self.tokens.insert(name.clone(), value.clone()) {
                if previous != *value {
                    tracing::trace!("color token `{}` replaced", name);
                }
            }
        }
    }
}

impl FromIterator<(String, ColorValue)> for Palette {
    fn from_iter<I: IntoIterator<Item = (String, ColorValue)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gray() -> ColorValue {
        ColorValue::scale(&[("50", 0xFAFAFA), ("500", 0x71717A), ("900", 0x18181B)])
    }

    #[test]
    fn lookup_single_and_shades() {
        let mut palette = Palette::new();
        palette.insert("primary", ColorValue::Single(CssColor::from_hex(0xFFCD00)));
        palette.insert("gray", gray());
        palette.insert("light-blue", ColorValue::Single(CssColor::from_hex(0x0EA5E9)));

        assert_eq!(palette.lookup("primary").unwrap().source(), "#ffcd00");
        assert_eq!(palette.lookup("gray-500").unwrap().source(), "#71717a");
        assert_eq!(palette.lookup("light-blue").unwrap().source(), "#0ea5e9");
        assert!(palette.lookup("gray-950").is_none());
        assert!(palette.lookup("gray").is_none());
        assert!(palette.lookup("primary-500").is_none());
    }

    #[test]
    fn default_shade() {
        let mut shades = IndexMap::new();
        shades.insert(DEFAULT_SHADE.to_string(), CssColor::from_hex(0x3B82F6));
        shades.insert("50".to_string(), CssColor::from_hex(0xEFF6FF));
        let mut palette = Palette::new();
        palette.insert("blue", ColorValue::Shades(shades));

        assert_eq!(palette.lookup("blue").unwrap().source(), "#3b82f6");
        assert_eq!(palette.lookup("blue-DEFAULT").unwrap().source(), "#3b82f6");
    }

    #[test]
    fn extend_replaces_whole_token() {
        let mut base = Palette::new();
        base.insert("gray", gray());
        base.insert("primary", ColorValue::Single(CssColor::from_hex(0x000000)));

        let mut overlay = Palette::new();
        overlay.insert(
            "gray",
            ColorValue::scale(&[("50", 0x000000)]),
        );
        overlay.insert("accent", ColorValue::Single(CssColor::from_hex(0xFF0000)));

        base.extend_from(&overlay);

        let gray = base.get("gray").unwrap();
        assert_eq!(gray.shade_keys().collect::<Vec<_>>(), vec!["50"]);
        assert_eq!(gray.shade("50").unwrap().source(), "#000000");
        assert_eq!(base.names().collect::<Vec<_>>(), vec!["gray", "primary", "accent"]);
    }
}
