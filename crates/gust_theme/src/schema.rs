//! On-disk fragment schema
//!
//! These types mirror the textual configuration one-to-one. They are only
//! checked for shape here; values are validated when a fragment is turned
//! into a [`ThemeConfig`](crate::ThemeConfig).

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{DarkModeStrategy, ThemeConfig};
use crate::content::SafelistEntry;
use crate::tokens::ColorValue;

/// A mapping that keeps every entry in source order, repeats included,
/// so duplicate keys can be reported instead of silently collapsing.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RawMap<V>(pub(crate) Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for RawMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = RawMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(RawMap(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl<V: Serialize> Serialize for RawMap<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawFragment {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safelist: Vec<RawSafelistEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<RawDarkMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<RawTheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<RawPlugin>,
}

/// `"selector"` or `["selector", "[data-theme=dark]"]`
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum RawDarkMode {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum RawSafelistEntry {
    Class(String),
    Pattern(RawSafelistPattern),
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSafelistPattern {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<RawContainer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<RawMap<RawColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screens: Option<RawMap<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend: Option<RawExtend>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawExtend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<RawMap<RawColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screens: Option<RawMap<String>>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum RawColor {
    Single(String),
    Shades(RawMap<String>),
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawPlugin {
    pub name: String,
    pub selector_template: String,
}

impl From<&ThemeConfig> for RawFragment {
    fn from(config: &ThemeConfig) -> Self {
        let safelist = config
            .safelist
            .iter()
            .map(|entry| match entry {
                SafelistEntry::Class(name) => RawSafelistEntry::Class(name.clone()),
                SafelistEntry::Pattern { variants, .. } => {
                    RawSafelistEntry::Pattern(RawSafelistPattern {
                        pattern: entry.pattern_source().unwrap_or_default().to_string(),
                        variants: variants.clone(),
                    })
                }
            })
            .collect();

        let dark_mode = config.dark_mode.as_ref().map(|strategy| match strategy {
            DarkModeStrategy::Media | DarkModeStrategy::Selector(None) => {
                RawDarkMode::One(strategy.name().to_string())
            }
            DarkModeStrategy::Selector(Some(selector)) => {
                RawDarkMode::Many(vec![strategy.name().to_string(), selector.clone()])
            }
        });

        let colors: Vec<_> = config
            .colors
            .iter()
            .map(|(name, value)| {
                let raw = match value {
                    ColorValue::Single(color) => RawColor::Single(color.to_string()),
                    ColorValue::Shades(shades) => RawColor::Shades(RawMap(
                        shades
                            .iter()
                            .map(|(shade, color)| (shade.clone(), color.to_string()))
                            .collect(),
                    )),
                };
                (name.to_string(), raw)
            })
            .collect();

        let screens: Vec<_> = config
            .screens
            .iter()
            .map(|(name, length)| (name.to_string(), length.to_string()))
            .collect();

        let theme = RawTheme {
            container: (config.container.center.is_some()
                || config.container.padding.is_some())
            .then(|| RawContainer {
                center: config.container.center,
                padding: config.container.padding.map(|length| length.to_string()),
            }),
            colors: (!colors.is_empty()).then_some(RawMap(colors)),
            screens: None,
            extend: (!screens.is_empty()).then(|| RawExtend {
                colors: None,
                screens: Some(RawMap(screens)),
            }),
        };
        let has_theme =
            theme.container.is_some() || theme.colors.is_some() || theme.extend.is_some();

        RawFragment {
            content: config
                .content
                .iter()
                .map(|glob| glob.pattern().to_string())
                .collect(),
            safelist,
            dark_mode,
            theme: has_theme.then_some(theme),
            plugins: config
                .variants
                .iter()
                .map(|plugin| RawPlugin {
                    name: plugin.name().to_string(),
                    selector_template: plugin.selector_template().to_string(),
                })
                .collect(),
        }
    }
}
