//! Configuration fragments: where they come from and how they are validated

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use gust_core::{CssColor, Length};
use rustc_hash::FxHashMap;
use serde_path_to_error::Segment;
use tracing::debug;

use crate::config::{ContainerPolicy, DarkModeStrategy, ThemeConfig};
use crate::content::{union_into, ContentGlob, SafelistEntry};
use crate::error::{ConfigError, Result};
use crate::schema::{
    RawColor, RawDarkMode, RawFragment, RawMap, RawPlugin, RawSafelistEntry, RawTheme,
};
use crate::tokens::{Breakpoints, ColorValue, Palette};
use crate::variant::{VariantPlugin, VariantSet, SELECTOR_PLACEHOLDER};

/// Text format of a fragment
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FragmentFormat {
    Json,
    Toml,
}

impl FragmentFormat {
    /// Pick a format from a file extension (`.json`, `.toml`)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for FragmentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Toml => f.write_str("toml"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum FragmentSource {
    Inline { format: FragmentFormat, text: String },
    File(PathBuf),
}

/// One named configuration source
#[derive(Clone, Debug)]
pub struct Fragment {
    name: String,
    source: FragmentSource,
}

impl Fragment {
    pub fn json(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::inline(name, FragmentFormat::Json, text)
    }

    pub fn toml(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::inline(name, FragmentFormat::Toml, text)
    }

    pub fn inline(name: impl Into<String>, format: FragmentFormat, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: FragmentSource::Inline {
                format,
                text: text.into(),
            },
        }
    }

    /// A fragment read from disk when parsed; named after its path
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            source: FragmentSource::File(path),
        }
    }

    /// Identifier used in error messages
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &FragmentSource {
        &self.source
    }

    fn read(&self) -> Result<(FragmentFormat, Cow<'_, str>)> {
        match &self.source {
            FragmentSource::Inline { format, text } => Ok((*format, Cow::Borrowed(text.as_str()))),
            FragmentSource::File(path) => {
                let format = FragmentFormat::from_path(path).ok_or_else(|| {
                    ConfigError::Malformed {
                        fragment: self.name.clone(),
                        path: String::new(),
                        reason: "unsupported file extension (expected .json or .toml)"
                            .to_string(),
                    }
                })?;
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    fragment: self.name.clone(),
                    source,
                })?;
                Ok((format, Cow::Owned(text)))
            }
        }
    }
}

/// Parse and validate one fragment into a (partial) [`ThemeConfig`].
///
/// Nothing is returned unless every field validates.
pub fn parse_fragment(fragment: &Fragment) -> Result<ThemeConfig> {
    let (format, text) = fragment.read()?;
    let checker = Checker {
        fragment: fragment.name(),
    };

    let raw: RawFragment = match format {
        FragmentFormat::Json => {
            let mut de = serde_json::Deserializer::from_str(&text);
            let raw = serde_path_to_error::deserialize(&mut de)
                .map_err(|e| checker.malformed(field_path(e.path()), e.inner()))?;
            de.end().map_err(|e| checker.malformed("", e))?;
            raw
        }
        FragmentFormat::Toml => serde_path_to_error::deserialize(toml::Deserializer::new(&text))
            .map_err(|e| checker.malformed(field_path(e.path()), e.inner()))?,
    };

    let config = checker.build(raw)?;
    debug!(
        "parsed {} fragment `{}`: {} content, {} safelist, {} colors, {} screens, {} variants",
        format,
        fragment.name(),
        config.content.len(),
        config.safelist.len(),
        config.colors.len(),
        config.screens.len(),
        config.variants.len()
    );
    Ok(config)
}

/// Dotted field path of a shape error (`theme.colors.primary`, `plugins[0]`)
fn field_path(path: &serde_path_to_error::Path) -> String {
    let mut field = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Map { key } => {
                if !field.is_empty() {
                    field.push('.');
                }
                field.push_str(key);
            }
            Segment::Seq { index } => field.push_str(&format!("[{index}]")),
            _ => {}
        }
    }
    field
}

/// Token and variant names: `[A-Za-z0-9][A-Za-z0-9_.-]*`
fn is_valid_name(name: &str) -> bool {
    let mut it = name.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

fn join(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}

/// Validates raw fragment values, tagging errors with the fragment name
struct Checker<'a> {
    fragment: &'a str,
}

impl Checker<'_> {
    fn malformed(&self, path: impl Into<String>, reason: impl fmt::Display) -> ConfigError {
        ConfigError::Malformed {
            fragment: self.fragment.to_string(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    fn build(&self, raw: RawFragment) -> Result<ThemeConfig> {
        let mut config = ThemeConfig {
            content: self.content(&raw.content)?,
            safelist: self.safelist(&raw.safelist)?,
            dark_mode: raw
                .dark_mode
                .as_ref()
                .map(|mode| self.dark_mode(mode))
                .transpose()?,
            variants: self.plugins(&raw.plugins)?,
            ..ThemeConfig::empty()
        };

        if let Some(theme) = &raw.theme {
            self.theme(theme, &mut config)?;
        }

        Ok(config)
    }

    fn content(&self, globs: &[String]) -> Result<Vec<ContentGlob>> {
        let mut content = Vec::with_capacity(globs.len());
        for (idx, pattern) in globs.iter().enumerate() {
            let path = format!("content[{idx}]");
            if pattern.trim().is_empty() {
                return Err(self.malformed(path, "empty glob"));
            }
            let glob = ContentGlob::new(pattern.as_str()).map_err(|e| self.malformed(path, e))?;
            if union_into(&mut content, std::slice::from_ref(&glob)) == 0 {
                debug!("{}: content glob `{}` listed twice", self.fragment, pattern);
            }
        }
        Ok(content)
    }

    fn safelist(&self, entries: &[RawSafelistEntry]) -> Result<Vec<SafelistEntry>> {
        let mut safelist = Vec::with_capacity(entries.len());
        for (idx, raw) in entries.iter().enumerate() {
            let path = format!("safelist[{idx}]");
            let entry = match raw {
                RawSafelistEntry::Class(class) => {
                    if class.is_empty() || class.chars().any(char::is_whitespace) {
                        return Err(self.malformed(
                            path,
                            format!("`{class}` is not a single class name"),
                        ));
                    }
                    SafelistEntry::class(class.as_str())
                }
                RawSafelistEntry::Pattern(pattern) => {
                    if let Some(variant) = pattern.variants.iter().find(|v| !is_valid_name(v)) {
                        return Err(self.malformed(
                            join(&path, "variants"),
                            format!("invalid variant name `{variant}`"),
                        ));
                    }
                    SafelistEntry::pattern(&pattern.pattern, pattern.variants.clone())
                        .map_err(|e| self.malformed(join(&path, "pattern"), e))?
                }
            };
            union_into(&mut safelist, std::slice::from_ref(&entry));
        }
        Ok(safelist)
    }

    fn dark_mode(&self, raw: &RawDarkMode) -> Result<DarkModeStrategy> {
        let (strategy, selector, path) = match raw {
            RawDarkMode::One(strategy) => (strategy, None, "darkMode"),
            RawDarkMode::Many(parts) => match parts.as_slice() {
                [strategy] => (strategy, None, "darkMode[0]"),
                [strategy, selector] => (strategy, Some(selector), "darkMode[0]"),
                _ => {
                    return Err(self.malformed(
                        "darkMode",
                        format!("expected a strategy and an optional selector, got {} items", parts.len()),
                    ))
                }
            },
        };

        match strategy.as_str() {
            "media" => match selector {
                Some(_) => Err(self.malformed("darkMode[1]", "the `media` strategy takes no selector")),
                None => Ok(DarkModeStrategy::Media),
            },
            // `class` is the older name of the selector strategy
            "selector" | "class" => match selector {
                Some(selector) if selector.trim().is_empty() => {
                    Err(self.malformed("darkMode[1]", "empty selector"))
                }
                selector => Ok(DarkModeStrategy::Selector(selector.cloned())),
            },
            other => Err(ConfigError::UnknownDarkModeStrategy {
                fragment: self.fragment.to_string(),
                path: path.to_string(),
                value: other.to_string(),
            }),
        }
    }

    fn theme(&self, theme: &RawTheme, config: &mut ThemeConfig) -> Result<()> {
        if let Some(container) = &theme.container {
            let padding = container
                .padding
                .as_deref()
                .map(|value| {
                    value
                        .parse::<Length>()
                        .map_err(|e| self.malformed("theme.container.padding", e))
                })
                .transpose()?;
            config.container = ContainerPolicy {
                center: container.center,
                padding,
            };
        }

        if let Some(colors) = &theme.colors {
            config.colors = self.palette("theme.colors", colors)?;
        }
        if let Some(screens) = &theme.screens {
            config.screens = self.screens("theme.screens", screens)?;
        }

        // `extend` layers over the plain maps of the same fragment
        if let Some(extend) = &theme.extend {
            if let Some(colors) = &extend.colors {
                let extra = self.palette("theme.extend.colors", colors)?;
                config.colors.extend_from(&extra);
            }
            if let Some(screens) = &extend.screens {
                let extra = self.screens("theme.extend.screens", screens)?;
                config.screens.extend_from(&extra);
            }
        }

        Ok(())
    }

    /// Reject invalid names and names repeated ignoring ASCII case
    fn check_keys<V>(&self, path: &str, map: &RawMap<V>) -> Result<()> {
        let mut seen: FxHashMap<String, &str> = FxHashMap::default();
        for (key, _) in &map.0 {
            if !is_valid_name(key) {
                return Err(self.malformed(
                    path,
                    format!("invalid name `{key}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*)"),
                ));
            }
            if let Some(previous) = seen.insert(key.to_ascii_lowercase(), key) {
                return Err(ConfigError::DuplicateKey {
                    fragment: self.fragment.to_string(),
                    path: path.to_string(),
                    key: key.clone(),
                    previous: previous.to_string(),
                });
            }
        }
        Ok(())
    }

    fn color(&self, path: String, value: &str) -> Result<CssColor> {
        value.parse().map_err(|e: gust_core::ParseColorError| ConfigError::InvalidColor {
            fragment: self.fragment.to_string(),
            path,
            reason: e.to_string(),
        })
    }

    fn palette(&self, path: &str, colors: &RawMap<RawColor>) -> Result<Palette> {
        self.check_keys(path, colors)?;

        let mut palette = Palette::new();
        for (name, raw) in &colors.0 {
            let token_path = join(path, name);
            let value = match raw {
                RawColor::Single(value) => ColorValue::Single(self.color(token_path, value)?),
                RawColor::Shades(shades) => {
                    if shades.0.is_empty() {
                        return Err(self.malformed(token_path, "a shade scale needs at least one shade"));
                    }
                    self.check_keys(&token_path, shades)?;
                    let mut scale = indexmap::IndexMap::with_capacity(shades.0.len());
                    for (shade, value) in &shades.0 {
                        let color = self.color(join(&token_path, shade), value)?;
                        scale.insert(shade.clone(), color);
                    }
                    ColorValue::Shades(scale)
                }
            };
            palette.insert(name.clone(), value);
        }
        Ok(palette)
    }

    fn screens(&self, path: &str, screens: &RawMap<String>) -> Result<Breakpoints> {
        self.check_keys(path, screens)?;

        let mut breakpoints = Breakpoints::new();
        for (name, value) in &screens.0 {
            let length: Length =
                value
                    .parse()
                    .map_err(|e: gust_core::ParseLengthError| ConfigError::InvalidBreakpoint {
                        fragment: self.fragment.to_string(),
                        path: join(path, name),
                        reason: e.to_string(),
                    })?;
            breakpoints.insert(name.clone(), length);
        }
        Ok(breakpoints)
    }

    fn plugins(&self, plugins: &[RawPlugin]) -> Result<VariantSet> {
        let mut seen: FxHashMap<String, &str> = FxHashMap::default();
        let mut variants = VariantSet::new();

        for (idx, raw) in plugins.iter().enumerate() {
            let path = format!("plugins[{idx}]");
            if !is_valid_name(&raw.name) {
                return Err(self.malformed(
                    join(&path, "name"),
                    format!("invalid variant name `{}`", raw.name),
                ));
            }
            if let Some(previous) = seen.insert(raw.name.to_ascii_lowercase(), &raw.name) {
                return Err(ConfigError::DuplicateKey {
                    fragment: self.fragment.to_string(),
                    path: "plugins".to_string(),
                    key: raw.name.clone(),
                    previous: previous.to_string(),
                });
            }
            let plugin = VariantPlugin::new(raw.name.as_str(), raw.selector_template.as_str())
                .ok_or_else(|| {
                    self.malformed(
                        join(&path, "selectorTemplate"),
                        format!(
                            "`{}` has no `{}` placeholder",
                            raw.selector_template, SELECTOR_PLACEHOLDER
                        ),
                    )
                })?;
            variants.insert(plugin);
        }
        Ok(variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pretty_assertions::assert_eq;

    fn parse_toml(text: &str) -> Result<ThemeConfig> {
        parse_fragment(&Fragment::toml("test.toml", text))
    }

    fn parse_json(text: &str) -> Result<ThemeConfig> {
        parse_fragment(&Fragment::json("test.json", text))
    }

    #[test]
    fn empty_fragments() {
        assert_eq!(parse_toml("").unwrap(), ThemeConfig::empty());
        assert_eq!(parse_json("{}").unwrap(), ThemeConfig::empty());
        assert_eq!(parse_json("").unwrap_err().code(), ErrorCode::Malformed);
    }

    #[test]
    fn full_toml_fragment() {
        let config = parse_toml(
            r##"
content = ["./src/*/templates/**/*.html", "./src/**/*.py"]
safelist = ["md:table-cell", "!flex", { pattern = "btn-(primary|danger)", variants = ["hover"] }]
darkMode = ["selector"]
plugins = [{ name = "light", selectorTemplate = "html:not(.dark) &" }]

[theme.container]
center = true

[theme.colors]
transparent = "transparent"
current = "currentColor"
primary = "#FFCD00"

[theme.colors.gray]
50 = "#fafafa"
900 = "#18181b"

[theme.extend.screens]
ultrawide = "2000px"
"##,
        )
        .unwrap();

        assert_eq!(config.content().len(), 2);
        assert!(config.is_safelisted("!flex"));
        assert!(config.is_safelisted("hover:btn-danger"));
        assert_eq!(config.declared_dark_mode(), Some(&DarkModeStrategy::Selector(None)));
        assert!(config.container().centered());
        assert_eq!(config.colors().lookup("primary").unwrap().source(), "#FFCD00");
        assert_eq!(config.colors().lookup("gray-900").unwrap().source(), "#18181b");
        assert_eq!(config.screens().get("ultrawide").unwrap().to_string(), "2000px");
        assert_eq!(config.variants().get("light").unwrap().selector_template(), "html:not(.dark) &");
    }

    #[test]
    fn unset_scalars_stay_unset() {
        let config = parse_json(r#"{"content": ["src/**/*.rs"]}"#).unwrap();
        assert_eq!(config.declared_dark_mode(), None);
        assert_eq!(config.container().center, None);
    }

    #[test]
    fn container_padding() {
        let config = parse_json(r#"{"theme": {"container": {"padding": "2rem"}}}"#).unwrap();
        assert_eq!(config.container().center, None);
        assert_eq!(config.container().padding.unwrap().to_px(), Some(32.0));

        let err = parse_json(r#"{"theme": {"container": {"padding": "wide"}}}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Malformed);
        assert_eq!(err.path(), Some("theme.container.padding"));
    }

    #[test]
    fn invalid_color_reports_path() {
        let err = parse_toml(
            r##"
[theme.colors.gray]
50 = "#fafafa"
900 = "notacolor"
"##,
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidColor);
        assert_eq!(err.fragment(), "test.toml");
        assert_eq!(err.path(), Some("theme.colors.gray.900"));
    }

    #[test]
    fn breakpoint_needs_unit() {
        let err = parse_json(r#"{"theme": {"extend": {"screens": {"ultrawide": "2000"}}}}"#)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidBreakpoint);
        assert_eq!(err.path(), Some("theme.extend.screens.ultrawide"));

        let err = parse_json(r#"{"theme": {"screens": {"tiny": "0px"}}}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidBreakpoint);
    }

    #[test]
    fn case_variant_keys_are_duplicates() {
        let err = parse_json(r##"{"theme": {"colors": {"primary": "#000", "Primary": "#fff"}}}"##)
            .unwrap_err();
        match err {
            ConfigError::DuplicateKey {
                path, key, previous, ..
            } => {
                assert_eq!(path, "theme.colors");
                assert_eq!(key, "Primary");
                assert_eq!(previous, "primary");
            }
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn repeated_json_keys_are_duplicates() {
        let err = parse_json(r#"{"theme": {"screens": {"xl": "1280px", "xl": "1440px"}}}"#)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateKey);

        let err = parse_json(
            r##"{"theme": {"colors": {"gray": {"50": "#fafafa", "50": "#000"}}}}"##,
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateKey);
        assert_eq!(err.path(), Some("theme.colors.gray"));
    }

    #[test]
    fn extend_layers_over_base_within_fragment() {
        let config = parse_toml(
            r##"
[theme.colors]
primary = "#000000"
gray = { 50 = "#fafafa", 900 = "#18181b" }

[theme.extend.colors]
primary = "#FFCD00"
gray = { 50 = "#000" }
"##,
        )
        .unwrap();
        assert_eq!(config.colors().lookup("primary").unwrap().source(), "#FFCD00");
        assert!(config.colors().lookup("gray-900").is_none());
        assert_eq!(config.colors().names().collect::<Vec<_>>(), vec!["primary", "gray"]);
    }

    #[test]
    fn dark_mode_forms() {
        let custom = parse_json(r#"{"darkMode": ["selector", "[data-theme=dark]"]}"#).unwrap();
        assert_eq!(custom.dark_mode().custom_selector(), Some("[data-theme=dark]"));

        let legacy = parse_json(r#"{"darkMode": "class"}"#).unwrap();
        assert_eq!(legacy.dark_mode(), DarkModeStrategy::Selector(None));

        let err = parse_json(r#"{"darkMode": "auto"}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownDarkModeStrategy);
        assert_eq!(err.path(), Some("darkMode"));

        let err = parse_json(r#"{"darkMode": ["system"]}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownDarkModeStrategy);
        assert_eq!(err.path(), Some("darkMode[0]"));

        let err = parse_json(r#"{"darkMode": ["media", ".dark"]}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Malformed);

        let err = parse_json(r#"{"darkMode": []}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Malformed);
    }

    #[test]
    fn plugin_validation() {
        let err = parse_json(r#"{"plugins": [{"name": "light", "selectorTemplate": "html"}]}"#)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Malformed);
        assert_eq!(err.path(), Some("plugins[0].selectorTemplate"));

        let err = parse_json(
            r#"{"plugins": [
                {"name": "light", "selectorTemplate": "html:not(.dark) &"},
                {"name": "Light", "selectorTemplate": ".light &"}
            ]}"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateKey);

        let err = parse_json(r#"{"plugins": [{"name": "light"}]}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Malformed);
    }

    #[test]
    fn structural_errors_are_malformed() {
        for text in [
            r#"{"content": "src/**/*.py"}"#,
            r#"{"theme": {"colors": {"primary": 5}}}"#,
            r##"{"theme": {"colors": {"gray": {"50": {"x": "#000"}}}}}"##,
            r#"{"theme": {"fontFamily": {}}}"#,
            r#"{"theme": {"container": {"center": "yes"}}}"#,
            r#"{"content": [""]}"#,
            r#"{"content": ["src/[a-.html"]}"#,
            r#"{"safelist": ["two classes"]}"#,
            r#"{"safelist": [{"pattern": "bg-(red"}]}"#,
            r#"{"theme": {"colors": {"gray": {}}}}"#,
            r##"{"theme": {"colors": {"bad name": "#000"}}}"##,
            r#"[1, 2, 3]"#,
        ] {
            let err = parse_json(text).unwrap_err();
            assert_eq!(err.code(), ErrorCode::Malformed, "{text}");
        }
    }

    #[test]
    fn structural_errors_point_at_the_field() {
        for (text, path) in [
            (r#"{"theme": {"colors": {"primary": 5}}}"#, "theme.colors.primary"),
            (r#"{"plugins": [{"name": "light"}]}"#, "plugins[0]"),
            (r#"{"theme": {"container": {"center": "yes"}}}"#, "theme.container.center"),
            (r#"{"safelist": ["!flex", 3]}"#, "safelist[1]"),
        ] {
            let err = parse_json(text).unwrap_err();
            assert_eq!(err.code(), ErrorCode::Malformed, "{text}");
            assert_eq!(err.path(), Some(path), "{text}");
        }

        let err = parse_json(r#"{"theme": {"fontFamily": {}}}"#).unwrap_err();
        assert!(err.path().is_some_and(|path| path.starts_with("theme")));
        assert!(err.to_string().contains("fontFamily"));

        let err = parse_toml("[theme.container]\ncenter = \"yes\"\n").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Malformed);
        assert_eq!(err.path(), Some("theme.container.center"));
    }

    #[test]
    fn trailing_json_is_malformed() {
        let err = parse_json(r#"{"darkMode": "media"} {}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Malformed);
        assert_eq!(err.path(), Some(""));
    }

    #[test]
    fn repeated_list_entries_collapse() {
        let config = parse_json(
            r#"{"content": ["src/**/*.py", "src/**/*.py"], "safelist": ["!flex", "!flex"]}"#,
        )
        .unwrap();
        assert_eq!(config.content().len(), 1);
        assert_eq!(config.safelist().len(), 1);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(FragmentFormat::from_path(Path::new("gust.toml")), Some(FragmentFormat::Toml));
        assert_eq!(FragmentFormat::from_path(Path::new("a/b/theme.JSON")), Some(FragmentFormat::Json));
        assert_eq!(FragmentFormat::from_path(Path::new("tailwind.config.js")), None);
        assert_eq!(FragmentFormat::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn unsupported_file_extension() {
        let err = parse_fragment(&Fragment::file("tailwind.config.js")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Malformed);
        assert_eq!(err.fragment(), "tailwind.config.js");
    }
}
