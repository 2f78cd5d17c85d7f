//! Resolved theme configuration and the merge rules between fragments

use std::fmt;
use std::path::Path;

use gust_core::Length;

use crate::content::{union_into, ContentGlob, SafelistEntry};
use crate::schema::RawFragment;
use crate::tokens::{Breakpoints, Palette};
use crate::variant::VariantSet;

/// How dark-mode utilities (`dark:bg-black`) are activated
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub enum DarkModeStrategy {
    /// Follow the OS preference (`prefers-color-scheme`)
    #[default]
    Media,
    /// Toggle through a selector in the document; `None` means the
    /// generator's default `.dark` class
    Selector(Option<String>),
}

impl DarkModeStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Selector(_) => "selector",
        }
    }

    /// Custom selector for the `selector` strategy
    pub fn custom_selector(&self) -> Option<&str> {
        match self {
            Self::Media => None,
            Self::Selector(selector) => selector.as_deref(),
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Media | Self::Selector(None) => f.write_str(self.name()),
            Self::Selector(Some(selector)) => write!(f, "selector ({selector})"),
        }
    }
}

/// Container utility policy. `None` fields are left to earlier layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerPolicy {
    /// Center the container horizontally
    pub center: Option<bool>,
    /// Horizontal padding inside the container
    pub padding: Option<Length>,
}

impl ContainerPolicy {
    pub fn centered(&self) -> bool {
        self.center.unwrap_or(false)
    }

    fn overlay(self, other: Self) -> Self {
        Self {
            center: other.center.or(self.center),
            padding: other.padding.or(self.padding),
        }
    }
}

/// A complete (or partial, when freshly parsed) theme configuration.
///
/// Scalars are optional so a fragment can leave them to earlier layers;
/// the built-in default sets every one of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeConfig {
    pub(crate) content: Vec<ContentGlob>,
    pub(crate) safelist: Vec<SafelistEntry>,
    pub(crate) dark_mode: Option<DarkModeStrategy>,
    pub(crate) container: ContainerPolicy,
    pub(crate) colors: Palette,
    pub(crate) screens: Breakpoints,
    pub(crate) variants: VariantSet,
}

impl ThemeConfig {
    /// An empty fragment: no opinion on anything
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &[ContentGlob] {
        &self.content
    }

    pub fn safelist(&self) -> &[SafelistEntry] {
        &self.safelist
    }

    /// Effective dark-mode strategy (`media` when unset)
    pub fn dark_mode(&self) -> DarkModeStrategy {
        self.dark_mode.clone().unwrap_or_default()
    }

    /// Dark-mode strategy as declared, `None` when unset
    pub fn declared_dark_mode(&self) -> Option<&DarkModeStrategy> {
        self.dark_mode.as_ref()
    }

    pub fn container(&self) -> ContainerPolicy {
        self.container
    }

    pub fn colors(&self) -> &Palette {
        &self.colors
    }

    pub fn screens(&self) -> &Breakpoints {
        &self.screens
    }

    pub fn variants(&self) -> &VariantSet {
        &self.variants
    }

    /// Whether `path` should be scanned for class names
    pub fn is_content_path(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.content.iter().any(|glob| glob.is_match(path))
    }

    /// Whether `class` must be kept regardless of scanning
    pub fn is_safelisted(&self, class: &str) -> bool {
        self.safelist.iter().any(|entry| entry.matches(class))
    }

    /// Layer `overlay` on top of this configuration. See [`merge`].
    pub fn merged_with(&self, overlay: &ThemeConfig) -> ThemeConfig {
        merge(self, overlay)
    }

    /// Serialize to the JSON fragment format
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&RawFragment::from(self))
    }

    /// Serialize to the TOML fragment format
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&RawFragment::from(self))
    }
}

/// Merge two configurations into a new one.
///
/// - Scalars (dark mode, container) take the overlay's value when it is set.
/// - Content globs and safelist are unions: base entries first, then overlay
///   entries not already present (exact equality).
/// - Colors, breakpoints and variants merge by key; an overlay entry replaces
///   the base entry of the same key as a whole, so replacing a color scale
///   drops every shade the overlay does not repeat.
pub fn merge(base: &ThemeConfig, overlay: &ThemeConfig) -> ThemeConfig {
    let mut merged = base.clone();

    let added_content = union_into(&mut merged.content, &overlay.content);
    let added_safelist = union_into(&mut merged.safelist, &overlay.safelist);

    if overlay.dark_mode.is_some() {
        merged.dark_mode = overlay.dark_mode.clone();
    }
    merged.container = base.container.overlay(overlay.container);

    merged.colors.extend_from(&overlay.colors);
    merged.screens.extend_from(&overlay.screens);
    merged.variants.extend_from(&overlay.variants);

    tracing::trace!(
        "merged fragment: +{} content, +{} safelist, {} colors, {} screens, {} variants",
        added_content,
        added_safelist,
        merged.colors.len(),
        merged.screens.len(),
        merged.variants.len()
    );

    merged
}
