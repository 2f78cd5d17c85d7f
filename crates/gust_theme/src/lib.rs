//! Gust Theme Configuration
//!
//! Validates, merges and resolves the theme configuration of a utility-first
//! CSS generator: which files are scanned for class names, which classes are
//! always kept, how dark mode is toggled, and the color and breakpoint tokens
//! utilities are generated from.
//!
//! # Overview
//!
//! - **Defaults**: [`load_default`] is the baseline every resolution starts from
//! - **Fragments**: [`Fragment`] is one JSON or TOML layer, inline or on disk;
//!   [`parse_fragment`] validates it into a partial [`ThemeConfig`]
//! - **Merging**: [`merge`] layers one configuration over another
//! - **Resolution**: [`resolve`] (or a [`Resolver`]) folds fragments in order
//!   over the defaults and fails on the first invalid one
//!
//! # Quick Start
//!
//! ```rust
//! use gust_theme::{resolve, DarkModeStrategy, Fragment};
//!
//! let project = Fragment::toml(
//!     "project",
//!     r##"
//! content = ["./src/**/*.html"]
//! safelist = ["ultrawide:table-cell"]
//! darkMode = "selector"
//!
//! [theme.extend.colors]
//! primary = "#FFCD00"
//!
//! [theme.extend.screens]
//! ultrawide = "2000px"
//!
//! [[plugins]]
//! name = "light"
//! selectorTemplate = "html:not(.dark) &"
//! "##,
//! );
//!
//! let config = resolve([project]).unwrap();
//! assert_eq!(config.dark_mode(), DarkModeStrategy::Selector(None));
//! assert_eq!(config.colors().lookup("primary").unwrap().source(), "#FFCD00");
//! assert!(config.colors().contains("gray"));
//! assert!(config.screens().contains("ultrawide"));
//! assert!(config.is_content_path("src/index.html"));
//! ```
//!
//! # Merge Rules
//!
//! - Content globs and the safelist are unions in first-seen order
//! - Dark mode and container centering are overridden when a later layer sets them
//! - Colors, screens and variants merge by key, a later entry replacing the
//!   earlier one as a whole
//!
//! # Errors
//!
//! Every failure is a [`ConfigError`] naming the fragment and the field path
//! at fault. Its [`ErrorCode`] is one of `malformed`, `invalid-color`,
//! `invalid-breakpoint`, `duplicate-key`, `unknown-dark-mode-strategy` or `io`.

pub mod config;
pub mod content;
pub mod defaults;
pub mod error;
pub mod fragment;
pub mod resolver;
mod schema;
pub mod tokens;
pub mod variant;

pub use config::{merge, ContainerPolicy, DarkModeStrategy, ThemeConfig};
pub use content::{ContentGlob, SafelistEntry};
pub use defaults::{default_palette, load_default};
pub use error::{ConfigError, ErrorCode, Result};
pub use fragment::{parse_fragment, Fragment, FragmentFormat, FragmentSource};
pub use resolver::{resolve, ResolvePhase, Resolver};
pub use tokens::*;
pub use variant::{VariantPlugin, VariantSet, SELECTOR_PLACEHOLDER};

pub use gust_core::{CssColor, Length, LengthUnit};
