//! Fragment resolution
//!
//! Resolution folds fragments left-to-right over [`load_default`]:
//!
//! ```text
//! Uninitialized -> Loading -> Resolved
//!                          \-> Failed
//! ```
//!
//! The first invalid fragment fails the whole resolution; nothing partial is
//! ever returned.

use std::fmt;

use tracing::debug;

use crate::config::{merge, ThemeConfig};
use crate::defaults::load_default;
use crate::error::{ConfigError, Result};
use crate::fragment::{parse_fragment, Fragment};

/// Where a [`Resolver`] is in its lifecycle
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ResolvePhase {
    #[default]
    Uninitialized,
    Loading,
    Resolved,
    Failed,
}

impl fmt::Display for ResolvePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Resolved => "resolved",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Collects fragments in layering order and resolves them into one
/// [`ThemeConfig`]
#[derive(Debug, Default)]
pub struct Resolver {
    fragments: Vec<Fragment>,
    phase: ResolvePhase,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Self::push`]
    pub fn with_fragment(mut self, fragment: Fragment) -> Self {
        self.push(fragment);
        self
    }

    /// Add a fragment on top of those already added
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn phase(&self) -> ResolvePhase {
        self.phase
    }

    /// Parse every fragment and merge them over the built-in default.
    ///
    /// Resolving again re-reads every fragment and yields an equal result for
    /// unchanged inputs.
    pub fn resolve(&mut self) -> Result<ThemeConfig> {
        self.transition(ResolvePhase::Loading);

        match self.fold() {
            Ok(config) => {
                self.transition(ResolvePhase::Resolved);
                Ok(config)
            }
            Err(err) => {
                debug!("resolution failed ({}): {}", err.code(), err);
                self.transition(ResolvePhase::Failed);
                Err(err)
            }
        }
    }

    fn fold(&self) -> std::result::Result<ThemeConfig, ConfigError> {
        self.fragments
            .iter()
            .try_fold(load_default(), |resolved, fragment| {
                let layer = parse_fragment(fragment)?;
                Ok(merge(&resolved, &layer))
            })
    }

    fn transition(&mut self, next: ResolvePhase) {
        debug!(
            "Resolver: {} -> {} ({} fragments)",
            self.phase,
            next,
            self.fragments.len()
        );
        self.phase = next;
    }
}

/// Resolve `fragments` in order over the built-in default.
///
/// Returns the first error encountered.
pub fn resolve<I>(fragments: I) -> Result<ThemeConfig>
where
    I: IntoIterator<Item = Fragment>,
{
    let mut resolver = Resolver::new();
    for fragment in fragments {
        resolver.push(fragment);
    }
    resolver.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_fragments_yields_default() {
        assert_eq!(resolve(Vec::new()).unwrap(), load_default());
    }

    #[test]
    fn phases() {
        let mut resolver = Resolver::new();
        assert_eq!(resolver.phase(), ResolvePhase::Uninitialized);

        resolver.push(Fragment::json("ok", r#"{"darkMode": "selector"}"#));
        resolver.resolve().unwrap();
        assert_eq!(resolver.phase(), ResolvePhase::Resolved);

        resolver.push(Fragment::json("broken", r#"{"darkMode": "sometimes"}"#));
        let err = resolver.resolve().unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownDarkModeStrategy);
        assert_eq!(err.fragment(), "broken");
        assert_eq!(resolver.phase(), ResolvePhase::Failed);
    }

    #[test]
    fn first_error_wins() {
        let err = Resolver::new()
            .with_fragment(Fragment::json("first", r#"{"theme": {"screens": {"xl": "1280"}}}"#))
            .with_fragment(Fragment::json("second", r#"{"darkMode": "never"}"#))
            .resolve()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidBreakpoint);
        assert_eq!(err.fragment(), "first");
    }

    #[test]
    fn later_fragments_override_earlier() {
        let config = resolve([
            Fragment::json("base", r#"{"darkMode": "selector", "safelist": ["!flex"]}"#),
            Fragment::json("override", r#"{"darkMode": "media", "safelist": ["!block"]}"#),
        ])
        .unwrap();

        assert_eq!(config.dark_mode().name(), "media");
        let safelist: Vec<_> = config.safelist().iter().map(|e| e.to_string()).collect();
        assert_eq!(safelist, vec!["!flex", "!block"]);
    }
}
