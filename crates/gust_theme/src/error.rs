//! Configuration error types

use std::fmt;

use thiserror::Error;

/// Stable reason code for a [`ConfigError`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ErrorCode {
    Malformed,
    InvalidColor,
    InvalidBreakpoint,
    DuplicateKey,
    UnknownDarkModeStrategy,
    Io,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::InvalidColor => "invalid-color",
            Self::InvalidBreakpoint => "invalid-breakpoint",
            Self::DuplicateKey => "duplicate-key",
            Self::UnknownDarkModeStrategy => "unknown-dark-mode-strategy",
            Self::Io => "io",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while parsing or resolving configuration fragments.
///
/// Every variant names the fragment it came from; all but [`ConfigError::Io`]
/// also carry the dotted field path (`theme.colors.gray.50`). An empty path
/// means the fragment as a whole.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Structurally invalid source
    #[error("{fragment}: malformed configuration at `{}`: {reason}", display_path(.path))]
    Malformed {
        fragment: String,
        path: String,
        reason: String,
    },

    #[error("{fragment}: invalid color at `{path}`: {reason}")]
    InvalidColor {
        fragment: String,
        path: String,
        reason: String,
    },

    #[error("{fragment}: invalid breakpoint at `{path}`: {reason}")]
    InvalidBreakpoint {
        fragment: String,
        path: String,
        reason: String,
    },

    /// Two keys of one mapping that are equal ignoring ASCII case
    #[error("{fragment}: duplicate key `{key}` at `{}` (conflicts with `{previous}`)", display_path(.path))]
    DuplicateKey {
        fragment: String,
        path: String,
        key: String,
        previous: String,
    },

    #[error("{fragment}: unknown dark mode strategy `{value}` at `{path}` (expected `media` or `selector`)")]
    UnknownDarkModeStrategy {
        fragment: String,
        path: String,
        value: String,
    },

    #[error("{fragment}: failed to read configuration: {source}")]
    Io {
        fragment: String,
        #[source]
        source: std::io::Error,
    },
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Malformed { .. } => ErrorCode::Malformed,
            Self::InvalidColor { .. } => ErrorCode::InvalidColor,
            Self::InvalidBreakpoint { .. } => ErrorCode::InvalidBreakpoint,
            Self::DuplicateKey { .. } => ErrorCode::DuplicateKey,
            Self::UnknownDarkModeStrategy { .. } => ErrorCode::UnknownDarkModeStrategy,
            Self::Io { .. } => ErrorCode::Io,
        }
    }

    /// Identifier of the fragment that failed
    pub fn fragment(&self) -> &str {
        match self {
            Self::Malformed { fragment, .. }
            | Self::InvalidColor { fragment, .. }
            | Self::InvalidBreakpoint { fragment, .. }
            | Self::DuplicateKey { fragment, .. }
            | Self::UnknownDarkModeStrategy { fragment, .. }
            | Self::Io { fragment, .. } => fragment,
        }
    }

    /// Dotted field path, `None` for I/O failures
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Malformed { path, .. }
            | Self::InvalidColor { path, .. }
            | Self::InvalidBreakpoint { path, .. }
            | Self::DuplicateKey { path, .. }
            | Self::UnknownDarkModeStrategy { path, .. } => Some(path),
            Self::Io { .. } => None,
        }
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_fragment_and_path() {
        let err = ConfigError::InvalidColor {
            fragment: "project.toml".to_string(),
            path: "theme.colors.primary".to_string(),
            reason: "unrecognized color `notacolor`".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidColor);
        assert_eq!(err.fragment(), "project.toml");
        assert_eq!(err.path(), Some("theme.colors.primary"));
        assert_eq!(
            err.to_string(),
            "project.toml: invalid color at `theme.colors.primary`: unrecognized color `notacolor`"
        );
    }

    #[test]
    fn empty_path_reads_as_root() {
        let err = ConfigError::Malformed {
            fragment: "inline".to_string(),
            path: String::new(),
            reason: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "inline: malformed configuration at `<root>`: expected a table"
        );
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(ErrorCode::DuplicateKey.as_str(), "duplicate-key");
        assert_eq!(
            ErrorCode::UnknownDarkModeStrategy.to_string(),
            "unknown-dark-mode-strategy"
        );
    }
}
