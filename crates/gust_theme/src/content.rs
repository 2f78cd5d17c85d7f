//! Content globs and safelist entries

use std::fmt;
use std::path::Path;

use globset::{Glob, GlobBuilder, GlobMatcher};
use regex::Regex;

/// A file pattern naming sources to scan for class usage
#[derive(Clone, Debug)]
pub struct ContentGlob {
    pattern: String,
    matcher: GlobMatcher,
}

impl ContentGlob {
    /// Compile a glob. `*` does not cross directory separators; `**` does.
    /// A leading `./` is ignored for matching but kept in [`Self::pattern`].
    pub fn new(pattern: impl Into<String>) -> Result<Self, globset::Error> {
        let pattern = pattern.into();
        let normalized = pattern.strip_prefix("./").unwrap_or(&pattern);
        let glob: Glob = GlobBuilder::new(normalized)
            .literal_separator(true)
            .build()?;
        Ok(Self {
            matcher: glob.compile_matcher(),
            pattern,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether a project-relative path is covered by this glob
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let path = path.strip_prefix("./").unwrap_or(path);
        self.matcher.is_match(path)
    }
}

impl PartialEq for ContentGlob {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl fmt::Display for ContentGlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// A class (or class pattern) kept in the output even if scanning never sees it
#[derive(Clone, Debug)]
pub enum SafelistEntry {
    /// An exact class name such as `md:table-cell` or `!flex`
    Class(String),
    /// Every utility whose name fully matches `pattern`, optionally also
    /// under each listed variant (`hover:`, `md:`)
    Pattern {
        source: String,
        pattern: Regex,
        variants: Vec<String>,
    },
}

impl SafelistEntry {
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// Compile a pattern entry; the regex is anchored to the whole class name
    pub fn pattern(pattern: &str, variants: Vec<String>) -> Result<Self, regex::Error> {
        // Report syntax errors against the pattern as written
        Regex::new(pattern)?;
        // A trailing `(?x)` comment would swallow the closing anchor; a
        // newline ends the comment
        let anchored = Regex::new(&format!("^(?:{pattern})$"))
            .or_else(|_| Regex::new(&format!("^(?:{pattern}\n)$")))?;
        Ok(Self::Pattern {
            source: pattern.to_string(),
            pattern: anchored,
            variants,
        })
    }

    /// The pattern as written, for pattern entries
    pub fn pattern_source(&self) -> Option<&str> {
        match self {
            Self::Class(_) => None,
            Self::Pattern { source, .. } => Some(source.as_str()),
        }
    }

    /// Whether `class` is retained by this entry
    pub fn matches(&self, class: &str) -> bool {
        match self {
            Self::Class(name) => name == class,
            Self::Pattern { pattern, variants, .. } => {
                if pattern.is_match(class) {
                    return true;
                }
                variants.iter().any(|variant| {
                    class
                        .strip_prefix(variant.as_str())
                        .and_then(|rest| rest.strip_prefix(':'))
                        .is_some_and(|utility| pattern.is_match(utility))
                })
            }
        }
    }
}

impl PartialEq for SafelistEntry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Class(a), Self::Class(b)) => a == b,
            (
                Self::Pattern {
                    source: a,
                    variants: va,
                    ..
                },
                Self::Pattern {
                    source: b,
                    variants: vb,
                    ..
                },
            ) => a == b && va == vb,
            _ => false,
        }
    }
}

impl fmt::Display for SafelistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(name) => f.write_str(name),
            Self::Pattern { variants, .. } => {
                write!(f, "/{}/", self.pattern_source().unwrap_or_default())?;
                if !variants.is_empty() {
                    write!(f, " [{}]", variants.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

/// Append the entries of `extra` that `base` does not already hold, in order.
/// Returns how many were added.
pub(crate) fn union_into<T: PartialEq + Clone>(base: &mut Vec<T>, extra: &[T]) -> usize {
    let before = base.len();
    for item in extra {
        if !base.contains(item) {
            base.push(item.clone());
        }
    }
    base.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glob_matching() {
        let templates = ContentGlob::new("./src/*/templates/**/*.html").unwrap();
        assert_eq!(templates.pattern(), "./src/*/templates/**/*.html");
        assert!(templates.is_match("src/hosts/templates/hosts/list.html"));
        assert!(templates.is_match("./src/main/templates/base.html"));
        assert!(!templates.is_match("src/a/b/templates/base.html"));
        assert!(!templates.is_match("src/hosts/templates/list.py"));

        let python = ContentGlob::new("./src/**/*.py").unwrap();
        assert!(python.is_match("src/main/views/hosts.py"));
        assert!(!python.is_match("tests/test_hosts.py"));
    }

    #[test]
    fn invalid_glob_is_rejected() {
        assert!(ContentGlob::new("src/[a-.html").is_err());
    }

    #[test]
    fn safelist_class_matching() {
        let entry = SafelistEntry::class("ultrawide:table-cell");
        assert!(entry.matches("ultrawide:table-cell"));
        assert!(!entry.matches("table-cell"));
    }

    #[test]
    fn safelist_pattern_matching() {
        let entry = SafelistEntry::pattern(
            r"bg-(red|green|blue)-\d+",
            vec!["hover".to_string(), "md".to_string()],
        )
        .unwrap();

        assert_eq!(entry.pattern_source(), Some(r"bg-(red|green|blue)-\d+"));
        assert!(entry.matches("bg-red-500"));
        assert!(entry.matches("hover:bg-blue-100"));
        assert!(entry.matches("md:bg-green-900"));
        assert!(!entry.matches("lg:bg-green-900"));
        assert!(!entry.matches("text-bg-red-500"));
        assert!(!entry.matches("bg-red-500x"));
    }

    #[test]
    fn verbose_pattern_with_trailing_comment() {
        let source = "(?x) bg-(red|blue) # brand backgrounds";
        let entry = SafelistEntry::pattern(source, vec!["hover".to_string()]).unwrap();

        assert_eq!(entry.pattern_source(), Some(source));
        assert!(entry.matches("bg-red"));
        assert!(entry.matches("hover:bg-blue"));
        assert!(!entry.matches("bg-redx"));
        assert!(!entry.matches("bg-green"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(SafelistEntry::pattern("bg-(red", Vec::new()).is_err());
    }

    #[test]
    fn union_keeps_order_and_drops_repeats() {
        let mut base = vec!["a", "b"];
        let added = union_into(&mut base, &["b", "c", "a", "d", "c"]);
        assert_eq!(added, 2);
        assert_eq!(base, vec!["a", "b", "c", "d"]);
    }
}
