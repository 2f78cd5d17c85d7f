//! Breakpoint tokens

use gust_core::Length;
use indexmap::IndexMap;

/// Named responsive breakpoints, each a minimum width
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Breakpoints {
    screens: IndexMap<String, Length>,
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, min_width: Length) -> Option<Length> {
        self.screens.insert(name.into(), min_width)
    }

    pub fn get(&self, name: &str) -> Option<Length> {
        self.screens.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.screens.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Length)> {
        self.screens.iter().map(|(name, length)| (name.as_str(), *length))
    }

    /// Breakpoints in ascending pixel order, as a media-query cascade needs.
    /// Entries whose unit has no fixed pixel size keep declaration order
    /// after the others.
    pub fn ascending(&self) -> Vec<(&str, Length)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|(_, a), (_, b)| match (a.to_px(), b.to_px()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        sorted
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Overlay `other`; colliding names take the other's width
    pub fn extend_from(&mut self, other: &Breakpoints) {
        for (name, length) in &other.screens {
            if let Some(previous) = self.screens.insert(name.clone(), *length) {
                if previous != *length {
                    tracing::trace!("breakpoint `{}` changed {} -> {}", name, previous, length);
                }
            }
        }
    }
}

impl FromIterator<(String, Length)> for Breakpoints {
    fn from_iter<I: IntoIterator<Item = (String, Length)>>(iter: I) -> Self {
        Self {
            screens: iter.into_iter().collect(),
        }
    }
}
