//! Selector-based variant plugins

use indexmap::IndexMap;

/// Placeholder for the utility's own selector inside a template
pub const SELECTOR_PLACEHOLDER: char = '&';

/// A named variant such as `light` => `html:not(.dark) &`.
///
/// A class prefixed with the variant name (`light:bg-white`) is emitted under
/// the template with `&` replaced by the utility's selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantPlugin {
    name: String,
    selector_template: String,
}

impl VariantPlugin {
    /// Returns `None` unless the name is non-empty and the template contains `&`
    pub fn new(name: impl Into<String>, selector_template: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let selector_template = selector_template.into();
        if name.trim().is_empty() || !selector_template.contains(SELECTOR_PLACEHOLDER) {
            return None;
        }
        Some(Self {
            name,
            selector_template,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selector_template(&self) -> &str {
        &self.selector_template
    }

    /// Substitute `selector` into the template
    pub fn apply(&self, selector: &str) -> String {
        self.selector_template
            .replace(SELECTOR_PLACEHOLDER, selector)
    }
}

/// Variant plugins keyed by name, in registration order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantSet {
    variants: IndexMap<String, VariantPlugin>,
}

impl VariantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin, replacing an earlier one of the same name
    pub fn insert(&mut self, plugin: VariantPlugin) -> Option<VariantPlugin> {
        self.variants.insert(plugin.name.clone(), plugin)
    }

    pub fn get(&self, name: &str) -> Option<&VariantPlugin> {
        self.variants.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantPlugin> {
        self.variants.values()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Split `light:bg-white` into its registered variant and the utility
    pub fn split_class<'a>(&self, class: &'a str) -> Option<(&VariantPlugin, &'a str)> {
        let (prefix, utility) = class.split_once(':')?;
        self.variants.get(prefix).map(|plugin| (plugin, utility))
    }

    pub fn extend_from(&mut self, other: &VariantSet) {
        for plugin in other.iter() {
            if let Some(previous) = self.insert(plugin.clone()) {
                if previous != *plugin {
                    tracing::trace!("variant `{}` replaced", plugin.name);
                }
            }
        }
    }
}

impl FromIterator<VariantPlugin> for VariantSet {
    fn from_iter<I: IntoIterator<Item = VariantPlugin>>(iter: I) -> Self {
        let mut set = Self::new();
        for plugin in iter {
            set.insert(plugin);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_requires_placeholder() {
        assert!(VariantPlugin::new("light", "html:not(.dark)").is_none());
        assert!(VariantPlugin::new("", "html &").is_none());
        assert!(VariantPlugin::new("light", "html:not(.dark) &").is_some());
    }

    #[test]
    fn apply_and_split() {
        let light = VariantPlugin::new("light", "html:not(.dark) &").unwrap();
        assert_eq!(
            light.apply(".light\\:bg-white"),
            "html:not(.dark) .light\\:bg-white"
        );

        let set: VariantSet = [light].into_iter().collect();
        let (plugin, utility) = set.split_class("light:bg-white").unwrap();
        assert_eq!(plugin.name(), "light");
        assert_eq!(utility, "bg-white");
        assert!(set.split_class("dark:bg-white").is_none());
        assert!(set.split_class("bg-white").is_none());
    }

    #[test]
    fn same_name_replaces_in_place() {
        let mut set = VariantSet::new();
        set.insert(VariantPlugin::new("light", "html:not(.dark) &").unwrap());
        set.insert(VariantPlugin::new("print", "@media print { & }").unwrap());
        set.insert(VariantPlugin::new("light", ".light &").unwrap());

        let names: Vec<_> = set.iter().map(VariantPlugin::name).collect();
        assert_eq!(names, vec!["light", "print"]);
        assert_eq!(set.get("light").unwrap().selector_template(), ".light &");
    }
}
