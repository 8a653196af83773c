//! The immutable property → grammar map.

use std::collections::HashMap;

use crate::grammar::GrammarNode;

/// Grammar options for every known property.
///
/// A registry is built once and never mutated afterwards, so it can be
/// shared across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct GrammarRegistry {
    properties: HashMap<String, Vec<GrammarNode>>,
}

static_assertions::assert_impl_all!(GrammarRegistry: Send, Sync);

impl GrammarRegistry {
    /// Start building a registry in code.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub(crate) fn from_map(properties: HashMap<String, Vec<GrammarNode>>) -> Self {
        Self { properties }
    }

    /// The options registered for `property`.
    pub fn lookup(&self, property: &str) -> Option<&[GrammarNode]> {
        self.properties.get(property).map(Vec::as_slice)
    }

    /// Check if `property` is registered.
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Number of registered properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if no property is registered.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over registered property keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

/// Builder for a [`GrammarRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    properties: HashMap<String, Vec<GrammarNode>>,
}

impl RegistryBuilder {
    /// Add options for a property, appending to any already given.
    pub fn property(
        mut self,
        key: impl Into<String>,
        options: impl IntoIterator<Item = GrammarNode>,
    ) -> Self {
        self.properties
            .entry(key.into())
            .or_default()
            .extend(options);
        self
    }

    /// Give several properties the same options.
    pub fn properties<'k>(
        mut self,
        keys: impl IntoIterator<Item = &'k str>,
        options: &[GrammarNode],
    ) -> Self {
        for key in keys {
            self = self.property(key, options.iter().cloned());
        }
        self
    }

    /// Append options to every property added so far.
    pub fn extend_all(mut self, options: &[GrammarNode]) -> Self {
        for existing in self.properties.values_mut() {
            existing.extend(options.iter().cloned());
        }
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> GrammarRegistry {
        GrammarRegistry::from_map(self.properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_options() {
        let registry = GrammarRegistry::builder()
            .property("width", [GrammarNode::keyword("auto")])
            .property("width", [GrammarNode::length()])
            .build();

        assert_eq!(registry.lookup("width").map(<[_]>::len), Some(2));
        assert!(registry.lookup("height").is_none());
    }

    #[test]
    fn builder_shares_options() {
        let registry = GrammarRegistry::builder()
            .properties(["color", "border-color"], &[GrammarNode::Color])
            .build();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("border-color"));
        let mut keys: Vec<_> = registry.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["border-color", "color"]);
    }

    #[test]
    fn extend_all_appends_to_each_property() {
        let registry = GrammarRegistry::builder()
            .property("width", [GrammarNode::length()])
            .property("color", [GrammarNode::Color])
            .extend_all(&[GrammarNode::keyword("inherit")])
            .build();

        assert_eq!(registry.lookup("width").map(<[_]>::len), Some(2));
        assert_eq!(
            registry.lookup("color").and_then(|options| options.last()),
            Some(&GrammarNode::keyword("inherit"))
        );
    }

    #[test]
    fn empty_registry() {
        let registry = GrammarRegistry::default();
        assert!(registry.is_empty());
        assert!(!registry.contains("width"));
    }
}
