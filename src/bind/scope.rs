//! The root style scope the binding writes into.

use std::collections::{BTreeMap, BTreeSet};

/// The global presentation scope: a class-token set plus an inline
/// custom-property map, mirroring a document root.
///
/// The scope itself is dumb storage; [`apply`](crate::bind::apply) decides
/// what goes in it. Hosts read it to drive whatever cascade they render
/// with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootScope {
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
}

impl RootScope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `token` is among the scope's class tokens.
    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    /// Adds a class token. Adding a present token is a no-op.
    pub fn add_class(&mut self, token: &str) {
        self.classes.insert(token.to_string());
    }

    /// Removes a class token. Removing an absent token is a no-op.
    pub fn remove_class(&mut self, token: &str) {
        self.classes.remove(token);
    }

    /// The class tokens, in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// The value of an inline custom property, if set.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Sets an inline custom property, replacing any previous value.
    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    /// Removes an inline custom property.
    pub fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }

    /// The inline custom properties, in sorted name order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
