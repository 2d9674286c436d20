use std::borrow::Cow;

use tracing::trace;

use super::{names_are_equal, QuickReader};

/// Read-only view over the attributes of a [`QuickReader`]
#[derive(Debug, Clone, Copy)]
pub struct Attributes<'a> {
    pairs: &'a [(String, String)],
}

impl<'a> Attributes<'a> {
    pub(super) fn new(pairs: &'a [(String, String)]) -> Self {
        Self { pairs }
    }

    /// Value of the first attribute whose name matches, in insertion order
    pub fn find(&self, name: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(key, _)| names_are_equal(name, key))
            .map(|(_, value)| value.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Attribute value, or `""` when the attribute does not exist.
    /// Use [`Attributes::has`] to tell an absent attribute from an empty one.
    pub fn get(&self, name: &str) -> &'a str {
        self.find(name).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Read-only view over the child elements of a [`QuickReader`].
///
/// `all` is the unfiltered list and `filter` the list restricted to one name;
/// `get` always yields a node, falling back to an empty placeholder.
#[derive(Debug, Clone, Copy)]
pub struct Children<'a> {
    nodes: &'a [QuickReader],
}

impl<'a> Children<'a> {
    pub(super) fn new(nodes: &'a [QuickReader]) -> Self {
        Self { nodes }
    }

    pub fn all(&self) -> &'a [QuickReader] {
        self.nodes
    }

    /// Children named `name`, in document order. An empty name matches every child.
    pub fn filter(&self, name: &str) -> Vec<&'a QuickReader> {
        if name.is_empty() {
            return self.nodes.iter().collect();
        }
        self.nodes
            .iter()
            .filter(|child| names_are_equal(name, child.name()))
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&'a QuickReader> {
        self.nodes.iter().find(|child| names_are_equal(name, child.name()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// First child named `name`, or a detached placeholder with that name.
    /// The placeholder is never added to this node's children.
    ///
    /// A placeholder is owned by the returned `Cow`, so a chain through it only
    /// lives until the end of the statement. Use [`Children::find`] to hold on
    /// to an intermediate node, or `into_owned` to keep a copy.
    pub fn get(&self, name: &str) -> Cow<'a, QuickReader> {
        match self.find(name) {
            Some(child) => Cow::Borrowed(child),
            None => {
                trace!(name, "No such child, returning a placeholder");
                Cow::Owned(QuickReader::placeholder(name))
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'a, QuickReader> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a> IntoIterator for Children<'a> {
    type Item = &'a QuickReader;
    type IntoIter = std::slice::Iter<'a, QuickReader>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
