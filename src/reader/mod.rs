use std::fmt::{self, Display};
use std::mem;

use tracing::debug;

mod error;
mod views;

pub use error::{ReaderError, ReaderResult};
pub use views::{Attributes, Children};

/// One element of a read-only tree: a name, its attributes and its child elements.
///
/// Every name lookup on a `QuickReader` is case-insensitive (see [`names_are_equal`]).
/// Lookups never fail: a missing attribute reads as `""` and a missing child reads
/// as an empty placeholder node, so navigation can be chained freely.
///
/// Dropping, cloning and comparing walk the tree with a heap stack, so any
/// nesting depth is safe. `Debug` output still recurses per level.
#[derive(Debug, Eq)]
pub struct QuickReader {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<QuickReader>,
}

impl QuickReader {
    /// Validates and builds a node. Attributes keep the order they are given in.
    pub fn new<K, V>(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = (K, V)>,
        children: Vec<QuickReader>,
    ) -> ReaderResult<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            debug!("Rejected node with an empty name");
            return Err(ReaderError::EmptyName);
        }

        let mut stored: Vec<(String, String)> = Vec::new();
        for (position, (key, value)) in attributes.into_iter().enumerate() {
            let key = key.into();
            if key.is_empty() {
                debug!(node = %name, position, "Rejected attribute with an empty name");
                return Err(ReaderError::EmptyAttributeName { position });
            }
            if stored.iter().any(|(existing, _)| *existing == key) {
                debug!(node = %name, attribute = %key, "Rejected repeated attribute");
                return Err(ReaderError::DuplicateAttribute { name: key });
            }
            stored.push((key, value.into()));
        }

        // Placeholders are the only nodes that can carry an empty name
        if let Some(index) = children.iter().position(|child| child.name.is_empty()) {
            debug!(node = %name, index, "Rejected placeholder child");
            return Err(ReaderError::InvalidChild { index });
        }

        Ok(Self::from_parts(name, stored, children))
    }

    /// A node with no attributes and no children
    pub fn named(name: impl Into<String>) -> ReaderResult<Self> {
        Self::new(name, Vec::<(String, String)>::new(), vec![])
    }

    /// Detached empty node standing in for a child that does not exist.
    ///
    /// Unlike [`QuickReader::new`] this never fails: the placeholder takes the
    /// queried name as-is, even when it is empty.
    pub(super) fn placeholder(name: impl Into<String>) -> Self {
        Self::from_parts(name.into(), vec![], vec![])
    }

    fn from_parts(name: String, attributes: Vec<(String, String)>, children: Vec<QuickReader>) -> Self {
        Self {
            name,
            attributes,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive attribute lookups
    pub fn attributes(&self) -> Attributes<'_> {
        Attributes::new(&self.attributes)
    }

    /// Case-insensitive child lookups
    pub fn children(&self) -> Children<'_> {
        Children::new(&self.children)
    }
}

impl Display for QuickReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Drop for QuickReader {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl PartialEq for QuickReader {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.name != right.name
                || left.attributes != right.attributes
                || left.children.len() != right.children.len()
            {
                return false;
            }
            pending.extend(left.children.iter().zip(&right.children));
        }
        true
    }
}

/// A node being copied while its children are still pending
struct CloneFrame<'a> {
    source: &'a QuickReader,
    next: usize,
    children: Vec<QuickReader>,
}

impl<'a> CloneFrame<'a> {
    fn open(source: &'a QuickReader) -> Self {
        Self {
            source,
            next: 0,
            children: Vec::with_capacity(source.children.len()),
        }
    }
}

impl Clone for QuickReader {
    fn clone(&self) -> Self {
        let mut current = CloneFrame::open(self);
        let mut ancestors: Vec<CloneFrame<'_>> = Vec::new();

        loop {
            let source = current.source;
            if let Some(child) = source.children.get(current.next) {
                current.next += 1;
                ancestors.push(mem::replace(&mut current, CloneFrame::open(child)));
                continue;
            }

            let node = Self::from_parts(
                source.name.clone(),
                source.attributes.clone(),
                mem::take(&mut current.children),
            );
            match ancestors.pop() {
                Some(parent) => {
                    current = parent;
                    current.children.push(node);
                }
                None => return node,
            }
        }
    }
}

/// The single name comparison rule shared by attribute and child lookups
pub fn names_are_equal(first: &str, second: &str) -> bool {
    first == second || first.to_lowercase() == second.to_lowercase()
}
