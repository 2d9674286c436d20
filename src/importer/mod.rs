use std::mem;

use tracing::{span, trace, Level};

use crate::reader::QuickReader;

mod error;
mod roxml;

pub use error::{ImportError, ImportResult};

/// An element of an already parsed document, as exposed by a markup parser
pub trait SourceElement: Sized {
    /// Tag name without any namespace prefix
    fn local_name(&self) -> &str;

    /// Attribute name/value pairs in the order the parser reports them
    fn attributes(&self) -> Vec<(String, String)>;

    /// Direct child nodes in document order
    fn child_nodes(&self) -> Vec<SourceNode<Self>>;
}

/// A child node of a [`SourceElement`]. Anything that is not an element
/// (text, comments, processing instructions) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceNode<E> {
    Element(E),
    Other,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Deepest element nesting accepted, counting the imported element as 1.
    /// `None` accepts any depth.
    pub max_depth: Option<usize>,
}

impl ImportOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Builds [`QuickReader`] trees out of parsed documents
#[derive(Debug, Default, Clone)]
pub struct QuickReaderImporter {
    options: ImportOptions,
}

impl QuickReaderImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Imports the root element of `document`
    pub fn import_document(&self, document: &roxmltree::Document<'_>) -> ImportResult<QuickReader> {
        self.import_node(document.root_element())
    }

    /// Imports `element` and every element below it.
    ///
    /// Elements are visited with an explicit stack, so nesting depth is not
    /// bounded by the call stack. Each node is built once all of its children
    /// are, which is where [`QuickReader::new`] validation happens.
    pub fn import_node<E: SourceElement>(&self, element: E) -> ImportResult<QuickReader> {
        let span = span!(Level::DEBUG, "Importing element", name = element.local_name());
        let _enter = span.enter();

        self.check_depth(1)?;
        let mut current = PendingNode::open(element);
        let mut ancestors: Vec<PendingNode<E>> = Vec::new();

        loop {
            match current.pending.next() {
                Some(SourceNode::Element(child)) => {
                    self.check_depth(ancestors.len() + 2)?;
                    let parent = mem::replace(&mut current, PendingNode::open(child));
                    ancestors.push(parent);
                }
                Some(SourceNode::Other) => {}
                None => {
                    let node = current.close()?;
                    match ancestors.pop() {
                        Some(parent) => {
                            current = parent;
                            current.children.push(node);
                        }
                        None => return Ok(node),
                    }
                }
            }
        }
    }

    fn check_depth(&self, depth: usize) -> ImportResult<()> {
        match self.options.max_depth {
            Some(limit) if depth > limit => Err(ImportError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

/// An element whose children are still being imported
struct PendingNode<E> {
    name: String,
    attributes: Vec<(String, String)>,
    pending: std::vec::IntoIter<SourceNode<E>>,
    children: Vec<QuickReader>,
}

impl<E: SourceElement> PendingNode<E> {
    fn open(element: E) -> Self {
        trace!(name = element.local_name(), "Opening element");
        Self {
            name: element.local_name().to_string(),
            attributes: element.attributes(),
            pending: element.child_nodes().into_iter(),
            children: Vec::new(),
        }
    }

    fn close(self) -> ImportResult<QuickReader> {
        Ok(QuickReader::new(self.name, self.attributes, self.children)?)
    }
}
