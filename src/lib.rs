//! Case-insensitive, read-only navigation over XML element trees.
//!
//! A [`QuickReader`] is built once, either by hand or through a
//! [`QuickReaderImporter`] walking a document parsed by [`roxmltree`], and is
//! then queried by element and attribute name without caring about letter case
//! or namespace prefixes.
//!
//! ```
//! use quickreader::QuickReaderImporter;
//!
//! let xml = r#"<my:root xmlns:my="http://my.net/my"><Foo id="1"/></my:root>"#;
//! let doc = roxmltree::Document::parse(xml).unwrap();
//! let root = QuickReaderImporter::new().import_document(&doc).unwrap();
//!
//! assert_eq!(root.to_string(), "root");
//! assert_eq!(root.children().get("foo").attributes().get("ID"), "1");
//! assert_eq!(root.children().get("bar").attributes().get("id"), "");
//!
//! // `find` borrows from the tree, so intermediate steps can be kept
//! let foo = root.children().find("FOO").unwrap();
//! assert_eq!(foo.attributes().get("id"), "1");
//! ```

/// Conversion of parsed documents into [`QuickReader`] trees
pub mod importer;
/// The immutable tree and its lookup views
pub mod reader;

pub use importer::{ImportError, ImportOptions, QuickReaderImporter, SourceElement, SourceNode};
pub use reader::{names_are_equal, Attributes, Children, QuickReader, ReaderError};

#[cfg(test)]
pub(crate) fn init_tracing() {
    use tracing::Level;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
