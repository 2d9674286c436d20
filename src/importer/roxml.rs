use roxmltree::{Attribute, Node};

use super::{SourceElement, SourceNode};

const XML_PREFIX: &str = "xml";
const XML_URI: &str = "http://www.w3.org/XML/1998/namespace";

impl<'a, 'input> SourceElement for Node<'a, 'input> {
    fn local_name(&self) -> &str {
        self.tag_name().name()
    }

    /// Namespace declarations made on this element first, then its attributes
    fn attributes(&self) -> Vec<(String, String)> {
        let mut attributes = declared_namespaces(self);
        attributes.extend(
            Node::attributes(self)
                .map(|attribute| (qualified_name(self, &attribute), attribute.value().to_string())),
        );
        attributes
    }

    fn child_nodes(&self) -> Vec<SourceNode<Self>> {
        self.children()
            .map(|child| {
                if child.is_element() {
                    SourceNode::Element(child)
                } else {
                    SourceNode::Other
                }
            })
            .collect()
    }
}

/// `prefix:name` for namespaced attributes, the bare name otherwise.
/// Only prefixed bindings count: attributes never take the default namespace.
fn qualified_name(node: &Node, attribute: &Attribute) -> String {
    let prefix = attribute.namespace().and_then(|uri| {
        if uri == XML_URI {
            return Some(XML_PREFIX);
        }
        node.namespaces()
            .find(|namespace| namespace.uri() == uri && namespace.name().is_some())
            .and_then(|namespace| namespace.name())
    });
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, attribute.name()),
        None => attribute.name().to_string(),
    }
}

/// `xmlns` / `xmlns:prefix` pairs for bindings that are new on `node`,
/// i.e. not inherited unchanged from its parent element
fn declared_namespaces(node: &Node) -> Vec<(String, String)> {
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|parent| {
            parent
                .namespaces()
                .map(|namespace| (namespace.name(), namespace.uri()))
                .collect()
        })
        .unwrap_or_default();

    node.namespaces()
        .filter(|namespace| namespace.name() != Some(XML_PREFIX))
        .filter(|namespace| !inherited.contains(&(namespace.name(), namespace.uri())))
        .map(|namespace| {
            let key = match namespace.name() {
                Some(prefix) => format!("xmlns:{}", prefix),
                None => "xmlns".to_string(),
            };
            (key, namespace.uri().to_string())
        })
        .collect()
}
