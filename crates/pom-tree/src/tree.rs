//! XML tree abstraction traits

use crate::error::Result;
use std::fmt::Debug;

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node
    Element,
    /// Attribute node
    Attribute,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Processing instruction node
    ProcessingInstruction,
    /// Namespace node
    Namespace,
}

/// Trait for read access to an XML tree.
///
/// Element names are compared by local name throughout, so a POM that
/// declares the Maven default namespace is navigated the same way as one
/// without any namespace.
pub trait XmlTree {
    /// Type representing a node handle in this tree
    type Node: Clone + Debug;

    /// Type representing a document handle in this tree
    type Document: Clone + Debug;

    /// Parse XML from a string and return a document handle
    fn parse_xml(&mut self, xml: &str) -> Result<Self::Document>;

    /// Get the document element (root element) of a document
    fn document_element(&self, doc: &Self::Document) -> Result<Self::Node>;

    /// Get the document node as a plain node handle
    fn document_node(&self, doc: &Self::Document) -> Self::Node;

    /// Get all children of a node, in document order
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Get the local name of a node (without namespace prefix)
    fn node_local_name(&self, node: &Self::Node) -> Option<String>;

    /// Get the namespace URI of a node, `None` when it has no namespace
    fn node_namespace_uri(&self, node: &Self::Node) -> Option<String>;

    /// Get the text content/value of a node
    fn node_value(&self, node: &Self::Node) -> Option<String>;

    /// Get the type of a node
    fn node_type(&self, node: &Self::Node) -> NodeType;

    /// Serialize a document to a compact XML string
    fn serialize_document(&self, doc: &Self::Document) -> Result<String>;

    /// Serialize a document to an indented XML string
    fn serialize_document_pretty(&self, doc: &Self::Document) -> Result<String>;

    /// Get the element children of a node
    fn child_elements(&self, node: &Self::Node) -> Vec<Self::Node> {
        self.children(node)
            .into_iter()
            .filter(|child| self.node_type(child) == NodeType::Element)
            .collect()
    }

    /// Find the first element child with the given local name
    fn child_element(&self, node: &Self::Node, local_name: &str) -> Option<Self::Node> {
        self.children(node).into_iter().find(|child| {
            self.node_type(child) == NodeType::Element
                && self.node_local_name(child).as_deref() == Some(local_name)
        })
    }
}

/// Trait for trees that support in-place mutation
pub trait MutableXmlTree: XmlTree {
    /// Create a new, detached element node
    fn create_element(&mut self, name: &str, namespace: Option<&str>) -> Result<Self::Node>;

    /// Create a new, detached text node
    fn create_text(&mut self, text: &str) -> Result<Self::Node>;

    /// Append a child as the last child of a node
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<()>;

    /// Remove a node (and its descendants) from the tree
    fn remove_node(&mut self, node: &Self::Node) -> Result<()>;

    /// Append a text child to an element
    fn set_text(&mut self, element: &Self::Node, text: &str) -> Result<()> {
        let text_node = self.create_text(text)?;
        self.append_child(element, &text_node)
    }

    /// Remove whitespace-only text nodes from element-only content below `node`.
    ///
    /// Text inside leaf elements (and inside mixed content) is left alone.
    fn strip_insignificant_whitespace(&mut self, node: &Self::Node) -> Result<()> {
        let children = self.children(node);
        let is_blank = |tree: &Self, child: &Self::Node| {
            tree.node_value(child)
                .is_some_and(|text| text.trim().is_empty())
        };
        let has_elements = children
            .iter()
            .any(|child| self.node_type(child) == NodeType::Element);
        let element_only = has_elements
            && children
                .iter()
                .filter(|child| self.node_type(child) == NodeType::Text)
                .all(|child| is_blank(self, child));

        for child in &children {
            match self.node_type(child) {
                NodeType::Element => self.strip_insignificant_whitespace(child)?,
                NodeType::Text if element_only => self.remove_node(child)?,
                _ => {}
            }
        }
        Ok(())
    }
}
