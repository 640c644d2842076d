//! XmlTree implementation for xot

use pom_tree::{
    error::{Error, Result},
    tree::{MutableXmlTree, NodeType, XmlTree},
};
use xot::output::{xml::Parameters, Indentation};
use xot::{Node, Xot};

/// Wrapper around Xot that implements the tree traits
#[derive(Debug)]
pub struct XotTree {
    xot: Xot,
}

impl XotTree {
    /// Create a new XotTree
    pub fn new() -> Self {
        Self { xot: Xot::new() }
    }

    fn name_parts(&self, node: Node) -> Option<(&str, &str)> {
        self.xot
            .element(node)
            .map(|element| self.xot.name_ns_str(element.name()))
    }
}

impl Default for XotTree {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlTree for XotTree {
    type Node = Node;
    type Document = Node; // In xot, document is also a Node

    fn parse_xml(&mut self, xml: &str) -> Result<Self::Document> {
        self.xot
            .parse(xml)
            .map_err(|e| Error::XmlParse(e.to_string()))
    }

    fn document_element(&self, doc: &Self::Document) -> Result<Self::Node> {
        self.xot
            .children(*doc)
            .find(|child| self.xot.is_element(*child))
            .ok_or_else(|| Error::node_access("Document has no root element"))
    }

    fn document_node(&self, doc: &Self::Document) -> Self::Node {
        *doc
    }

    fn children(&self, node: &Self::Node) -> Vec<Self::Node> {
        self.xot.children(*node).collect()
    }

    fn node_local_name(&self, node: &Self::Node) -> Option<String> {
        self.name_parts(*node)
            .map(|(local_name, _)| local_name.to_string())
    }

    fn node_namespace_uri(&self, node: &Self::Node) -> Option<String> {
        self.name_parts(*node)
            .map(|(_, uri)| uri)
            .filter(|uri| !uri.is_empty())
            .map(str::to_string)
    }

    fn node_value(&self, node: &Self::Node) -> Option<String> {
        match self.xot.value(*node) {
            xot::Value::Text(text) => Some(text.get().to_string()),
            xot::Value::Comment(comment) => Some(comment.get().to_string()),
            xot::Value::Element(_) => {
                // For elements, return the text content
                Some(self.xot.text_content_str(*node).unwrap_or_default().to_string())
            }
            _ => None,
        }
    }

    fn node_type(&self, node: &Self::Node) -> NodeType {
        match self.xot.value(*node) {
            xot::Value::Document => NodeType::Document,
            xot::Value::Element(_) => NodeType::Element,
            xot::Value::Text(_) => NodeType::Text,
            xot::Value::Comment(_) => NodeType::Comment,
            xot::Value::ProcessingInstruction(_) => NodeType::ProcessingInstruction,
            xot::Value::Attribute(_) => NodeType::Attribute,
            xot::Value::Namespace(_) => NodeType::Namespace,
        }
    }

    fn serialize_document(&self, doc: &Self::Document) -> Result<String> {
        self.xot
            .to_string(*doc)
            .map_err(|e| Error::serialize(e.to_string()))
    }

    fn serialize_document_pretty(&self, doc: &Self::Document) -> Result<String> {
        let parameters = Parameters {
            indentation: Some(Indentation::default()),
            ..Default::default()
        };
        self.xot
            .serialize_xml_string(parameters, *doc)
            .map_err(|e| Error::serialize(e.to_string()))
    }
}

impl MutableXmlTree for XotTree {
    fn create_element(&mut self, name: &str, namespace: Option<&str>) -> Result<Self::Node> {
        let name_id = match namespace {
            Some(uri) if !uri.is_empty() => {
                let namespace_id = self.xot.add_namespace(uri);
                self.xot.add_name_ns(name, namespace_id)
            }
            _ => self.xot.add_name(name),
        };
        Ok(self.xot.new_element(name_id))
    }

    fn create_text(&mut self, text: &str) -> Result<Self::Node> {
        Ok(self.xot.new_text(text))
    }

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<()> {
        self.xot
            .append(*parent, *child)
            .map_err(|e| Error::mutation(e.to_string()))
    }

    fn remove_node(&mut self, node: &Self::Node) -> Result<()> {
        self.xot
            .remove(*node)
            .map_err(|e| Error::mutation(e.to_string()))
    }
}
