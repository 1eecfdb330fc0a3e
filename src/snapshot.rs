//! Owned snapshots of DOM trees.
//!
//! Snapshots drop node identity, so two trees built from the same inputs
//! compare equal.

use crate::fragment::DocumentFragment;
use markup5ever_rcdom::NodeData;

/// A fragment snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fragment {
    children: Vec<Node>,
}

impl Fragment {
    /// Creates a fragment snapshot.
    pub const fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Takes a snapshot of a document fragment.
    pub fn from_fragment(fragment: &DocumentFragment) -> Self {
        Self::new(collect_children(fragment.handle()))
    }

    /// Returns children.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }
}

/// A node snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    /// An element.
    Element(Element),
    /// A text.
    Text(String),
}

impl Node {
    /// Takes a snapshot of an element or text node.
    ///
    /// Other kinds of nodes have no snapshot.
    pub fn from_markup5ever(node: &markup5ever_rcdom::Node) -> Option<Self> {
        match &node.data {
            NodeData::Element { name, attrs, .. } => Some(Self::Element(Element::new(
                name.local.to_string(),
                attrs
                    .borrow()
                    .iter()
                    .map(|attribute| {
                        (
                            attribute.name.local.to_string(),
                            attribute.value.to_string(),
                        )
                    })
                    .collect(),
                collect_children(node),
            ))),
            NodeData::Text { contents } => Some(Self::Text(contents.borrow().to_string())),
            NodeData::Comment { .. }
            | NodeData::Document
            | NodeData::Doctype { .. }
            | NodeData::ProcessingInstruction { .. } => None,
        }
    }
}

/// An element snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element snapshot.
    pub const fn new(
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name,
            attributes,
            children,
        }
    }

    /// Returns a tag name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    /// Returns children.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

fn collect_children(node: &markup5ever_rcdom::Node) -> Vec<Node> {
    node.children
        .borrow()
        .iter()
        .flat_map(|node| Node::from_markup5ever(node))
        .collect()
}
