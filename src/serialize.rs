use crate::{context::Context, error::Error};
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use markup5ever_rcdom::{Handle, NodeData, SerializableHandle};

impl Context {
    /// Serializes a node including itself.
    ///
    /// Fragments are serialized as their children.
    pub fn outer_html(&self, node: &Handle) -> Result<String, Error> {
        if matches!(node.data, NodeData::Document) {
            self.inner_html(node)
        } else {
            self.serialize(node, TraversalScope::IncludeNode)
        }
    }

    /// Serializes children of a node.
    pub fn inner_html(&self, node: &Handle) -> Result<String, Error> {
        self.serialize(node, TraversalScope::ChildrenOnly(None))
    }

    fn serialize(&self, node: &Handle, scope: TraversalScope) -> Result<String, Error> {
        let mut bytes = vec![];

        serialize(
            &mut bytes,
            &SerializableHandle::from(node.clone()),
            SerializeOpts {
                scripting_enabled: self.options().scripting_enabled(),
                traversal_scope: scope,
                ..Default::default()
            },
        )?;

        Ok(String::from_utf8(bytes)?)
    }

    /// Returns text content of a node and its descendants.
    #[allow(clippy::unused_self)]
    pub fn text_content(&self, node: &Handle) -> String {
        let mut text = String::new();
        collect_text(node, &mut text);
        text
    }
}

fn collect_text(node: &Handle, text: &mut String) {
    match &node.data {
        NodeData::Text { contents } => text.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document => {
            for child in node.children.borrow().iter() {
                collect_text(child, text);
            }
        }
        NodeData::Comment { .. }
        | NodeData::Doctype { .. }
        | NodeData::ProcessingInstruction { .. } => {}
    }
}
