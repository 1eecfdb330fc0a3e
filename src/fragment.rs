use crate::{child::Child, context::Context, error::Error, tree};
use core::fmt::{self, Debug, Formatter};
use log::trace;
use markup5ever_rcdom::{Handle, Node, NodeData};

/// A document fragment.
///
/// It holds sibling nodes without a root element. Appending it to another
/// node moves its children there and leaves it empty.
#[derive(Clone)]
pub struct DocumentFragment(Handle);

impl DocumentFragment {
    pub(crate) const fn new(handle: Handle) -> Self {
        Self(handle)
    }

    /// Returns a node handle.
    pub const fn handle(&self) -> &Handle {
        &self.0
    }

    /// Returns child nodes.
    pub fn children(&self) -> Vec<Handle> {
        self.0.children.borrow().clone()
    }

    /// Returns a number of child nodes.
    pub fn len(&self) -> usize {
        self.0.children.borrow().len()
    }

    /// Returns `true` if the fragment has no child.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a child.
    pub fn append(&self, context: &Context, child: impl Into<Child>) -> Result<(), Error> {
        tree::append(context, &self.0, child.into())
    }
}

impl Debug for DocumentFragment {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DocumentFragment")
            .field("children", &self.len())
            .finish()
    }
}

impl Context {
    /// Creates an empty document fragment.
    pub fn create_document_fragment(&self) -> DocumentFragment {
        trace!("creating document fragment");

        DocumentFragment::new(Node::new(NodeData::Document))
    }
}
