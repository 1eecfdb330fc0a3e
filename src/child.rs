use crate::fragment::DocumentFragment;
use markup5ever_rcdom::Handle;

/// A child given to element builders.
#[derive(Clone)]
pub enum Child {
    /// A node appended as it is.
    Node(Handle),
    /// A placeholder which is skipped.
    Skip,
    /// A string converted into a text node.
    Text(String),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Child {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Handle> for Child {
    fn from(node: Handle) -> Self {
        Self::Node(node)
    }
}

impl From<&Handle> for Child {
    fn from(node: &Handle) -> Self {
        Self::Node(node.clone())
    }
}

impl From<DocumentFragment> for Child {
    fn from(fragment: DocumentFragment) -> Self {
        Self::Node(fragment.handle().clone())
    }
}

impl From<&DocumentFragment> for Child {
    fn from(fragment: &DocumentFragment) -> Self {
        Self::Node(fragment.handle().clone())
    }
}

impl<T: Into<Self>> From<Option<T>> for Child {
    fn from(child: Option<T>) -> Self {
        child.map_or(Self::Skip, Into::into)
    }
}
