//! DOM mutation primitives.

use crate::{child::Child, context::Context, error::Error};
use alloc::rc::Rc;
use core::cell::RefCell;
use html5ever::{
    Attribute, LocalName, Namespace, QualName,
    tendril::StrTendril,
    tree_builder::{NodeOrText, TreeSink},
};
use log::trace;
use markup5ever_rcdom::{Handle, Node, NodeData};

const INVALID_NAME_CHARACTERS: &[char] = &['<', '>', '/', '=', '"', '\''];

/// Creates a text node.
pub fn create_text_node(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(text)),
    })
}

/// Appends a child to a parent node.
pub fn append(context: &Context, parent: &Handle, child: Child) -> Result<(), Error> {
    match child {
        Child::Node(node) => append_child(context, parent, &node),
        Child::Skip => Ok(()),
        Child::Text(text) => append_child(context, parent, &create_text_node(&text)),
    }
}

/// Appends a node to a parent node.
///
/// The node is detached from its previous parent first. Fragments have their
/// children moved instead.
pub fn append_child(context: &Context, parent: &Handle, child: &Handle) -> Result<(), Error> {
    if !is_container(parent)
        || Rc::ptr_eq(child, context.document())
        || is_inclusive_ancestor(child, parent)
    {
        return Err(Error::HierarchyRequest);
    }

    if is_fragment(context, child) {
        trace!("moving {} fragment children", child.children.borrow().len());

        context.dom().reparent_children(child, parent);
    } else {
        detach(context, child);
        context
            .dom()
            .append(parent, NodeOrText::AppendNode(child.clone()));
    }

    Ok(())
}

/// Removes a node from its parent.
pub fn detach(context: &Context, node: &Handle) {
    context.dom().remove_from_parent(node);
}

/// Returns a parent node.
pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take()?;
    let parent = weak.upgrade();
    node.parent.set(Some(weak));
    parent
}

/// Sets an attribute on an element, replacing an existing one of the same name.
pub fn set_attribute(
    context: &Context,
    element: &Handle,
    name: &str,
    value: String,
) -> Result<(), Error> {
    let name = name.to_ascii_lowercase();
    check_name(context, &name)?;

    let NodeData::Element { attrs, .. } = &element.data else {
        return Err(Error::HierarchyRequest);
    };
    let mut attributes = attrs.borrow_mut();

    if let Some(attribute) = attributes
        .iter_mut()
        .find(|attribute| &*attribute.name.local == name.as_str())
    {
        attribute.value = value.into();
    } else {
        attributes.push(Attribute {
            name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
            value: value.into(),
        });
    }

    Ok(())
}

/// Validates a tag or attribute name.
///
/// A name starts with a letter, `_` or `:` and contains no whitespace, control
/// characters or markup delimiters.
pub fn validate_name(name: &str) -> Result<(), Error> {
    let Some(first) = name.chars().next() else {
        return Err(Error::InvalidCharacter(name.into()));
    };

    if !(first.is_alphabetic() || first == '_' || first == ':')
        || name.chars().any(|character| {
            character.is_whitespace()
                || character.is_control()
                || INVALID_NAME_CHARACTERS.contains(&character)
        })
    {
        Err(Error::InvalidCharacter(name.into()))
    } else {
        Ok(())
    }
}

/// Validates a name if the context requires it.
pub fn check_name(context: &Context, name: &str) -> Result<(), Error> {
    if context.options().validate_names() {
        validate_name(name)
    } else {
        Ok(())
    }
}

fn is_container(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. } | NodeData::Document)
}

fn is_fragment(context: &Context, node: &Handle) -> bool {
    matches!(node.data, NodeData::Document) && !Rc::ptr_eq(node, context.document())
}

fn is_inclusive_ancestor(node: &Handle, descendant: &Handle) -> bool {
    let mut current = Some(descendant.clone());

    while let Some(handle) = current {
        if Rc::ptr_eq(&handle, node) {
            return true;
        }

        current = parent(&handle);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_div(context: &Context) -> Handle {
        context
            .create_element("div", Vec::<(String, bool)>::new(), Vec::<Child>::new())
            .unwrap()
    }

    #[test]
    fn validate_names() {
        assert_eq!(validate_name("div"), Ok(()));
        assert_eq!(validate_name("data-foo"), Ok(()));
        assert_eq!(validate_name("x:y"), Ok(()));
        assert_eq!(validate_name(""), Err(Error::InvalidCharacter("".into())));
        assert_eq!(
            validate_name("a b"),
            Err(Error::InvalidCharacter("a b".into()))
        );
        assert_eq!(validate_name("a>"), Err(Error::InvalidCharacter("a>".into())));
    }

    #[test]
    fn validate_first_name_character() {
        assert_eq!(validate_name("_a"), Ok(()));
        assert_eq!(validate_name(":a"), Ok(()));
        assert_eq!(validate_name("h1"), Ok(()));
        assert_eq!(validate_name("1a"), Err(Error::InvalidCharacter("1a".into())));
        assert_eq!(validate_name("-x"), Err(Error::InvalidCharacter("-x".into())));
    }

    #[test]
    fn move_node_between_parents() {
        let context = Context::new();
        let first = create_div(&context);
        let second = create_div(&context);
        let child = create_text_node("foo");

        append_child(&context, &first, &child).unwrap();
        append_child(&context, &second, &child).unwrap();

        assert!(first.children.borrow().is_empty());
        assert_eq!(second.children.borrow().len(), 1);
        assert!(Rc::ptr_eq(&parent(&child).unwrap(), &second));
    }

    #[test]
    fn reject_ancestor() {
        let context = Context::new();
        let outer = create_div(&context);
        let inner = create_div(&context);

        append_child(&context, &outer, &inner).unwrap();

        assert_eq!(
            append_child(&context, &inner, &outer),
            Err(Error::HierarchyRequest)
        );
        assert_eq!(
            append_child(&context, &outer, &outer),
            Err(Error::HierarchyRequest)
        );
    }

    #[test]
    fn reject_document() {
        let context = Context::new();
        let element = create_div(&context);

        assert_eq!(
            append_child(&context, &element, context.document()),
            Err(Error::HierarchyRequest)
        );
    }

    #[test]
    fn reject_text_parent() {
        let context = Context::new();
        let text = create_text_node("foo");

        assert_eq!(
            append_child(&context, &text, &create_text_node("bar")),
            Err(Error::HierarchyRequest)
        );
    }

    #[test]
    fn move_fragment_children() {
        let context = Context::new();
        let fragment = context.create_document_fragment();
        let element = create_div(&context);

        fragment.append(&context, "foo").unwrap();
        fragment.append(&context, "bar").unwrap();
        append_child(&context, &element, fragment.handle()).unwrap();

        assert!(fragment.is_empty());
        assert_eq!(element.children.borrow().len(), 2);

        for child in element.children.borrow().iter() {
            assert!(Rc::ptr_eq(&parent(child).unwrap(), &element));
        }
    }

    #[test]
    fn move_fragment_children_after_existing_ones() {
        let context = Context::new();
        let fragment = context.create_document_fragment();
        let element = create_div(&context);
        let first = create_text_node("first");

        append_child(&context, &element, &first).unwrap();
        fragment.append(&context, "second").unwrap();
        append_child(&context, &element, fragment.handle()).unwrap();

        assert_eq!(context.text_content(&element), "firstsecond");
        assert!(fragment.is_empty());

        fragment.append(&context, "third").unwrap();

        assert_eq!(fragment.len(), 1);
        assert_eq!(element.children.borrow().len(), 2);
    }

    #[test]
    fn detach_node() {
        let context = Context::new();
        let element = create_div(&context);
        let child = create_text_node("foo");

        append_child(&context, &element, &child).unwrap();
        detach(&context, &child);
        detach(&context, &child);

        assert!(element.children.borrow().is_empty());
        assert!(parent(&child).is_none());
    }

    #[test]
    fn replace_attribute() {
        let context = Context::new();
        let element = create_div(&context);

        set_attribute(&context, &element, "ID", "foo".into()).unwrap();
        set_attribute(&context, &element, "id", "bar".into()).unwrap();

        let NodeData::Element { attrs, .. } = &element.data else {
            unreachable!()
        };
        let attributes = attrs.borrow();

        assert_eq!(attributes.len(), 1);
        assert_eq!(&*attributes[0].name.local, "id");
        assert_eq!(&*attributes[0].value, "bar");
    }
}
