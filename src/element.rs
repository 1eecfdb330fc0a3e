use crate::{attribute::AttributeValue, child::Child, context::Context, error::Error, tree};
use html5ever::{LocalName, Namespace, QualName, tree_builder::create_element};
use log::trace;
use markup5ever_rcdom::Handle;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

impl Context {
    /// Creates an element with attributes and children.
    ///
    /// Attributes with absent or `false` values are skipped. String children
    /// become text nodes and skipped children are dropped.
    pub fn create_element<K: AsRef<str>, V: Into<AttributeValue>, C: Into<Child>>(
        &self,
        tag: &str,
        attributes: impl IntoIterator<Item = (K, V)>,
        children: impl IntoIterator<Item = C>,
    ) -> Result<Handle, Error> {
        let tag = tag.to_ascii_lowercase();
        tree::check_name(self, &tag)?;

        trace!("creating <{tag}> element");

        let element = create_element(
            self.dom(),
            QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag)),
            vec![],
        );

        for (name, value) in attributes {
            if let Some(value) = AttributeValue::into_written(value.into()) {
                tree::set_attribute(self, &element, name.as_ref(), value)?;
            }
        }

        for child in children {
            tree::append(self, &element, child.into())?;
        }

        Ok(element)
    }

    /// Creates a text node.
    pub fn create_text_node(&self, text: &str) -> Handle {
        trace!("creating text node");

        tree::create_text_node(text)
    }
}
