use crate::{context::Context, error::Error, fragment::DocumentFragment};
use html5ever::{
    LocalName, Namespace, ParseOpts, QualName, parse_fragment,
    tendril::TendrilSink,
    tree_builder::{TreeBuilderOpts, TreeSink},
};
use log::trace;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

impl Context {
    /// Parses HTML markup into a document fragment.
    ///
    /// The markup is parsed in a `<template>` context, so any content
    /// including table parts and head elements is kept.
    pub fn parse_fragment(&self, markup: &str) -> Result<DocumentFragment, Error> {
        trace!("parsing {} bytes of markup", markup.len());

        let scripting_enabled = self.options().scripting_enabled();
        let dom = parse_fragment(
            RcDom::default(),
            ParseOpts {
                tree_builder: TreeBuilderOpts {
                    scripting_enabled,
                    ..Default::default()
                },
                ..Default::default()
            },
            QualName::new(
                None,
                Namespace::from(HTML_NAMESPACE),
                LocalName::from("template"),
            ),
            vec![],
            scripting_enabled,
        )
        .one(markup);
        let fragment = self.create_document_fragment();

        if let Some(root) = find_root(&dom.document) {
            self.dom().reparent_children(&root, fragment.handle());
        }

        Ok(fragment)
    }
}

fn find_root(document: &Handle) -> Option<Handle> {
    document
        .children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
}
