mod options;

pub use self::options::ContextOptions;
use markup5ever_rcdom::{Handle, RcDom};

/// A DOM context.
///
/// It owns a document which every node created through it belongs to.
/// Contexts are single-threaded and meant to be created once per test and
/// passed down by reference.
pub struct Context {
    dom: RcDom,
    options: ContextOptions,
}

impl Context {
    /// Creates a context with default options.
    pub fn new() -> Self {
        Self::with_options(ContextOptions::default())
    }

    /// Creates a context with options.
    pub fn with_options(options: ContextOptions) -> Self {
        Self {
            dom: RcDom::default(),
            options,
        }
    }

    /// Returns options.
    pub const fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Returns a document node.
    pub const fn document(&self) -> &Handle {
        &self.dom.document
    }

    pub(crate) const fn dom(&self) -> &RcDom {
        &self.dom
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
