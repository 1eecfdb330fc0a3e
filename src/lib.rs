#![doc = include_str!("../README.md")]

extern crate alloc;

mod attribute;
mod child;
mod context;
mod element;
mod error;
mod fragment;
mod html_parser;
mod macros;
mod serialize;
pub mod snapshot;
mod tree;

pub use self::{
    attribute::AttributeValue,
    child::Child,
    context::{Context, ContextOptions},
    error::Error,
    fragment::DocumentFragment,
};
pub use markup5ever_rcdom::Handle;
