//! Typed model of backend-described UI documents.
//!
//! A document is a tree of [`ElementNode`]s. Each node has a kind, optional
//! styling, free-form `content`, child nodes and actions bound to triggers.
//! `content` and action payloads stay opaque here: the mapper decides what
//! they mean, so new server-side keys never break decoding.

mod action;
mod decode;
mod element;
mod error;
mod value;

pub use action::{ActionType, BduiAction};
pub use decode::{decode, decode_str, decode_value};
pub use element::{ElementNode, ElementStyles, ElementType, PaddingStyle, TAP, TEXT_CHANGE};
pub use error::SchemaError;
pub use value::{Value, ValueMap};
