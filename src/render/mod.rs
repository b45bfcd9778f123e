//! Toolkit-independent render objects produced by the element mapper.

pub mod props;
pub mod tokens;
mod tree;

pub use props::RenderKind;
pub use tokens::{Color, Font, FontWeight};
pub use tree::{
    AppliedStyle, Attachment, Border, EdgeInsets, RenderId, RenderNode, RenderTree, Shadow,
    StyleRule, Trigger, TriggerKind,
};
