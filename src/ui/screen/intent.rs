use crate::schema::ElementNode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ScreenIntent {
    /// A load was requested. Bumps the generation, so completions of
    /// earlier requests are discarded. `view_id` narrows it to one subtree.
    BeginLoad { view_id: Option<String> },
    /// A full document arrived for request `generation`.
    DocumentLoaded {
        generation: u64,
        document: ElementNode,
    },
    /// A full document arrived for a subtree reload of `view_id`. Only the
    /// matching subtree is taken from it.
    SubtreeLoaded {
        generation: u64,
        view_id: String,
        document: ElementNode,
    },
    LoadFailed { generation: u64, message: String },
}

impl Intent for ScreenIntent {}
