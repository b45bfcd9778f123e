//! Shared test utilities, fixtures and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use bdui::loader::{DocumentSource, LoaderError};
use bdui::render::{RenderId, RenderKind, RenderTree};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A screen with a reloadable `mainStack` next to a footer card.
pub const SCREEN: &str = r##"{
    "type": "contentView",
    "id": "rootView",
    "styles": { "backgroundColor": "#FFFFFF" },
    "subviews": [
        {
            "type": "stackView",
            "id": "mainStack",
            "styles": { "padding": { "top": 20, "left": 20, "bottom": 20, "right": 20 } },
            "content": { "axis": "vertical", "spacing": "large", "alignment": "center" },
            "subviews": [
                {
                    "type": "label",
                    "id": "titleLabel",
                    "content": { "text": "Welcome", "style": "headline" }
                },
                {
                    "type": "textInput",
                    "id": "nameInput",
                    "content": { "placeholder": "Enter your name", "style": "outlined" },
                    "actions": {
                        "textChange": {
                            "type": "custom",
                            "payload": { "name": "nameChanged", "data": { "field": "name" } }
                        }
                    }
                },
                {
                    "type": "button",
                    "id": "submitButton",
                    "content": { "title": "Submit" },
                    "actions": {
                        "tap": {
                            "type": "custom",
                            "payload": { "name": "submitForm", "data": { "formId": "signup" } }
                        }
                    }
                }
            ]
        },
        {
            "type": "card",
            "id": "footerCard",
            "content": { "title": "Footer", "style": "outlined" },
            "subviews": [
                {
                    "type": "button",
                    "id": "refreshButton",
                    "content": { "title": "Refresh", "style": "text" },
                    "actions": { "tap": { "type": "reload", "payload": { "viewId": "mainStack" } } }
                },
                {
                    "type": "button",
                    "id": "detailsButton",
                    "content": { "title": "Details", "style": "secondary" },
                    "actions": {
                        "tap": {
                            "type": "navigate",
                            "payload": {
                                "route": "https://example.com/details",
                                "parameters": { "itemId": "12345" }
                            }
                        }
                    }
                },
                {
                    "type": "button",
                    "id": "closeButton",
                    "content": { "title": "Close" },
                    "actions": { "tap": { "type": "dismiss", "payload": { "animated": false } } }
                }
            ]
        }
    ]
}"##;

/// Same screen as [`SCREEN`] after the server changed the main stack.
pub const SCREEN_UPDATED: &str = r##"{
    "type": "contentView",
    "id": "rootView",
    "styles": { "backgroundColor": "#000000" },
    "subviews": [
        {
            "type": "stackView",
            "id": "mainStack",
            "subviews": [
                { "type": "label", "id": "titleLabel", "content": { "text": "Welcome back" } },
                { "type": "label", "id": "statusLabel", "content": { "text": "Saved", "style": "caption" } }
            ]
        },
        {
            "type": "card",
            "id": "footerCard",
            "content": { "title": "Changed footer" }
        }
    ]
}"##;

/// Document source that replays scripted responses, then keeps returning
/// the last one.
#[derive(Clone)]
pub struct ScriptedSource {
    responses: Arc<Mutex<VecDeque<Option<String>>>>,
    fetches: Arc<Mutex<usize>>,
}

impl ScriptedSource {
    /// `None` entries fail with [`LoaderError::EmptyBody`].
    pub fn new(responses: &[Option<&str>]) -> Self {
        Self {
            responses: Arc::new(Mutex::new(
                responses.iter().map(|r| r.map(str::to_string)).collect(),
            )),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock()
    }
}

impl DocumentSource for ScriptedSource {
    fn describe(&self) -> String {
        "scripted".to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoaderError> {
        *self.fetches.lock() += 1;
        let next = {
            let mut responses = self.responses.lock();
            if responses.len() > 1 {
                responses.pop_front().flatten()
            } else {
                responses.front().cloned().flatten()
            }
        };
        next.map(String::into_bytes).ok_or(LoaderError::EmptyBody)
    }
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Render tree helpers ------------------------------------------------------

/// Text of a label render object.
pub fn label_text(tree: &RenderTree, id: RenderId) -> Option<String> {
    match &tree.get(id)?.kind {
        RenderKind::Label(props) => Some(props.text.clone()),
        _ => None,
    }
}

/// Element ids of every object in the tree, in document order.
pub fn element_ids(tree: &RenderTree) -> Vec<String> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };
    tree.subtree(root)
        .into_iter()
        .filter_map(|id| tree.get(id).and_then(|node| node.element_id.clone()))
        .collect()
}

pub fn id_of(tree: &RenderTree, element_id: &str) -> RenderId {
    tree.find_by_element_id(element_id)
        .unwrap_or_else(|| panic!("no element '{}' in tree", element_id))
}
