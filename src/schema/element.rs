//! Element nodes of a decoded UI document.

use std::collections::BTreeMap;
use std::fmt;

use super::action::BduiAction;
use super::value::{Value, ValueMap};

/// Trigger name for tap actions.
pub const TAP: &str = "tap";
/// Trigger name for text change actions on text inputs.
pub const TEXT_CHANGE: &str = "textChange";

/// Kind of element a node describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Button,
    Card,
    Label,
    TextInput,
    StackView,
    ContentView,
}

impl ElementType {
    /// Parse the wire tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "button" => Some(ElementType::Button),
            "card" => Some(ElementType::Card),
            "label" => Some(ElementType::Label),
            "textInput" => Some(ElementType::TextInput),
            "stackView" => Some(ElementType::StackView),
            "contentView" => Some(ElementType::ContentView),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ElementType::Button => "button",
            ElementType::Card => "card",
            ElementType::Label => "label",
            ElementType::TextInput => "textInput",
            ElementType::StackView => "stackView",
            ElementType::ContentView => "contentView",
        }
    }

    /// Whether nodes of this kind attach their `subviews`.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ElementType::Card | ElementType::StackView | ElementType::ContentView
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Per-edge padding. Missing edges are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaddingStyle {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub bottom: Option<f64>,
    pub right: Option<f64>,
}

/// Shared styling attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementStyles {
    /// Hex colour such as `#FF0000`.
    pub background_color: Option<String>,
    /// Token (`small`, `medium`, `large`) or a numeric string.
    pub corner_radius: Option<String>,
    pub padding: Option<PaddingStyle>,
}

/// One node of the UI document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub element_type: ElementType,
    pub id: Option<String>,
    pub styles: Option<ElementStyles>,
    pub content: Option<ValueMap>,
    pub subviews: Option<Vec<ElementNode>>,
    pub actions: Option<BTreeMap<String, BduiAction>>,
}

impl ElementNode {
    /// A bare node of the given kind with every optional field absent.
    pub fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            id: None,
            styles: None,
            content: None,
            subviews: None,
            actions: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_styles(mut self, styles: ElementStyles) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.content
            .get_or_insert_with(ValueMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_subview(mut self, child: ElementNode) -> Self {
        self.subviews.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn with_action(mut self, trigger: impl Into<String>, action: BduiAction) -> Self {
        self.actions
            .get_or_insert_with(BTreeMap::new)
            .insert(trigger.into(), action);
        self
    }

    /// Look up a content value by key.
    pub fn content_value(&self, key: &str) -> Option<&Value> {
        self.content.as_ref().and_then(|content| content.get(key))
    }

    /// Look up the action bound to a trigger name.
    pub fn action(&self, trigger: &str) -> Option<&BduiAction> {
        self.actions.as_ref().and_then(|actions| actions.get(trigger))
    }

    pub fn children(&self) -> &[ElementNode] {
        self.subviews.as_deref().unwrap_or(&[])
    }

    /// Depth-first search for the first node carrying `id`, this node included.
    pub fn find_by_id(&self, id: &str) -> Option<&ElementNode> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_by_id(id))
    }

    /// Swap the first node carrying `id` (depth-first, this node included)
    /// for `replacement`. Returns whether a node was replaced.
    pub fn replace_by_id(&mut self, id: &str, replacement: ElementNode) -> bool {
        if self.id.as_deref() == Some(id) {
            *self = replacement;
            return true;
        }
        let Some(children) = self.subviews.as_mut() else {
            return false;
        };
        for child in children.iter_mut() {
            if child.find_by_id(id).is_some() {
                return child.replace_by_id(id, replacement);
            }
        }
        false
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ElementNode::node_count)
            .sum::<usize>()
    }
}
