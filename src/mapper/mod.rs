//! Recursive interpreter from decoded element nodes to a [`RenderTree`].
//!
//! Mapping fails soft: a node that cannot be mapped is logged and skipped,
//! its siblings are still mapped.

mod content;
mod style;

use thiserror::Error;

use crate::config::MapperSettings;
use crate::render::{EdgeInsets, RenderId, RenderKind, RenderTree, Trigger, TriggerKind};
use crate::schema::{ElementNode, ElementType, TAP, TEXT_CHANGE};

pub use content::CARD_INSETS;

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MapError {
    #[error("{element} at depth {depth} exceeds the maximum depth of {max_depth}")]
    DepthExceeded {
        element: ElementType,
        depth: usize,
        max_depth: usize,
    },

    #[error("No element with id '{element_id}' in the render tree")]
    UnknownElementId { element_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementMapper {
    max_depth: usize,
}

impl Default for ElementMapper {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&MapperSettings> for ElementMapper {
    fn from(settings: &MapperSettings) -> Self {
        Self::with_max_depth(settings.max_depth)
    }
}

impl ElementMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes deeper than `max_depth` (the root being at depth 0) are skipped.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build a fresh render tree rooted at `node`.
    ///
    /// Returns `None` only when the root itself cannot be mapped.
    pub fn map(&self, node: &ElementNode) -> Option<RenderTree> {
        let mut tree = RenderTree::new();
        let root = self.map_node(&mut tree, node, 0)?;
        tree.set_root(Some(root));
        Some(tree)
    }

    /// Replace the subtree tagged `element_id` with a mapping of `node`.
    ///
    /// The replacement takes the old subtree's position among its siblings
    /// and is inset the way its parent container insets children. Objects
    /// outside the subtree are untouched. Returns the new subtree root, or
    /// `None` when the replacement maps to nothing (the old subtree is
    /// removed either way).
    pub fn rebuild_subtree(
        &self,
        tree: &mut RenderTree,
        element_id: &str,
        node: &ElementNode,
    ) -> Result<Option<RenderId>, MapError> {
        let old = tree
            .find_by_element_id(element_id)
            .ok_or_else(|| MapError::UnknownElementId {
                element_id: element_id.to_string(),
            })?;
        let depth = tree.depth(old);
        let was_root = tree.root() == Some(old);

        let slot = tree.remove_subtree(old);
        let replacement = self.map_node(tree, node, depth);

        match (slot, replacement) {
            (Some((parent, index)), Some(child)) => {
                let insets = tree
                    .get(parent)
                    .map(|parent| attachment_insets(&parent.kind, node))
                    .unwrap_or(EdgeInsets::ZERO);
                tree.attach(parent, child, insets, Some(index));
            }
            _ if was_root => tree.set_root(replacement),
            _ => {}
        }

        tracing::debug!(
            element_id,
            replaced = replacement.is_some(),
            "Rebuilt subtree"
        );
        Ok(replacement)
    }

    fn map_node(&self, tree: &mut RenderTree, node: &ElementNode, depth: usize) -> Option<RenderId> {
        match self.try_map(tree, node, depth) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::debug!(error = %err, id = node.id.as_deref().unwrap_or(""), "Skipping element");
                None
            }
        }
    }

    fn try_map(
        &self,
        tree: &mut RenderTree,
        node: &ElementNode,
        depth: usize,
    ) -> Result<RenderId, MapError> {
        if depth > self.max_depth {
            return Err(MapError::DepthExceeded {
                element: node.element_type,
                depth,
                max_depth: self.max_depth,
            });
        }

        let mut render = content::build(node);
        if let Some(styles) = &node.styles {
            for rule in style::style_rules(styles) {
                render.style.apply(rule);
            }
        }
        render.element_id = node.id.clone();
        let id = tree.insert(render);

        if node.element_type.is_container() {
            for child_node in node.children() {
                let Some(child) = self.map_node(tree, child_node, depth + 1) else {
                    continue;
                };
                let insets = tree
                    .get(id)
                    .map(|parent| attachment_insets(&parent.kind, child_node))
                    .unwrap_or(EdgeInsets::ZERO);
                tree.attach(id, child, insets, None);
            }
        } else if !node.children().is_empty() {
            tracing::debug!(
                element = %node.element_type,
                count = node.children().len(),
                "Ignoring subviews of leaf element"
            );
        }

        if let Some(trigger) = trigger_for(node) {
            tree.set_trigger(id, trigger);
        }

        Ok(id)
    }
}

fn trigger_for(node: &ElementNode) -> Option<Trigger> {
    if node.element_type == ElementType::TextInput {
        if let Some(action) = node.action(TEXT_CHANGE) {
            return Some(Trigger {
                kind: TriggerKind::TextChange,
                action: action.clone(),
            });
        }
    }
    node.action(TAP).map(|action| Trigger {
        kind: TriggerKind::Tap,
        action: action.clone(),
    })
}

/// Offset of a child from the edges of `parent`.
fn attachment_insets(parent: &RenderKind, child: &ElementNode) -> EdgeInsets {
    match parent {
        RenderKind::Card(_) => CARD_INSETS,
        RenderKind::Content => child
            .styles
            .as_ref()
            .and_then(|styles| styles.padding.as_ref())
            .map(EdgeInsets::from)
            .unwrap_or(EdgeInsets::ZERO),
        RenderKind::Stack(_)
        | RenderKind::Button(_)
        | RenderKind::Label(_)
        | RenderKind::TextInput(_) => EdgeInsets::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;
    use crate::schema::{ActionType, BduiAction, ElementStyles, PaddingStyle};

    fn label(text: &str) -> ElementNode {
        ElementNode::new(ElementType::Label).with_content("text", text)
    }

    #[test]
    fn stack_keeps_sibling_order() {
        let node = ElementNode::new(ElementType::StackView)
            .with_subview(label("a"))
            .with_subview(label("b"))
            .with_subview(label("c"));
        let tree = ElementMapper::new().map(&node).unwrap();
        let root = tree.root().unwrap();
        let texts: Vec<String> = tree
            .children(root)
            .into_iter()
            .map(|id| match &tree.get(id).unwrap().kind {
                RenderKind::Label(props) => props.text.clone(),
                other => panic!("unexpected {}", other.name()),
            })
            .collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn card_children_are_inset() {
        let node = ElementNode::new(ElementType::Card).with_subview(label("inside"));
        let tree = ElementMapper::new().map(&node).unwrap();
        let root = tree.root_node().unwrap();
        assert_eq!(
            root.children[0].insets,
            EdgeInsets {
                top: 24.0,
                left: 16.0,
                bottom: 16.0,
                right: 16.0,
            }
        );
    }

    #[test]
    fn content_view_uses_child_padding() {
        let padded = label("padded").with_styles(ElementStyles {
            padding: Some(PaddingStyle {
                top: Some(8.0),
                left: Some(4.0),
                bottom: None,
                right: None,
            }),
            ..ElementStyles::default()
        });
        let node = ElementNode::new(ElementType::ContentView)
            .with_subview(padded)
            .with_subview(label("flush"));
        let tree = ElementMapper::new().map(&node).unwrap();
        let root = tree.root_node().unwrap();
        assert_eq!(
            root.children[0].insets,
            EdgeInsets {
                top: 8.0,
                left: 4.0,
                bottom: 0.0,
                right: 0.0
            }
        );
        assert!(root.children[1].insets.is_zero());
    }

    #[test]
    fn leaf_subviews_are_ignored() {
        let node = ElementNode::new(ElementType::Button).with_subview(label("ghost"));
        let tree = ElementMapper::new().map(&node).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn explicit_background_overrides_button_style() {
        let node = ElementNode::new(ElementType::Button).with_styles(ElementStyles {
            background_color: Some("#000000".to_string()),
            ..ElementStyles::default()
        });
        let tree = ElementMapper::new().map(&node).unwrap();
        assert_eq!(tree.root_node().unwrap().style.background, Some(Color::BLACK));
    }

    #[test]
    fn nodes_beyond_max_depth_are_skipped() {
        let deep = ElementNode::new(ElementType::StackView)
            .with_subview(ElementNode::new(ElementType::StackView).with_subview(label("too deep")))
            .with_subview(label("shallow"));
        let tree = ElementMapper::with_max_depth(1).map(&deep).unwrap();
        assert_eq!(tree.len(), 3);
        let root = tree.root().unwrap();
        let inner = tree.children(root)[0];
        assert!(tree.children(inner).is_empty());
    }

    #[test]
    fn zero_max_depth_keeps_only_root() {
        let mapper = ElementMapper::with_max_depth(0);
        assert!(mapper.map(&label("root")).is_some());
        let tree = mapper.map(&ElementNode::new(ElementType::StackView).with_subview(label("x")));
        assert_eq!(tree.unwrap().len(), 1);
    }

    #[test]
    fn text_input_prefers_text_change_trigger() {
        let node = ElementNode::new(ElementType::TextInput)
            .with_action(TAP, BduiAction::new(ActionType::Dismiss))
            .with_action(TEXT_CHANGE, BduiAction::new(ActionType::Reload));
        let tree = ElementMapper::new().map(&node).unwrap();
        let trigger = tree.trigger(tree.root().unwrap()).unwrap();
        assert_eq!(trigger.kind, TriggerKind::TextChange);
        assert_eq!(trigger.action.action_type, ActionType::Reload);
    }

    #[test]
    fn text_change_on_other_kinds_is_ignored() {
        let node = ElementNode::new(ElementType::Button)
            .with_action(TEXT_CHANGE, BduiAction::new(ActionType::Reload));
        let tree = ElementMapper::new().map(&node).unwrap();
        assert_eq!(tree.trigger_count(), 0);
    }

    #[test]
    fn rebuild_replaces_root() {
        let mapper = ElementMapper::new();
        let mut tree = mapper.map(&label("old").with_id("screen")).unwrap();
        let new_root = mapper
            .rebuild_subtree(&mut tree, "screen", &label("new").with_id("screen"))
            .unwrap()
            .unwrap();
        assert_eq!(tree.root(), Some(new_root));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn rebuild_unknown_id_fails() {
        let mapper = ElementMapper::new();
        let mut tree = mapper.map(&label("only")).unwrap();
        let err = mapper
            .rebuild_subtree(&mut tree, "missing", &label("x"))
            .unwrap_err();
        assert_eq!(
            err,
            MapError::UnknownElementId {
                element_id: "missing".to_string()
            }
        );
    }

    #[test]
    fn rebuild_in_card_keeps_position_and_insets() {
        let mapper = ElementMapper::new();
        let node = ElementNode::new(ElementType::Card)
            .with_subview(label("first").with_id("first"))
            .with_subview(label("second").with_id("second"));
        let mut tree = mapper.map(&node).unwrap();

        let replaced = mapper
            .rebuild_subtree(&mut tree, "first", &label("updated").with_id("first"))
            .unwrap()
            .unwrap();

        let root = tree.root_node().unwrap();
        assert_eq!(root.children[0].child, replaced);
        assert_eq!(root.children[0].insets, CARD_INSETS);
        assert_eq!(
            tree.find_by_element_id("second"),
            Some(root.children[1].child)
        );
    }
}
