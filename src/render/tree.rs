//! Arena-backed render tree.
//!
//! Render objects live in slots addressed by [`RenderId`]. Pending actions
//! are kept in a side table keyed by the same id, so render objects carry no
//! hidden references back to the document. Discarded subtrees leave empty
//! slots behind; ids are never reused within one tree.

use std::collections::BTreeMap;

use crate::action::{ActionDispatcher, ActionSource};
use crate::schema::{BduiAction, PaddingStyle};

use super::props::RenderKind;
use super::tokens::Color;

/// Handle to a render object inside a [`RenderTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderId(usize);

impl RenderId {
    pub fn index(&self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn for_tests(index: usize) -> Self {
        Self(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::uniform(0.0);

    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<&PaddingStyle> for EdgeInsets {
    fn from(padding: &PaddingStyle) -> Self {
        Self {
            top: padding.top.unwrap_or(0.0),
            left: padding.left.unwrap_or(0.0),
            bottom: padding.bottom.unwrap_or(0.0),
            right: padding.right.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub opacity: f64,
    /// Vertical offset in points.
    pub offset_y: f64,
    pub radius: f64,
}

/// One shared styling instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleRule {
    Background(Color),
    CornerRadius(f64),
}

/// Visual attributes shared by every kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AppliedStyle {
    pub background: Option<Color>,
    pub corner_radius: Option<f64>,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
    pub clips_to_bounds: bool,
}

impl AppliedStyle {
    /// Apply one rule. Rules touch disjoint attributes, so the order in which
    /// a set of rules is applied does not change the result.
    pub fn apply(&mut self, rule: StyleRule) {
        match rule {
            StyleRule::Background(color) => self.background = Some(color),
            StyleRule::CornerRadius(radius) => {
                self.corner_radius = Some(radius);
                self.clips_to_bounds = true;
            }
        }
    }
}

/// How a child is attached to its parent container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attachment {
    pub child: RenderId,
    /// Offset from the parent's edges. Zero for stack arrangement.
    pub insets: EdgeInsets,
}

/// Which host event fires a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Tap,
    TextChange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub kind: TriggerKind,
    pub action: BduiAction,
}

/// A render object.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub kind: RenderKind,
    pub style: AppliedStyle,
    /// Document id, kept as metadata for partial reload addressing.
    pub element_id: Option<String>,
    pub parent: Option<RenderId>,
    pub children: Vec<Attachment>,
}

impl RenderNode {
    pub fn new(kind: RenderKind) -> Self {
        Self {
            kind,
            style: AppliedStyle::default(),
            element_id: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderTree {
    slots: Vec<Option<RenderNode>>,
    root: Option<RenderId>,
    triggers: BTreeMap<RenderId, Trigger>,
    element_ids: BTreeMap<String, RenderId>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<RenderId> {
        self.root
    }

    pub fn root_node(&self) -> Option<&RenderNode> {
        self.root.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: RenderId) -> Option<&RenderNode> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: RenderId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live render objects.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Children of `id` in attachment order.
    pub fn children(&self, id: RenderId) -> Vec<RenderId> {
        self.get(id)
            .map(|node| node.children.iter().map(|a| a.child).collect())
            .unwrap_or_default()
    }

    /// First render object (in document order) tagged with `element_id`.
    pub fn find_by_element_id(&self, element_id: &str) -> Option<RenderId> {
        self.element_ids.get(element_id).copied()
    }

    pub fn trigger(&self, id: RenderId) -> Option<&Trigger> {
        self.triggers.get(&id)
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    /// `id` and all its descendants, depth-first pre-order.
    pub fn subtree(&self, id: RenderId) -> Vec<RenderId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.get(current) else {
                continue;
            };
            out.push(current);
            stack.extend(node.children.iter().rev().map(|a| a.child));
        }
        out
    }

    /// Depth of `id`, the root being at depth 0.
    pub fn depth(&self, id: RenderId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).and_then(|node| node.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.get(parent).and_then(|node| node.parent);
        }
        depth
    }

    pub(crate) fn insert(&mut self, node: RenderNode) -> RenderId {
        let id = RenderId(self.slots.len());
        if let Some(element_id) = &node.element_id {
            match self.element_ids.get(element_id) {
                Some(first) => tracing::warn!(
                    element_id = %element_id,
                    first = first.index(),
                    duplicate = id.index(),
                    "Duplicate element id, the first object keeps it"
                ),
                None => {
                    self.element_ids.insert(element_id.clone(), id);
                }
            }
        }
        self.slots.push(Some(node));
        id
    }

    pub(crate) fn node_mut(&mut self, id: RenderId) -> Option<&mut RenderNode> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub(crate) fn set_root(&mut self, id: Option<RenderId>) {
        self.root = id;
    }

    pub(crate) fn set_trigger(&mut self, id: RenderId, trigger: Trigger) {
        self.triggers.insert(id, trigger);
    }

    /// Attach `child` to `parent`, at `position` or at the end.
    pub(crate) fn attach(
        &mut self,
        parent: RenderId,
        child: RenderId,
        insets: EdgeInsets,
        position: Option<usize>,
    ) {
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            let attachment = Attachment { child, insets };
            match position {
                Some(index) if index <= node.children.len() => {
                    node.children.insert(index, attachment)
                }
                _ => node.children.push(attachment),
            }
        }
    }

    /// Detach `id` from its parent and drop its whole subtree, including the
    /// triggers and id index entries that point into it.
    ///
    /// Returns the parent and the position `id` occupied there.
    pub(crate) fn remove_subtree(&mut self, id: RenderId) -> Option<(RenderId, usize)> {
        let parent = self.get(id)?.parent;
        let mut slot = None;
        if let Some(parent_id) = parent {
            if let Some(parent_node) = self.node_mut(parent_id) {
                if let Some(index) = parent_node.children.iter().position(|a| a.child == id) {
                    parent_node.children.remove(index);
                    slot = Some((parent_id, index));
                }
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let doomed = self.subtree(id);
        for removed in &doomed {
            self.triggers.remove(removed);
            if let Some(cell) = self.slots.get_mut(removed.0) {
                *cell = None;
            }
        }
        let mut orphaned = Vec::new();
        self.element_ids.retain(|element_id, target| {
            let keep = !doomed.contains(target);
            if !keep {
                orphaned.push(element_id.clone());
            }
            keep
        });
        self.reindex(&orphaned);
        slot
    }

    /// Point each of `element_ids` at the first remaining object, in
    /// document order, that carries it.
    fn reindex(&mut self, element_ids: &[String]) {
        let Some(root) = self.root else {
            return;
        };
        if element_ids.is_empty() {
            return;
        }
        for id in self.subtree(root) {
            let Some(element_id) = self.get(id).and_then(|node| node.element_id.clone()) else {
                continue;
            };
            if element_ids.contains(&element_id) && !self.element_ids.contains_key(&element_id) {
                self.element_ids.insert(element_id, id);
            }
        }
    }

    /// Fire the tap trigger of `id`, if it has one.
    ///
    /// Returns whether an action was dispatched.
    pub fn tap(&self, id: RenderId, dispatcher: &ActionDispatcher) -> bool {
        let Some(trigger) = self.trigger(id) else {
            tracing::debug!(render_id = id.index(), "Tap on object without trigger");
            return false;
        };
        if trigger.kind != TriggerKind::Tap {
            return false;
        }
        if let Some(RenderKind::Button(props)) = self.get(id).map(|node| &node.kind) {
            if !props.enabled {
                tracing::debug!(render_id = id.index(), "Tap on disabled button");
                return false;
            }
        }
        dispatcher.dispatch(&trigger.action, &self.source(id));
        true
    }

    /// Record a new text value on a text input and fire its text change
    /// trigger with the text merged into the payload.
    ///
    /// Returns whether an action was dispatched. The stored text is updated
    /// even when no trigger is attached.
    pub fn change_text(&mut self, id: RenderId, text: &str, dispatcher: &ActionDispatcher) -> bool {
        match self.node_mut(id).map(|node| &mut node.kind) {
            Some(RenderKind::TextInput(props)) => props.text = text.to_string(),
            _ => return false,
        }

        let Some(trigger) = self.trigger(id) else {
            return false;
        };
        if trigger.kind != TriggerKind::TextChange {
            return false;
        }
        let action = trigger.action.with_text(text);
        dispatcher.dispatch(&action, &self.source(id));
        true
    }

    fn source(&self, id: RenderId) -> ActionSource {
        ActionSource {
            render_id: id,
            element_id: self.get(id).and_then(|node| node.element_id.clone()),
        }
    }

    /// Indented, one-line-per-object description of the tree.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root {
            self.write_outline(root, 0, &mut out);
        }
        out
    }

    fn write_outline(&self, id: RenderId, depth: usize, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.kind.to_string());
        if let Some(element_id) = &node.element_id {
            out.push_str(&format!(" #{}", element_id));
        }
        if let Some(background) = node.style.background {
            out.push_str(&format!(" bg={}", background));
        }
        if let Some(radius) = node.style.corner_radius {
            out.push_str(&format!(" radius={}", radius));
        }
        if let Some(border) = node.style.border {
            out.push_str(&format!(" border={}/{}", border.color, border.width));
        }
        if let Some(trigger) = self.trigger(id) {
            let name = match trigger.kind {
                TriggerKind::Tap => "tap",
                TriggerKind::TextChange => "textChange",
            };
            out.push_str(&format!(" [{}->{}]", name, trigger.action.action_type));
        }
        out.push('\n');
        for attachment in &node.children {
            self.write_outline(attachment.child, depth + 1, out);
        }
    }
}
