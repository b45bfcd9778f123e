use crate::render::tokens::{resolve_length, CornerRadius};
use crate::render::{Color, StyleRule};
use crate::schema::ElementStyles;

/// Shared style rules carried by a node. Unparsable values are skipped.
pub(super) fn style_rules(styles: &ElementStyles) -> Vec<StyleRule> {
    let mut rules = Vec::with_capacity(2);

    if let Some(hex) = &styles.background_color {
        match Color::from_hex(hex) {
            Some(color) => rules.push(StyleRule::Background(color)),
            None => tracing::debug!(value = %hex, "Ignoring unparsable background colour"),
        }
    }

    if let Some(raw) = &styles.corner_radius {
        match resolve_length(raw, CornerRadius::from_token) {
            Some(radius) => rules.push(StyleRule::CornerRadius(radius)),
            None => tracing::debug!(value = %raw, "Ignoring unknown corner radius"),
        }
    }

    rules
}
