//! Per-kind interpretation of `content` maps.
//!
//! Each constructor reads only the keys that matter for its kind. Absent or
//! mistyped keys fall back to the documented default.

use crate::render::props::{
    Axis, ButtonProps, ButtonStyle, CardProps, CardStyle, Distribution, LabelProps, LabelStyle,
    StackAlignment, StackProps, TextAlignment, TextInputProps, TextInputStyle,
};
use crate::render::tokens::{resolve_length, CornerRadius, Spacing, Typography};
use crate::render::{AppliedStyle, Border, Color, EdgeInsets, Font, RenderKind, RenderNode, Shadow};
use crate::schema::{ElementNode, ElementType, Value};

/// Inset between a card's edges and its children.
pub const CARD_INSETS: EdgeInsets = EdgeInsets {
    top: Spacing::LARGE,
    left: Spacing::MEDIUM,
    bottom: Spacing::MEDIUM,
    right: Spacing::MEDIUM,
};

/// Build the render object for `node` with its kind defaults applied.
/// Shared styles, children and triggers are added by the caller.
pub(super) fn build(node: &ElementNode) -> RenderNode {
    let (kind, style) = match node.element_type {
        ElementType::Button => button(node),
        ElementType::Card => card(node),
        ElementType::Label => label(node),
        ElementType::TextInput => text_input(node),
        ElementType::StackView => stack(node),
        ElementType::ContentView => (RenderKind::Content, AppliedStyle::default()),
    };
    let mut render = RenderNode::new(kind);
    render.style = style;
    render
}

fn button(node: &ElementNode) -> (RenderKind, AppliedStyle) {
    let style = tag(node, "style", ButtonStyle::from_tag).unwrap_or_default();
    let enabled = flag(node, "isEnabled").unwrap_or(true);
    // Disabled buttons keep their colours at half opacity.
    let tone = |color: Color| if enabled { color } else { color.with_alpha(0.5) };

    let mut appearance = AppliedStyle::default();
    rounded(&mut appearance, CornerRadius::MEDIUM);
    let derived_title_color = match style {
        ButtonStyle::Primary => {
            appearance.background = Some(tone(Color::PRIMARY));
            tone(Color::ON_PRIMARY)
        }
        ButtonStyle::Secondary => {
            appearance.background = Some(tone(Color::SECONDARY));
            tone(Color::ON_SECONDARY)
        }
        ButtonStyle::Outlined => {
            appearance.background = Some(Color::CLEAR);
            appearance.border = Some(Border {
                color: tone(Color::PRIMARY),
                width: 1.0,
            });
            tone(Color::PRIMARY)
        }
        ButtonStyle::Text => {
            appearance.background = Some(Color::CLEAR);
            tone(Color::PRIMARY)
        }
    };

    let props = ButtonProps {
        title: text(node, "title").unwrap_or_else(|| "Button".to_string()),
        style,
        icon_name: text(node, "iconName"),
        enabled,
        // An explicit colour beats the one implied by the style.
        title_color: color(node, "color").unwrap_or(derived_title_color),
        font: sized(Typography::BODY, number(node, "fontSize")),
    };
    (RenderKind::Button(props), appearance)
}

fn card(node: &ElementNode) -> (RenderKind, AppliedStyle) {
    let style = tag(node, "style", CardStyle::from_tag).unwrap_or_default();

    let mut appearance = AppliedStyle {
        corner_radius: Some(CornerRadius::MEDIUM),
        ..AppliedStyle::default()
    };
    match style {
        CardStyle::Elevated => {
            appearance.background = Some(Color::SURFACE);
            appearance.shadow = Some(Shadow {
                color: Color::ON_BACKGROUND,
                opacity: 0.1,
                offset_y: 2.0,
                radius: 4.0,
            });
        }
        CardStyle::Outlined => {
            appearance.background = Some(Color::SURFACE);
            appearance.border = Some(Border {
                color: Color::ON_BACKGROUND.with_alpha(0.1),
                width: 1.0,
            });
        }
        CardStyle::Filled => appearance.background = Some(Color::PRIMARY.with_alpha(0.1)),
    }

    let props = CardProps {
        title: text(node, "title"),
        subtitle: text(node, "subtitle"),
        image_name: text(node, "imageName"),
        style,
    };
    (RenderKind::Card(props), appearance)
}

fn label(node: &ElementNode) -> (RenderKind, AppliedStyle) {
    let style = tag(node, "style", LabelStyle::from_tag).unwrap_or_default();
    let base_font = match style {
        LabelStyle::LargeTitle => Typography::LARGE_TITLE,
        LabelStyle::Title => Typography::TITLE,
        LabelStyle::Headline => Typography::HEADLINE,
        LabelStyle::Body => Typography::BODY,
        LabelStyle::Caption | LabelStyle::Error => Typography::CAPTION,
    };
    let derived_color = (style == LabelStyle::Error).then_some(Color::ERROR);

    let props = LabelProps {
        text: text(node, "text").unwrap_or_default(),
        style,
        font: sized(base_font, number(node, "fontSize")),
        color: color(node, "color").or(derived_color),
        alignment: tag(node, "alignment", TextAlignment::from_tag).unwrap_or_default(),
    };
    (RenderKind::Label(props), AppliedStyle::default())
}

fn text_input(node: &ElementNode) -> (RenderKind, AppliedStyle) {
    let style = tag(node, "style", TextInputStyle::from_tag).unwrap_or_default();

    let mut appearance = AppliedStyle::default();
    match style {
        TextInputStyle::Standard => {}
        TextInputStyle::Outlined => {
            appearance.background = Some(Color::CLEAR);
            appearance.border = Some(Border {
                color: Color::ON_BACKGROUND.with_alpha(0.2),
                width: 1.0,
            });
            rounded(&mut appearance, CornerRadius::MEDIUM);
        }
        TextInputStyle::Error => {
            appearance.background = Some(Color::CLEAR);
            appearance.border = Some(Border {
                color: Color::ERROR,
                width: 1.0,
            });
            rounded(&mut appearance, CornerRadius::MEDIUM);
        }
    }

    let props = TextInputProps {
        placeholder: text(node, "placeholder"),
        text: text(node, "text").unwrap_or_default(),
        style,
        secure: flag(node, "isSecure").unwrap_or(false),
        left_icon_name: text(node, "leftIconName"),
        right_icon_name: text(node, "rightIconName"),
    };
    (RenderKind::TextInput(props), appearance)
}

fn stack(node: &ElementNode) -> (RenderKind, AppliedStyle) {
    let spacing = match node.content_value("spacing") {
        Some(Value::String(raw)) => resolve_length(raw, Spacing::from_token),
        Some(Value::Number(n)) if n.is_finite() && *n >= 0.0 => Some(*n),
        _ => None,
    };

    let props = StackProps {
        axis: node
            .content_value("axis")
            .and_then(Value::as_str)
            .map(Axis::from_tag)
            .unwrap_or_default(),
        spacing: spacing.unwrap_or(Spacing::MEDIUM),
        distribution: tag(node, "distribution", Distribution::from_tag).unwrap_or_default(),
        alignment: tag(node, "alignment", StackAlignment::from_tag).unwrap_or_default(),
    };
    (RenderKind::Stack(props), AppliedStyle::default())
}

fn rounded(style: &mut AppliedStyle, radius: f64) {
    style.corner_radius = Some(radius);
    style.clips_to_bounds = true;
}

fn sized(font: Font, size: Option<f64>) -> Font {
    match size {
        Some(size) if size.is_finite() && size > 0.0 => Font::new(size, font.weight),
        _ => font,
    }
}

fn text(node: &ElementNode, key: &str) -> Option<String> {
    node.content_value(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn flag(node: &ElementNode, key: &str) -> Option<bool> {
    node.content_value(key).and_then(Value::as_bool)
}

/// Numbers may arrive as JSON numbers or numeric strings.
fn number(node: &ElementNode, key: &str) -> Option<f64> {
    match node.content_value(key)? {
        Value::Number(n) => Some(*n),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn color(node: &ElementNode, key: &str) -> Option<Color> {
    node.content_value(key)
        .and_then(Value::as_str)
        .and_then(Color::from_hex)
}

fn tag<T>(node: &ElementNode, key: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let raw = node.content_value(key)?.as_str()?;
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::debug!(
            element = %node.element_type,
            key,
            value = raw,
            "Unknown content value, using default"
        );
    }
    parsed
}
