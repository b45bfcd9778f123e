//! Resolved properties of each render object kind.
//!
//! Every field here has already gone through default resolution, so a host
//! drawing the tree never has to guess.

use std::fmt;

use super::tokens::{Color, Font};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Outlined,
    Text,
}

impl ButtonStyle {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "outlined" => Some(Self::Outlined),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outlined => "outlined",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps {
    pub title: String,
    pub style: ButtonStyle,
    pub icon_name: Option<String>,
    pub enabled: bool,
    pub title_color: Color,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardStyle {
    #[default]
    Elevated,
    Outlined,
    Filled,
}

impl CardStyle {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "elevated" => Some(Self::Elevated),
            "outlined" => Some(Self::Outlined),
            "filled" => Some(Self::Filled),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Elevated => "elevated",
            Self::Outlined => "outlined",
            Self::Filled => "filled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardProps {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_name: Option<String>,
    pub style: CardStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelStyle {
    LargeTitle,
    Title,
    Headline,
    #[default]
    Body,
    Caption,
    Error,
}

impl LabelStyle {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "largeTitle" => Some(Self::LargeTitle),
            "title" => Some(Self::Title),
            "headline" => Some(Self::Headline),
            "body" => Some(Self::Body),
            "caption" => Some(Self::Caption),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::LargeTitle => "largeTitle",
            Self::Title => "title",
            Self::Headline => "headline",
            Self::Body => "body",
            Self::Caption => "caption",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    #[default]
    Natural,
}

impl TextAlignment {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justified" => Some(Self::Justified),
            "natural" => Some(Self::Natural),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justified => "justified",
            Self::Natural => "natural",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelProps {
    pub text: String,
    pub style: LabelStyle,
    pub font: Font,
    /// `None` means the host's default text colour.
    pub color: Option<Color>,
    pub alignment: TextAlignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextInputStyle {
    #[default]
    Standard,
    Outlined,
    Error,
}

impl TextInputStyle {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "standard" => Some(Self::Standard),
            "outlined" => Some(Self::Outlined),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Outlined => "outlined",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextInputProps {
    pub placeholder: Option<String>,
    /// Current value. Updated when the host reports a text change.
    pub text: String,
    pub style: TextInputStyle,
    pub secure: bool,
    pub left_icon_name: Option<String>,
    pub right_icon_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Only `horizontal` selects the horizontal axis.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "horizontal" {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distribution {
    #[default]
    Fill,
    FillEqually,
    FillProportionally,
    EqualSpacing,
    EqualCentering,
}

impl Distribution {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "fill" => Some(Self::Fill),
            "fillEqually" => Some(Self::FillEqually),
            "fillProportionally" => Some(Self::FillProportionally),
            "equalSpacing" => Some(Self::EqualSpacing),
            "equalCentering" => Some(Self::EqualCentering),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::FillEqually => "fillEqually",
            Self::FillProportionally => "fillProportionally",
            Self::EqualSpacing => "equalSpacing",
            Self::EqualCentering => "equalCentering",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StackAlignment {
    #[default]
    Fill,
    Leading,
    Trailing,
    Center,
    FirstBaseline,
    LastBaseline,
}

impl StackAlignment {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "fill" => Some(Self::Fill),
            "leading" => Some(Self::Leading),
            "trailing" => Some(Self::Trailing),
            "center" => Some(Self::Center),
            "firstBaseline" => Some(Self::FirstBaseline),
            "lastBaseline" => Some(Self::LastBaseline),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Center => "center",
            Self::FirstBaseline => "firstBaseline",
            Self::LastBaseline => "lastBaseline",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackProps {
    pub axis: Axis,
    pub spacing: f64,
    pub distribution: Distribution,
    pub alignment: StackAlignment,
}

/// What a render object is, with its resolved properties.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderKind {
    Button(ButtonProps),
    Card(CardProps),
    Label(LabelProps),
    TextInput(TextInputProps),
    Stack(StackProps),
    Content,
}

impl RenderKind {
    pub fn name(&self) -> &'static str {
        match self {
            RenderKind::Button(_) => "button",
            RenderKind::Card(_) => "card",
            RenderKind::Label(_) => "label",
            RenderKind::TextInput(_) => "textInput",
            RenderKind::Stack(_) => "stackView",
            RenderKind::Content => "contentView",
        }
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            RenderKind::Button(props) => {
                write!(f, " {:?} style={}", props.title, props.style.tag())?;
                if !props.enabled {
                    write!(f, " disabled")?;
                }
                Ok(())
            }
            RenderKind::Card(props) => {
                if let Some(title) = &props.title {
                    write!(f, " {:?}", title)?;
                }
                write!(f, " style={}", props.style.tag())
            }
            RenderKind::Label(props) => write!(
                f,
                " {:?} style={} align={}",
                props.text,
                props.style.tag(),
                props.alignment.tag()
            ),
            RenderKind::TextInput(props) => {
                if let Some(placeholder) = &props.placeholder {
                    write!(f, " placeholder={:?}", placeholder)?;
                }
                if !props.text.is_empty() {
                    write!(f, " text={:?}", props.text)?;
                }
                write!(f, " style={}", props.style.tag())?;
                if props.secure {
                    write!(f, " secure")?;
                }
                Ok(())
            }
            RenderKind::Stack(props) => write!(
                f,
                " axis={} spacing={} distribution={} alignment={}",
                props.axis.tag(),
                props.spacing,
                props.distribution.tag(),
                props.alignment.tag()
            ),
            RenderKind::Content => Ok(()),
        }
    }
}
