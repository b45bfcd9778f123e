use crate::mapper::ElementMapper;
use crate::render::RenderTree;
use crate::schema::ElementNode;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenPhase {
    #[default]
    Idle,
    /// A full load is in flight. A subtree reload leaves the phase alone.
    Loading,
    Ready,
    Failed { message: String },
}

/// Everything a screen shows.
///
/// `document` and `tree` survive a failed or in-flight reload, so the last
/// good content stays visible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState {
    pub mapper: ElementMapper,
    /// Id of the most recent load request.
    pub generation: u64,
    pub phase: ScreenPhase,
    pub document: Option<ElementNode>,
    pub tree: Option<RenderTree>,
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn new(mapper: ElementMapper) -> Self {
        Self {
            mapper,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ScreenPhase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            ScreenPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Whether a completion tagged `generation` belongs to the latest request.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
