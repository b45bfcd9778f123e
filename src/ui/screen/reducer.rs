use crate::schema::ElementNode;
use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::{ScreenPhase, ScreenState};

const UNMAPPABLE_ROOT: &str = "Failed to load UI: the document root could not be mapped";

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::BeginLoad { view_id } => {
                let phase = match view_id {
                    None => ScreenPhase::Loading,
                    Some(_) => state.phase.clone(),
                };
                ScreenState {
                    generation: state.generation + 1,
                    phase,
                    ..state
                }
            }
            ScreenIntent::DocumentLoaded {
                generation,
                document,
            } => {
                if !state.is_current(generation) {
                    return discard_stale(state, generation);
                }
                apply_document(state, document)
            }
            ScreenIntent::SubtreeLoaded {
                generation,
                view_id,
                document,
            } => {
                if !state.is_current(generation) {
                    return discard_stale(state, generation);
                }
                apply_subtree(state, &view_id, document)
            }
            ScreenIntent::LoadFailed {
                generation,
                message,
            } => {
                if !state.is_current(generation) {
                    return discard_stale(state, generation);
                }
                ScreenState {
                    phase: ScreenPhase::Failed { message },
                    ..state
                }
            }
        }
    }
}

fn discard_stale(state: ScreenState, generation: u64) -> ScreenState {
    tracing::debug!(
        stale = generation,
        current = state.generation,
        "Discarding stale load completion"
    );
    state
}

fn apply_document(state: ScreenState, document: ElementNode) -> ScreenState {
    match state.mapper.map(&document) {
        Some(tree) => ScreenState {
            phase: ScreenPhase::Ready,
            document: Some(document),
            tree: Some(tree),
            ..state
        },
        None => ScreenState {
            phase: ScreenPhase::Failed {
                message: UNMAPPABLE_ROOT.to_string(),
            },
            ..state
        },
    }
}

/// Rebuild the subtree tagged `view_id` from the matching node of `document`.
/// Objects outside the subtree keep their ids.
fn apply_subtree(state: ScreenState, view_id: &str, document: ElementNode) -> ScreenState {
    let ScreenState {
        mapper,
        generation,
        phase,
        document: current,
        tree,
    } = state;

    let (Some(mut current), Some(mut tree)) = (current, tree) else {
        // Nothing on screen yet, so there is nothing to narrow to.
        let empty = ScreenState {
            mapper,
            generation,
            phase,
            document: None,
            tree: None,
        };
        return apply_document(empty, document);
    };

    let Some(fresh) = document.find_by_id(view_id).cloned() else {
        tracing::warn!(view_id, "Reloaded document has no element with this id");
        return ScreenState {
            mapper,
            generation,
            phase: settle(phase),
            document: Some(current),
            tree: Some(tree),
        };
    };

    let phase = match mapper.rebuild_subtree(&mut tree, view_id, &fresh) {
        Ok(_) => {
            current.replace_by_id(view_id, fresh);
            ScreenPhase::Ready
        }
        Err(err) => {
            tracing::warn!(error = %err, "Subtree reload skipped");
            settle(phase)
        }
    };

    ScreenState {
        mapper,
        generation,
        phase,
        document: Some(current),
        tree: Some(tree),
    }
}

/// A partial reload that changes nothing still ends any pending load: the
/// full load it overtook has been discarded, and the tree on screen is kept.
fn settle(phase: ScreenPhase) -> ScreenPhase {
    match phase {
        ScreenPhase::Loading => ScreenPhase::Ready,
        other => other,
    }
}
