//! One displayed screen: its document source, state and host event channel.

use std::sync::mpsc::{self, Receiver};

use crate::action::{ActionDispatcher, ChannelActionHandler, HostEvent};
use crate::loader::{load_document, DocumentSource, LoaderError};
use crate::mapper::ElementMapper;
use crate::schema::ElementNode;
use crate::ui::mvi::Reducer;
use crate::ui::navigator::Navigator;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};

/// Handle for a load that has been requested but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadTicket {
    pub generation: u64,
    pub view_id: Option<String>,
}

pub struct ScreenSession<S: DocumentSource> {
    source: S,
    state: ScreenState,
    handler: ChannelActionHandler,
    dispatcher: ActionDispatcher,
    events: Receiver<HostEvent>,
}

impl<S: DocumentSource> ScreenSession<S> {
    pub fn new(source: S, mapper: ElementMapper) -> Self {
        let (tx, events) = mpsc::channel();
        let handler = ChannelActionHandler::new(tx);
        let dispatcher = ActionDispatcher::new(handler.clone());
        Self {
            source,
            state: ScreenState::new(mapper),
            handler,
            dispatcher,
            events,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and show the whole document.
    pub async fn load(&mut self) {
        self.reload(None).await;
    }

    /// Fetch the document again and rebuild everything, or only the subtree
    /// tagged `view_id`.
    pub async fn reload(&mut self, view_id: Option<&str>) {
        let ticket = self.begin_reload(view_id);
        let result = load_document(&self.source).await;
        self.finish_reload(ticket, result);
    }

    /// Start a load without fetching. Hosts that fetch concurrently pair this
    /// with [`ScreenSession::finish_reload`]; only the latest ticket wins.
    pub fn begin_reload(&mut self, view_id: Option<&str>) -> ReloadTicket {
        self.apply(ScreenIntent::BeginLoad {
            view_id: view_id.map(str::to_string),
        });
        ReloadTicket {
            generation: self.state.generation,
            view_id: view_id.map(str::to_string),
        }
    }

    pub fn finish_reload(&mut self, ticket: ReloadTicket, result: Result<ElementNode, LoaderError>) {
        let ReloadTicket {
            generation,
            view_id,
        } = ticket;
        let intent = match (result, view_id) {
            (Ok(document), None) => ScreenIntent::DocumentLoaded {
                generation,
                document,
            },
            (Ok(document), Some(view_id)) => ScreenIntent::SubtreeLoaded {
                generation,
                view_id,
                document,
            },
            (Err(err), _) => {
                tracing::warn!(source = %self.source.describe(), error = %err.details(), "Load failed");
                ScreenIntent::LoadFailed {
                    generation,
                    message: err.display_message(),
                }
            }
        };
        self.apply(intent);
    }

    /// Tap the object tagged `element_id`. Returns whether an action fired.
    pub fn tap(&self, element_id: &str) -> bool {
        let Some(tree) = self.state.tree.as_ref() else {
            return false;
        };
        match tree.find_by_element_id(element_id) {
            Some(id) => tree.tap(id, &self.dispatcher),
            None => {
                tracing::debug!(element_id, "Tap on unknown element");
                false
            }
        }
    }

    /// Type `text` into the text input tagged `element_id`. Returns whether
    /// an action fired.
    pub fn change_text(&mut self, element_id: &str, text: &str) -> bool {
        let Some(tree) = self.state.tree.as_mut() else {
            return false;
        };
        match tree.find_by_element_id(element_id) {
            Some(id) => tree.change_text(id, text, &self.dispatcher),
            None => {
                tracing::debug!(element_id, "Text change on unknown element");
                false
            }
        }
    }

    /// Drain pending host events. Reloads are performed here and navigation
    /// is applied to `navigator`. Every drained event is returned in order.
    pub async fn process_events(&mut self, navigator: &mut Navigator) -> Vec<HostEvent> {
        let mut handled = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            tracing::info!(event = ?event, "Host event");
            match &event {
                HostEvent::Reload { view_id } => self.reload(view_id.as_deref()).await,
                HostEvent::Navigate { route, parameters } => {
                    navigator.navigate(route, parameters);
                }
                HostEvent::Dismiss { animated } => {
                    navigator.dismiss(*animated);
                }
                HostEvent::Custom { .. } => {}
            }
            handled.push(event);
        }
        handled
    }

    /// Stop delivering actions. Triggers fired afterwards are dropped.
    pub fn close(&self) {
        self.handler.detach();
    }

    fn apply(&mut self, intent: ScreenIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = ScreenReducer::reduce(state, intent);
    }
}
