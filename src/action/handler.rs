//! The host-facing capability surface and its stock implementations.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::schema::{ActionType, ValueMap};

/// Reasons an action could not be signalled. Never leaves the dispatcher.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    #[error("Host is not available")]
    HostUnavailable,

    #[error("{action} action is missing payload field '{field}'")]
    MissingPayloadField {
        action: ActionType,
        field: &'static str,
    },
}

/// What the host can be asked to do.
///
/// Implementations signal and return immediately. Errors are reported to the
/// dispatcher, which logs and drops them.
pub trait ActionHandler: Send + Sync {
    /// Transition to the screen addressed by `route`.
    fn navigate(&self, route: &str, parameters: &ValueMap) -> Result<(), DispatchError>;

    /// Reload the subtree tagged `view_id`, or the whole document when `None`.
    fn reload(&self, view_id: Option<&str>) -> Result<(), DispatchError>;

    /// Close the current screen.
    fn dismiss(&self, animated: bool) -> Result<(), DispatchError>;

    /// Forward an application-defined event. `name` is not interpreted.
    fn custom_action(&self, name: &str, payload: &ValueMap) -> Result<(), DispatchError>;
}

/// Message sent to the host by [`ChannelActionHandler`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Navigate {
        route: String,
        parameters: ValueMap,
    },
    Reload {
        view_id: Option<String>,
    },
    Dismiss {
        animated: bool,
    },
    Custom {
        name: String,
        payload: ValueMap,
    },
}

/// Handler that forwards every action as a [`HostEvent`] over a channel
/// supplied by the host.
///
/// Clones share the same channel. Once the host detaches (or drops the
/// receiver) every call fails with [`DispatchError::HostUnavailable`].
#[derive(Clone)]
pub struct ChannelActionHandler {
    tx: Arc<Mutex<Option<Sender<HostEvent>>>>,
}

impl ChannelActionHandler {
    pub fn new(tx: Sender<HostEvent>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    /// Stop forwarding. Used when the screen owning the channel goes away.
    pub fn detach(&self) {
        self.tx.lock().take();
    }

    pub fn is_attached(&self) -> bool {
        self.tx.lock().is_some()
    }

    fn send(&self, event: HostEvent) -> Result<(), DispatchError> {
        let guard = self.tx.lock();
        let Some(tx) = guard.as_ref() else {
            return Err(DispatchError::HostUnavailable);
        };
        tx.send(event).map_err(|_| DispatchError::HostUnavailable)
    }
}

impl ActionHandler for ChannelActionHandler {
    fn navigate(&self, route: &str, parameters: &ValueMap) -> Result<(), DispatchError> {
        self.send(HostEvent::Navigate {
            route: route.to_string(),
            parameters: parameters.clone(),
        })
    }

    fn reload(&self, view_id: Option<&str>) -> Result<(), DispatchError> {
        self.send(HostEvent::Reload {
            view_id: view_id.map(str::to_string),
        })
    }

    fn dismiss(&self, animated: bool) -> Result<(), DispatchError> {
        self.send(HostEvent::Dismiss { animated })
    }

    fn custom_action(&self, name: &str, payload: &ValueMap) -> Result<(), DispatchError> {
        self.send(HostEvent::Custom {
            name: name.to_string(),
            payload: payload.clone(),
        })
    }
}

/// Handler with no host behind it: every action is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingActionHandler;

impl ActionHandler for LoggingActionHandler {
    fn navigate(&self, route: &str, parameters: &ValueMap) -> Result<(), DispatchError> {
        tracing::info!(route, parameters = parameters.len(), "Navigate");
        Ok(())
    }

    fn reload(&self, view_id: Option<&str>) -> Result<(), DispatchError> {
        tracing::info!(view_id = view_id.unwrap_or("all"), "Reload");
        Ok(())
    }

    fn dismiss(&self, animated: bool) -> Result<(), DispatchError> {
        tracing::info!(animated, "Dismiss");
        Ok(())
    }

    fn custom_action(&self, name: &str, payload: &ValueMap) -> Result<(), DispatchError> {
        tracing::info!(name, payload = payload.len(), "Custom action");
        Ok(())
    }
}
