use std::sync::Arc;

use crate::render::RenderId;
use crate::schema::{ActionType, BduiAction, Value, ValueMap};

use super::handler::{ActionHandler, DispatchError};

/// The render object a trigger fired on.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSource {
    pub render_id: RenderId,
    /// Document id of the source element, if it had one.
    pub element_id: Option<String>,
}

/// Resolves decoded actions into [`ActionHandler`] calls.
///
/// Dispatch never fails from the caller's point of view: a missing payload
/// field or an unavailable host is logged and the action is dropped.
#[derive(Clone)]
pub struct ActionDispatcher {
    handler: Arc<dyn ActionHandler>,
}

impl ActionDispatcher {
    pub fn new<H: ActionHandler + 'static>(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn from_shared(handler: Arc<dyn ActionHandler>) -> Self {
        Self { handler }
    }

    pub fn dispatch(&self, action: &BduiAction, source: &ActionSource) {
        let span = tracing::debug_span!(
            "dispatch",
            action = %action.action_type,
            render_id = source.render_id.index(),
            element_id = source.element_id.as_deref().unwrap_or("")
        );
        let _guard = span.enter();

        match self.resolve(action) {
            Ok(()) => tracing::debug!("Action dispatched"),
            Err(err) => tracing::warn!(error = %err, "Action dropped"),
        }
    }

    fn resolve(&self, action: &BduiAction) -> Result<(), DispatchError> {
        match action.action_type {
            ActionType::Navigate => {
                let route = action
                    .payload_value("route")
                    .and_then(Value::as_str)
                    .ok_or(DispatchError::MissingPayloadField {
                        action: ActionType::Navigate,
                        field: "route",
                    })?;
                let parameters = map_or_empty(action.payload_value("parameters"));
                self.handler.navigate(route, &parameters)
            }
            ActionType::Reload => {
                let view_id = action.payload_value("viewId").and_then(Value::as_str);
                self.handler.reload(view_id)
            }
            ActionType::Dismiss => {
                let animated = action
                    .payload_value("animated")
                    .and_then(Value::as_bool)
                    .unwrap_or(true);
                self.handler.dismiss(animated)
            }
            ActionType::Custom => {
                let name = action
                    .payload_value("name")
                    .and_then(Value::as_str)
                    .ok_or(DispatchError::MissingPayloadField {
                        action: ActionType::Custom,
                        field: "name",
                    })?;
                let data = map_or_empty(action.payload_value("data"));
                self.handler.custom_action(name, &data)
            }
        }
    }
}

fn map_or_empty(value: Option<&Value>) -> ValueMap {
    value.and_then(Value::as_map).cloned().unwrap_or_default()
}
