//! Action dispatch: turning fired triggers into host signals.
//!
//! The mapper records which action belongs to which render object. When a
//! trigger fires, the [`ActionDispatcher`] reads the payload for that action
//! type and calls the matching [`ActionHandler`] method. The handler is the
//! only place that knows about the host.

mod dispatcher;
mod handler;

pub use dispatcher::{ActionDispatcher, ActionSource};
pub use handler::{
    ActionHandler, ChannelActionHandler, DispatchError, HostEvent, LoggingActionHandler,
};
