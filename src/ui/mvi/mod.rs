//! State / intent / reducer primitives for screen state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ RenderTree
//!    ↑                                  │
//!    └────────── loader / host ─────────┘
//! ```
//!
//! Loads and reloads are described as intents. Reducers are the only place
//! state changes.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
