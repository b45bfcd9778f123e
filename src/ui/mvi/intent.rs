/// Marker trait for intents: load requests, load completions and failures.
pub trait Intent: Send + 'static {}
