/// Marker trait for screen state. States are replaced, not mutated in place
/// by reducers, and compare structurally.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
