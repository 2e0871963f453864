/// Marker trait for reducer-owned state.
///
/// `Default` lets the controller `std::mem::take` the state into a reducer;
/// `PartialEq` lets tests and the renderer compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
