/// Marker trait for intents: user actions ("toggle favorite") and
/// completed side effects ("catalog loaded") alike.
///
/// Intents cross from background tasks to the UI thread, hence `Send`.
pub trait Intent: Send + 'static {}
