mod intent;
mod reducer;
mod state;

pub use intent::FilterIntent;
pub use reducer::FilterReducer;
pub use state::{FilterDialogState, FilterOption, FilterSection};
