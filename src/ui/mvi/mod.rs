//! Model-View-Intent primitives shared by every screen-level state machine.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                                │
//!    └──────── key / fetch event ─────┘
//! ```
//!
//! Reducers never perform IO. Fetching and persisting happen in the
//! controller (`ui::app::App`) and its background tasks, which feed results
//! back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
