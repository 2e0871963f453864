use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and produce the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
