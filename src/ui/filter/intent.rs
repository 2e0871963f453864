use crate::catalog::{AvailableFilters, FilterPredicate};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FilterIntent {
    /// Show the dialog with a draft copied from the applied predicate.
    Open {
        filters: AvailableFilters,
        current: FilterPredicate,
    },
    /// Hide without applying the draft.
    Close,
    NextSection,
    PrevSection,
    MoveUp,
    MoveDown,
    /// Flip the focused option in the draft.
    Toggle,
    /// Clear every selection in the draft.
    Reset,
}

impl Intent for FilterIntent {}
