use crate::catalog::{FilterPredicate, RatingBucket};
use crate::ui::filter::intent::FilterIntent;
use crate::ui::filter::state::{section_len, FilterDialogState, FilterSection};
use crate::ui::mvi::Reducer;

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterDialogState;
    type Intent = FilterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::Open { filters, current } => FilterDialogState::Visible {
                filters,
                draft: current,
                section: FilterSection::default(),
                cursor: 0,
            },
            FilterIntent::Close => FilterDialogState::Hidden,
            FilterIntent::NextSection => match state {
                FilterDialogState::Visible {
                    filters,
                    draft,
                    section,
                    ..
                } => FilterDialogState::Visible {
                    filters,
                    draft,
                    section: section.next(),
                    cursor: 0,
                },
                other => other,
            },
            FilterIntent::PrevSection => match state {
                FilterDialogState::Visible {
                    filters,
                    draft,
                    section,
                    ..
                } => FilterDialogState::Visible {
                    filters,
                    draft,
                    section: section.prev(),
                    cursor: 0,
                },
                other => other,
            },
            FilterIntent::MoveUp => match state {
                FilterDialogState::Visible {
                    filters,
                    draft,
                    section,
                    cursor,
                } => {
                    let len = section_len(&filters, section);
                    let cursor = if cursor == 0 {
                        len.saturating_sub(1)
                    } else {
                        cursor - 1
                    };
                    FilterDialogState::Visible {
                        filters,
                        draft,
                        section,
                        cursor,
                    }
                }
                other => other,
            },
            FilterIntent::MoveDown => match state {
                FilterDialogState::Visible {
                    filters,
                    draft,
                    section,
                    cursor,
                } => {
                    let len = section_len(&filters, section);
                    let cursor = if cursor + 1 >= len { 0 } else { cursor + 1 };
                    FilterDialogState::Visible {
                        filters,
                        draft,
                        section,
                        cursor,
                    }
                }
                other => other,
            },
            FilterIntent::Toggle => match state {
                FilterDialogState::Visible {
                    filters,
                    mut draft,
                    section,
                    cursor,
                } => {
                    match section {
                        FilterSection::Years => {
                            if let Some(year) = filters.years.get(cursor) {
                                draft.toggle_year(year);
                            }
                        }
                        FilterSection::Directors => {
                            if let Some(director) = filters.directors.get(cursor) {
                                draft.toggle_director(director);
                            }
                        }
                        FilterSection::Ratings => {
                            if let Some(bucket) = RatingBucket::ALL.get(cursor) {
                                draft.toggle_rating(*bucket);
                            }
                        }
                    }
                    FilterDialogState::Visible {
                        filters,
                        draft,
                        section,
                        cursor,
                    }
                }
                other => other,
            },
            FilterIntent::Reset => match state {
                FilterDialogState::Visible {
                    filters,
                    section,
                    cursor,
                    ..
                } => FilterDialogState::Visible {
                    filters,
                    draft: FilterPredicate::default(),
                    section,
                    cursor,
                },
                other => other,
            },
        }
    }
}
