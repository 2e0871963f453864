use crate::catalog::{AvailableFilters, FilterPredicate, RatingBucket};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterSection {
    #[default]
    Years,
    Directors,
    Ratings,
}

impl FilterSection {
    pub const ALL: [FilterSection; 3] = [Self::Years, Self::Directors, Self::Ratings];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Years => "Years",
            Self::Directors => "Directors",
            Self::Ratings => "Rating",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Years => Self::Directors,
            Self::Directors => Self::Ratings,
            Self::Ratings => Self::Years,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Years => Self::Ratings,
            Self::Directors => Self::Years,
            Self::Ratings => Self::Directors,
        }
    }
}

/// One selectable entry of a section, with its state in the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterDialogState {
    #[default]
    Hidden,
    Visible {
        filters: AvailableFilters,
        draft: FilterPredicate,
        section: FilterSection,
        /// Index into the focused section's options.
        cursor: usize,
    },
}

impl UiState for FilterDialogState {}

impl FilterDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn draft(&self) -> Option<&FilterPredicate> {
        match self {
            Self::Visible { draft, .. } => Some(draft),
            Self::Hidden => None,
        }
    }

    /// Options of `section` with their draft selection; empty when hidden.
    pub fn options(&self, section: FilterSection) -> Vec<FilterOption> {
        let Self::Visible { filters, draft, .. } = self else {
            return Vec::new();
        };
        match section {
            FilterSection::Years => filters
                .years
                .iter()
                .map(|year| FilterOption {
                    label: year.clone(),
                    selected: draft.is_year_selected(year),
                })
                .collect(),
            FilterSection::Directors => filters
                .directors
                .iter()
                .map(|director| FilterOption {
                    label: director.clone(),
                    selected: draft.is_director_selected(director),
                })
                .collect(),
            FilterSection::Ratings => RatingBucket::ALL
                .iter()
                .map(|bucket| FilterOption {
                    label: bucket.label().to_string(),
                    selected: draft.is_rating_selected(*bucket),
                })
                .collect(),
        }
    }
}

pub(super) fn section_len(filters: &AvailableFilters, section: FilterSection) -> usize {
    match section {
        FilterSection::Years => filters.years.len(),
        FilterSection::Directors => filters.directors.len(),
        FilterSection::Ratings => RatingBucket::ALL.len(),
    }
}
