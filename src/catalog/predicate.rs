use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::Movie;

/// Minimum-rating buckets offered by the filter dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingBucket {
    SevenPlus,
    EightPlus,
    NinePlus,
}

impl RatingBucket {
    /// All buckets in display order.
    pub const ALL: [RatingBucket; 3] = [Self::SevenPlus, Self::EightPlus, Self::NinePlus];

    /// Display label, also accepted by [`RatingBucket::parse`].
    pub fn label(&self) -> &'static str {
        match self {
            Self::SevenPlus => "7+",
            Self::EightPlus => "8+",
            Self::NinePlus => "9+",
        }
    }

    /// Inclusive lower bound on `Movie::rating`.
    pub fn threshold(&self) -> f64 {
        match self {
            Self::SevenPlus => 7.0,
            Self::EightPlus => 8.0,
            Self::NinePlus => 9.0,
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "7+" | "7" => Some(Self::SevenPlus),
            "8+" | "8" => Some(Self::EightPlus),
            "9+" | "9" => Some(Self::NinePlus),
            _ => None,
        }
    }
}

impl fmt::Display for RatingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RatingBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown rating bucket '{s}' (expected 7+, 8+ or 9+)"))
    }
}

/// User-selected filter options.
///
/// Each category is a map of option -> selected. Only `true` entries count;
/// a category with nothing selected does not restrict the result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPredicate {
    pub years: BTreeMap<String, bool>,
    pub directors: BTreeMap<String, bool>,
    pub ratings: BTreeMap<RatingBucket, bool>,
}

impl FilterPredicate {
    /// True when no option in any category is selected.
    pub fn is_empty(&self) -> bool {
        !any_selected(&self.years) && !any_selected(&self.directors) && !any_selected(&self.ratings)
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.years.insert(year.into(), true);
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.directors.insert(director.into(), true);
        self
    }

    pub fn with_rating(mut self, bucket: RatingBucket) -> Self {
        self.ratings.insert(bucket, true);
        self
    }

    pub fn is_year_selected(&self, year: &str) -> bool {
        self.years.get(year).copied().unwrap_or(false)
    }

    pub fn is_director_selected(&self, director: &str) -> bool {
        self.directors.get(director).copied().unwrap_or(false)
    }

    pub fn is_rating_selected(&self, bucket: RatingBucket) -> bool {
        self.ratings.get(&bucket).copied().unwrap_or(false)
    }

    pub fn toggle_year(&mut self, year: &str) {
        let selected = self.is_year_selected(year);
        self.years.insert(year.to_string(), !selected);
    }

    pub fn toggle_director(&mut self, director: &str) {
        let selected = self.is_director_selected(director);
        self.directors.insert(director.to_string(), !selected);
    }

    pub fn toggle_rating(&mut self, bucket: RatingBucket) {
        let selected = self.is_rating_selected(bucket);
        self.ratings.insert(bucket, !selected);
    }

    pub fn selected_ratings(&self) -> impl Iterator<Item = RatingBucket> + '_ {
        selected(&self.ratings).copied()
    }

    /// Whether `movie` passes all three conditions.
    ///
    /// Years and directors are exact matches against the selected set.
    /// Ratings use OR semantics: the movie must reach at least one
    /// selected threshold.
    pub fn matches(&self, movie: &Movie) -> bool {
        self.matches_year(movie.year)
            && self.matches_director(&movie.director)
            && self.matches_rating(movie.rating)
    }

    fn matches_year(&self, year: i32) -> bool {
        !any_selected(&self.years) || self.is_year_selected(&year.to_string())
    }

    fn matches_director(&self, director: &str) -> bool {
        !any_selected(&self.directors) || self.is_director_selected(director)
    }

    fn matches_rating(&self, rating: f64) -> bool {
        if !any_selected(&self.ratings) {
            return true;
        }
        self.selected_ratings().any(|bucket| rating >= bucket.threshold())
    }
}

fn any_selected<K>(options: &BTreeMap<K, bool>) -> bool {
    options.values().any(|selected| *selected)
}

fn selected<K>(options: &BTreeMap<K, bool>) -> impl Iterator<Item = &K> + '_ {
    options
        .iter()
        .filter(|(_, selected)| **selected)
        .map(|(key, _)| key)
}
