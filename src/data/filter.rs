use std::fmt;

use chrono::Month;

use super::model::{EnrichedDataset, PostRecord};

// ---------------------------------------------------------------------------
// Period: the year/month selection
// ---------------------------------------------------------------------------

/// A calendar month to report on. `month` is 1–12 when it comes from a
/// dataset, but any value is accepted and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Period { year, month }
    }

    /// Smallest distinct year paired with the smallest distinct month.
    /// `None` for an empty dataset.
    pub fn default_for(dataset: &EnrichedDataset) -> Option<Self> {
        let year = *dataset.distinct_years().first()?;
        let month = *dataset.distinct_months().first()?;
        Some(Period { year, month })
    }
}

/// English month name, or the bare number when out of range.
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_name(self.month), self.year)
    }
}

// ---------------------------------------------------------------------------
// FilteredView
// ---------------------------------------------------------------------------

/// The posts of one period, as positions into the dataset (source order).
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a EnrichedDataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Dataset positions of the matching posts.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PostRecord> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.posts[i])
    }
}

/// Two views are equal when they yield the same posts in the same order.
impl PartialEq for FilteredView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

/// Select the posts whose `year` and `month` both match `period`.
///
/// Never fails: a period absent from the dataset yields an empty view.
pub fn filter_by_period(dataset: &EnrichedDataset, period: Period) -> FilteredView<'_> {
    let indices: Vec<usize> = dataset
        .posts
        .iter()
        .enumerate()
        .filter(|(_, p)| p.year == period.year && p.month == period.month)
        .map(|(i, _)| i)
        .collect();

    log::debug!("{period}: {} of {} posts", indices.len(), dataset.len());

    FilteredView { dataset, indices }
}
