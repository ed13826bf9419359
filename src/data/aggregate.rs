use std::collections::BTreeMap;

use super::error::QueryError;
use super::filter::{filter_by_period, FilteredView, Period};
use super::model::{EnrichedDataset, GroupField, MetricField};

// ---------------------------------------------------------------------------
// Grouped sums
// ---------------------------------------------------------------------------

/// Category label → summed metric, iterated in ascending label order.
/// Sums are `u128` so totals of many `u64` counts cannot overflow.
pub type GroupedAggregate = BTreeMap<String, u128>;

/// A winning category and its summed metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: u128,
}

/// Partition `view` by `group`, summing `metric` within each partition.
/// An empty view gives an empty mapping.
pub fn grouped_sum_series(view: &FilteredView<'_>, group: GroupField, metric: MetricField) -> GroupedAggregate {
    let mut sums = GroupedAggregate::new();
    for post in view.iter() {
        *sums.entry(post.category(group).to_string()).or_default() += u128::from(post.metric(metric));
    }
    sums
}

/// The category with the largest `metric` sum.
///
/// Ties go to the smallest category label: the grouped sums are scanned in
/// ascending label order and only a strictly greater sum replaces the
/// current best.
pub fn top_category_by_sum(
    view: &FilteredView<'_>,
    group: GroupField,
    metric: MetricField,
) -> Result<CategoryTotal, QueryError> {
    let sums = grouped_sum_series(view, group, metric);
    let mut best: Option<(&String, u128)> = None;
    for (category, &total) in &sums {
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((category, total)),
        }
    }

    best.map(|(category, total)| CategoryTotal {
        category: category.clone(),
        total,
    })
    .ok_or(QueryError::EmptyView)
}

// ---------------------------------------------------------------------------
// Insights & period report
// ---------------------------------------------------------------------------

/// The four headline figures for a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    pub most_viewed_platform: CategoryTotal,
    pub most_engaged_platform: CategoryTotal,
    pub most_viewed_content: CategoryTotal,
    pub most_engaged_content: CategoryTotal,
}

impl Insights {
    pub fn compute(view: &FilteredView<'_>) -> Result<Self, QueryError> {
        Ok(Insights {
            most_viewed_platform: top_category_by_sum(view, GroupField::Platform, MetricField::Views)?,
            most_engaged_platform: top_category_by_sum(view, GroupField::Platform, MetricField::Engagement)?,
            most_viewed_content: top_category_by_sum(view, GroupField::ContentType, MetricField::Views)?,
            most_engaged_content: top_category_by_sum(view, GroupField::ContentType, MetricField::Engagement)?,
        })
    }
}

/// Everything the dashboard shows for one period, detached from the
/// dataset borrow so it can live in the UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodReport {
    pub period: Period,
    /// Dataset positions of the period's posts.
    pub rows: Vec<usize>,
    /// `None` when the period has no posts.
    pub insights: Option<Insights>,
    pub views_by_platform: GroupedAggregate,
    pub engagement_by_content: GroupedAggregate,
}

impl PeriodReport {
    pub fn build(dataset: &EnrichedDataset, period: Period) -> Self {
        let view = filter_by_period(dataset, period);

        let insights = match Insights::compute(&view) {
            Ok(insights) => Some(insights),
            Err(QueryError::EmptyView) => {
                log::warn!("No posts for {period}");
                None
            }
        };

        PeriodReport {
            period,
            views_by_platform: grouped_sum_series(&view, GroupField::Platform, MetricField::Views),
            engagement_by_content: grouped_sum_series(&view, GroupField::ContentType, MetricField::Engagement),
            insights,
            rows: view.into_indices(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
