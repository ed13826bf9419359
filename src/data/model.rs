use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const DATE: &str = "date";
pub const PLATFORM: &str = "platform";
pub const CONTENT_TYPE: &str = "content_type";
pub const VIEWS: &str = "views";
pub const LIKES: &str = "likes";
pub const COMMENTS: &str = "comments";
pub const SHARES: &str = "shares";

/// Columns every source must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 7] = [DATE, PLATFORM, CONTENT_TYPE, VIEWS, LIKES, COMMENTS, SHARES];

// ---------------------------------------------------------------------------
// RawPost – one source row before enrichment
// ---------------------------------------------------------------------------

/// A row exactly as read from the source. Unknown columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPost {
    pub date: String,
    pub platform: String,
    pub content_type: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

// ---------------------------------------------------------------------------
// PostRecord – one enriched row
// ---------------------------------------------------------------------------

/// A post with its parsed date and derived calendar / engagement fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub date: NaiveDate,
    pub platform: String,
    pub content_type: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub year: i32,
    pub month: u32,
    /// `likes + comments + shares`.
    pub engagement: u64,
}

impl PostRecord {
    /// Derive calendar fields and engagement. Returns `None` if the
    /// engagement sum does not fit in a `u64`.
    pub fn new(
        date: NaiveDate,
        platform: String,
        content_type: String,
        views: u64,
        likes: u64,
        comments: u64,
        shares: u64,
    ) -> Option<Self> {
        let engagement = likes.checked_add(comments)?.checked_add(shares)?;
        Some(Self {
            year: date.year(),
            month: date.month(),
            date,
            platform,
            content_type,
            views,
            likes,
            comments,
            shares,
            engagement,
        })
    }

    /// The category label this post falls under for `field`.
    pub fn category(&self, field: GroupField) -> &str {
        match field {
            GroupField::Platform => &self.platform,
            GroupField::ContentType => &self.content_type,
        }
    }

    /// The value of `metric` for this post.
    pub fn metric(&self, metric: MetricField) -> u64 {
        match metric {
            MetricField::Views => self.views,
            MetricField::Engagement => self.engagement,
        }
    }
}

// ---------------------------------------------------------------------------
// Grouping / metric selectors
// ---------------------------------------------------------------------------

/// Category columns a view can be partitioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    Platform,
    ContentType,
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupField::Platform => write!(f, "{PLATFORM}"),
            GroupField::ContentType => write!(f, "{CONTENT_TYPE}"),
        }
    }
}

/// Numeric columns that can be summed per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    Views,
    Engagement,
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricField::Views => write!(f, "{VIEWS}"),
            MetricField::Engagement => write!(f, "engagement"),
        }
    }
}

// ---------------------------------------------------------------------------
// EnrichedDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All enriched posts plus pre-computed distinct values for the selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichedDataset {
    /// All posts, in source order.
    pub posts: Vec<PostRecord>,
    years: BTreeSet<i32>,
    months: BTreeSet<u32>,
    platforms: BTreeSet<String>,
    content_types: BTreeSet<String>,
}

impl EnrichedDataset {
    /// Build the distinct-value indices from the enriched posts.
    pub fn from_posts(posts: Vec<PostRecord>) -> Self {
        let mut years = BTreeSet::new();
        let mut months = BTreeSet::new();
        let mut platforms = BTreeSet::new();
        let mut content_types = BTreeSet::new();

        for post in &posts {
            years.insert(post.year);
            months.insert(post.month);
            platforms.insert(post.platform.clone());
            content_types.insert(post.content_type.clone());
        }

        EnrichedDataset {
            posts,
            years,
            months,
            platforms,
            content_types,
        }
    }

    /// Sorted distinct years present in the dataset.
    pub fn distinct_years(&self) -> &BTreeSet<i32> {
        &self.years
    }

    /// Sorted distinct months (1–12) present in the dataset, across all years.
    pub fn distinct_months(&self) -> &BTreeSet<u32> {
        &self.months
    }

    /// Sorted distinct labels of a category column.
    pub fn categories(&self, field: GroupField) -> &BTreeSet<String> {
        match field {
            GroupField::Platform => &self.platforms,
            GroupField::ContentType => &self.content_types,
        }
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
