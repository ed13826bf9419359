use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::color::ColorMap;
use crate::data::aggregate::PeriodReport;
use crate::data::cache::DatasetCache;
use crate::data::filter::Period;
use crate::data::model::{EnrichedDataset, GroupField};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    cache: DatasetCache,

    /// File the current dataset came from.
    pub source: Option<PathBuf>,

    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Arc<EnrichedDataset>>,

    /// Selected year / month.
    pub period: Option<Period>,

    /// Report for `period` (cached, rebuilt on selection change).
    pub report: Option<PeriodReport>,

    /// Bar colours, stable across periods.
    pub platform_colors: ColorMap,
    pub content_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load `path` (through the cache) and make it the current dataset.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let dataset = self
            .cache
            .load(path)
            .with_context(|| format!("loading {}", path.display()))?;

        log::info!(
            "Loaded {} posts from {} (years {:?})",
            dataset.len(),
            path.display(),
            dataset.distinct_years()
        );

        self.source = Some(path.to_path_buf());
        self.set_dataset(dataset);
        Ok(())
    }

    /// [`open`](Self::open), reporting failures in the status line instead
    /// of returning them. The previous dataset stays on failure.
    pub fn open_or_report(&mut self, path: &Path) {
        match self.open(path) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Re-open the current source; a no-op parse if the file is unchanged.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.open_or_report(&path);
        }
    }

    /// Ingest a dataset, keep the selection if it still exists, rebuild
    /// colours and the report.
    pub fn set_dataset(&mut self, dataset: Arc<EnrichedDataset>) {
        let still_valid = self.period.is_some_and(|p| {
            dataset.distinct_years().contains(&p.year) && dataset.distinct_months().contains(&p.month)
        });
        if !still_valid {
            self.period = Period::default_for(&dataset);
        }

        self.platform_colors = ColorMap::new(dataset.categories(GroupField::Platform));
        self.content_colors = ColorMap::new(dataset.categories(GroupField::ContentType));

        self.dataset = Some(dataset);
        self.refresh_report();
    }

    pub fn select_period(&mut self, period: Period) {
        if self.period != Some(period) {
            self.period = Some(period);
            self.refresh_report();
        }
    }

    pub fn select_year(&mut self, year: i32) {
        if let Some(p) = self.period {
            self.select_period(Period { year, ..p });
        }
    }

    pub fn select_month(&mut self, month: u32) {
        if let Some(p) = self.period {
            self.select_period(Period { month, ..p });
        }
    }

    /// Recompute `report` after a dataset or selection change.
    fn refresh_report(&mut self) {
        self.report = match (&self.dataset, self.period) {
            (Some(ds), Some(period)) => Some(PeriodReport::build(ds, period)),
            _ => None,
        };
    }
}
