//! Load-once access to the course dataset.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::debug;

use super::loader::{self, LoadReport};

/// Owns the dataset location and loads it on first access.
///
/// The report is computed at most once, even with concurrent callers, and never changes
/// afterwards. Share the store by reference (or inside an `Arc`).
#[derive(Debug)]
pub struct CourseDataStore {
    path: PathBuf,
    report: OnceCell<LoadReport>,
}

impl CourseDataStore {
    /// Store reading from `path` on first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            report: OnceCell::new(),
        }
    }

    /// Store wrapping an already loaded report.
    pub fn from_report(report: LoadReport) -> Self {
        Self {
            path: report.source.clone(),
            report: OnceCell::with_value(report),
        }
    }

    /// Location of the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the dataset has been read yet.
    pub fn is_loaded(&self) -> bool {
        self.report.get().is_some()
    }

    /// Load report, reading the dataset on first call.
    pub fn report(&self) -> &LoadReport {
        self.report.get_or_init(|| {
            debug!(path = %self.path.display(), "Loading course data");
            loader::load(&self.path)
        })
    }
}
