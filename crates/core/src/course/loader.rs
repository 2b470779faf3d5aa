//! Course dataset parsing and soft-failing file loading.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use super::models::{ClubDataset, CourseVariant, HandicapRange, HoleCount, TeeConfiguration};
use crate::{
    error::{HandicapError, Result},
    models::CourseData,
};

/// Outcome of reading the dataset from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetStatus {
    /// Dataset parsed and usable.
    Ready,
    /// File missing or unreadable.
    Unavailable(String),
    /// File read but its content has the wrong shape.
    InvalidFormat(String),
}

/// Result of [`load`]. Always carries a dataset, empty on failure.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Parsed dataset; empty unless `status` is [`DatasetStatus::Ready`].
    pub dataset: Arc<ClubDataset>,
    /// Whether the dataset is usable.
    pub status: DatasetStatus,
    /// Entries skipped during validation.
    pub issues: Vec<String>,
    /// Path the dataset was read from.
    pub source: PathBuf,
    /// Time the load completed.
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    fn failed(source: &Path, status: DatasetStatus) -> Self {
        Self {
            dataset: Arc::new(ClubDataset::default()),
            status,
            issues: Vec::new(),
            source: source.to_path_buf(),
            loaded_at: Utc::now(),
        }
    }

    /// Whether dataset-backed lookups are possible.
    pub fn is_ready(&self) -> bool {
        self.status == DatasetStatus::Ready
    }

    /// The load failure as an error, if any.
    pub fn error(&self) -> Option<HandicapError> {
        match &self.status {
            DatasetStatus::Ready => None,
            DatasetStatus::Unavailable(reason) => {
                Some(HandicapError::DataUnavailable(reason.clone()))
            }
            DatasetStatus::InvalidFormat(reason) => {
                Some(HandicapError::InvalidFormat(reason.clone()))
            }
        }
    }

    /// Borrow the dataset, or the load failure when it is not usable.
    pub fn require_dataset(&self) -> Result<&ClubDataset> {
        match self.error() {
            Some(err) => Err(err),
            None => Ok(&self.dataset),
        }
    }
}

/// Read and validate the dataset at `path`, never failing.
///
/// A missing or unreadable file yields [`DatasetStatus::Unavailable`], content that does not
/// parse yields [`DatasetStatus::InvalidFormat`]; both come with an empty dataset.
pub fn load(path: impl AsRef<Path>) -> LoadReport {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            let reason = if err.kind() == io::ErrorKind::NotFound {
                format!("{} not found", path.display())
            } else {
                format!("failed to read {}: {err}", path.display())
            };
            warn!(path = %path.display(), %reason, "Course data unavailable");
            return LoadReport::failed(path, DatasetStatus::Unavailable(reason));
        }
    };

    match parse_dataset(&content) {
        Ok((dataset, issues)) => {
            info!(
                path = %path.display(),
                club = %dataset.club,
                variants = dataset.variants.len(),
                skipped = issues.len(),
                "Course data loaded"
            );
            LoadReport {
                dataset: Arc::new(dataset),
                status: DatasetStatus::Ready,
                issues,
                source: path.to_path_buf(),
                loaded_at: Utc::now(),
            }
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "Course data rejected");
            let reason = match err {
                HandicapError::InvalidFormat(reason) => reason,
                other => other.to_string(),
            };
            LoadReport::failed(path, DatasetStatus::InvalidFormat(reason))
        }
    }
}

/// Parse dataset JSON into typed records.
///
/// Structural errors fail the whole parse. Entries that parse but fail validation are skipped
/// and described in the returned issue list.
pub fn parse_dataset(content: &str) -> Result<(ClubDataset, Vec<String>)> {
    let raw: RawDataset = serde_json::from_str(content)
        .map_err(|err| HandicapError::InvalidFormat(err.to_string()))?;

    let mut issues = Vec::new();
    let mut variants = Vec::with_capacity(raw.course_handicaps.len());
    for (position, entry) in raw.course_handicaps.into_iter().enumerate() {
        match build_variant(entry, &mut issues) {
            Ok(variant) => variants.push(variant),
            Err(reason) => {
                warn!(entry = position, %reason, "Skipping course entry");
                issues.push(format!("entry {position}: {reason}"));
            }
        }
    }

    Ok((
        ClubDataset {
            club: raw.golfclub.trim().to_string(),
            variants,
        },
        issues,
    ))
}

fn build_variant(
    raw: RawVariant,
    issues: &mut Vec<String>,
) -> std::result::Result<CourseVariant, String> {
    let holes = HoleCount::classify(&raw.holes).ok_or_else(|| {
        format!(
            "'{}' contains neither '{}' nor '{}'",
            raw.holes,
            HoleCount::Nine.marker(),
            HoleCount::Eighteen.marker()
        )
    })?;

    let mut tees = BTreeMap::new();
    for (color, tee) in raw.tees {
        match build_tee(tee) {
            Ok(config) => {
                tees.insert(color, config);
            }
            Err(reason) => {
                warn!(category = %raw.category, holes = %raw.holes, tee = %color, %reason, "Skipping tee");
                issues.push(format!(
                    "{} / {} / {color}: {reason}",
                    raw.category, raw.holes
                ));
            }
        }
    }

    if tees.is_empty() {
        return Err(format!(
            "{} / {} has no usable tees",
            raw.category, raw.holes
        ));
    }

    Ok(CourseVariant {
        category: raw.category,
        label: raw.holes,
        holes,
        tees,
    })
}

fn build_tee(raw: RawTee) -> std::result::Result<TeeConfiguration, String> {
    let course = CourseData::new(raw.slope, raw.course_rating, raw.par)
        .map_err(|err| err.to_string())?;

    let mut handicap_ranges = Vec::with_capacity(raw.handicap_ranges.len());
    for range in raw.handicap_ranges {
        if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
            return Err(format!(
                "invalid handicap range {}..{}",
                range.min, range.max
            ));
        }
        handicap_ranges.push(HandicapRange {
            index_min: range.min,
            index_max: range.max,
            course_handicap: range.course_handicap,
        });
    }

    Ok(TeeConfiguration {
        course,
        handicap_ranges,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    golfclub: String,
    course_handicaps: Vec<RawVariant>,
}

#[derive(Debug, Deserialize)]
struct RawVariant {
    category: String,
    holes: String,
    tees: BTreeMap<String, RawTee>,
}

#[derive(Debug, Deserialize)]
struct RawTee {
    #[serde(rename = "SR")]
    slope: i32,
    #[serde(rename = "CR")]
    course_rating: f64,
    #[serde(rename = "Par")]
    par: i32,
    #[serde(rename = "handicapRanges", default)]
    handicap_ranges: Vec<RawRange>,
}

#[derive(Debug, Deserialize)]
struct RawRange {
    #[serde(rename = "HCPI_min")]
    min: f64,
    #[serde(rename = "HCPI_max")]
    max: f64,
    #[serde(rename = "CourseHCP")]
    course_handicap: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "golfclub": " GC Sample ",
        "courseHandicaps": [
            {
                "category": "Herren",
                "holes": "18-Loch Meisterschaftsplatz",
                "tees": {
                    "Gelb": {
                        "SR": 130, "CR": 72.1, "Par": 72,
                        "handicapRanges": [
                            {"HCPI_min": 9.6, "HCPI_max": 10.4, "CourseHCP": 11},
                            {"HCPI_min": 10.5, "HCPI_max": 11.3, "CourseHCP": 13}
                        ]
                    },
                    "Weiss": {"SR": 135, "CR": 74.0, "Par": 72}
                }
            },
            {
                "category": "Herren",
                "holes": "9-Loch",
                "tees": {
                    "Gelb": {"SR": 128, "CR": 35.9, "Par": 36},
                    "Rot": {"SR": 200, "CR": 70.0, "Par": 72}
                }
            },
            {
                "category": "Damen",
                "holes": "Kurzplatz",
                "tees": {"Rot": {"SR": 120, "CR": 70.0, "Par": 72}}
            }
        ]
    }"#;

    #[test]
    fn parses_and_skips_invalid_entries() -> Result<()> {
        let (dataset, issues) = parse_dataset(SAMPLE)?;
        assert_eq!(dataset.club, "GC Sample");
        assert_eq!(dataset.variants.len(), 1);

        let eighteen = dataset.require_variant("Herren", HoleCount::Eighteen)?;
        assert_eq!(eighteen.label, "18-Loch Meisterschaftsplatz");
        let gelb = eighteen.require_tee("Gelb")?;
        assert_eq!(gelb.course.slope.value(), 130);
        assert_eq!(gelb.handicap_ranges.len(), 2);
        assert_eq!(gelb.lookup(10.4), Some(11));
        assert!(!eighteen.require_tee("Weiss")?.has_table());

        // 9-hole CR of 35.9 is outside the accepted course rating range.
        assert!(dataset.find_variant("Herren", HoleCount::Nine).is_none());
        assert!(dataset.categories().iter().all(|c| *c != "Damen"));
        assert_eq!(issues.len(), 4);
        Ok(())
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = parse_dataset(r#"{"golfclub": "GC", "courseHandicaps": {}}"#).unwrap_err();
        assert!(matches!(err, HandicapError::InvalidFormat(_)));
        assert!(parse_dataset("not json").is_err());
    }

    #[test]
    fn rejects_inverted_ranges() -> Result<()> {
        let content = r#"{
            "golfclub": "GC",
            "courseHandicaps": [{
                "category": "Herren",
                "holes": "18-Loch",
                "tees": {"Gelb": {"SR": 125, "CR": 71.0, "Par": 72,
                    "handicapRanges": [{"HCPI_min": 5.0, "HCPI_max": 4.0, "CourseHCP": 4}]}}
            }]
        }"#;
        let (dataset, issues) = parse_dataset(content)?;
        assert!(dataset.is_empty());
        assert_eq!(issues.len(), 2);
        Ok(())
    }

    #[test]
    fn missing_file_is_unavailable() -> Result<()> {
        let dir = tempdir()?;
        let report = load(dir.path().join("missing.json"));
        assert!(matches!(report.status, DatasetStatus::Unavailable(_)));
        assert!(report.dataset.is_empty());
        assert!(matches!(
            report.require_dataset(),
            Err(HandicapError::DataUnavailable(_))
        ));
        Ok(())
    }

    #[test]
    fn malformed_file_is_invalid_format() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"golfclub": 3}"#)?;
        let report = load(&path);
        assert!(matches!(report.status, DatasetStatus::InvalidFormat(_)));
        assert!(matches!(report.error(), Some(HandicapError::InvalidFormat(_))));
        assert!(report.dataset.is_empty());
        Ok(())
    }

    #[test]
    fn bundled_sample_dataset_is_valid() -> Result<()> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/course_data.json");
        let report = load(&path);
        assert!(report.is_ready(), "sample dataset failed: {:?}", report.status);
        assert!(report.issues.is_empty());

        let dataset = report.require_dataset()?;
        assert_eq!(dataset.categories(), vec!["Herren", "Damen"]);
        let gelb = dataset
            .require_variant("Herren", HoleCount::Eighteen)?
            .require_tee("Gelb")?;
        assert_eq!(gelb.lookup(18.0), Some(20));
        assert_eq!(
            dataset
                .category_tee_colors("Herren")
                .into_iter()
                .collect::<Vec<_>>(),
            vec!["Blau", "Gelb"]
        );
        Ok(())
    }

    #[test]
    fn loads_valid_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("club.json");
        fs::write(&path, SAMPLE)?;
        let report = load(&path);
        assert!(report.is_ready());
        assert_eq!(report.source, path);
        assert_eq!(report.require_dataset()?.club, "GC Sample");
        Ok(())
    }
}
