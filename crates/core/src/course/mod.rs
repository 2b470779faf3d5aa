//! Course data repository: typed dataset records, loading and lookups.

/// Dataset parsing and file loading.
pub mod loader;
/// Typed course records and lookup helpers.
pub mod models;
/// Load-once dataset access.
pub mod store;

pub use loader::{load, parse_dataset, DatasetStatus, LoadReport};
pub use models::{
    common_tee_colors, ClubDataset, CourseVariant, HandicapRange, HoleCount, TeeConfiguration,
};
pub use store::CourseDataStore;
