#![warn(clippy::all, missing_docs)]

//! Core engine for the handicap calculator.
//!
//! This crate hosts the validated input models, the course data
//! repository, the handicap formulas and the calculator surface
//! used by the terminal UI and any future frontends.

pub mod calc;
pub mod config;
pub mod course;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use course::{ClubDataset, CourseDataStore, CourseVariant, HoleCount, TeeConfiguration};
pub use error::HandicapError;
pub use models::{CourseData, HandicapIndex, PlayerInput};
