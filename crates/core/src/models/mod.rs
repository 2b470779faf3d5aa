#![allow(missing_docs)]

//! Shared domain models: validated numeric inputs and course numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HandicapError, Result};

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(HandicapError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// A player's handicap index, accepted in `[-5.0, 54.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct HandicapIndex(f64);

impl HandicapIndex {
    /// Lowest accepted index (plus handicap).
    pub const MIN: f64 = -5.0;
    /// Highest accepted index.
    pub const MAX: f64 = 54.0;

    /// Validate and wrap a raw index.
    pub fn new(value: f64) -> Result<Self> {
        check_range("handicap index", value, Self::MIN, Self::MAX)?;
        Ok(Self(value))
    }

    /// Raw decimal value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for HandicapIndex {
    type Error = HandicapError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for HandicapIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Slope rating of a tee, accepted in `[55, 155]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32")]
pub struct SlopeRating(i32);

impl SlopeRating {
    /// Lowest accepted slope.
    pub const MIN: i32 = 55;
    /// Highest accepted slope.
    pub const MAX: i32 = 155;

    pub fn new(value: i32) -> Result<Self> {
        check_range("slope rating", value as f64, Self::MIN as f64, Self::MAX as f64)?;
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for SlopeRating {
    type Error = HandicapError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

/// Course rating of a tee, accepted in `[55.0, 85.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct CourseRating(f64);

impl CourseRating {
    /// Lowest accepted course rating.
    pub const MIN: f64 = 55.0;
    /// Highest accepted course rating.
    pub const MAX: f64 = 85.0;

    pub fn new(value: f64) -> Result<Self> {
        check_range("course rating", value, Self::MIN, Self::MAX)?;
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CourseRating {
    type Error = HandicapError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

/// Par of a course, accepted in `[60, 78]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32")]
pub struct Par(i32);

impl Par {
    /// Lowest accepted par.
    pub const MIN: i32 = 60;
    /// Highest accepted par.
    pub const MAX: i32 = 78;

    pub fn new(value: i32) -> Result<Self> {
        check_range("par", value as f64, Self::MIN as f64, Self::MAX as f64)?;
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Par {
    type Error = HandicapError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

/// Validated course numbers shared by every formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseData {
    pub slope: SlopeRating,
    pub course_rating: CourseRating,
    pub par: Par,
}

impl CourseData {
    /// Validate raw course numbers in one step.
    pub fn new(slope: i32, course_rating: f64, par: i32) -> Result<Self> {
        Ok(Self {
            slope: SlopeRating::new(slope)?,
            course_rating: CourseRating::new(course_rating)?,
            par: Par::new(par)?,
        })
    }
}

/// Caller-supplied player data; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInput {
    pub index: HandicapIndex,
    pub category: Option<String>,
    pub tee: Option<String>,
}

impl PlayerInput {
    /// Input for manual entry without any dataset selection.
    pub fn manual(index: HandicapIndex) -> Self {
        Self {
            index,
            category: None,
            tee: None,
        }
    }
}
