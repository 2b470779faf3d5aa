#![allow(missing_docs)]

//! Typed course data, validated once at load time and immutable afterwards.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::{HandicapError, Result},
    models::CourseData,
};

/// Hole-count variant of a course layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HoleCount {
    /// A 9-hole round.
    Nine,
    /// A full 18-hole round.
    Eighteen,
}

static HOLE_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[^0-9])(9|18)-Loch").expect("failed to compile hole marker regex")
});

impl HoleCount {
    /// Classify a free-text descriptor such as `"18-Loch Platz (Gelb)"`.
    ///
    /// The 18-hole marker wins when both markers are present.
    pub fn classify(descriptor: &str) -> Option<Self> {
        let mut found = None;
        for caps in HOLE_MARKER_RE.captures_iter(descriptor) {
            match caps.get(1).map(|m| m.as_str()) {
                Some("18") => return Some(HoleCount::Eighteen),
                Some("9") => found = Some(HoleCount::Nine),
                _ => {}
            }
        }
        found
    }

    /// Marker text as it appears in dataset descriptors.
    pub fn marker(self) -> &'static str {
        match self {
            HoleCount::Nine => "9-Loch",
            HoleCount::Eighteen => "18-Loch",
        }
    }

    pub fn holes(self) -> u8 {
        match self {
            HoleCount::Nine => 9,
            HoleCount::Eighteen => 18,
        }
    }
}

impl fmt::Display for HoleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-hole", self.holes())
    }
}

/// One row of a handicap table: indices in `[index_min, index_max]` map to `course_handicap`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandicapRange {
    pub index_min: f64,
    pub index_max: f64,
    pub course_handicap: i32,
}

impl HandicapRange {
    /// Both bounds are inclusive.
    pub fn covers(&self, index: f64) -> bool {
        self.index_min <= index && index <= self.index_max
    }
}

/// A playable tee: its course numbers plus an optional lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeeConfiguration {
    pub course: CourseData,
    #[serde(default)]
    pub handicap_ranges: Vec<HandicapRange>,
}

impl TeeConfiguration {
    /// Tee without a lookup table; every resolution uses the formula.
    pub fn formula_only(course: CourseData) -> Self {
        Self {
            course,
            handicap_ranges: Vec::new(),
        }
    }

    /// Course handicap from the first covering table row, if any.
    pub fn lookup(&self, index: f64) -> Option<i32> {
        self.handicap_ranges
            .iter()
            .find(|range| range.covers(index))
            .map(|range| range.course_handicap)
    }

    pub fn has_table(&self) -> bool {
        !self.handicap_ranges.is_empty()
    }
}

/// Course layout for one category and hole count, keyed by tee color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseVariant {
    pub category: String,
    /// Descriptor as written in the dataset.
    pub label: String,
    pub holes: HoleCount,
    pub tees: BTreeMap<String, TeeConfiguration>,
}

impl CourseVariant {
    /// Tee configuration for a color, if present.
    pub fn resolve_tee(&self, tee_color: &str) -> Option<&TeeConfiguration> {
        self.tees.get(tee_color)
    }

    /// Like [`resolve_tee`](Self::resolve_tee) but reports a missing tee as an error.
    pub fn require_tee(&self, tee_color: &str) -> Result<&TeeConfiguration> {
        self.resolve_tee(tee_color)
            .ok_or_else(|| HandicapError::NoMatchingTee(tee_color.to_string()))
    }

    pub fn tee_colors(&self) -> impl Iterator<Item = &str> {
        self.tees.keys().map(String::as_str)
    }
}

/// Tee colors offered by both variants.
pub fn common_tee_colors(a: &CourseVariant, b: &CourseVariant) -> BTreeSet<String> {
    a.tees
        .keys()
        .filter(|color| b.tees.contains_key(*color))
        .cloned()
        .collect()
}

/// All course data for one club.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubDataset {
    pub club: String,
    pub variants: Vec<CourseVariant>,
}

impl ClubDataset {
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// First variant with an exactly matching category and the requested hole count.
    pub fn find_variant(&self, category: &str, holes: HoleCount) -> Option<&CourseVariant> {
        self.variants
            .iter()
            .find(|variant| variant.category == category && variant.holes == holes)
    }

    /// Like [`find_variant`](Self::find_variant) but reports a miss as an error.
    pub fn require_variant(&self, category: &str, holes: HoleCount) -> Result<&CourseVariant> {
        self.find_variant(category, holes)
            .ok_or_else(|| HandicapError::NoMatchingVariant {
                category: category.to_string(),
                holes: holes.to_string(),
            })
    }

    /// Distinct categories in dataset order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for variant in &self.variants {
            if !seen.contains(&variant.category.as_str()) {
                seen.push(variant.category.as_str());
            }
        }
        seen
    }

    /// Tee colors selectable for a category.
    ///
    /// When the category has both a 9- and an 18-hole layout only tees present in both are
    /// offered; with a single layout its own tees are offered.
    pub fn category_tee_colors(&self, category: &str) -> BTreeSet<String> {
        match (
            self.find_variant(category, HoleCount::Nine),
            self.find_variant(category, HoleCount::Eighteen),
        ) {
            (Some(nine), Some(eighteen)) => common_tee_colors(nine, eighteen),
            (Some(only), None) | (None, Some(only)) => only.tees.keys().cloned().collect(),
            (None, None) => BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee(slope: i32, ranges: Vec<HandicapRange>) -> TeeConfiguration {
        TeeConfiguration {
            course: CourseData::new(slope, 71.0, 72).expect("valid course"),
            handicap_ranges: ranges,
        }
    }

    fn variant(category: &str, holes: HoleCount, colors: &[&str]) -> CourseVariant {
        CourseVariant {
            category: category.to_string(),
            label: holes.marker().to_string(),
            holes,
            tees: colors
                .iter()
                .map(|color| (color.to_string(), tee(125, Vec::new())))
                .collect(),
        }
    }

    #[test]
    fn classifies_hole_markers() {
        assert_eq!(HoleCount::classify("18-Loch"), Some(HoleCount::Eighteen));
        assert_eq!(
            HoleCount::classify("9-Loch Kurzplatz"),
            Some(HoleCount::Nine)
        );
        assert_eq!(
            HoleCount::classify("Platz A (18-Loch, 2x 9-Loch)"),
            Some(HoleCount::Eighteen)
        );
        assert_eq!(HoleCount::classify("19-Loch"), None);
        assert_eq!(HoleCount::classify("Championship"), None);
    }

    #[test]
    fn lookup_uses_inclusive_bounds_and_first_match() {
        let tee = tee(
            125,
            vec![
                HandicapRange {
                    index_min: 10.0,
                    index_max: 10.8,
                    course_handicap: 11,
                },
                HandicapRange {
                    index_min: 10.8,
                    index_max: 11.7,
                    course_handicap: 12,
                },
            ],
        );
        assert_eq!(tee.lookup(10.0), Some(11));
        assert_eq!(tee.lookup(10.8), Some(11));
        assert_eq!(tee.lookup(11.7), Some(12));
        assert_eq!(tee.lookup(11.8), None);
        assert_eq!(tee.lookup(9.9), None);
    }

    #[test]
    fn finds_first_matching_variant() {
        let mut first = variant("Herren", HoleCount::Eighteen, &["Gelb"]);
        first.label = "18-Loch A".to_string();
        let mut second = variant("Herren", HoleCount::Eighteen, &["Weiss"]);
        second.label = "18-Loch B".to_string();
        let dataset = ClubDataset {
            club: "GC".to_string(),
            variants: vec![
                variant("Damen", HoleCount::Eighteen, &["Rot"]),
                first,
                second,
            ],
        };

        let found = dataset
            .find_variant("Herren", HoleCount::Eighteen)
            .expect("variant");
        assert_eq!(found.label, "18-Loch A");
        assert!(dataset.find_variant("herren", HoleCount::Eighteen).is_none());
        assert!(matches!(
            dataset.require_variant("Herren", HoleCount::Nine),
            Err(HandicapError::NoMatchingVariant { .. })
        ));
        assert_eq!(dataset.categories(), vec!["Damen", "Herren"]);
    }

    #[test]
    fn common_colors_intersect_both_variants() {
        let nine = variant("Herren", HoleCount::Nine, &["Gelb", "Rot"]);
        let eighteen = variant("Herren", HoleCount::Eighteen, &["Gelb", "Weiss", "Blau"]);
        let common = common_tee_colors(&nine, &eighteen);
        assert_eq!(common.into_iter().collect::<Vec<_>>(), vec!["Gelb"]);

        let dataset = ClubDataset {
            club: "GC".to_string(),
            variants: vec![
                nine,
                eighteen,
                variant("Damen", HoleCount::Eighteen, &["Rot", "Gelb"]),
            ],
        };
        assert_eq!(dataset.category_tee_colors("Herren").len(), 1);
        assert_eq!(dataset.category_tee_colors("Damen").len(), 2);
        assert!(dataset.category_tee_colors("Jugend").is_empty());
    }

    #[test]
    fn deserialized_tee_keeps_course_ranges() {
        let parsed: TeeConfiguration =
            serde_json::from_str(r#"{"course":{"slope":125,"course_rating":71.0,"par":72}}"#)
                .expect("valid tee");
        assert_eq!(parsed, tee(125, Vec::new()));

        let rejected = serde_json::from_str::<TeeConfiguration>(
            r#"{"course":{"slope":-40,"course_rating":1000.0,"par":3}}"#,
        );
        assert!(rejected.is_err());
    }

    #[test]
    fn missing_tee_is_reported() {
        let nine = variant("Herren", HoleCount::Nine, &["Gelb"]);
        assert!(nine.resolve_tee("Gelb").is_some());
        assert_eq!(
            nine.require_tee("Blau"),
            Err(HandicapError::NoMatchingTee("Blau".to_string()))
        );
    }
}
