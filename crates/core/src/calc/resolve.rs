//! Single entry point for course handicaps: table lookup first, formula otherwise.

use serde::{Deserialize, Serialize};

use super::formula::{course_handicap_18, course_handicap_9};
use crate::course::{HoleCount, TeeConfiguration};

/// Where a resolved course handicap came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandicapSource {
    /// A covering row of the tee's handicap table.
    Table,
    /// The slope/rating/par formula.
    Formula,
}

/// A course handicap together with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHandicap {
    /// Integer course handicap.
    pub value: i32,
    /// Table or formula.
    pub source: HandicapSource,
}

/// Formula result for `tee` ignoring any table.
pub fn formula_course_handicap(index: f64, tee: &TeeConfiguration, holes: HoleCount) -> i32 {
    let course = &tee.course;
    let formula = match holes {
        HoleCount::Nine => course_handicap_9,
        HoleCount::Eighteen => course_handicap_18,
    };
    formula(
        index,
        course.slope.value(),
        course.course_rating.value(),
        course.par.value(),
    )
}

/// Resolve a course handicap, recording whether the table or the formula produced it.
///
/// Table values are only used for 18 holes. 9-hole tables are informational and never
/// override the formula.
pub fn resolve(index: f64, tee: &TeeConfiguration, holes: HoleCount) -> ResolvedHandicap {
    if holes == HoleCount::Eighteen {
        if let Some(value) = tee.lookup(index) {
            return ResolvedHandicap {
                value,
                source: HandicapSource::Table,
            };
        }
    }
    ResolvedHandicap {
        value: formula_course_handicap(index, tee, holes),
        source: HandicapSource::Formula,
    }
}

/// Course handicap for `index` on `tee`.
pub fn resolve_course_handicap(index: f64, tee: &TeeConfiguration, holes: HoleCount) -> i32 {
    resolve(index, tee, holes).value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{course::HandicapRange, models::CourseData};

    fn tee_with_table() -> TeeConfiguration {
        TeeConfiguration {
            course: CourseData::new(125, 71.0, 72).expect("valid course"),
            handicap_ranges: vec![
                HandicapRange {
                    index_min: 17.5,
                    index_max: 18.0,
                    course_handicap: 21,
                },
                HandicapRange {
                    index_min: 18.1,
                    index_max: 18.9,
                    course_handicap: 22,
                },
            ],
        }
    }

    #[test]
    fn table_wins_for_eighteen_holes() {
        let tee = tee_with_table();
        let resolved = resolve(18.0, &tee, HoleCount::Eighteen);
        assert_eq!(
            resolved,
            ResolvedHandicap {
                value: 21,
                source: HandicapSource::Table
            }
        );
        assert_eq!(resolve_course_handicap(18.9, &tee, HoleCount::Eighteen), 22);
    }

    #[test]
    fn uncovered_index_falls_back_to_formula() {
        let tee = tee_with_table();
        let resolved = resolve(25.0, &tee, HoleCount::Eighteen);
        assert_eq!(resolved.source, HandicapSource::Formula);
        assert_eq!(resolved.value, course_handicap_18(25.0, 125, 71.0, 72));
    }

    #[test]
    fn nine_holes_always_use_formula() {
        let tee = tee_with_table();
        let resolved = resolve(18.0, &tee, HoleCount::Nine);
        assert_eq!(resolved.source, HandicapSource::Formula);
        assert_eq!(resolved.value, 9);
    }

    #[test]
    fn without_ranges_matches_pure_formula() {
        let mut tee = tee_with_table();
        tee.handicap_ranges.clear();
        for tenth in -50..=540 {
            let index = tenth as f64 / 10.0;
            assert_eq!(
                resolve_course_handicap(index, &tee, HoleCount::Eighteen),
                course_handicap_18(index, 125, 71.0, 72)
            );
            assert_eq!(
                resolve_course_handicap(index, &tee, HoleCount::Nine),
                course_handicap_9(index, 125, 71.0, 72)
            );
        }
    }
}
