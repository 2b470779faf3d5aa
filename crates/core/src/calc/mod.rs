//! Handicap calculator: pure formulas and the table/formula resolver.

/// Course handicap and allowance formulas.
pub mod formula;
/// Table-first course handicap resolution.
pub mod resolve;

pub use formula::{
    course_handicap_18, course_handicap_9, foursomes_allowance, round_to_integer,
    singles_allowance, team_handicap_index, Attribution,
};
pub use resolve::{
    formula_course_handicap, resolve, resolve_course_handicap, HandicapSource, ResolvedHandicap,
};
