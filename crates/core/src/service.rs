//! Calculator invocation surface used by front ends.
//!
//! Every course handicap computed here goes through
//! [`resolve_course_handicap`](crate::calc::resolve_course_handicap); manual course numbers are
//! wrapped in a table-less [`TeeConfiguration`].

use serde::Serialize;
use tracing::debug;

use crate::{
    calc::{
        foursomes_allowance, resolve, resolve_course_handicap, singles_allowance,
        team_handicap_index, Attribution, ResolvedHandicap,
    },
    course::{ClubDataset, HoleCount, TeeConfiguration},
    error::{HandicapError, Result},
    models::{CourseData, HandicapIndex, PlayerInput},
};

/// 18- and 9-hole course handicaps for the same course numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneralResult {
    /// 18-hole course handicap.
    pub course_handicap_18: i32,
    /// 9-hole course handicap.
    pub course_handicap_9: i32,
}

/// Course handicaps for manually entered course numbers.
pub fn general_course_handicap(index: HandicapIndex, course: CourseData) -> GeneralResult {
    let tee = TeeConfiguration::formula_only(course);
    GeneralResult {
        course_handicap_18: resolve_course_handicap(index.value(), &tee, HoleCount::Eighteen),
        course_handicap_9: resolve_course_handicap(index.value(), &tee, HoleCount::Nine),
    }
}

/// Outcome of a singles match-play calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Course handicaps of player 1 and player 2.
    pub handicaps: (i32, i32),
    /// Strokes given to the receiving player.
    pub allowance: i32,
    /// Receiving side.
    pub attribution: Attribution,
}

impl MatchResult {
    /// Receiver text using the conventional player labels.
    pub fn describe(&self) -> String {
        self.attribution
            .describe("Player 1", "Player 2", self.allowance)
    }
}

/// Singles match play between two players on the same tee.
pub fn singles_match(
    player1: HandicapIndex,
    player2: HandicapIndex,
    tee: &TeeConfiguration,
    holes: HoleCount,
) -> MatchResult {
    let ch1 = resolve_course_handicap(player1.value(), tee, holes);
    let ch2 = resolve_course_handicap(player2.value(), tee, holes);
    let result = MatchResult {
        handicaps: (ch1, ch2),
        allowance: singles_allowance(ch1, ch2),
        attribution: Attribution::between(ch1, ch2),
    };
    debug!(ch1, ch2, allowance = result.allowance, "Singles allowance computed");
    result
}

/// Outcome of a foursomes match-play calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoursomesResult {
    /// Team handicap indices of team 1 and team 2.
    pub team_indices: (f64, f64),
    /// Team course handicaps.
    pub handicaps: (i32, i32),
    /// Strokes given to the receiving team.
    pub allowance: i32,
    /// Receiving side.
    pub attribution: Attribution,
}

impl FoursomesResult {
    /// Receiver text using the conventional team labels.
    pub fn describe(&self) -> String {
        self.attribution.describe("Team 1", "Team 2", self.allowance)
    }

    /// Team indices formatted with two decimals.
    pub fn team_index_labels(&self) -> (String, String) {
        (
            format!("{:.2}", self.team_indices.0),
            format!("{:.2}", self.team_indices.1),
        )
    }
}

/// Foursomes match play between two pairs on the same tee.
pub fn foursomes_match(
    team1: [HandicapIndex; 2],
    team2: [HandicapIndex; 2],
    tee: &TeeConfiguration,
    holes: HoleCount,
) -> FoursomesResult {
    let index1 = team_handicap_index(team1[0].value(), team1[1].value());
    let index2 = team_handicap_index(team2[0].value(), team2[1].value());
    let ch1 = resolve_course_handicap(index1, tee, holes);
    let ch2 = resolve_course_handicap(index2, tee, holes);
    let result = FoursomesResult {
        team_indices: (index1, index2),
        handicaps: (ch1, ch2),
        allowance: foursomes_allowance(ch1, ch2),
        attribution: Attribution::between(ch1, ch2),
    };
    debug!(
        index1,
        index2,
        ch1,
        ch2,
        allowance = result.allowance,
        "Foursomes allowance computed"
    );
    result
}

/// Tee configuration selected by category, hole count and tee color.
pub fn select_tee<'a>(
    dataset: &'a ClubDataset,
    category: &str,
    holes: HoleCount,
    tee_color: &str,
) -> Result<&'a TeeConfiguration> {
    dataset
        .require_variant(category, holes)?
        .require_tee(tee_color)
}

/// 9-hole values for a dataset lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NineHoleResult {
    /// Formula value; the one used for 9-hole play.
    pub course_handicap: i32,
    /// Table value, if the 9-hole tee has a covering row. Informational only.
    pub table_value: Option<i32>,
}

/// Dataset-driven course handicaps for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableLookupResult {
    /// Category that was looked up.
    pub category: String,
    /// Tee color that was looked up.
    pub tee_color: String,
    /// 18-hole result, if the category has that layout with this tee.
    pub eighteen: Option<ResolvedHandicap>,
    /// 9-hole result, if the category has that layout with this tee.
    pub nine: Option<NineHoleResult>,
}

/// Look up 18- and 9-hole course handicaps for a player's category and tee.
///
/// Fails when neither layout of the category exists, or when neither offers the tee.
pub fn table_lookup(dataset: &ClubDataset, input: &PlayerInput) -> Result<TableLookupResult> {
    let category = input
        .category
        .as_deref()
        .ok_or(HandicapError::MissingSelection("category"))?;
    let tee_color = input
        .tee
        .as_deref()
        .ok_or(HandicapError::MissingSelection("tee"))?;
    let index = input.index.value();

    let eighteen_variant = dataset.find_variant(category, HoleCount::Eighteen);
    let nine_variant = dataset.find_variant(category, HoleCount::Nine);
    if eighteen_variant.is_none() && nine_variant.is_none() {
        return Err(HandicapError::NoMatchingVariant {
            category: category.to_string(),
            holes: "9- or 18-hole".to_string(),
        });
    }

    let eighteen = eighteen_variant
        .and_then(|variant| variant.resolve_tee(tee_color))
        .map(|tee| resolve(index, tee, HoleCount::Eighteen));
    let nine = nine_variant
        .and_then(|variant| variant.resolve_tee(tee_color))
        .map(|tee| NineHoleResult {
            course_handicap: resolve_course_handicap(index, tee, HoleCount::Nine),
            table_value: tee.lookup(index),
        });

    if eighteen.is_none() && nine.is_none() {
        return Err(HandicapError::NoMatchingTee(tee_color.to_string()));
    }

    Ok(TableLookupResult {
        category: category.to_string(),
        tee_color: tee_color.to_string(),
        eighteen,
        nine,
    })
}
