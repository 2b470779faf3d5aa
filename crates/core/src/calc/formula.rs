//! Course handicap and match-play allowance formulas.
//!
//! All functions are pure. Every integer result passes through
//! [`round_to_integer`], so one rounding rule applies to every path.

use serde::{Deserialize, Serialize};

/// Nominal slope of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Weight given to the lower (stronger) index of a foursomes team.
const TEAM_LOW_WEIGHT: f64 = 0.6;
/// Weight given to the higher index of a foursomes team.
const TEAM_HIGH_WEIGHT: f64 = 0.4;

/// Round to the nearest integer, ties to even (`2.5 -> 2`, `3.5 -> 4`).
pub fn round_to_integer(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// 18-hole course handicap: `index * slope / 113 + (CR - par)`.
pub fn course_handicap_18(index: f64, slope: i32, course_rating: f64, par: i32) -> i32 {
    round_to_integer(unrounded(index, slope, course_rating, par))
}

/// 9-hole course handicap; identical to the 18-hole formula applied to half the index.
pub fn course_handicap_9(index: f64, slope: i32, course_rating: f64, par: i32) -> i32 {
    round_to_integer(unrounded(index / 2.0, slope, course_rating, par))
}

fn unrounded(index: f64, slope: i32, course_rating: f64, par: i32) -> f64 {
    index * (slope as f64 / STANDARD_SLOPE) + (course_rating - par as f64)
}

/// Foursomes team index, weighting the stronger partner at 60%.
pub fn team_handicap_index(index_a: f64, index_b: f64) -> f64 {
    let low = index_a.min(index_b);
    let high = index_a.max(index_b);
    TEAM_LOW_WEIGHT * low + TEAM_HIGH_WEIGHT * high
}

/// Singles match play: two thirds of the course handicap difference.
pub fn singles_allowance(ch1: i32, ch2: i32) -> i32 {
    let diff = (ch1 - ch2).abs() as f64;
    round_to_integer(diff * 2.0 / 3.0)
}

/// Foursomes match play: the full team course handicap difference.
pub fn foursomes_allowance(team_ch1: i32, team_ch2: i32) -> i32 {
    round_to_integer((team_ch1 - team_ch2).abs() as f64)
}

/// Which side receives strokes in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribution {
    /// Equal handicaps; no strokes change hands.
    None,
    /// The first side has the higher handicap and receives strokes.
    First,
    /// The second side has the higher handicap and receives strokes.
    Second,
}

impl Attribution {
    /// Compare two course handicaps; the higher handicap receives.
    pub fn between(ch1: i32, ch2: i32) -> Self {
        match ch1.cmp(&ch2) {
            std::cmp::Ordering::Equal => Attribution::None,
            std::cmp::Ordering::Greater => Attribution::First,
            std::cmp::Ordering::Less => Attribution::Second,
        }
    }

    /// Human-readable receiver text, e.g. `Player 1 (higher course handicap) receives 3 strokes from Player 2.`
    pub fn describe(self, first: &str, second: &str, strokes: i32) -> String {
        let noun = if strokes == 1 { "stroke" } else { "strokes" };
        match self {
            Attribution::None => {
                format!("{first} and {second} have the same course handicap. No strokes are given.")
            }
            Attribution::First => format!(
                "{first} (higher course handicap) receives {strokes} {noun} from {second}."
            ),
            Attribution::Second => format!(
                "{second} (higher course handicap) receives {strokes} {noun} from {first}."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_ties_to_even() {
        assert_eq!(round_to_integer(2.5), 2);
        assert_eq!(round_to_integer(3.5), 4);
        assert_eq!(round_to_integer(-0.5), 0);
        assert_eq!(round_to_integer(-1.5), -2);
        assert_eq!(round_to_integer(18.91), 19);
        assert_eq!(round_to_integer(-2.4), -2);
    }

    #[test]
    fn halfway_course_handicap_uses_even_rounding() {
        // 0.5 and 1.5 strokes exactly.
        assert_eq!(course_handicap_18(0.0, 113, 72.5, 72), 0);
        assert_eq!(course_handicap_18(0.0, 113, 73.5, 72), 2);
        assert_eq!(course_handicap_18(0.0, 113, 71.5, 72), 0);
    }

    #[test]
    fn eighteen_hole_scenario() {
        assert_eq!(course_handicap_18(18.0, 125, 71.0, 72), 19);
    }

    #[test]
    fn nine_hole_is_eighteen_with_half_index() {
        for &(index, slope, cr, par) in &[
            (18.0, 125, 71.0, 72),
            (36.0, 140, 35.4, 36),
            (-3.2, 98, 70.1, 70),
            (54.0, 155, 84.9, 78),
            (7.3, 55, 55.0, 60),
        ] {
            assert_eq!(
                course_handicap_9(index, slope, cr, par),
                course_handicap_18(index / 2.0, slope, cr, par)
            );
        }
        assert_eq!(course_handicap_9(18.0, 125, 71.0, 72), 9);
    }

    #[test]
    fn plus_handicap_can_go_negative() {
        assert_eq!(course_handicap_18(-5.0, 130, 71.0, 72), -7);
    }

    #[test]
    fn singles_scenario() {
        let ch1 = course_handicap_18(10.0, 130, 72.1, 72);
        let ch2 = course_handicap_18(20.5, 130, 72.1, 72);
        assert_eq!((ch1, ch2), (12, 24));
        assert_eq!(singles_allowance(ch1, ch2), 8);
        assert_eq!(Attribution::between(ch1, ch2), Attribution::Second);
    }

    #[test]
    fn foursomes_scenario() {
        let team1 = team_handicap_index(8.0, 15.0);
        let team2 = team_handicap_index(22.0, 12.0);
        assert!((team1 - 10.8).abs() < 1e-9);
        assert!((team2 - 16.0).abs() < 1e-9);

        let ch1 = course_handicap_18(team1, 128, 71.5, 72);
        let ch2 = course_handicap_18(team2, 128, 71.5, 72);
        assert_eq!((ch1, ch2), (12, 18));
        assert_eq!(foursomes_allowance(ch1, ch2), 6);
        assert_eq!(Attribution::between(ch1, ch2), Attribution::Second);
    }

    #[test]
    fn team_index_ignores_partner_order() {
        for &(a, b) in &[(8.0, 15.0), (-2.0, 30.4), (12.5, 12.5), (54.0, -5.0)] {
            assert_eq!(team_handicap_index(a, b), team_handicap_index(b, a));
        }
    }

    #[test]
    fn singles_allowance_is_symmetric() {
        for a in -8..40 {
            for b in [-3, 0, 7, 19, 33] {
                assert_eq!(singles_allowance(a, b), singles_allowance(b, a));
            }
        }
        assert_eq!(singles_allowance(10, 11), 1);
        assert_eq!(singles_allowance(10, 14), 3);
    }

    #[test]
    fn attribution_is_antisymmetric() {
        for a in -5..30 {
            for b in -5..30 {
                let forward = Attribution::between(a, b);
                let backward = Attribution::between(b, a);
                assert_eq!(forward == Attribution::First, backward == Attribution::Second);
                assert_eq!(forward == Attribution::None, a == b);
            }
        }
    }

    #[test]
    fn describes_receiver() {
        assert_eq!(
            Attribution::Second.describe("Player 1", "Player 2", 8),
            "Player 2 (higher course handicap) receives 8 strokes from Player 1."
        );
        assert_eq!(
            Attribution::First.describe("Team 1", "Team 2", 1),
            "Team 1 (higher course handicap) receives 1 stroke from Team 2."
        );
        assert!(Attribution::None
            .describe("Team 1", "Team 2", 0)
            .ends_with("No strokes are given."));
    }
}
