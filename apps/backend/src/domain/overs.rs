//! Over completion and the cricket overs encoding.
//!
//! Overs are written as `wholeOvers.legalBalls` with the tenths digit
//! holding the legal-ball count (0-5): 19.4 means 19 overs and 4 balls,
//! not nineteen-point-four overs. This is scoreboard convention and must
//! not be "fixed" to a decimal fraction.

use crate::domain::state::MatchState;

/// Legal-ball count to overs notation: 23 balls -> 3.5.
pub fn overs_from_balls(balls: i32) -> f64 {
    let full_overs = balls / 6;
    let remaining = balls % 6;
    f64::from(full_overs) + f64::from(remaining) / 10.0
}

/// Advance an overs value by one legal ball: 18.5 -> 19.0.
pub fn increment_overs(overs: f64) -> f64 {
    let full_overs = overs.trunc() as i32;
    let mut balls = ((overs - overs.trunc()) * 10.0).round() as i32;

    balls += 1;
    if balls == 6 {
        return f64::from(full_overs + 1);
    }
    f64::from(full_overs) + f64::from(balls) / 10.0
}

/// Flag over completion on the 6th legal ball of an over.
///
/// On completion the current bowler is recorded as the last-over bowler
/// and cleared from MatchState, forcing the new-bowler check on the next
/// delivery. Illegal deliveries never complete an over.
pub fn complete_over_if_needed(state: &mut MatchState, legal: bool, ball: i16) -> bool {
    if !legal {
        return false;
    }

    if ball == 6 {
        state.last_over_bowler_id = state.current_bowler_id.take();
        true
    } else {
        false
    }
}
