//! Error codes for the scoring backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Invalid match ID provided
    InvalidMatchId,
    /// Structurally malformed delivery
    ValidationError,
    /// General bad request error
    BadRequest,

    // Scoring eligibility (state-machine rules)
    /// Bowler changed mid-over
    WrongBowlerMidOver,
    /// Batter on crease is already out
    BatterAlreadyOut,
    /// Incoming batter fails the yet-to-bat / XI / out-set rules
    NewBatterNotEligible,
    /// New bowler required at the start of an over
    NewBowlerRequired,
    /// Same bowler cannot bowl consecutive overs
    ConsecutiveOverBowler,
    /// Run-out fields absent or not striker/non-striker
    InvalidRunOut,
    /// General eligibility violation
    EligibilityError,
    /// Delivery submitted against a completed match or closed innings
    InvalidTransition,

    // Resource not found
    /// No MatchState exists for the match
    MatchStateNotFound,
    /// General not found error
    NotFound,

    // System errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidMatchId => "INVALID_MATCH_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::WrongBowlerMidOver => "WRONG_BOWLER_MID_OVER",
            Self::BatterAlreadyOut => "BATTER_ALREADY_OUT",
            Self::NewBatterNotEligible => "NEW_BATTER_NOT_ELIGIBLE",
            Self::NewBowlerRequired => "NEW_BOWLER_REQUIRED",
            Self::ConsecutiveOverBowler => "CONSECUTIVE_OVER_BOWLER",
            Self::InvalidRunOut => "INVALID_RUN_OUT",
            Self::EligibilityError => "ELIGIBILITY_ERROR",
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::MatchStateNotFound => "MATCH_STATE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
