//! Domain-level error type used across the scoring engine and services.
//!
//! This error type is HTTP- and DB-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Structural problems with a submitted delivery. Always recoverable by
/// resubmitting a corrected delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidInnings,
    StrikerNotSet,
    NonStrikerNotSet,
    BowlerNotSet,
    NegativeRuns,
    NegativeExtraRuns,
    MissingDismissal,
    InvalidBoundaryRuns,
    BoundaryRunsWithoutBoundary,
    OverthrowSix,
    NewBatterWithoutWicket,
    Other(String),
}

/// State-machine rule violations: the delivery is well-formed but the
/// named player may not do this right now.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EligibilityKind {
    WrongBowlerMidOver,
    SameBatterBothEnds,
    BatterNotInXi,
    BatterAlreadyOut,
    NewBowlerRequired,
    ConsecutiveOverBowler,
    NewBatterRequired,
    NewBatterNotInXi,
    NewBatterNotYetToBat,
    NewBatterAlreadyOut,
    NewBatterIsOutBatter,
    RunOutDetailsMissing,
    RunOutBatterNotOnCrease,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Structurally malformed or logically impossible delivery
    Validation(ValidationKind, String),
    /// Violates a state-machine rule (wrong bowler, batter already out, ...)
    Eligibility(EligibilityKind, String),
    /// No MatchState exists for the given match id
    StateNotFound(i64),
    /// Delivery submitted against a completed match or closed innings
    InvalidTransition(String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Eligibility(kind, d) => write!(f, "eligibility {kind:?}: {d}"),
            DomainError::StateNotFound(match_id) => {
                write!(f, "no match state for match {match_id}")
            }
            DomainError::InvalidTransition(d) => write!(f, "invalid transition: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn eligibility(kind: EligibilityKind, detail: impl Into<String>) -> Self {
        Self::Eligibility(kind, detail.into())
    }
    pub fn state_not_found(match_id: i64) -> Self {
        Self::StateNotFound(match_id)
    }
    pub fn invalid_transition(detail: impl Into<String>) -> Self {
        Self::InvalidTransition(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
