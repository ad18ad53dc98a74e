//! Search telemetry and solve results.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::Schedule;

/// Counters accumulated during a solve.
///
/// Telemetry only — nothing here affects search decisions except the
/// iteration count, which the backtracking strategy compares against its
/// ceiling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Courses in the solving pool (after unschedulable exclusion).
    pub courses_considered: usize,
    /// Courses placed in the final schedule.
    pub courses_scheduled: usize,
    /// Search-node visits (backtracking) or course scans (greedy).
    pub iterations: u64,
    /// Undo operations performed by the backtracking strategy.
    pub backtracks: u64,
    /// Constraint predicate evaluations.
    pub constraint_checks: u64,
    /// Wall-clock time spent solving.
    pub elapsed: Duration,
}

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// Every course in the pool was placed.
    Complete,
    /// Search finished within budget but some courses could not be placed.
    Partial,
    /// The iteration ceiling or time limit cut the search short. Never
    /// conflated with [`Complete`](Self::Complete): callers decide how to
    /// treat a truncated result.
    BudgetExhausted,
}

/// The product of a solve: the schedule plus everything needed to report on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResult {
    /// The (possibly partial) schedule.
    pub schedule: Schedule,
    /// How the solve ended.
    pub outcome: SolveOutcome,
    /// Search telemetry.
    pub stats: SolveStats,
    /// Pool courses the search could not place.
    pub unscheduled: Vec<String>,
    /// Courses excluded before search for having no qualified instructor.
    pub unschedulable: Vec<String>,
}
