//! Timetable solver.
//!
//! Produces a (possibly partial) [`Schedule`] from an entity snapshot and
//! a budget, using one of two interchangeable strategies:
//!
//! - [`Strategy::Backtracking`] — exhaustive search with undo, bounded by
//!   an iteration ceiling. Reference semantics when completeness matters.
//! - [`Strategy::Greedy`] — single-pass best-effort, bounded by a
//!   wall-clock limit. Production mode for large inputs.
//!
//! Courses with no qualified instructor anywhere are excluded from the
//! solving pool up front and reported as unschedulable — an input
//! property, not a search failure. The solver is the only component with
//! search state; it never mutates the snapshot.
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use timetable::entities::Entities;
//! use timetable::solver::{SolveRequest, Strategy};
//!
//! # fn demo(entities: &Entities) -> Result<(), timetable::error::SolveError> {
//! let result = SolveRequest::new(entities)
//!     .with_strategy(Strategy::greedy(Duration::from_secs(60)))
//!     .with_seed(42)
//!     .solve()?;
//! println!("{}/{} scheduled", result.stats.courses_scheduled, result.stats.courses_considered);
//! # Ok(())
//! # }
//! ```

mod backtracking;
mod domain;
mod greedy;
mod stats;

pub use domain::domain_for;
pub use stats::{SolveOutcome, SolveResult, SolveStats};

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::entities::Entities;
use crate::error::SolveError;
use crate::models::Course;

/// Default iteration ceiling for [`Strategy::Backtracking`].
pub const DEFAULT_MAX_ITERATIONS: u64 = 50_000;

/// Default bounded prefix of each course's shuffled domain.
pub const DEFAULT_DOMAIN_TRIAL_LIMIT: usize = 100;

/// Pool ordering policy for the greedy strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseOrdering {
    /// Fewest qualified instructors first (minimum-remaining-values).
    MostConstrainedFirst,
    /// Most qualified instructors first — the throughput heuristic the
    /// production system shipped with, trading optimality for speed.
    #[default]
    LeastConstrainedFirst,
    /// Take the pool as given.
    InputOrder,
}

/// Search strategy plus its budget.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Exhaustive backtracking (Strategy A).
    Backtracking {
        /// Search-node ceiling; exceeding it ends the solve with
        /// [`SolveOutcome::BudgetExhausted`].
        max_iterations: u64,
        /// Optional target course count; stop once reached.
        max_courses: Option<usize>,
        /// Candidates tried per course before backtracking past it.
        domain_trial_limit: usize,
    },
    /// Greedy best-effort (Strategy B).
    Greedy {
        /// Wall-clock budget, checked between courses.
        time_limit: Duration,
        /// Pool ordering policy.
        ordering: CourseOrdering,
        /// Shuffle each domain before scanning it.
        shuffle: bool,
    },
}

impl Strategy {
    /// Backtracking with default budgets.
    pub fn backtracking() -> Self {
        Strategy::Backtracking {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_courses: None,
            domain_trial_limit: DEFAULT_DOMAIN_TRIAL_LIMIT,
        }
    }

    /// Greedy with the default ordering and no shuffling (deterministic).
    pub fn greedy(time_limit: Duration) -> Self {
        Strategy::Greedy {
            time_limit,
            ordering: CourseOrdering::default(),
            shuffle: false,
        }
    }
}

/// Input container for a solve, borrowed from an entity snapshot.
#[derive(Debug, Clone)]
pub struct SolveRequest<'a> {
    entities: &'a Entities,
    strategy: Strategy,
    seed: Option<u64>,
}

impl<'a> SolveRequest<'a> {
    /// Creates a request with the default backtracking strategy.
    pub fn new(entities: &'a Entities) -> Self {
        Self {
            entities,
            strategy: Strategy::backtracking(),
            seed: None,
        }
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fixes the RNG seed so identical inputs reproduce identical
    /// schedules. Without a seed, each solve draws a fresh one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs the solve.
    pub fn solve(&self) -> Result<SolveResult, SolveError> {
        solve(self)
    }
}

/// Solves a timetabling problem.
///
/// # Errors
/// Configuration errors only: empty rooms, empty timeslots, or an empty
/// pool once unschedulable courses are excluded. Courses the search cannot
/// place are never errors — they are listed in
/// [`SolveResult::unscheduled`].
pub fn solve(request: &SolveRequest<'_>) -> Result<SolveResult, SolveError> {
    let entities = request.entities;
    let started = Instant::now();

    if entities.rooms().is_empty() {
        return Err(SolveError::EmptyRooms);
    }
    if entities.timeslots().is_empty() {
        return Err(SolveError::EmptyTimeslots);
    }

    // Split the catalog into the solving pool and the unschedulable rest.
    let mut pool: Vec<&Course> = Vec::new();
    let mut unschedulable: Vec<String> = Vec::new();
    for course in entities.courses() {
        if entities.qualified_instructors(&course.id).is_empty() {
            unschedulable.push(course.id.clone());
        } else {
            pool.push(course);
        }
    }
    if pool.is_empty() {
        return Err(SolveError::EmptyPool);
    }

    info!(
        "solving {} courses ({} unschedulable excluded), {} rooms, {} timeslots",
        pool.len(),
        unschedulable.len(),
        entities.rooms().len(),
        entities.timeslots().len()
    );

    let mut stats = SolveStats {
        courses_considered: pool.len(),
        ..SolveStats::default()
    };
    let mut rng = SmallRng::seed_from_u64(request.seed.unwrap_or_else(rand::random));

    let (schedule, outcome) = match &request.strategy {
        Strategy::Backtracking {
            max_iterations,
            max_courses,
            domain_trial_limit,
        } => backtracking::run(
            &pool,
            entities,
            &backtracking::BacktrackConfig {
                max_iterations: *max_iterations,
                max_courses: *max_courses,
                domain_trial_limit: *domain_trial_limit,
            },
            &mut rng,
            &mut stats,
        ),
        Strategy::Greedy {
            time_limit,
            ordering,
            shuffle,
        } => greedy::run(
            &pool,
            entities,
            &greedy::GreedyConfig {
                time_limit: *time_limit,
                ordering: *ordering,
                shuffle: *shuffle,
            },
            &mut rng,
            &mut stats,
            started,
        ),
    };

    stats.courses_scheduled = schedule.len();
    stats.elapsed = started.elapsed();

    let placed: HashSet<&str> = schedule
        .assignments
        .iter()
        .map(|a| a.course_id.as_str())
        .collect();
    let unscheduled: Vec<String> = pool
        .iter()
        .filter(|c| !placed.contains(c.id.as_str()))
        .map(|c| c.id.clone())
        .collect();

    info!(
        "solve finished: {:?}, {}/{} scheduled in {:?} ({} iterations, {} backtracks, {} checks)",
        outcome,
        stats.courses_scheduled,
        stats.courses_considered,
        stats.elapsed,
        stats.iterations,
        stats.backtracks,
        stats.constraint_checks
    );

    Ok(SolveResult {
        schedule,
        outcome,
        stats,
        unscheduled,
        unschedulable,
    })
}
