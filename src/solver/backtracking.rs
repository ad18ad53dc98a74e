//! Exhaustive backtracking search (Strategy A).
//!
//! # Algorithm
//!
//! 1. Variable ordering: first unassigned course in pool order.
//! 2. Value ordering: the course's domain is shuffled with the solve's
//!    seeded RNG, then only a bounded prefix is tried to cap the branching
//!    factor.
//! 3. Assign, recurse, and on failure undo (counting a backtrack).
//! 4. The iteration ceiling is checked at the start of every course's
//!    domain scan; hitting it ends the search keeping the partial schedule
//!    and is reported as [`SolveOutcome::BudgetExhausted`], never as
//!    success.
//!
//! All search state lives in an explicit [`SearchState`] threaded through
//! the recursion; nothing is captured in shared mutable storage, so
//! independent randomized attempts can safely run side by side.
//!
//! When the search space is exhausted without a full solution, the deepest
//! partial schedule reached is returned rather than the unwound empty one,
//! so an infeasible pool still yields its placeable subset.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence", Ch. 6.3: Backtracking Search

use std::collections::HashSet;

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::constraints::{is_consistent, Occupancy};
use crate::entities::Entities;
use crate::models::{Assignment, Course, Schedule};

use super::domain::domain_for;
use super::{SolveOutcome, SolveStats};

/// Strategy A tuning knobs.
#[derive(Debug, Clone)]
pub(crate) struct BacktrackConfig {
    /// Search-node ceiling; hitting it yields `BudgetExhausted`.
    pub max_iterations: u64,
    /// Optional target: stop once this many courses are placed.
    pub max_courses: Option<usize>,
    /// Candidates tried per course before treating it as a dead end.
    pub domain_trial_limit: usize,
}

/// Explicit search state, threaded through every recursive call.
struct SearchState {
    schedule: Schedule,
    occupancy: Occupancy,
    assigned: HashSet<String>,
    /// Deepest schedule seen, kept for exhausted searches.
    best: Schedule,
}

enum Signal {
    /// Termination condition met; keep the schedule as-is.
    Solved,
    /// Every candidate below this node failed; caller must undo.
    Exhausted,
    /// Iteration ceiling hit; unwind without undoing.
    BudgetHit,
}

pub(crate) fn run(
    pool: &[&Course],
    entities: &Entities,
    config: &BacktrackConfig,
    rng: &mut SmallRng,
    stats: &mut SolveStats,
) -> (Schedule, SolveOutcome) {
    let mut state = SearchState {
        schedule: Schedule::new(),
        occupancy: Occupancy::new(),
        assigned: HashSet::new(),
        best: Schedule::new(),
    };

    let signal = search(pool, entities, config, &mut state, rng, stats);

    match signal {
        Signal::Solved => {
            let outcome = if state.schedule.len() >= pool.len() {
                SolveOutcome::Complete
            } else {
                // max_courses target reached below the pool size.
                SolveOutcome::Partial
            };
            (state.schedule, outcome)
        }
        Signal::Exhausted => (state.best, SolveOutcome::Partial),
        Signal::BudgetHit => {
            let schedule = if state.best.len() > state.schedule.len() {
                state.best
            } else {
                state.schedule
            };
            (schedule, SolveOutcome::BudgetExhausted)
        }
    }
}

fn search(
    pool: &[&Course],
    entities: &Entities,
    config: &BacktrackConfig,
    state: &mut SearchState,
    rng: &mut SmallRng,
    stats: &mut SolveStats,
) -> Signal {
    stats.iterations += 1;

    if let Some(cap) = config.max_courses {
        if state.assigned.len() >= cap {
            return Signal::Solved;
        }
    }
    if state.assigned.len() == pool.len() {
        return Signal::Solved;
    }
    if stats.iterations > config.max_iterations {
        debug!(
            "iteration ceiling {} hit with {} courses placed",
            config.max_iterations,
            state.schedule.len()
        );
        return Signal::BudgetHit;
    }

    // First unassigned course in pool order.
    let Some(course) = pool.iter().find(|c| !state.assigned.contains(&c.id)) else {
        return Signal::Solved;
    };

    let mut domain = domain_for(course, entities);
    domain.shuffle(rng);
    domain.truncate(config.domain_trial_limit);

    for candidate in &domain {
        // Domain candidates always come from the snapshot.
        let Some(instructor) = entities.instructor(&candidate.instructor_id) else {
            continue;
        };

        if !is_consistent(
            course,
            candidate,
            instructor,
            entities.timeslots(),
            &state.occupancy,
            stats,
        ) {
            continue;
        }

        state.schedule.push(Assignment::new(
            &course.id,
            &candidate.instructor_id,
            &candidate.room_id,
            candidate.slot,
        ));
        state
            .occupancy
            .place(&candidate.instructor_id, &candidate.room_id, candidate.slot);
        state.assigned.insert(course.id.clone());
        if state.schedule.len() > state.best.len() {
            state.best = state.schedule.clone();
        }

        match search(pool, entities, config, state, rng, stats) {
            Signal::Solved => return Signal::Solved,
            Signal::BudgetHit => return Signal::BudgetHit,
            Signal::Exhausted => {
                state.schedule.pop();
                state
                    .occupancy
                    .remove(&candidate.instructor_id, &candidate.room_id, candidate.slot);
                state.assigned.remove(&course.id);
                stats.backtracks += 1;
            }
        }
    }

    Signal::Exhausted
}
