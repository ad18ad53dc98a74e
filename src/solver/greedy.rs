//! Greedy best-effort search (Strategy B).
//!
//! # Algorithm
//!
//! 1. Order the pool by the configured [`CourseOrdering`] policy.
//! 2. For each course, scan its domain once (optionally shuffled for
//!    tie-breaking) and commit the first consistent tuple.
//! 3. A course with no consistent tuple is left unscheduled; the solve
//!    continues — there is no backtracking across courses.
//! 4. The wall-clock budget is checked between courses; once exceeded,
//!    remaining courses are left unscheduled.
//!
//! This strategy never fails outright: it always returns a (possibly
//! empty) schedule. With a fixed ordering and shuffling disabled the pass
//! is fully deterministic, so growing the time budget can only grow the
//! set of courses that get a scan.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::constraints::{is_consistent, Occupancy};
use crate::entities::Entities;
use crate::models::{Assignment, Course, Schedule};

use super::domain::domain_for;
use super::{CourseOrdering, SolveOutcome, SolveStats};

/// Strategy B tuning knobs.
#[derive(Debug, Clone)]
pub(crate) struct GreedyConfig {
    /// Wall-clock budget, checked between courses.
    pub time_limit: Duration,
    /// Pool ordering policy.
    pub ordering: CourseOrdering,
    /// Shuffle each domain before the scan (tie-breaking variety).
    pub shuffle: bool,
}

pub(crate) fn run(
    pool: &[&Course],
    entities: &Entities,
    config: &GreedyConfig,
    rng: &mut SmallRng,
    stats: &mut SolveStats,
    started: Instant,
) -> (Schedule, SolveOutcome) {
    let mut schedule = Schedule::new();
    let mut occupancy = Occupancy::new();
    let mut timed_out = false;
    let mut unplaced = 0usize;

    for course in order_pool(pool, entities, config.ordering) {
        if started.elapsed() >= config.time_limit {
            debug!(
                "time budget {:?} exhausted with {} courses placed",
                config.time_limit,
                schedule.len()
            );
            timed_out = true;
            break;
        }
        stats.iterations += 1;

        let mut domain = domain_for(course, entities);
        if config.shuffle {
            domain.shuffle(rng);
        }

        let mut placed = false;
        for candidate in &domain {
            // Domain candidates always come from the snapshot.
            let Some(instructor) = entities.instructor(&candidate.instructor_id) else {
                continue;
            };

            if is_consistent(
                course,
                candidate,
                instructor,
                entities.timeslots(),
                &occupancy,
                stats,
            ) {
                occupancy.place(&candidate.instructor_id, &candidate.room_id, candidate.slot);
                schedule.push(Assignment::new(
                    &course.id,
                    &candidate.instructor_id,
                    &candidate.room_id,
                    candidate.slot,
                ));
                placed = true;
                break;
            }
        }

        if !placed {
            debug!("no consistent tuple for course '{}'", course.id);
            unplaced += 1;
        }
    }

    let outcome = if timed_out {
        SolveOutcome::BudgetExhausted
    } else if unplaced == 0 {
        SolveOutcome::Complete
    } else {
        SolveOutcome::Partial
    };

    (schedule, outcome)
}

/// Applies the ordering policy. Sorts are stable, so ties keep input order.
fn order_pool<'a>(
    pool: &[&'a Course],
    entities: &Entities,
    ordering: CourseOrdering,
) -> Vec<&'a Course> {
    let mut ordered: Vec<&Course> = pool.to_vec();
    match ordering {
        CourseOrdering::InputOrder => {}
        CourseOrdering::MostConstrainedFirst => {
            ordered.sort_by_key(|c| entities.qualified_instructors(&c.id).len());
        }
        CourseOrdering::LeastConstrainedFirst => {
            ordered.sort_by_key(|c| std::cmp::Reverse(entities.qualified_instructors(&c.id).len()));
        }
    }
    ordered
}
