//! Exhaustive search over dial configurations.
//!
//! The per-dial rotation counts form a mixed-radix odometer: the bottom
//! dial is the most significant digit and the top dial the least
//! significant, so the top dial spins fastest. The goal is checked once
//! per configuration, starting configuration first, which visits all
//! `COLUMNS^DIALS` states exactly once before the search gives up.
//!
//! No pruning, no backtracking, no randomness: the visit order is fixed,
//! so identical starting states always produce identical reports.

use crate::dials::{DialStack, Goal};

/// Terminal state of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A configuration met the goal; the stack is left in it.
    Solved,
    /// Every configuration was checked; the stack is back at its start.
    Exhausted,
}

/// What a finished search reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport<const DIALS: usize> {
    pub outcome: Outcome,
    /// Rotations applied to each dial since that dial last completed a
    /// full revolution, bottom dial first. All zeros after exhaustion,
    /// because the final carry resets every digit.
    pub rotations: [usize; DIALS],
    /// Number of configurations checked.
    pub checks: u64,
    /// Total number of distinct configurations, `COLUMNS^DIALS`.
    pub space: u64,
}

/// Number of distinct configurations of a stack: `columns^dials`.
pub const fn configuration_count(dials: usize, columns: usize) -> u64 {
    (columns as u64).pow(dials as u32)
}

/// Turns the dials through every configuration in a fixed order until the
/// goal holds or the space is exhausted.
///
/// The stack is borrowed for the whole search. On success it is left in
/// the winning configuration; on exhaustion the final carry has wrapped
/// it back to the configuration it started in.
pub fn solve<const DIALS: usize, const ROWS: usize, const COLUMNS: usize>(
    stack: &mut DialStack<DIALS, ROWS, COLUMNS>,
    goal: Goal,
) -> SearchReport<DIALS> {
    let mut rotations = [0usize; DIALS];
    let mut checks = 0u64;
    let space = configuration_count(DIALS, COLUMNS);

    loop {
        checks += 1;
        if stack.is_solved(goal) {
            return SearchReport {
                outcome: Outcome::Solved,
                rotations,
                checks,
                space,
            };
        }
        if !advance(stack, &mut rotations) {
            return SearchReport {
                outcome: Outcome::Exhausted,
                rotations,
                checks,
                space,
            };
        }
    }
}

/// Advances the odometer one step: turn the top dial, carrying a rotation
/// into the dial beneath whenever a dial completes a full revolution.
///
/// Returns `false` once the carry passes the bottom dial, i.e. the stack
/// has wrapped back to its starting configuration.
fn advance<const DIALS: usize, const ROWS: usize, const COLUMNS: usize>(
    stack: &mut DialStack<DIALS, ROWS, COLUMNS>,
    rotations: &mut [usize; DIALS],
) -> bool {
    let mut dial = DIALS - 1;
    loop {
        stack.rotate_dial(dial);
        rotations[dial] += 1;
        if rotations[dial] < COLUMNS {
            return true;
        }
        rotations[dial] = 0;
        if dial == 0 {
            return false;
        }
        dial -= 1;
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::dials::GapPolicy;

    #[test]
    fn test_already_solved_stack_reports_zero_rotations() {
        // a ring of zeros summing to a target of zero needs no turning
        let mut stack = DialStack::new([[[Some(0); 12]]]);
        let report = solve(&mut stack, Goal::new(0));
        assert_eq!(report.outcome, Outcome::Solved);
        assert_eq!(report.rotations, [0]);
        assert_eq!(report.checks, 1);
    }

    #[test]
    fn test_finds_the_first_matching_configuration() {
        // turning the top dial once uncovers the bottom 5 and covers the 3
        let mut stack = DialStack::new([[[Some(5), Some(3)]], [[Some(5), None]]]);
        let report = solve(&mut stack, Goal::new(5));
        assert_eq!(report.outcome, Outcome::Solved);
        assert_eq!(report.rotations, [0, 1]);
        assert_eq!(report.checks, 2);
        // the stack is left in the winning configuration
        assert!(stack.is_solved(Goal::new(5)));
    }

    #[test]
    fn test_exhausts_an_unsolvable_stack() {
        let mut stack = DialStack::new([[[Some(1), Some(2)]], [[None, None]]]);
        let initial = stack.clone();
        let report = solve(&mut stack, Goal::new(9));
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert_eq!(report.rotations, [0, 0]);
        assert_eq!(report.checks, 4);
        assert_eq!(report.space, 4);
        assert_eq!(stack, initial, "exhaustion must wrap back to the start");
    }

    #[test]
    fn test_reject_gaps_drives_a_gap_reliant_stack_to_exhaustion() {
        let mut stack = DialStack::new([[[Some(4), Some(4)], [None, None]]]);

        let zero_fill = solve(&mut stack.clone(), Goal::new(4));
        assert_eq!(zero_fill.outcome, Outcome::Solved);

        let strict = Goal {
            target: 4,
            gaps: GapPolicy::Reject,
        };
        let report = solve(&mut stack, strict);
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert_eq!(report.checks, 2);
    }

    #[test]
    fn test_odometer_visits_every_configuration_once() {
        let mut stack =
            DialStack::new([[[Some(1), Some(2), Some(3)]], [[Some(4), None, None]]]);
        let initial = stack.clone();
        let mut rotations = [0usize; 2];

        let mut seen = FxHashSet::default();
        seen.insert(rotations);
        while advance(&mut stack, &mut rotations) {
            assert!(seen.insert(rotations), "odometer revisited {rotations:?}");
        }

        assert_eq!(seen.len() as u64, configuration_count(2, 3));
        assert_eq!(rotations, [0, 0]);
        assert_eq!(stack, initial);
    }

    #[test]
    fn test_search_is_deterministic() {
        let build =
            || DialStack::new([[[Some(1), Some(2), Some(3)]], [[Some(4), None, None]]]);
        let mut first = build();
        let mut second = build();
        let report_a = solve(&mut first, Goal::new(6));
        let report_b = solve(&mut second, Goal::new(6));
        assert_eq!(report_a, report_b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_configuration_count() {
        assert_eq!(configuration_count(5, 12), 248_832);
        assert_eq!(configuration_count(1, 1), 1);
    }
}
