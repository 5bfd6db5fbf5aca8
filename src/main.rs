//! Grecian Computer Solver
//!
//! Solves the Grecian Computer dial puzzle: five engraved dials stacked on
//! a common axle, where the upper dials hide parts of the lower ones through
//! cut-out windows. The solver turns the dials through every combination of
//! positions until each of the twelve columns of visible numbers sums to the
//! target.

use clap::{Parser, Subcommand};

use grecian::puzzles::{GRECIAN, TARGET};
use grecian::{display, solver, GapPolicy, Goal};

/// Solves the Grecian Computer stacked-dial puzzle.
#[derive(Parser)]
#[command(name = "grecian")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Search every dial configuration for one where all columns hit the target.
    Solve {
        /// Sum every column must reach.
        #[arg(long, default_value_t = TARGET)]
        target: i32,
        /// Treat columns with an uncovered position as unsolvable instead of
        /// counting the hole as zero.
        #[arg(long)]
        reject_gaps: bool,
    },
    /// Print the puzzle as seen from above in its starting position.
    Show,
    /// Print the engraved numbers of every dial, topmost first.
    Dials,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve {
            target,
            reject_gaps,
        }) => run_solve(target, reject_gaps),
        Some(Command::Show) => print!("{}", display::render_top_view(&GRECIAN)),
        Some(Command::Dials) => print!("{}", display::render_dials(&GRECIAN)),
        None => run_solve(TARGET, false),
    }
}

/// Runs the exhaustive search and prints the report followed by the final
/// top view of the dials.
fn run_solve(target: i32, reject_gaps: bool) {
    let mut goal = Goal::new(target);
    if reject_gaps {
        goal.gaps = GapPolicy::Reject;
    }

    let mut stack = GRECIAN;
    let report = solver::solve(&mut stack, goal);

    print!("{}", display::render_report(&report));
    println!();
    print!("{}", display::render_top_view(&stack));
}

#[cfg(test)]
mod tests {
    use super::*;
    use grecian::solver::Outcome;

    #[test]
    fn test_reference_start_snapshot() {
        insta::assert_snapshot!(display::render_top_view(&GRECIAN));
    }

    #[test]
    fn test_reference_search_snapshot() {
        let mut stack = GRECIAN;
        let report = solver::solve(&mut stack, Goal::new(TARGET));

        let mut output = display::render_report(&report);
        output.push('\n');
        output.push_str(&display::render_top_view(&stack));

        insta::assert_snapshot!(output);
    }

    #[test]
    fn test_reference_solution() {
        let mut stack = GRECIAN;
        let report = solver::solve(&mut stack, Goal::new(TARGET));

        assert_eq!(report.outcome, Outcome::Solved, "reference puzzle has a solution");
        assert_eq!(report.rotations, [0, 8, 4, 8, 2]);
        assert_eq!(report.checks, 14_499);
        for column in 0..12 {
            assert_eq!(stack.column_sum(column), TARGET, "column {} sum", column);
        }
    }
}
