//! Text rendering of dial stacks and search reports.
//!
//! Everything here is a read-only consumer of the stack's accessors: the
//! renderers build strings and never touch puzzle state. Cells print as
//! width-3 right-aligned numbers with a trailing separator space, blank
//! where a position is a window, and every line is trimmed on the right.

use crate::dials::{Cell, DialStack};
use crate::solver::{Outcome, SearchReport};

/// Width of one rendered cell including its separator space.
const CELL_WIDTH: usize = 4;

/// Appends one cell, blank for a window.
fn push_cell(line: &mut String, cell: Cell) {
    match cell {
        Some(value) => line.push_str(&format!("{value:>3} ")),
        None => line.push_str("    "),
    }
}

/// Appends `line` with its trailing whitespace removed.
fn push_trimmed(output: &mut String, line: &str) {
    output.push_str(line.trim_end());
    output.push('\n');
}

/// Renders the stack as seen from above: the visible value at every
/// position row by row, a rule, then the column sums.
pub fn render_top_view<const DIALS: usize, const ROWS: usize, const COLUMNS: usize>(
    stack: &DialStack<DIALS, ROWS, COLUMNS>,
) -> String {
    let mut output = String::new();

    for row in 0..ROWS {
        let mut line = String::new();
        for column in 0..COLUMNS {
            push_cell(&mut line, stack.visible_value(row, column));
        }
        push_trimmed(&mut output, &line);
    }

    output.push_str(&"=".repeat(CELL_WIDTH * COLUMNS));
    output.push('\n');

    let mut sums = String::new();
    for column in 0..COLUMNS {
        sums.push_str(&format!("{:>3} ", stack.column_sum(column)));
    }
    push_trimmed(&mut output, &sums);

    output
}

/// Renders every dial's engraved cells, topmost dial first, with a blank
/// line after each dial.
pub fn render_dials<const DIALS: usize, const ROWS: usize, const COLUMNS: usize>(
    stack: &DialStack<DIALS, ROWS, COLUMNS>,
) -> String {
    let mut output = String::new();

    for dial in (0..DIALS).rev() {
        for row in stack.dial(dial) {
            let mut line = String::new();
            for &cell in row {
                push_cell(&mut line, cell);
            }
            push_trimmed(&mut output, &line);
        }
        output.push('\n');
    }

    output
}

/// Renders a finished search: the status line, the rotation count of each
/// dial with the topmost dial listed first as `Dial 1`, and how much of
/// the configuration space was covered.
pub fn render_report<const DIALS: usize>(report: &SearchReport<DIALS>) -> String {
    let mut output = String::new();

    output.push_str(match report.outcome {
        Outcome::Solved => "Puzzle solved!\n",
        Outcome::Exhausted => "Puzzle not solved.\n",
    });

    for (position, dial) in (0..DIALS).rev().enumerate() {
        output.push_str(&format!(
            "Dial {}: {} rotations\n",
            position + 1,
            report.rotations[dial]
        ));
    }

    output.push_str(&format!(
        "Checked {} of {} configurations\n",
        report.checks, report.space
    ));

    output
}
