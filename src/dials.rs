//! Dial stack state and occlusion reads.
//!
//! The puzzle is a spindle of stacked discs. Each disc carries a partial
//! ring of values laid out in radial rows and columns; where a disc has no
//! value it is cut open, so the discs beneath stay visible. Looking from
//! above, the value seen at a position belongs to the topmost disc that is
//! not cut out there.

/// One cell of a dial: an engraved value, or `None` for a cut-out window.
pub type Cell = Option<i32>;

/// How a column sum treats a position left uncovered by every dial.
///
/// A well-formed stack has a fully engraved bottom dial and never exposes
/// such a position, so the policy only matters for degenerate data. Making
/// it explicit keeps a malformed stack from being declared solved by
/// accident.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GapPolicy {
    /// An uncovered position contributes nothing to its column sum.
    #[default]
    ZeroFill,
    /// A column with an uncovered position can never match the target.
    Reject,
}

/// Winning condition: the sum every column must reach, and the gap rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Goal {
    /// Column sum that counts as solved.
    pub target: i32,
    /// Treatment of positions no dial covers.
    pub gaps: GapPolicy,
}

impl Goal {
    /// Goal with the default zero-fill gap handling.
    pub const fn new(target: i32) -> Self {
        Self {
            target,
            gaps: GapPolicy::ZeroFill,
        }
    }
}

/// Puzzle state with compile-time dimensions.
///
/// - `DIALS`: number of stacked discs; index 0 is the bottommost (largest)
///   disc, index `DIALS - 1` the topmost (smallest)
/// - `ROWS`: value rings on each disc
/// - `COLUMNS`: radial positions on each ring
///
/// The dimensions are fixed for the lifetime of the stack. Rotation is the
/// only mutating operation and only relocates values, so the cells of each
/// dial form the same multiset in every reachable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialStack<const DIALS: usize, const ROWS: usize, const COLUMNS: usize> {
    /// `cells[dial][row][column]`, dial 0 at the bottom of the stack.
    cells: [[[Cell; COLUMNS]; ROWS]; DIALS],
}

impl<const DIALS: usize, const ROWS: usize, const COLUMNS: usize>
    DialStack<DIALS, ROWS, COLUMNS>
{
    /// Creates a stack from fully specified cells, bottom dial first.
    pub const fn new(cells: [[[Cell; COLUMNS]; ROWS]; DIALS]) -> Self {
        assert!(DIALS >= 1, "a stack needs at least one dial");
        assert!(ROWS >= 1, "a dial needs at least one row");
        assert!(COLUMNS >= 1, "a dial needs at least one column");
        Self { cells }
    }

    /// Creates a stack from raw engraved values, `-1` marking the cut-out
    /// windows. This is how the dial tables are usually written down, and
    /// it keeps the big constants readable.
    pub const fn from_engraved(engraved: [[[i32; COLUMNS]; ROWS]; DIALS]) -> Self {
        let mut cells = [[[None; COLUMNS]; ROWS]; DIALS];
        let mut dial = 0;
        while dial < DIALS {
            let mut row = 0;
            while row < ROWS {
                let mut column = 0;
                while column < COLUMNS {
                    let value = engraved[dial][row][column];
                    if value != -1 {
                        cells[dial][row][column] = Some(value);
                    }
                    column += 1;
                }
                row += 1;
            }
            dial += 1;
        }
        Self::new(cells)
    }

    /// Value visible from above at (row, column): the topmost dial not cut
    /// out there wins. `None` when every dial has a window at the position.
    ///
    /// Out-of-range indices panic.
    #[inline]
    pub fn visible_value(&self, row: usize, column: usize) -> Cell {
        self.cells.iter().rev().find_map(|dial| dial[row][column])
    }

    /// Sum of the visible values in one column, counting uncovered
    /// positions as zero. Always equals the sum of [`Self::visible_value`]
    /// over the column's rows.
    pub fn column_sum(&self, column: usize) -> i32 {
        (0..ROWS)
            .map(|row| self.visible_value(row, column).unwrap_or(0))
            .sum()
    }

    /// Whether every row of the column shows a value.
    pub fn column_is_covered(&self, column: usize) -> bool {
        (0..ROWS).all(|row| self.visible_value(row, column).is_some())
    }

    /// Whether every column currently meets the goal.
    pub fn is_solved(&self, goal: Goal) -> bool {
        (0..COLUMNS).all(|column| {
            let covered = match goal.gaps {
                GapPolicy::ZeroFill => true,
                GapPolicy::Reject => self.column_is_covered(column),
            };
            covered && self.column_sum(column) == goal.target
        })
    }

    /// Turns one dial a single step: the value at column `c` moves to
    /// `(c + 1) % COLUMNS`. Every other dial is untouched.
    pub fn rotate_dial(&mut self, dial: usize) {
        for row in &mut self.cells[dial] {
            row.rotate_right(1);
        }
    }

    /// Read access to one dial's cells, for rendering.
    pub fn dial(&self, dial: usize) -> &[[Cell; COLUMNS]; ROWS] {
        &self.cells[dial]
    }
}
