//! Static puzzle data.
//!
//! The reference instance is the wooden Grecian Computer puzzle: five
//! stacked dials carrying four rings of twelve values each, solved when
//! every radial column of visible values adds up to 42.

use crate::dials::DialStack;

/// Dials in the reference stack.
pub const DIALS: usize = 5;
/// Value rings on each dial.
pub const ROWS: usize = 4;
/// Radial columns on each ring.
pub const COLUMNS: usize = 12;
/// Column sum the reference puzzle is solved at.
pub const TARGET: i32 = 42;

/// The engraved dials, bottom dial first, rows running from the outer
/// ring inward. `-1` marks a cut-out window.
///
/// Only the bottom dial is fully engraved; each dial above it is smaller
/// and covers fewer rings, so the windows thin out toward the top of the
/// stack (48, 34, 28, 15 and 6 engraved values).
const ENGRAVED: [[[i32; COLUMNS]; ROWS]; DIALS] = [
    // bottom dial, fully engraved
    [
        [8, 3, 4, 12, 2, 5, 10, 7, 16, 8, 7, 8],
        [4, 4, 6, 6, 3, 3, 14, 14, 21, 21, 9, 9],
        [4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        [11, 11, 14, 11, 14, 11, 14, 14, 11, 14, 11, 14],
    ],
    // second dial, windows on every ring
    [
        [12, -1, 6, -1, 10, -1, 10, -1, 1, -1, 9, -1],
        [2, 13, 9, -1, 17, 19, 3, 12, 3, 26, 6, -1],
        [6, -1, 14, 12, 3, 8, 9, -1, 9, 20, 12, 3],
        [7, 14, 11, -1, 8, -1, 16, 2, 7, -1, 9, -1],
    ],
    // third dial, outer ring fully open
    [
        [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        [22, -1, 16, -1, 9, -1, 5, -1, 10, -1, 8, -1],
        [11, 26, 14, 1, 12, -1, 21, 8, 15, 4, 9, 18],
        [17, 4, 5, -1, 7, 8, 9, 13, 9, 7, 13, 21],
    ],
    // fourth dial, values on the two inner rings only
    [
        [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        [15, -1, -1, 14, -1, 9, -1, 12, -1, 4, -1, 7],
        [6, -1, 11, 11, 6, 11, -1, 6, 17, 7, 3, -1],
    ],
    // top dial, six values on the innermost ring
    [
        [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        [15, -1, 8, -1, 3, -1, 6, -1, 10, -1, 7, -1],
    ],
];

/// The reference puzzle in its starting configuration.
pub const GRECIAN: DialStack<DIALS, ROWS, COLUMNS> = DialStack::from_engraved(ENGRAVED);
