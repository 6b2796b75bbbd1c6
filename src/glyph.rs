//! Compile-time 5×5 digit masks.
//!
//! Each [`Glyph`] holds 25 on/off cells in LED wiring order: cell `i` belongs to the `i`-th LED on
//! the chain. The `BitDogLab` matrix is wired serpentine from the bottom-right, so the masks look
//! mirrored and upside down when read as plain rows; they are stored the way the LEDs are wired so
//! rendering never remaps.

use core::fmt;

use crate::config::{MATRIX_HEIGHT, MATRIX_WIDTH};
use crate::digit::Digit;

/// Rows in a glyph.
pub const GLYPH_HEIGHT: usize = MATRIX_HEIGHT;
/// Cells per glyph row.
pub const GLYPH_WIDTH: usize = MATRIX_WIDTH;
/// Cells in a glyph, one per LED.
pub const GLYPH_LEN: usize = GLYPH_WIDTH * GLYPH_HEIGHT;

/// One digit's on/off pattern, row-major in LED wiring order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Glyph([bool; GLYPH_LEN]);

impl Glyph {
    /// Builds a glyph from five rows of text, `#` for lit and `.` for dark.
    ///
    /// Evaluated in `const` context, so a row of the wrong length or an unexpected character
    /// fails the build.
    ///
    /// # Panics
    ///
    /// Panics if a row is not five cells long or holds anything but `#` and `.`.
    ///
    /// ```rust
    /// use led_digit::glyph::Glyph;
    ///
    /// const BAR: Glyph = Glyph::from_rows(["#####", ".....", ".....", ".....", "....."]);
    /// assert_eq!(BAR.lit_count(), 5);
    /// ```
    #[must_use]
    #[allow(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "const evaluation; every index is bounds-checked by the asserts"
    )]
    pub const fn from_rows(rows: [&str; GLYPH_HEIGHT]) -> Self {
        let mut cells = [false; GLYPH_LEN];
        let mut row_index = 0;
        while row_index < GLYPH_HEIGHT {
            let row = rows[row_index].as_bytes();
            assert!(row.len() == GLYPH_WIDTH, "glyph rows must have exactly 5 cells");
            let mut column_index = 0;
            while column_index < GLYPH_WIDTH {
                cells[row_index * GLYPH_WIDTH + column_index] = match row[column_index] {
                    b'#' => true,
                    b'.' => false,
                    _ => panic!("glyph cells must be '#' or '.'"),
                };
                column_index += 1;
            }
            row_index += 1;
        }
        Self(cells)
    }

    /// The glyph for `digit`.
    #[must_use]
    #[allow(clippy::indexing_slicing, reason = "a Digit is always below 10")]
    pub fn of(digit: Digit) -> &'static Self {
        &GLYPHS[digit.index()]
    }

    /// Whether the LED at `index` is lit. Indices past the end are dark.
    #[must_use]
    pub fn is_lit(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// All 25 cells in LED order.
    #[must_use]
    pub const fn cells(&self) -> &[bool; GLYPH_LEN] {
        &self.0
    }

    /// Rows of five cells, first row first.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.0.chunks_exact(GLYPH_WIDTH)
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&lit| lit).count()
    }
}

/// Prints the glyph as five lines of `#` and `.`.
impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Masks for the digits 0 through 9, indexed by digit.
pub static GLYPHS: [Glyph; 10] = [
    // 0
    Glyph::from_rows([".###.", ".#.#.", ".#.#.", ".#.#.", ".###."]),
    // 1
    Glyph::from_rows([".###.", "..#..", "..#..", ".##..", "..#.."]),
    // 2
    Glyph::from_rows([".###.", ".#...", "..#..", "...#.", ".###."]),
    // 3
    Glyph::from_rows([".###.", "...#.", ".###.", "...#.", ".###."]),
    // 4
    Glyph::from_rows([".#...", "...#.", ".###.", ".#.#.", ".#.#."]),
    // 5
    Glyph::from_rows([".###.", "...#.", ".###.", ".#...", ".###."]),
    // 6
    Glyph::from_rows([".###.", ".#.#.", ".###.", ".#...", ".###."]),
    // 7
    Glyph::from_rows(["...#.", ".#...", "..#..", "...#.", ".###."]),
    // 8
    Glyph::from_rows([".###.", ".#.#.", ".###.", ".#.#.", ".###."]),
    // 9
    Glyph::from_rows([".###.", "...#.", ".###.", ".#.#.", ".###."]),
];
