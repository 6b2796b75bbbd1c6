//! A rectangular view of the matrix, for previews and for reasoning in `(x, y)` terms.
//!
//! The matrix chain is indexed row-major: LED `i` sits at `(i % W, i / W)`. The glyph table is
//! stored in that same order, so converting a [`Frame1d`] to a [`Frame2d`] is a plain reshape.
//!
//! ```rust
//! use led_digit::led2d::Frame2d;
//! use led_digit::led_strip::{Frame1d, colors};
//!
//! let mut strip_frame = Frame1d::<25>::new();
//! strip_frame[7] = colors::BLUE;
//!
//! let frame = Frame2d::<5, 5>::from_frame1d(&strip_frame);
//! assert_eq!(frame[(2, 1)], colors::BLUE);
//! ```

use core::ops::{Deref, Index};

use crate::led_strip::{Frame1d, OFF, RGB8};

/// A `W`×`H` frame of LED colors, stored as rows.
///
/// Index with `(x, y)`: `(0, 0)` is the first LED of the chain, `x` grows along a row. Indexing
/// outside the frame panics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame2d<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> Frame2d<W, H> {
    const LEN: usize = W * H;

    /// Every LED off.
    #[must_use]
    pub const fn new() -> Self {
        Self([[OFF; W]; H])
    }

    /// Reshapes a chain-order frame into rows of `W`.
    ///
    /// # Panics
    ///
    /// Panics if `N` is not `W * H`.
    #[must_use]
    pub fn from_frame1d<const N: usize>(frame: &Frame1d<N>) -> Self {
        assert!(N == Self::LEN, "Frame1d length must equal width × height");
        let mut result = Self::new();
        for (row, chunk) in result.0.iter_mut().zip(frame.chunks_exact(W)) {
            row.copy_from_slice(chunk);
        }
        result
    }

    /// Flattens the rows back into chain order.
    ///
    /// # Panics
    ///
    /// Panics if `N` is not `W * H`.
    #[must_use]
    pub fn to_frame1d<const N: usize>(&self) -> Frame1d<N> {
        assert!(N == Self::LEN, "Frame1d length must equal width × height");
        let mut result = Frame1d::new();
        for (chunk, row) in result.chunks_exact_mut(W).zip(self.0.iter()) {
            chunk.copy_from_slice(row);
        }
        result
    }
}

impl<const W: usize, const H: usize> Deref for Frame2d<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for Frame2d<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        self.0
            .get(y_index)
            .and_then(|row| row.get(x_index))
            .unwrap_or_else(|| panic!("({x_index}, {y_index}) is outside the {W}×{H} frame"))
    }
}
