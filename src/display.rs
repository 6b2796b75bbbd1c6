//! Renders a digit onto the matrix.
//!
//! LED `i` gets the color when the digit's glyph has cell `i` lit, and [`OFF`] otherwise. Every
//! render sends exactly [`MATRIX_LEN`] words, first LED first, each one blocking until the sink
//! accepts it.

use crate::config::MATRIX_LEN;
use crate::digit::Digit;
use crate::glyph::Glyph;
use crate::led_strip::{Frame1d, OFF, PixelSink, RGB8, write_frame};

/// One color per matrix LED.
pub type DigitFrame = Frame1d<MATRIX_LEN>;

/// The frame that shows `digit` in `color`.
///
/// ```rust
/// use led_digit::{digit::Digit, display::glyph_frame, led_strip::colors};
///
/// let frame = glyph_frame(colors::BLUE, Digit::ZERO);
/// assert_eq!(frame[0], colors::BLACK); // corner LEDs of a zero are dark
/// assert_eq!(frame[1], colors::BLUE);
/// ```
#[must_use]
pub fn glyph_frame(color: RGB8, digit: Digit) -> DigitFrame {
    let glyph = Glyph::of(digit);
    let mut frame = DigitFrame::new();
    for (pixel, &lit) in frame.iter_mut().zip(glyph.cells()) {
        *pixel = if lit { color } else { OFF };
    }
    frame
}

/// Sends the frame for `digit` in `color` to `sink`.
pub fn render_digit<S: PixelSink + ?Sized>(sink: &mut S, color: RGB8, digit: Digit) {
    write_frame(sink, &glyph_frame(color, digit));
}

/// A pixel sink dedicated to showing digits.
///
/// Owns its sink so the task that renders is the only one touching the chain.
pub struct DigitRenderer<S> {
    sink: S,
}

impl<S: PixelSink> DigitRenderer<S> {
    /// Wraps `sink`.
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Shows `digit` in `color`.
    pub fn render(&mut self, color: RGB8, digit: Digit) {
        render_digit(&mut self.sink, color, digit);
    }

    /// Turns every LED off.
    pub fn clear(&mut self) {
        write_frame(&mut self.sink, &DigitFrame::new());
    }

    /// Gives the sink back.
    pub fn into_inner(self) -> S {
        self.sink
    }
}
