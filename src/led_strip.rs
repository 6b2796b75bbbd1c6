//! `NeoPixel`-style (WS2812) pixel chain: color packing, frames, and the blocking sink words go to.
//!
//! A WS2812 LED takes 24 bits, green first, then red, then blue, each most significant bit first.
//! [`pack_grb`] builds that 24-bit value and [`wire_word`] shifts it into the top of a 32-bit word,
//! which is what the PIO program expects: it shifts out 24 bits from the top and drops the low 8.
//!
//! On the board, [`Ws2812Pio`](pio_ws2812::Ws2812Pio) is the [`PixelSink`]; on the host, tests
//! use their own sink that records words.
//!
//! # Example
//!
//! ```rust
//! use led_digit::led_strip::{Frame1d, PixelSink, colors, write_frame};
//!
//! struct Recorder(Vec<u32>);
//!
//! impl PixelSink for Recorder {
//!     fn transmit(&mut self, word: u32) {
//!         self.0.push(word);
//!     }
//! }
//!
//! let mut frame = Frame1d::<3>::new();
//! frame[1] = colors::RED;
//!
//! let mut recorder = Recorder(Vec::new());
//! write_frame(&mut recorder, &frame);
//! assert_eq!(recorder.0, [0, 0x00FF_0000, 0]);
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color type used by LED strip frames.
pub use smart_leds::RGB8;

use core::ops::{Deref, DerefMut};

// ============================================================================
// Submodules
// ============================================================================

#[cfg(feature = "rp")]
pub mod pio_ws2812;

/// The color of an LED that is off.
pub const OFF: RGB8 = RGB8::new(0, 0, 0);

/// Bits each LED consumes from the chain (RGB; RGBW strips are not supported).
pub const BITS_PER_PIXEL: u8 = 24;

// ============================================================================
// Color packing
// ============================================================================

/// Packs a color as the 24-bit WS2812 value: green in the high byte, red in the middle, blue low.
///
/// ```rust
/// use led_digit::led_strip::{RGB8, pack_grb};
///
/// assert_eq!(pack_grb(RGB8::new(10, 20, 30)), 0x14_0A1E);
/// assert_eq!(pack_grb(RGB8::new(255, 0, 128)), 0x00_FF80);
/// ```
#[must_use]
pub const fn pack_grb(color: RGB8) -> u32 {
    u32::from_be_bytes([0, color.g, color.r, color.b])
}

/// The 32-bit word handed to the PIO transmit FIFO: [`pack_grb`] shifted left by 8.
///
/// The low byte is padding the PIO program never shifts out.
///
/// ```rust
/// use led_digit::led_strip::{RGB8, wire_word};
///
/// assert_eq!(wire_word(RGB8::new(10, 20, 30)), 0x140A_1E00);
/// ```
#[must_use]
pub const fn wire_word(color: RGB8) -> u32 {
    u32::from_be_bytes([color.g, color.r, color.b, 0])
}

// ============================================================================
// PixelSink - where words go
// ============================================================================

/// Something that accepts one WS2812 word at a time.
///
/// `transmit` blocks until the word is accepted (on hardware: until the PIO transmit FIFO has
/// room). There is no timeout and no cancellation; a stalled chain stalls the caller.
pub trait PixelSink {
    /// Sends one word produced by [`wire_word`], blocking until it is accepted.
    fn transmit(&mut self, word: u32);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn transmit(&mut self, word: u32) {
        (**self).transmit(word);
    }
}

// ============================================================================
// Frame1d - one color per LED
// ============================================================================

/// One [`RGB8`] per LED, in chain order.
///
/// Derefs to `[RGB8; N]` for reading and writing pixels before [`write_frame`] sends them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame1d<const N: usize>(pub [RGB8; N]);

impl<const N: usize> Frame1d<N> {
    /// Every LED off.
    #[must_use]
    pub const fn new() -> Self {
        Self([OFF; N])
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [RGB8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Sends every pixel of `frame` to `sink`, first LED first, one blocking word per LED.
pub fn write_frame<S: PixelSink + ?Sized, const N: usize>(sink: &mut S, frame: &Frame1d<N>) {
    for &color in frame.iter() {
        sink.transmit(wire_word(color));
    }
}
