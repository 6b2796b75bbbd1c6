//! Show the digits 0–9 on a 5×5 `NeoPixel`-style (WS2812) matrix and step through them with two
//! buttons, on a Pico 1 or Pico 2 (wired like the `BitDogLab` board).
//!
//! The pieces, leaves first:
//!
//! - [`digit`]: a [`Digit`](digit::Digit) in `0..=9` with wrapping increment and decrement.
//! - [`glyph`]: the compile-time table of 5×5 digit masks, in LED wiring order.
//! - [`led_strip`]: color packing, frames, and the blocking [`PixelSink`](led_strip::PixelSink)
//!   that feeds words to the WS2812 PIO program.
//! - [`display`]: renders a digit in a color to a pixel sink.
//! - [`led2d`]: the matrix as rows, for `(x, y)` access.
//! - `to_png` (feature `host`): PNG previews of digits, no board needed.
//! - [`button`]: the debounced button state machine and the task body that watches both buttons.
//! - [`heartbeat`]: blinks a status LED forever.
//! - [`config`]: board wiring and timing constants.
//!
//! # Glossary
//!
//! Resources available on the Pico 1 and Pico 2:
//!
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):** Pico 1 has 2. Pico 2 has 3.
//!   One state machine of one PIO runs the WS2812 bit program.
//! - **Glyph:** the fixed 5×5 on/off pattern for one digit.
//! - **Debounce:** rejecting rapid re-triggers of a mechanical button inside a minimum window.
//! - **Pixel chain:** a single-wire LED string; each LED keeps the first 24 bits it sees and
//!   forwards the rest.
#![cfg_attr(not(any(test, feature = "host")), no_std)]

// Compile-time checks: at most one board, and a board needs an architecture
#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(all(feature = "arm", not(any(feature = "pico1", feature = "pico2"))))]
compile_error!("The 'arm' feature needs exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "rp", not(feature = "arm")))]
compile_error!("Must enable the 'arm' architecture feature with a board feature");

pub mod button;
pub mod config;
pub mod digit;
pub mod display;
mod error;
pub mod glyph;
pub mod heartbeat;
pub mod led2d;
pub mod led_strip;
#[cfg(feature = "host")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
