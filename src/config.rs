//! Board wiring and timing constants.
//!
//! Pins follow the `BitDogLab` board. `embassy_rp` types each pin statically, so the board
//! application (`demos/bitdoglab_digits.rs`) names the peripherals directly:
//!
//!   Button A        → GPIO5  (increments)
//!   Button B        → GPIO6  (decrements)
//!   LED matrix data → GPIO7  (5×5 WS2812, one PIO state machine)
//!   Status LED      → GPIO13 red, GPIO11 green, GPIO12 blue

use embassy_time::Duration;
use smart_leds::RGB8;

/// Matrix width in LEDs.
pub const MATRIX_WIDTH: usize = 5;
/// Matrix height in LEDs.
pub const MATRIX_HEIGHT: usize = 5;
/// Number of LEDs on the matrix chain.
pub const MATRIX_LEN: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// WS2812 bit rate.
pub const WS2812_BIT_RATE_HZ: u32 = 800_000;

/// Edges closer than this to the last accepted edge are bounce.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

/// How long the heartbeat LED stays on each cycle.
pub const HEARTBEAT_ON: Duration = Duration::from_millis(200);

/// Digit color at startup.
pub const DEFAULT_COLOR: RGB8 = RGB8::new(0, 0, 255);
