//! Debounced buttons that step the displayed digit.
//!
//! [`DigitSelector`] is the state machine: it owns the digit, the color, and one [`Debouncer`]
//! shared by both buttons. [`ButtonWatch`] is the task body that waits for presses on two pins,
//! feeds them to the selector, and re-renders on every accepted press.
//!
//! See [`ButtonWatch`] for usage example.

use embassy_time::{Duration, Instant};
use smart_leds::RGB8;

use crate::config::{DEBOUNCE_WINDOW, DEFAULT_COLOR};
use crate::digit::Digit;

// ============================================================================
// Submodules
// ============================================================================

mod button_watch;

pub use button_watch::ButtonWatch;

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. Pin reads HIGH when pressed, so a press is a rising edge.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with pull-down resistors
    /// that can cause pins to stay HIGH after button release. Use Ground instead.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. Pin reads LOW when pressed, so a press is a falling edge.
    /// This is how the `BitDogLab` buttons are wired.
    Ground,
}

#[cfg(feature = "rp")]
impl PressedTo {
    /// The internal pull resistor that keeps the pin idle while the button is up.
    #[must_use]
    pub const fn pull(self) -> embassy_rp::gpio::Pull {
        match self {
            Self::Voltage => embassy_rp::gpio::Pull::Down,
            Self::Ground => embassy_rp::gpio::Pull::Up,
        }
    }

    /// Configures `pin` as a button input with the matching pull resistor.
    #[must_use]
    pub fn input<'d, P: embassy_rp::gpio::Pin>(
        self,
        pin: embassy_rp::Peri<'d, P>,
    ) -> embassy_rp::gpio::Input<'d> {
        embassy_rp::gpio::Input::new(pin, self.pull())
    }
}

// ============================================================================
// ButtonId - Which button fired
// ============================================================================

/// The two buttons of the board.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Steps the digit up, 9 wrapping to 0.
    A,
    /// Steps the digit down, 0 wrapping to 9.
    B,
}

impl ButtonId {
    /// The digit after this button is accepted on `digit`.
    #[must_use]
    pub const fn apply(self, digit: Digit) -> Digit {
        match self {
            Self::A => digit.increment(),
            Self::B => digit.decrement(),
        }
    }
}

// ============================================================================
// Debouncer
// ============================================================================

/// Rejects edges that arrive within a window of the last accepted edge.
///
/// The last accepted time starts at boot (`Instant` zero), so an edge in the first window after
/// boot is also rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Debouncer {
    window: Duration,
    last_accepted: Instant,
}

impl Debouncer {
    /// A debouncer with the given window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: Instant::from_ticks(0),
        }
    }

    /// Accepts the edge at `now` when strictly more than the window has passed since the last
    /// accepted edge, and records `now` as the new last accepted edge.
    pub fn accept(&mut self, now: Instant) -> bool {
        let elapsed = now.as_micros().wrapping_sub(self.last_accepted.as_micros());
        if elapsed > self.window.as_micros() {
            self.last_accepted = now;
            true
        } else {
            false
        }
    }

    /// When the last edge was accepted.
    #[must_use]
    pub const fn last_accepted(&self) -> Instant {
        self.last_accepted
    }

    /// The debounce window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

// ============================================================================
// DigitSelector - the display state and its transitions
// ============================================================================

/// The displayed digit, its color, and the debounce state of both buttons.
///
/// Only the task handling button edges should own this; it is both the single writer and, when
/// it renders, the single reader.
///
/// ```rust
/// use embassy_time::Instant;
/// use led_digit::button::{ButtonId, DigitSelector};
///
/// let mut selector = DigitSelector::default();
/// assert_eq!(selector.on_press_edge(ButtonId::B, Instant::from_millis(300)).map(u8::from), Some(9));
/// // 100 ms later: bounce, ignored
/// assert_eq!(selector.on_press_edge(ButtonId::B, Instant::from_millis(400)), None);
/// assert_eq!(selector.digit().get(), 9);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSelector {
    digit: Digit,
    color: RGB8,
    debouncer: Debouncer,
}

impl DigitSelector {
    /// Starts at digit 0 in `color`, with the default debounce window.
    #[must_use]
    pub fn new(color: RGB8) -> Self {
        Self::with_debouncer(color, Debouncer::default())
    }

    /// Starts at digit 0 in `color`, with a custom debouncer.
    #[must_use]
    pub const fn with_debouncer(color: RGB8, debouncer: Debouncer) -> Self {
        Self {
            digit: Digit::ZERO,
            color,
            debouncer,
        }
    }

    /// Handles a press edge from `button` at `now`.
    ///
    /// A press edge is falling for [`PressedTo::Ground`] wiring and rising for
    /// [`PressedTo::Voltage`]; [`ButtonWatch`] picks the edge before calling this.
    ///
    /// Returns the new digit when the edge is accepted. Returns `None`, changing nothing, when
    /// the edge falls inside the debounce window.
    pub fn on_press_edge(&mut self, button: ButtonId, now: Instant) -> Option<Digit> {
        if !self.debouncer.accept(now) {
            return None;
        }
        self.digit = button.apply(self.digit);
        Some(self.digit)
    }

    /// The digit currently shown.
    #[must_use]
    pub const fn digit(&self) -> Digit {
        self.digit
    }

    /// The color digits are drawn in.
    #[must_use]
    pub const fn color(&self) -> RGB8 {
        self.color
    }

    /// The debounce state.
    #[must_use]
    pub const fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}

impl Default for DigitSelector {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}
