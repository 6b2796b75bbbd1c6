//! The task body that owns both buttons, the digit state, and the matrix.
//!
//! Works with any pin implementing [`Wait`]: `embassy_rp::gpio::Input` on the board, scripted
//! pins in the tests.

use core::convert::Infallible;

use embassy_futures::select::{Either, select};
use embassy_time::Instant;
use embedded_hal_async::digital::Wait;

use super::{ButtonId, DigitSelector, PressedTo};
use crate::digit::Digit;
use crate::display::DigitRenderer;
use crate::led_strip::PixelSink;
use crate::{Error, Result};

/// Watches two buttons and keeps the matrix showing the selected digit.
///
/// Everything the press handler touches lives here, so the task running
/// [`run`](Self::run) is the only writer of the digit and the only user of the pixel chain.
/// Presses that arrive while a render is in progress are not queued.
///
/// # Example
///
/// ```rust,ignore
/// use core::convert::Infallible;
/// use embassy_rp::gpio::Input;
/// use embassy_rp::peripherals::PIO0;
/// use led_digit::button::{ButtonWatch, DigitSelector, PressedTo};
/// use led_digit::display::DigitRenderer;
/// use led_digit::led_strip::pio_ws2812::Ws2812Pio;
///
/// async fn example(
///     button_a: Input<'static>,
///     button_b: Input<'static>,
///     ws2812: Ws2812Pio<'static, PIO0, 0>,
/// ) -> led_digit::Result<Infallible> {
///     let mut button_watch = ButtonWatch::new(
///         button_a,
///         button_b,
///         PressedTo::Ground,
///         DigitSelector::default(),
///         DigitRenderer::new(ws2812),
///     );
///     button_watch.render_current();
///     button_watch.run().await
/// }
/// ```
pub struct ButtonWatch<A, B, S> {
    button_a: A,
    button_b: B,
    pressed_to: PressedTo,
    selector: DigitSelector,
    renderer: DigitRenderer<S>,
}

impl<A: Wait, B: Wait, S: PixelSink> ButtonWatch<A, B, S> {
    /// Bundles the buttons, the starting state, and the matrix renderer.
    pub const fn new(
        button_a: A,
        button_b: B,
        pressed_to: PressedTo,
        selector: DigitSelector,
        renderer: DigitRenderer<S>,
    ) -> Self {
        Self {
            button_a,
            button_b,
            pressed_to,
            selector,
            renderer,
        }
    }

    /// Draws the current digit without waiting for a press. Used once at startup.
    pub fn render_current(&mut self) {
        self.renderer.render(self.selector.color(), self.selector.digit());
    }

    /// Waits for the next press edge on either button.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] if a pin fails while waiting.
    pub async fn next_edge(&mut self) -> Result<ButtonId> {
        let pressed_to = self.pressed_to;
        match select(
            wait_for_press_edge(&mut self.button_a, pressed_to),
            wait_for_press_edge(&mut self.button_b, pressed_to),
        )
        .await
        {
            Either::First(result) => result.map(|()| ButtonId::A),
            Either::Second(result) => result.map(|()| ButtonId::B),
        }
    }

    /// Runs one edge through the state machine and re-renders if it was accepted.
    ///
    /// Returns the new digit, or `None` when the edge was bounce.
    pub fn handle_edge(&mut self, button: ButtonId, now: Instant) -> Option<Digit> {
        let digit = self.selector.on_press_edge(button, now)?;
        #[cfg(feature = "defmt")]
        {
            defmt::info!("Button {} pressed", button);
            defmt::info!("Digit changed to {}", digit);
        }
        self.renderer.render(self.selector.color(), digit);
        Some(digit)
    }

    /// Handles presses forever.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] if a pin fails; otherwise never returns.
    pub async fn run(mut self) -> Result<Infallible> {
        loop {
            let button = self.next_edge().await?;
            self.handle_edge(button, Instant::now());
        }
    }

    /// The state machine, for inspection.
    #[must_use]
    pub const fn selector(&self) -> &DigitSelector {
        &self.selector
    }

    /// Gives back the pins and the renderer.
    pub fn into_parts(self) -> (A, B, DigitRenderer<S>) {
        (self.button_a, self.button_b, self.renderer)
    }
}

async fn wait_for_press_edge<P: Wait>(pin: &mut P, pressed_to: PressedTo) -> Result<()> {
    let edge = match pressed_to {
        PressedTo::Ground => pin.wait_for_falling_edge().await,
        PressedTo::Voltage => pin.wait_for_rising_edge().await,
    };
    edge.map_err(|_| Error::Input)
}
