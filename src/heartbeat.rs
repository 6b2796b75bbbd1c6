//! Blinks a status LED forever, independent of the digit display.
//!
//! Each beat drives the pin high, waits the on-time, and drives it low. By default the next beat
//! starts right away, so the LED is low only for the instant between two beats and looks steadily
//! lit with a flicker every 200 ms. Set [`HeartbeatConfig::off_duration`] for a visible blink.

use core::convert::Infallible;

use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;

use crate::config::HEARTBEAT_ON;
use crate::{Error, Result};

/// Timing of one heartbeat.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeartbeatConfig {
    /// How long the pin stays high.
    pub on_duration: Duration,
    /// How long the pin stays low before the next beat. `None` starts the next beat at once.
    pub off_duration: Option<Duration>,
}

impl HeartbeatConfig {
    /// High for `on_duration`, then low for the same time.
    #[must_use]
    pub const fn symmetric(on_duration: Duration) -> Self {
        Self {
            on_duration,
            off_duration: Some(on_duration),
        }
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            on_duration: HEARTBEAT_ON,
            off_duration: None,
        }
    }
}

/// A status LED blinking on a fixed period.
///
/// ```rust
/// use core::convert::Infallible;
/// use embedded_hal::digital::{ErrorType, OutputPin};
/// use led_digit::heartbeat::{Heartbeat, HeartbeatConfig};
///
/// struct Led(bool);
///
/// impl ErrorType for Led {
///     type Error = Infallible;
/// }
///
/// impl OutputPin for Led {
///     fn set_low(&mut self) -> Result<(), Infallible> {
///         self.0 = false;
///         Ok(())
///     }
///     fn set_high(&mut self) -> Result<(), Infallible> {
///         self.0 = true;
///         Ok(())
///     }
/// }
///
/// let mut heartbeat = Heartbeat::new(Led(false), HeartbeatConfig::default());
/// heartbeat.set_on().unwrap();
/// assert!(heartbeat.pin().0);
/// ```
pub struct Heartbeat<P> {
    pin: P,
    config: HeartbeatConfig,
}

impl<P: OutputPin> Heartbeat<P> {
    /// Blinks `pin` with the given timing. The pin is not touched until the first beat.
    pub const fn new(pin: P, config: HeartbeatConfig) -> Self {
        Self { pin, config }
    }

    /// Drives the LED on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatusLed`] if the pin cannot be driven.
    pub fn set_on(&mut self) -> Result<()> {
        self.pin.set_high().map_err(|_| Error::StatusLed)
    }

    /// Drives the LED off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatusLed`] if the pin cannot be driven.
    pub fn set_off(&mut self) -> Result<()> {
        self.pin.set_low().map_err(|_| Error::StatusLed)
    }

    /// One beat: high, wait, low, then the optional off-time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatusLed`] if the pin cannot be driven.
    pub async fn beat(&mut self) -> Result<()> {
        self.set_on()?;
        Timer::after(self.config.on_duration).await;
        self.set_off()?;
        if let Some(off_duration) = self.config.off_duration {
            Timer::after(off_duration).await;
        }
        Ok(())
    }

    /// Beats forever.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatusLed`] if the pin fails; otherwise never returns.
    pub async fn run(mut self) -> Result<Infallible> {
        loop {
            self.beat().await?;
        }
    }

    /// The pin being blinked.
    #[must_use]
    pub const fn pin(&self) -> &P {
        &self.pin
    }

    /// The timing in use.
    #[must_use]
    pub const fn config(&self) -> HeartbeatConfig {
        self.config
    }
}
