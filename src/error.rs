//! Crate-wide error type.

use derive_more::{Display, Error};

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors from setting up or running the digit display.
///
/// Rendering never fails; everything here comes from setup or from pin drivers.
#[derive(Debug, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The executor had no room to spawn a background task.
    #[cfg(feature = "arm")]
    #[display("task spawn failed: {_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// A value outside `0..=9` was given where a digit was expected.
    #[display("{_0} is not a digit (expected 0..=9)")]
    DigitOutOfRange(#[error(not(source))] u8),

    /// A button pin failed while waiting for an edge.
    #[display("button input failed")]
    Input,

    /// A status LED pin could not be driven.
    #[display("status LED output failed")]
    StatusLed,
}
