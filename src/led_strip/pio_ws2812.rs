//! WS2812 bit protocol on one PIO state machine.
//!
//! Each bit takes 10 PIO cycles: 3 low (stop), 2 high (start), then 5 that are high for a 1 and
//! low for a 0. The clock divider makes those 10 cycles last one bit period (1.25 µs at 800 kHz).
//! The state machine autopulls 24 bits from the top of each FIFO word.

use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use fixed::types::U24F8;

use super::{BITS_PER_PIXEL, PixelSink};

// 2 start + 5 data + 3 stop, matching the delays in the program below
const CYCLES_PER_BIT: u32 = 10;

/// A WS2812 transmitter that owns one PIO state machine.
///
/// [`transmit`](PixelSink::transmit) spins until the state machine's transmit FIFO has room, so a
/// call returns once the word is queued, not once it is on the wire.
pub struct Ws2812Pio<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> Ws2812Pio<'d, PIO, SM> {
    /// Loads the WS2812 program into `common`, points `sm` at `pin`, and starts it.
    ///
    /// `bit_rate_hz` is the chain's bit rate, normally
    /// [`WS2812_BIT_RATE_HZ`](crate::config::WS2812_BIT_RATE_HZ). A rate below 1 kHz selects the
    /// slowest divider.
    pub fn new(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, impl PioPin>,
        bit_rate_hz: u32,
    ) -> Self {
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]", // stop bit, then fetch the next data bit
            "    jmp !x do_zero side 1 [1]", // start bit
            "do_one:",
            "    jmp bitloop    side 1 [4]", // data bit = 1
            "do_zero:",
            "    nop            side 0 [4]", // data bit = 0
            ".wrap"
        );
        let installed = common.load_program(&prg.program);
        let out_pin = common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&out_pin]);

        // Measured in kHz to avoid overflows
        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let bit_freq = U24F8::from_num(bit_rate_hz / 1000).saturating_mul_int(CYCLES_PER_BIT);
        cfg.clock_divider = clock_freq.checked_div(bit_freq).unwrap_or(U24F8::MAX);

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_PIXEL,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&out_pin]);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<PIO: Instance, const SM: usize> PixelSink for Ws2812Pio<'_, PIO, SM> {
    fn transmit(&mut self, word: u32) {
        let tx = self.sm.tx();
        while !tx.try_push(word) {
            core::hint::spin_loop();
        }
    }
}
