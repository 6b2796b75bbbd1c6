//! Shows a blue digit on the 5×5 matrix. Button A counts up, button B counts down, and the red
//! status LED blinks as a heartbeat.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;

use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use led_digit::{
    Error, Result,
    button::{ButtonWatch, DigitSelector, PressedTo},
    config::WS2812_BIT_RATE_HZ,
    display::DigitRenderer,
    heartbeat::{Heartbeat, HeartbeatConfig},
    led_strip::pio_ws2812::Ws2812Pio,
};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

type BoardButtonWatch = ButtonWatch<Input<'static>, Input<'static>, Ws2812Pio<'static, PIO0, 0>>;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    defmt::error!("{}", err);
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(embassy_rp::config::Config::default());
    defmt::info!("Starting digit display");

    // Status LED: red blinks, green and blue stay off
    let status_red = Output::new(p.PIN_13, Level::Low);
    let _status_green = Output::new(p.PIN_11, Level::Low);
    let _status_blue = Output::new(p.PIN_12, Level::Low);

    // BitDogLab buttons short to ground
    let button_a = PressedTo::Ground.input(p.PIN_5);
    let button_b = PressedTo::Ground.input(p.PIN_6);

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let ws2812 = Ws2812Pio::new(&mut common, sm0, p.PIN_7, WS2812_BIT_RATE_HZ);

    let mut button_watch = ButtonWatch::new(
        button_a,
        button_b,
        PressedTo::Ground,
        DigitSelector::default(),
        DigitRenderer::new(ws2812),
    );
    button_watch.render_current();
    spawner
        .spawn(button_watch_task(button_watch))
        .map_err(Error::TaskSpawn)?;

    Heartbeat::new(status_red, HeartbeatConfig::default())
        .run()
        .await
}

#[embassy_executor::task]
async fn button_watch_task(button_watch: BoardButtonWatch) -> ! {
    let err = button_watch.run().await.unwrap_err();
    defmt::error!("button watch stopped: {}", err);
    panic!("{err}");
}
