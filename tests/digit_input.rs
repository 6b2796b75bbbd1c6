#![allow(missing_docs)]
use core::convert::Infallible;
use core::future::pending;

use embassy_futures::block_on;
use embassy_time::{Duration, Instant};
use embedded_hal::digital::{ErrorKind, ErrorType};
use embedded_hal_async::digital::Wait;
use led_digit::Error;
use led_digit::button::{ButtonId, ButtonWatch, Debouncer, DigitSelector, PressedTo};
use led_digit::config::{DEFAULT_COLOR, MATRIX_LEN};
use led_digit::digit::Digit;
use led_digit::display::{DigitRenderer, glyph_frame};
use led_digit::led_strip::{PixelSink, RGB8, wire_word};

// ============================================================================
// Test doubles
// ============================================================================

#[derive(Default)]
struct Recorder(Vec<u32>);

impl PixelSink for Recorder {
    fn transmit(&mut self, word: u32) {
        self.0.push(word);
    }
}

/// Produces a fixed number of falling and rising edges, then waits forever.
struct ScriptedPin {
    falling_edges: usize,
    rising_edges: usize,
}

impl ScriptedPin {
    const fn idle() -> Self {
        Self {
            falling_edges: 0,
            rising_edges: 0,
        }
    }

    const fn with_edges(falling_edges: usize) -> Self {
        Self {
            falling_edges,
            rising_edges: 0,
        }
    }

    const fn with_rising_edges(rising_edges: usize) -> Self {
        Self {
            falling_edges: 0,
            rising_edges,
        }
    }
}

async fn take_edge(remaining: &mut usize) -> Result<(), Infallible> {
    if *remaining == 0 {
        pending::<()>().await;
    }
    *remaining -= 1;
    Ok(())
}

impl ErrorType for ScriptedPin {
    type Error = Infallible;
}

impl Wait for ScriptedPin {
    async fn wait_for_high(&mut self) -> Result<(), Infallible> {
        pending().await
    }

    async fn wait_for_low(&mut self) -> Result<(), Infallible> {
        pending().await
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Infallible> {
        take_edge(&mut self.rising_edges).await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Infallible> {
        take_edge(&mut self.falling_edges).await
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Infallible> {
        take_edge(&mut self.falling_edges).await
    }
}

#[derive(Debug)]
struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// A pin whose driver always fails.
struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = PinFault;
}

impl Wait for BrokenPin {
    async fn wait_for_high(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }

    async fn wait_for_low(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }
}

fn at(millis: u64) -> Instant {
    Instant::from_millis(millis)
}

fn digit(value: u8) -> Digit {
    Digit::new(value).unwrap()
}

fn expected_words(color: RGB8, value: u8) -> Vec<u32> {
    glyph_frame(color, digit(value))
        .iter()
        .map(|&pixel| wire_word(pixel))
        .collect()
}

// ============================================================================
// Digit
// ============================================================================

#[test]
fn digit_wraps_at_both_ends() {
    assert_eq!(digit(9).increment(), Digit::ZERO);
    assert_eq!(Digit::ZERO.decrement(), digit(9));
    for value in Digit::ALL {
        assert_eq!(value.increment().decrement(), value);
    }
}

#[test]
fn digit_rejects_values_past_nine() {
    assert!(Digit::new(10).is_none());
    assert!(matches!(Digit::try_from(10), Err(Error::DigitOutOfRange(10))));
    assert_eq!(Digit::try_from(7).map(u8::from).ok(), Some(7));
}

// ============================================================================
// Debouncer and DigitSelector
// ============================================================================

#[test]
fn edge_within_window_of_boot_is_ignored() {
    let mut selector = DigitSelector::default();

    assert_eq!(selector.on_press_edge(ButtonId::A, at(150)), None);
    assert_eq!(selector.digit(), Digit::ZERO);
    assert_eq!(selector.debouncer().last_accepted(), at(0));
}

#[test]
fn edge_exactly_at_window_is_ignored() {
    let mut debouncer = Debouncer::new(Duration::from_millis(200));

    assert!(!debouncer.accept(at(200)));
    assert!(debouncer.accept(Instant::from_micros(200_001)));
}

#[test]
fn bounce_after_accepted_edge_is_ignored() {
    let mut selector = DigitSelector::default();

    assert_eq!(selector.on_press_edge(ButtonId::A, at(1_000)), Some(digit(1)));
    assert_eq!(selector.on_press_edge(ButtonId::A, at(1_100)), None);
    assert_eq!(selector.on_press_edge(ButtonId::B, at(1_200)), None);
    assert_eq!(selector.digit(), digit(1));
    assert_eq!(selector.debouncer().last_accepted(), at(1_000));
}

#[test]
fn rejected_edge_does_not_extend_window() {
    let mut selector = DigitSelector::default();

    assert!(selector.on_press_edge(ButtonId::A, at(1_000)).is_some());
    assert!(selector.on_press_edge(ButtonId::A, at(1_150)).is_none());
    // 201 ms after the accepted edge, 51 ms after the rejected one
    assert_eq!(selector.on_press_edge(ButtonId::A, at(1_201)), Some(digit(2)));
}

#[test]
fn spaced_presses_step_up_and_down() {
    let mut selector = DigitSelector::default();
    let presses = [ButtonId::A, ButtonId::B, ButtonId::A, ButtonId::B];

    let digits: Vec<u8> = (1..)
        .zip(presses)
        .filter_map(|(slot, button)| selector.on_press_edge(button, at(slot * 300)))
        .map(u8::from)
        .collect();

    assert_eq!(digits, [1, 0, 1, 0]);
}

#[test]
fn button_b_wraps_zero_to_nine() {
    let mut selector = DigitSelector::default();

    assert_eq!(selector.on_press_edge(ButtonId::B, at(500)), Some(digit(9)));
    assert_eq!(selector.on_press_edge(ButtonId::A, at(800)), Some(Digit::ZERO));
}

#[test]
fn window_is_configurable() {
    let debouncer = Debouncer::new(Duration::from_millis(50));
    let mut selector = DigitSelector::with_debouncer(DEFAULT_COLOR, debouncer);

    assert!(selector.on_press_edge(ButtonId::A, at(60)).is_some());
    assert!(selector.on_press_edge(ButtonId::A, at(120)).is_some());
    assert_eq!(selector.digit(), digit(2));
}

// ============================================================================
// ButtonWatch
// ============================================================================

fn watch(
    button_a: ScriptedPin,
    button_b: ScriptedPin,
) -> ButtonWatch<ScriptedPin, ScriptedPin, Recorder> {
    ButtonWatch::new(
        button_a,
        button_b,
        PressedTo::Ground,
        DigitSelector::default(),
        DigitRenderer::new(Recorder::default()),
    )
}

#[test]
fn startup_render_shows_zero() {
    let mut button_watch = watch(ScriptedPin::idle(), ScriptedPin::idle());
    button_watch.render_current();

    let (_, _, renderer) = button_watch.into_parts();
    let words = renderer.into_inner().0;
    assert_eq!(words.len(), MATRIX_LEN);
    assert_eq!(words[0], 0);
    assert_eq!(words[1], wire_word(DEFAULT_COLOR));
}

#[test]
fn next_edge_reports_which_button_fell() {
    let mut button_watch = watch(ScriptedPin::idle(), ScriptedPin::with_edges(1));
    assert_eq!(block_on(button_watch.next_edge()).unwrap(), ButtonId::B);

    let mut button_watch = watch(ScriptedPin::with_edges(1), ScriptedPin::idle());
    assert_eq!(block_on(button_watch.next_edge()).unwrap(), ButtonId::A);
}

#[test]
fn accepted_edge_renders_once_and_bounce_renders_nothing() {
    let mut button_watch = watch(ScriptedPin::with_edges(2), ScriptedPin::idle());

    let button = block_on(button_watch.next_edge()).unwrap();
    assert_eq!(button_watch.handle_edge(button, at(400)), Some(digit(1)));
    let button = block_on(button_watch.next_edge()).unwrap();
    assert_eq!(button_watch.handle_edge(button, at(450)), None);

    assert_eq!(button_watch.selector().digit(), digit(1));
    let (_, _, renderer) = button_watch.into_parts();
    assert_eq!(renderer.into_inner().0.len(), MATRIX_LEN);
}

#[test]
fn failing_pin_surfaces_input_error() {
    let mut button_watch = ButtonWatch::new(
        BrokenPin,
        ScriptedPin::idle(),
        PressedTo::Ground,
        DigitSelector::default(),
        DigitRenderer::new(Recorder::default()),
    );

    assert!(matches!(block_on(button_watch.next_edge()), Err(Error::Input)));
}

#[test]
fn two_spaced_edges_render_two_frames() {
    let mut button_watch = watch(ScriptedPin::with_edges(2), ScriptedPin::idle());

    for now in [at(400), at(700)] {
        let button = block_on(button_watch.next_edge()).unwrap();
        assert!(button_watch.handle_edge(button, now).is_some());
    }

    let (_, _, renderer) = button_watch.into_parts();
    let words = renderer.into_inner().0;
    assert_eq!(words.len(), 2 * MATRIX_LEN);
    assert_eq!(words[..MATRIX_LEN], expected_words(DEFAULT_COLOR, 1));
    assert_eq!(words[MATRIX_LEN..], expected_words(DEFAULT_COLOR, 2));
}

#[test]
fn a_b_a_b_renders_one_zero_one_zero() {
    let mut button_watch = watch(ScriptedPin::idle(), ScriptedPin::idle());
    let presses = [ButtonId::A, ButtonId::B, ButtonId::A, ButtonId::B];

    for (slot, button) in (1..).zip(presses) {
        button_watch.handle_edge(button, at(slot * 300));
    }

    let (_, _, renderer) = button_watch.into_parts();
    let words = renderer.into_inner().0;
    let frames: Vec<&[u32]> = words.chunks(MATRIX_LEN).collect();
    assert_eq!(frames.len(), 4);
    for (frame, value) in frames.into_iter().zip([1, 0, 1, 0]) {
        assert_eq!(frame, expected_words(DEFAULT_COLOR, value));
    }
}

#[test]
fn voltage_wiring_waits_for_rising_edges() {
    let mut button_watch = ButtonWatch::new(
        ScriptedPin::with_edges(1),
        ScriptedPin::with_rising_edges(1),
        PressedTo::Voltage,
        DigitSelector::default(),
        DigitRenderer::new(Recorder::default()),
    );

    // button A only falls, which is a release under pull-down wiring
    assert_eq!(block_on(button_watch.next_edge()).unwrap(), ButtonId::B);
    assert_eq!(button_watch.handle_edge(ButtonId::B, at(300)), Some(digit(9)));
}
