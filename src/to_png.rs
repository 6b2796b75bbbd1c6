#![cfg(feature = "host")]
//! PNG previews of what the matrix shows, for checking glyphs without a board.
//!
//! Each LED is drawn as a round dot on a black background. Colors are passed through an inverse
//! gamma first, because a WS2812 at level 128 looks much brighter than sRGB 128 on a screen.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};

use crate::config::{MATRIX_HEIGHT, MATRIX_WIDTH};
use crate::digit::Digit;
use crate::display::glyph_frame;
use crate::led2d::Frame2d;
use crate::led_strip::RGB8;

/// The 5×5 matrix as rows.
pub type MatrixFrame = Frame2d<MATRIX_WIDTH, MATRIX_HEIGHT>;

/// How LEDs are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewStyle {
    /// Side of the square each LED occupies, in image pixels.
    pub cell_size: u32,
    /// Exponent applied to each normalized channel before drawing.
    pub inverse_gamma: f32,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            cell_size: 24,
            inverse_gamma: 2.2,
        }
    }
}

/// Writes one frame as a PNG of `W * cell_size` by `H * cell_size` pixels.
///
/// # Errors
///
/// Returns an error for a cell size under 4, a non-positive inverse gamma, an image too large to
/// address, or any I/O or encoding failure.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &Frame2d<W, H>,
    output_path: impl AsRef<Path>,
    style: PreviewStyle,
) -> Result<(), Box<dyn Error>> {
    let mut canvas = Canvas::new(W, H, style)?;
    canvas.paint(frame, 0);
    canvas.save(output_path.as_ref())
}

/// Writes the matrix showing `digit` in `color`.
///
/// # Errors
///
/// Same as [`write_frame_png`].
pub fn write_digit_png(
    digit: Digit,
    color: RGB8,
    output_path: impl AsRef<Path>,
    style: PreviewStyle,
) -> Result<(), Box<dyn Error>> {
    write_frame_png(&digit_frame(digit, color), output_path, style)
}

/// Writes all ten digits side by side, 0 on the left, one empty column between neighbors.
///
/// # Errors
///
/// Same as [`write_frame_png`].
pub fn write_digit_sheet_png(
    color: RGB8,
    output_path: impl AsRef<Path>,
    style: PreviewStyle,
) -> Result<(), Box<dyn Error>> {
    let mut canvas = Canvas::new(SHEET_COLUMNS, MATRIX_HEIGHT, style)?;
    for (column_offset, digit) in (0..SHEET_COLUMNS).step_by(SHEET_STRIDE).zip(Digit::ALL) {
        canvas.paint(&digit_frame(digit, color), column_offset);
    }
    canvas.save(output_path.as_ref())
}

/// The matrix frame for `digit` in `color`, as rows.
#[must_use]
pub fn digit_frame(digit: Digit, color: RGB8) -> MatrixFrame {
    MatrixFrame::from_frame1d(&glyph_frame(color, digit))
}

const MIN_CELL_SIZE: u32 = 4;
const BYTES_PER_PIXEL: usize = 3;
const SHEET_GAP: usize = 1;
const SHEET_STRIDE: usize = MATRIX_WIDTH + SHEET_GAP;
const SHEET_COLUMNS: usize = SHEET_STRIDE * Digit::ALL.len() - SHEET_GAP;
const TOO_LARGE: &str = "preview image is too large";

struct Canvas {
    width: usize,
    height: usize,
    cell_size: usize,
    inverse_gamma: f32,
    bytes: Vec<u8>,
}

impl Canvas {
    fn new(columns: usize, rows: usize, style: PreviewStyle) -> Result<Self, Box<dyn Error>> {
        if style.cell_size < MIN_CELL_SIZE {
            return Err(format!("cell_size must be at least {MIN_CELL_SIZE}").into());
        }
        if style.inverse_gamma.is_nan() || style.inverse_gamma <= 0.0 {
            return Err("inverse_gamma must be positive".into());
        }
        let cell_size = usize::try_from(style.cell_size)?;
        let width = columns.checked_mul(cell_size).ok_or(TOO_LARGE)?;
        let height = rows.checked_mul(cell_size).ok_or(TOO_LARGE)?;
        let len = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(TOO_LARGE)?;
        Ok(Self {
            width,
            height,
            cell_size,
            inverse_gamma: style.inverse_gamma,
            bytes: vec![0; len],
        })
    }

    /// Draws `frame` with its left edge at LED column `column_offset`.
    fn paint<const W: usize, const H: usize>(
        &mut self,
        frame: &Frame2d<W, H>,
        column_offset: usize,
    ) {
        for (row_index, row) in frame.iter().enumerate() {
            for (column_index, &pixel) in row.iter().enumerate() {
                self.dot(column_offset.saturating_add(column_index), row_index, pixel);
            }
        }
    }

    fn dot(&mut self, column: usize, row: usize, color: RGB8) {
        let center = self.cell_size / 2;
        let radius = center.saturating_sub(self.cell_size / 8);
        let rgb =
            [color.r, color.g, color.b].map(|channel| preview_channel(channel, self.inverse_gamma));
        let origin_x = column.saturating_mul(self.cell_size);
        let origin_y = row.saturating_mul(self.cell_size);
        for local_y in 0..self.cell_size {
            for local_x in 0..self.cell_size {
                let distance_sq = local_x
                    .abs_diff(center)
                    .pow(2)
                    .saturating_add(local_y.abs_diff(center).pow(2));
                if distance_sq > radius.pow(2) {
                    continue;
                }
                let x = origin_x.saturating_add(local_x);
                let y = origin_y.saturating_add(local_y);
                if let Some(pixel) = self.pixel_mut(x, y) {
                    pixel.copy_from_slice(&rgb);
                }
            }
        }
    }

    fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        if x >= self.width {
            return None;
        }
        let start = y
            .checked_mul(self.width)?
            .checked_add(x)?
            .checked_mul(BYTES_PER_PIXEL)?;
        let end = start.checked_add(BYTES_PER_PIXEL)?;
        self.bytes.get_mut(start..end)
    }

    fn save(&self, output_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(output_path)?;
        let mut encoder = Encoder::new(
            BufWriter::new(file),
            u32::try_from(self.width)?,
            u32::try_from(self.height)?,
        );
        encoder.set_color(ColorType::Rgb);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.bytes)?;
        println!("wrote PNG to {}", output_path.display());
        Ok(())
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the level is clamped to 0.0..=255.0 before the cast"
)]
fn preview_channel(channel: u8, inverse_gamma: f32) -> u8 {
    let level = (f32::from(channel) / 255.0).powf(inverse_gamma.recip());
    (level.clamp(0.0, 1.0) * 255.0).round() as u8
}
