//! Terminal output encoder (ASCII / Braille).
//!
//! Renders a framebuffer as text by classifying every pixel as ink (anything
//! that is not the background color) or empty:
//! - ASCII: one character per pixel block, `#` for ink and `.` for empty
//! - Braille: one character per 2x4 pixel block, one dot per pixel

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// One `#`/`.` character per pixel block (widest compatibility).
    Ascii,
    /// Unicode Braille patterns, 2x4 pixels per character.
    #[default]
    Braille,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    background: Rgba,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// First codepoint of the Braille Patterns block (no dots raised).
    const BRAILLE_BASE: u32 = 0x2800;

    /// Dot bit for each `(column, row)` of a 2x4 Braille cell.
    const BRAILLE_DOTS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), width: None, background: Rgba::WHITE }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Limit the output to at most `width` characters per line.
    ///
    /// Pixels are grouped into square blocks; a block shows ink when any of
    /// its pixels does, so one-pixel lines survive downscaling.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Color treated as empty space.
    #[must_use]
    pub fn background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Render a framebuffer to a string, one line per text row.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(fb),
            TerminalMode::Braille => self.render_braille(fb),
        }
    }

    fn render_ascii(&self, fb: &Framebuffer) -> String {
        let block = self.block_size(fb, 1);
        let cols = fb.width().div_ceil(block);
        let rows = fb.height().div_ceil(block);
        let mut output = String::with_capacity(((cols + 1) * rows) as usize);

        for row in 0..rows {
            for col in 0..cols {
                output.push(if self.block_has_ink(fb, col, row, block) { '#' } else { '.' });
            }
            output.push('\n');
        }

        output
    }

    fn render_braille(&self, fb: &Framebuffer) -> String {
        let block = self.block_size(fb, 2);
        let dots_x = fb.width().div_ceil(block);
        let dots_y = fb.height().div_ceil(block);
        let cols = dots_x.div_ceil(2);
        let rows = dots_y.div_ceil(4);
        let mut output = String::with_capacity(((cols * 3 + 1) * rows) as usize);

        for row in 0..rows {
            for col in 0..cols {
                let mut bits = 0u8;
                for (dx, column_bits) in Self::BRAILLE_DOTS.iter().enumerate() {
                    for (dy, bit) in column_bits.iter().enumerate() {
                        let (dot_x, dot_y) = (col * 2 + dx as u32, row * 4 + dy as u32);
                        if dot_x < dots_x && dot_y < dots_y && self.block_has_ink(fb, dot_x, dot_y, block) {
                            bits |= *bit;
                        }
                    }
                }
                output.push(char::from_u32(Self::BRAILLE_BASE + u32::from(bits)).unwrap_or(' '));
            }
            output.push('\n');
        }

        output
    }

    /// Pixels per block edge so that the line fits the width limit.
    /// `per_char` is how many blocks one character spans horizontally.
    fn block_size(&self, fb: &Framebuffer, per_char: u32) -> u32 {
        match self.width {
            Some(width) => fb.width().div_ceil(width.saturating_mul(per_char)).max(1),
            None => 1,
        }
    }

    fn block_has_ink(&self, fb: &Framebuffer, bx: u32, by: u32, block: u32) -> bool {
        let x_end = ((bx + 1) * block).min(fb.width());
        let y_end = ((by + 1) * block).min(fb.height());
        (by * block..y_end).any(|y| {
            (bx * block..x_end).any(|x| fb.get_pixel(x, y).is_some_and(|c| c != self.background))
        })
    }

    /// Write output directly to stdout.
    pub fn print(&self, fb: &Framebuffer) {
        print!("{}", self.render(fb));
    }
}
