//! Greedy placement of tokens over the inked cells of a mask.
//!
//! The mask is walked one cell at a time, row band by row band. An inked
//! cell takes the next token, and that token reserves as many cells to its
//! right as it has characters. A blank cell becomes a space. Once tokens run
//! out, inked cells get a `//` filler that reserves two extra cells.

use tracing::debug;

use crate::mask::Mask;
use crate::shorten::Shortener;
use crate::token::{is_directive, width};

/// Placeholder for inked cells once every token has been placed.
pub const FILLER: &str = "//";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// One line per band of cell rows, each terminated by `\n`.
    pub grid: String,
    /// Unplaced tokens, concatenated without separators.
    pub leftover: String,
    /// Number of tokens consumed from the input.
    pub consumed: usize,
}

impl Layout {
    pub fn into_text(self) -> String {
        let mut text = self.grid;
        text.push_str(&self.leftover);
        text
    }
}

/// Walk `mask` in `rows` x `cols` cells. Both must be non-zero;
/// [`Config::validate`](crate::config::Config::validate) checks this for callers
/// going through `render`.
pub fn layout(
    mask: &Mask,
    rows: usize,
    cols: usize,
    tokens: &[String],
    mut shortener: Option<&mut Shortener>,
) -> Layout {
    let mut grid = String::new();
    let mut cursor = 0;

    for y in (0..mask.height()).step_by(rows) {
        let mut x = 0;
        while x < mask.width() {
            if !mask.is_inked(x, y, rows, cols) {
                grid.push(' ');
            } else {
                match tokens.get(cursor) {
                    None => {
                        grid.push_str(FILLER);
                        x += cols * 2;
                    }
                    Some(token) if is_directive(token) => {
                        grid.push('\n');
                        grid.push_str(token);
                        grid.push('\n');
                        cursor += 1;
                    }
                    Some(token) => {
                        match shortener.as_deref_mut() {
                            Some(s) if s.qualifies(token) => grid.push_str(&s.shorten(token)),
                            _ => grid.push_str(token),
                        }
                        // Reserve the original width even when a short name was emitted.
                        x += width(token) * cols;
                        cursor += 1;
                    }
                }
            }
            x += cols;
        }
        grid.push('\n');
    }

    debug!(placed = cursor, total = tokens.len(), "layout finished");
    Layout {
        grid,
        leftover: tokens[cursor..].concat(),
        consumed: cursor,
    }
}
