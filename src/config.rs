use crate::error::{CartError, Result};

/// Parameters for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cell height in pixels. Must be at least 1.
    pub cell_rows: usize,
    /// Cell width in pixels. Must be at least 1.
    pub cell_cols: usize,
    /// Grayscale pixels strictly above this value are foreground.
    pub threshold: u8,
    /// Swap foreground and background after thresholding.
    pub invert: bool,
    /// Replace long tokens with generated short names and `#define` them.
    pub shorten: bool,
    /// Tokens longer than this (trailing space included) are shortened.
    pub shorten_min_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_rows: 5,
            cell_cols: 5,
            threshold: 150,
            invert: false,
            shorten: false,
            shorten_min_len: 5,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject settings no render can use.
    pub fn validate(&self) -> Result<()> {
        if self.cell_rows == 0 || self.cell_cols == 0 {
            return Err(CartError::InvalidCellSize {
                rows: self.cell_rows,
                cols: self.cell_cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn zero_cell_side_is_rejected() {
        let config = Config { cell_cols: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(CartError::InvalidCellSize { rows: 5, cols: 0 })));
    }
}
