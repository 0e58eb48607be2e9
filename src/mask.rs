//! Binary pixel mask and the image loading that produces it.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use tracing::debug;

use crate::config::Config;
use crate::error::{CartError, Result};

/// Immutable foreground/background grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Build a mask from row-major bits. `bits.len()` must equal `width * height`.
    pub fn new(width: usize, height: usize, bits: Vec<bool>) -> Self {
        debug_assert_eq!(bits.len(), width * height, "mask bits do not match {}x{}", width, height);
        Mask { width, height, bits }
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                bits.push(f(x, y));
            }
        }
        Mask { width, height, bits }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-range pixels read as background.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    /// Count foreground pixels in the `w`x`h` block at (`x`, `y`), clipped to the mask.
    pub fn foreground_in(&self, x: usize, y: usize, w: usize, h: usize) -> usize {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        (y.min(y_end)..y_end)
            .map(|row| {
                let base = row * self.width;
                self.bits[base + x.min(x_end)..base + x_end].iter().filter(|&&b| b).count()
            })
            .sum()
    }

    /// Strict majority: a cell with exactly half its pixels set is not inked.
    pub fn is_inked(&self, x: usize, y: usize, rows: usize, cols: usize) -> bool {
        2 * self.foreground_in(x, y, cols, rows) > rows * cols
    }

    /// Foreground white, background black.
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            if self.get(x as usize, y as usize) { Luma([255]) } else { Luma([0]) }
        })
    }
}

/// Binarize a grayscale image: pixels brighter than `threshold` are
/// foreground, flipped when `invert` is set.
pub fn binarize(gray: &GrayImage, threshold: u8, invert: bool) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let on = (gray.get_pixel(x, y)[0] > threshold) != invert;
        if on { Luma([255]) } else { Luma([0]) }
    })
}

/// Threshold, invert and resize a grayscale image into a mask whose sides
/// are whole multiples of the cell size.
pub fn from_gray(gray: &GrayImage, config: &Config) -> Result<Mask> {
    config.validate()?;
    let (rows, cols) = (config.cell_rows, config.cell_cols);
    let (width, height) = gray.dimensions();
    let target_w = (width as usize / cols) * cols;
    let target_h = (height as usize / rows) * rows;
    if target_w == 0 || target_h == 0 {
        return Err(CartError::ImageTooSmall {
            width,
            height,
            cols: cols as u32,
            rows: rows as u32,
        });
    }

    let binary = binarize(gray, config.threshold, config.invert);
    let resized = if (target_w as u32, target_h as u32) == (width, height) {
        binary
    } else {
        imageops::resize(&binary, target_w as u32, target_h as u32, FilterType::Nearest)
    };
    debug!(width, height, target_w, target_h, "resized mask");

    let bits = resized.pixels().map(|p| p[0] != 0).collect();
    Ok(Mask::new(target_w, target_h, bits))
}

/// Load an image file as a mask.
pub fn load(path: &Path, config: &Config) -> Result<Mask> {
    let img = image::open(path).map_err(|source| CartError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    from_gray(&img.to_luma8(), config)
}

/// Write the mask as an image; the format follows the file extension.
pub fn save(mask: &Mask, path: &Path) -> Result<()> {
    mask.to_image().save(path).map_err(|source| CartError::WriteMask {
        path: path.to_path_buf(),
        source,
    })
}
