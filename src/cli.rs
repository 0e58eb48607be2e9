use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Config;
use crate::error::{CartError, Result};

/// Convert C/C++ source code into ASCII art shaped like an image.
#[derive(Parser, Debug)]
#[command(name = "cart", version, about)]
pub struct Args {
    /// Path to the C/C++ source file
    pub source: Option<PathBuf>,

    /// Path to the image file
    pub image: Option<PathBuf>,

    /// Cell height in pixels
    #[arg(short = 'r', long = "rows", default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Cell width in pixels
    #[arg(short = 'c', long = "cols", default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub cols: u32,

    /// Grayscale threshold; brighter pixels are inked
    #[arg(long = "th", default_value_t = 150)]
    pub threshold: u8,

    /// Ink the dark side of the threshold instead
    #[arg(short = 'i', long = "invert")]
    pub invert: bool,

    /// Replace long tokens with short #define'd names
    #[arg(short = 's', long = "shorten")]
    pub shorten: bool,

    /// Tokens longer than this are shortened
    #[arg(long = "min-len", default_value_t = 5)]
    pub min_len: usize,

    /// Write the thresholded, resized mask to this image file
    #[arg(long = "dump-mask", value_name = "PATH")]
    pub dump_mask: Option<PathBuf>,

    /// Print progress to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            cell_rows: self.rows as usize,
            cell_cols: self.cols as usize,
            threshold: self.threshold,
            invert: self.invert,
            shorten: self.shorten,
            shorten_min_len: self.min_len,
        }
    }

    /// Source and image paths; both are required.
    pub fn paths(&self) -> Result<(&Path, &Path)> {
        let source = self.source.as_deref().ok_or(CartError::MissingInput { what: "source file" })?;
        let image = self.image.as_deref().ok_or(CartError::MissingInput { what: "image file" })?;
        Ok((source, image))
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}
