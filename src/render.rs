//! End-to-end pipeline: tokens and mask in, finished document out.

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{CartError, Result};
use crate::layout::layout;
use crate::lexer::Lexer;
use crate::mask::{self, Mask};
use crate::normalize::normalize;
use crate::shorten::Shortener;
use crate::token::RawToken;

/// Read and lex a source file. An empty token list is a failure.
pub fn tokenize_file(path: &Path) -> Result<Vec<RawToken>> {
    let source = std::fs::read_to_string(path).map_err(|source| CartError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens = Lexer::new(&source).tokenize().map_err(|source| CartError::Tokenize {
        path: path.to_path_buf(),
        source,
    })?;
    if tokens.is_empty() {
        return Err(CartError::NoTokens { path: path.to_path_buf() });
    }
    debug!(count = tokens.len(), path = %path.display(), "tokenized source");
    Ok(tokens)
}

/// Lay `raw` out over `mask`. `origin` only labels errors.
///
/// The document is the directives, one per line, then a blank line, then the
/// `#define`s for shortened names, then the art followed by any tokens that
/// did not fit.
pub fn render(raw: &[RawToken], mask: &Mask, config: &Config, origin: &Path) -> Result<String> {
    config.validate()?;
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(CartError::EmptyTokenStream { path: origin.to_path_buf() });
    }
    debug!(
        directives = normalized.directives.len(),
        placement = normalized.placement.len(),
        "normalized tokens"
    );

    let mut shortener = config.shorten.then(|| {
        let words = raw
            .iter()
            .map(|t| t.text.as_str())
            .chain(normalized.placement.iter().map(String::as_str));
        Shortener::new(words, config.shorten_min_len)
    });

    let art = layout(
        mask,
        config.cell_rows,
        config.cell_cols,
        &normalized.placement,
        shortener.as_mut(),
    );

    let mut doc = String::new();
    for directive in &normalized.directives {
        doc.push_str(directive);
        doc.push('\n');
    }
    doc.push('\n');
    if let Some(shortener) = shortener {
        let table = shortener.into_table();
        debug!(shortened = table.len(), "short names allocated");
        for definition in table.definitions() {
            doc.push_str(&definition);
            doc.push('\n');
        }
    }
    doc.push_str(&art.into_text());
    Ok(doc)
}

/// Tokenize `source`, load `image` as a mask and render. When `dump_mask`
/// is given the binarized mask is also written there.
pub fn run(source: &Path, image: &Path, config: &Config, dump_mask: Option<&Path>) -> Result<String> {
    let mask = mask::load(image, config)?;
    if let Some(path) = dump_mask {
        mask::save(&mask, path)?;
        debug!(path = %path.display(), "wrote mask");
    }
    let tokens = tokenize_file(source)?;
    render(&tokens, &mask, config, source)
}
