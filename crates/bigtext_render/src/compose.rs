//! Phrase composition: glyph tables in, trimmed output rows out.

use crate::font::Font;

/// Per-fragment colorization callback.
///
/// Invoked as `(position, row, fragment, phrase)` for every fragment that
/// still contains visible content after hard-blank scrubbing, in increasing
/// `(position, row)` order within one render call. The engine treats it as
/// an opaque pure mapping.
pub type Colorizer = dyn Fn(usize, usize, &str, &str) -> String;

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter { ch: char, position: usize },
}

/// A phrase bound to a single render call.
///
/// Binding applies the font's reading order up front, so composition always
/// iterates the stored phrase left to right.
#[derive(Clone, Debug)]
pub struct RenderRequest {
    phrase: String,
    strict: bool,
}

impl RenderRequest {
    pub fn new(font: &Font, phrase: impl Into<String>, strict: bool) -> Self {
        let mut phrase = phrase.into();
        if font.reverse() {
            phrase = phrase.chars().rev().collect();
        }
        Self { phrase, strict }
    }

    /// The phrase in layout order.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Whether out-of-range characters abort the render instead of falling
    /// back to the `?` glyph.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

/// Composes the phrase into output rows.
///
/// One string per emitted row, each right-trimmed. Rows above the baseline
/// are always emitted; rows at or beyond it only when a glyph contributes
/// visible content there, so unused descender rows collapse away.
///
/// Composition never caches: identical inputs recompose from scratch and
/// yield identical rows.
pub fn compose(
    font: &Font,
    request: &RenderRequest,
    colorizer: Option<&Colorizer>,
) -> Result<Vec<String>, ComposeError> {
    let glyphs = resolve(font, request)?;

    let mut rows = Vec::with_capacity(font.height());
    for r in 0..font.height() {
        let mut row = String::new();
        for (position, glyph) in glyphs.iter().enumerate() {
            let fragment = scrub(&glyph[r], font.hardblank());
            let fragment = match colorizer {
                Some(colorize) if fragment.chars().any(|c| c != ' ') => {
                    colorize(position, r, &fragment, request.phrase())
                },
                _ => fragment,
            };
            row.push_str(&fragment);
        }
        if r < font.baseline() || !row.trim().is_empty() {
            rows.push(row.trim_end_matches(' ').to_owned());
        }
    }

    Ok(rows)
}

/// Maps every phrase character to its glyph, applying the character-range
/// policy before any row is produced.
fn resolve<'font>(
    font: &'font Font,
    request: &RenderRequest,
) -> Result<Vec<&'font [String]>, ComposeError> {
    let mut glyphs = Vec::with_capacity(request.phrase.chars().count());
    for (position, ch) in request.phrase.chars().enumerate() {
        match font.glyph(ch) {
            Some(glyph) => glyphs.push(glyph),
            None if request.strict => {
                return Err(ComposeError::UnsupportedCharacter { ch, position });
            },
            None => glyphs.push(font.question_mark()),
        }
    }
    Ok(glyphs)
}

/// Replaces the hard-blank placeholder with a literal space.
fn scrub(row: &str, hardblank: char) -> String {
    row.replace(hardblank, " ")
}
