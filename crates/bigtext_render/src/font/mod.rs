//! Font model: parsing glyph font definitions into immutable glyph tables.

mod builtin;
mod header;
mod scan;

use std::io::Read;

use log::debug;

pub use builtin::FontFile;
use header::Header;

/// First supported code point (`' '`).
pub(crate) const FIRST_CHAR: char = ' ';
/// Last supported code point (`'~'`).
pub(crate) const LAST_CHAR: char = '~';
/// Number of glyphs in every font: the printable ASCII range.
pub(crate) const GLYPH_COUNT: usize = LAST_CHAR as usize - FIRST_CHAR as usize + 1;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("no built-in font named {0:?}")]
    NotFound(String),
    #[error("malformed font: {0}")]
    Malformed(#[from] MalformedFontError),
    #[error("failed to read font stream: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural parse failure. Parsing aborts entirely; no partial table is
/// ever returned.
#[derive(Debug, thiserror::Error)]
pub enum MalformedFontError {
    #[error("missing header line")]
    MissingHeader,
    #[error("header {0:?} has fewer than 6 fields")]
    HeaderFieldCount(String),
    #[error("header signature {0:?} does not start with \"flf2a\"")]
    BadSignature(String),
    #[error("signature {0:?} must append exactly one hard-blank character")]
    Hardblank(String),
    #[error("cannot parse {value:?} as the {name} header field")]
    HeaderField { name: &'static str, value: String },
    #[error("height must be at least 1")]
    ZeroHeight,
    #[error("font data ends inside the glyph for {ch:?}: found {found} of {expected} rows")]
    ShortGlyphData { ch: char, expected: usize, found: usize },
    #[error("row {row} of the glyph for {ch:?} does not end with the marker {marker:?}")]
    MissingEndMark { ch: char, row: usize, marker: char },
    #[error("row {row} of the glyph for {ch:?} ends with {found} marker characters, expected {expected}")]
    MarkerCount { ch: char, row: usize, found: usize, expected: usize },
    #[error("glyph for {ch:?} has inconsistent row widths")]
    UnevenGlyph { ch: char },
}

/// An immutable glyph table.
///
/// Every supported character owns exactly `height` rows of glyph cells, and
/// the table is read-only once constructed, so it can be shared across
/// concurrent render calls without coordination.
#[derive(Clone, Debug)]
pub struct Font {
    height: usize,
    baseline: usize,
    hardblank: char,
    reverse: bool,
    glyphs: Vec<Vec<String>>,
}

impl Font {
    /// Loads a font compiled into the crate by name.
    pub fn builtin(name: &str) -> Result<Self, FontError> {
        let file =
            FontFile::from_name(name).ok_or_else(|| FontError::NotFound(name.to_owned()))?;
        let font = Self::from_bytes(file.contents().as_bytes())?;
        debug!(
            "loaded built-in font {name:?}: height {}, baseline {}",
            font.height, font.baseline
        );
        Ok(font)
    }

    /// Parses a font definition from an arbitrary byte stream.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, FontError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Parses a font definition from an in-memory byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let text = String::from_utf8_lossy(bytes);
        let mut lines = text.lines().map(|line| line.strip_suffix('\r').unwrap_or(line));

        let header_line = lines.next().ok_or(MalformedFontError::MissingHeader)?;
        let header = Header::parse(header_line)?;
        for _ in 0..header.comment_lines {
            lines.next();
        }

        let glyphs = scan::scan_glyphs(&mut lines, &header)?;
        let trailing = lines.count();
        if trailing > 0 {
            debug!("ignoring {trailing} lines after the glyph data");
        }

        Ok(Self {
            height: header.height,
            baseline: header.baseline,
            hardblank: header.hardblank,
            reverse: header.reverse,
            glyphs,
        })
    }

    /// Number of text rows per glyph, uniform across the table.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row index below which trailing blank rows collapse away in output.
    pub fn baseline(&self) -> usize {
        self.baseline
    }

    /// Placeholder character rendered as a space but never treated as an
    /// ordinary word-space inside glyph rows.
    pub fn hardblank(&self) -> char {
        self.hardblank
    }

    /// Whether phrases must be character-reversed before layout.
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// The glyph rows for `ch`, or `None` outside the supported range.
    pub fn glyph(&self, ch: char) -> Option<&[String]> {
        if (FIRST_CHAR..=LAST_CHAR).contains(&ch) {
            Some(&self.glyphs[ch as usize - FIRST_CHAR as usize])
        } else {
            None
        }
    }

    /// The `?` glyph, the non-strict fallback for out-of-range characters.
    /// Always present: the table covers the full printable ASCII range.
    pub(crate) fn question_mark(&self) -> &[String] {
        &self.glyphs['?' as usize - FIRST_CHAR as usize]
    }

    /// A copy of this table with every glyph right-padded to the width of
    /// the widest glyph, so interleaved phrases stay column-aligned.
    pub fn evened(&self) -> Self {
        let widest = self
            .glyphs
            .iter()
            .flat_map(|rows| rows.iter().map(|row| row.chars().count()))
            .max()
            .unwrap_or(0);
        let glyphs = self
            .glyphs
            .iter()
            .map(|rows| {
                rows.iter()
                    .map(|row| {
                        let mut row = row.clone();
                        let pad = widest.saturating_sub(row.chars().count());
                        row.extend(std::iter::repeat(' ').take(pad));
                        row
                    })
                    .collect()
            })
            .collect();
        Self {
            height: self.height,
            baseline: self.baseline,
            hardblank: self.hardblank,
            reverse: self.reverse,
            glyphs,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn tiny_font_text(height: usize, baseline: usize, direction: &str) -> String {
        use std::fmt::Write as _;

        let mut text = format!("flf2a$ {height} {baseline} 6 -1 1 {direction}\n");
        text.push_str("a comment line\n");
        for code in 32..=126u8 {
            let ch = code as char;
            for row in 0..height {
                // '@' is the end marker in this fixture, so the '@' glyph
                // cannot draw with its own character.
                let cell = match ch {
                    ' ' => '$',
                    '@' => 'o',
                    _ => ch,
                };
                let marks = if row == height - 1 { "@@" } else { "@" };
                writeln!(text, "{cell}{cell}{marks}").unwrap();
            }
        }
        text
    }

    #[test]
    fn parses_tiny_font() {
        let font = Font::from_bytes(tiny_font_text(3, 2, "0").as_bytes()).unwrap();
        assert_eq!(font.height(), 3);
        assert_eq!(font.baseline(), 2);
        assert_eq!(font.hardblank(), '$');
        assert!(!font.reverse());
        let glyph = font.glyph('A').unwrap();
        assert_eq!(glyph, ["AA", "AA", "AA"]);
    }

    #[test]
    fn every_supported_character_has_height_rows() {
        let font = Font::from_bytes(tiny_font_text(4, 3, "0").as_bytes()).unwrap();
        for code in 32..=126u8 {
            let glyph = font.glyph(code as char).unwrap();
            assert_eq!(glyph.len(), 4, "glyph {:?}", code as char);
        }
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let font = Font::from_bytes(tiny_font_text(2, 1, "0").as_bytes()).unwrap();
        assert!(font.glyph('\u{e9}').is_none());
        assert!(font.glyph('\t').is_none());
    }

    #[test]
    fn reads_from_stream() {
        let text = tiny_font_text(2, 1, "0");
        let font = Font::from_reader(text.as_bytes()).unwrap();
        assert_eq!(font.height(), 2);
    }

    #[test]
    fn direction_field_sets_reverse() {
        let font = Font::from_bytes(tiny_font_text(2, 1, "1").as_bytes()).unwrap();
        assert!(font.reverse());
    }

    #[test]
    fn unknown_builtin_name_fails() {
        assert!(matches!(
            Font::builtin("no-such-font"),
            Err(FontError::NotFound(name)) if name == "no-such-font"
        ));
    }

    #[test]
    fn short_data_fails() {
        let text = tiny_font_text(3, 2, "0");
        let truncated = text.lines().take(20).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            Font::from_bytes(truncated.as_bytes()),
            Err(FontError::Malformed(MalformedFontError::ShortGlyphData { .. }))
        ));
    }

    #[test]
    fn evened_pads_every_glyph_to_the_widest() {
        let font = Font::builtin("banner").unwrap();
        let evened = font.evened();
        let width = evened.glyph(' ').unwrap()[0].chars().count();
        for code in 32..=126u8 {
            for row in evened.glyph(code as char).unwrap() {
                assert_eq!(row.chars().count(), width);
            }
        }
    }
}
