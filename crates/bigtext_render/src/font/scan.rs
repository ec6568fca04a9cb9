use super::header::Header;
use super::{MalformedFontError, FIRST_CHAR, GLYPH_COUNT, LAST_CHAR};

/// Scans the glyph section: for each supported character in ascending code
/// point order, `height` rows each terminated by the end marker.
///
/// The marker character is deduced from the last character of the first
/// glyph row and must be used consistently from then on. Ordinary rows end
/// with exactly one marker; the final row of a glyph ends with exactly two.
/// Markers are stripped before storage.
pub(super) fn scan_glyphs<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    header: &Header,
) -> Result<Vec<Vec<String>>, MalformedFontError> {
    let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
    let mut marker = None;

    for ch in FIRST_CHAR..=LAST_CHAR {
        let mut rows = Vec::with_capacity(header.height);
        let mut remaining = header.height;
        while remaining > 0 {
            let row = header.height - remaining;
            let line = lines.next().ok_or(MalformedFontError::ShortGlyphData {
                ch,
                expected: header.height,
                found: row,
            })?;

            let marker = match marker {
                Some(marker) => marker,
                None => {
                    let last = line.chars().last().ok_or(
                        MalformedFontError::ShortGlyphData {
                            ch,
                            expected: header.height,
                            found: row,
                        },
                    )?;
                    marker = Some(last);
                    last
                },
            };

            let found = line.chars().rev().take_while(|&c| c == marker).count();
            if found == 0 {
                return Err(MalformedFontError::MissingEndMark { ch, row, marker });
            }
            let expected = if remaining == 1 { 2 } else { 1 };
            if found != expected {
                return Err(MalformedFontError::MarkerCount { ch, row, found, expected });
            }

            let text_len = line.chars().count() - found;
            rows.push(line.chars().take(text_len).collect());
            remaining -= 1;
        }

        let mut widths = rows.iter().map(|row: &String| row.chars().count());
        let first = widths.next().unwrap_or(0);
        if widths.any(|width| width != first) {
            return Err(MalformedFontError::UnevenGlyph { ch });
        }
        glyphs.push(rows);
    }

    Ok(glyphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::tests::tiny_font_text;
    use crate::font::{Font, FontError};

    #[test]
    fn single_marker_on_final_row_fails() {
        let text = tiny_font_text(2, 1, "0").replace("$$@@", "$$@");
        assert!(matches!(
            Font::from_bytes(text.as_bytes()),
            Err(FontError::Malformed(MalformedFontError::MarkerCount {
                ch: ' ',
                found: 1,
                expected: 2,
                ..
            }))
        ));
    }

    #[test]
    fn double_marker_on_ordinary_row_fails() {
        let text = tiny_font_text(2, 1, "0").replacen("$$@\n", "$$@@\n", 1);
        assert!(matches!(
            Font::from_bytes(text.as_bytes()),
            Err(FontError::Malformed(MalformedFontError::MarkerCount {
                ch: ' ',
                found: 2,
                expected: 1,
                ..
            }))
        ));
    }

    #[test]
    fn marker_must_stay_consistent() {
        // Switch the '!' glyph to a '%' marker; its rows then never end in
        // the deduced '@'.
        let text = tiny_font_text(2, 1, "0").replacen("!!@", "!!%", 1);
        assert!(matches!(
            Font::from_bytes(text.as_bytes()),
            Err(FontError::Malformed(MalformedFontError::MissingEndMark {
                ch: '!',
                marker: '@',
                ..
            }))
        ));
    }

    #[test]
    fn uneven_glyph_rows_fail() {
        let text = tiny_font_text(2, 1, "0").replacen("!!@\n", "!!!@\n", 1);
        assert!(matches!(
            Font::from_bytes(text.as_bytes()),
            Err(FontError::Malformed(MalformedFontError::UnevenGlyph { ch: '!' }))
        ));
    }

    #[test]
    fn markers_are_stripped_from_stored_rows() {
        let font = Font::from_bytes(tiny_font_text(3, 2, "0").as_bytes()).unwrap();
        for code in 32..=126u8 {
            for row in font.glyph(code as char).unwrap() {
                assert!(!row.ends_with('@'), "marker left in {row:?}");
            }
        }
    }
}
