use log::warn;

use super::MalformedFontError;

/// Decoded font header line.
///
/// The line carries the `flf2a` signature with the hard-blank character
/// appended, then whitespace-separated fields: height, baseline, max length,
/// old layout, comment line count, and optionally print direction, full
/// layout, and code tag count. Only hard-blank, height, baseline, and
/// direction affect rendering; the rest are parsed for structural validity
/// or ignored.
pub(super) struct Header {
    pub hardblank: char,
    pub height: usize,
    pub baseline: usize,
    pub comment_lines: usize,
    pub reverse: bool,
}

const SIGNATURE: &str = "flf2a";

impl Header {
    pub(super) fn parse(line: &str) -> Result<Self, MalformedFontError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(MalformedFontError::HeaderFieldCount(line.to_owned()));
        }

        let signature = fields[0];
        let hardblank = signature
            .strip_prefix(SIGNATURE)
            .ok_or_else(|| MalformedFontError::BadSignature(signature.to_owned()))?;
        let mut chars = hardblank.chars();
        let hardblank = match (chars.next(), chars.next()) {
            (Some(hardblank), None) => hardblank,
            _ => return Err(MalformedFontError::Hardblank(signature.to_owned())),
        };

        let height = parse_field("height", fields[1])?;
        if height == 0 {
            return Err(MalformedFontError::ZeroHeight);
        }
        let baseline: usize = parse_field("baseline", fields[2])?;
        if baseline > height {
            warn!("font baseline {baseline} exceeds height {height}");
        }
        // Structural fields with no bearing on rendering.
        let _: i64 = parse_field("max length", fields[3])?;
        let _: i64 = parse_field("old layout", fields[4])?;
        let comment_lines = parse_field("comment lines", fields[5])?;

        let reverse = match fields.get(6) {
            None | Some(&"0") => false,
            Some(&"1") => true,
            Some(other) => {
                warn!("ignoring unrecognized print direction {other:?}");
                false
            },
        };

        Ok(Self { hardblank, height, baseline, comment_lines, reverse })
    }
}

fn parse_field<T: std::str::FromStr>(
    name: &'static str,
    value: &str,
) -> Result<T, MalformedFontError> {
    value.parse().map_err(|_| MalformedFontError::HeaderField {
        name,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_header() {
        let header = Header::parse("flf2a$ 6 5 16 -1 11 0 24463 229").unwrap();
        assert_eq!(header.hardblank, '$');
        assert_eq!(header.height, 6);
        assert_eq!(header.baseline, 5);
        assert_eq!(header.comment_lines, 11);
        assert!(!header.reverse);
    }

    #[test]
    fn trailing_fields_are_optional() {
        let header = Header::parse("flf2a# 4 3 8 0 2").unwrap();
        assert_eq!(header.hardblank, '#');
        assert!(!header.reverse);
    }

    #[test]
    fn direction_one_reverses() {
        assert!(Header::parse("flf2a$ 4 3 8 0 0 1").unwrap().reverse);
    }

    #[test]
    fn rejects_short_header() {
        assert!(matches!(
            Header::parse("flf2a$ 6 5 16 -1"),
            Err(MalformedFontError::HeaderFieldCount(_))
        ));
    }

    #[test]
    fn rejects_unknown_signature() {
        assert!(matches!(
            Header::parse("tlf2a$ 6 5 16 -1 11"),
            Err(MalformedFontError::BadSignature(_))
        ));
    }

    #[test]
    fn rejects_missing_hardblank() {
        assert!(matches!(
            Header::parse("flf2a 6 5 16 -1 11"),
            Err(MalformedFontError::Hardblank(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_height() {
        assert!(matches!(
            Header::parse("flf2a$ six 5 16 -1 11"),
            Err(MalformedFontError::HeaderField { name: "height", .. })
        ));
    }

    #[test]
    fn rejects_zero_height() {
        assert!(matches!(
            Header::parse("flf2a$ 0 0 16 -1 11"),
            Err(MalformedFontError::ZeroHeight)
        ));
    }
}
