//! Fonts compiled into the crate.

macro_rules! fonts {
    ($($variant:ident => $name:expr,)*) => {
        /// A font resource embedded in the crate.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[non_exhaustive]
        pub enum FontFile {
            $(
                #[doc = concat!("Font `", $name, ".flf`")]
                $variant,
            )*
        }

        impl FontFile {
            /// Every embedded font.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The raw contents of the font file.
            pub const fn contents(self) -> &'static str {
                match self {
                    $(Self::$variant => include_str!(concat!("../../fonts/", $name, ".flf")),)*
                }
            }

            /// The lookup name of the font.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Resolves a font name to an embedded resource.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

fonts! {
    Banner => "banner",
}

#[cfg(test)]
mod tests {
    use super::FontFile;
    use crate::font::Font;

    #[test]
    fn all_embedded_fonts_parse() {
        for file in FontFile::ALL {
            let font = Font::from_bytes(file.contents().as_bytes())
                .unwrap_or_else(|e| panic!("failed to parse {:?}: {e}", file.name()));
            assert!(font.height() > 0);
        }
    }

    #[test]
    fn names_round_trip() {
        for file in FontFile::ALL {
            assert_eq!(FontFile::from_name(file.name()), Some(*file));
        }
    }

    #[test]
    fn banner_metadata() {
        let font = Font::builtin("banner").unwrap();
        assert_eq!(font.height(), 6);
        assert_eq!(font.baseline(), 5);
        assert_eq!(font.hardblank(), '$');
        assert!(!font.reverse());
    }
}
