//! Renders a line of text as multi-row large-letter ASCII art.
//!
//! A [`Font`] is an immutable glyph table parsed from the `flf2a` font
//! format, either embedded in the crate or read from a stream. [`compose`]
//! lays a phrase out against the table, scrubbing hard-blanks, collapsing
//! blank rows below the baseline, and optionally running a per-fragment
//! colorizer.
//!
//! ```
//! use bigtext_render::{compose, Font, RenderRequest};
//!
//! let font = Font::builtin("banner").unwrap();
//! let request = RenderRequest::new(&font, "Hi", false);
//! for row in compose(&font, &request, None).unwrap() {
//!     println!("{row}");
//! }
//! ```

mod color;
mod compose;
mod font;

pub use color::{color_code, fixed, fixed_rgb, gradient_rgb, rgb_code};
pub use compose::{compose, Colorizer, ComposeError, RenderRequest};
pub use font::{Font, FontError, FontFile, MalformedFontError};
