//! ANSI color helpers and colorizer constructors.

/// Process-wide color table, name to SGR escape. Read-only configuration;
/// unknown names fall through [`color_code`] unchanged.
static COLORS: &[(&str, &str)] = &[
    ("reset", "\x1b[0m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("purple", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("gray", "\x1b[37m"),
    ("white", "\x1b[97m"),
];

const RESET: &str = "\x1b[0m";

/// The escape sequence for a color name. Unrecognized input passes through
/// unchanged, so callers can supply literal escape sequences directly.
pub fn color_code(name: &str) -> &str {
    COLORS
        .iter()
        .find(|(key, _)| *key == name)
        .map_or(name, |(_, code)| *code)
}

/// The 24-bit foreground escape sequence for an RGB triple.
pub fn rgb_code(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// Colorizer painting every fragment in a named color, or in a literal
/// escape sequence for names not in the table.
pub fn fixed(color: &str) -> impl Fn(usize, usize, &str, &str) -> String {
    let code = color_code(color).to_owned();
    move |_, _, fragment, _| format!("{code}{fragment}{RESET}")
}

/// Colorizer painting every fragment in a fixed 24-bit color.
pub fn fixed_rgb(r: u8, g: u8, b: u8) -> impl Fn(usize, usize, &str, &str) -> String {
    let code = rgb_code(r, g, b);
    move |_, _, fragment, _| format!("{code}{fragment}{RESET}")
}

/// Colorizer interpolating linearly from `start` to `end` across the
/// character positions of the phrase.
pub fn gradient_rgb(start: [u8; 3], end: [u8; 3]) -> impl Fn(usize, usize, &str, &str) -> String {
    move |position, _, fragment, phrase| {
        let len = phrase.chars().count().max(1) as i32;
        let lerp = |a: u8, b: u8| {
            (i32::from(a) + (i32::from(b) - i32::from(a)) * position as i32 / len) as u8
        };
        let code = rgb_code(
            lerp(start[0], end[0]),
            lerp(start[1], end[1]),
            lerp(start[2], end[2]),
        );
        format!("{code}{fragment}{RESET}")
    }
}
