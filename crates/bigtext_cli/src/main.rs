use std::fs::File;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bigtext_render::{compose, Colorizer, Font, RenderRequest};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print and animate large-letter ASCII banners")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a phrase to stdout
    Print(PrintArgs),
    /// Render a phrase and write the rows to a file
    Write(WriteArgs),
    /// Scroll the phrase across the screen for a duration
    Scroll(ScrollArgs),
    /// Flash the phrase on and off for a duration
    Blink(BlinkArgs),
    /// Bounce alternating characters of the phrase off each other
    Dance(DanceArgs),
}

#[derive(Parser, Debug)]
struct PrintArgs {
    /// Phrase to render
    phrase: String,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct WriteArgs {
    /// Phrase to render
    phrase: String,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    /// Phrase to render
    phrase: String,
    /// Total animation time in milliseconds
    #[arg(long, default_value_t = 5000)]
    duration: u64,
    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 200)]
    stillness: u64,
    /// Scroll direction
    #[arg(long, value_enum, default_value = "left")]
    direction: ScrollDirection,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct BlinkArgs {
    /// Phrase to render
    phrase: String,
    /// Total animation time in milliseconds
    #[arg(long, default_value_t = 5000)]
    duration: u64,
    /// Time visible per cycle in milliseconds
    #[arg(long, default_value_t = 400)]
    time_on: u64,
    /// Time cleared per cycle in milliseconds, defaults to the on time
    #[arg(long)]
    time_off: Option<u64>,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct DanceArgs {
    /// Phrase to render
    phrase: String,
    /// Total animation time in milliseconds
    #[arg(long, default_value_t = 5000)]
    duration: u64,
    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 300)]
    freeze: u64,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Built-in font name
    #[arg(long, default_value = "banner")]
    font: String,
    /// Load the font from a file instead of a built-in
    #[arg(long, value_name = "PATH")]
    font_file: Option<PathBuf>,
    /// Fail on characters outside printable ASCII instead of substituting '?'
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Color name or literal escape sequence applied to every fragment
    #[arg(long)]
    color: Option<String>,
    /// Fixed 24-bit color
    #[arg(long, value_name = "R,G,B", value_parser = parse_rgb)]
    rgb: Option<[u8; 3]>,
    /// Gradient endpoints across the phrase
    #[arg(long, value_name = "R,G,B:R,G,B", value_parser = parse_gradient)]
    gradient: Option<([u8; 3], [u8; 3])>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ScrollDirection {
    Left,
    Right,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Print(args) => print(args),
        Commands::Write(args) => write(args),
        Commands::Scroll(args) => scroll(args),
        Commands::Blink(args) => blink(args),
        Commands::Dance(args) => dance(args),
    }
}

fn print(args: PrintArgs) -> Result<()> {
    let font = args.settings.font()?;
    for row in render(&font, &args.phrase, &args.settings)? {
        println!("{row}");
    }
    Ok(())
}

fn write(args: WriteArgs) -> Result<()> {
    let font = args.settings.font()?;
    let rows = render(&font, &args.phrase, &args.settings)?;
    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    Ok(())
}

fn scroll(args: ScrollArgs) -> Result<()> {
    let font = args.settings.font()?;
    // Trailing gap so the tail does not touch the head while rotating.
    let mut phrase: Vec<char> = args.phrase.chars().chain("   ".chars()).collect();
    let end = Instant::now() + Duration::from_millis(args.duration);
    clear_screen()?;
    while Instant::now() < end {
        match args.direction {
            ScrollDirection::Left => phrase.rotate_left(1),
            ScrollDirection::Right => phrase.rotate_right(1),
        }
        let shifted: String = phrase.iter().collect();
        for row in render(&font, &shifted, &args.settings)? {
            println!("{row}");
        }
        thread::sleep(Duration::from_millis(args.stillness));
        clear_screen()?;
    }
    Ok(())
}

fn blink(args: BlinkArgs) -> Result<()> {
    let font = args.settings.font()?;
    let rows = render(&font, &args.phrase, &args.settings)?;
    let time_off = args.time_off.unwrap_or(args.time_on);
    let end = Instant::now() + Duration::from_millis(args.duration);
    clear_screen()?;
    while Instant::now() < end {
        for row in &rows {
            println!("{row}");
        }
        thread::sleep(Duration::from_millis(args.time_on));
        clear_screen()?;
        thread::sleep(Duration::from_millis(time_off));
    }
    Ok(())
}

fn dance(args: DanceArgs) -> Result<()> {
    // Glyphs padded to a common width keep the half-phrases column-aligned.
    let font = args.settings.font()?.evened();
    let (even, odd) = split_alternating(&args.phrase);
    let figures = [
        render(&font, &even, &args.settings)?,
        render(&font, &odd, &args.settings)?,
    ];
    let end = Instant::now() + Duration::from_millis(args.duration);
    clear_screen()?;
    let mut lead = 0;
    while Instant::now() < end {
        for row in figures[lead].iter().chain(&figures[1 - lead]) {
            println!("{row}");
        }
        thread::sleep(Duration::from_millis(args.freeze));
        clear_screen()?;
        lead ^= 1;
    }
    Ok(())
}

fn render(font: &Font, phrase: &str, settings: &RenderSettings) -> Result<Vec<String>> {
    let request = RenderRequest::new(font, phrase, settings.strict);
    let colorizer = settings.colorizer();
    let rows = compose(font, &request, colorizer.as_deref())
        .with_context(|| format!("failed to render {phrase:?}"))?;
    Ok(rows)
}

/// Splits a phrase into two half-phrases, each keeping its characters at
/// their original columns and blanking the other half's.
fn split_alternating(phrase: &str) -> (String, String) {
    let mut even = String::new();
    let mut odd = String::new();
    for (index, ch) in phrase.chars().enumerate() {
        if index % 2 == 0 {
            even.push(ch);
            odd.push(' ');
        } else {
            even.push(' ');
            odd.push(ch);
        }
    }
    (even, odd)
}

fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b[H\x1b[2J")?;
    stdout.flush()?;
    Ok(())
}

impl RenderSettings {
    fn font(&self) -> Result<Font> {
        if let Some(path) = &self.font_file {
            let file =
                File::open(path).with_context(|| format!("failed to open font {path:?}"))?;
            Font::from_reader(file).with_context(|| format!("failed to parse font {path:?}"))
        } else {
            Font::builtin(&self.font)
                .with_context(|| format!("failed to load built-in font {:?}", self.font))
        }
    }

    fn colorizer(&self) -> Option<Box<Colorizer>> {
        if let Some((start, end)) = self.gradient {
            Some(Box::new(bigtext_render::gradient_rgb(start, end)))
        } else if let Some([r, g, b]) = self.rgb {
            Some(Box::new(bigtext_render::fixed_rgb(r, g, b)))
        } else if let Some(color) = self.color.as_deref() {
            Some(Box::new(bigtext_render::fixed(color)))
        } else {
            None
        }
    }
}

fn parse_rgb(value: &str) -> Result<[u8; 3], String> {
    let mut parts = value.split(',').map(|part| part.trim().parse::<u8>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok([r, g, b]),
        _ => Err(format!("expected R,G,B with components 0-255, got {value:?}")),
    }
}

fn parse_gradient(value: &str) -> Result<([u8; 3], [u8; 3]), String> {
    let (start, end) = value
        .split_once(':')
        .ok_or_else(|| format!("expected R,G,B:R,G,B, got {value:?}"))?;
    Ok((parse_rgb(start)?, parse_rgb(end)?))
}
