//! Interactive flow: show the font catalog, read a choice and some text,
//! print the rendered banner.
//!
//! Streams are injected so the whole transcript can be driven from memory.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::ascii;
use crate::error::{BannerError, BannerResult};
use crate::fonts::FontLibrary;

/// Font used when the selection is neither an in-range index nor a catalog
/// name. It is not guaranteed to be in the catalog; the library's
/// unknown-font policy applies in that case.
pub const FALLBACK_FONT: &str = "alpha";

const FONT_PROMPT: &str = "Choose a font (number or name): ";
const TEXT_PROMPT: &str = "Enter text to convert: ";

/// How a raw selection turned into a font name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Index(usize, String),
    Name(String),
    Fallback,
}

impl Resolution {
    pub fn font(&self) -> &str {
        match self {
            Resolution::Index(_, font) | Resolution::Name(font) => font,
            Resolution::Fallback => FALLBACK_FONT,
        }
    }
}

/// Parse a selection as a (possibly signed) integer.
pub fn parse_index(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Resolve a selection against the catalog: in-range index first, then an
/// exact name match, then [`FALLBACK_FONT`].
pub fn resolve_font(input: &str, fonts: &[String]) -> Resolution {
    if let Some(n) = parse_index(input) {
        if let Ok(n) = usize::try_from(n) {
            if (1..=fonts.len()).contains(&n) {
                return Resolution::Index(n, fonts[n - 1].clone());
            }
        }
    }
    if let Some(font) = fonts.iter().find(|f| f.as_str() == input) {
        return Resolution::Name(font.clone());
    }
    Resolution::Fallback
}

pub struct InteractiveSession<'a, R, W> {
    library: &'a dyn FontLibrary,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(library: &'a dyn FontLibrary, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
        }
    }

    /// Sorted, de-duplicated catalog. Empty is as fatal as a failed lookup.
    pub fn list_fonts(&self) -> BannerResult<Vec<String>> {
        let mut fonts = self.library.list_fonts()?;
        fonts.sort();
        fonts.dedup();
        if fonts.is_empty() {
            return Err(BannerError::CatalogUnavailable(
                "font library returned no fonts".to_string(),
            ));
        }
        Ok(fonts)
    }

    pub fn prompt_font_choice(&mut self, fonts: &[String]) -> BannerResult<String> {
        writeln!(self.output, "Available fonts:")?;
        for (i, font) in fonts.iter().enumerate() {
            writeln!(self.output, "{:>3}) {}", i + 1, font)?;
        }
        writeln!(self.output)?;

        let selection = self.read_line(FONT_PROMPT)?;
        let resolution = resolve_font(&selection, fonts);
        match &resolution {
            Resolution::Index(n, font) => debug!("selection {:?} is index {} ({})", selection, n, font),
            Resolution::Name(font) => debug!("selection {:?} names font {}", selection, font),
            Resolution::Fallback => {
                debug!("selection {:?} unmatched, using {}", selection, FALLBACK_FONT);
                if !fonts.iter().any(|f| f == FALLBACK_FONT) {
                    warn!(
                        "fallback font '{}' is not in the catalog of {} fonts",
                        FALLBACK_FONT,
                        fonts.len()
                    );
                }
            }
        }
        Ok(resolution.font().to_string())
    }

    pub fn prompt_text(&mut self) -> BannerResult<String> {
        writeln!(self.output)?;
        self.read_line(TEXT_PROMPT)
    }

    pub fn render(&self, font: &str, text: &str) -> BannerResult<String> {
        self.library.render(text, font)
    }

    /// One full pass of the interactive flow.
    pub fn run(mut self) -> BannerResult<()> {
        ascii::write_header(&mut self.output)?;
        let fonts = self.list_fonts()?;
        let font = self.prompt_font_choice(&fonts)?;
        let text = self.prompt_text()?;

        writeln!(self.output)?;
        writeln!(self.output, "Font: {}", font)?;
        writeln!(self.output, "{}", ascii::rule('-', ascii::SEPARATOR_WIDTH))?;
        self.output.flush()?;

        let banner = self.render(&font, &text)?;
        ascii::write_banner(&mut self.output, &banner)?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `prompt`, then read one line with its line ending removed.
    fn read_line(&mut self, prompt: &'static str) -> BannerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BannerError::InputClosed { prompt });
        }
        Ok(chomp(line))
    }
}

fn chomp(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
