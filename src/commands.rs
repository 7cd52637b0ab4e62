//! Non-interactive modes: direct render (optionally saved), font listing and
//! multi-font preview.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use log::info;

use crate::ascii;
use crate::error::{BannerError, BannerResult};
use crate::fonts::FontLibrary;

pub const DEFAULT_FONT: &str = "standard";
pub const DEFAULT_LIST_LIMIT: usize = 20;
pub const PREVIEW_FONTS: &[&str] = &["standard", "block", "slant", "banner", "doom"];

/// How many catalog entries `--list-fonts` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLimit {
    All,
    Count(usize),
}

impl ListLimit {
    /// `all` lists everything; anything that is not a count means the default.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            return ListLimit::All;
        }
        ListLimit::Count(raw.trim().parse().unwrap_or(DEFAULT_LIST_LIMIT))
    }

    fn take(self, total: usize) -> usize {
        match self {
            ListLimit::All => total,
            ListLimit::Count(n) => n.min(total),
        }
    }
}

/// Header plus banner, as printed and saved by the direct render mode.
pub fn compose(
    library: &dyn FontLibrary,
    text: &str,
    font: &str,
    generated_at: DateTime<Local>,
) -> BannerResult<String> {
    let art = library.render(text, font)?;
    Ok(format!(
        "ASCII Art Generated: {}\nText: '{}' | Font: {}\n{}\n{}",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        text,
        font,
        ascii::rule('=', 50),
        art
    ))
}

pub fn generate<W: Write>(
    library: &dyn FontLibrary,
    out: &mut W,
    text: &str,
    font: &str,
    save: Option<&Path>,
) -> BannerResult<()> {
    let output = compose(library, text, font, Local::now())?;
    ascii::write_banner(out, &output)?;

    if let Some(path) = save {
        fs::write(path, &output).map_err(|source| BannerError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        info!("wrote {} bytes to {}", output.len(), path.display());
        writeln!(out)?;
        writeln!(out, "Art saved to: {}", path.display())?;
    }
    out.flush()?;
    Ok(())
}

pub fn list_fonts<W: Write>(
    library: &dyn FontLibrary,
    out: &mut W,
    limit: ListLimit,
) -> BannerResult<()> {
    let mut fonts = library.list_fonts()?;
    fonts.sort();
    fonts.dedup();
    let shown = limit.take(fonts.len());

    writeln!(out)?;
    writeln!(
        out,
        "Available Fonts (showing {} of {}):",
        shown,
        fonts.len()
    )?;
    writeln!(out, "{}", ascii::rule('-', 50))?;
    for (i, font) in fonts.iter().take(shown).enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, font)?;
    }
    writeln!(out)?;
    writeln!(out, "Use '--list-fonts all' to see all available fonts.")?;
    out.flush()?;
    Ok(())
}

pub fn preview<W: Write>(library: &dyn FontLibrary, out: &mut W, text: &str) -> BannerResult<()> {
    writeln!(out)?;
    writeln!(out, "Preview of '{}' in different fonts:", text)?;
    writeln!(out, "{}", ascii::rule('-', 60))?;

    for font in PREVIEW_FONTS {
        writeln!(out)?;
        writeln!(out, "Font: {}", font)?;
        writeln!(out, "{}", ascii::rule('-', 40))?;
        let art = library.render(text, font)?;
        ascii::write_banner(out, &art)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct EchoLibrary(Vec<&'static str>);

    impl FontLibrary for EchoLibrary {
        fn list_fonts(&self) -> BannerResult<Vec<String>> {
            Ok(self.0.iter().map(|f| f.to_string()).collect())
        }

        fn render(&self, text: &str, font: &str) -> BannerResult<String> {
            Ok(format!("[{font}] {text}\n"))
        }
    }

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> BannerResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn list_limit_parsing() {
        assert_eq!(ListLimit::parse("all"), ListLimit::All);
        assert_eq!(ListLimit::parse("ALL"), ListLimit::All);
        assert_eq!(ListLimit::parse("5"), ListLimit::Count(5));
        assert_eq!(ListLimit::parse("lots"), ListLimit::Count(DEFAULT_LIST_LIMIT));
        assert_eq!(ListLimit::parse("-2"), ListLimit::Count(DEFAULT_LIST_LIMIT));
    }

    #[test]
    fn compose_has_timestamped_header() {
        let lib = EchoLibrary(vec![]);
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let s = compose(&lib, "Hello", "doom", at).unwrap();
        let expected = format!(
            "ASCII Art Generated: 2024-03-09 14:05:07\nText: 'Hello' | Font: doom\n{}\n[doom] Hello\n",
            "=".repeat(50)
        );
        assert_eq!(s, expected);
    }

    #[test]
    fn list_shows_requested_count() {
        let lib = EchoLibrary(vec!["slant", "banner", "block"]);
        let s = output_of(|out| list_fonts(&lib, out, ListLimit::Count(2)));
        assert!(s.starts_with("\nAvailable Fonts (showing 2 of 3):\n"));
        assert!(s.contains("  1. banner\n  2. block\n"));
        assert!(!s.contains("slant"));
        assert!(s.ends_with("\nUse '--list-fonts all' to see all available fonts.\n"));
    }

    #[test]
    fn list_count_is_capped_by_catalog() {
        let lib = EchoLibrary(vec!["a", "b"]);
        let s = output_of(|out| list_fonts(&lib, out, ListLimit::Count(20)));
        assert!(s.contains("(showing 2 of 2)"));
        let s = output_of(|out| list_fonts(&lib, out, ListLimit::All));
        assert!(s.contains("  2. b\n"));
    }

    #[test]
    fn preview_renders_each_preview_font() {
        let lib = EchoLibrary(vec![]);
        let s = output_of(|out| preview(&lib, out, "Hey"));
        assert!(s.starts_with("\nPreview of 'Hey' in different fonts:\n"));
        for font in PREVIEW_FONTS {
            assert!(s.contains(&format!("Font: {font}\n{}\n[{font}] Hey\n", "-".repeat(40))));
        }
    }

    #[test]
    fn generate_saves_same_output() {
        let lib = EchoLibrary(vec![]);
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("art.txt");
        let s = output_of(|out| generate(&lib, out, "Hi", "slant", Some(path.as_path())));

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.ends_with("[slant] Hi\n"));
        assert!(s.starts_with(&saved));
        assert!(s.ends_with(&format!("\nArt saved to: {}\n", path.display())));
    }

    #[test]
    fn save_into_missing_dir_fails() {
        let lib = EchoLibrary(vec![]);
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("art.txt");
        let mut out = Vec::new();
        let err = generate(&lib, &mut out, "Hi", DEFAULT_FONT, Some(path.as_path())).unwrap_err();
        assert!(matches!(err, BannerError::Save { .. }));
    }
}
