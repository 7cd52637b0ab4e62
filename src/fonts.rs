//! Font library backed by `figlet-rs`.
//!
//! The rest of the crate only sees the [`FontLibrary`] trait: a catalog of
//! font names and a way to render text with one of them. [`FigletLibrary`]
//! discovers `*.flf` files on the configured search path and always offers
//! the `standard` font compiled into `figlet-rs`.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use figlet_rs::FIGfont;
use log::{debug, warn};

use crate::config::FontConfig;
use crate::error::{BannerError, BannerResult};

/// Name of the font that ships inside `figlet-rs`.
pub const BUILTIN_FONT: &str = "standard";

const FONT_EXTENSION: &str = "flf";

pub trait FontLibrary {
    /// Names of every font this library can render.
    fn list_fonts(&self) -> BannerResult<Vec<String>>;

    /// Render `text` as a multi-line banner using `font`.
    fn render(&self, text: &str, font: &str) -> BannerResult<String>;
}

pub struct FigletLibrary {
    config: FontConfig,
}

impl FigletLibrary {
    pub fn new(config: FontConfig) -> Self {
        Self { config }
    }

    /// First `<font>.flf` on the search path, if any.
    fn find_font_file(&self, font: &str) -> Option<PathBuf> {
        if font.is_empty() || font.contains(['/', '\\']) {
            return None;
        }
        let file_name = format!("{font}.{FONT_EXTENSION}");
        self.config
            .search_dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file())
    }

    fn load(&self, font: &str) -> BannerResult<FIGfont> {
        match self.find_font_file(font) {
            Some(path) => load_font_file(font, &path),
            None => {
                if font != BUILTIN_FONT {
                    warn!("Font '{}' not found. Using '{}' font.", font, BUILTIN_FONT);
                }
                FIGfont::standard().map_err(|reason| BannerError::RenderFailure {
                    font: BUILTIN_FONT.to_string(),
                    reason,
                })
            }
        }
    }
}

impl FontLibrary for FigletLibrary {
    fn list_fonts(&self) -> BannerResult<Vec<String>> {
        let mut names = BTreeSet::new();
        names.insert(BUILTIN_FONT.to_string());
        for dir in &self.config.search_dirs {
            scan_font_dir(dir, &mut names).map_err(|e| {
                BannerError::CatalogUnavailable(format!("reading {}: {}", dir.display(), e))
            })?;
        }
        Ok(names.into_iter().collect())
    }

    fn render(&self, text: &str, font: &str) -> BannerResult<String> {
        let figfont = self.load(font)?;
        // figlet-rs yields nothing for empty input or text without any known glyph.
        match figfont.convert(text) {
            Some(figure) => Ok(figure.to_string()),
            None => {
                debug!("no glyphs rendered for {:?} in font '{}'", text, font);
                Ok(String::new())
            }
        }
    }
}

fn load_font_file(font: &str, path: &Path) -> BannerResult<FIGfont> {
    debug!("loading font '{}' from {}", font, path.display());
    let bytes = fs::read(path).map_err(|e| BannerError::RenderFailure {
        font: font.to_string(),
        reason: format!("reading {}: {}", path.display(), e),
    })?;
    // Plenty of classic fonts are Latin-1, not UTF-8.
    let content = String::from_utf8_lossy(&bytes);
    FIGfont::from_content(&content).map_err(|reason| BannerError::RenderFailure {
        font: font.to_string(),
        reason,
    })
}

/// Add the stem of every `*.flf` file in `dir`. A missing directory is not an error.
fn scan_font_dir(dir: &Path, names: &mut BTreeSet<String>) -> io::Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("skipping missing font dir {}", dir.display());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(FONT_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.insert(stem.to_string());
        }
    }
    Ok(())
}
