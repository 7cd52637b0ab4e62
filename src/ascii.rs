//! Fixed text framing around rendered banners.
//!
//! The interactive header is a slice of lines so it can be written verbatim,
//! and `rule()` builds the dashed/double separators used by every mode.
use std::io::{self, Write};

pub const HEADER: &[&str] = &[
    "==============================",
    " ASCII Text Generator",
    "==============================",
];

/// Width of the separator printed between `Font: ...` and the banner.
pub const SEPARATOR_WIDTH: usize = 30;

/// Write the framed header followed by a blank line.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    for line in HEADER.iter() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)
}

/// A horizontal rule of `width` copies of `ch`.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// Write a rendered banner so that it always ends on a fresh line.
pub fn write_banner<W: Write>(out: &mut W, banner: &str) -> io::Result<()> {
    out.write_all(banner.as_bytes())?;
    if !banner.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
