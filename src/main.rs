mod ascii;
mod commands;
mod config;
mod error;
mod fonts;
mod session;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::debug;

use crate::commands::ListLimit;
use crate::config::FontConfig;
use crate::fonts::FigletLibrary;
use crate::session::InteractiveSession;

const EXAMPLES: &str = "\
Examples:
  banner-cli                          (interactive)
  banner-cli \"Hello World\"
  banner-cli \"Rust\" --font doom
  banner-cli \"Test\" --font slant --save output.txt
  banner-cli --list-fonts
  banner-cli --preview \"Sample\"";

/// Render text as ASCII-art banners using FIGlet fonts.
///
/// Run without arguments for an interactive session.
#[derive(Parser, Debug)]
#[command(name = "banner-cli", version, after_help = EXAMPLES)]
struct Cli {
    /// Text to convert to ASCII art
    text: Option<String>,

    /// Font to use for TEXT
    #[arg(short, long, default_value = commands::DEFAULT_FONT)]
    font: String,

    /// Also write the output for TEXT to FILE
    #[arg(short, long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// List available fonts (optionally how many, or `all`)
    #[arg(
        short = 'l',
        long,
        value_name = "NUMBER",
        num_args = 0..=1,
        default_missing_value = "20"
    )]
    list_fonts: Option<String>,

    /// Preview TEXT in a handful of fonts
    #[arg(short, long, value_name = "TEXT")]
    preview: Option<String>,

    /// Directory of .flf fonts; replaces the default search path
    #[arg(long, env = "BANNER_FONT_DIR", value_name = "DIR")]
    font_dir: Option<PathBuf>,
}

fn setup_logger() {
    env_logger::init_from_env(env_logger::Env::default().filter_or("BANNER_LOG", "warn"));
}

fn run(cli: Cli) -> Result<()> {
    let library = FigletLibrary::new(FontConfig::resolve(cli.font_dir));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(raw) = cli.list_fonts.as_deref() {
        debug!("listing fonts with limit {:?}", raw);
        return commands::list_fonts(&library, &mut out, ListLimit::parse(raw))
            .context("listing fonts");
    }

    if let Some(text) = cli.preview.as_deref() {
        return commands::preview(&library, &mut out, text).context("previewing fonts");
    }

    if let Some(text) = cli.text.as_deref() {
        return commands::generate(&library, &mut out, text, &cli.font, cli.save.as_deref())
            .with_context(|| format!("rendering '{}' with font '{}'", text, cli.font));
    }

    let stdin = io::stdin();
    InteractiveSession::new(&library, stdin.lock(), out)
        .run()
        .context("interactive session failed")
}

fn main() -> ExitCode {
    setup_logger();
    colored::control::set_override(atty::is(atty::Stream::Stderr));

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
