use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("font catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("could not render with font '{font}': {reason}")]
    RenderFailure { font: String, reason: String },

    #[error("input closed while waiting for: {prompt}")]
    InputClosed { prompt: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("could not save to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type BannerResult<T> = Result<T, BannerError>;
