use std::path::PathBuf;

pub mod album;
pub mod audio;
pub mod cli;
pub mod utils;

/// Metadata for a single audio track, as read from its embedded tags and
/// stream parameters. Built per track and discarded once the album report
/// string has been rendered.
#[derive(Debug, Clone)]
pub struct TrackInfo {
    pub path: PathBuf,
    pub title: String,
    pub position: u32,
    pub duration_secs: u64,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub codec: String,
    pub bitrate_bps: u32,
    pub channels: usize,
    pub sample_rate_hz: u32,
    pub size_bytes: u64,
}

/// Rendered in place of the year when a track carries no recorded date.
pub const YEAR_PLACEHOLDER: &str = "????";

#[derive(Debug, thiserror::Error)]
pub enum NfoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("metadata extraction error: {0}")]
    Metadata(String),
    #[error("missing '{field}' in {path:?}")]
    MissingField { field: &'static str, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, NfoError>;

// Re-exports for convenience
pub use album::processor::{process_album, process_discography, AlbumStats};
pub use audio::metadata::{MetadataProbe, SymphoniaProbe};
pub use utils::reporting::Reporter;
