use std::path::Path;

use crate::audio::metadata::MetadataProbe;
use crate::utils::file_ops::{list_album_dirs, list_album_tracks};
use crate::utils::reporting::Reporter;
use crate::{Result, TrackInfo};

/// Aggregate figures for one album.
#[derive(Debug)]
pub struct AlbumStats {
    pub track_count: usize,
    pub total_duration_secs: u64,
    pub total_size_bytes: u64,
}

impl AlbumStats {
    pub fn from_tracks(tracks: &[TrackInfo]) -> Self {
        Self {
            track_count: tracks.len(),
            total_duration_secs: tracks.iter().map(|t| t.duration_secs).sum(),
            total_size_bytes: tracks.iter().map(|t| t.size_bytes).sum(),
        }
    }
}

/// Builds the report block for one album directory.
///
/// All-or-nothing: if any track's metadata cannot be read, the whole album
/// is abandoned and contributes an empty string, never a partial report.
pub fn process_album(probe: &dyn MetadataProbe, album_dir: &Path) -> String {
    match read_album_tracks(probe, album_dir) {
        Ok(Some(tracks)) => {
            let stats = AlbumStats::from_tracks(&tracks);
            Reporter::new().render_album(&tracks, &stats)
        }
        Ok(None) => String::new(),
        Err(e) => {
            log::error!(
                "failed to read track data for album {}: {}",
                album_dir.display(),
                e
            );
            String::new()
        }
    }
}

fn read_album_tracks(
    probe: &dyn MetadataProbe,
    album_dir: &Path,
) -> Result<Option<Vec<TrackInfo>>> {
    let names = list_album_tracks(album_dir)?;
    if names.is_empty() {
        log::warn!("no tracks found in {}", album_dir.display());
        return Ok(None);
    }

    println!("Processing album {}...", album_dir.display());

    let mut tracks = names
        .iter()
        .map(|name| probe.probe(&album_dir.join(name)))
        .collect::<Result<Vec<_>>>()?;

    // Stable sort keeps filesystem order for duplicate positions.
    tracks.sort_by_key(|t| t.position);

    Ok(Some(tracks))
}

/// Concatenates the reports of every album subdirectory, in name order.
/// Albums that fail or hold no tracks contribute nothing.
pub fn process_discography(probe: &dyn MetadataProbe, dir: &Path) -> Result<String> {
    println!("=== Discographie {} ===", dir.display());

    let mut out = String::new();
    for album in list_album_dirs(dir)? {
        out.push_str(&process_album(probe, &dir.join(album)));
    }
    Ok(out)
}
