use std::fs;
use std::path::{Path, PathBuf};

use bytesize::ByteSize;

use crate::album::processor::AlbumStats;
use crate::utils::file_ops::nfo_output_path;
use crate::{Result, TrackInfo};

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders one album block in the fixed NFO layout.
    ///
    /// Album-level fields come from the first track of the sorted list; every
    /// track in an album is assumed to share them.
    pub fn render_album(&self, tracks: &[TrackInfo], stats: &AlbumStats) -> String {
        let Some(lead) = tracks.first() else {
            return String::new();
        };

        let mut out = String::new();
        out.push_str("----------------------------------------------------------------------------\n");
        out.push_str("============================== Artiste - Album =============================\n");
        out.push_str("----------------------------------------------------------------------------\n\n");

        out.push_str(&format!("Artiste\t\t\t : {}\n", lead.artist));
        out.push_str(&format!("Album\t\t\t : {}\n", lead.album));
        out.push_str(&format!("Année\t\t\t : {}\n\n", lead.year));

        out.push_str("Source\t\t\t : CD\n");
        out.push_str(&format!("Codec\t\t\t : {}\n", lead.codec));
        out.push_str(&format!("Bitrate\t\t\t : {} Kbps\n", lead.bitrate_bps / 1000));
        out.push_str(&format!("Canaux\t\t\t : {}\n", lead.channels));
        out.push_str(&format!("Fréquence\t\t : {} Hz\n\n", lead.sample_rate_hz));

        out.push_str(&format!("Nombre de pistes\t : {}\n", stats.track_count));
        out.push_str(&format!(
            "Temps de lecture total\t : {} min {} sec\n",
            stats.total_duration_secs / 60,
            stats.total_duration_secs % 60
        ));
        out.push_str(&format!(
            "Taille totale\t\t : {}\n\n",
            ByteSize::b(stats.total_size_bytes).display().si()
        ));

        out.push_str("----------------------------------------------------------------------\n");
        out.push_str("============================ Liste Pistes ============================\n");
        out.push_str("----------------------------------------------------------------------\n\n");

        for track in tracks {
            println!("---{}", track.title);
            out.push_str(&format!(
                "{:3} : {:<50} \t[{}:{:02}]\n",
                track.position,
                track.title,
                track.duration_secs / 60,
                track.duration_secs % 60
            ));
        }

        out.push_str("\n============================================================================\n");

        out
    }

    /// Writes the report for `dir` as `<basename>.nfo` in the working
    /// directory, overwriting any previous report of the same name.
    pub fn write_nfo(&self, content: &str, dir: &Path) -> Result<PathBuf> {
        let path = nfo_output_path(dir);
        fs::write(&path, content)?;
        Ok(path)
    }
}
