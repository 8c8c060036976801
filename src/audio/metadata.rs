use std::path::Path;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::{MetadataOptions, MetadataRevision, StandardTagKey, Tag};
use symphonia::core::probe::Hint;
use crate::{NfoError, Result, TrackInfo, YEAR_PLACEHOLDER};

/// Narrow seam over the metadata library so report generation can be
/// exercised with canned records.
pub trait MetadataProbe {
    fn probe(&self, path: &Path) -> Result<TrackInfo>;
}

/// Production probe backed by symphonia's format readers.
#[derive(Default)]
pub struct SymphoniaProbe;

impl MetadataProbe for SymphoniaProbe {
    fn probe(&self, path: &Path) -> Result<TrackInfo> {
        let file = std::fs::File::open(path)?;
        let size_bytes = file.metadata()?.len();

        // Create media source stream
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // Create hint to help with format detection
        let mut hint = Hint::new();
        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(extension);
        }

        // Probe the media source
        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
            .map_err(|e| NfoError::Metadata(e.to_string()))?;

        let mut format = probed.format;
        let mut probe_metadata = probed.metadata;

        // Container-level tags first (ID3v2 surfaces here for mp3), then
        // format-level tags (Vorbis comments for flac). First value wins.
        let mut raw = RawTags::default();
        if let Some(md) = probe_metadata.get() {
            if let Some(revision) = md.current() {
                collect_tags(revision, &mut raw);
            }
        }
        {
            let md = format.metadata();
            if let Some(revision) = md.current() {
                collect_tags(revision, &mut raw);
            }
        }

        let track = format.default_track().ok_or_else(|| {
            NfoError::Metadata(format!("no audio track in {}", path.display()))
        })?;
        let params = &track.codec_params;

        let sample_rate_hz = params
            .sample_rate
            .ok_or_else(|| missing("sampling rate", path))?;
        let channels = params
            .channels
            .map(|c| c.count())
            .ok_or_else(|| missing("channels", path))?;
        let duration_secs = match (params.time_base, params.n_frames) {
            (Some(time_base), Some(n_frames)) => time_base.calc_time(n_frames).seconds,
            _ => return Err(missing("duration", path)),
        };

        log::debug!(
            "probed {}: {} Hz, {} ch, {} s, {} bytes",
            path.display(),
            sample_rate_hz,
            channels,
            duration_secs,
            size_bytes
        );

        build_track_info(path, &raw, sample_rate_hz, channels, duration_secs, size_bytes)
    }
}

/// Tag values gathered across the container and format metadata revisions.
#[derive(Debug, Default)]
struct RawTags {
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    track_number: Option<String>,
    date: Option<String>,
    release_date: Option<String>,
}

fn collect_tags(revision: &MetadataRevision, raw: &mut RawTags) {
    for tag in revision.tags() {
        match tag.std_key {
            Some(StandardTagKey::TrackTitle) => set_if_empty(&mut raw.title, tag),
            Some(StandardTagKey::Artist) => set_if_empty(&mut raw.artist, tag),
            Some(StandardTagKey::Album) => set_if_empty(&mut raw.album, tag),
            Some(StandardTagKey::TrackNumber) => set_if_empty(&mut raw.track_number, tag),
            Some(StandardTagKey::Date) => set_if_empty(&mut raw.date, tag),
            Some(StandardTagKey::ReleaseDate) => set_if_empty(&mut raw.release_date, tag),
            _ => {}
        }
    }
}

fn set_if_empty(slot: &mut Option<String>, tag: &Tag) {
    if slot.is_none() {
        *slot = Some(tag.value.to_string());
    }
}

fn missing(field: &'static str, path: &Path) -> NfoError {
    NfoError::MissingField {
        field,
        path: path.to_path_buf(),
    }
}

/// Track numbers are tagged either as `7` or `7/12`.
fn parse_track_position(value: &str) -> Option<u32> {
    value.split('/').next()?.trim().parse().ok()
}

fn build_track_info(
    path: &Path,
    raw: &RawTags,
    sample_rate_hz: u32,
    channels: usize,
    duration_secs: u64,
    size_bytes: u64,
) -> Result<TrackInfo> {
    let title = raw.title.clone().ok_or_else(|| missing("title", path))?;
    let artist = raw.artist.clone().ok_or_else(|| missing("artist", path))?;
    let album = raw.album.clone().ok_or_else(|| missing("album", path))?;

    let position = raw
        .track_number
        .as_deref()
        .and_then(parse_track_position)
        .ok_or_else(|| missing("track number", path))?;

    // The recorded date is the one tag allowed to be absent.
    let year = raw
        .date
        .clone()
        .or_else(|| raw.release_date.clone())
        .unwrap_or_else(|| YEAR_PLACEHOLDER.to_string());

    let codec = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_uppercase())
        .ok_or_else(|| missing("file extension", path))?;

    let bitrate_bps = if duration_secs > 0 {
        ((size_bytes * 8) / duration_secs) as u32
    } else {
        0
    };

    Ok(TrackInfo {
        path: path.to_path_buf(),
        title,
        position,
        duration_secs,
        artist,
        album,
        year,
        codec,
        bitrate_bps,
        channels,
        sample_rate_hz,
        size_bytes,
    })
}
