use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::Result;

/// Case-sensitive suffix match on the two accepted container formats.
fn track_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.(mp3|flac)$").unwrap())
}

/// Lists the track file names directly inside `album_dir`, sorted.
///
/// Only regular files whose name ends in `.mp3` or `.flac` qualify;
/// subdirectories are skipped even when their name matches.
pub fn list_album_tracks(album_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(album_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if track_name_pattern().is_match(name) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Lists the album subdirectory names directly inside `dir`, sorted.
pub fn list_album_dirs(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Report file name for a directory: `<basename of the resolved path>.nfo`,
/// relative to the current working directory.
pub fn nfo_output_path(dir: &Path) -> PathBuf {
    let resolved = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    let basename = resolved
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("album");
    PathBuf::from(format!("{basename}.nfo"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_only_matching_tracks_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.flac"), b"x").unwrap();
        fs::write(dir.path().join("a.mp3"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(dir.path().join("cover.jpg"), b"x").unwrap();

        let names = list_album_tracks(dir.path()).unwrap();
        assert_eq!(names, vec!["a.mp3".to_string(), "b.flac".to_string()]);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("loud.MP3"), b"x").unwrap();
        fs::write(dir.path().join("quiet.Flac"), b"x").unwrap();
        fs::write(dir.path().join("kept.mp3"), b"x").unwrap();

        let names = list_album_tracks(dir.path()).unwrap();
        assert_eq!(names, vec!["kept.mp3".to_string()]);
    }

    #[test]
    fn subdirectories_are_excluded_even_with_audio_names() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("fake.mp3")).unwrap();
        fs::write(dir.path().join("real.mp3"), b"x").unwrap();

        let names = list_album_tracks(dir.path()).unwrap();
        assert_eq!(names, vec!["real.mp3".to_string()]);
    }

    #[test]
    fn empty_directory_lists_no_tracks() {
        let dir = tempdir().unwrap();
        assert_eq!(list_album_tracks(dir.path()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(list_album_tracks(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn album_dirs_exclude_files_and_come_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Repeater")).unwrap();
        fs::create_dir_all(dir.path().join("Argument")).unwrap();
        fs::write(dir.path().join("stray.mp3"), b"x").unwrap();

        let names = list_album_dirs(dir.path()).unwrap();
        assert_eq!(names, vec!["Argument".to_string(), "Repeater".to_string()]);
    }

    #[test]
    fn output_path_uses_the_resolved_basename() {
        let dir = tempdir().unwrap();
        let album = dir.path().join("13 Songs");
        fs::create_dir_all(&album).unwrap();
        assert_eq!(nfo_output_path(&album), PathBuf::from("13 Songs.nfo"));
    }
}
