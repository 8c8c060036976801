use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "music-nfo")]
#[command(version = "1.0")]
#[command(about = "Generates .nfo album reports from tagged audio files", long_about = None)]
pub struct Cli {
    /// Report mode: a single album directory, or a discography of album subdirectories
    #[arg(value_enum, ignore_case = true)]
    pub mode: Mode,

    /// Directories to process, one .nfo file written per directory
    #[arg(required = true)]
    pub dirs: Vec<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// The directory itself contains the track files
    Album,
    /// Each subdirectory of the directory is one album
    #[value(alias = "discographie")]
    Discography,
}
