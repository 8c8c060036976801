use clap::Parser;
use music_nfo::{
    album::processor::{process_album, process_discography},
    audio::metadata::SymphoniaProbe,
    cli::commands::{Cli, Mode},
    utils::reporting::Reporter,
};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // Every path must be a directory before anything is processed or written.
    for dir in &cli.dirs {
        if !dir.is_dir() {
            eprintln!("Error: {} is not a directory", dir.display());
            std::process::exit(1);
        }
    }

    let probe = SymphoniaProbe::default();
    let reporter = Reporter::new();

    for dir in &cli.dirs {
        let content = match cli.mode {
            Mode::Album => process_album(&probe, dir),
            Mode::Discography => match process_discography(&probe, dir) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error processing discography {}: {}", dir.display(), e);
                    std::process::exit(1);
                }
            },
        };

        match reporter.write_nfo(&content, dir) {
            Ok(path) => println!("Report saved to: {}", path.display()),
            Err(e) => {
                eprintln!("Error writing report for {}: {}", dir.display(), e);
                std::process::exit(1);
            }
        }
    }
}
