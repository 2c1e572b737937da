//! Example: Check a single media file for silence
//!
//! Usage:
//!   cargo run --example check_file -- <file> [ffmpeg-path]

use silence_probe::{analyze_file, DetectorConfig};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "with_audio.flv".to_string());

    let mut config = DetectorConfig::default();
    if let Some(ffmpeg) = args.next() {
        config.ffmpeg_path = PathBuf::from(ffmpeg);
    }

    match analyze_file(&path, &config) {
        Ok(report) => {
            println!("Results for {}:", path);
            println!("  Silent: {}", report.silent);
            println!("  Samples: {}", report.sample_count);
            if let Some(index) = report.first_sound_index {
                println!("  First sound at sample: {}", index);
            }
            println!("  Transcoded: {}", report.transcoded);
            println!("  Processing time: {:.2} ms", report.processing_time_ms);
        }
        Err(e) => {
            eprintln!("Could not analyze {}: {}", path, e);
            // The fail-safe policy treats unreadable files as silent
            println!("Silent (fallback): true");
        }
    }

    Ok(())
}
