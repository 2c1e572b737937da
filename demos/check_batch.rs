//! Example: Check multiple media files for silence in parallel
//!
//! Usage:
//!   cargo run --release --example check_batch -- [--jobs N] [--json] [--symphonia] <file1> <file2> ...
//!
//! Notes:
//! - Parallelism is across files. Each file gets its own temporary artifact.
//! - Default workers: (available CPU threads - 1), keeping one core free for the system.

use rayon::prelude::*;
use silence_probe::{analyze_file, DetectorConfig, SilenceReport, TranscoderKind};
use std::env;
use std::time::Instant;

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut config = DetectorConfig::default();
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--symphonia" => config.transcoder = TranscoderKind::Symphonia,
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: check_batch [--jobs N] [--json] [--symphonia] <file1> <file2> ...\n\
                     \n\
                     --jobs N       Parallel workers (default: CPU-1)\n\
                     --json         Emit one JSON object per line (JSONL)\n\
                     --symphonia    Transcode in-process instead of running ffmpeg\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one media file path. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} files, jobs={}", paths.len(), jobs);

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let outs: Vec<(String, Result<SilenceReport, String>)> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let result = analyze_file(path, &config).map_err(|e| e.to_string());
                (path.clone(), result)
            })
            .collect()
    });

    for (idx, (path, result)) in outs.iter().enumerate() {
        match (json, result) {
            (true, Ok(report)) => println!(
                "{{\"file\":{},\"report\":{}}}",
                serde_json::to_string(path)?,
                serde_json::to_string(report)?
            ),
            (true, Err(e)) => println!(
                "{{\"file\":{},\"silent\":true,\"error\":{}}}",
                serde_json::to_string(path)?,
                serde_json::to_string(e)?
            ),
            (false, Ok(report)) => println!(
                "[{}/{}] {}: silent={} samples={} time={:.2}ms",
                idx + 1,
                outs.len(),
                path,
                report.silent,
                report.sample_count,
                report.processing_time_ms
            ),
            (false, Err(e)) => println!(
                "[{}/{}] {}: silent=true (fallback) ERROR: {}",
                idx + 1,
                outs.len(),
                path,
                e
            ),
        }
    }

    let ok = outs.iter().filter(|(_, r)| r.is_ok()).count();
    let silent = outs
        .iter()
        .filter(|(_, r)| r.as_ref().map(|rep| rep.silent).unwrap_or(true))
        .count();
    eprintln!(
        "Done: ok={}/{} silent={} wall={:.0}ms",
        ok,
        outs.len(),
        silent,
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
