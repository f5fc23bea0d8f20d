// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use colorful::Colorful;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use vibrocheckr::cli::{print_report, Args};
use vibrocheckr::core::{capture, codec, SessionReport, VibrationAnalyzer};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let capture_files = collect_capture_files(&args.input)?;
    if capture_files.is_empty() {
        println!("{}", "No capture files found!".to_string().red());
        return Ok(());
    }

    if !args.json {
        println!("Found {} capture file(s)\n", capture_files.len());
    }

    let analyzer = VibrationAnalyzer::with_settings(args.kinematics, args.settings());

    let progress = if capture_files.len() > 1 && !args.json {
        ProgressBar::new(capture_files.len() as u64).with_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .expect("static progress template"),
        )
    } else {
        ProgressBar::hidden()
    };

    // Captures are independent; analyze in parallel, print in order.
    let results: Vec<(PathBuf, Result<SessionReport>)> = capture_files
        .par_iter()
        .progress_with(progress)
        .map(|path| {
            let report = process_capture(path, &analyzer, args.archive);
            (path.clone(), report)
        })
        .collect();

    let mut failures = 0;
    for (path, result) in results {
        match result {
            Ok(report) => {
                if args.json {
                    println!("{}", report.to_json()?);
                } else {
                    println!("{}", path.display().to_string().cyan());
                    print_report(&report, args.verbose);
                    println!();
                }
            }
            Err(err) => {
                failures += 1;
                eprintln!("{}: {:#}", path.display(), err);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} capture(s) failed analysis", failures);
    }
    Ok(())
}

fn process_capture(path: &Path, analyzer: &VibrationAnalyzer, archive: bool) -> Result<SessionReport> {
    let samples = capture::load_capture(path)
        .with_context(|| format!("loading capture {}", path.display()))?;

    let report = analyzer
        .analyze(&samples)
        .with_context(|| format!("analyzing {}", path.display()))?;

    if archive && path.extension().and_then(|e| e.to_str()) == Some("csv") {
        let archive_path = path.with_extension("csv.zst");
        let sink = File::create(&archive_path)
            .with_context(|| format!("creating archive {}", archive_path.display()))?;
        codec::compress_into(capture::to_csv(&samples).as_bytes(), sink)
            .with_context(|| format!("archiving {}", path.display()))?;
    }

    Ok(report)
}

fn collect_capture_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() {
        if is_capture_file(path) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if entry_path.is_file() && is_capture_file(entry_path) {
                files.push(entry_path.to_path_buf());
            }
        }
        files.sort();
    } else {
        anyhow::bail!("input {} does not exist", path.display());
    }

    Ok(files)
}

fn is_capture_file(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n.to_lowercase(),
        None => return false,
    };
    name.ends_with(".csv") || name.ends_with(".csv.zst")
}
