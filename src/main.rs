// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use colorful::Colorful;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use coughcheckr::cli::{format_json, format_result, read_wav};
use coughcheckr::core::{classify, AudioClip, ClassificationResult, RiskLabel};
use coughcheckr::testgen;

#[derive(Parser, Debug)]
#[command(name = "coughcheckr")]
#[command(about = "Acoustic cough analysis for respiratory pathology screening")]
struct Args {
    /// WAV recording or directory of recordings
    input: Option<PathBuf>,

    /// Run the synthetic verification bench instead of analyzing files
    #[arg(long)]
    bench: bool,

    /// Emit JSON reports instead of terminal output
    #[arg(long)]
    json: bool,

    /// Print raw feature values with each result
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        run_bench(&args);
        return Ok(());
    }

    let input = args
        .input
        .as_deref()
        .context("provide a WAV file or directory, or run with --bench")?;

    let files = collect_wav_files(input)?;
    if files.is_empty() {
        println!("{}", "No WAV files found!".red());
        return Ok(());
    }

    if files.len() == 1 {
        let outcome = analyze_file(&files[0]);
        print_outcome(&files[0], &outcome, &args);
        return Ok(());
    }

    println!("Found {} recording(s)\n", files.len());

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .expect("static progress template"),
    );

    let mut outcomes: Vec<(PathBuf, Result<ClassificationResult>)> = files
        .par_iter()
        .map(|path| {
            let outcome = analyze_file(path);
            bar.inc(1);
            (path.clone(), outcome)
        })
        .collect();
    bar.finish_and_clear();

    outcomes.sort_by(|a, b| a.0.cmp(&b.0));
    let mut flagged = 0usize;
    for (path, outcome) in &outcomes {
        print_outcome(path, outcome, &args);
        if matches!(
            outcome,
            Ok(result) if result.label == RiskLabel::HighRisk
        ) {
            flagged += 1;
        }
    }

    if !args.json {
        let summary = format!(
            "{} of {} recording(s) flagged high risk",
            flagged,
            outcomes.len()
        );
        if flagged > 0 {
            println!("\n{}", summary.red());
        } else {
            println!("\n{}", summary.green());
        }
    }

    Ok(())
}

fn collect_wav_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if let Some(ext) = entry_path.extension() {
                if ext.to_str().unwrap_or("").eq_ignore_ascii_case("wav") {
                    files.push(entry_path.to_path_buf());
                }
            }
        }
    } else {
        anyhow::bail!("input path does not exist: {}", path.display());
    }

    Ok(files)
}

fn analyze_file(path: &Path) -> Result<ClassificationResult> {
    let clip = read_wav(path).with_context(|| format!("failed to read {}", path.display()))?;
    classify(&clip).with_context(|| format!("failed to analyze {}", path.display()))
}

fn print_outcome(path: &Path, outcome: &Result<ClassificationResult>, args: &Args) {
    let source = path.display().to_string();
    match outcome {
        Ok(result) => {
            if args.json {
                println!("{}", format_json(&source, result));
            } else {
                print!("{}", format_result(&source, result, args.verbose));
            }
        }
        Err(e) => eprintln!("{} {:#}", "error:".red(), e),
    }
}

/// Synthetic verification bench: every case goes through the same `classify`
/// entry point as real recordings.
fn run_bench(args: &Args) {
    println!("{}", "coughcheckr verification bench".bold());
    println!();

    let cases: Vec<(&str, AudioClip)> = vec![
        (
            "quiet noise (near silence)",
            testgen::white_noise(1.0, 16000, 0.005, 11),
        ),
        ("tonal hum (300 Hz)", testgen::sine(1.0, 16000, 300.0, 0.5)),
        ("dry cough burst", testgen::dry_burst(0.5, 16000, 0.8, 11)),
        ("wet cough burst", testgen::wet_burst(0.5, 16000, 0.8, 11)),
    ];

    for (name, clip) in cases {
        match classify(&clip) {
            Ok(result) => {
                if args.json {
                    println!("{}", format_json(name, &result));
                } else {
                    print!("{}", format_result(name, &result, args.verbose));
                }
            }
            Err(e) => eprintln!("{} {name}: {e}", "error:".red()),
        }
    }
}
