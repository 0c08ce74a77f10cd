use std::{fs, io::Write, process};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use oriscan::{
    cli::{Args, ReportFormat},
    config::AnalysisOptions,
    error::OriscanError,
    input::Input,
    pipeline::{analyze, AnalysisReport},
};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if !args.quiet {
        println!("{}: {}", "k-length".bold(), args.k.to_string().blue().bold());
        println!(
            "{}: {}",
            "window".bold(),
            args.window_size.to_string().blue().bold()
        );
        println!(
            "{}: {}",
            "data".bold(),
            args.path
                .as_deref()
                .map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
                .underline()
                .bold()
                .blue()
        );
        println!();
    }

    if let Err(e) = run(&args) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), OriscanError> {
    let raw = Input::from_option(args.path.as_deref()).read_text()?;

    let options = AnalysisOptions::new()
        .k(args.k)
        .window_size(args.window_size);
    let report = analyze(&raw, &options)?;

    if let Some(path) = &args.plot {
        let png = STANDARD.decode(&report.skew_plot)?;
        fs::write(path, png)?;
    }

    match args.format {
        ReportFormat::Json => {
            let mut out = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        ReportFormat::Text => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!(
        "{}: {}",
        "genome length".bold(),
        report.genome_length.to_string().blue()
    );
    println!(
        "{}: {}",
        "origin candidate".bold(),
        report.oric_center.to_string().blue()
    );
    println!(
        "{}: {}",
        "minimum skew".bold(),
        report.min_skew_value.to_string().blue()
    );
    println!(
        "{}: {}..{}",
        "window".bold(),
        report.window_start.to_string().blue(),
        report.window_end.to_string().blue()
    );
    println!(
        "{} (k = {}, count = {}):",
        "most frequent k-mers".bold(),
        report.k.to_string().blue(),
        report.kmer_count.to_string().blue()
    );
    for kmer in &report.most_frequent_kmers {
        println!("  {kmer}");
    }
    println!(
        "{}: {} base64 bytes",
        "skew plot".bold(),
        report.skew_plot.len().to_string().blue()
    );
}
