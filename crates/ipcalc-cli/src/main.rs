use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::io::BufRead;

use ipcalc_cidr::Report;

/// IPv4 CIDR calculator: network, broadcast, usable range, class
#[derive(Parser)]
#[command(name = "ipcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CIDR block to describe (e.g., 192.168.1.15/24); reads one line
    /// from stdin when omitted
    #[arg(value_name = "CIDR")]
    target: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable labeled lines
    Human,
    /// JSON output (pretty-printed)
    Json,
    /// JSON output (compact)
    JsonCompact,
    /// CSV output
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = match cli.target {
        Some(target) => target,
        None => read_line_from_stdin()?,
    };

    if cli.verbose {
        eprintln!("{} Describing: {}", "›".blue(), raw.trim());
    }

    let report = Report::from_raw(&raw)?;
    print_result(&report, cli.output)?;

    Ok(())
}

fn read_line_from_stdin() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read CIDR from stdin")?;
    Ok(line)
}

fn print_result(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => print_human(report),
        OutputFormat::Json => print_json(report, true)?,
        OutputFormat::JsonCompact => print_json(report, false)?,
        OutputFormat::Csv => print_csv(report)?,
    }
    Ok(())
}

fn print_human(report: &Report) {
    for (label, value) in report.fields() {
        println!("{}: {}", label.bold(), value);
    }
}

fn print_json(report: &Report, pretty: bool) -> Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", serde_json::to_string(report)?);
    }
    Ok(())
}

fn print_csv(report: &Report) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record([
        "address",
        "network",
        "broadcast",
        "binary_mask",
        "first_usable",
        "penultimate_usable",
        "usable_hosts",
        "class",
        "private",
    ])?;
    wtr.write_record([
        report.address.to_string(),
        report.network.to_string(),
        report.broadcast.to_string(),
        report.binary_mask.clone(),
        report.first_usable.to_string(),
        report.penultimate_usable.to_string(),
        report.usable_hosts.to_string(),
        report.class.to_string(),
        report.private.to_string(),
    ])?;
    wtr.flush()?;
    Ok(())
}
