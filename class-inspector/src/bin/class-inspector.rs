use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use tracing::{debug, info};

use class_inspector::{
    jar::{io::open_jar, scan_jar, InspectError, ScanOptions},
    logging::init_cli_logger,
    report::{write_json, TextRenderer},
    types::{InspectionEvent, JarReport, StageProgress},
};

const USAGE: &str = "Usage: class-inspector <path-to-jar-file> [<path-to-jar-file> ...]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

/// List the classes in JAR files with their superclass, fields and methods
#[derive(Parser, Debug)]
#[command(name = "class-inspector", version, about, long_about = None)]
struct Args {
    /// JAR files to inspect, in order
    #[arg(value_name = "JAR")]
    jars: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also show class version, access flags, interfaces and Java signatures
    #[arg(long)]
    details: bool,

    /// Only inspect classes whose name starts with this (e.g. `com.example`)
    #[arg(long, value_name = "PKG")]
    prefix: Option<String>,

    /// Show a progress bar on stderr
    #[arg(long)]
    progress: bool,

    /// Colorize class headers
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// More logging on stderr, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => {
            err.print()?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    init_cli_logger(args.verbose);

    if args.jars.is_empty() {
        eprintln!("{}", USAGE);
        return Ok(ExitCode::FAILURE);
    }

    let color = match args.color {
        ColorMode::Auto => io::stdout().is_terminal(),
        ColorMode::Always => true,
        ColorMode::Never => false,
    };
    colored::control::set_override(color);

    let renderer = TextRenderer {
        details: args.details,
        color,
    };
    let options = ScanOptions {
        class_prefix: args.prefix.clone(),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut reports = Vec::new();
    let mut has_errors = false;

    for jar_path in &args.jars {
        let mut zip = match open_jar(jar_path) {
            Ok(zip) => zip,
            Err(err @ InspectError::NotAFile(_)) => {
                out.flush()?;
                eprintln!("Error: {}", err);
                has_errors = true;
                continue;
            }
            Err(err) => {
                out.flush()?;
                eprintln!("Error reading JAR file {}: {}", jar_path.display(), err);
                has_errors = true;
                continue;
            }
        };

        let path = jar_path.display().to_string();
        info!("Inspecting {}", path);
        if args.format == Format::Text {
            renderer.jar_header(&mut out, &path)?;
        }

        let bar = if args.progress {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };

        let mut report = JarReport {
            path,
            ..Default::default()
        };
        let mut write_result = Ok(());

        let scanned = scan_jar(&mut zip, &options, |event| match event {
            InspectionEvent::Started { entries } => bar.set_length(entries as u64),
            InspectionEvent::Progress(StageProgress::Percentage(p)) => {
                let len = bar.length().unwrap_or(0);
                bar.set_position((p * len as f32) as u64);
            }
            InspectionEvent::Progress(StageProgress::Done) => bar.finish_and_clear(),
            InspectionEvent::Class(class) => match args.format {
                Format::Text => {
                    if write_result.is_ok() {
                        write_result = renderer.class(&mut out, &class);
                    }
                }
                Format::Json => report.classes.push(class),
            },
            InspectionEvent::Failure(failure) => {
                if write_result.is_ok() {
                    write_result = out.flush();
                }
                bar.suspend(|| {
                    eprintln!(
                        "Error inspecting class {}: {}",
                        failure.entry, failure.message
                    )
                });
                report.failures.push(failure);
            }
            InspectionEvent::Finished(stats) => debug!("{:?}", stats),
        });
        write_result?;

        match scanned {
            Ok(_) => reports.push(report),
            Err(err) => {
                out.flush()?;
                eprintln!("Error reading JAR file {}: {}", jar_path.display(), err);
                has_errors = true;
            }
        }
    }

    if args.format == Format::Json {
        write_json(&reports, &mut out)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(if has_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
