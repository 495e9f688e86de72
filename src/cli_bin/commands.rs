//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::*;
use log::{debug, info, warn};
use std::path::PathBuf;
use titlematch::{
    CheckerConfig, DocumentChecker, FileReport, FileResolver, Result, TitleMatchError,
};

/// A file that could not be checked at all
struct FileFailure {
    path: PathBuf,
    error: TitleMatchError,
}

/// Execute the check command
///
/// Returns `Ok(false)` when any file is invalid or could not be checked.
/// With `quiet`, passing files are left out of human output.
pub fn check_command(args: CheckArgs, quiet: bool) -> Result<bool> {
    debug!("Executing check command with args: {:?}", args);

    let files = resolve_files(&args.files)?;
    if files.is_empty() {
        warn!("No files found to process");
        return Ok(true);
    }

    let checker = create_checker(&args.headings);
    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for file in files {
        debug!("Checking file: {}", file.display());

        match checker.check_file(&file) {
            Ok(report) => {
                let valid = report.is_valid();
                reports.push(report);
                if !valid && args.fail_fast {
                    break;
                }
            }
            Err(error) if error.is_content_error() || !args.fail_fast => {
                failures.push(FileFailure { path: file, error });
                if args.fail_fast {
                    break;
                }
            }
            Err(error) => return Err(error),
        }
    }

    output_check_results(&reports, &failures, args.format, quiet)?;

    let invalid = reports.iter().filter(|r| !r.is_valid()).count() + failures.len();
    if invalid > 0 {
        info!("{} of {} files failed", invalid, reports.len() + failures.len());
        return Ok(false);
    }

    info!("All {} files passed", reports.len());
    Ok(true)
}

/// Execute the headings command
pub fn headings_command(args: HeadingsArgs) -> Result<bool> {
    debug!("Executing headings command with args: {:?}", args);

    let files = resolve_files(&args.files)?;
    if files.is_empty() {
        warn!("No files found to process");
        return Ok(true);
    }

    let checker = create_checker(&args.headings);
    let mut listing = Vec::new();
    let mut ok = true;

    for file in files {
        match checker.headings(&file) {
            Ok(headings) => listing.push((file, headings)),
            Err(error) => {
                eprintln!("{}: ✗ ERROR - {}", file.display(), error);
                ok = false;
            }
        }
    }

    match args.format {
        ReportFormat::Human => {
            for (path, headings) in &listing {
                println!("{}:", path.display());
                for heading in headings {
                    println!("  {}", heading);
                }
            }
        }
        ReportFormat::Json => {
            let json: Vec<serde_json::Value> = listing
                .iter()
                .map(|(path, headings)| {
                    serde_json::json!({
                        "path": path.to_string_lossy(),
                        "h1s": headings,
                    })
                })
                .collect();
            print_json(&json)?;
        }
        ReportFormat::Simple => {
            for (path, headings) in &listing {
                for heading in headings {
                    println!("{}\t{}", path.display(), heading);
                }
            }
        }
    }

    Ok(ok)
}

// Helper functions

fn resolve_files(file_options: &CommonFileOptions) -> Result<Vec<PathBuf>> {
    let resolver = FileResolver::with_config(file_options.resolver_config());
    resolver.resolve_paths(&file_options.files)
}

fn create_checker(heading_options: &HeadingOptions) -> DocumentChecker {
    DocumentChecker::with_config(CheckerConfig {
        finder: heading_options.finder_config(),
        ..Default::default()
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value)?;
    println!("{}", output);
    Ok(())
}

fn output_check_results(
    reports: &[FileReport],
    failures: &[FileFailure],
    format: ReportFormat,
    quiet: bool,
) -> Result<()> {
    match format {
        ReportFormat::Human => {
            for report in reports {
                match report.result.error() {
                    None if quiet => {}
                    None => println!("{}: ✓ OK", report.path.display()),
                    Some(error) => println!("{}: ✗ {}", report.path.display(), error),
                }
            }
            for failure in failures {
                println!("{}: ✗ ERROR - {}", failure.path.display(), failure.error);
            }
        }
        ReportFormat::Json => {
            let mut json: Vec<serde_json::Value> = Vec::new();
            for report in reports {
                json.push(serde_json::to_value(report)?);
            }
            for failure in failures {
                json.push(serde_json::json!({
                    "path": failure.path.to_string_lossy(),
                    "valid": false,
                    "error": failure.error.to_string(),
                }));
            }
            print_json(&json)?;
        }
        ReportFormat::Simple => {
            for report in reports.iter().filter(|r| !r.is_valid()) {
                println!("{}", report.path.display());
            }
            for failure in failures {
                println!("{}", failure.path.display());
            }
        }
    }

    Ok(())
}
