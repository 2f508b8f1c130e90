// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the sync (default), validate or cv handler
// 3. Print results
// 4. Exit with proper code (0 = success, 1 = usage error or failure)
//
// A sync that could only fetch part of the data (no README, no commits)
// still exits 0: the summary is still worth reading.
// =============================================================================

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use portfolio_sync::cli::{Cli, Commands, SyncArgs};
use portfolio_sync::content::{validate_content_dir, FileOutcome, FileReport, FileReportJson};
use portfolio_sync::{cv, logging, sync, sync_repository};
use std::path::Path;

const USAGE: &str = "Usage: portfolio-sync <github-url>\n\
                     Example: portfolio-sync https://github.com/celloopa/ghosted";

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init_logger(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        None => handle_sync(&cli.sync).await,
        Some(Commands::Sync(args)) => handle_sync(&args).await,
        Some(Commands::Validate { content_dir, json }) => handle_validate(&content_dir, json),
        Some(Commands::Cv { path }) => handle_cv(&path),
    }
}

// Handles the default 'sync' action
async fn handle_sync(args: &SyncArgs) -> Result<i32> {
    let Some(repo_url) = args.repo_url.as_deref() else {
        eprintln!("{}", USAGE);
        return Ok(1);
    };

    let config = args.to_config();

    // Check the URL before printing anything about fetching
    let banner = match sync::fetch_banner(repo_url) {
        Ok(banner) => banner,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return Ok(1);
        }
    };

    if !config.json {
        println!("\n{}", banner);
    }

    let report = match sync_repository(repo_url, &config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ Failed to fetch repository data: {}", e);
            return Ok(1);
        }
    };

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text()?);
    }

    Ok(0)
}

// Handles the 'validate' subcommand
fn handle_validate(content_dir: &Path, json: bool) -> Result<i32> {
    let reports = validate_content_dir(content_dir)?;

    if json {
        let rows: Vec<FileReportJson> = reports.iter().map(FileReportJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_validation(&reports);
    }

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    Ok(if invalid > 0 { 1 } else { 0 })
}

fn print_validation(reports: &[FileReport]) {
    if reports.is_empty() {
        println!("⚠️  No content files found");
        return;
    }

    for report in reports {
        match &report.outcome {
            FileOutcome::Valid(entry) => {
                println!("✅ [{}] {} ({})", report.collection, report.path.display(), entry.title());
            }
            FileOutcome::Invalid(errors) => {
                println!("❌ [{}] {}", report.collection, report.path.display());
                for error in &errors.0 {
                    println!("     - {}", error);
                }
            }
            FileOutcome::Unreadable(message) => {
                println!("⚠️  [{}] {}: {}", report.collection, report.path.display(), message);
            }
        }
    }

    let valid = reports.iter().filter(|r| r.is_valid()).count();
    println!();
    println!("📊 Summary:");
    println!("   ✅ Valid: {}", valid);
    println!("   ❌ Invalid: {}", reports.len() - valid);
    println!("   📋 Total: {}", reports.len());
}

// Handles the 'cv' subcommand
fn handle_cv(path: &Path) -> Result<i32> {
    let document = cv::load_cv(path)?;
    println!("{}", cv::render_cv(&document)?);
    Ok(0)
}
