mod permission;
mod report;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser};
use folder_sizes_common::{MaxDepth, ScanConfig};
use folder_sizes_scanner::{scan_folder_sizes, EnumerateProgress, SizeProgressCb};

/// List the largest subfolders under a root path and persist the report.
#[derive(Parser, Debug)]
#[command(
    name = "folder-sizes",
    version,
    about = "Report the largest subfolders under a path, to console and log file"
)]
struct Args {
    /// Root directory to scan (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// How many folders to list in the report
    #[arg(long, default_value_t = 10)]
    first: usize,

    /// Report file path (defaults to FolderSizes_<timestamp>.log)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Recursion depth: a non-negative integer, or "0" / "max" for unbounded
    #[arg(long, default_value = "2")]
    depth: String,

    /// Include folders carrying the system attribute
    #[arg(long = "include-system-folders")]
    include_system_folders: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("[FolderSizes] error: {e:#}");
        eprintln!();
        let _ = Args::command().print_help();
        eprintln!();
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // 权限前置检查：只在进程入口做一次，核心代码不感知
    if !permission::is_elevated_process() {
        return Err(anyhow!(
            "administrator privileges are required; restart elevated"
        ));
    }

    let root = match args.path {
        Some(p) => p,
        None => std::env::current_dir().context("cannot resolve current directory")?,
    };
    if !root.is_dir() {
        return Err(anyhow!(
            "root path does not exist or is not a directory: {}",
            root.display()
        ));
    }

    let depth: MaxDepth = args.depth.parse()?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(report::default_output_name()));

    let config = ScanConfig {
        root,
        first: args.first,
        output,
        depth,
        include_system: args.include_system_folders,
    };

    let enum_progress: EnumerateProgress = Box::new(|count, path| {
        eprintln!("[FolderSizes] found folder #{}: {}", count, path);
    });
    let size_progress: SizeProgressCb = Box::new(|p| {
        eprintln!(
            "[FolderSizes] sized {}/{} folders, eta {:.0}s",
            p.completed, p.total, p.eta_secs
        );
    });

    log::info!(
        "scan start: {} (depth: {}, include system: {})",
        config.root.display(),
        args.depth,
        config.include_system
    );
    let result = scan_folder_sizes(&config, Some(&enum_progress), Some(&size_progress))?;
    log::info!(
        "scan done: {} folders, {} skipped, {} ms",
        result.folder_count,
        result.skipped,
        result.scan_time_ms
    );

    let table = report::render_table(result.top(config.first));
    print!("{}", table);
    println!();
    println!(
        "folders: {} | skipped: {} | elapsed: {} ms",
        result.folder_count, result.skipped, result.scan_time_ms
    );

    report::write_report(&config.output, &table)?;
    println!("report written to {}", config.output.display());

    Ok(())
}
