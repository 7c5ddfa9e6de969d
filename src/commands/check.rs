use std::path::PathBuf;

use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter};
use crate::registry::RuleRegistry;
use crate::runner::{RealFileReader, RunSummary, Runner};
use crate::scanner::{DirectoryScanner, FileScanner, PathFilter};
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, report_error, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e);
            EXIT_FAILURE
        }
    }
}

/// Load the configuration, discover files, check them and report.
///
/// # Errors
/// Returns an error for configuration problems, an invalid root, or an
/// output file that cannot be written. Individual unreadable files are not
/// errors; they fail their own verdict.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let loaded = load_config(args.options.as_deref())?;
    if cli.verbose >= 1 && !cli.quiet {
        eprintln!("Using options from {}", loaded.path.display());
    }
    let config = loaded.config;

    // 2. Discover files, dropping excluded paths
    let files = discover_files(args, &config)?;
    if cli.verbose >= 1 && !cli.quiet {
        eprintln!("Found {} file(s) under {}", files.len(), args.root.display());
    }

    // 3. Check every file on the worker pool
    let registry = RuleRegistry::builtin();
    let summary = check_in_pool(&files, &registry, &config, args.jobs, cli.quiet)?;
    if cli.verbose >= 2 && !cli.quiet {
        for path in &summary.skipped {
            eprintln!("Skipped (no matching pattern): {}", path.display());
        }
    }

    // 4. Report
    let output = format_output(args.format, &summary, cli)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(if summary.is_compliant() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}

fn discover_files(args: &CheckArgs, config: &Config) -> crate::Result<Vec<PathBuf>> {
    let filter = PathFilter::new(config.excluded_paths.clone(), &args.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, args.gitignore);
    scanner.scan(&args.root)
}

/// Run the checks on a dedicated pool of `jobs` threads, or on rayon's global pool.
///
/// # Errors
/// Returns an error if the dedicated pool cannot be built.
pub fn check_in_pool(
    files: &[PathBuf],
    registry: &RuleRegistry,
    config: &Config,
    jobs: Option<usize>,
    quiet: bool,
) -> crate::Result<RunSummary> {
    let reader = RealFileReader;
    let runner = Runner::new(registry, config, &reader);
    let progress = ScanProgress::new(files.len() as u64, quiet);

    let summary = match jobs {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| runner.check_files(files, Some(&progress)))
        }
        None => runner.check_files(files, Some(&progress)),
    };

    progress.finish();
    Ok(summary)
}

fn format_output(format: OutputFormat, summary: &RunSummary, cli: &Cli) -> crate::Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::new(color_choice_to_mode(cli.color)).format(summary)
        }
        OutputFormat::Json => JsonFormatter.format(summary),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
