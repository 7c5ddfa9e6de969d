use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ExplainArgs};
use crate::config::Config;
use crate::registry::RuleRegistry;
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

use super::context::{load_config, report_error};

#[must_use]
pub fn run_explain(args: &ExplainArgs, cli: &Cli) -> i32 {
    let config = match (&args.options, load_config(args.options.as_deref())) {
        (_, Ok(loaded)) => Some(loaded.config),
        // An explicitly named options file must load.
        (Some(_), Err(e)) => {
            report_error(&e);
            return EXIT_FAILURE;
        }
        (None, Err(e)) => {
            if cli.verbose >= 1 {
                eprintln!("No options loaded, exclusions not evaluated: {e}");
            }
            None
        }
    };

    let registry = RuleRegistry::builtin();
    if !cli.quiet {
        print!("{}", explain_path(&args.path, &registry, config.as_ref()));
    }
    EXIT_SUCCESS
}

/// Describe how `path` is treated: excluded, skipped, or which rules apply.
#[must_use]
pub fn explain_path(path: &Path, registry: &RuleRegistry, config: Option<&Config>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Path: {}", path.display());

    if let Some(config) = config {
        let path_str = path.to_string_lossy().replace('\\', "/");
        if let Some(pattern) = config.excluding_pattern(&path_str) {
            let _ = writeln!(out, "Excluded by pattern: {}", pattern.as_str());
            return out;
        }
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(entry) = registry.select_entry(&name) else {
        let _ = writeln!(out, "Not checked: no pattern matches '{name}'");
        return out;
    };

    let _ = writeln!(out, "Matched pattern: {}", entry.pattern.as_str());
    let _ = writeln!(out, "Rules:");
    for rule in &entry.rules {
        let _ = writeln!(out, "  - {} ({})", rule.name(), rule.scope());
    }
    out
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
