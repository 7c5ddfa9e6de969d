use std::fs;

use crate::config::RawConfig;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result, StyleGuardError};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_FAILURE
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StyleGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()?)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// The default options document, pretty-printed JSON with a trailing newline.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn generate_config_template() -> Result<String> {
    let mut template = serde_json::to_string_pretty(&RawConfig::default())?;
    template.push('\n');
    Ok(template)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
