use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::ColorMode;
use crate::StyleGuardError;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Print a failed command's error, prefixed with its category.
pub(crate) fn report_error(e: &StyleGuardError) {
    eprintln!("{}", format_error(e));
}

#[must_use]
pub(crate) fn format_error(e: &StyleGuardError) -> String {
    format!("Error [{}]: {e}", e.error_type())
}

/// Load the options file, or discover one in the current directory.
pub(crate) fn load_config(config_path: Option<&Path>) -> crate::Result<LoadResult> {
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
