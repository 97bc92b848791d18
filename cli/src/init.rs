use crate::error::{CliError, Result};
use crate::ui;
use processing_errors::config::ensure_config_file_exists;
use std::path::Path;

pub fn execute(config_path: String, force: bool) -> Result<()> {
    let path = Path::new(&config_path);
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(CliError::Other(format!(
                "Directory {} does not exist",
                parent.display()
            )));
        }
    }

    let written = ensure_config_file_exists(path, force).map_err(|e| {
        CliError::from(e).with_context(format!("Failed to create {}", path.display()))
    })?;

    if written {
        ui::success_message(&format!("Configuration written to {}", path.display()));
        ui::info_message("Add project names under [projects] and title overrides under [labels]");
    } else {
        ui::warning_message(&format!(
            "{} already exists, use --force to overwrite it",
            path.display()
        ));
    }

    Ok(())
}
