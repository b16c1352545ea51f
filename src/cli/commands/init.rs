use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, LocaleIssues};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file to the current directory.
///
/// An existing file is never overwritten; that case counts as one error.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary { created: false }),
            issues: LocaleIssues::new(),
            error_count: 1,
        });
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { created: true }),
        issues: LocaleIssues::new(),
        error_count: 0,
    })
}
