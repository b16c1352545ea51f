use std::collections::BTreeMap;

use crate::issues::Issue;

/// Issues grouped by locale code, locales in sorted order.
pub type LocaleIssues = BTreeMap<String, Vec<Issue>>;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub reference_locale: String,
    /// Number of locale files (JSON) that were checked, reference included.
    pub locale_files_checked: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False if a config file already existed and was left untouched.
    pub created: bool,
}

/// Result of running transcheck commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// All issues found, empty for non-check commands.
    pub issues: LocaleIssues,
    /// Number of problems that should fail the run.
    pub error_count: usize,
}
