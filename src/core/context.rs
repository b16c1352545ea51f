use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{Corpus, parsers::json::scan_message_files},
    rules::PlaceholderSyntax,
};

/// Everything a check run needs, loaded up front.
///
/// # Configuration Priority
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--reference-locale en`)
/// 2. `.transcheckrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory the locale files were loaded from.
    pub message_dir: PathBuf,

    /// Reference locale plus every candidate locale.
    pub corpus: Corpus,

    /// Placeholder syntax built from `config.placeholder_marker`.
    pub placeholder_syntax: PlaceholderSyntax,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Messages directory doesn't exist or a locale file can't be parsed
    /// - Reference locale messages are not found
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(Path::new("."))?;
        match &config_result.path {
            Some(path) => tracing::debug!("Loaded configuration from {}", path.display()),
            None => tracing::debug!("No .transcheckrc.json found, using default configuration"),
        }

        let mut config = config_result.config;

        // Relative paths in a config file are relative to that file
        let config_dir = config_result
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        if let Some(ref reference_locale) = common_args.reference_locale {
            config.reference_locale = reference_locale.clone();
        }

        if let Some(ref file_pattern) = common_args.file_pattern {
            config.file_pattern = file_pattern.clone();
        }

        let message_dir = match (&common_args.messages_root, config_dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(config_dir)) => resolve_from(&config_dir, &config.messages_root),
            (None, None) => PathBuf::from(&config.messages_root),
        };
        config.messages_root = message_dir.to_string_lossy().to_string();

        config.validate()?;
        let pattern = config.file_pattern()?;
        let placeholder_syntax = config.placeholder_syntax()?;
        tracing::debug!(
            "Reference locale '{}', placeholder marker '{}'",
            config.reference_locale,
            placeholder_syntax.marker()
        );

        let messages = scan_message_files(&message_dir, &pattern)?;
        tracing::debug!(
            "Loaded {} locale file(s) from {}",
            messages.len(),
            message_dir.display()
        );

        let corpus = Corpus::new(config.reference_locale.clone(), messages)
            .with_context(|| format!("Cannot check '{}'", message_dir.display()))?;

        Ok(Self {
            config,
            message_dir,
            corpus,
            placeholder_syntax,
        })
    }
}

fn resolve_from(base: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        base.join(rel)
    }
}
