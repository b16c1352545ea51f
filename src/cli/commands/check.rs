use std::{collections::BTreeMap, time::Instant};

use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary, LocaleIssues};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{check_markup_balance, check_placeholders},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Placeholders,
    Markup,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::Placeholders, CheckRule::Markup]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks
    };
    let run_placeholders = checks.contains(&CheckRule::Placeholders);
    let run_markup = checks.contains(&CheckRule::Markup);

    let started = Instant::now();
    let (placeholder_issues, markup_issues) = rayon::join(
        || {
            if run_placeholders {
                check_placeholders(&ctx.corpus, &ctx.placeholder_syntax)
            } else {
                BTreeMap::new()
            }
        },
        || {
            if run_markup {
                check_markup_balance(&ctx.corpus)
            } else {
                BTreeMap::new()
            }
        },
    );
    tracing::debug!("Checks finished in {:?}", started.elapsed());

    let mut issues = LocaleIssues::new();
    for (locale, found) in placeholder_issues {
        issues
            .entry(locale)
            .or_default()
            .extend(found.into_iter().map(Issue::PlaceholderMismatch));
    }
    for (locale, found) in markup_issues {
        issues
            .entry(locale)
            .or_default()
            .extend(found.into_iter().map(Issue::UnbalancedMarkup));
    }

    let error_count = issues.values().map(Vec::len).sum();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            reference_locale: ctx.corpus.reference_locale().to_string(),
            locale_files_checked: ctx.corpus.locale_count(),
        }),
        issues,
        error_count,
    })
}
