//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow i18nhelp to be used as a library.
//! Every printer has a `_to` variant writing to any `Write` for testing.

use std::io::{self, Write};
use std::ops::Range;

use colored::Colorize;

use super::commands::{
    AddSummary, CommandResult, CommandSummary, DeleteSummary, SetupSummary, UnusedSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{AddOutcome, DeleteOutcome, FindResult, LocaleSkip, SearchMatch, SyncReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    print_to(result, verbose, &mut out, &mut err);
}

pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Setup(summary) => print_setup(summary, out, err),
        CommandSummary::Find(found) => print_find(found, out),
        CommandSummary::Add(summary) => print_add(summary, verbose, out, err),
        CommandSummary::Delete(summary) => print_delete(summary, verbose, out, err),
        CommandSummary::Unused(summary) => print_unused(summary, verbose, out, err),
    }
}

/// Print numbered search results to stdout.
pub fn print_matches(matches: &[SearchMatch]) {
    print_matches_to(matches, &mut io::stdout().lock());
}

pub fn print_matches_to<W: Write>(matches: &[SearchMatch], writer: &mut W) {
    if matches.is_empty() {
        let _ = writeln!(writer, "No entries found.");
        return;
    }

    let _ = writeln!(
        writer,
        "Found {} {}:",
        matches.len().to_string().green(),
        if matches.len() == 1 { "entry" } else { "entries" }
    );
    for m in matches {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "Result #{}", m.index.to_string().yellow());
        let _ = writeln!(writer, "Key   : {}", highlight(&m.key, &m.key_highlights));
        let _ = writeln!(
            writer,
            "Value : {}",
            highlight(&m.value, &m.value_highlights)
        );
    }
}

/// Render `text` with the given byte ranges in red.
fn highlight(text: &str, ranges: &[Range<usize>]) -> String {
    let mut rendered = String::with_capacity(text.len());
    let mut last = 0;
    for range in ranges {
        rendered.push_str(&text[last..range.start]);
        rendered.push_str(&text[range.clone()].red().bold().to_string());
        last = range.end;
    }
    rendered.push_str(&text[last..]);
    rendered
}

fn mirror_suffix(mirrors: usize) -> String {
    if mirrors == 0 {
        String::new()
    } else {
        format!(
            " and {} additional {}",
            mirrors.to_string().yellow(),
            if mirrors == 1 { "folder" } else { "folders" }
        )
    }
}

fn print_setup<O: Write, E: Write>(summary: &SetupSummary, out: &mut O, err: &mut E) {
    if !summary.created {
        let _ = writeln!(
            err,
            "{} {} already exists (use {} to overwrite)",
            "error:".bold().red(),
            CONFIG_FILE_NAME,
            "--force".cyan()
        );
        return;
    }
    let verb = if summary.overwritten { "Overwrote" } else { "Created" };
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("{} {}", verb, CONFIG_FILE_NAME).green()
    );
}

fn print_find<W: Write>(found: &FindResult, writer: &mut W) {
    print_matches_to(&found.matches, writer);
}

/// Warn about locales left out of a mutation.
///
/// Missing documents are always named. Unreadable ones are only counted
/// unless verbose.
fn print_skipped<E: Write>(skipped: &[LocaleSkip], verbose: bool, err: &mut E) {
    let mut unreadable = 0;
    for skip in skipped {
        if skip.is_missing() {
            let _ = writeln!(
                err,
                "{} No common.json file found in {} folder, skipped.",
                "warning:".bold().yellow(),
                skip.locale.red()
            );
        } else if verbose {
            let _ = writeln!(
                err,
                "{} Skipped {} folder: {} ({})",
                "warning:".bold().yellow(),
                skip.locale.red(),
                skip.reason,
                skip.path.display()
            );
        } else {
            unreadable += 1;
        }
    }
    if unreadable > 0 {
        let _ = writeln!(
            err,
            "{} {} locale file(s) could not be parsed and were skipped (use {} for details)",
            "warning:".bold().yellow(),
            unreadable,
            "-v".cyan()
        );
    }
}

fn print_add<O: Write, E: Write>(summary: &AddSummary, verbose: bool, out: &mut O, err: &mut E) {
    let SyncReport { outcomes, skipped } = &summary.report;
    let mut failed_translations = 0;

    for outcome in outcomes {
        match outcome {
            AddOutcome::Added {
                locale,
                value,
                mirrors,
                warning,
                ..
            } => {
                let _ = writeln!(
                    out,
                    "{} Added {}: {} to {} folder{}.",
                    SUCCESS_MARK.green(),
                    summary.key.cyan(),
                    value.green(),
                    locale.green(),
                    mirror_suffix(*mirrors)
                );
                if let Some(reason) = warning {
                    if verbose {
                        let _ = writeln!(
                            err,
                            "{} Translation to {} failed, used the original text: {}",
                            "warning:".bold().yellow(),
                            locale,
                            reason
                        );
                    } else {
                        failed_translations += 1;
                    }
                }
            }
            AddOutcome::AlreadyExists { locale, .. } => {
                let _ = writeln!(
                    out,
                    "{} Key {} already exists in {} folder. Try \"{}\" if you want to overwrite.",
                    FAILURE_MARK.red(),
                    summary.key.green(),
                    locale.green(),
                    "--overwrite".yellow()
                );
            }
        }
    }

    if failed_translations > 0 {
        let _ = writeln!(
            err,
            "{} {} translation(s) failed and used the original text (use {} for details)",
            "warning:".bold().yellow(),
            failed_translations,
            "-v".cyan()
        );
    }
    for locale in &summary.unknown_locales {
        let _ = writeln!(
            err,
            "{} No {} folder found, override for it ignored.",
            "warning:".bold().yellow(),
            locale.red()
        );
    }
    print_skipped(skipped, verbose, err);
}

fn print_delete_report<O: Write, E: Write>(
    report: &SyncReport<DeleteOutcome>,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for outcome in &report.outcomes {
        match outcome {
            DeleteOutcome::Deleted {
                locale,
                keys,
                mirrors,
            } => {
                let keys = keys
                    .iter()
                    .map(|k| k.cyan().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(
                    out,
                    "{} Deleted {} from {} folder{}.",
                    SUCCESS_MARK.green(),
                    keys,
                    locale.green(),
                    mirror_suffix(*mirrors)
                );
            }
            DeleteOutcome::NotFound { locale } => {
                let _ = writeln!(
                    out,
                    "{} No key found in {} folder.",
                    FAILURE_MARK.red(),
                    locale.green()
                );
            }
        }
    }
    print_skipped(&report.skipped, verbose, err);
}

fn print_delete<O: Write, E: Write>(
    summary: &DeleteSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match summary {
        DeleteSummary::Exact(report) => print_delete_report(report, verbose, out, err),
        DeleteSummary::Selective(selective) => {
            if selective.found.matches.is_empty() {
                print_matches_to(&selective.found.matches, out);
                return;
            }
            for rejected in &selective.selection.rejected {
                let _ = writeln!(
                    err,
                    "{} Ignoring \"{}\": not a result number",
                    "warning:".bold().yellow(),
                    rejected
                );
            }
            match &selective.deleted {
                Some(report) => print_delete_report(report, verbose, out, err),
                None => {
                    let _ = writeln!(out, "Nothing selected, no keys deleted.");
                }
            }
        }
    }
}

fn print_unused<O: Write, E: Write>(
    summary: &UnusedSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let report = &summary.report;

    if verbose {
        for hit in &report.hits {
            let keys = hit
                .keys
                .iter()
                .map(|k| k.yellow().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "{} Found in {}: {}",
                SUCCESS_MARK.green(),
                hit.path.display().to_string().green(),
                keys
            );
        }
        for warning in &report.warnings {
            let _ = writeln!(
                err,
                "{} Cannot read {}: {}",
                "warning:".bold().yellow(),
                warning.path,
                warning.error
            );
        }
    } else if !report.warnings.is_empty() {
        let _ = writeln!(
            err,
            "{} {} path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            report.warnings.len(),
            "-v".cyan()
        );
    }

    let files = if report.files_scanned == 1 {
        "file"
    } else {
        "files"
    };

    if report.unused.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} keys are used (checked {} source {})",
                summary.locale, report.files_scanned, files
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        out,
        "{} These listed keys might be used as a parameter. Only keys found directly in the file are listed.",
        "Warning:".blue()
    );
    let _ = writeln!(
        out,
        "Found {} possible unused keys in {} (checked {} source {} in {}):",
        report.unused.len().to_string().yellow(),
        summary.locale,
        report.files_scanned,
        files,
        summary.dir.display()
    );
    for (i, key) in report.unused.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {:>3} - \"{}\"",
            FAILURE_MARK.red(),
            i + 1,
            key.red()
        );
    }
}
