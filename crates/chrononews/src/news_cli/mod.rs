//! CLI support for the date-seeded news front end.
//!
//! This module provides parsing, orchestration, and rendering helpers for
//! the `chrononews` binary. The binary delegates to these functions so they
//! can be exercised in tests without spawning a subprocess.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use serde::Serialize;
use thiserror::Error;

use crate::atomic_io::export_atomic;
use crate::date::DateInput;
use crate::error::{CatalogError, DateError, PickError, WriteError};
use crate::generator::{NewsPools, generate_news};
use crate::item::NewsItem;
use crate::theme::{Theme, ThemeCatalog};

/// Parsed options for the news CLI.
#[derive(Debug, Clone)]
pub struct Options {
    date: Option<String>,
    random_date: bool,
    theme: Option<String>,
    themes_path: Option<PathBuf>,
    json: bool,
    out: Option<Utf8PathBuf>,
}

impl Options {
    /// Returns the export path, if one was supplied.
    #[must_use]
    pub fn out(&self) -> Option<&Utf8PathBuf> {
        self.out.as_ref()
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// A generated batch together with the context it was generated in.
///
/// This is the CLI's output record: it is rendered as text cards or emitted
/// as JSON, and written verbatim by `--out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Date text the batch was seeded with, exactly as validated.
    pub date: String,
    /// Active colour theme.
    pub theme: Theme,
    /// Generated items in display order.
    pub items: Vec<NewsItem>,
}

/// Parses CLI arguments into an execution plan.
///
/// # Errors
///
/// Returns [`CliError`] when flags are missing values, unknown, or when the
/// date flags conflict.
///
/// # Example
///
/// ```
/// use chrononews::news_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--date".to_string(), "12.10.1492".to_string()];
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut date: Option<String> = None;
    let mut random_date = false;
    let mut theme: Option<String> = None;
    let mut themes_path: Option<PathBuf> = None;
    let mut json = false;
    let mut out: Option<Utf8PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--date" => {
                let value = next_value(&mut args, "--date")?;
                date = Some(value);
            }
            "--random-date" => random_date = true,
            "--theme" => {
                let value = next_value(&mut args, "--theme")?;
                theme = Some(value);
            }
            "--themes" => {
                let value = next_value(&mut args, "--themes")?;
                themes_path = Some(PathBuf::from(value));
            }
            "--json" => json = true,
            "--out" => {
                let value = next_value(&mut args, "--out")?;
                out = Some(Utf8PathBuf::from(value));
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    if date.is_some() && random_date {
        return Err(CliError::ConflictingDateFlags);
    }
    if date.is_none() && !random_date {
        return Err(CliError::MissingDate);
    }

    Ok(ParseOutcome::Options(Options {
        date,
        random_date,
        theme,
        themes_path,
        json,
        out,
    }))
}

/// Validates the date, generates the batch, and renders the output.
///
/// Returns the text to print: card output by default, or the report JSON
/// when `--json` was given. When `--out` is set, the report JSON is also
/// written to the file atomically, regardless of the display mode.
///
/// # Errors
///
/// Returns [`CliError`] when date validation, catalogue loading, theme
/// lookup, or the export write fails.
pub fn execute(options: &Options) -> Result<String, CliError> {
    let date = resolve_date(options)?;
    let catalog = resolve_catalog(options)?;
    let theme = resolve_theme(options, &catalog)?;

    let pools = NewsPools::built_in();
    let items = generate_news(&pools, date.as_seed())?;

    let report = Report {
        date: date.as_seed().to_owned(),
        theme,
        items,
    };

    let json = serde_json::to_string_pretty(&report).map_err(|err| CliError::SerializeError {
        message: err.to_string(),
    })?;

    if let Some(out) = &options.out {
        export_atomic(out, &json)?;
    }

    if options.json {
        Ok(json)
    } else {
        Ok(render_cards(&report))
    }
}

/// Renders a report as text cards.
#[must_use]
pub fn render_cards(report: &Report) -> String {
    let mut output = format!(
        "News for {}: {} items [theme: {}]\n",
        report.date,
        report.items.len(),
        report.theme.name
    );

    for item in &report.items {
        output.push_str(&format!(
            "\n#{} {}\n    [{}] {}\n    {}\n    {} min read\n",
            item.id + 1,
            item.title,
            item.category,
            item.source,
            item.description,
            item.read_time
        ));
    }

    output
}

fn resolve_date(options: &Options) -> Result<DateInput, CliError> {
    match options.date.as_deref() {
        Some(text) => Ok(DateInput::parse(text)?),
        None if options.random_date => Ok(DateInput::random(&mut rand::rng())),
        None => Err(CliError::MissingDate),
    }
}

fn resolve_catalog(options: &Options) -> Result<ThemeCatalog, CliError> {
    options.themes_path.as_deref().map_or_else(
        || Ok(ThemeCatalog::built_in()),
        |path| Ok(ThemeCatalog::from_file(path)?),
    )
}

fn resolve_theme(options: &Options, catalog: &ThemeCatalog) -> Result<Theme, CliError> {
    match options.theme.as_deref() {
        Some(name) => Ok(catalog.find_theme(name)?.clone()),
        None => catalog
            .themes()
            .first()
            .cloned()
            .ok_or(CliError::Catalog {
                source: CatalogError::EmptyThemes,
            }),
    }
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

/// Errors surfaced by the CLI parsing and execution flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Neither `--date` nor `--random-date` was supplied.
    #[error("missing date: supply --date <day.month.year> or --random-date")]
    MissingDate,
    /// Both `--date` and `--random-date` were supplied.
    #[error("--date and --random-date are mutually exclusive")]
    ConflictingDateFlags,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// The report could not be serialized to JSON.
    #[error("failed to serialize report: {message}")]
    SerializeError {
        /// Serializer error message.
        message: String,
    },
    /// The date text failed validation.
    #[error("invalid date: {source}")]
    Date {
        /// Underlying validation error.
        #[from]
        #[source]
        source: DateError,
    },
    /// The theme catalogue could not be loaded or queried.
    #[error("theme catalogue error: {source}")]
    Catalog {
        /// Underlying catalogue error.
        #[from]
        #[source]
        source: CatalogError,
    },
    /// A selection pool was empty.
    #[error("generation error: {source}")]
    Pick {
        /// Underlying pool error.
        #[from]
        #[source]
        source: PickError,
    },
    /// The export file could not be written.
    #[error("export error: {source}")]
    Write {
        /// Underlying write error.
        #[from]
        #[source]
        source: WriteError,
    },
}

#[cfg(test)]
mod tests;
