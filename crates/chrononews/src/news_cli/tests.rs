//! Unit tests for the news CLI helpers.

use std::sync::atomic::{AtomicUsize, Ordering};

use camino::Utf8PathBuf;
use cap_std::{ambient_authority, fs::Dir};
use rstest::rstest;

use super::*;
use crate::error::{CatalogError, DateError};

fn options_for_date(date: &str) -> Options {
    Options {
        date: Some(date.to_owned()),
        random_date: false,
        theme: None,
        themes_path: None,
        json: false,
        out: None,
    }
}

fn unique_temp_path(file_name: &str) -> Utf8PathBuf {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = Utf8PathBuf::from("target")
        .join("chrononews-tests")
        .join(format!("news-cli-{}-{counter}", std::process::id()));
    let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open workspace dir");
    root.create_dir_all(&dir).expect("create temp dir");
    dir.join(file_name)
}

#[test]
fn parse_args_returns_help_for_help_flag() {
    let args = vec!["--help".to_owned()];

    let outcome = parse_args(args.into_iter()).expect("parse args");

    assert!(matches!(outcome, ParseOutcome::Help));
}

#[test]
fn parse_args_requires_a_date_source() {
    let args = vec!["--json".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingDate);
}

#[test]
fn parse_args_rejects_conflicting_date_flags() {
    let args = vec![
        "--date".to_owned(),
        "12.10.1492".to_owned(),
        "--random-date".to_owned(),
    ];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::ConflictingDateFlags);
}

#[rstest]
#[case("--date")]
#[case("--theme")]
#[case("--themes")]
#[case("--out")]
fn parse_args_reports_missing_value(#[case] flag: &'static str) {
    let args = vec![flag.to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { flag });
}

#[test]
fn parse_args_reports_unknown_arguments() {
    let args = vec![
        "--date".to_owned(),
        "12.10.1492".to_owned(),
        "--nope".to_owned(),
    ];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownArgument {
            value: "--nope".to_owned(),
        }
    );
}

#[test]
fn parse_args_parses_full_options() {
    let args = vec![
        "--date".to_owned(),
        "29.2.2024".to_owned(),
        "--theme".to_owned(),
        "Green".to_owned(),
        "--json".to_owned(),
        "--out".to_owned(),
        "batch.json".to_owned(),
    ];

    let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse args") else {
        panic!("expected options");
    };

    assert_eq!(options.date.as_deref(), Some("29.2.2024"));
    assert_eq!(options.theme.as_deref(), Some("Green"));
    assert!(options.json);
    assert_eq!(options.out(), Some(&Utf8PathBuf::from("batch.json")));
}

#[test]
fn execute_renders_cards_for_a_valid_date() {
    let output = execute(&options_for_date("12.10.1492")).expect("execute");

    assert!(output.starts_with("News for 12.10.1492: 3 items [theme: Violet]"));
    assert!(output.contains("min read"));
}

#[test]
fn execute_is_deterministic_for_a_fixed_date() {
    let first = execute(&options_for_date("5.5.1955")).expect("execute");
    let second = execute(&options_for_date("5.5.1955")).expect("execute");

    assert_eq!(first, second);
}

#[test]
fn execute_emits_json_when_requested() {
    let mut options = options_for_date("12.10.1492");
    options.json = true;

    let output = execute(&options).expect("execute");
    let report: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

    assert_eq!(report["date"], "12.10.1492");
    assert_eq!(report["theme"]["name"], "Violet");
    assert_eq!(report["items"].as_array().map(Vec::len), Some(3));
    assert!(report["items"][0]["readTime"].is_u64());
}

#[test]
fn execute_selects_theme_by_name() {
    let mut options = options_for_date("12.10.1492");
    options.theme = Some("Green".to_owned());

    let output = execute(&options).expect("execute");

    assert!(output.contains("[theme: Green]"));
}

#[test]
fn execute_reports_unknown_theme() {
    let mut options = options_for_date("12.10.1492");
    options.theme = Some("Neon".to_owned());

    let err = execute(&options).expect_err("expected error");

    assert_eq!(
        err,
        CliError::Catalog {
            source: CatalogError::ThemeNotFound {
                name: "Neon".to_owned(),
            },
        }
    );
}

#[test]
fn execute_rejects_invalid_dates() {
    let err = execute(&options_for_date("31.4.2024")).expect_err("expected error");

    assert_eq!(
        err,
        CliError::Date {
            source: DateError::DayOutOfRangeForMonth {
                month: 4,
                days_in_month: 30,
            },
        }
    );
}

#[test]
fn execute_accepts_a_random_date() {
    let options = Options {
        date: None,
        random_date: true,
        theme: None,
        themes_path: None,
        json: false,
        out: None,
    };

    let output = execute(&options).expect("execute");

    assert!(output.starts_with("News for "));
}

#[test]
fn execute_writes_export_file() {
    let path = unique_temp_path("batch.json");
    let mut options = options_for_date("12.10.1492");
    options.out = Some(path.clone());

    let output = execute(&options).expect("execute");
    let exported = std::fs::read_to_string(&path).expect("read export");
    let report: serde_json::Value = serde_json::from_str(&exported).expect("valid JSON");

    // Text cards on screen, JSON in the export file.
    assert!(output.starts_with("News for"));
    assert_eq!(report["date"], "12.10.1492");
}

#[test]
fn execute_loads_catalogue_from_file() {
    let path = unique_temp_path("themes.json");
    let json = r##"{
        "version": 1,
        "themes": [
            {"name": "Ink", "primaryColor": "#102030", "secondaryColor": "#405060"}
        ]
    }"##;
    std::fs::write(&path, json).expect("write catalogue");

    let mut options = options_for_date("12.10.1492");
    options.themes_path = Some(path.into_std_path_buf());

    let output = execute(&options).expect("execute");

    assert!(output.contains("[theme: Ink]"));
}

#[test]
fn execute_reports_missing_catalogue_file() {
    let mut options = options_for_date("12.10.1492");
    options.themes_path = Some(std::path::PathBuf::from(
        "target/chrononews-tests/no-such-catalogue.json",
    ));

    let err = execute(&options).expect_err("expected error");

    assert!(matches!(
        err,
        CliError::Catalog {
            source: CatalogError::IoError { .. },
        }
    ));
}

#[test]
fn render_cards_numbers_items_from_one() {
    let report = Report {
        date: "1.1.2001".to_owned(),
        theme: ThemeCatalog::built_in()
            .find_theme("Blue")
            .expect("theme found")
            .clone(),
        items: vec![NewsItem {
            id: 0,
            title: "Perpetual energy source invented".to_owned(),
            description: "Body".to_owned(),
            category: "Science".to_owned(),
            source: "World News".to_owned(),
            read_time: 2,
        }],
    };

    let output = render_cards(&report);

    assert!(output.contains("#1 Perpetual energy source invented"));
    assert!(output.contains("[Science] World News"));
    assert!(output.contains("2 min read"));
}
