//! Tests for command-line parsing.

use clap::builder::PossibleValuesParser;
use clap::error::ErrorKind as ClapErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use log_report::{Config, LogFormat, LogLevel, Opt, OutputFormat, ReportRegistry};
use std::path::PathBuf;

/// Parses `args` the way `main.rs` does, with `--report` restricted to the
/// registry's names.
fn parse_with_registry(args: &[&str]) -> Result<Opt, clap::Error> {
    let registry = ReportRegistry::with_builtins();
    let command = Opt::command().mut_arg("report", |arg| {
        arg.value_parser(PossibleValuesParser::new(registry.names()))
    });
    let matches = command.try_get_matches_from(args)?;
    Opt::from_arg_matches(&matches)
}

#[test]
fn test_single_file_and_report() {
    let opt = Opt::try_parse_from(["log_report", "--file", "access.log", "--report", "average"])
        .expect("Should parse");

    assert_eq!(opt.file, vec![PathBuf::from("access.log")]);
    assert_eq!(opt.report, "average");
    assert_eq!(opt.date, None);
    assert_eq!(opt.format, OutputFormat::Table);
    assert!(matches!(opt.log_level, LogLevel::Warn));
    assert!(matches!(opt.log_format, LogFormat::Plain));
}

#[test]
fn test_multiple_files_keep_order() {
    let opt = Opt::try_parse_from([
        "log_report",
        "--file",
        "b.log",
        "a.log",
        "c.log",
        "--report",
        "status",
    ])
    .expect("Should parse");

    assert_eq!(
        opt.file,
        vec![
            PathBuf::from("b.log"),
            PathBuf::from("a.log"),
            PathBuf::from("c.log")
        ]
    );
}

#[test]
fn test_all_options() {
    let opt = Opt::try_parse_from([
        "log_report",
        "--file",
        "access.log",
        "--report",
        "user_agent",
        "--date",
        "2025-06-22",
        "--format",
        "json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse");

    assert_eq!(opt.date.as_deref(), Some("2025-06-22"));
    assert_eq!(opt.format, OutputFormat::Json);
    assert!(matches!(opt.log_level, LogLevel::Debug));
    assert!(matches!(opt.log_format, LogFormat::Json));
}

#[test]
fn test_date_is_not_validated_by_parser() {
    // Shape and calendar checks happen when loading
    let opt = Opt::try_parse_from([
        "log_report",
        "--file",
        "access.log",
        "--report",
        "average",
        "--date",
        "2025-13-45",
    ])
    .expect("Should parse");
    assert_eq!(opt.date.as_deref(), Some("2025-13-45"));
}

#[test]
fn test_file_is_required() {
    let err = Opt::try_parse_from(["log_report", "--report", "average"]).expect_err("Should fail");
    assert_eq!(err.kind(), ClapErrorKind::MissingRequiredArgument);
}

#[test]
fn test_report_is_required() {
    let err = Opt::try_parse_from(["log_report", "--file", "access.log"]).expect_err("Should fail");
    assert_eq!(err.kind(), ClapErrorKind::MissingRequiredArgument);
}

#[test]
fn test_invalid_output_format() {
    let err = Opt::try_parse_from([
        "log_report",
        "--file",
        "access.log",
        "--report",
        "average",
        "--format",
        "xml",
    ])
    .expect_err("Should fail");
    assert_eq!(err.kind(), ClapErrorKind::InvalidValue);
}

#[test]
fn test_registry_names_restrict_report() {
    let opt = parse_with_registry(&["log_report", "--file", "a.log", "--report", "status"])
        .expect("Should parse");
    assert_eq!(opt.report, "status");

    let err = parse_with_registry(&["log_report", "--file", "a.log", "--report", "unsupported"])
        .expect_err("Should fail");
    assert_eq!(err.kind(), ClapErrorKind::InvalidValue);
}

#[test]
fn test_opt_into_config() {
    let opt = Opt::try_parse_from([
        "log_report",
        "--file",
        "one.log",
        "two.log",
        "--report",
        "status",
        "--date",
        "2025-06-22",
    ])
    .expect("Should parse");

    let config = Config::from(opt);
    assert_eq!(config.files.len(), 2);
    assert_eq!(config.report, "status");
    assert_eq!(config.date.as_deref(), Some("2025-06-22"));
    assert_eq!(config.format, OutputFormat::Table);
}

#[test]
fn test_command_definition_is_valid() {
    Opt::command().debug_assert();
}
