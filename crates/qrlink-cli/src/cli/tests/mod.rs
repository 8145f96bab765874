//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use qrlink_core::qr_link::OutputFormat;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_check() {
    match parse(&["qrlink", "check", "http://example.vom"]) {
        CliCommand::Check { url } => assert_eq!(url, "http://example.vom"),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_link_default_format() {
    match parse(&["qrlink", "link", "https://example.com"]) {
        CliCommand::Link { url, format } => {
            assert_eq!(url, "https://example.com");
            assert!(format.is_none());
        }
        _ => panic!("expected Link"),
    }
}

#[test]
fn cli_parse_link_svg() {
    match parse(&["qrlink", "link", "https://example.com", "--format", "svg"]) {
        CliCommand::Link { format, .. } => assert_eq!(format, Some(OutputFormat::Svg)),
        _ => panic!("expected Link with --format svg"),
    }
}

#[test]
fn cli_parse_generate_defaults() {
    match parse(&["qrlink", "generate", "https://example.com"]) {
        CliCommand::Generate {
            url,
            format,
            save,
            out_dir,
            preview,
        } => {
            assert_eq!(url, "https://example.com");
            assert!(format.is_none());
            assert!(!save);
            assert!(out_dir.is_none());
            assert!(!preview);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_all_flags() {
    match parse(&[
        "qrlink",
        "generate",
        "https://example.com",
        "-f",
        "png",
        "--save",
        "--out-dir",
        "/tmp",
        "--preview",
    ]) {
        CliCommand::Generate {
            format,
            save,
            out_dir,
            preview,
            ..
        } => {
            assert_eq!(format, Some(OutputFormat::Png));
            assert!(save);
            assert_eq!(out_dir.as_deref(), Some(std::path::Path::new("/tmp")));
            assert!(preview);
        }
        _ => panic!("expected Generate with flags"),
    }
}

#[test]
fn cli_parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["qrlink", "link", "https://a.io", "--format", "gif"]).is_err());
}

#[test]
fn cli_parse_interactive() {
    match parse(&["qrlink", "interactive", "--format", "svg"]) {
        CliCommand::Interactive { format, out_dir } => {
            assert_eq!(format, Some(OutputFormat::Svg));
            assert!(out_dir.is_none());
        }
        _ => panic!("expected Interactive"),
    }
}
