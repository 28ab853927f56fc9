use super::AppConfig;
use clap::Parser;
use std::io::Write;

#[test]
fn defaults_are_valid() {
    let cfg = AppConfig::parse_from(["readit"]);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.speed, 1.0);
    assert_eq!(cfg.volume, 1.0);
    assert_eq!(cfg.silence, 0.3);
    assert!(!cfg.interactive);
}

#[test]
fn rejects_speed_out_of_bounds() {
    let cfg = AppConfig::parse_from(["readit", "--speed", "0.0", "hi"]);
    assert!(cfg.validate().is_err());

    let cfg = AppConfig::parse_from(["readit", "--speed", "5.0", "hi"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn accepts_speed_bounds() {
    let cfg = AppConfig::parse_from(["readit", "--speed", "0.25", "hi"]);
    assert!(cfg.validate().is_ok());

    let cfg = AppConfig::parse_from(["readit", "--speed", "4.0", "hi"]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn rejects_volume_out_of_bounds() {
    let cfg = AppConfig::parse_from(["readit", "--volume", "0.0", "hi"]);
    assert!(cfg.validate().is_err());

    let cfg = AppConfig::parse_from(["readit", "--volume", "2.5", "hi"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_negative_silence() {
    let cfg = AppConfig::parse_from(["readit", "--silence", "-0.1", "hi"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_multiple_text_sources() {
    let cfg = AppConfig::parse_from(["readit", "--clipboard", "hello"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_missing_file() {
    let cfg = AppConfig::parse_from(["readit", "--file", "/no/such/file.txt"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn accepts_existing_file() {
    let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(tmp, "hello").expect("write temp file");
    let path = tmp.path().to_str().expect("utf-8 temp path");
    let cfg = AppConfig::parse_from(["readit", "--file", path]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn rejects_empty_player() {
    let cfg = AppConfig::parse_from(["readit", "--player", "", "hi"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn player_argv_splits_shell_words() {
    let cfg = AppConfig::parse_from(["readit", "--player", "aplay -q", "hi"]);
    let argv = cfg.player_argv().expect("split player command");
    assert_eq!(argv, vec!["aplay".to_string(), "-q".to_string()]);
}

#[test]
fn positional_text_joins_words() {
    let cfg = AppConfig::parse_from(["readit", "hello", "brave", "world"]);
    assert_eq!(cfg.positional_text().as_deref(), Some("hello brave world"));

    let cfg = AppConfig::parse_from(["readit"]);
    assert!(cfg.positional_text().is_none());
}
