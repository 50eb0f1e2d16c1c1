use std::path::Path;

use rust_decimal::Decimal;

use super::*;

const SAMPLE: &str = r#"
assets:
  SLV:
    name: "Silver"
    query: "silver price"
  IAU:
    name: "Gold"
    query: "gold price OR gold futures"
  USO:
    name: "Crude Oil"
    query: "crude oil price"
triggers:
  level_1:
    change_1d: -2
  level_2:
    change_1d: -5
    change_3d: -7.5
"#;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn parses_assets_in_file_order() {
    let watchlist = parse_watchlist(SAMPLE).expect("sample should parse");
    let symbols: Vec<&str> = watchlist.assets.iter().map(|a| a.symbol.as_str()).collect();
    assert_eq!(symbols, ["SLV", "IAU", "USO"]);
    assert_eq!(watchlist.assets[1].name, "Gold");
    assert_eq!(watchlist.assets[1].query, "gold price OR gold futures");
}

#[test]
fn parses_trigger_thresholds() {
    let watchlist = parse_watchlist(SAMPLE).unwrap();
    assert_eq!(watchlist.triggers.level_1.change_1d, Some(d("-2")));
    assert_eq!(watchlist.triggers.level_1.change_3d, None);
    assert_eq!(watchlist.triggers.level_2.change_1d, Some(d("-5")));
    assert_eq!(watchlist.triggers.level_2.change_3d, Some(d("-7.5")));
}

#[test]
fn missing_triggers_section_uses_defaults() {
    let yaml = "assets:\n  IAU:\n    name: Gold\n    query: gold\n";
    let watchlist = parse_watchlist(yaml).unwrap();
    assert_eq!(watchlist.triggers, TriggerThresholds::default());
}

#[test]
fn empty_assets_fails_validation() {
    let yaml = "assets: {}\n";
    let err = parse_watchlist(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
}

#[test]
fn empty_query_fails_validation() {
    let yaml = "assets:\n  IAU:\n    name: Gold\n    query: \"  \"\n";
    let err = parse_watchlist(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("IAU")),
        "got: {err:?}"
    );
}

#[test]
fn duplicate_symbols_differing_in_case_fail_validation() {
    let yaml = "assets:\n  IAU:\n    name: Gold\n    query: gold\n  iau:\n    name: Gold 2\n    query: gold\n";
    let err = parse_watchlist(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")));
}

#[test]
fn asset_entry_missing_query_is_parse_error() {
    let yaml = "assets:\n  IAU:\n    name: Gold\n";
    let err = parse_watchlist(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::WatchlistParse(_)), "got: {err:?}");
}

#[test]
fn asset_lookup_is_case_insensitive() {
    let watchlist = parse_watchlist(SAMPLE).unwrap();
    assert_eq!(watchlist.asset("iau").map(|a| a.name.as_str()), Some("Gold"));
    assert!(watchlist.asset("GLD").is_none());
}

#[test]
fn load_watchlist_reports_missing_file() {
    let err = load_watchlist(Path::new("/nonexistent/sentinel/config.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::WatchlistIo { .. }), "got: {err:?}");
}

#[test]
fn repository_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.yaml");
    let watchlist = load_watchlist(&path).expect("repository config.yaml should load");
    assert_eq!(watchlist.assets[0].symbol, "IAU");
    assert!(watchlist.triggers.level_2.change_3d.is_some());
}
