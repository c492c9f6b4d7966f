use std::fs;
use std::path::PathBuf;

use league_ranker::fixtures::{ParseStats, Team, parse_fixtures};
use league_ranker::record::{RecordError, match_record};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_league_fixture() {
    let raw = read_fixture("league.txt");
    let out = parse_fixtures(raw.trim(), false);
    assert_eq!(out.fixtures.len(), 5);
    assert_eq!(
        out.stats,
        ParseStats {
            read: 5,
            parsed: 5,
            error: 0
        }
    );

    let second = &out.fixtures[1];
    assert_eq!(second.home, Team::new("Tarantulas"));
    assert_eq!(second.home_score, 1);
    assert_eq!(second.away, Team::new("FC Awesome"));
    assert_eq!(second.away_score, 0);
}

#[test]
fn messy_fixture_skips_bad_records() {
    let raw = read_fixture("messy_league.txt");
    let out = parse_fixtures(&raw, false);
    // Untrimmed: the trailing newline yields a final empty record.
    assert_eq!(
        out.stats,
        ParseStats {
            read: 7,
            parsed: 4,
            error: 3
        }
    );
    let homes: Vec<&str> = out.fixtures.iter().map(|f| f.home.name()).collect();
    assert_eq!(homes, vec!["Lions", "Tarantulas", "Tarantulas", "Lions"]);
    assert_eq!(out.fixtures[2].away.name(), "Snakes");
}

#[test]
fn valid_and_invalid_records_keep_order() {
    let data = "Foo 1,Bar 2\nBaz 3, Bat Fox 4\r\nRed Jam 5 Sky Pen 6\nFluff Mop 7,Kick Ball 8\r\n";
    let out = parse_fixtures(data, false);

    let names: Vec<(&str, u32, &str, u32)> = out
        .fixtures
        .iter()
        .map(|f| (f.home.name(), f.home_score, f.away.name(), f.away_score))
        .collect();
    assert_eq!(
        names,
        vec![
            ("Foo", 1, "Bar", 2),
            ("Baz", 3, "Bat Fox", 4),
            ("Fluff Mop", 7, "Kick Ball", 8),
        ]
    );
    assert_eq!(out.stats.read, 5);
    assert_eq!(out.stats.parsed, 3);
    assert_eq!(out.stats.error, 2);
}

#[test]
fn single_valid_record() {
    let out = parse_fixtures("Lions 0, Snakes 12", false);
    assert_eq!(out.fixtures.len(), 1);
    assert_eq!(out.fixtures[0].home_score, 0);
    assert_eq!(out.fixtures[0].away_score, 12);
    assert_eq!(
        out.stats,
        ParseStats {
            read: 1,
            parsed: 1,
            error: 0
        }
    );
}

#[test]
fn missing_comma_is_counted_not_raised() {
    let out = parse_fixtures("Lions 3 Snakes 3", false);
    assert!(out.fixtures.is_empty());
    assert_eq!(
        out.stats,
        ParseStats {
            read: 1,
            parsed: 0,
            error: 1
        }
    );
}

#[test]
fn strict_rejects_what_lenient_normalizes() {
    let record = "Foo_Baz 13,Baa_Bar 0";

    let strict = parse_fixtures(record, true);
    assert!(strict.fixtures.is_empty());
    assert_eq!(strict.stats.error, 1);

    let lenient = parse_fixtures(record, false);
    assert_eq!(lenient.fixtures.len(), 1);
    assert_eq!(lenient.fixtures[0].home.name(), "Foo Baz");
    assert_eq!(lenient.fixtures[0].away.name(), "Baa Bar");
}

#[test]
fn same_team_different_punctuation_merges() {
    let out = parse_fixtures("FC-Awesome 1, Lions 0\nFC  Awesome 2, Snakes 2", false);
    assert_eq!(out.fixtures[0].home, out.fixtures[1].home);
    assert_eq!(out.fixtures[0].home.name(), "FC Awesome");
}

#[test]
fn matcher_distinguishes_failure_kinds() {
    assert!(matches!(
        match_record("   ", false),
        Err(RecordError::Unusable(_))
    ));
    assert!(matches!(
        match_record("Lions 3 Snakes 3", false),
        Err(RecordError::InvalidFormat(_))
    ));
    // Strict mode never normalizes, so whitespace alone is not empty.
    assert!(matches!(
        match_record("   ", true),
        Err(RecordError::InvalidFormat(_))
    ));
}
