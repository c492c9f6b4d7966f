use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::record::{RecordError, RecordMatch, match_record};

/// A team is known only by its (normalized) display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(String);

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub home: Team,
    pub home_score: u32,
    pub away: Team,
    pub away_score: u32,
}

impl Fixture {
    fn from_match(m: RecordMatch) -> Result<Self, RecordError> {
        // The grammar guarantees digits; only overflow can fail here.
        let (Ok(home_score), Ok(away_score)) =
            (m.home_score.parse::<u32>(), m.away_score.parse::<u32>())
        else {
            return Err(RecordError::InvalidFormat(format!(
                "{} {},{} {}",
                m.home_name, m.home_score, m.away_name, m.away_score
            )));
        };
        Ok(Self {
            home: Team::new(m.home_name),
            home_score,
            away: Team::new(m.away_name),
            away_score,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub read: usize,
    pub parsed: usize,
    pub error: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedFixtures {
    pub fixtures: Vec<Fixture>,
    pub stats: ParseStats,
}

/// Split input on `\r\n`, `\n` or `\r`, in any mix.
pub fn split_records(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

pub fn parse_fixtures(text: &str, strict: bool) -> ParsedFixtures {
    let mut out = ParsedFixtures::default();

    for (idx, record) in split_records(text).enumerate() {
        out.stats.read += 1;
        let fixture = match_record(record, strict).and_then(Fixture::from_match);
        match fixture {
            Ok(fixture) => {
                debug!("line {}: parsed {fixture:?}", idx + 1);
                out.fixtures.push(fixture);
                out.stats.parsed += 1;
            }
            Err(err) => {
                warn!("line {}: {err}", idx + 1);
                out.stats.error += 1;
            }
        }
    }

    out
}
