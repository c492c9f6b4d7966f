pub mod config;
pub mod fixtures;
pub mod input;
pub mod logging;
pub mod points;
pub mod ranking;
pub mod record;
pub mod render;

use crate::config::RankerConfig;
use crate::fixtures::{ParseStats, parse_fixtures};
use crate::points::aggregate_points;
use crate::ranking::{RankedEntry, rank};

#[derive(Debug, Clone)]
pub struct LeagueTable {
    pub standings: Vec<RankedEntry>,
    pub stats: ParseStats,
}

/// Run the whole pipeline over one batch of input text.
pub fn compute_standings(text: &str, config: &RankerConfig) -> LeagueTable {
    let parsed = parse_fixtures(text, config.strict_parse);
    let totals = aggregate_points(&parsed.fixtures, config.points);
    LeagueTable {
        standings: rank(&totals),
        stats: parsed.stats,
    }
}
