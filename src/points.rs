use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::fixtures::{Fixture, Team};

pub type Standings = HashMap<Team, u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsPolicy {
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
}

impl Default for PointsPolicy {
    fn default() -> Self {
        Self {
            win: 3,
            loss: 0,
            draw: 1,
        }
    }
}

pub fn aggregate_points(fixtures: &[Fixture], policy: PointsPolicy) -> Standings {
    let mut table: Standings = HashMap::new();

    for m in fixtures {
        let (home_pts, away_pts) = if m.home_score > m.away_score {
            debug!("{} beat {}: {}-{}", m.home, m.away, m.home_score, m.away_score);
            (policy.win, policy.loss)
        } else if m.away_score > m.home_score {
            debug!("{} beat {}: {}-{}", m.away, m.home, m.away_score, m.home_score);
            (policy.loss, policy.win)
        } else {
            debug!("{} drew {}: {}-{}", m.home, m.away, m.home_score, m.away_score);
            (policy.draw, policy.draw)
        };

        *table.entry(m.home.clone()).or_insert(0) += u64::from(home_pts);
        *table.entry(m.away.clone()).or_insert(0) += u64::from(away_pts);
    }

    table
}
