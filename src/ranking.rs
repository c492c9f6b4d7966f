use serde::Serialize;

use crate::fixtures::Team;
use crate::points::Standings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub team: Team,
    pub points: u64,
}

/// Order standings by points (desc) then name (asc) and assign competition
/// ranks: tied entries share a rank and the next distinct value takes its
/// position, so `[6, 5, 1, 1, 0]` ranks as `[1, 2, 3, 3, 5]`.
pub fn rank(standings: &Standings) -> Vec<RankedEntry> {
    let mut rows: Vec<(&Team, u64)> = standings.iter().map(|(t, p)| (t, *p)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out: Vec<RankedEntry> = Vec::with_capacity(rows.len());
    for (idx, (team, points)) in rows.into_iter().enumerate() {
        let rank = match out.last() {
            Some(prev) if prev.points == points => prev.rank,
            _ => idx + 1,
        };
        out.push(RankedEntry {
            rank,
            team: team.clone(),
            points,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_on_case_sensitive_name() {
        let standings = Standings::from([(Team::new("alpha"), 2), (Team::new("Zulu"), 2)]);
        let ranked = rank(&standings);
        assert_eq!(ranked[0].team.name(), "Zulu");
        assert_eq!(ranked[1].team.name(), "alpha");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 1);
    }
}
