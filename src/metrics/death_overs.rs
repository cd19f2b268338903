//! Boundary and wicket counts in the death overs, by over and team

use super::filter::DeliveryFilter;
use crate::loader::Dataset;
use crate::model::Delivery;
use std::collections::{BTreeMap, BTreeSet};

/// First over (as numbered in the data) counted as a death over
pub const DEATH_OVERS_START: u32 = 14;

/// Counts keyed by over number and team. Both axes hold only the values
/// that occur; absent cells read as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverTeamPivot {
    pub overs: Vec<u32>,
    pub teams: Vec<String>,
    cells: BTreeMap<(u32, String), u64>,
}

impl OverTeamPivot {
    fn from_keys<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = (u32, &'a str)>,
    {
        let mut cells = BTreeMap::new();
        let mut overs = BTreeSet::new();
        let mut teams = BTreeSet::new();
        for (over, team) in keys {
            overs.insert(over);
            teams.insert(team.to_string());
            *cells.entry((over, team.to_string())).or_insert(0) += 1;
        }
        OverTeamPivot {
            overs: overs.into_iter().collect(),
            teams: teams.into_iter().collect(),
            cells,
        }
    }

    pub fn get(&self, over: u32, team: &str) -> u64 {
        self.cells
            .get(&(over, team.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// One row per over, one value per entry of `teams`
    pub fn rows(&self) -> Vec<(u32, Vec<u64>)> {
        self.overs
            .iter()
            .map(|&over| {
                let counts = self.teams.iter().map(|t| self.get(over, t)).collect();
                (over, counts)
            })
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.cells.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeathOvers {
    /// Sixes by batting team
    pub sixes: OverTeamPivot,
    /// Fours by batting team
    pub fours: OverTeamPivot,
    /// Dismissals of any kind, by bowling team
    pub wickets: OverTeamPivot,
}

fn death_rows(data: &Dataset) -> Vec<&Delivery> {
    DeliveryFilter::new()
        .from_over(DEATH_OVERS_START)
        .apply(data)
        .collect()
}

pub fn death_overs(data: &Dataset) -> DeathOvers {
    let rows = death_rows(data);
    DeathOvers {
        sixes: OverTeamPivot::from_keys(
            rows.iter()
                .filter(|d| d.is_six())
                .map(|d| (d.over, d.batting_team.as_str())),
        ),
        fours: OverTeamPivot::from_keys(
            rows.iter()
                .filter(|d| d.is_four())
                .map(|d| (d.over, d.batting_team.as_str())),
        ),
        wickets: OverTeamPivot::from_keys(
            rows.iter()
                .filter(|d| d.dismissed)
                .map(|d| (d.over, d.bowling_team.as_str())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_dataset;

    #[test]
    fn test_sixes_and_fours() {
        let data = sample_dataset();
        let death = death_overs(&data);

        assert_eq!(death.sixes.overs, vec![14, 17, 18]);
        assert_eq!(death.sixes.teams, vec!["CSK", "MI", "RCB"]);
        assert_eq!(death.sixes.get(14, "CSK"), 1);
        assert_eq!(death.sixes.get(17, "RCB"), 1);
        assert_eq!(death.sixes.get(18, "MI"), 1);
        assert_eq!(death.sixes.get(14, "MI"), 0);
        assert_eq!(death.sixes.total(), 3);

        assert_eq!(death.fours.overs, vec![15]);
        assert_eq!(death.fours.get(15, "CSK"), 1);
    }

    #[test]
    fn test_wickets_by_bowling_team() {
        let data = sample_dataset();
        let wickets = death_overs(&data).wickets;

        assert_eq!(wickets.overs, vec![14, 15, 16, 18, 20]);
        assert_eq!(wickets.teams, vec!["CSK", "MI", "RCB", "RPS", "SRH"]);
        assert_eq!(wickets.get(15, "RCB"), 1);
        assert_eq!(wickets.get(15, "CSK"), 1);
        assert_eq!(wickets.get(18, "RPS"), 1);
        assert_eq!(wickets.total(), 6);

        let rows = wickets.rows();
        assert_eq!(rows[0], (14, vec![0, 1, 0, 0, 0]));
        assert_eq!(rows[1], (15, vec![1, 0, 1, 0, 0]));
    }

    #[test]
    fn test_early_overs_are_ignored() {
        let data = sample_dataset();
        let death = death_overs(&data);
        for pivot in [&death.sixes, &death.fours, &death.wickets] {
            assert!(pivot.overs.iter().all(|&o| o >= DEATH_OVERS_START));
        }
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::new(Vec::new(), Vec::new());
        let death = death_overs(&data);
        assert!(death.sixes.is_empty());
        assert!(death.wickets.rows().is_empty());
        assert_eq!(death.fours.get(20, "MI"), 0);
    }
}
