//! Explicit query predicates over the two tables

use crate::loader::Dataset;
use crate::model::{Delivery, Match};
use std::collections::{BTreeSet, HashSet};

/// Selection label meaning "every season"
pub const ALL_SEASONS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeasonFilter {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl SeasonFilter {
    /// Build from a user selection. The `All` label anywhere in the
    /// selection wins; an empty selection matches nothing.
    pub fn from_selection<I, S>(selection: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seasons = BTreeSet::new();
        for s in selection {
            let s = s.as_ref().trim();
            if s.eq_ignore_ascii_case(ALL_SEASONS) {
                return SeasonFilter::All;
            }
            seasons.insert(s.to_string());
        }
        SeasonFilter::Only(seasons)
    }

    pub fn single(season: &str) -> Self {
        Self::from_selection([season])
    }

    pub fn accepts(&self, season: &str) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Only(seasons) => seasons.contains(season),
        }
    }
}

/// Predicate over match rows
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub team: Option<String>,
    pub seasons: SeasonFilter,
}

impl MatchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    pub fn with_seasons(mut self, seasons: SeasonFilter) -> Self {
        self.seasons = seasons;
        self
    }

    pub fn accepts(&self, m: &Match) -> bool {
        if let Some(team) = &self.team {
            if !m.involves(team) {
                return false;
            }
        }
        self.seasons.accepts(&m.season)
    }

    pub fn apply<'a, 'm: 'a>(&'a self, matches: &'m [Match]) -> impl Iterator<Item = &'m Match> + 'a {
        matches.iter().filter(move |m| self.accepts(m))
    }

    pub fn match_ids(&self, matches: &[Match]) -> HashSet<u32> {
        self.apply(matches).map(|m| m.id).collect()
    }
}

/// Predicate over delivery rows
#[derive(Debug, Clone, Default)]
pub struct DeliveryFilter {
    pub batsman: Option<String>,
    pub bowler: Option<String>,
    pub batting_team: Option<String>,
    pub bowling_team: Option<String>,
    pub match_ids: Option<HashSet<u32>>,
    pub min_over: Option<u32>,
}

impl DeliveryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batsman(mut self, name: &str) -> Self {
        self.batsman = Some(name.to_string());
        self
    }

    pub fn bowler(mut self, name: &str) -> Self {
        self.bowler = Some(name.to_string());
        self
    }

    pub fn batting_team(mut self, team: &str) -> Self {
        self.batting_team = Some(team.to_string());
        self
    }

    pub fn bowling_team(mut self, team: &str) -> Self {
        self.bowling_team = Some(team.to_string());
        self
    }

    pub fn in_matches(mut self, ids: HashSet<u32>) -> Self {
        self.match_ids = Some(ids);
        self
    }

    pub fn from_over(mut self, over: u32) -> Self {
        self.min_over = Some(over);
        self
    }

    pub fn accepts(&self, d: &Delivery) -> bool {
        fn same(want: &Option<String>, have: &str) -> bool {
            want.as_deref().map_or(true, |w| w == have)
        }

        same(&self.batsman, &d.batsman)
            && same(&self.bowler, &d.bowler)
            && same(&self.batting_team, &d.batting_team)
            && same(&self.bowling_team, &d.bowling_team)
            && self
                .match_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&d.match_id))
            && self.min_over.map_or(true, |over| d.over >= over)
    }

    pub fn apply<'a, 'd: 'a>(&'a self, data: &'d Dataset) -> impl Iterator<Item = &'d Delivery> + 'a {
        data.deliveries().iter().filter(move |d| self.accepts(d))
    }
}

/// Ids of the matches played in one season
pub fn season_match_ids(matches: &[Match], season: &str) -> HashSet<u32> {
    MatchFilter::new()
        .with_seasons(SeasonFilter::single(season))
        .match_ids(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_dataset;

    #[test]
    fn test_season_selection() {
        assert_eq!(SeasonFilter::from_selection(["2017", "All"]), SeasonFilter::All);
        assert_eq!(SeasonFilter::from_selection(["all"]), SeasonFilter::All);

        let only = SeasonFilter::from_selection(["2017", "2018"]);
        assert!(only.accepts("2017"));
        assert!(!only.accepts("2019"));

        let empty = SeasonFilter::from_selection(Vec::<String>::new());
        assert!(!empty.accepts("2017"));
    }

    #[test]
    fn test_match_filter() {
        let data = sample_dataset();
        let filter = MatchFilter::new()
            .with_team("MI")
            .with_seasons(SeasonFilter::single("2018"));
        let ids: Vec<u32> = filter.apply(data.matches()).map(|m| m.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_rows_outlive_the_filter() {
        let data = sample_dataset();
        let rows: Vec<&Delivery> = DeliveryFilter::new().batsman("V Kohli").apply(&data).collect();
        assert_eq!(rows.len(), 5);

        let matches: Vec<&Match> = MatchFilter::new().with_team("CSK").apply(data.matches()).collect();
        assert_eq!(matches.iter().map(|m| m.id).collect::<Vec<_>>(), vec![4, 6]);
    }

    #[test]
    fn test_delivery_filter() {
        let data = sample_dataset();
        let filter = DeliveryFilter::new()
            .bowler("JJ Bumrah")
            .in_matches(season_match_ids(data.matches(), "2017"));
        assert_eq!(filter.apply(&data).count(), 6);

        let death = DeliveryFilter::new().from_over(19);
        assert!(death.apply(&data).all(|d| d.over >= 19));
        assert_eq!(death.apply(&data).count(), 3);
    }
}
