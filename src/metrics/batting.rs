//! Batter profiles and head-to-head batter comparison

use super::filter::DeliveryFilter;
use super::rates::batting_strike_rate;
use super::ranking::{count, in_key_order, rank_desc, tally, top_n, Ranked};
use crate::loader::Dataset;
use crate::model::Delivery;
use std::collections::{BTreeMap, HashSet};

pub const TOP_VENUES: usize = 10;
pub const COMPARISON_VENUES: usize = 5;

/// Fours and sixes against (or conceded to) one team
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundarySplit {
    pub team: String,
    pub fours: u64,
    pub sixes: u64,
}

/// Group boundary balls by a team key, in team order
pub(crate) fn boundaries_by<'a, F>(rows: &[&'a Delivery], team_of: F) -> Vec<BoundarySplit>
where
    F: Fn(&'a Delivery) -> &'a str,
{
    let mut by_team: BTreeMap<&str, BoundarySplit> = BTreeMap::new();
    for d in rows.iter().copied().filter(|d| d.is_boundary()) {
        let team = team_of(d);
        let entry = by_team.entry(team).or_insert_with(|| BoundarySplit {
            team: team.to_string(),
            ..Default::default()
        });
        if d.is_four() {
            entry.fours += 1;
        } else {
            entry.sixes += 1;
        }
    }
    by_team.into_values().collect()
}

pub(crate) fn distinct_matches(rows: &[&Delivery]) -> usize {
    rows.iter().map(|d| d.match_id).collect::<HashSet<_>>().len()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatterProfile {
    pub name: String,
    pub runs: u64,
    /// Every delivery faced, extras included
    pub balls: u64,
    pub strike_rate: f64,
    pub matches: usize,
    pub fours: u64,
    pub sixes: u64,
    pub runs_by_opponent: Vec<Ranked<u64>>,
    pub runs_by_season: Vec<Ranked<u64>>,
    pub runs_by_venue: Vec<Ranked<u64>>,
    pub dismissals: Vec<Ranked<u64>>,
    pub boundaries_by_opponent: Vec<BoundarySplit>,
}

impl BatterProfile {
    /// The batter faced no deliveries
    pub fn is_empty(&self) -> bool {
        self.balls == 0
    }
}

fn batter_rows<'a>(data: &'a Dataset, name: &str) -> Vec<&'a Delivery> {
    DeliveryFilter::new().batsman(name).apply(data).collect()
}

fn runs_by_venue(data: &Dataset, rows: &[&Delivery]) -> BTreeMap<String, u64> {
    tally(rows.iter().filter_map(|d| {
        data.venue_of(d.match_id)
            .map(|venue| (venue, d.batsman_runs as u64))
    }))
}

pub fn batter_profile(data: &Dataset, name: &str) -> BatterProfile {
    let rows = batter_rows(data, name);
    let runs: u64 = rows.iter().map(|d| d.batsman_runs as u64).sum();
    let balls = rows.len() as u64;

    let runs_by_season = tally(rows.iter().filter_map(|d| {
        data.season_of(d.match_id)
            .map(|season| (season, d.batsman_runs as u64))
    }));

    let dismissals = count(
        rows.iter()
            .filter(|d| d.dismissed && d.player_dismissed == name)
            .map(|d| d.dismissal_kind.as_str()),
    );

    BatterProfile {
        name: name.to_string(),
        runs,
        balls,
        strike_rate: batting_strike_rate(runs, balls),
        matches: distinct_matches(&rows),
        fours: rows.iter().filter(|d| d.is_four()).count() as u64,
        sixes: rows.iter().filter(|d| d.is_six()).count() as u64,
        runs_by_opponent: rank_desc(tally(
            rows.iter()
                .map(|d| (d.bowling_team.as_str(), d.batsman_runs as u64)),
        )),
        runs_by_season: in_key_order(runs_by_season),
        runs_by_venue: top_n(runs_by_venue(data, &rows), TOP_VENUES),
        dismissals: rank_desc(dismissals),
        boundaries_by_opponent: boundaries_by(&rows, |d| d.bowling_team.as_str()),
    }
}

/// Headline numbers shown when two batters are compared
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatterSummary {
    pub name: String,
    pub matches: usize,
    pub runs: u64,
    pub balls: u64,
    pub strike_rate: f64,
    pub fours: u64,
    pub sixes: u64,
    pub top_venues: Vec<Ranked<u64>>,
}

pub fn batter_summary(data: &Dataset, name: &str) -> BatterSummary {
    let rows = batter_rows(data, name);
    let runs: u64 = rows.iter().map(|d| d.batsman_runs as u64).sum();
    let balls = rows.len() as u64;

    BatterSummary {
        name: name.to_string(),
        matches: distinct_matches(&rows),
        runs,
        balls,
        strike_rate: batting_strike_rate(runs, balls),
        fours: rows.iter().filter(|d| d.is_four()).count() as u64,
        sixes: rows.iter().filter(|d| d.is_six()).count() as u64,
        top_venues: top_n(runs_by_venue(data, &rows), COMPARISON_VENUES),
    }
}

pub fn compare_batters(data: &Dataset, first: &str, second: &str) -> (BatterSummary, BatterSummary) {
    (batter_summary(data, first), batter_summary(data, second))
}
