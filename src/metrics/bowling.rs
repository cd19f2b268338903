//! Bowler profiles and head-to-head bowler comparison

use super::batting::{boundaries_by, distinct_matches, BoundarySplit, COMPARISON_VENUES};
use super::filter::DeliveryFilter;
use super::rates::{bowling_strike_rate, completed_overs, economy_rate};
use super::ranking::{count, in_key_order, rank_desc, top_n, Ranked};
use crate::loader::Dataset;
use crate::model::Delivery;
use std::collections::{BTreeMap, HashMap};

pub const TOP_OPPONENTS: usize = 10;
pub const TOP_VENUES: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hauls {
    /// Innings with exactly four credited wickets
    pub four_wickets: usize,
    /// Innings with five or more
    pub five_plus_wickets: usize,
}

pub fn hauls(credited: &[&Delivery]) -> Hauls {
    let mut per_innings: HashMap<(u32, u32), usize> = HashMap::new();
    for d in credited {
        *per_innings.entry((d.match_id, d.inning)).or_insert(0) += 1;
    }
    Hauls {
        four_wickets: per_innings.values().filter(|&&n| n == 4).count(),
        five_plus_wickets: per_innings.values().filter(|&&n| n >= 5).count(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BowlerProfile {
    pub name: String,
    pub matches: usize,
    pub balls: u64,
    pub overs: u64,
    pub runs_conceded: u64,
    /// Dismissals credited to the bowler
    pub wickets: u64,
    pub economy: f64,
    pub strike_rate: f64,
    pub hauls: Hauls,
    /// Every dismissal on this bowler's deliveries, by kind
    pub dismissal_kinds: Vec<Ranked<u64>>,
    pub wickets_by_season: Vec<Ranked<u64>>,
    pub wickets_by_opponent: Vec<Ranked<u64>>,
    pub wickets_by_venue: Vec<Ranked<u64>>,
    pub fours_conceded: u64,
    pub sixes_conceded: u64,
    pub boundaries_by_opponent: Vec<BoundarySplit>,
}

impl BowlerProfile {
    pub fn is_empty(&self) -> bool {
        self.balls == 0
    }
}

fn bowler_rows<'a>(data: &'a Dataset, name: &str) -> Vec<&'a Delivery> {
    DeliveryFilter::new().bowler(name).apply(data).collect()
}

fn credited<'a>(rows: &[&'a Delivery]) -> Vec<&'a Delivery> {
    rows.iter().copied().filter(|d| d.is_bowler_wicket()).collect()
}

fn wickets_by_venue(data: &Dataset, wickets: &[&Delivery]) -> BTreeMap<String, u64> {
    count(wickets.iter().filter_map(|d| data.venue_of(d.match_id)))
}

pub fn bowler_profile(data: &Dataset, name: &str) -> BowlerProfile {
    let rows = bowler_rows(data, name);
    let wickets = credited(&rows);

    let balls = rows.len() as u64;
    let overs = completed_overs(balls);
    let runs_conceded: u64 = rows.iter().map(|d| d.total_runs as u64).sum();
    let wicket_count = wickets.len() as u64;

    BowlerProfile {
        name: name.to_string(),
        matches: distinct_matches(&rows),
        balls,
        overs,
        runs_conceded,
        wickets: wicket_count,
        economy: economy_rate(runs_conceded, overs),
        strike_rate: bowling_strike_rate(balls, wicket_count),
        hauls: hauls(&wickets),
        dismissal_kinds: rank_desc(count(
            rows.iter()
                .filter(|d| d.dismissed)
                .map(|d| d.dismissal_kind.as_str()),
        )),
        wickets_by_season: in_key_order(count(
            wickets.iter().filter_map(|d| data.season_of(d.match_id)),
        )),
        wickets_by_opponent: top_n(
            count(wickets.iter().map(|d| d.batting_team.as_str())),
            TOP_OPPONENTS,
        ),
        wickets_by_venue: top_n(wickets_by_venue(data, &wickets), TOP_VENUES),
        fours_conceded: rows.iter().filter(|d| d.is_four()).count() as u64,
        sixes_conceded: rows.iter().filter(|d| d.is_six()).count() as u64,
        boundaries_by_opponent: boundaries_by(&rows, |d| d.batting_team.as_str()),
    }
}

/// Headline numbers shown when two bowlers are compared
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BowlerSummary {
    pub name: String,
    pub matches: usize,
    pub wickets: u64,
    pub economy: f64,
    pub strike_rate: f64,
    pub fours_conceded: u64,
    pub sixes_conceded: u64,
    pub top_venues: Vec<Ranked<u64>>,
}

pub fn bowler_summary(data: &Dataset, name: &str) -> BowlerSummary {
    let rows = bowler_rows(data, name);
    let wickets = credited(&rows);
    let balls = rows.len() as u64;
    let runs: u64 = rows.iter().map(|d| d.total_runs as u64).sum();

    BowlerSummary {
        name: name.to_string(),
        matches: distinct_matches(&rows),
        wickets: wickets.len() as u64,
        economy: economy_rate(runs, completed_overs(balls)),
        strike_rate: bowling_strike_rate(balls, wickets.len() as u64),
        fours_conceded: rows.iter().filter(|d| d.is_four()).count() as u64,
        sixes_conceded: rows.iter().filter(|d| d.is_six()).count() as u64,
        top_venues: top_n(wickets_by_venue(data, &wickets), COMPARISON_VENUES),
    }
}

pub fn compare_bowlers(data: &Dataset, first: &str, second: &str) -> (BowlerSummary, BowlerSummary) {
    (bowler_summary(data, first), bowler_summary(data, second))
}
