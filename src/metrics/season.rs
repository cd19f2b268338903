//! Season-level views: finals, caps and per-season counts

use super::filter::{season_match_ids, DeliveryFilter};
use super::ranking::{count, in_key_order, leader, tally, Ranked};
use crate::loader::Dataset;
use crate::model::Match;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSummary {
    pub season: String,
    pub final_match_id: u32,
    pub finalist_1: String,
    pub finalist_2: String,
    pub winner: Option<String>,
    /// Leading run-scorer
    pub orange_cap: Option<Ranked<u64>>,
    /// Leading wicket-taker, counting every dismissal
    pub purple_cap: Option<Ranked<u64>>,
}

/// The chronologically last match of a season. Undated matches sort first;
/// equal dates fall back to the higher id.
pub fn season_final<'a>(matches: &'a [Match], season: &str) -> Option<&'a Match> {
    matches
        .iter()
        .filter(|m| m.season == season)
        .max_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)))
}

pub fn orange_cap(data: &Dataset, season: &str) -> Option<Ranked<u64>> {
    let filter = DeliveryFilter::new().in_matches(season_match_ids(data.matches(), season));
    leader(tally(
        filter
            .apply(data)
            .map(|d| (d.batsman.as_str(), d.batsman_runs as u64)),
    ))
}

pub fn purple_cap(data: &Dataset, season: &str) -> Option<Ranked<u64>> {
    let filter = DeliveryFilter::new().in_matches(season_match_ids(data.matches(), season));
    leader(count(
        filter
            .apply(data)
            .filter(|d| d.dismissed)
            .map(|d| d.bowler.as_str()),
    ))
}

/// One row per season, in season order
pub fn season_summaries(data: &Dataset) -> Vec<SeasonSummary> {
    data.seasons()
        .into_iter()
        .filter_map(|season| {
            let final_match = season_final(data.matches(), &season)?;
            Some(SeasonSummary {
                final_match_id: final_match.id,
                finalist_1: final_match.team1.clone(),
                finalist_2: final_match.team2.clone(),
                winner: final_match.winner.clone(),
                orange_cap: orange_cap(data, &season),
                purple_cap: purple_cap(data, &season),
                season,
            })
        })
        .collect()
}

pub fn matches_per_season(matches: &[Match]) -> Vec<Ranked<u64>> {
    in_key_order(count(matches.iter().map(|m| m.season.as_str())))
}

/// season -> toss decision -> count
pub fn toss_decisions_per_season(matches: &[Match]) -> BTreeMap<String, BTreeMap<String, u64>> {
    let mut table: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
    for m in matches {
        *table
            .entry(m.season.clone())
            .or_default()
            .entry(m.toss_decision.clone())
            .or_insert(0) += 1;
    }
    table
}
