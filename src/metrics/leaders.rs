use super::ranking::{count, tally, top_n, Ranked};
use crate::loader::Dataset;

pub const TOP_LEADERS: usize = 10;

/// League-wide leaderboards
#[derive(Debug, Clone, PartialEq)]
pub struct Leaders {
    pub run_scorers: Vec<Ranked<u64>>,
    pub wicket_takers: Vec<Ranked<u64>>,
    pub six_hitters: Vec<Ranked<u64>>,
    pub four_hitters: Vec<Ranked<u64>>,
}

pub fn top_run_scorers(data: &Dataset, n: usize) -> Vec<Ranked<u64>> {
    top_n(
        tally(
            data.deliveries()
                .iter()
                .map(|d| (d.batsman.as_str(), d.batsman_runs as u64)),
        ),
        n,
    )
}

/// Every dismissal counts toward the bowler here, run outs included
pub fn top_wicket_takers(data: &Dataset, n: usize) -> Vec<Ranked<u64>> {
    top_n(
        count(
            data.deliveries()
                .iter()
                .filter(|d| d.dismissed)
                .map(|d| d.bowler.as_str()),
        ),
        n,
    )
}

pub fn top_six_hitters(data: &Dataset, n: usize) -> Vec<Ranked<u64>> {
    top_n(
        count(
            data.deliveries()
                .iter()
                .filter(|d| d.is_six())
                .map(|d| d.batsman.as_str()),
        ),
        n,
    )
}

pub fn top_four_hitters(data: &Dataset, n: usize) -> Vec<Ranked<u64>> {
    top_n(
        count(
            data.deliveries()
                .iter()
                .filter(|d| d.is_four())
                .map(|d| d.batsman.as_str()),
        ),
        n,
    )
}

pub fn leaders(data: &Dataset, n: usize) -> Leaders {
    Leaders {
        run_scorers: top_run_scorers(data, n),
        wicket_takers: top_wicket_takers(data, n),
        six_hitters: top_six_hitters(data, n),
        four_hitters: top_four_hitters(data, n),
    }
}
