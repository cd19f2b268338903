use serde::Deserialize;

/// Columns of the match table that no view uses; trimmed at load
pub const DROPPED_MATCH_COLUMNS: &[&str] = &["dl_applied", "umpire1", "umpire2", "umpire3"];

/// Columns of the delivery table that no view uses; trimmed at load
pub const DROPPED_DELIVERY_COLUMNS: &[&str] = &[
    "non_striker",
    "is_super_over",
    "bye_runs",
    "legbye_runs",
    "penalty_runs",
    "fielder",
];

pub const REQUIRED_MATCH_COLUMNS: &[&str] = &[
    "id",
    "season",
    "date",
    "venue",
    "team1",
    "team2",
    "toss_winner",
    "toss_decision",
    "result",
    "winner",
    "win_by_runs",
    "win_by_wickets",
    "player_of_match",
];

pub const REQUIRED_DELIVERY_COLUMNS: &[&str] = &[
    "match_id",
    "inning",
    "batting_team",
    "bowling_team",
    "over",
    "ball",
    "batsman",
    "bowler",
    "batsman_runs",
    "extra_runs",
    "total_runs",
    "player_dismissed",
    "dismissal_kind",
];

/// A row of matches.csv as it appears on disk
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRow {
    pub id: u32,
    pub season: String,
    pub city: Option<String>,
    pub date: String,
    pub team1: String,
    pub team2: String,
    pub toss_winner: String,
    pub toss_decision: String,
    pub result: Option<String>,
    pub winner: Option<String>,
    pub win_by_runs: Option<u32>,
    pub win_by_wickets: Option<u32>,
    pub player_of_match: Option<String>,
    pub venue: String,
}

/// A row of deliveries.csv as it appears on disk
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryRow {
    pub match_id: u32,
    pub inning: Option<u32>,
    pub batting_team: Option<String>,
    pub bowling_team: Option<String>,
    pub over: Option<u32>,
    pub ball: Option<u32>,
    pub batsman: Option<String>,
    pub bowler: Option<String>,
    pub wide_runs: Option<u32>,
    pub noball_runs: Option<u32>,
    pub batsman_runs: Option<u32>,
    pub extra_runs: Option<u32>,
    pub total_runs: Option<u32>,
    pub player_dismissed: Option<String>,
    pub dismissal_kind: Option<String>,
}
