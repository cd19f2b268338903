use super::tables::*;
use crate::error::DataLoadError;
use crate::model::team::{normalize_team, normalize_team_opt};
use crate::model::{dismissed_flag, parse_match_date, Delivery, Match, MatchResult};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn open(path: &Path) -> Result<File, DataLoadError> {
    if !path.is_file() {
        return Err(DataLoadError::MissingFile(path.to_path_buf()));
    }
    Ok(File::open(path)?)
}

/// Fail if any required column is absent from the header row
fn check_columns(
    headers: &StringRecord,
    required: &[&str],
    table: &'static str,
) -> Result<(), DataLoadError> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataLoadError::MissingColumn {
                table,
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn log_dropped(headers: &StringRecord, dropped: &[&str], table: &str) {
    for column in dropped {
        if headers.iter().any(|h| h == *column) {
            log::debug!("Dropping unused {} column '{}'", table, column);
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

/// Read and normalize the match table
pub fn read_matches<R: Read>(input: R) -> Result<Vec<Match>, DataLoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let headers = reader.headers()?.clone();
    check_columns(&headers, REQUIRED_MATCH_COLUMNS, "match")?;

    log_dropped(&headers, DROPPED_MATCH_COLUMNS, "match");

    let mut matches = Vec::new();
    for result in reader.deserialize() {
        let row: MatchRow = result?;
        matches.push(match_from_row(row));
    }
    Ok(matches)
}

fn match_from_row(row: MatchRow) -> Match {
    let date = parse_match_date(&row.date);
    if date.is_none() {
        log::warn!("Match {}: unparsable date '{}'", row.id, row.date);
    }

    let m = Match {
        id: row.id,
        season: row.season,
        date,
        venue: row.venue,
        city: non_empty(row.city),
        team1: normalize_team(row.team1),
        team2: normalize_team(row.team2),
        toss_winner: normalize_team(row.toss_winner),
        toss_decision: row.toss_decision,
        result: MatchResult::parse(row.result.as_deref().unwrap_or("")),
        winner: normalize_team_opt(non_empty(row.winner)),
        win_by_runs: row.win_by_runs.unwrap_or(0),
        win_by_wickets: row.win_by_wickets.unwrap_or(0),
        player_of_match: non_empty(row.player_of_match),
    };

    if m.team1 == m.team2 {
        log::warn!("Match {}: team1 and team2 are both '{}'", m.id, m.team1);
    }
    if !m.winner_is_consistent() {
        log::warn!(
            "Match {}: winner '{}' is neither {} nor {}",
            m.id,
            m.winner.as_deref().unwrap_or(""),
            m.team1,
            m.team2
        );
    }
    m
}

/// Read and normalize the delivery table, filling missing values and
/// deriving the `dismissed` flag
pub fn read_deliveries<R: Read>(input: R) -> Result<Vec<Delivery>, DataLoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let headers = reader.headers()?.clone();
    check_columns(&headers, REQUIRED_DELIVERY_COLUMNS, "delivery")?;
    log_dropped(&headers, DROPPED_DELIVERY_COLUMNS, "delivery");

    let mut deliveries = Vec::new();
    let mut mismatched = 0usize;
    for result in reader.deserialize() {
        let row: DeliveryRow = result?;
        let delivery = delivery_from_row(row);
        if delivery.batting_team == delivery.bowling_team {
            mismatched += 1;
        }
        deliveries.push(delivery);
    }

    if mismatched > 0 {
        log::warn!(
            "{} deliveries have the same batting and bowling team",
            mismatched
        );
    }
    Ok(deliveries)
}

fn delivery_from_row(row: DeliveryRow) -> Delivery {
    let player_dismissed = row.player_dismissed.unwrap_or_default();
    let dismissed = dismissed_flag(&player_dismissed);

    Delivery {
        match_id: row.match_id,
        inning: row.inning.unwrap_or(0),
        batting_team: normalize_team(row.batting_team.unwrap_or_default()),
        bowling_team: normalize_team(row.bowling_team.unwrap_or_default()),
        over: row.over.unwrap_or(0),
        ball: row.ball.unwrap_or(0),
        batsman: row.batsman.unwrap_or_default(),
        bowler: row.bowler.unwrap_or_default(),
        wide_runs: row.wide_runs.unwrap_or(0),
        noball_runs: row.noball_runs.unwrap_or(0),
        batsman_runs: row.batsman_runs.unwrap_or(0),
        extra_runs: row.extra_runs.unwrap_or(0),
        total_runs: row.total_runs.unwrap_or(0),
        player_dismissed: if dismissed { player_dismissed } else { String::new() },
        dismissal_kind: row.dismissal_kind.unwrap_or_default(),
        dismissed,
    }
}

pub fn read_matches_file(path: &Path) -> Result<Vec<Match>, DataLoadError> {
    read_matches(open(path)?)
}

pub fn read_deliveries_file(path: &Path) -> Result<Vec<Delivery>, DataLoadError> {
    read_deliveries(open(path)?)
}
