//! Team profile for a season selection

use super::filter::{DeliveryFilter, MatchFilter, SeasonFilter};
use super::rates::{bowling_strike_rate, economy_per_ball, mean, percentage, round2};
use super::ranking::{tally, top_n, Ranked};
use crate::loader::Dataset;
use crate::model::{Delivery, Match};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const TOP_PLAYERS: usize = 5;

/// One of the team's leading wicket-takers
#[derive(Debug, Clone, PartialEq)]
pub struct TeamBowler {
    pub name: String,
    /// All dismissals on the bowler's deliveries
    pub wickets: u64,
    /// Deliveries that were neither wides nor no-balls
    pub legal_balls: u64,
    pub runs_conceded: u64,
    pub economy: f64,
    pub strike_rate: f64,
}

/// A match in the team's selection
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMatch {
    pub id: u32,
    pub season: String,
    pub date: Option<NaiveDate>,
    pub city: Option<String>,
    pub venue: String,
    pub opponent: String,
    pub winner: Option<String>,
    pub player_of_match: Option<String>,
}

impl TeamMatch {
    fn new(m: &Match, team: &str) -> Self {
        let opponent = if m.team1 == team { &m.team2 } else { &m.team1 };
        TeamMatch {
            id: m.id,
            season: m.season.clone(),
            date: m.date,
            city: m.city.clone(),
            venue: m.venue.clone(),
            opponent: opponent.clone(),
            winner: m.winner.clone(),
            player_of_match: m.player_of_match.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Innings {
    First,
    Second,
}

impl Innings {
    pub fn from_number(inning: u32) -> Option<Self> {
        match inning {
            1 => Some(Innings::First),
            2 => Some(Innings::Second),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Innings::First => "First Innings",
            Innings::Second => "Second Innings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Win,
    /// Anything other than a win, no results included
    Loss,
}

/// Average innings total in one city, split by innings and outcome.
/// `None` where the team has no such innings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityScores {
    pub city: String,
    pub first_win: Option<f64>,
    pub first_loss: Option<f64>,
    pub second_win: Option<f64>,
    pub second_loss: Option<f64>,
}

impl CityScores {
    pub fn get(&self, innings: Innings, outcome: Outcome) -> Option<f64> {
        match (innings, outcome) {
            (Innings::First, Outcome::Win) => self.first_win,
            (Innings::First, Outcome::Loss) => self.first_loss,
            (Innings::Second, Outcome::Win) => self.second_win,
            (Innings::Second, Outcome::Loss) => self.second_loss,
        }
    }

    fn set(&mut self, innings: Innings, outcome: Outcome, value: f64) {
        let slot = match (innings, outcome) {
            (Innings::First, Outcome::Win) => &mut self.first_win,
            (Innings::First, Outcome::Loss) => &mut self.first_loss,
            (Innings::Second, Outcome::Win) => &mut self.second_win,
            (Innings::Second, Outcome::Loss) => &mut self.second_loss,
        };
        *slot = Some(value);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamProfile {
    pub team: String,
    pub played: usize,
    pub wins: usize,
    pub no_results: usize,
    pub losses: usize,
    pub win_pct: f64,
    pub top_scorers: Vec<Ranked<u64>>,
    pub top_wicket_takers: Vec<TeamBowler>,
    /// Mean team total per match batted
    pub average_score: f64,
    pub fours: u64,
    pub sixes: u64,
    pub city_scores: Vec<CityScores>,
    /// Selected matches in table order
    pub matches: Vec<TeamMatch>,
}

impl TeamProfile {
    pub fn is_empty(&self) -> bool {
        self.played == 0
    }
}

/// Played, won, no result, lost
pub fn record(matches: &[&Match], team: &str) -> (usize, usize, usize, usize) {
    let played = matches.len();
    let no_results = matches.iter().filter(|m| m.is_no_result()).count();
    let wins = matches
        .iter()
        .filter(|m| !m.is_no_result() && m.won_by(team))
        .count();
    (played, wins, no_results, played - wins - no_results)
}

pub fn team_profile(data: &Dataset, team: &str, seasons: &SeasonFilter) -> TeamProfile {
    let filter = MatchFilter::new()
        .with_team(team)
        .with_seasons(seasons.clone());
    let selected: Vec<&Match> = filter.apply(data.matches()).collect();
    let match_ids = filter.match_ids(data.matches());

    let (played, wins, no_results, losses) = record(&selected, team);

    // Deliveries of the selected matches, split by side
    let batting: Vec<_> = DeliveryFilter::new()
        .batting_team(team)
        .in_matches(match_ids.clone())
        .apply(data)
        .collect();
    let bowling: Vec<_> = DeliveryFilter::new()
        .bowling_team(team)
        .in_matches(match_ids)
        .apply(data)
        .collect();

    // Team total per match batted
    let match_totals = tally(
        batting
            .iter()
            .map(|d| (d.match_id.to_string(), d.total_runs as u64)),
    );
    let total_runs: u64 = match_totals.values().sum();

    TeamProfile {
        team: team.to_string(),
        played,
        wins,
        no_results,
        losses,
        win_pct: percentage(wins as u64, (played - no_results) as u64),
        top_scorers: top_n(
            tally(
                batting
                    .iter()
                    .map(|d| (d.batsman.as_str(), d.batsman_runs as u64)),
            ),
            TOP_PLAYERS,
        ),
        top_wicket_takers: top_team_bowlers(&bowling, TOP_PLAYERS),
        average_score: mean(total_runs as f64, match_totals.len()),
        fours: batting.iter().filter(|d| d.is_four()).count() as u64,
        sixes: batting.iter().filter(|d| d.is_six()).count() as u64,
        city_scores: city_scores(data, team, &batting),
        matches: selected.iter().map(|m| TeamMatch::new(m, team)).collect(),
    }
}

fn top_team_bowlers(bowling: &[&Delivery], n: usize) -> Vec<TeamBowler> {
    #[derive(Default)]
    struct Acc {
        wickets: u64,
        legal_balls: u64,
        runs: u64,
    }

    let mut by_bowler: BTreeMap<&str, Acc> = BTreeMap::new();
    for d in bowling {
        let acc = by_bowler.entry(d.bowler.as_str()).or_default();
        acc.runs += d.total_runs as u64;
        if d.dismissed {
            acc.wickets += 1;
        }
        if d.is_legal() {
            acc.legal_balls += 1;
        }
    }

    // Bowlers with only wides and no-balls have no rate
    let mut bowlers: Vec<TeamBowler> = by_bowler
        .into_iter()
        .filter(|(_, acc)| acc.legal_balls > 0)
        .map(|(name, acc)| TeamBowler {
            name: name.to_string(),
            wickets: acc.wickets,
            legal_balls: acc.legal_balls,
            runs_conceded: acc.runs,
            economy: economy_per_ball(acc.runs, acc.legal_balls),
            strike_rate: bowling_strike_rate(acc.legal_balls, acc.wickets),
        })
        .collect();
    bowlers.sort_by(|a, b| b.wickets.cmp(&a.wickets));
    bowlers.truncate(n);
    bowlers
}

/// Pivot of average innings totals keyed by (city, innings, outcome).
/// Innings beyond the second (super overs) and matches without a city
/// are left out.
fn city_scores(
    data: &Dataset,
    team: &str,
    batting: &[&Delivery],
) -> Vec<CityScores> {
    let mut innings_totals: BTreeMap<(u32, Innings), u64> = BTreeMap::new();
    for d in batting {
        if let Some(innings) = Innings::from_number(d.inning) {
            *innings_totals.entry((d.match_id, innings)).or_insert(0) += d.total_runs as u64;
        }
    }

    // Average the innings totals per (city, innings, outcome)
    let mut groups: BTreeMap<(String, Innings, Outcome), (u64, usize)> = BTreeMap::new();
    for ((match_id, innings), total) in innings_totals {
        let Some(m) = data.match_by_id(match_id) else {
            continue;
        };
        let Some(city) = m.city.as_ref() else {
            continue;
        };
        let outcome = if m.won_by(team) {
            Outcome::Win
        } else {
            Outcome::Loss
        };
        let entry = groups.entry((city.clone(), innings, outcome)).or_insert((0, 0));
        entry.0 += total;
        entry.1 += 1;
    }

    let mut rows: BTreeMap<String, CityScores> = BTreeMap::new();
    for ((city, innings, outcome), (sum, n)) in groups {
        rows.entry(city.clone())
            .or_insert_with(|| CityScores {
                city,
                ..Default::default()
            })
            .set(innings, outcome, round2(sum as f64 / n as f64));
    }
    rows.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_dataset;

    #[test]
    fn test_team_profile_all_seasons() {
        let data = sample_dataset();
        let p = team_profile(&data, "MI", &SeasonFilter::All);

        assert_eq!(p.played, 4);
        assert_eq!(p.wins, 1);
        assert_eq!(p.no_results, 1);
        assert_eq!(p.losses, 2);
        assert_eq!(p.win_pct, 33.33);

        assert_eq!(
            p.top_scorers,
            vec![
                Ranked::new("RG Sharma", 15),
                Ranked::new("KA Pollard", 6),
                Ranked::new("KH Pandya", 0),
            ]
        );
        assert_eq!(p.average_score, 7.0);
        assert_eq!((p.fours, p.sixes), (2, 2));

        assert_eq!(p.top_wicket_takers.len(), 1);
        let bumrah = &p.top_wicket_takers[0];
        assert_eq!(bumrah.name, "JJ Bumrah");
        assert_eq!(bumrah.wickets, 5);
        assert_eq!(bumrah.legal_balls, 11);
        assert_eq!(bumrah.economy, 9.82);
        assert_eq!(bumrah.strike_rate, 2.2);
    }

    #[test]
    fn test_match_list() {
        let data = sample_dataset();
        let p = team_profile(&data, "MI", &SeasonFilter::All);
        let ids: Vec<u32> = p.matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);

        let final_2017 = &p.matches[1];
        assert_eq!(final_2017.opponent, "RPS");
        assert_eq!(final_2017.city.as_deref(), Some("Hyderabad"));
        assert_eq!(final_2017.venue, "Rajiv Gandhi International Stadium");
        assert_eq!(final_2017.winner.as_deref(), Some("MI"));
        assert_eq!(final_2017.player_of_match.as_deref(), Some("KH Pandya"));

        let washed_out = &p.matches[3];
        assert_eq!(washed_out.opponent, "RCB");
        assert_eq!(washed_out.winner, None);

        let p = team_profile(&data, "MI", &SeasonFilter::single("2018"));
        assert_eq!(p.matches.len(), p.played);
    }

    #[test]
    fn test_bowlers_without_legal_balls_are_left_out() {
        let csv_matches = "\
id,season,date,venue,team1,team2,toss_winner,toss_decision,result,winner,win_by_runs,win_by_wickets,player_of_match
7,2019,2019-04-01,Eden Gardens,KKR,DD,KKR,bat,normal,KKR,10,0,SP Narine
";
        let csv_deliveries = "\
match_id,inning,batting_team,bowling_team,over,ball,batsman,bowler,wide_runs,noball_runs,batsman_runs,extra_runs,total_runs,player_dismissed,dismissal_kind
7,2,DD,KKR,1,1,PP Shaw,SP Narine,0,0,0,0,0,PP Shaw,bowled
7,2,DD,KKR,1,2,S Iyer,SP Narine,0,0,1,0,1,,
7,2,DD,KKR,2,1,S Iyer,PP Chawla,1,0,0,1,1,,
7,2,DD,KKR,2,1,RR Pant,PP Chawla,1,0,0,1,1,RR Pant,stumped
7,2,DD,KKR,2,1,RR Pant,PP Chawla,0,1,0,1,1,,
";
        let data = Dataset::from_readers(csv_matches.as_bytes(), csv_deliveries.as_bytes()).unwrap();
        let p = team_profile(&data, "KKR", &SeasonFilter::All);

        assert_eq!(p.top_wicket_takers.len(), 1);
        assert_eq!(p.top_wicket_takers[0].name, "SP Narine");
        assert_eq!(p.top_wicket_takers[0].economy, 3.0);
        assert_eq!(p.top_wicket_takers[0].strike_rate, 2.0);
    }

    #[test]
    fn test_city_scores_pivot() {
        let data = sample_dataset();
        let p = team_profile(&data, "MI", &SeasonFilter::All);
        let cities: Vec<&str> = p.city_scores.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(cities, vec!["Hyderabad", "Mumbai", "Pune"]);

        let hyd = &p.city_scores[0];
        assert_eq!(hyd.get(Innings::First, Outcome::Win), Some(4.0));
        assert_eq!(hyd.get(Innings::First, Outcome::Loss), None);
        assert_eq!(hyd.get(Innings::Second, Outcome::Win), None);

        assert_eq!(p.city_scores[1].first_loss, Some(10.0));
        assert_eq!(p.city_scores[2].first_loss, Some(7.0));
    }

    #[test]
    fn test_season_filter() {
        let data = sample_dataset();
        let p = team_profile(&data, "MI", &SeasonFilter::single("2018"));
        assert_eq!((p.played, p.wins, p.no_results, p.losses), (2, 0, 1, 1));
        assert_eq!(p.win_pct, 0.0);

        let p = team_profile(&data, "MI", &SeasonFilter::from_selection(["2017", "2018"]));
        assert_eq!(p.played, 4);
    }

    #[test]
    fn test_empty_selection() {
        let data = sample_dataset();
        let p = team_profile(&data, "MI", &SeasonFilter::from_selection(Vec::<&str>::new()));
        assert!(p.is_empty());
        assert_eq!(p.losses, 0);
        assert_eq!(p.win_pct, 0.0);
        assert_eq!(p.average_score, 0.0);

        let p = team_profile(&data, "XYZ", &SeasonFilter::All);
        assert!(p.is_empty());
        assert!(p.top_scorers.is_empty());
        assert!(p.city_scores.is_empty());
    }

    #[test]
    fn test_losses_never_negative() {
        let data = sample_dataset();
        for team in data.teams() {
            for season in data.seasons() {
                let p = team_profile(&data, &team, &SeasonFilter::single(&season));
                assert_eq!(p.played, p.wins + p.no_results + p.losses);
            }
        }
    }
}
