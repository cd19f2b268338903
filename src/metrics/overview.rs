//! League-wide match views: toss, margins, awards and venues

use super::rates::percentage;
use super::ranking::{count, rank_desc, top_n, Ranked};
use crate::model::Match;

pub const TOP_AWARDS: usize = 10;

/// Share of matches for one label, in percent
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub label: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TossAnalytics {
    pub wins_by_team: Vec<Ranked<u64>>,
    pub decisions: Vec<Share>,
    /// Percent of matches won by the toss winner
    pub toss_winner_won_pct: f64,
}

pub fn toss_wins_by_team(matches: &[Match]) -> Vec<Ranked<u64>> {
    rank_desc(count(matches.iter().map(|m| m.toss_winner.as_str())))
}

pub fn toss_decision_shares(matches: &[Match]) -> Vec<Share> {
    let total = matches.len() as u64;
    rank_desc(count(matches.iter().map(|m| m.toss_decision.as_str())))
        .into_iter()
        .map(|r| Share {
            percent: percentage(r.value, total),
            count: r.value,
            label: r.name,
        })
        .collect()
}

pub fn toss_winner_won_pct(matches: &[Match]) -> f64 {
    let won = matches.iter().filter(|m| m.toss_winner_won()).count();
    percentage(won as u64, matches.len() as u64)
}

pub fn toss_analytics(matches: &[Match]) -> TossAnalytics {
    TossAnalytics {
        wins_by_team: toss_wins_by_team(matches),
        decisions: toss_decision_shares(matches),
        toss_winner_won_pct: toss_winner_won_pct(matches),
    }
}

/// The match with the largest winning margin in runs; the first such row
/// on ties
pub fn largest_win_by_runs(matches: &[Match]) -> Option<&Match> {
    let mut best: Option<&Match> = None;
    for m in matches {
        if best.map_or(true, |b| m.win_by_runs > b.win_by_runs) {
            best = Some(m);
        }
    }
    best
}

pub fn top_player_of_match(matches: &[Match], n: usize) -> Vec<Ranked<u64>> {
    top_n(
        count(matches.iter().filter_map(|m| m.player_of_match.as_deref())),
        n,
    )
}

pub fn matches_per_venue(matches: &[Match]) -> Vec<Ranked<u64>> {
    rank_desc(count(matches.iter().map(|m| m.venue.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_dataset;

    #[test]
    fn test_toss_analytics() {
        let data = sample_dataset();
        let toss = toss_analytics(data.matches());

        assert_eq!(
            toss.wins_by_team,
            vec![
                Ranked::new("CSK", 2),
                Ranked::new("RCB", 2),
                Ranked::new("MI", 1),
                Ranked::new("RPS", 1),
            ]
        );

        assert_eq!(toss.decisions.len(), 2);
        assert_eq!(toss.decisions[0].label, "field");
        assert_eq!(toss.decisions[0].count, 5);
        assert_eq!(toss.decisions[0].percent, 83.33);
        assert_eq!(toss.decisions[1].label, "bat");
        assert_eq!(toss.decisions[1].percent, 16.67);

        assert_eq!(toss.toss_winner_won_pct, 66.67);
    }

    #[test]
    fn test_empty_matches() {
        let toss = toss_analytics(&[]);
        assert!(toss.wins_by_team.is_empty());
        assert!(toss.decisions.is_empty());
        assert_eq!(toss.toss_winner_won_pct, 0.0);
        assert!(largest_win_by_runs(&[]).is_none());
    }

    #[test]
    fn test_largest_margin() {
        let data = sample_dataset();
        let m = largest_win_by_runs(data.matches()).unwrap();
        assert_eq!(m.id, 1);
        assert_eq!(m.win_by_runs, 35);
    }

    #[test]
    fn test_player_of_match_awards() {
        let data = sample_dataset();
        let top = top_player_of_match(data.matches(), 3);
        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["DJ Bravo", "KH Pandya", "SPD Smith"]);

        assert_eq!(top_player_of_match(data.matches(), TOP_AWARDS).len(), 5);
    }

    #[test]
    fn test_matches_per_venue() {
        let data = sample_dataset();
        let venues = matches_per_venue(data.matches());
        assert_eq!(venues[0], Ranked::new("Rajiv Gandhi International Stadium", 2));
        assert_eq!(venues[1], Ranked::new("Wankhede Stadium", 2));
        assert_eq!(venues[2], Ranked::new("M Chinnaswamy Stadium", 1));
        assert_eq!(venues.len(), 4);
    }
}
