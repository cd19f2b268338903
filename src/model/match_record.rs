use chrono::NaiveDate;
use std::fmt;

/// Outcome class recorded in the `result` column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MatchResult {
    #[default]
    Normal,
    Tie,
    NoResult,
    Other(String),
}

impl MatchResult {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "normal" => MatchResult::Normal,
            "tie" => MatchResult::Tie,
            "no result" => MatchResult::NoResult,
            _ => MatchResult::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MatchResult::Normal => "normal",
            MatchResult::Tie => "tie",
            MatchResult::NoResult => "no result",
            MatchResult::Other(s) => s,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a match date in any of the layouts the source uses
pub fn parse_match_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // `%Y` accepts two digits too, so the short year form goes first
    ["%Y-%m-%d", "%d/%m/%y", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// One row of the match table, after normalization
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: u32,
    pub season: String,
    pub date: Option<NaiveDate>,
    pub venue: String,
    pub city: Option<String>,
    pub team1: String,
    pub team2: String,
    pub toss_winner: String,
    pub toss_decision: String,
    pub result: MatchResult,
    pub winner: Option<String>,
    pub win_by_runs: u32,
    pub win_by_wickets: u32,
    pub player_of_match: Option<String>,
}

impl Match {
    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// True when the two sides are exactly `a` and `b`, in either order
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.team1 == a && self.team2 == b) || (self.team1 == b && self.team2 == a)
    }

    pub fn is_no_result(&self) -> bool {
        self.result == MatchResult::NoResult
    }

    pub fn won_by(&self, team: &str) -> bool {
        self.winner.as_deref() == Some(team)
    }

    /// Winner is one of the two sides, or absent
    pub fn winner_is_consistent(&self) -> bool {
        match self.winner.as_deref() {
            None => true,
            Some(w) => w == self.team1 || w == self.team2,
        }
    }

    pub fn toss_winner_won(&self) -> bool {
        self.won_by(&self.toss_winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Match {
        Match {
            id: 1,
            season: "2017".to_string(),
            date: parse_match_date("2017-04-05"),
            venue: "Rajiv Gandhi International Stadium, Uppal".to_string(),
            city: Some("Hyderabad".to_string()),
            team1: "SRH".to_string(),
            team2: "RCB".to_string(),
            toss_winner: "RCB".to_string(),
            toss_decision: "field".to_string(),
            result: MatchResult::Normal,
            winner: Some("SRH".to_string()),
            win_by_runs: 35,
            win_by_wickets: 0,
            player_of_match: Some("Yuvraj Singh".to_string()),
        }
    }

    #[test]
    fn test_result_parsing() {
        assert_eq!(MatchResult::parse("normal"), MatchResult::Normal);
        assert_eq!(MatchResult::parse("tie"), MatchResult::Tie);
        assert_eq!(MatchResult::parse("no result"), MatchResult::NoResult);
        assert_eq!(MatchResult::parse("No Result"), MatchResult::NoResult);
        assert_eq!(
            MatchResult::parse("abandoned"),
            MatchResult::Other("abandoned".to_string())
        );
    }

    #[test]
    fn test_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2018, 4, 7);
        assert_eq!(parse_match_date("2018-04-07"), expected);
        assert_eq!(parse_match_date("07/04/2018"), expected);
        assert_eq!(parse_match_date("07/04/18"), expected);
        assert_eq!(parse_match_date("12/05/19"), NaiveDate::from_ymd_opt(2019, 5, 12));
        assert_eq!(parse_match_date("not a date"), None);
    }

    #[test]
    fn test_short_year_sorts_with_iso_dates() {
        let short = parse_match_date("26/04/18");
        let iso = parse_match_date("2018-04-07");
        assert!(short > iso);
    }

    #[test]
    fn test_match_predicates() {
        let m = sample();
        assert!(m.involves("SRH"));
        assert!(!m.involves("MI"));
        assert!(m.is_between("RCB", "SRH"));
        assert!(m.is_between("SRH", "RCB"));
        assert!(!m.is_between("SRH", "MI"));
        assert!(m.won_by("SRH"));
        assert!(!m.toss_winner_won());
        assert!(m.winner_is_consistent());
    }

    #[test]
    fn test_inconsistent_winner() {
        let mut m = sample();
        m.winner = Some("MI".to_string());
        assert!(!m.winner_is_consistent());
        m.winner = None;
        assert!(m.winner_is_consistent());
    }
}
