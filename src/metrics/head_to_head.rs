use crate::model::Match;

/// Record between two teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadToHead {
    pub team_a: String,
    pub team_b: String,
    pub matches: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    /// Meetings won by neither side (no result, or a winner outside the pair)
    pub no_result: usize,
}

pub fn head_to_head(matches: &[Match], team_a: &str, team_b: &str) -> HeadToHead {
    let meetings: Vec<&Match> = matches
        .iter()
        .filter(|m| m.is_between(team_a, team_b))
        .collect();

    let wins_a = meetings.iter().filter(|m| m.won_by(team_a)).count();
    let wins_b = meetings.iter().filter(|m| m.won_by(team_b)).count();

    HeadToHead {
        team_a: team_a.to_string(),
        team_b: team_b.to_string(),
        matches: meetings.len(),
        wins_a,
        wins_b,
        no_result: meetings.len().saturating_sub(wins_a + wins_b),
    }
}
