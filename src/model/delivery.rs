/// Dismissal kinds credited to the bowler. Run outs, retirements and
/// obstructing the field are not.
pub const BOWLER_WICKET_KINDS: &[&str] = &[
    "bowled",
    "caught",
    "lbw",
    "stumped",
    "caught and bowled",
    "hit wicket",
];

pub fn is_bowler_wicket(kind: &str) -> bool {
    BOWLER_WICKET_KINDS.contains(&kind)
}

/// One ball of the delivery table. Missing numbers are 0 and missing text
/// is empty, so no field is optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Delivery {
    pub match_id: u32,
    pub inning: u32,
    pub batting_team: String,
    pub bowling_team: String,
    pub over: u32,
    pub ball: u32,
    pub batsman: String,
    pub bowler: String,
    pub wide_runs: u32,
    pub noball_runs: u32,
    pub batsman_runs: u32,
    pub extra_runs: u32,
    pub total_runs: u32,
    pub player_dismissed: String,
    pub dismissal_kind: String,
    /// A player was out on this ball
    pub dismissed: bool,
}

impl Delivery {
    pub fn is_four(&self) -> bool {
        self.batsman_runs == 4
    }

    pub fn is_six(&self) -> bool {
        self.batsman_runs == 6
    }

    pub fn is_boundary(&self) -> bool {
        self.is_four() || self.is_six()
    }

    /// Counts toward the over (not a wide or no-ball)
    pub fn is_legal(&self) -> bool {
        self.wide_runs == 0 && self.noball_runs == 0
    }

    /// Dismissal credited to the bowler
    pub fn is_bowler_wicket(&self) -> bool {
        is_bowler_wicket(&self.dismissal_kind)
    }
}

/// The `dismissed` flag: a dismissed player is present and is not the
/// zero placeholder left by missing-value filling.
pub fn dismissed_flag(player_dismissed: &str) -> bool {
    let p = player_dismissed.trim();
    !p.is_empty() && p != "0"
}
