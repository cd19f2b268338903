pub mod delivery;
pub mod match_record;
pub mod team;

pub use delivery::{dismissed_flag, is_bowler_wicket, Delivery, BOWLER_WICKET_KINDS};
pub use match_record::{parse_match_date, Match, MatchResult};
pub use team::{normalize_team, team_code, TEAM_CODES};
