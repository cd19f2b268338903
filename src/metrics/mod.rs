//! Pure computations over the canonical tables. Nothing here fails:
//! unknown names give empty results and zero denominators give 0.

pub mod batting;
pub mod bowling;
pub mod death_overs;
pub mod filter;
pub mod head_to_head;
pub mod leaders;
pub mod overview;
pub mod ranking;
pub mod rates;
pub mod season;
pub mod team;

pub use batting::{batter_profile, compare_batters, BatterProfile, BatterSummary, BoundarySplit};
pub use bowling::{bowler_profile, compare_bowlers, BowlerProfile, BowlerSummary, Hauls};
pub use death_overs::{death_overs, DeathOvers, OverTeamPivot, DEATH_OVERS_START};
pub use filter::{DeliveryFilter, MatchFilter, SeasonFilter, ALL_SEASONS};
pub use head_to_head::{head_to_head, HeadToHead};
pub use leaders::{leaders, Leaders, TOP_LEADERS};
pub use overview::{toss_analytics, Share, TossAnalytics, TOP_AWARDS};
pub use ranking::Ranked;
pub use season::{season_summaries, SeasonSummary};
pub use team::{team_profile, CityScores, Innings, Outcome, TeamBowler, TeamMatch, TeamProfile};
