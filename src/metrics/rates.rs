//! Rate and percentage helpers. A zero denominator always gives 0.

pub const BALLS_PER_OVER: u64 = 6;

/// Round half away from zero to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `part / whole * 100`, rounded to two places
pub fn percentage(part: u64, whole: u64) -> f64 {
    round2(ratio(part as f64, whole as f64) * 100.0)
}

/// Runs per 100 balls faced
pub fn batting_strike_rate(runs: u64, balls: u64) -> f64 {
    percentage(runs, balls)
}

/// Completed overs in a number of balls
pub fn completed_overs(balls: u64) -> u64 {
    balls / BALLS_PER_OVER
}

/// Runs conceded per completed over
pub fn economy_rate(runs: u64, overs: u64) -> f64 {
    round2(ratio(runs as f64, overs as f64))
}

/// Runs conceded per six balls, counting partial overs
pub fn economy_per_ball(runs: u64, balls: u64) -> f64 {
    round2(ratio(runs as f64, balls as f64 / BALLS_PER_OVER as f64))
}

/// Balls bowled per wicket
pub fn bowling_strike_rate(balls: u64, wickets: u64) -> f64 {
    round2(ratio(balls as f64, wickets as f64))
}

pub fn mean(total: f64, count: usize) -> f64 {
    round2(ratio(total, count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(9.818181), 9.82);
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn test_zero_denominators() {
        assert_eq!(batting_strike_rate(25, 0), 0.0);
        assert_eq!(economy_rate(40, 0), 0.0);
        assert_eq!(economy_per_ball(40, 0), 0.0);
        assert_eq!(bowling_strike_rate(30, 0), 0.0);
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(mean(12.0, 0), 0.0);
    }

    #[test]
    fn test_rates() {
        assert_eq!(batting_strike_rate(9, 5), 180.0);
        assert_eq!(batting_strike_rate(1, 3), 33.33);
        assert_eq!(completed_overs(11), 1);
        assert_eq!(completed_overs(5), 0);
        assert_eq!(economy_rate(18, 1), 18.0);
        assert_eq!(economy_per_ball(18, 11), 9.82);
        assert_eq!(bowling_strike_rate(11, 5), 2.2);
        assert_eq!(mean(21.0, 3), 7.0);
    }
}
