use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ipl_analytics::config::{DEFAULT_DELIVERIES_FILE, DEFAULT_MATCHES_FILE};
use ipl_analytics::metrics::leaders::TOP_LEADERS;
use ipl_analytics::metrics::overview::{
    largest_win_by_runs, matches_per_venue, top_player_of_match, TOP_AWARDS,
};
use ipl_analytics::metrics::season::{matches_per_season, toss_decisions_per_season};
use ipl_analytics::metrics::{self, Innings, OverTeamPivot, Outcome, Ranked, SeasonFilter};
use ipl_analytics::{normalize_team, xlsx, DataPaths, Dataset, DatasetRepository};

#[derive(Parser)]
#[command(name = "ipl-analytics")]
#[command(about = "Season, team and player statistics from IPL match and ball-by-ball data", long_about = None)]
struct Cli {
    /// Match records CSV
    #[arg(long, global = true, env = "IPL_MATCHES_CSV", default_value = DEFAULT_MATCHES_FILE)]
    matches: PathBuf,

    /// Ball-by-ball deliveries CSV
    #[arg(long, global = true, env = "IPL_DELIVERIES_CSV", default_value = DEFAULT_DELIVERIES_FILE)]
    deliveries: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Toss analysis, biggest win, awards, venues and leaderboards
    Overview,

    /// Finalists, champion and cap winners for every season
    Seasons,

    /// Record between two teams
    HeadToHead {
        team_a: String,
        team_b: String,
    },

    /// Career profile of one batter
    Batter { name: String },

    /// Career profile of one bowler
    Bowler { name: String },

    /// Two batters side by side
    CompareBatters { first: String, second: String },

    /// Two bowlers side by side
    CompareBowlers { first: String, second: String },

    /// Team record and leading players for a season selection
    Team {
        team: String,

        /// Season to include; repeat for several. "All" selects every season
        #[arg(long = "season", default_value = "All")]
        seasons: Vec<String>,
    },

    /// Sixes, fours and wickets per over in the death overs
    DeathOvers,

    /// Print a selection list
    List {
        #[arg(value_enum)]
        kind: ListKind,
    },

    /// Write the headline tables to an Excel workbook
    Export {
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    Teams,
    Seasons,
    Batters,
    Bowlers,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    // Load both tables
    let repository = DatasetRepository::new(DataPaths::new(cli.matches, cli.deliveries));
    let data = repository.load().context("Failed to load IPL data")?;

    match cli.command {
        Commands::Overview => overview(data),
        Commands::Seasons => seasons(data),
        Commands::HeadToHead { team_a, team_b } => {
            head_to_head(data, &normalize_team(team_a), &normalize_team(team_b))
        }
        Commands::Batter { name } => batter(data, &name),
        Commands::Bowler { name } => bowler(data, &name),
        Commands::CompareBatters { first, second } => compare_batters(data, &first, &second),
        Commands::CompareBowlers { first, second } => compare_bowlers(data, &first, &second),
        Commands::Team { team, seasons } => {
            team_profile(data, &normalize_team(team), &SeasonFilter::from_selection(seasons))
        }
        Commands::DeathOvers => death_overs(data),
        Commands::List { kind } => list(data, kind),
        Commands::Export { output } => {
            println!("Writing Excel file: {}", output.display());
            xlsx::write_dashboard_to_xlsx(data, &output).context("Failed to write Excel file")?;
            println!("Done!");
        }
    }

    Ok(())
}

fn print_ranking(title: &str, rows: &[Ranked<u64>]) {
    println!("{}:", title);
    if rows.is_empty() {
        println!("  (none)");
    }
    for row in rows {
        println!("  {:<40} {:>6}", row.name, row.value);
    }
}

fn overview(data: &Dataset) {
    // Toss
    let toss = metrics::toss_analytics(data.matches());
    print_ranking("Toss wins by team", &toss.wins_by_team);
    println!("Toss decisions:");
    for share in &toss.decisions {
        println!("  {:<10} {:>5} ({:.2}%)", share.label, share.count, share.percent);
    }
    println!("Toss winner won the match: {:.2}%", toss.toss_winner_won_pct);

    // Margins and awards
    if let Some(m) = largest_win_by_runs(data.matches()) {
        println!(
            "Largest win by runs: {} beat {} by {} runs ({} {})",
            m.winner.as_deref().unwrap_or("-"),
            if m.won_by(&m.team1) { &m.team2 } else { &m.team1 },
            m.win_by_runs,
            m.venue,
            m.season
        );
    }

    print_ranking("Player of the match awards", &top_player_of_match(data.matches(), TOP_AWARDS));
    print_ranking("Matches per venue", &matches_per_venue(data.matches()));
    print_ranking("Matches per season", &matches_per_season(data.matches()));

    // Per season
    println!("Toss decisions per season:");
    for (season, decisions) in toss_decisions_per_season(data.matches()) {
        let parts: Vec<String> = decisions
            .iter()
            .map(|(decision, n)| format!("{} {}", decision, n))
            .collect();
        println!("  {}: {}", season, parts.join(", "));
    }

    // Leaderboards
    let top = metrics::leaders(data, TOP_LEADERS);
    print_ranking("Top run scorers", &top.run_scorers);
    print_ranking("Top wicket takers", &top.wicket_takers);
    print_ranking("Most sixes", &top.six_hitters);
    print_ranking("Most fours", &top.four_hitters);
}

fn seasons(data: &Dataset) {
    println!(
        "{:<8} {:<8} {:<8} {:<8} {:<24} {:<24}",
        "Season", "Team 1", "Team 2", "Winner", "Orange Cap", "Purple Cap"
    );
    for s in metrics::season_summaries(data) {
        let cap = |c: &Option<Ranked<u64>>| {
            c.as_ref()
                .map(|r| format!("{} ({})", r.name, r.value))
                .unwrap_or_else(|| "-".to_string())
        };
        println!(
            "{:<8} {:<8} {:<8} {:<8} {:<24} {:<24}",
            s.season,
            s.finalist_1,
            s.finalist_2,
            s.winner.as_deref().unwrap_or("-"),
            cap(&s.orange_cap),
            cap(&s.purple_cap)
        );
    }
}

fn head_to_head(data: &Dataset, team_a: &str, team_b: &str) {
    let record = metrics::head_to_head(data.matches(), team_a, team_b);
    println!("{} vs {}: {} matches", record.team_a, record.team_b, record.matches);
    println!("  {} wins: {}", record.team_a, record.wins_a);
    println!("  {} wins: {}", record.team_b, record.wins_b);
    println!("  No result: {}", record.no_result);
}

fn batter(data: &Dataset, name: &str) {
    let p = metrics::batter_profile(data, name);
    if p.is_empty() {
        println!("No deliveries faced by {}", name);
        return;
    }
    println!("{}", p.name);
    println!(
        "  Matches {}  Runs {}  Balls {}  Strike rate {:.2}  Fours {}  Sixes {}",
        p.matches, p.runs, p.balls, p.strike_rate, p.fours, p.sixes
    );
    // Breakdowns
    print_ranking("Runs by opponent", &p.runs_by_opponent);
    print_ranking("Runs by season", &p.runs_by_season);
    print_ranking("Runs by venue", &p.runs_by_venue);
    print_ranking("Dismissals", &p.dismissals);
    println!("Boundaries by opponent:");
    for b in &p.boundaries_by_opponent {
        println!("  {:<8} fours {:>4}  sixes {:>4}", b.team, b.fours, b.sixes);
    }
}

fn bowler(data: &Dataset, name: &str) {
    let p = metrics::bowler_profile(data, name);
    if p.is_empty() {
        println!("No deliveries bowled by {}", name);
        return;
    }
    println!("{}", p.name);
    println!(
        "  Matches {}  Balls {}  Overs {}  Runs {}  Wickets {}  Economy {:.2}  Strike rate {:.2}",
        p.matches, p.balls, p.overs, p.runs_conceded, p.wickets, p.economy, p.strike_rate
    );
    println!(
        "  4-wicket hauls {}  5+ wicket hauls {}",
        p.hauls.four_wickets, p.hauls.five_plus_wickets
    );
    // Breakdowns
    print_ranking("Dismissal types", &p.dismissal_kinds);
    print_ranking("Wickets by season", &p.wickets_by_season);
    print_ranking("Wickets by opponent", &p.wickets_by_opponent);
    print_ranking("Wickets by venue", &p.wickets_by_venue);
    println!("Boundaries conceded: fours {}  sixes {}", p.fours_conceded, p.sixes_conceded);
    for b in &p.boundaries_by_opponent {
        println!("  {:<8} fours {:>4}  sixes {:>4}", b.team, b.fours, b.sixes);
    }
}

fn compare_batters(data: &Dataset, first: &str, second: &str) {
    let (a, b) = metrics::compare_batters(data, first, second);
    println!("{:<16} {:>24} {:>24}", "", a.name, b.name);
    println!("{:<16} {:>24} {:>24}", "Matches", a.matches, b.matches);
    println!("{:<16} {:>24} {:>24}", "Runs", a.runs, b.runs);
    println!("{:<16} {:>24} {:>24}", "Balls", a.balls, b.balls);
    println!("{:<16} {:>24.2} {:>24.2}", "Strike rate", a.strike_rate, b.strike_rate);
    println!("{:<16} {:>24} {:>24}", "Fours", a.fours, b.fours);
    println!("{:<16} {:>24} {:>24}", "Sixes", a.sixes, b.sixes);
    print_ranking(&format!("{} top venues", a.name), &a.top_venues);
    print_ranking(&format!("{} top venues", b.name), &b.top_venues);
}

fn compare_bowlers(data: &Dataset, first: &str, second: &str) {
    let (a, b) = metrics::compare_bowlers(data, first, second);
    println!("{:<16} {:>24} {:>24}", "", a.name, b.name);
    println!("{:<16} {:>24} {:>24}", "Matches", a.matches, b.matches);
    println!("{:<16} {:>24} {:>24}", "Wickets", a.wickets, b.wickets);
    println!("{:<16} {:>24.2} {:>24.2}", "Economy", a.economy, b.economy);
    println!("{:<16} {:>24.2} {:>24.2}", "Strike rate", a.strike_rate, b.strike_rate);
    println!("{:<16} {:>24} {:>24}", "Fours conceded", a.fours_conceded, b.fours_conceded);
    println!("{:<16} {:>24} {:>24}", "Sixes conceded", a.sixes_conceded, b.sixes_conceded);
    print_ranking(&format!("{} top venues", a.name), &a.top_venues);
    print_ranking(&format!("{} top venues", b.name), &b.top_venues);
}

fn team_profile(data: &Dataset, team: &str, seasons: &SeasonFilter) {
    let p = metrics::team_profile(data, team, seasons);
    if p.is_empty() {
        println!("No matches for {} in the selected seasons", team);
        return;
    }
    println!("{}", p.team);
    println!(
        "  Played {}  Won {}  Lost {}  No result {}  Win {:.2}%",
        p.played, p.wins, p.losses, p.no_results, p.win_pct
    );
    println!(
        "  Average score {:.2}  Fours {}  Sixes {}",
        p.average_score, p.fours, p.sixes
    );
    // Leading players
    print_ranking("Top run scorers", &p.top_scorers);

    println!("Top wicket takers:");
    for b in &p.top_wicket_takers {
        println!(
            "  {:<24} wickets {:>4}  economy {:>6.2}  strike rate {:>6.2}",
            b.name, b.wickets, b.economy, b.strike_rate
        );
    }

    // City pivot
    println!("Average score by city:");
    let cells = [
        (Innings::First, Outcome::Win),
        (Innings::First, Outcome::Loss),
        (Innings::Second, Outcome::Win),
        (Innings::Second, Outcome::Loss),
    ];
    for row in &p.city_scores {
        let parts: Vec<String> = cells
            .iter()
            .map(|&(innings, outcome)| {
                let value = row
                    .get(innings, outcome)
                    .map(|v| format!("{:.2}", v))
                    .unwrap_or_else(|| "-".to_string());
                let result = match outcome {
                    Outcome::Win => "won",
                    Outcome::Loss => "lost",
                };
                format!("{} {} {}", innings.label(), result, value)
            })
            .collect();
        println!("  {:<16} {}", row.city, parts.join(" | "));
    }

    // Match list
    println!("Matches:");
    for m in &p.matches {
        println!(
            "  {:<6} {:<10} vs {:<6} {:<16} {:<40} winner {:<6} player of the match {}",
            m.season,
            m.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
            m.opponent,
            m.city.as_deref().unwrap_or("-"),
            m.venue,
            m.winner.as_deref().unwrap_or("-"),
            m.player_of_match.as_deref().unwrap_or("-")
        );
    }
}

fn print_pivot(title: &str, pivot: &OverTeamPivot) {
    println!("{}:", title);
    if pivot.is_empty() {
        println!("  (none)");
        return;
    }
    let header: Vec<String> = pivot.teams.iter().map(|t| format!("{:>6}", t)).collect();
    println!("  {:<6}{}", "Over", header.join(""));
    for (over, counts) in pivot.rows() {
        let cells: Vec<String> = counts.iter().map(|n| format!("{:>6}", n)).collect();
        println!("  {:<6}{}", over, cells.join(""));
    }
}

fn death_overs(data: &Dataset) {
    let death = metrics::death_overs(data);
    print_pivot("Sixes by batting team", &death.sixes);
    print_pivot("Fours by batting team", &death.fours);
    print_pivot("Wickets by bowling team", &death.wickets);
}

fn list(data: &Dataset, kind: ListKind) {
    let values = match kind {
        ListKind::Teams => data.teams(),
        ListKind::Seasons => data.seasons(),
        ListKind::Batters => data.batters(),
        ListKind::Bowlers => data.bowlers(),
    };
    for value in values {
        println!("{}", value);
    }
}
