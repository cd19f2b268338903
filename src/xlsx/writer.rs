use crate::error::Result;
use crate::loader::Dataset;
use crate::metrics::leaders::{leaders, TOP_LEADERS};
use crate::metrics::overview::{matches_per_venue, toss_analytics, top_player_of_match, TOP_AWARDS};
use crate::metrics::season::{season_summaries, SeasonSummary};
use crate::metrics::Ranked;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Write the headline dashboard tables to an Excel file
pub fn write_dashboard_to_xlsx(data: &Dataset, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_season_sheet(sheet, &season_summaries(data))?;

    let all = leaders(data, TOP_LEADERS);
    let sheet = workbook.add_worksheet();
    write_leaders_sheet(
        sheet,
        &[
            ("Runs", &all.run_scorers),
            ("Wickets", &all.wicket_takers),
            ("Sixes", &all.six_hitters),
            ("Fours", &all.four_hitters),
        ],
    )?;

    let sheet = workbook.add_worksheet();
    write_ranking_sheet(
        sheet,
        "Player of Match",
        ("Player", "Awards"),
        &top_player_of_match(data.matches(), TOP_AWARDS),
    )?;

    let sheet = workbook.add_worksheet();
    write_ranking_sheet(
        sheet,
        "Venues",
        ("Venue", "Matches"),
        &matches_per_venue(data.matches()),
    )?;

    let sheet = workbook.add_worksheet();
    write_toss_sheet(sheet, data)?;

    workbook.save(path)?;
    log::info!("Wrote dashboard workbook to {}", path.display());
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin)
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    let header_format = header_format();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    Ok(())
}

fn write_season_sheet(sheet: &mut Worksheet, seasons: &[SeasonSummary]) -> Result<()> {
    sheet.set_column_width(0, 8)?; // Season
    sheet.set_column_width(1, 10)?; // Finalist 1
    sheet.set_column_width(2, 10)?; // Finalist 2
    sheet.set_column_width(3, 10)?; // Winner
    sheet.set_column_width(4, 20)?; // Orange Cap
    sheet.set_column_width(5, 8)?; // Runs
    sheet.set_column_width(6, 20)?; // Purple Cap
    sheet.set_column_width(7, 8)?; // Wickets

    write_headers(
        sheet,
        &[
            "Season",
            "Finalist 1",
            "Finalist 2",
            "Winner",
            "Orange Cap",
            "Runs",
            "Purple Cap",
            "Wickets",
        ],
    )?;

    let center_format = Format::new().set_align(FormatAlign::Center);
    let left_format = Format::new().set_align(FormatAlign::Left);

    for (row_idx, summary) in seasons.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet.write_string_with_format(row, 0, &summary.season, &center_format)?;
        sheet.write_string_with_format(row, 1, &summary.finalist_1, &center_format)?;
        sheet.write_string_with_format(row, 2, &summary.finalist_2, &center_format)?;
        if let Some(ref winner) = summary.winner {
            sheet.write_string_with_format(row, 3, winner, &center_format)?;
        }

        if let Some(ref cap) = summary.orange_cap {
            sheet.write_string_with_format(row, 4, &cap.name, &left_format)?;
            sheet.write_number_with_format(row, 5, cap.value as f64, &center_format)?;
        }
        if let Some(ref cap) = summary.purple_cap {
            sheet.write_string_with_format(row, 6, &cap.name, &left_format)?;
            sheet.write_number_with_format(row, 7, cap.value as f64, &center_format)?;
        }
    }

    sheet.set_name("Season Summary")?;
    Ok(())
}

/// Leaderboards side by side, two columns each
fn write_leaders_sheet(sheet: &mut Worksheet, tables: &[(&str, &Vec<Ranked<u64>>)]) -> Result<()> {
    let header_format = header_format();
    let left_format = Format::new().set_align(FormatAlign::Left);
    let center_format = Format::new().set_align(FormatAlign::Center);

    for (table_idx, (label, rows)) in tables.iter().enumerate() {
        let name_col = (table_idx * 3) as u16;
        let value_col = name_col + 1;

        sheet.set_column_width(name_col, 20)?;
        sheet.set_column_width(value_col, 8)?;
        sheet.write_string_with_format(0, name_col, "Player", &header_format)?;
        sheet.write_string_with_format(0, value_col, *label, &header_format)?;

        for (row_idx, entry) in rows.iter().enumerate() {
            let row = (row_idx + 1) as u32;
            sheet.write_string_with_format(row, name_col, &entry.name, &left_format)?;
            sheet.write_number_with_format(row, value_col, entry.value as f64, &center_format)?;
        }
    }

    sheet.set_name("Leaders")?;
    Ok(())
}

fn write_ranking_sheet(
    sheet: &mut Worksheet,
    name: &str,
    headers: (&str, &str),
    rows: &[Ranked<u64>],
) -> Result<()> {
    sheet.set_column_width(0, 40)?;
    sheet.set_column_width(1, 10)?;
    write_headers(sheet, &[headers.0, headers.1])?;

    let left_format = Format::new().set_align(FormatAlign::Left);
    let center_format = Format::new().set_align(FormatAlign::Center);

    for (row_idx, entry) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet.write_string_with_format(row, 0, &entry.name, &left_format)?;
        sheet.write_number_with_format(row, 1, entry.value as f64, &center_format)?;
    }

    sheet.set_name(name)?;
    Ok(())
}

fn write_toss_sheet(sheet: &mut Worksheet, data: &Dataset) -> Result<()> {
    let toss = toss_analytics(data.matches());

    sheet.set_column_width(0, 12)?; // Team
    sheet.set_column_width(1, 10)?; // Toss Wins
    sheet.set_column_width(3, 12)?; // Decision
    sheet.set_column_width(4, 10)?; // Matches
    sheet.set_column_width(5, 10)?; // Percent

    write_headers(sheet, &["Team", "Toss Wins", "", "Decision", "Matches", "Percent"])?;

    let center_format = Format::new().set_align(FormatAlign::Center);
    let pct_format = Format::new().set_align(FormatAlign::Right).set_num_format("0.00");

    for (row_idx, entry) in toss.wins_by_team.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet.write_string_with_format(row, 0, &entry.name, &center_format)?;
        sheet.write_number_with_format(row, 1, entry.value as f64, &center_format)?;
    }

    for (row_idx, share) in toss.decisions.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet.write_string_with_format(row, 3, &share.label, &center_format)?;
        sheet.write_number_with_format(row, 4, share.count as f64, &center_format)?;
        sheet.write_number_with_format(row, 5, share.percent, &pct_format)?;
    }

    let summary_row = (toss.decisions.len() + 2) as u32;
    sheet.write_string_with_format(summary_row, 3, "Toss winner won", &center_format)?;
    sheet.write_number_with_format(summary_row, 5, toss.toss_winner_won_pct, &pct_format)?;

    sheet.set_name("Toss")?;
    Ok(())
}
