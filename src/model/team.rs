//! Franchise name normalization
//!
//! Historical franchise names are replaced by short codes before any
//! aggregation, so a team is always referred to by the same string in both
//! tables. Values with no mapping pass through unchanged.

use std::collections::HashMap;

/// Full franchise name to short code, in source order
pub const TEAM_CODES: &[(&str, &str)] = &[
    ("Mumbai Indians", "MI"),
    ("Kolkata Knight Riders", "KKR"),
    ("Royal Challengers Bangalore", "RCB"),
    ("Deccan Chargers", "DC"),
    ("Chennai Super Kings", "CSK"),
    ("Rajasthan Royals", "RR"),
    ("Delhi Daredevils", "DD"),
    ("Gujarat Lions", "GL"),
    ("Kings XI Punjab", "KXIP"),
    ("Sunrisers Hyderabad", "SRH"),
    ("Rising Pune Supergiants", "RPS"),
    ("Kochi Tuskers Kerala", "KTK"),
    ("Pune Warriors", "PW"),
    ("Rising Pune Supergiant", "RPS"),
];

lazy_static::lazy_static! {
    static ref CODE_BY_NAME: HashMap<&'static str, &'static str> =
        TEAM_CODES.iter().copied().collect();
}

/// Short code for a franchise name, or the name itself if it has no code
pub fn team_code(name: &str) -> &str {
    CODE_BY_NAME.get(name).copied().unwrap_or(name)
}

pub fn normalize_team(name: String) -> String {
    match CODE_BY_NAME.get(name.as_str()) {
        Some(code) => (*code).to_string(),
        None => name,
    }
}

pub fn normalize_team_opt(name: Option<String>) -> Option<String> {
    name.map(normalize_team)
}
