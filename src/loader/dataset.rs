use super::reader::{read_deliveries, read_deliveries_file, read_matches, read_matches_file};
use crate::config::DataPaths;
use crate::error::DataLoadError;
use crate::model::{Delivery, Match};
use std::collections::{BTreeSet, HashMap};
use std::io::Read;

/// The two canonical tables. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    matches: Vec<Match>,
    deliveries: Vec<Delivery>,
    by_id: HashMap<u32, usize>,
}

impl Dataset {
    pub fn new(matches: Vec<Match>, deliveries: Vec<Delivery>) -> Self {
        let by_id = matches
            .iter()
            .enumerate()
            .map(|(idx, m)| (m.id, idx))
            .collect();
        Self {
            matches,
            deliveries,
            by_id,
        }
    }

    pub fn from_readers<M: Read, D: Read>(matches: M, deliveries: D) -> Result<Self, DataLoadError> {
        Ok(Self::new(read_matches(matches)?, read_deliveries(deliveries)?))
    }

    pub fn from_paths(paths: &DataPaths) -> Result<Self, DataLoadError> {
        let matches = read_matches_file(&paths.matches)?;
        let deliveries = read_deliveries_file(&paths.deliveries)?;
        log::info!(
            "Loaded {} matches from {} and {} deliveries from {}",
            matches.len(),
            paths.matches.display(),
            deliveries.len(),
            paths.deliveries.display()
        );
        Ok(Self::new(matches, deliveries))
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn match_by_id(&self, id: u32) -> Option<&Match> {
        self.by_id.get(&id).map(|&idx| &self.matches[idx])
    }

    pub fn season_of(&self, match_id: u32) -> Option<&str> {
        self.match_by_id(match_id).map(|m| m.season.as_str())
    }

    pub fn venue_of(&self, match_id: u32) -> Option<&str> {
        self.match_by_id(match_id).map(|m| m.venue.as_str())
    }

    /// Sorted distinct team codes appearing as team1
    pub fn teams(&self) -> Vec<String> {
        distinct(self.matches.iter().map(|m| m.team1.as_str()))
    }

    pub fn seasons(&self) -> Vec<String> {
        distinct(self.matches.iter().map(|m| m.season.as_str()))
    }

    pub fn batters(&self) -> Vec<String> {
        distinct(self.deliveries.iter().map(|d| d.batsman.as_str()))
    }

    pub fn bowlers(&self) -> Vec<String> {
        distinct(self.deliveries.iter().map(|d| d.bowler.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
