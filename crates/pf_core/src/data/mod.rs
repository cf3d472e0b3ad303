//! # Dataset Loading
//!
//! Reads the public soccer-logs dataset from its on-disk layout:
//!
//! ```text
//! <root>/events/events_<Tournament>.json
//! <root>/matches/matches_<Tournament>.json
//! <root>/players.json
//! <root>/teams.json
//! <root>/competitions.json
//! <root>/tags2name.csv          (optional, inspection only)
//! ```
//!
//! Events are grouped by `matchId`; the other records are keyed by `wyId`.

pub mod records;
pub mod tags;

pub use records::{
    CompetitionId, CompetitionRecord, Formation, FormationPlayer, MatchRecord, PlayerRecord,
    PlayerRole, Substitution, TeamData, TeamRecord,
};
pub use tags::TagNames;

use crate::error::{DataError, Result};
use crate::events::{group_by_match, Event, EventsByMatch, MatchId, PlayerId, TeamId};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// Tournaments shipped with the public dataset.
pub const TOURNAMENTS: [&str; 7] = [
    "Italy",
    "England",
    "Germany",
    "France",
    "Spain",
    "European_Championship",
    "World_Cup",
];

/// Read a JSON array of records.
pub fn load_json_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| DataError::json(path, e))
}

/// Read an events file and group it by match.
pub fn load_events(path: &Path) -> Result<EventsByMatch> {
    let events: Vec<Event> = load_json_records(path)?;
    Ok(group_by_match(events))
}

fn index_by<T, K: Ord>(records: Vec<T>, key: impl Fn(&T) -> K) -> BTreeMap<K, T> {
    records.into_iter().map(|r| (key(&r), r)).collect()
}

pub fn events_path(root: &Path, tournament: &str) -> PathBuf {
    root.join("events").join(format!("events_{}.json", tournament))
}

pub fn matches_path(root: &Path, tournament: &str) -> PathBuf {
    root.join("matches").join(format!("matches_{}.json", tournament))
}

/// In-memory dataset for one or more tournaments.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub events: EventsByMatch,
    pub matches: BTreeMap<MatchId, MatchRecord>,
    pub players: BTreeMap<PlayerId, PlayerRecord>,
    pub teams: BTreeMap<TeamId, TeamRecord>,
    pub competitions: BTreeMap<CompetitionId, CompetitionRecord>,
    pub tag_names: TagNames,
}

impl Dataset {
    /// Load the given tournaments plus the shared player, team and
    /// competition tables. Tag names come from `tags2name.csv` when present,
    /// otherwise from the built-in labels.
    pub fn load(root: &Path, tournaments: &[&str]) -> Result<Self> {
        let mut dataset = Self::default();

        for tournament in tournaments {
            let events: Vec<Event> = load_json_records(&events_path(root, tournament))?;
            let matches: Vec<MatchRecord> = load_json_records(&matches_path(root, tournament))?;
            info!(
                tournament = *tournament,
                events = events.len(),
                matches = matches.len(),
                "loaded tournament"
            );
            for (match_id, match_events) in group_by_match(events) {
                dataset.events.entry(match_id).or_default().extend(match_events);
            }
            dataset.matches.extend(index_by(matches, |m| m.wy_id));
        }

        dataset.players = index_by(load_json_records(&root.join("players.json"))?, |p: &PlayerRecord| p.wy_id);
        dataset.teams = index_by(load_json_records(&root.join("teams.json"))?, |t: &TeamRecord| t.wy_id);
        dataset.competitions = index_by(
            load_json_records(&root.join("competitions.json"))?,
            |c: &CompetitionRecord| c.wy_id,
        );

        let tags_path = root.join("tags2name.csv");
        dataset.tag_names = if tags_path.exists() {
            TagNames::from_csv(&tags_path)?
        } else {
            TagNames::builtin()
        };

        Ok(dataset)
    }

    /// Events of one match, `None` when the match is not loaded.
    pub fn match_events(&self, match_id: MatchId) -> Option<&[Event]> {
        self.events.get(&match_id).map(Vec::as_slice)
    }

    /// Team name, falling back to the numeric id.
    pub fn team_name(&self, team_id: TeamId) -> String {
        self.teams
            .get(&team_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| team_id.to_string())
    }
}
