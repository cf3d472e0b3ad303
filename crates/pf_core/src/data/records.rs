//! Match, team, player and competition records keyed by `wyId`.
//!
//! Only the fields the analysis and reports use are modelled; the rest of
//! each record is ignored. Some dataset fields hold the string `"null"`
//! instead of a value, so those are read leniently.

use crate::events::{MatchId, PlayerId, TeamId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub type CompetitionId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "wyId")]
    pub wy_id: MatchId,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "dateutc", default)]
    pub date_utc: String,
    #[serde(rename = "competitionId", default)]
    pub competition_id: CompetitionId,
    #[serde(default, deserialize_with = "lenient_option")]
    pub winner: Option<TeamId>,
    /// Keyed by team id as written in the dataset (a string).
    #[serde(rename = "teamsData", default)]
    pub teams_data: BTreeMap<String, TeamData>,
}

impl MatchRecord {
    /// Whether the player was in a lineup, on a bench, or came on.
    pub fn involves_player(&self, player_id: PlayerId) -> bool {
        self.teams_data.values().any(|team| {
            let formation = &team.formation;
            formation.lineup.iter().any(|p| p.player_id == player_id)
                || formation.bench.iter().any(|p| p.player_id == player_id)
                || formation.substitutions.iter().any(|s| s.player_in == player_id)
        })
    }

    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams_data.values().map(|team| team.team_id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamData {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(default)]
    pub side: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default, deserialize_with = "lenient_default")]
    pub formation: Formation,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Formation {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub lineup: Vec<FormationPlayer>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub bench: Vec<FormationPlayer>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub substitutions: Vec<Substitution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationPlayer {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    #[serde(rename = "playerIn")]
    pub player_in: PlayerId,
    #[serde(rename = "playerOut")]
    pub player_out: PlayerId,
    #[serde(default)]
    pub minute: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(rename = "wyId")]
    pub wy_id: TeamId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "officialName", default)]
    pub official_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "wyId")]
    pub wy_id: PlayerId,
    #[serde(rename = "shortName", default)]
    pub short_name: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(rename = "currentTeamId", default, deserialize_with = "lenient_option")]
    pub current_team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub role: Option<PlayerRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRole {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionRecord {
    #[serde(rename = "wyId")]
    pub wy_id: CompetitionId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub format: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(serde::de::IgnoredAny),
}

fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => Some(value),
        Lenient::Other(_) => None,
    })
}

fn lenient_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(lenient_option(deserializer)?.unwrap_or_default())
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    lenient_default(deserializer)
}
