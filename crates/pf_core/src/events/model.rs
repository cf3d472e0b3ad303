//! Event records as they appear in the public match event dataset.

use super::codes::{EventKind, SubEventKind, Tag};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub type MatchId = u64;
pub type TeamId = u64;
pub type PlayerId = u64;
pub type EventId = u64;

/// Period of play an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchPeriod {
    #[serde(rename = "1H")]
    FirstHalf,
    #[serde(rename = "2H")]
    SecondHalf,
    #[serde(rename = "E1")]
    ExtraTimeFirst,
    #[serde(rename = "E2")]
    ExtraTimeSecond,
    #[serde(rename = "P")]
    Penalties,
}

impl MatchPeriod {
    /// Periods in the order they are played.
    pub const ALL: [MatchPeriod; 5] = [
        MatchPeriod::FirstHalf,
        MatchPeriod::SecondHalf,
        MatchPeriod::ExtraTimeFirst,
        MatchPeriod::ExtraTimeSecond,
        MatchPeriod::Penalties,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchPeriod::FirstHalf => "1H",
            MatchPeriod::SecondHalf => "2H",
            MatchPeriod::ExtraTimeFirst => "E1",
            MatchPeriod::ExtraTimeSecond => "E2",
            MatchPeriod::Penalties => "P",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MatchPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field coordinate in percent of pitch length (`x`, own goal at 0) and
/// width (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates truncated toward zero, the resolution the dataset is
    /// recorded at.
    pub fn truncated(self) -> Self {
        Self {
            x: self.x.trunc(),
            y: self.y.trunc(),
        }
    }
}

/// One atomic occurrence in a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "id")]
    pub id: EventId,
    #[serde(rename = "eventId")]
    pub kind: EventKind,
    #[serde(
        rename = "subEventId",
        default,
        deserialize_with = "deserialize_sub_event",
        serialize_with = "serialize_sub_event"
    )]
    pub sub_kind: Option<SubEventKind>,
    #[serde(rename = "matchId")]
    pub match_id: MatchId,
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "matchPeriod")]
    pub period: MatchPeriod,
    #[serde(rename = "eventSec")]
    pub time_seconds: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_tags",
        serialize_with = "serialize_tags"
    )]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub positions: Vec<Position>,
}

impl Event {
    /// Start position of the event, if recorded.
    pub fn start_position(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Sub-event label when the event has one, otherwise the event label.
    pub fn name(&self) -> &'static str {
        match self.sub_kind {
            Some(sub) => sub.label(),
            None => self.kind.label(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSubEvent {
    Code(u16),
    Text(String),
}

fn deserialize_sub_event<'de, D>(deserializer: D) -> Result<Option<SubEventKind>, D::Error>
where
    D: Deserializer<'de>,
{
    // The dataset writes an empty string for events without a sub-type.
    let code = match Option::<RawSubEvent>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawSubEvent::Code(code)) => code,
        Some(RawSubEvent::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<u16>().map_err(D::Error::custom)?
        }
    };
    SubEventKind::try_from(code)
        .map(Some)
        .map_err(D::Error::custom)
}

fn serialize_sub_event<S>(sub: &Option<SubEventKind>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match sub {
        Some(sub) => serializer.serialize_u16(sub.code()),
        None => serializer.serialize_str(""),
    }
}

#[derive(Serialize, Deserialize)]
struct RawTag {
    id: u16,
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawTag>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|tag| match Tag::try_from(tag.id) {
            Ok(tag) => Some(tag),
            Err(err) => {
                tracing::debug!("dropping tag: {}", err);
                None
            }
        })
        .collect())
}

fn serialize_tags<S>(tags: &[Tag], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(tags.iter().map(|tag| RawTag { id: tag.code() }))
}
