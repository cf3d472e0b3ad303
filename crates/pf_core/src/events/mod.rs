//! # Match Events
//!
//! Event records of the public soccer-logs dataset and the code tables
//! that name their integer fields.

pub mod codes;
pub mod model;

pub use codes::{EventKind, SubEventKind, Tag, UnknownCode};
pub use model::{Event, EventId, MatchId, MatchPeriod, PlayerId, Position, TeamId};

use std::collections::BTreeMap;

/// Events grouped by match, in dataset order.
pub type EventsByMatch = BTreeMap<MatchId, Vec<Event>>;

/// Group a flat event list by `match_id`, keeping per-match order.
pub fn group_by_match(events: impl IntoIterator<Item = Event>) -> EventsByMatch {
    let mut grouped = EventsByMatch::new();
    for event in events {
        grouped.entry(event.match_id).or_default().push(event);
    }
    grouped
}
