//! # Event Classifier
//!
//! Stateless predicates that categorize a single event from its type,
//! sub-type and tags. The segmenter builds on these; nothing here looks at
//! more than the event itself (and, for ball loss, the team that last had
//! the ball).

use crate::data::TagNames;
use crate::events::{Event, EventKind, MatchPeriod, SubEventKind, Tag, TeamId};

/// Stoppage: foul, offside, referee interruption, or the first event of a
/// new period.
pub fn is_interruption(event: &Event, current_period: MatchPeriod) -> bool {
    matches!(
        event.kind,
        EventKind::Interruption | EventKind::Foul | EventKind::Offside
    ) || event.period != current_period
}

pub fn is_pass(event: &Event) -> bool {
    event.kind == EventKind::Pass
}

pub fn is_accurate_pass(event: &Event) -> bool {
    is_pass(event) && event.has_tag(Tag::Accurate)
}

pub fn is_shot(event: &Event) -> bool {
    event.kind == EventKind::Shot
}

pub fn is_save_attempt(event: &Event) -> bool {
    event.sub_kind == Some(SubEventKind::SaveAttempt)
}

pub fn is_reflexes(event: &Event) -> bool {
    event.sub_kind == Some(SubEventKind::Reflexes)
}

/// Goalkeeper reaction that resolves a shot or penalty.
pub fn is_goalkeeper_response(event: &Event) -> bool {
    is_save_attempt(event) || is_reflexes(event)
}

pub fn is_touch(event: &Event) -> bool {
    event.sub_kind == Some(SubEventKind::Touch)
}

/// Duels are logged twice, once per side.
pub fn is_duel(event: &Event) -> bool {
    event.kind == EventKind::Duel
}

pub fn is_penalty(event: &Event) -> bool {
    event.sub_kind == Some(SubEventKind::Penalty)
}

/// Possession changed hands: the event belongs to another team than the
/// last non-duel event. `previous_team` is `None` at the start of a match.
pub fn is_ball_lost(event: &Event, previous_team: Option<TeamId>) -> bool {
    match previous_team {
        Some(team) => event.team_id != team && !is_duel(event),
        None => false,
    }
}

pub fn has_tag(event: &Event, tag: Tag) -> bool {
    event.has_tag(tag)
}

pub fn is_dangerous_ball_lost(event: &Event) -> bool {
    event.has_tag(Tag::DangerousBallLost)
}

pub fn is_missed_ball(event: &Event) -> bool {
    event.has_tag(Tag::MissedBall)
}

pub fn is_goal(event: &Event) -> bool {
    event.has_tag(Tag::Goal)
}

/// Descriptions of the event's tags, for inspection output. Tags absent
/// from the table fall back to their built-in label.
pub fn tag_descriptions(event: &Event, names: &TagNames) -> Vec<String> {
    event
        .tags
        .iter()
        .map(|tag| {
            names
                .description(*tag)
                .unwrap_or_else(|| tag.label())
                .to_string()
        })
        .collect()
}
