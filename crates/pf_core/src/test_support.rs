//! Event builders shared by unit tests.

use crate::events::{Event, EventId, EventKind, MatchId, MatchPeriod, Position, SubEventKind, Tag, TeamId};

pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(kind: EventKind) -> Self {
        Self {
            event: Event {
                id: 0,
                kind,
                sub_kind: None,
                match_id: 1,
                team_id: 1,
                player_id: 0,
                period: MatchPeriod::FirstHalf,
                time_seconds: 0.0,
                tags: Vec::new(),
                positions: Vec::new(),
            },
        }
    }

    pub fn id(mut self, id: EventId) -> Self {
        self.event.id = id;
        self
    }

    pub fn sub(mut self, sub: SubEventKind) -> Self {
        self.event.sub_kind = Some(sub);
        self
    }

    pub fn match_id(mut self, match_id: MatchId) -> Self {
        self.event.match_id = match_id;
        self
    }

    pub fn team(mut self, team: TeamId) -> Self {
        self.event.team_id = team;
        self
    }

    pub fn period(mut self, period: MatchPeriod) -> Self {
        self.event.period = period;
        self
    }

    pub fn at(mut self, seconds: f64) -> Self {
        self.event.time_seconds = seconds;
        self
    }

    pub fn pos(mut self, x: f64, y: f64) -> Self {
        self.event.positions.push(Position::new(x, y));
        self
    }

    pub fn tags(mut self, tags: &[Tag]) -> Self {
        self.event.tags.extend_from_slice(tags);
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// First-half event of `kind` by `team` at `t` seconds; the id is derived
/// from the time so events stay distinguishable.
pub fn ev(kind: EventKind, team: TeamId, t: f64) -> Event {
    EventBuilder::new(kind)
        .id((t * 10.0) as EventId)
        .team(team)
        .at(t)
        .build()
}

pub fn pass(team: TeamId, t: f64) -> Event {
    EventBuilder::new(EventKind::Pass)
        .id((t * 10.0) as EventId)
        .sub(SubEventKind::SimplePass)
        .team(team)
        .at(t)
        .build()
}

pub fn save(team: TeamId, t: f64) -> Event {
    EventBuilder::new(EventKind::SaveAttempt)
        .id((t * 10.0) as EventId)
        .sub(SubEventKind::SaveAttempt)
        .team(team)
        .at(t)
        .build()
}

/// Ids of the events, for compact assertions.
pub fn ids(events: &[&Event]) -> Vec<EventId> {
    events.iter().map(|event| event.id).collect()
}
