//! Play actions: labeled runs of events produced by the segmenter.

use crate::events::{Event, MatchPeriod, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Why a play action ended. Determined by its last event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionLabel {
    #[serde(rename = "interruption")]
    Interruption,
    #[serde(rename = "shot")]
    Shot,
    #[serde(rename = "penalty")]
    Penalty,
    #[serde(rename = "ball lost")]
    BallLost,
}

impl ActionLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionLabel::Interruption => "interruption",
            ActionLabel::Shot => "shot",
            ActionLabel::Penalty => "penalty",
            ActionLabel::BallLost => "ball lost",
        }
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed play action. Always holds at least one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayAction<'a> {
    label: ActionLabel,
    events: Vec<&'a Event>,
}

impl<'a> PlayAction<'a> {
    /// `events` must not be empty.
    pub(crate) fn new(label: ActionLabel, events: Vec<&'a Event>) -> Self {
        debug_assert!(!events.is_empty(), "play action without events");
        Self { label, events }
    }

    pub fn label(&self) -> ActionLabel {
        self.label
    }

    pub fn events(&self) -> &[&'a Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first_event(&self) -> &'a Event {
        self.events[0]
    }

    pub fn last_event(&self) -> &'a Event {
        self.events[self.events.len() - 1]
    }

    /// Team owning the action: the team of its first event.
    pub fn team(&self) -> TeamId {
        self.first_event().team_id
    }

    /// The period all events belong to, or `None` if they span several.
    pub fn period(&self) -> Option<MatchPeriod> {
        let period = self.first_event().period;
        self.events
            .iter()
            .all(|event| event.period == period)
            .then_some(period)
    }

    /// Period-relative time of the first event.
    pub fn start_time(&self) -> f64 {
        self.first_event().time_seconds
    }

    /// Period-relative time of the last event.
    pub fn end_time(&self) -> f64 {
        self.last_event().time_seconds
    }

    /// Whether the action starts and ends inside `window` (period-relative
    /// seconds).
    pub fn within(&self, window: RangeInclusive<f64>) -> bool {
        window.contains(&self.start_time()) && window.contains(&self.end_time())
    }
}

/// Concatenate the events of consecutive actions. A ball-loss event closes
/// one action and opens the next; it is emitted once.
pub fn flatten_actions<'a>(actions: &[PlayAction<'a>]) -> Vec<&'a Event> {
    let mut flat: Vec<&'a Event> = Vec::new();
    let mut shared: Option<&'a Event> = None;
    for action in actions {
        let skip = match shared {
            Some(boundary) => std::ptr::eq(boundary, action.first_event()) as usize,
            None => 0,
        };
        flat.extend(action.events.iter().skip(skip).copied());
        shared = (action.label == ActionLabel::BallLost).then(|| action.last_event());
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use crate::test_support::{ev, EventBuilder};

    #[test]
    fn test_label_strings() {
        assert_eq!(ActionLabel::BallLost.to_string(), "ball lost");
        assert_eq!(
            serde_json::to_string(&ActionLabel::Interruption).unwrap(),
            "\"interruption\""
        );
        let label: ActionLabel = serde_json::from_str("\"ball lost\"").unwrap();
        assert_eq!(label, ActionLabel::BallLost);
    }

    #[test]
    fn test_action_accessors() {
        let a = ev(EventKind::Pass, 7, 10.0);
        let b = ev(EventKind::Pass, 7, 14.5);
        let action = PlayAction::new(ActionLabel::Shot, vec![&a, &b]);

        assert_eq!(action.team(), 7);
        assert_eq!(action.start_time(), 10.0);
        assert_eq!(action.end_time(), 14.5);
        assert_eq!(action.period(), Some(MatchPeriod::FirstHalf));
        assert!(action.within(0.0..=20.0));
        assert!(!action.within(11.0..=20.0));
    }

    #[test]
    fn test_period_none_when_spanning_halves() {
        let a = ev(EventKind::Pass, 7, 10.0);
        let b = EventBuilder::new(EventKind::Pass)
            .period(MatchPeriod::SecondHalf)
            .build();
        let action = PlayAction::new(ActionLabel::Interruption, vec![&a, &b]);
        assert_eq!(action.period(), None);
    }

    #[test]
    fn test_flatten_counts_shared_ball_loss_once() {
        let a = ev(EventKind::Pass, 1, 1.0);
        let b = ev(EventKind::Pass, 2, 2.0);
        let c = ev(EventKind::Foul, 2, 3.0);
        let actions = vec![
            PlayAction::new(ActionLabel::BallLost, vec![&a, &b]),
            PlayAction::new(ActionLabel::Interruption, vec![&b, &c]),
        ];

        let flat: Vec<u64> = flatten_actions(&actions).iter().map(|e| e.id).collect();
        assert_eq!(flat, vec![10, 20, 30]);
    }
}
