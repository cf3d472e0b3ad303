//! # Segmentation State Machine
//!
//! `Segmenter` carries the state of one match walk: the open action, the
//! period of the last consumed event and the team of the last non-duel
//! event. Match start is the initial state (no team has had the ball yet);
//! match end is [`Segmenter::finish`], which closes whatever is still open.
//!
//! ## Transitions (first match wins)
//! 1. Interruption (foul, offside, referee stop, new period) closes the
//!    action including the event. A new period first closes the open action
//!    so no action spans two periods.
//! 2. Penalty waits for a goalkeeper response; if the next event is one,
//!    both close the action as `penalty`.
//! 3. Shot always closes the action as `shot`, taking the next event along
//!    when it is a stoppage or a goalkeeper response.
//! 4. Ball lost (team differs from the last non-duel event) closes the
//!    action and the same event opens the next one.
//! 5. Anything else extends the open action.

use super::action::{ActionLabel, PlayAction};
use crate::classifier::{
    is_ball_lost, is_duel, is_goalkeeper_response, is_interruption, is_penalty, is_shot,
};
use crate::events::{Event, MatchPeriod, TeamId};

/// How many events a step consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Only the current event.
    One,
    /// The current event and the peeked next one.
    Two,
}

impl Advance {
    pub fn events_consumed(self) -> usize {
        match self {
            Advance::One => 1,
            Advance::Two => 2,
        }
    }
}

/// Accumulator for one match's play actions.
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    actions: Vec<PlayAction<'a>>,
    current: Vec<&'a Event>,
    current_period: MatchPeriod,
    previous_team: Option<TeamId>,
}

impl Default for Segmenter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Segmenter<'a> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            current: Vec::new(),
            current_period: MatchPeriod::FirstHalf,
            previous_team: None,
        }
    }

    /// Actions closed so far.
    pub fn closed(&self) -> &[PlayAction<'a>] {
        &self.actions
    }

    /// Events accumulated since the last boundary.
    pub fn open(&self) -> &[&'a Event] {
        &self.current
    }

    pub fn current_period(&self) -> MatchPeriod {
        self.current_period
    }

    /// Team of the last non-duel event, `None` before the first one.
    pub fn previous_team(&self) -> Option<TeamId> {
        self.previous_team
    }

    /// Consume `event`, peeking at `next` for shot and penalty pairing.
    pub fn step(&mut self, event: &'a Event, next: Option<&'a Event>) -> Advance {
        let advance = if is_interruption(event, self.current_period) {
            if event.period != self.current_period {
                self.close(ActionLabel::Interruption);
            }
            self.current.push(event);
            self.close(ActionLabel::Interruption);
            Advance::One
        } else if is_penalty(event) {
            self.current.push(event);
            match next.filter(|next| next.period == event.period && is_goalkeeper_response(next)) {
                Some(response) => {
                    self.current.push(response);
                    self.close(ActionLabel::Penalty);
                    Advance::Two
                }
                None => Advance::One,
            }
        } else if is_shot(event) {
            self.current.push(event);
            let follow_up = next.filter(|next| {
                next.period == event.period
                    && (is_interruption(next, self.current_period) || is_goalkeeper_response(next))
            });
            let advance = match follow_up {
                Some(next) => {
                    self.current.push(next);
                    Advance::Two
                }
                None => Advance::One,
            };
            self.close(ActionLabel::Shot);
            advance
        } else if is_ball_lost(event, self.previous_team) {
            self.current.push(event);
            self.close(ActionLabel::BallLost);
            // The opponent's first touch also opens their action.
            self.current.push(event);
            Advance::One
        } else {
            self.current.push(event);
            Advance::One
        };

        self.current_period = event.period;
        // Duels come in pairs from both sides and would fake a ball loss.
        if !is_duel(event) {
            self.previous_team = Some(event.team_id);
        }
        advance
    }

    /// End of match: close the open action as an interruption.
    pub fn finish(mut self) -> Vec<PlayAction<'a>> {
        self.close(ActionLabel::Interruption);
        self.actions
    }

    fn close(&mut self, label: ActionLabel) {
        if self.current.is_empty() {
            return;
        }
        let events = std::mem::take(&mut self.current);
        self.actions.push(PlayAction::new(label, events));
    }
}
