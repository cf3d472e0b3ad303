//! # Match Timeline
//!
//! Event times restart at zero every period. `HalfOffsets` folds them onto
//! one continuous match clock: each period is shifted by the accumulated
//! length of the periods before it, where a period's length is the latest
//! event time recorded in it.

use crate::events::{Event, MatchPeriod};

/// Per-period offsets, in seconds, added to `time_seconds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfOffsets {
    offsets: [f64; MatchPeriod::ALL.len()],
}

impl HalfOffsets {
    /// Offsets for one match's events.
    ///
    /// Returns `None` when there is no first-half event, since the
    /// second-half offset is undefined without one.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a Event>) -> Option<Self> {
        let mut latest: [Option<f64>; MatchPeriod::ALL.len()] = [None; MatchPeriod::ALL.len()];
        for event in events {
            let slot = &mut latest[event.period.index()];
            *slot = Some(match *slot {
                Some(t) => t.max(event.time_seconds),
                None => event.time_seconds,
            });
        }

        latest[MatchPeriod::FirstHalf.index()]?;

        let mut offsets = [0.0; MatchPeriod::ALL.len()];
        for i in 1..offsets.len() {
            offsets[i] = offsets[i - 1] + latest[i - 1].unwrap_or(0.0);
        }
        Some(Self { offsets })
    }

    pub fn offset(&self, period: MatchPeriod) -> f64 {
        self.offsets[period.index()]
    }

    /// Seconds since kick-off on the continuous clock.
    pub fn absolute_time(&self, event: &Event) -> f64 {
        event.time_seconds + self.offset(event.period)
    }

    /// Events in continuous-clock order. Equal times keep input order.
    pub fn sorted<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let mut sorted: Vec<&Event> = events.iter().collect();
        sorted.sort_by(|a, b| self.absolute_time(a).total_cmp(&self.absolute_time(b)));
        sorted
    }
}
