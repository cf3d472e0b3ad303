//! # Play-Action Segmenter
//!
//! Splits a match's event log into play actions: uninterrupted runs of
//! possession that end with a stoppage, a shot, a resolved penalty or a
//! change of possession.
//!
//! ## Algorithm
//! 1. Fold second-half (and extra-time) times onto one clock and sort.
//! 2. Walk the sorted events through a [`Segmenter`], peeking one event
//!    ahead for shot and penalty pairing.
//! 3. Close the trailing open action at match end.
//!
//! Matches are independent, so [`segment_all`] runs one task per match.
//! Within a match the walk is strictly sequential.

pub mod action;
pub mod state;

#[cfg(test)]
mod proptests;

pub use action::{flatten_actions, ActionLabel, PlayAction};
pub use state::{Advance, Segmenter};

use crate::error::AnalysisError;
use crate::events::{Event, EventsByMatch, MatchId};
use crate::timeline::HalfOffsets;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Segment one match's events, in any order, into play actions.
///
/// An empty match, or one without any first-half event to anchor the
/// match clock, yields no actions.
pub fn segment(events: &[Event]) -> Vec<PlayAction<'_>> {
    if events.is_empty() {
        return Vec::new();
    }
    let Some(offsets) = HalfOffsets::from_events(events) else {
        warn!(
            events = events.len(),
            "match has no first-half events; skipping segmentation"
        );
        return Vec::new();
    };

    let sorted = offsets.sorted(events);
    let actions = segment_sorted(&sorted);
    debug!(
        events = events.len(),
        actions = actions.len(),
        "segmented match"
    );
    actions
}

/// Segment events already in match-clock order.
pub fn segment_sorted<'a>(events: &[&'a Event]) -> Vec<PlayAction<'a>> {
    let mut segmenter = Segmenter::new();
    let mut cursor = 0;
    while let Some(&event) = events.get(cursor) {
        let next = events.get(cursor + 1).copied();
        cursor += segmenter.step(event, next).events_consumed();
    }
    segmenter.finish()
}

/// Segment the match `match_id` from the event index.
pub fn segment_match(
    events_by_match: &EventsByMatch,
    match_id: MatchId,
) -> Result<Vec<PlayAction<'_>>, AnalysisError> {
    let events = events_by_match
        .get(&match_id)
        .ok_or(AnalysisError::UnknownMatch(match_id))?;
    Ok(segment(events))
}

/// Segment every match in the index, one task per match.
pub fn segment_all(events_by_match: &EventsByMatch) -> BTreeMap<MatchId, Vec<PlayAction<'_>>> {
    events_by_match
        .par_iter()
        .map(|(match_id, events)| (*match_id, segment(events)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventKind, MatchPeriod, SubEventKind};
    use crate::test_support::{ev, ids, pass, save, EventBuilder};

    fn labels(actions: &[PlayAction<'_>]) -> Vec<ActionLabel> {
        actions.iter().map(|a| a.label()).collect()
    }

    fn action_ids(actions: &[PlayAction<'_>]) -> Vec<Vec<u64>> {
        actions.iter().map(|a| ids(a.events())).collect()
    }

    #[test]
    fn test_empty_match_yields_no_actions() {
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn test_unknown_match_is_an_error() {
        let mut index = EventsByMatch::new();
        index.insert(1, Vec::new());

        assert_eq!(segment_match(&index, 1).unwrap(), Vec::new());
        assert_eq!(
            segment_match(&index, 2).unwrap_err(),
            AnalysisError::UnknownMatch(2)
        );
    }

    #[test]
    fn test_match_without_first_half_is_skipped() {
        let events = vec![EventBuilder::new(EventKind::Pass)
            .period(MatchPeriod::SecondHalf)
            .build()];
        assert!(segment(&events).is_empty());
    }

    #[test]
    fn test_interruption_closes_action() {
        let events = vec![
            pass(1, 1.0),
            pass(1, 2.0),
            ev(EventKind::Interruption, 1, 3.0),
            pass(1, 4.0),
        ];
        let actions = segment(&events);

        assert_eq!(
            labels(&actions),
            vec![ActionLabel::Interruption, ActionLabel::Interruption]
        );
        assert_eq!(action_ids(&actions), vec![vec![10, 20, 30], vec![40]]);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let events = vec![pass(1, 2.0), ev(EventKind::Foul, 1, 3.0), pass(1, 1.0)];
        let actions = segment(&events);
        assert_eq!(action_ids(&actions), vec![vec![10, 20, 30]]);
    }

    #[test]
    fn test_shot_with_save_closes_together() {
        let events = vec![
            pass(1, 1.0),
            ev(EventKind::Shot, 1, 2.0),
            save(2, 3.0),
            pass(2, 4.0),
        ];
        let actions = segment(&events);

        assert_eq!(labels(&actions)[0], ActionLabel::Shot);
        assert_eq!(action_ids(&actions)[0], vec![10, 20, 30]);
        // The save was consumed with the shot, so the goalkeeper's pass is
        // measured against the shooter's team.
        assert_eq!(labels(&actions)[1], ActionLabel::BallLost);
        assert_eq!(action_ids(&actions)[1], vec![40]);
    }

    #[test]
    fn test_shot_followed_by_stoppage_closes_together() {
        let events = vec![
            ev(EventKind::Shot, 1, 1.0),
            ev(EventKind::Interruption, 1, 2.0),
            pass(1, 3.0),
        ];
        let actions = segment(&events);

        assert_eq!(action_ids(&actions), vec![vec![10, 20], vec![30]]);
        assert_eq!(labels(&actions)[0], ActionLabel::Shot);
    }

    #[test]
    fn test_shot_alone_still_closes() {
        let events = vec![pass(1, 1.0), ev(EventKind::Shot, 1, 2.0), pass(1, 3.0)];
        let actions = segment(&events);

        assert_eq!(action_ids(&actions), vec![vec![10, 20], vec![30]]);
        assert_eq!(
            labels(&actions),
            vec![ActionLabel::Shot, ActionLabel::Interruption]
        );
    }

    #[test]
    fn test_penalty_waits_for_goalkeeper() {
        let penalty = |t: f64| {
            EventBuilder::new(EventKind::FreeKick)
                .id((t * 10.0) as u64)
                .sub(SubEventKind::Penalty)
                .team(1)
                .at(t)
                .build()
        };
        let reflexes = EventBuilder::new(EventKind::SaveAttempt)
            .id(20)
            .sub(SubEventKind::Reflexes)
            .team(2)
            .at(2.0)
            .build();

        let saved = vec![penalty(1.0), reflexes];
        let actions = segment(&saved);
        assert_eq!(labels(&actions), vec![ActionLabel::Penalty]);
        assert_eq!(action_ids(&actions), vec![vec![10, 20]]);

        let scored = vec![penalty(1.0), ev(EventKind::Interruption, 1, 2.0)];
        let actions = segment(&scored);
        assert_eq!(labels(&actions), vec![ActionLabel::Interruption]);
        assert_eq!(action_ids(&actions), vec![vec![10, 20]]);
    }

    #[test]
    fn test_duel_pair_does_not_lose_ball() {
        let events = vec![
            pass(1, 1.0),
            ev(EventKind::Duel, 2, 2.0),
            ev(EventKind::Duel, 1, 2.5),
            pass(1, 3.0),
        ];
        let actions = segment(&events);

        assert_eq!(labels(&actions), vec![ActionLabel::Interruption]);
        assert_eq!(action_ids(&actions), vec![vec![10, 20, 25, 30]]);
    }

    #[test]
    fn test_duel_won_by_opponent_then_their_pass() {
        let events = vec![
            pass(1, 1.0),
            ev(EventKind::Duel, 1, 2.0),
            ev(EventKind::Duel, 2, 2.5),
            pass(2, 3.0),
        ];
        let actions = segment(&events);

        assert_eq!(
            labels(&actions),
            vec![ActionLabel::BallLost, ActionLabel::Interruption]
        );
        assert_eq!(action_ids(&actions), vec![vec![10, 20, 25, 30], vec![30]]);
    }

    #[test]
    fn test_half_time_splits_actions() {
        let second = |t: f64, id: u64| {
            EventBuilder::new(EventKind::Pass)
                .id(id)
                .team(1)
                .period(MatchPeriod::SecondHalf)
                .at(t)
                .build()
        };
        let events = vec![pass(1, 10.0), pass(1, 20.0), second(0.5, 500), second(2.0, 501)];
        let actions = segment(&events);

        assert_eq!(
            action_ids(&actions),
            vec![vec![100, 200], vec![500], vec![501]]
        );
        assert!(actions.iter().all(|a| a.period().is_some()));
    }

    #[test]
    fn test_label_sequence_snapshot() {
        let events = vec![
            pass(1, 1.0),
            pass(2, 2.0),
            ev(EventKind::Shot, 2, 3.0),
            save(1, 4.0),
            pass(1, 5.0),
            ev(EventKind::Offside, 1, 6.0),
            pass(2, 7.0),
        ];
        let actions = segment(&events);

        insta::assert_debug_snapshot!(labels(&actions), @r###"
        [
            BallLost,
            Shot,
            BallLost,
            Interruption,
            BallLost,
            Interruption,
        ]
        "###);
    }

    #[test]
    fn test_segment_all_covers_every_match() {
        let events = vec![
            EventBuilder::new(EventKind::Pass).match_id(1).at(1.0).build(),
            EventBuilder::new(EventKind::Pass).match_id(2).at(1.0).build(),
            EventBuilder::new(EventKind::Foul).match_id(2).at(2.0).build(),
        ];
        let index = crate::events::group_by_match(events);
        let all = segment_all(&index);

        assert_eq!(all.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(all[&1].len(), 1);
        assert_eq!(all[&2][0].len(), 2);
    }
}
