//! Property tests for segmentation over random event logs.

use super::*;
use crate::classifier::{is_duel, is_goalkeeper_response, is_penalty, is_shot};
use crate::events::{EventKind, MatchPeriod, SubEventKind, TeamId};
use crate::test_support::EventBuilder;
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = (EventKind, Option<SubEventKind>)> {
    prop_oneof![
        4 => Just((EventKind::Pass, Some(SubEventKind::SimplePass))),
        2 => Just((EventKind::Duel, Some(SubEventKind::GroundAttackingDuel))),
        1 => Just((EventKind::Foul, Some(SubEventKind::Foul))),
        1 => Just((EventKind::Interruption, Some(SubEventKind::BallOutOfTheField))),
        1 => Just((EventKind::Offside, None)),
        1 => Just((EventKind::Shot, Some(SubEventKind::Shot))),
        1 => Just((EventKind::SaveAttempt, Some(SubEventKind::SaveAttempt))),
        1 => Just((EventKind::SaveAttempt, Some(SubEventKind::Reflexes))),
        1 => Just((EventKind::FreeKick, Some(SubEventKind::Penalty))),
        1 => Just((EventKind::OthersOnTheBall, Some(SubEventKind::Touch))),
    ]
}

/// A match log with distinct times, at least one first-half event, and a
/// random split between the halves.
fn match_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((kind_strategy(), 1u64..=2), 1..80)
        .prop_flat_map(|specs| {
            let len = specs.len();
            (Just(specs), 1..=len)
        })
        .prop_map(|(specs, split)| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, ((kind, sub), team))| {
                    let (period, slot) = if i < split {
                        (MatchPeriod::FirstHalf, i)
                    } else {
                        (MatchPeriod::SecondHalf, i - split)
                    };
                    let mut builder = EventBuilder::new(kind)
                        .id(i as u64)
                        .team(team as TeamId)
                        .period(period)
                        .at(slot as f64 * 1.5 + 0.5);
                    if let Some(sub) = sub {
                        builder = builder.sub(sub);
                    }
                    builder.build()
                })
                .collect()
        })
}

fn action_ids(actions: &[PlayAction<'_>]) -> Vec<Vec<u64>> {
    actions
        .iter()
        .map(|a| a.events().iter().map(|e| e.id).collect())
        .collect()
}

proptest! {
    #[test]
    fn prop_actions_cover_the_match(events in match_strategy()) {
        let actions = segment(&events);
        let flat: Vec<u64> = flatten_actions(&actions).iter().map(|e| e.id).collect();
        // Generated ids already follow match-clock order.
        let expected: Vec<u64> = (0..events.len() as u64).collect();
        prop_assert_eq!(flat, expected);
    }

    #[test]
    fn prop_actions_never_span_periods(events in match_strategy()) {
        for action in segment(&events) {
            prop_assert!(action.period().is_some());
        }
    }

    #[test]
    fn prop_segmentation_ignores_input_order(events in match_strategy()) {
        let mut reversed = events.clone();
        reversed.reverse();

        let first = action_ids(&segment(&events));
        prop_assert_eq!(&first, &action_ids(&segment(&events)));
        prop_assert_eq!(&first, &action_ids(&segment(&reversed)));
    }

    #[test]
    fn prop_labels_match_closing_events(events in match_strategy()) {
        let actions = segment(&events);
        for (i, action) in actions.iter().enumerate() {
            let n = action.len();
            let last = action.last_event();
            match action.label() {
                ActionLabel::Shot => {
                    let shot_at_end = is_shot(last)
                        || (n >= 2 && is_shot(action.events()[n - 2]));
                    prop_assert!(shot_at_end);
                }
                ActionLabel::Penalty => {
                    prop_assert!(n >= 2);
                    prop_assert!(is_penalty(action.events()[n - 2]));
                    prop_assert!(is_goalkeeper_response(last));
                }
                ActionLabel::BallLost => {
                    prop_assert!(!is_duel(last));
                    let next = &actions[i + 1];
                    prop_assert!(std::ptr::eq(next.first_event(), last));
                }
                ActionLabel::Interruption => {}
            }
        }
    }

    #[test]
    fn prop_duels_never_close_on_ball_loss(events in match_strategy()) {
        for action in segment(&events) {
            if action.label() == ActionLabel::BallLost {
                prop_assert!(!is_duel(action.last_event()));
            }
        }
    }
}
