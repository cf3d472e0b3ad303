//! # Invasion Index Aggregator
//!
//! Per play action, how deep into the opponent's danger zones the owning
//! team got (invasion index) and how quickly it got there (invasion speed).
//!
//! ## Per-action rules
//! - Actions spanning several periods are skipped.
//! - Events without a start position are ignored; an action with none left
//!   contributes nothing.
//! - Index = maximum weight over the action, sampled at the action's start
//!   on the continuous match clock, credited to the first event's team.
//! - Peak = first event (in match order) reaching that maximum. When the
//!   peak comes more than `min_peak_interval_s` after the action start, a
//!   speed sample `(max - first) / dt^2` is recorded as well.

pub mod weights;

pub use weights::{FieldWeight, HeuristicWeights, Zone, ZoneTable};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::events::{Event, EventsByMatch, MatchId, TeamId};
use crate::segment::{segment, PlayAction};
use crate::timeline::HalfOffsets;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One point of a team's time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvasionSample {
    /// Seconds since kick-off on the continuous match clock.
    pub time: f64,
    pub value: f64,
}

impl InvasionSample {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Invasion index and speed series per team, each in match order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvasionSeries {
    pub index: BTreeMap<TeamId, Vec<InvasionSample>>,
    pub speed: BTreeMap<TeamId, Vec<InvasionSample>>,
}

impl InvasionSeries {
    /// Mean invasion index of `team`, `None` without samples.
    pub fn mean_index(&self, team: TeamId) -> Option<f64> {
        mean(self.index.get(&team)?)
    }

    /// Mean invasion speed of `team`, `None` without samples.
    pub fn mean_speed(&self, team: TeamId) -> Option<f64> {
        mean(self.speed.get(&team)?)
    }
}

fn mean(samples: &[InvasionSample]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().map(|s| s.value).sum::<f64>() / samples.len() as f64)
}

/// Weight profile of one play action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionInvasion {
    pub team: TeamId,
    /// Period-relative start time of the action.
    pub start_time: f64,
    /// Weight of the first positioned event.
    pub first_weight: f64,
    pub max_weight: f64,
    /// Period-relative time of the first event reaching `max_weight`.
    pub peak_time: f64,
}

impl ActionInvasion {
    /// Seconds from action start to peak.
    pub fn time_to_peak(&self) -> f64 {
        self.peak_time - self.start_time
    }

    /// `(max - first) / dt^2`, or `None` when the peak is not later than
    /// `min_interval_s`.
    pub fn speed(&self, min_interval_s: f64) -> Option<f64> {
        let dt = self.time_to_peak();
        (dt > min_interval_s).then(|| (self.max_weight - self.first_weight) / (dt * dt))
    }
}

/// Weight profile of `action`, or `None` when it spans periods or has no
/// positioned event.
pub fn action_invasion<W>(action: &PlayAction<'_>, weights: &W) -> Option<ActionInvasion>
where
    W: FieldWeight + ?Sized,
{
    action.period()?;

    let mut profile: Option<ActionInvasion> = None;
    for event in action.events() {
        let Some(position) = event.start_position() else {
            continue;
        };
        let weight = weights.weight(position.truncated());
        match profile.as_mut() {
            None => {
                profile = Some(ActionInvasion {
                    team: action.team(),
                    start_time: action.start_time(),
                    first_weight: weight,
                    max_weight: weight,
                    peak_time: event.time_seconds,
                });
            }
            // Strictly greater keeps the earliest event among equal maxima.
            Some(p) if weight > p.max_weight => {
                p.max_weight = weight;
                p.peak_time = event.time_seconds;
            }
            Some(_) => {}
        }
    }
    profile
}

/// Fold play actions into per-team series.
pub fn aggregate<W>(
    actions: &[PlayAction<'_>],
    offsets: &HalfOffsets,
    weights: &W,
    config: &AnalysisConfig,
) -> InvasionSeries
where
    W: FieldWeight + ?Sized,
{
    let mut series = InvasionSeries::default();
    let mut skipped = 0usize;

    for action in actions {
        let Some(profile) = action_invasion(action, weights) else {
            skipped += 1;
            continue;
        };
        let time = offsets.absolute_time(action.first_event());

        if let Some(speed) = profile.speed(config.invasion.min_peak_interval_s) {
            series
                .speed
                .entry(profile.team)
                .or_default()
                .push(InvasionSample::new(time, speed));
        }
        series
            .index
            .entry(profile.team)
            .or_default()
            .push(InvasionSample::new(time, profile.max_weight));
    }

    debug!(
        actions = actions.len(),
        skipped, "aggregated invasion series"
    );
    series
}

/// Segment one match and aggregate its invasion series.
pub fn match_invasion<W>(events: &[Event], weights: &W, config: &AnalysisConfig) -> InvasionSeries
where
    W: FieldWeight + ?Sized,
{
    let Some(offsets) = HalfOffsets::from_events(events) else {
        return InvasionSeries::default();
    };
    let actions = segment(events);
    aggregate(&actions, &offsets, weights, config)
}

/// Invasion series for `match_id` with the heuristic weights and default
/// thresholds.
pub fn invasion_index(
    events_by_match: &EventsByMatch,
    match_id: MatchId,
) -> Result<InvasionSeries, AnalysisError> {
    invasion_index_with(
        events_by_match,
        match_id,
        &HeuristicWeights,
        &AnalysisConfig::default(),
    )
}

/// Invasion series for `match_id` with an explicit weight model and config.
pub fn invasion_index_with<W>(
    events_by_match: &EventsByMatch,
    match_id: MatchId,
    weights: &W,
    config: &AnalysisConfig,
) -> Result<InvasionSeries, AnalysisError>
where
    W: FieldWeight + ?Sized,
{
    let events = events_by_match
        .get(&match_id)
        .ok_or(AnalysisError::UnknownMatch(match_id))?;
    Ok(match_invasion(events, weights, config))
}

/// Invasion series for every match, one task per match.
pub fn invasion_all<W>(
    events_by_match: &EventsByMatch,
    weights: &W,
    config: &AnalysisConfig,
) -> BTreeMap<MatchId, InvasionSeries>
where
    W: FieldWeight + Sync + ?Sized,
{
    events_by_match
        .par_iter()
        .map(|(match_id, events)| (*match_id, match_invasion(events, weights, config)))
        .collect()
}
