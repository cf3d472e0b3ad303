//! Report shapes printed or written by the `pf` binary.

use pf_core::events::{MatchId, MatchPeriod, TeamId};
use pf_core::{ActionLabel, InvasionSeries, PlayAction};
use serde::Serialize;

/// One row of a segmentation report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSummary {
    pub index: usize,
    pub label: ActionLabel,
    pub team: TeamId,
    /// `None` when the action crosses a period boundary.
    pub period: Option<MatchPeriod>,
    pub start_time: f64,
    pub end_time: f64,
    pub event_ids: Vec<u64>,
    /// Event names in order, e.g. `["Simple pass", "Shot"]`.
    pub event_names: Vec<String>,
}

impl ActionSummary {
    pub fn from_action(index: usize, action: &PlayAction<'_>) -> Self {
        Self {
            index,
            label: action.label(),
            team: action.team(),
            period: action.period(),
            start_time: action.start_time(),
            end_time: action.end_time(),
            event_ids: action.events().iter().map(|e| e.id).collect(),
            event_names: action.events().iter().map(|e| e.name().to_string()).collect(),
        }
    }

    /// Single-line rendering used by the plain-text report.
    pub fn line(&self) -> String {
        let period = self.period.map_or("--", MatchPeriod::as_str);
        format!(
            "#{:<4} {:<12} team {:<6} {} {:>7.1}s - {:>7.1}s  {}",
            self.index,
            self.label.as_str(),
            self.team,
            period,
            self.start_time,
            self.end_time,
            self.event_names.join(" > ")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentReport {
    pub match_id: MatchId,
    pub action_count: usize,
    pub label_counts: LabelCounts,
    pub actions: Vec<ActionSummary>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub interruption: usize,
    pub shot: usize,
    pub penalty: usize,
    pub ball_lost: usize,
}

impl LabelCounts {
    fn record(&mut self, label: ActionLabel) {
        match label {
            ActionLabel::Interruption => self.interruption += 1,
            ActionLabel::Shot => self.shot += 1,
            ActionLabel::Penalty => self.penalty += 1,
            ActionLabel::BallLost => self.ball_lost += 1,
        }
    }
}

pub fn segment_report(match_id: MatchId, actions: &[PlayAction<'_>]) -> SegmentReport {
    let mut label_counts = LabelCounts::default();
    let summaries = actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            label_counts.record(action.label());
            ActionSummary::from_action(i, action)
        })
        .collect();

    SegmentReport {
        match_id,
        action_count: actions.len(),
        label_counts,
        actions: summaries,
    }
}

/// Per-team means next to the raw series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamInvasion {
    pub team: TeamId,
    pub samples: usize,
    pub mean_index: Option<f64>,
    pub mean_speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvasionReport {
    pub match_id: MatchId,
    pub teams: Vec<TeamInvasion>,
    pub series: InvasionSeries,
}

pub fn invasion_report(match_id: MatchId, series: InvasionSeries) -> InvasionReport {
    let teams = series
        .index
        .iter()
        .map(|(team, samples)| TeamInvasion {
            team: *team,
            samples: samples.len(),
            mean_index: series.mean_index(*team),
            mean_speed: series.mean_speed(*team),
        })
        .collect();

    InvasionReport {
        match_id,
        teams,
        series,
    }
}
