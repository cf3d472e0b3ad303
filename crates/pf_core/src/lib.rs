//! # pf_core - Play Actions and Invasion Index for Soccer Event Logs
//!
//! Segments a match's event stream into play actions (uninterrupted runs
//! of possession) and measures, per team and action, how far into the
//! opponent's danger zones the team progressed.
//!
//! ## Features
//! - Closed code tables for event types, sub-types and tags
//! - Deterministic segmentation state machine
//! - Invasion index and invasion speed series per team
//! - Pluggable field-weight models (fixed heuristic or YAML zone table)
//! - Loader for the public soccer-logs JSON dataset
//!
//! ```
//! use pf_core::{invasion_index, segment_match, EventsByMatch};
//!
//! let mut by_match = EventsByMatch::new();
//! by_match.insert(42, Vec::new());
//!
//! assert!(segment_match(&by_match, 42).unwrap().is_empty());
//! assert!(invasion_index(&by_match, 7).is_err());
//! ```

pub mod classifier;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod invasion;
pub mod segment;
pub mod timeline;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, DataError};
pub use events::{Event, EventKind, EventsByMatch, MatchId, MatchPeriod, Position, SubEventKind, Tag, TeamId};
pub use invasion::{
    invasion_all, invasion_index, invasion_index_with, FieldWeight, HeuristicWeights, InvasionSample,
    InvasionSeries, ZoneTable,
};
pub use segment::{flatten_actions, segment, segment_all, segment_match, ActionLabel, PlayAction};
pub use timeline::HalfOffsets;
