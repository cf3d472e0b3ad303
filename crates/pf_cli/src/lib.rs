//! # pf_cli
//!
//! Event cache (MessagePack + LZ4) and report shapes behind the `pf` binary.

pub mod cache;
pub mod report;

pub use cache::{
    build_event_cache, load_event_cache, load_events_any, verify_cache, CacheMetadata,
    CACHE_SCHEMA_VERSION,
};
pub use report::{invasion_report, segment_report, InvasionReport, SegmentReport};
