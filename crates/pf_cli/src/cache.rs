//! Event Cache
//!
//! Events JSON → MessagePack → LZ4 (size-prepended) → SHA-256 checksum.
//! Loading a full tournament from the cache skips JSON parsing, which
//! dominates load time for the larger event files.

use anyhow::{Context, Result};
use pf_core::events::{group_by_match, Event, EventsByMatch};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Bumped whenever the cached `Event` layout changes.
pub const CACHE_SCHEMA_VERSION: &str = "events-v1";

/// Cache metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// Schema version (e.g. "events-v1")
    pub schema_version: String,
    /// SHA256 checksum of the cache file (hex)
    pub checksum: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    /// Source JSON size (bytes)
    pub original_size: u64,
    /// Cache file size (bytes)
    pub compressed_size: u64,
    /// compressed / original
    pub compression_ratio: f64,
    pub event_count: u64,
    pub match_count: u64,
}

/// Parse an events JSON file and write it as a MessagePack+LZ4 cache.
///
/// # Arguments
///
/// * `input_json` - Events file (a JSON array of event records)
/// * `output_cache` - Cache file to create
///
/// # Returns
///
/// Metadata of the written cache
pub fn build_event_cache(input_json: &Path, output_cache: &Path) -> Result<CacheMetadata> {
    // 1. Read and parse events
    let json_str = fs::read_to_string(input_json)
        .with_context(|| format!("Failed to read events file: {}", input_json.display()))?;
    let original_size = json_str.len() as u64;

    let events: Vec<Event> = serde_json::from_str(&json_str)
        .with_context(|| format!("Failed to parse events: {}", input_json.display()))?;
    let event_count = events.len() as u64;
    let match_count = group_by_match(events.iter().cloned()).len() as u64;

    // 2. MessagePack (named fields, so the custom event serde round-trips)
    let msgpack_bytes =
        rmp_serde::to_vec_named(&events).context("Failed to serialize to MessagePack")?;

    // 3. LZ4 with size prefix
    let compressed = lz4_flex::compress_prepend_size(&msgpack_bytes);
    let compressed_size = compressed.len() as u64;

    // 4. Checksum
    let checksum = sha256_hex(&compressed);

    // 5. Write
    if let Some(parent) = output_cache.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(output_cache, &compressed)
        .with_context(|| format!("Failed to write cache file: {}", output_cache.display()))?;

    tracing::info!(
        events = event_count,
        matches = match_count,
        bytes = compressed_size,
        "built event cache"
    );

    Ok(CacheMetadata {
        schema_version: CACHE_SCHEMA_VERSION.to_string(),
        checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        original_size,
        compressed_size,
        compression_ratio: compressed_size as f64 / original_size.max(1) as f64,
        event_count,
        match_count,
    })
}

/// Check a cache file against an expected SHA256 checksum.
pub fn verify_cache(cache_file: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(cache_file)
        .with_context(|| format!("Failed to read cache file: {}", cache_file.display()))?;
    Ok(sha256_hex(&bytes) == expected_checksum)
}

/// Decompress and decode a cache into events grouped by match.
pub fn load_event_cache(cache_file: &Path) -> Result<EventsByMatch> {
    let compressed = fs::read(cache_file)
        .with_context(|| format!("Failed to read cache file: {}", cache_file.display()))?;

    let msgpack_bytes =
        lz4_flex::decompress_size_prepended(&compressed).context("Failed to decompress LZ4")?;

    let events: Vec<Event> =
        rmp_serde::from_slice(&msgpack_bytes).context("Failed to deserialize MessagePack")?;

    Ok(group_by_match(events))
}

/// Load events from either a cache (`.lz4`) or a JSON events file.
pub fn load_events_any(path: &Path) -> Result<EventsByMatch> {
    if path.extension().is_some_and(|ext| ext == "lz4") {
        load_event_cache(path)
    } else {
        pf_core::data::load_events(path)
            .with_context(|| format!("Failed to load events: {}", path.display()))
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::events::{MatchPeriod, SubEventKind, Tag};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const EVENTS: &str = r#"[
        {"eventId": 8, "subEventId": 85, "tags": [{"id": 1801}], "playerId": 1,
         "positions": [{"x": 50, "y": 50}, {"x": 61, "y": 40}], "matchId": 100, "teamId": 10,
         "matchPeriod": "1H", "eventSec": 1.25, "id": 1},
        {"eventId": 6, "subEventId": "", "tags": [], "playerId": 2,
         "positions": [], "matchId": 100, "teamId": 11,
         "matchPeriod": "2H", "eventSec": 3.0, "id": 2},
        {"eventId": 10, "subEventId": 100, "tags": [{"id": 101}, {"id": 402}], "playerId": 3,
         "positions": [{"x": 90, "y": 50}], "matchId": 200, "teamId": 20,
         "matchPeriod": "1H", "eventSec": 2.0, "id": 3}
    ]"#;

    fn events_file() -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(EVENTS.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_build_verify_and_load() -> Result<()> {
        let input = events_file()?;
        let dir = TempDir::new()?;
        let out = dir.path().join("cache").join("events_test.mpk.lz4");

        let meta = build_event_cache(input.path(), &out)?;
        assert_eq!(meta.schema_version, CACHE_SCHEMA_VERSION);
        assert_eq!(meta.event_count, 3);
        assert_eq!(meta.match_count, 2);
        assert!(verify_cache(&out, &meta.checksum)?);
        assert!(!verify_cache(&out, "deadbeef")?);

        let loaded = load_event_cache(&out)?;
        let from_json = pf_core::data::load_events(input.path())?;
        assert_eq!(loaded, from_json);

        let offside = &loaded[&100][1];
        assert_eq!(offside.sub_kind, None);
        assert_eq!(offside.period, MatchPeriod::SecondHalf);
        let shot = &loaded[&200][0];
        assert_eq!(shot.sub_kind, Some(SubEventKind::Shot));
        assert_eq!(shot.tags, vec![Tag::Goal, Tag::RightFoot]);
        Ok(())
    }

    #[test]
    fn test_load_events_any_dispatches_on_extension() -> Result<()> {
        let input = events_file()?;
        let dir = TempDir::new()?;
        let out = dir.path().join("events.lz4");
        build_event_cache(input.path(), &out)?;

        assert_eq!(load_events_any(&out)?, load_events_any(input.path())?);
        Ok(())
    }

    #[test]
    fn test_corrupt_cache_fails() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        // Size prefix of 8 bytes followed by a truncated LZ4 block.
        file.write_all(&[8u8, 0, 0, 0, 0xf0])?;
        assert!(load_event_cache(file.path()).is_err());
        Ok(())
    }
}
