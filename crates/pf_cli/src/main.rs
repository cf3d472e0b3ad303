//! pf CLI
//!
//! Event cache builder plus segmentation and invasion reports.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pf")]
#[command(about = "Play actions and invasion index for soccer event logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build a MessagePack+LZ4 cache from an events JSON file
    Cache {
        /// Input events JSON file
        #[arg(long)]
        r#in: PathBuf,

        /// Output cache file (use the .lz4 extension)
        #[arg(long)]
        out: PathBuf,

        /// Verify cache after building
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Segment one match into play actions
    Segment {
        /// Events JSON file or .lz4 cache
        #[arg(long)]
        events: PathBuf,

        /// Match id
        #[arg(long = "match")]
        match_id: u64,

        /// Print JSON instead of one line per action
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Invasion index and speed series for one match
    Invasion {
        /// Events JSON file or .lz4 cache
        #[arg(long)]
        events: PathBuf,

        /// Match id
        #[arg(long = "match")]
        match_id: u64,

        /// YAML zone table replacing the built-in field weights
        #[arg(long)]
        weights: Option<PathBuf>,

        /// YAML analysis config (defaults to PF_ANALYSIS_CONFIG / built-ins)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List match ids with their event counts
    Matches {
        /// Events JSON file or .lz4 cache
        #[arg(long)]
        events: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Cache {
            r#in,
            out,
            verify,
            metadata,
        } => {
            println!("🔨 Building event cache...");
            println!("   Input:  {}", r#in.display());
            println!("   Output: {}", out.display());

            let meta = pf_cli::build_event_cache(&r#in, &out)?;

            print_metadata(&meta);

            if verify {
                verify_cache_integrity(&out, &meta.checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Segment {
            events,
            match_id,
            json,
        } => {
            let by_match = pf_cli::load_events_any(&events)?;
            let actions = pf_core::segment_match(&by_match, match_id)?;
            let report = pf_cli::segment_report(match_id, &actions);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Match {}: {} play actions", match_id, report.action_count);
                for summary in &report.actions {
                    println!("{}", summary.line());
                }
                let counts = report.label_counts;
                println!(
                    "\n   interruption: {}  shot: {}  penalty: {}  ball lost: {}",
                    counts.interruption, counts.shot, counts.penalty, counts.ball_lost
                );
            }
        }

        Commands::Invasion {
            events,
            match_id,
            weights,
            config,
            out,
        } => {
            let by_match = pf_cli::load_events_any(&events)?;
            let config = match config {
                Some(path) => pf_core::AnalysisConfig::from_path(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?,
                None => pf_core::AnalysisConfig::from_env_or_default(),
            };

            let series = match weights {
                Some(path) => {
                    let table = pf_core::ZoneTable::from_path(&path)
                        .with_context(|| format!("Failed to load weights: {}", path.display()))?;
                    pf_core::invasion_index_with(&by_match, match_id, &table, &config)?
                }
                None => pf_core::invasion_index_with(
                    &by_match,
                    match_id,
                    &pf_core::HeuristicWeights,
                    &config,
                )?,
            };

            let report = pf_cli::invasion_report(match_id, series);
            let report_json = serde_json::to_string_pretty(&report)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, report_json)
                        .with_context(|| format!("Failed to write report: {}", path.display()))?;
                    println!("📄 Invasion report saved to: {}", path.display());
                }
                None => println!("{}", report_json),
            }
        }

        Commands::Matches { events } => {
            let by_match = pf_cli::load_events_any(&events)?;
            println!("{} matches", by_match.len());
            for (match_id, match_events) in &by_match {
                println!("   {:>10}  {:>5} events", match_id, match_events.len());
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &pf_cli::CacheMetadata) {
    println!("\n✅ Cache built successfully!");
    println!("   Events:          {} in {} matches", meta.event_count, meta.match_count);
    println!(
        "   Original size:   {} bytes ({:.2} KB)",
        meta.original_size,
        meta.original_size as f64 / 1024.0
    );
    println!(
        "   Compressed size: {} bytes ({:.2} KB)",
        meta.compressed_size,
        meta.compressed_size as f64 / 1024.0
    );
    println!("   Compression:     {:.1}%", meta.compression_ratio * 100.0);
    println!("   Checksum:        {}", meta.checksum);
    println!("   Created:         {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_cache_integrity(cache_path: &Path, checksum: &str) -> Result<()> {
    println!("\n🔍 Verifying cache integrity...");
    if pf_cli::verify_cache(cache_path, checksum)? {
        println!("✅ Cache verification passed");
        Ok(())
    } else {
        anyhow::bail!("❌ Cache verification failed - checksum mismatch!")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &Path, meta: &pf_cli::CacheMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)
        .with_context(|| format!("Failed to write metadata: {}", path.display()))?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("pf CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
