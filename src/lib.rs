//! Centroid clustering of 2-D points.
//!
//! Points are grouped into `k` clusters by Lloyd's algorithm. Three variants
//! share the same Seed → (Assign → Update → Check)* loop:
//!
//! 1. **Plain** — uniformly random distinct initial centroids
//! 2. **k-means++** — initial centroids sampled proportional to squared distance
//! 3. **Balanced** — weighted points are assigned so that every cluster carries
//!    roughly `total_weight / k` population
//!
//! ## Core Types
//!
//! - [`Points`] — Parsed, ordered point set
//! - [`Seeding`] — Initial centroid selection
//! - [`Assignment`] — Point → cluster mapping for one iteration
//! - [`Balancer`] — Capacity-balanced assignment
//! - [`Convergence`] — Two-state displacement check
//! - [`Engine`] — Orchestrates the loop and yields a [`Clustering`]
mod assignment;
mod balance;
mod centroid;
mod config;
mod convergence;
mod engine;
mod error;
mod lloyd;
mod point;
mod points;
mod sample;
mod schema;
mod seeding;
mod update;

pub mod generate;
pub mod report;

pub use assignment::*;
pub use balance::*;
pub use centroid::*;
pub use config::*;
pub use convergence::*;
pub use engine::*;
pub use error::*;
pub use lloyd::*;
pub use point::*;
pub use points::*;
pub use sample::*;
pub use schema::*;
pub use seeding::*;
pub use update::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Squared distances, displacements, and inertia.
pub type Energy = f64;
/// Point population in the balanced variant.
pub type Weight = f64;

// ============================================================================
// CONVERGENCE
// ============================================================================
/// Squared displacement at or below which a centroid counts as stationary.
pub const CONVERGENCE_THRESHOLD: Energy = 0.01;
/// Hard cap on assign/update passes before reporting non-convergence.
pub const MAX_ITERATIONS: usize = 1024;

// ============================================================================
// POINT PRODUCERS
// ============================================================================
/// Side length of the square that uniform points and blob centers fall in.
pub const UNIFORM_SIDE: f64 = 100.0;
/// Maximum distance from a blob center to any of its points.
pub const BLOB_RADIUS: f64 = 50.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Random source for seeding and generation: reproducible when a seed is
/// given, otherwise drawn from the operating system.
pub fn rng(seed: Option<u64>) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    match seed {
        Some(seed) => rand::rngs::SmallRng::seed_from_u64(seed),
        None => rand::rngs::SmallRng::from_os_rng(),
    }
}

/// Environment variable overriding the default `Info` log level.
pub const LOG_LEVEL_VAR: &str = "KCLUST_LOG";

/// Initialize terminal logging on stderr.
/// stdout is reserved for coordinate output, so nothing is ever logged there.
#[cfg(feature = "cli")]
pub fn log() {
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
