//! Clustering Binary
//!
//! Reads a point file, clusters it into k groups, and writes centroids and
//! labelled points to stdout. Diagnostics go to stderr.

use anyhow::Context;
use clap::Parser;
use clap::ValueEnum;
use kclust::*;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Cluster 2-D points into k groups", long_about = None)]
struct Args {
    /// Point file, one `x y` (or `weight x y`) record per line
    #[arg(required = true)]
    path: PathBuf,
    /// Number of clusters
    #[arg(required = true)]
    k: NonZeroUsize,
    /// Initial centroid selection
    #[arg(long, value_enum, default_value_t = Init::Uniform)]
    init: Init,
    /// Records lead with a population weight: `weight x y`
    #[arg(long)]
    weighted: bool,
    /// Capacity-balanced assignment (implies --weighted and --init plusplus)
    #[arg(long)]
    balanced: bool,
    /// Policy for clusters left without points
    #[arg(long, value_enum, default_value_t = Empty::Freeze)]
    empty: Empty,
    /// Squared displacement below which a centroid counts as stationary
    #[arg(long, default_value_t = kclust::CONVERGENCE_THRESHOLD)]
    threshold: f64,
    /// Iteration cap
    #[arg(long, default_value_t = kclust::MAX_ITERATIONS)]
    max_iterations: usize,
    /// Fixed random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Emit JSON instead of the text format
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Init {
    Uniform,
    Plusplus,
}

#[derive(Clone, Copy, ValueEnum)]
enum Empty {
    Freeze,
    Reseed,
}

impl Args {
    fn schema(&self) -> Schema {
        match self.weighted || self.balanced {
            true => Schema::Weighted,
            false => Schema::Plain,
        }
    }
    fn config(&self) -> Config {
        let config = match self.balanced {
            true => Config::balanced(self.k.get()),
            false => Config::new(self.k.get()).with_seeding(match self.init {
                Init::Uniform => Seeding::Uniform,
                Init::Plusplus => Seeding::PlusPlus,
            }),
        }
        .with_vacancy(match self.empty {
            Empty::Freeze => Vacancy::Freeze,
            Empty::Reseed => Vacancy::Reseed,
        })
        .with_threshold(self.threshold)
        .with_max_iterations(self.max_iterations);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    kclust::log();
    let args = Args::parse();
    let points = Points::load(&args.path, args.schema())
        .with_context(|| format!("loading {}", args.path.display()))?;
    let clustering = Engine::new(args.config())?
        .run(&points)
        .context("clustering")?;
    if !clustering.converged() {
        log::warn!(
            "reporting unconverged result after {} iterations",
            clustering.iterations()
        );
    }
    let ref mut out = std::io::BufWriter::new(std::io::stdout().lock());
    match args.json {
        true => report::json(out, &clustering),
        false => report::write(out, &points, &clustering),
    }
    .context("writing report")
}
