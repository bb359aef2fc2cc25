//! Point Generator Binary
//!
//! Writes synthetic `x y` records to stdout for the clustering binary.

use anyhow::Context;
use clap::Parser;
use kclust::*;

#[derive(Parser)]
#[command(author, version, about = "Generate 2-D test points", long_about = None)]
struct Args {
    #[command(subcommand)]
    shape: Shape,
    /// Fixed random seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Shape {
    #[command(about = "Points uniformly distributed over a square", alias = "rand")]
    Uniform {
        #[arg(required = true)]
        n: usize,
    },
    #[command(about = "Points in circular blobs around random centers", alias = "blob")]
    Blobs {
        #[arg(required = true)]
        max: usize,
        #[arg(required = true)]
        n: usize,
    },
}

fn main() -> anyhow::Result<()> {
    kclust::log();
    let args = Args::parse();
    let ref mut rng = kclust::rng(args.seed);
    let points = match args.shape {
        Shape::Uniform { n } => generate::uniform(n, rng),
        Shape::Blobs { max, n } => generate::blobs(max, n, rng),
    };
    let ref mut out = std::io::BufWriter::new(std::io::stdout().lock());
    report::points(out, &points).context("writing points")
}
