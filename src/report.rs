//! Coordinate output for downstream plotting tools.
//!
//! One line per centroid as `x y c<index>`, then one line per point as
//! `x y <cluster>`, points grouped by cluster in store order.
use super::*;
use std::io::Write;

/// Writes the text report.
pub fn write<W: Write>(w: &mut W, points: &Points, clustering: &Clustering) -> std::io::Result<()> {
    for (j, c) in clustering.centroids().iter().enumerate() {
        writeln!(w, "{} c{}", c, j)?;
    }
    let assignment = clustering.assignment();
    for j in 0..assignment.k() {
        for i in assignment.members(j) {
            writeln!(w, "{} {}", points[i], j)?;
        }
    }
    w.flush()
}

/// Writes the whole clustering as JSON.
pub fn json<W: Write>(w: &mut W, clustering: &Clustering) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, clustering)?;
    writeln!(w)?;
    w.flush()
}

/// Writes bare `x y` records, as consumed by [`Points::parse`].
pub fn points<W: Write>(w: &mut W, points: &[Point]) -> std::io::Result<()> {
    for p in points {
        writeln!(w, "{}", p)?;
    }
    w.flush()
}
