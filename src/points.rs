use super::*;
use std::collections::HashSet;
use std::path::Path;

/// An immutable, deterministically ordered point set.
///
/// Points are sorted ascending by x, ties broken by y. The order only
/// affects reproducible output, never clustering correctness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Points(Vec<Point>);

impl Points {
    /// Reads and parses a point source from disk.
    /// An unreadable source is fatal; malformed records are skipped.
    pub fn load(path: impl AsRef<Path>, schema: Schema) -> Result<Self> {
        let path = path.as_ref();
        log::info!("{:<32}{:<32}", "loading points", path.display());
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes), schema))
    }

    /// Parses one record per line, skipping blank lines silently and
    /// malformed lines with a warning.
    pub fn parse(text: &str, schema: Schema) -> Self {
        let mut skipped = 0;
        let points = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(i, line)| match schema.parse(line) {
                Ok(point) => Some(point),
                Err(reason) => {
                    log::warn!("skipping line {}: {}", i + 1, reason);
                    skipped += 1;
                    None
                }
            })
            .collect::<Vec<Point>>();
        log::info!(
            "{:<32}{:<32}",
            "parsed points",
            format!("{} kept, {} skipped", points.len(), skipped)
        );
        Self::from(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }
    pub fn total_weight(&self) -> Weight {
        self.0.iter().map(Point::weight).sum()
    }
    /// Number of bit-for-bit distinct coordinate pairs.
    pub fn distinct(&self) -> usize {
        self.0
            .iter()
            .map(Point::location)
            .collect::<HashSet<(u64, u64)>>()
            .len()
    }
}

impl From<Vec<Point>> for Points {
    fn from(mut points: Vec<Point>) -> Self {
        points.sort_by(Point::order);
        Self(points)
    }
}

impl FromIterator<Point> for Points {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<Point>>())
    }
}

impl std::ops::Index<usize> for Points {
    type Output = Point;
    fn index(&self, i: usize) -> &Point {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
