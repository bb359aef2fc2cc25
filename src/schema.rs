use super::*;

/// Record layout of a point source.
///
/// - **Plain**: `x y`
/// - **Weighted**: `weight x y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schema {
    #[default]
    Plain,
    Weighted,
}

impl Schema {
    /// Number of whitespace-separated fields per record.
    pub const fn fields(&self) -> usize {
        match self {
            Self::Plain => 2,
            Self::Weighted => 3,
        }
    }

    /// Parses one record. The error is a human-readable reason for the
    /// warning that accompanies a skipped line.
    pub fn parse(&self, line: &str) -> std::result::Result<Point, String> {
        let fields = line.split_whitespace().collect::<Vec<&str>>();
        if fields.len() != self.fields() {
            return Err(format!(
                "parsed {} fields, wanted {}",
                fields.len(),
                self.fields()
            ));
        }
        let values = fields
            .iter()
            .map(|s| {
                s.parse::<f64>()
                    .map_err(|e| format!("{:?}: {}", s, e))
                    .and_then(|v| match v.is_finite() {
                        true => Ok(v),
                        false => Err(format!("{:?}: not finite", s)),
                    })
            })
            .collect::<std::result::Result<Vec<f64>, String>>()?;
        match self {
            Self::Plain => Ok(Point::new(values[0], values[1])),
            Self::Weighted if values[0] < 0. => Err(format!("negative weight {}", values[0])),
            Self::Weighted => Ok(Point::weighted(values[0], values[1], values[2])),
        }
    }
}
