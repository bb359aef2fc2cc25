//! Synthetic point producers.
//!
//! - [`uniform`] — points spread evenly over a square
//! - [`blobs`] — circular clusters around random centers
//!
//! Blob points take a uniform angle and a uniform radius, so density is
//! highest near each center. Test data relies on that non-uniformity.
use super::*;
use rand::Rng;

/// `n` points uniform over `[0, UNIFORM_SIDE)²`.
pub fn uniform<R: Rng>(n: usize, rng: &mut R) -> Vec<Point> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.random::<f64>() * UNIFORM_SIDE,
                rng.random::<f64>() * UNIFORM_SIDE,
            )
        })
        .collect()
}

/// `max` blobs of `n / max` points each.
pub fn blobs<R: Rng>(max: usize, n: usize, rng: &mut R) -> Vec<Point> {
    let per = match max {
        0 => 0,
        _ => n / max,
    };
    let mut points = Vec::with_capacity(per * max);
    for b in 0..max {
        let ref center = Point::new(
            rng.random::<f64>() * UNIFORM_SIDE,
            rng.random::<f64>() * UNIFORM_SIDE,
        );
        log::info!("{:<32}{:<32}", format!("blob {}", b), center);
        points.extend((0..per).map(|_| blob(center, rng)));
    }
    points
}

/// One point at a random angle and radius from `center`.
fn blob<R: Rng>(center: &Point, rng: &mut R) -> Point {
    let theta = std::f64::consts::TAU * rng.random::<f64>();
    let radius = BLOB_RADIUS * rng.random::<f64>();
    Point::new(
        center.x() + radius * theta.cos(),
        center.y() + radius * theta.sin(),
    )
}
