use crate::{errors::InternalError, point::Point};

/// Twice the signed area of the triangle `a`, `b`, `c`; positive when counterclockwise
pub(crate) fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether `p` lies strictly to the left of the segment running from `lo` up to `hi`.
///
/// A point level with one of the endpoints is compared against that endpoint's `x`.
/// Otherwise the segment must not be horizontal.
pub(crate) fn is_left_of_line(lo: &Point, hi: &Point, p: &Point) -> Result<bool, InternalError> {
    if p.equal_y(hi) {
        Ok(p.x < hi.x)
    } else if p.equal_y(lo) {
        Ok(p.x < lo.x)
    } else {
        let x = x_at(lo, hi, p.y)?;
        Ok(p.x < x)
    }
}

/// The `x` coordinate of the line through `lo` and `hi` at height `y`
pub(crate) fn x_at(lo: &Point, hi: &Point, y: f64) -> Result<f64, InternalError> {
    if lo.equal_y(hi) {
        return Err(InternalError::new(format!("Horizontal segment {} - {} has no single x at y = {}", lo, hi, y)));
    }
    Ok(lo.x + (y - lo.y) * (hi.x - lo.x) / (hi.y - lo.y))
}

/// Signed area of a closed ring of points; positive when counterclockwise
pub(crate) fn signed_area<'a>(points: impl Iterator<Item = &'a Point> + Clone) -> f64 {
    let next = points.clone().cycle().skip(1);
    points.zip(next).map(|(a, b)| a.x * b.y - b.x * a.y).sum::<f64>() / 2.0
}

/// Even-odd test of `p` against a closed ring of points
pub(crate) fn ring_contains<'a>(points: impl Iterator<Item = &'a Point> + Clone, p: &Point) -> bool {
    let next = points.clone().cycle().skip(1);
    let mut inside = false;
    for (a, b) in points.zip(next) {
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}
