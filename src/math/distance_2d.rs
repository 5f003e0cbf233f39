use super::Point3;

/// Returns the distance between `a` and `b` measured in the XY plane,
/// ignoring elevation.
#[must_use]
pub fn planar_distance(a: &Point3, b: &Point3) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
