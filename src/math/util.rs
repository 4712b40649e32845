use super::{Point2d, Vector2d};
use cgmath::prelude::*;

/// Projects a point onto the infinite line through `origin` with direction `dir`.
///
/// # Parameters
/// * `point` - The point to project
/// * `origin` - Any point on the line
/// * `dir` - A unit vector along the line
pub fn project_onto_line(point: Point2d, origin: Point2d, dir: Vector2d) -> Point2d {
    let t = dir.dot(point - origin);
    origin + t * dir
}

/// Gets the point `standoff` units short of `target`, on the straight line
/// from `from` towards `target`. Used to stop an agent just before whatever it chases.
///
/// Returns `target` unchanged if the two points coincide.
pub fn approach_point(from: Point2d, target: Point2d, standoff: f64) -> Point2d {
    let delta = target - from;
    let dist = delta.magnitude();
    if dist == 0.0 {
        return target;
    }
    target - delta * (standoff / dist)
}
