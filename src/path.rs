use crate::math::Point2d;
use crate::Arena;
use cgmath::prelude::*;
use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::Serialize;
use smallvec::SmallVec;

/// A series of waypoints from a start point to an end point.
///
/// Always holds at least two points: the requested start and end.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    points: SmallVec<[Point2d; 8]>,
}

impl Path {
    /// Creates a path from the start point alone; it is completed with [Self::finish].
    pub(crate) fn start_at(start: Point2d) -> Self {
        let mut points = SmallVec::new();
        points.push(start);
        Self { points }
    }

    /// Appends an intermediate waypoint.
    pub(crate) fn push(&mut self, point: Point2d) {
        self.points.push(point);
    }

    /// Appends the end point.
    pub(crate) fn finish(mut self, end: Point2d) -> Self {
        self.points.push(end);
        self
    }

    /// The most recently added waypoint.
    pub(crate) fn last(&self) -> Point2d {
        self.points[self.points.len() - 1]
    }

    /// The waypoints, including the start and end.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    pub fn start(&self) -> Point2d {
        self.points[0]
    }

    pub fn end(&self) -> Point2d {
        self.last()
    }

    /// The number of waypoints, including the start and end.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns an iterator over the segments between consecutive waypoints.
    pub fn segments(&self) -> impl Iterator<Item = (Point2d, Point2d)> + '_ {
        self.points.iter().copied().tuple_windows()
    }

    /// The total length of the path.
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// The time taken to walk the path at the given speed.
    pub fn travel_time(&self, speed: f64) -> f64 {
        self.length() / speed
    }

    /// Returns true if no segment of the path is blocked by an obstacle in the arena.
    pub fn is_clear(&self, arena: &Arena) -> bool {
        self.segments().all(|(a, b)| !arena.segment_blocked(a, b))
    }
}

impl From<Path> for Vec<Point2d> {
    fn from(path: Path) -> Self {
        path.points.into_vec()
    }
}
