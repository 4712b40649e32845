use super::{project_onto_line, Point2d};
use crate::error::{Error, Result};
use crate::util::Interval;
use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circle, used both for the bounds of an arena and for the obstacles within it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCircle"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    centre: Point2d,
    radius: f64,
}

/// A circle as written in a document, before its geometry is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub(crate) struct RawCircle {
    centre: Point2d,
    radius: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCircle> for Circle {
    type Error = Error;

    fn try_from(raw: RawCircle) -> Result<Self> {
        Self::new(raw.centre, raw.radius)
    }
}

impl Circle {
    /// Creates a new circle. Fails if `radius` is negative, or if it or the centre is not finite.
    pub fn new(centre: Point2d, radius: f64) -> Result<Self> {
        let circle = Self { centre, radius };
        circle.validate()?;
        Ok(circle)
    }

    pub(crate) const fn new_unchecked(centre: Point2d, radius: f64) -> Self {
        Self { centre, radius }
    }

    /// Checks the centre is finite and the radius finite and non-negative.
    pub(crate) fn validate(&self) -> Result<()> {
        let finite = self.centre.x.is_finite() && self.centre.y.is_finite();
        if finite && self.radius >= 0.0 && self.radius.is_finite() {
            Ok(())
        } else {
            Err(self.invalid())
        }
    }

    pub(crate) fn invalid(&self) -> Error {
        Error::InvalidGeometry {
            centre: [self.centre.x, self.centre.y],
            radius: self.radius,
        }
    }

    pub fn centre(&self) -> Point2d {
        self.centre
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The extents of the circle's bounding square along each axis.
    pub fn bounds(&self) -> [Interval<f64>; 2] {
        [
            Interval::disc(self.centre.x, self.radius),
            Interval::disc(self.centre.y, self.radius),
        ]
    }

    /// Returns true if the point is inside or on the circle.
    pub fn contains(&self, point: Point2d) -> bool {
        (point - self.centre).magnitude2() <= self.radius * self.radius
    }

    /// Returns true if the line through `p1` and `p2` passes within the circle.
    ///
    /// The test is against the whole infinite line, not just the segment between
    /// the two points, so a circle lying beyond either end still counts as a hit.
    /// A zero-length segment never intersects anything.
    pub fn intersects_line(&self, p1: Point2d, p2: Point2d) -> bool {
        let delta = p2 - p1;
        let len = delta.magnitude();
        if len == 0.0 {
            return false;
        }
        let closest = project_onto_line(self.centre, p1, delta / len);
        closest.distance(self.centre) <= self.radius
    }
}
