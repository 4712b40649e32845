use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use crate::math::RawCircle;
use crate::math::{Circle, Point2d};
use crate::util::Interval;
use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The radius of the estate yard.
const ESTATE_RADIUS: f64 = 130.0;

/// The centre of the estate yard.
const ESTATE_CENTRE: [f64; 2] = [0.0, -40.0];

/// The radius of each house footprint.
const HOUSE_RADIUS: f64 = 15.0;

/// The centre of each house footprint.
const HOUSES: [[f64; 2]; 6] = [
    [60.0, 10.0],
    [42.0, 75.0],
    [-37.0, 35.0],
    [80.0, -80.0],
    [-70.0, -120.0],
    [-55.0, -40.0],
];

static ESTATE: Lazy<Arena> = Lazy::new(|| Arena {
    boundary: Circle::new_unchecked(ESTATE_CENTRE.into(), ESTATE_RADIUS),
    obstacles: HOUSES
        .iter()
        .map(|centre| Circle::new_unchecked((*centre).into(), HOUSE_RADIUS))
        .collect(),
});

/// A bounded circular region containing a fixed set of circular obstacles.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawArena"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Arena {
    /// The region that waypoints are sampled from.
    boundary: Circle,
    /// The footprints which paths must avoid.
    obstacles: Vec<Circle>,
}

/// An arena as written in a document, before its geometry is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawArena {
    boundary: RawCircle,
    obstacles: Vec<RawCircle>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawArena> for Arena {
    type Error = Error;

    fn try_from(raw: RawArena) -> Result<Self> {
        let obstacles = raw
            .obstacles
            .into_iter()
            .map(Circle::try_from)
            .collect::<Result<_>>()?;
        Self::new(raw.boundary.try_into()?, obstacles)
    }
}

impl Arena {
    /// Creates a new arena.
    ///
    /// Obstacles may overlap each other or extend past the boundary.
    pub fn new(boundary: Circle, obstacles: Vec<Circle>) -> Result<Self> {
        let arena = Self {
            boundary,
            obstacles,
        };
        arena.validate()?;
        Ok(arena)
    }

    /// The estate yard: six houses in a circular yard.
    pub fn estate() -> Self {
        ESTATE.clone()
    }

    /// Parses an arena from JSON and validates its geometry.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawArena = serde_json::from_str(json)?;
        raw.try_into()
    }

    fn validate(&self) -> Result<()> {
        self.boundary.validate()?;
        if !(self.boundary.radius() > 0.0) {
            return Err(self.boundary.invalid());
        }
        self.obstacles.iter().try_for_each(Circle::validate)
    }

    pub fn boundary(&self) -> &Circle {
        &self.boundary
    }

    pub fn obstacles(&self) -> &[Circle] {
        &self.obstacles
    }

    /// Returns true if the point is within the boundary and outside every obstacle.
    pub fn is_free(&self, point: Point2d) -> bool {
        self.boundary.contains(point) && !self.obstacles.iter().any(|o| o.contains(point))
    }

    /// Returns true if any obstacle lies on the line through the two points.
    pub fn segment_blocked(&self, p1: Point2d, p2: Point2d) -> bool {
        self.obstacles.iter().any(|o| o.intersects_line(p1, p2))
    }

    /// The axis-aligned box candidate points are drawn from: the boundary's
    /// bounding square, scaled about its centre by `extent`.
    pub(crate) fn sampling_box(&self, extent: f64) -> [Interval<f64>; 2] {
        self.boundary.bounds().map(|axis| axis.scale(extent))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point2d::new(x, y), r).unwrap()
    }

    #[test]
    fn rejects_degenerate_boundary() {
        let result = Arena::new(circle(0.0, 0.0, 0.0), vec![]);
        assert!(matches!(result, Err(Error::InvalidGeometry { radius, .. }) if radius == 0.0));
    }

    #[test]
    fn estate_layout() {
        let estate = Arena::estate();
        assert_eq!(estate.boundary().centre(), Point2d::new(0.0, -40.0));
        assert_eq!(estate.boundary().radius(), 130.0);
        assert_eq!(estate.obstacles().len(), 6);
        assert!(estate.obstacles().iter().all(|o| o.radius() == 15.0));
    }

    #[test]
    fn free_points() {
        let arena = Arena::new(circle(0.0, 0.0, 100.0), vec![circle(10.0, 10.0, 5.0)]).unwrap();
        assert!(arena.is_free(Point2d::new(0.0, 0.0)));
        assert!(!arena.is_free(Point2d::new(12.0, 10.0)));
        assert!(!arena.is_free(Point2d::new(100.0, 1.0)));
    }

    #[test]
    fn blocked_by_any_obstacle() {
        let arena = Arena::new(
            circle(0.0, 0.0, 100.0),
            vec![circle(50.0, 0.0, 5.0), circle(0.0, 50.0, 5.0)],
        )
        .unwrap();
        assert!(arena.segment_blocked(Point2d::new(0.0, 0.0), Point2d::new(10.0, 0.0)));
        assert!(arena.segment_blocked(Point2d::new(0.0, 0.0), Point2d::new(0.0, 10.0)));
        assert!(!arena.segment_blocked(Point2d::new(0.0, 0.0), Point2d::new(10.0, 10.0)));
    }

    #[test]
    fn sampling_box_is_half_the_bounding_square() {
        let [x, y] = Arena::estate().sampling_box(0.5);
        assert_eq!(x, Interval::new(-65.0, 65.0));
        assert_eq!(y, Interval::new(-105.0, 25.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn arena_from_json() {
        let json = r#"{
            "boundary": { "centre": { "x": 0.0, "y": 0.0 }, "radius": 50.0 },
            "obstacles": [{ "centre": { "x": 10.0, "y": 0.0 }, "radius": 2.0 }]
        }"#;
        let arena = Arena::from_json(json).unwrap();
        assert_eq!(arena.obstacles(), &[circle(10.0, 0.0, 2.0)]);

        let bad = json.replace("2.0", "-2.0");
        assert!(matches!(Arena::from_json(&bad), Err(Error::InvalidGeometry { .. })));
        assert!(matches!(Arena::from_json("{"), Err(Error::Json(_))));

        let err = serde_json::from_str::<Arena>(&bad).unwrap_err();
        assert!(err.to_string().contains("invalid geometry"));
    }
}
