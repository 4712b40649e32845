//! Tests that plan paths around six houses in a circular yard.

use estate_pathing::{
    cgmath::prelude::*,
    math::{Circle, Point2d},
    Arena, Error, Planner,
};
use rand::{rngs::StdRng, SeedableRng};

const SEED: [u8; 32] = *b"Houses are circles, paths are...";

fn six_houses() -> Arena {
    let houses = [
        (60.0, 10.0),
        (42.0, 75.0),
        (-37.0, 35.0),
        (80.0, -80.0),
        (-70.0, -120.0),
        (-55.0, -40.0),
    ];
    Arena::new(
        Circle::new(Point2d::new(0.0, 0.0), 130.0).unwrap(),
        houses
            .iter()
            .map(|&(x, y)| Circle::new(Point2d::new(x, y), 15.0).unwrap())
            .collect(),
    )
    .unwrap()
}

fn planner() -> Planner {
    Planner::new(StdRng::from_seed(SEED))
}

/// A start point equal to the end point is never blocked.
#[test]
fn standing_still() {
    let arena = six_houses();
    let here = Point2d::new(0.0, -40.0);
    let path = planner().plan_path(here, here, &arena).unwrap();
    assert_eq!(path.points(), &[here, here]);
}

/// A point inside a house sees that house along every line, so no waypoint is reachable.
#[test]
fn starting_inside_a_house() {
    let arena = six_houses();
    let start = Point2d::new(-60.0, -40.0);
    let end = Point2d::new(60.0, -40.0);
    assert!(arena.segment_blocked(start, end));

    let result = planner().plan_path(start, end, &arena);
    assert!(matches!(result, Err(Error::PlanningFailed { .. })));
}

/// Walking across the yard past a house takes a detour.
#[test]
fn detour_past_house() {
    let arena = six_houses();
    let start = Point2d::new(-30.0, -40.0);
    let end = Point2d::new(30.0, -40.0);
    assert!(arena.segment_blocked(start, end));

    let mut planner = planner();
    for _ in 0..100 {
        let path = planner.plan_path(start, end, &arena).unwrap();
        assert!(path.len() >= 3);
        assert_eq!(path.start(), start);
        assert_eq!(path.end(), end);
        for (a, b) in path.segments() {
            assert!(!arena.segment_blocked(a, b));
        }
        for waypoint in &path.points()[1..path.len() - 1] {
            assert!(arena.is_free(*waypoint));
        }
    }
}

/// Plans between many random pairs of free points. A handful of points are
/// boxed in by houses on every side and can only fail, but the rest succeed.
#[test]
fn random_routes_terminate() {
    let arena = six_houses();
    let mut planner = planner();
    let mut failures = 0;

    for _ in 0..10_000 {
        let start = planner.sample_point(&arena).unwrap();
        let end = planner.sample_point(&arena).unwrap();
        match planner.plan_path(start, end, &arena) {
            Ok(path) => {
                assert_eq!(path.start(), start);
                assert_eq!(path.end(), end);
                assert!(path.is_clear(&arena));
            }
            Err(Error::PlanningFailed { .. }) => failures += 1,
            Err(err) => panic!("unexpected error: {}", err),
        }
    }

    assert!(failures < 100, "{} routes failed", failures);
}

/// The estate preset is usable as-is.
#[test]
fn wander_the_estate() {
    let arena = Arena::estate();
    let mut planner = planner();
    let mut planned = 0;
    for _ in 0..100 {
        let start = planner.sample_point(&arena).unwrap();
        let end = planner.sample_point(&arena).unwrap();
        if let Ok(path) = planner.plan_path(start, end, &arena) {
            assert!(path.is_clear(&arena));
            assert!(path.length() >= start.distance(end) - 1e-9);
            planned += 1;
        }
    }
    assert!(planned > 90);
}
