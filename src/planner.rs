use crate::debug::{debug_circle, debug_line};
use crate::error::{Error, Result};
use crate::math::{approach_point, Point2d};
use crate::{Arena, Path};
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Limits on the randomized search performed by a [Planner].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannerConfig {
    /// The number of candidate points drawn before giving up, both when
    /// sampling a free point and when looking for a reachable waypoint.
    pub max_attempts: usize,
    /// The number of intermediate waypoints added before giving up.
    pub max_waypoints: usize,
    /// The half-size of the sampling box as a fraction of the arena's radius.
    pub sample_extent: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
            max_waypoints: 1_000,
            sample_extent: 0.5,
        }
    }
}

impl PlannerConfig {
    /// Parses a config from JSON. Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be positive".into()));
        }
        if self.max_waypoints == 0 {
            return Err(Error::InvalidConfig("max_waypoints must be positive".into()));
        }
        if !(self.sample_extent > 0.0 && self.sample_extent.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "sample_extent must be positive and finite, got {}", self.sample_extent
            )));
        }
        Ok(())
    }
}

/// Plans paths around the obstacles of an [Arena] by picking random waypoints.
///
/// Paths are neither shortest nor deterministic; they only guarantee that the line
/// through each pair of consecutive waypoints misses every obstacle.
pub struct Planner<R = StdRng> {
    config: PlannerConfig,
    rng: R,
}

impl Planner<StdRng> {
    /// Creates a planner with the default config, seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Planner<R> {
    /// Creates a planner with the default config.
    pub fn new(rng: R) -> Self {
        Self {
            config: PlannerConfig::default(),
            rng,
        }
    }

    /// Creates a planner with the given config.
    pub fn with_config(config: PlannerConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Samples a random point inside the arena's boundary and outside all of its obstacles.
    ///
    /// Candidates are drawn uniformly from a square around the boundary's centre
    /// (see [PlannerConfig::sample_extent]) rather than from the disc itself.
    pub fn sample_point(&mut self, arena: &Arena) -> Result<Point2d> {
        let [xs, ys] = arena.sampling_box(self.config.sample_extent);
        if !(xs.length().is_finite() && ys.length().is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "sampling box {:?} x {:?} is not finite", xs, ys
            )));
        }
        let xs = Uniform::new_inclusive(xs.min, xs.max);
        let ys = Uniform::new_inclusive(ys.min, ys.max);

        for _ in 0..self.config.max_attempts {
            let point = Point2d::new(xs.sample(&mut self.rng), ys.sample(&mut self.rng));
            if arena.is_free(point) {
                return Ok(point);
            }
            trace!("rejected sample {:?}", point);
        }

        warn!("no free point found after {} samples", self.config.max_attempts);
        Err(Error::PlanningFailed {
            attempts: self.config.max_attempts,
        })
    }

    /// Plans a path from `start` to `end` which avoids the arena's obstacles.
    ///
    /// If the direct route is clear the path is just `[start, end]`. Otherwise random
    /// waypoints are appended, each reachable from the one before, until one can see `end`.
    /// The start and end points are used as given, even if they lie inside an obstacle.
    pub fn plan_path(&mut self, start: Point2d, end: Point2d, arena: &Arena) -> Result<Path> {
        for obstacle in arena.obstacles() {
            debug_circle("obstacle", obstacle);
        }

        let mut path = Path::start_at(start);
        if !arena.segment_blocked(start, end) {
            debug!("direct route from {:?} to {:?}", start, end);
            debug_line("path", start, end);
            return Ok(path.finish(end));
        }

        for _ in 0..self.config.max_waypoints {
            let from = path.last();
            let next = self.sample_reachable(from, arena)?;
            debug_line("path", from, next);
            path.push(next);

            if !arena.segment_blocked(next, end) {
                debug_line("path", next, end);
                let path = path.finish(end);
                debug!("planned route with {} waypoints", path.len());
                return Ok(path);
            }
        }

        warn!("no route to {:?} after {} waypoints", end, self.config.max_waypoints);
        Err(Error::PlanningFailed {
            attempts: self.config.max_waypoints,
        })
    }

    /// Plans a path to a spot `standoff` units short of `target`, as seen from `from`.
    pub fn chase_path(
        &mut self,
        from: Point2d,
        target: Point2d,
        standoff: f64,
        arena: &Arena,
    ) -> Result<Path> {
        let end = approach_point(from, target, standoff);
        self.plan_path(from, end, arena)
    }

    /// Samples free points until one can be reached from `from` without crossing an obstacle.
    fn sample_reachable(&mut self, from: Point2d, arena: &Arena) -> Result<Point2d> {
        for _ in 0..self.config.max_attempts {
            let point = self.sample_point(arena)?;
            if !arena.segment_blocked(from, point) {
                return Ok(point);
            }
        }

        warn!("no waypoint reachable from {:?} after {} samples", from, self.config.max_attempts);
        Err(Error::PlanningFailed {
            attempts: self.config.max_attempts,
        })
    }
}
