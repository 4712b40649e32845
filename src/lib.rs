pub use arena::Arena;
pub use cgmath;
pub use error::{Error, Result};
pub use math::Circle;
pub use path::Path;
pub use planner::{Planner, PlannerConfig};
pub use util::Interval;

#[cfg(feature = "debug")]
pub use debug::take_debug_frame;

mod arena;
mod debug;
mod error;
pub mod math;
mod path;
mod planner;
mod util;
