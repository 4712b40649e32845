use std::time::Instant;

use estate_pathing::{Arena, Error, Planner};

fn main() {
    env_logger::init();

    let arena = Arena::estate();
    let mut planner = Planner::from_entropy();

    println!("Planning...");
    let num_paths = 10_000;
    loop {
        let start = Instant::now();
        let mut waypoints = 0;
        let mut failures = 0;
        for _ in 0..num_paths {
            match plan_random(&mut planner, &arena) {
                Ok(len) => waypoints += len,
                Err(_) => failures += 1,
            }
        }
        let per_path = start.elapsed() / num_paths;
        println!(
            "Avg. path: {:?} ({:.2} waypoints, {} failed)",
            per_path,
            waypoints as f64 / (num_paths - failures) as f64,
            failures,
        );
    }
}

/// Plans between two random free points and returns the number of waypoints.
fn plan_random(planner: &mut Planner, arena: &Arena) -> Result<usize, Error> {
    let start = planner.sample_point(arena)?;
    let end = planner.sample_point(arena)?;
    Ok(planner.plan_path(start, end, arena)?.len())
}
