//! Simulation constants.

/// Substituted when a supplied rover name is blank.
pub const DEFAULT_NAME: &str = "Default_Rover";

/// Closed coordinate bound of the world box on both axes.
pub const GRID_BOUND: i32 = 10;

pub const FULL_BATTERY: i32 = 100;
pub const MOVE_COST: i32 = 10;
/// Deflected moves cost less than committed ones.
pub const OBSTACLE_COST: i32 = 5;
pub const SCAN_COST: i32 = 5;

/// Probability that a move attempt runs into an obstacle.
pub const OBSTACLE_CHANCE: f64 = 0.2;

/// Pause between scripted demo actions, in milliseconds.
pub const TICK_MS: u64 = 1000;
