pub mod agent;
pub mod history;
pub mod params;
pub mod rng;
pub mod trail;

pub use agent::{Agent, Direction, MoveOutcome, ScanObject, ScanOutcome};
pub use rng::{RandomSource, SeededRandom, ThreadRandom};
