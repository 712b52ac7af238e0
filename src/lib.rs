#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

//! A minimal single-rover grid simulation.
//!
//! One agent owns a position inside a fixed bounding box, a draining
//! battery, and two randomized actions: moving along the four compass
//! headings and scanning its surroundings. Every invalid input degrades
//! to a no-op with a diagnostic; nothing panics and nothing returns an
//! error from the action surface.

pub mod simulation;
pub mod ui;
