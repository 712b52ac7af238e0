//! The rover agent: identity, position, battery, and the move/scan actions.

use crate::simulation::params::{
    DEFAULT_NAME, FULL_BATTERY, GRID_BOUND, MOVE_COST, OBSTACLE_CHANCE, OBSTACLE_COST, SCAN_COST,
};
use crate::simulation::rng::RandomSource;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four unit-vector headings a rover can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector (dx, dy) for this heading.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Lowercase label matching the command surface.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a label outside the recognized command set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction `{0}`: choose from up, down, left, right")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// What a scan detected in the surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanObject {
    Nothing,
    Wall,
    Item,
    Enemy,
}

impl ScanObject {
    pub const ALL: [Self; 4] = [Self::Nothing, Self::Wall, Self::Item, Self::Enemy];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Wall => "wall",
            Self::Item => "item",
            Self::Enemy => "enemy",
        }
    }
}

impl fmt::Display for ScanObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a single [`Agent::move_toward`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The rover is depleted; nothing happened.
    Inactive,
    /// The label was not a recognized direction; nothing happened.
    InvalidDirection,
    /// An obstacle deflected the move. Position unchanged, reduced cost paid.
    ObstacleAvoided { battery: i32 },
    /// The candidate cell lies outside the world box; nothing happened.
    OutOfBounds {
        direction: Direction,
        attempted: (i32, i32),
    },
    /// The move committed.
    Moved {
        direction: Direction,
        position: (i32, i32),
        battery: i32,
    },
}

/// Result of a single [`Agent::scan`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The rover is depleted; nothing happened.
    Inactive,
    /// One category drawn from the fixed detection set.
    Detected { object: ScanObject, battery: i32 },
}

/// The simulated rover.
///
/// Invariants: `position` stays inside the closed
/// [-`GRID_BOUND`, `GRID_BOUND`] box on both axes, `battery` is
/// non-increasing and clamped at 0, and `active` never flips back to
/// true once battery depletion clears it.
#[derive(Debug, Clone)]
pub struct Agent {
    pub name: String,
    pub position: (i32, i32),
    pub battery: i32,
    pub active: bool,
}

impl Agent {
    /// Creates a rover with a sanitized name and a full battery.
    ///
    /// The starting position is taken as given; only the name is
    /// validated.
    #[must_use]
    pub fn new(name: &str, position: (i32, i32)) -> Self {
        let agent = Self {
            name: sanitize_name(name),
            position,
            battery: FULL_BATTERY,
            active: true,
        };
        log::info!("{} initialized at position {:?}", agent.name, agent.position);
        agent
    }

    /// Attempts one step along `direction` (a label from the command
    /// surface: `up`, `down`, `left`, `right`).
    ///
    /// Guards run in a fixed order: activity, label validity, obstacle
    /// draw, boundary check. The obstacle draw happens before the
    /// candidate cell is computed, so a deflected step pays its cost
    /// even when the step would have been rejected at the boundary.
    pub fn move_toward(&mut self, direction: &str, rng: &mut dyn RandomSource) -> MoveOutcome {
        if !self.active {
            log::warn!("{} is out of battery or deactivated", self.name);
            return MoveOutcome::Inactive;
        }

        let heading = match Direction::from_str(direction) {
            Ok(heading) => heading,
            Err(err) => {
                log::warn!("{}: {err}", self.name);
                return MoveOutcome::InvalidDirection;
            }
        };

        if rng.chance() < OBSTACLE_CHANCE {
            log::info!("obstacle detected, {} avoids it", self.name);
            self.consume(OBSTACLE_COST);
            return MoveOutcome::ObstacleAvoided {
                battery: self.battery,
            };
        }

        let (dx, dy) = heading.delta();
        let candidate = (self.position.0 + dx, self.position.1 + dy);
        if !in_bounds(candidate) {
            log::warn!("{} cannot move {heading}: out of bounds", self.name);
            return MoveOutcome::OutOfBounds {
                direction: heading,
                attempted: candidate,
            };
        }

        self.position = candidate;
        self.consume(MOVE_COST);
        log::info!("{} moved {heading} to {:?}", self.name, self.position);
        MoveOutcome::Moved {
            direction: heading,
            position: self.position,
            battery: self.battery,
        }
    }

    /// Scans the surroundings, drawing one category from the fixed
    /// detection set with equal probability.
    pub fn scan(&mut self, rng: &mut dyn RandomSource) -> ScanOutcome {
        if !self.active {
            log::warn!("{} is deactivated", self.name);
            return ScanOutcome::Inactive;
        }

        let idx = rng.pick(ScanObject::ALL.len()).min(ScanObject::ALL.len() - 1); // Safety clamp
        let object = ScanObject::ALL[idx];
        log::info!("{} scans environment: detected {object}", self.name);
        self.consume(SCAN_COST);
        ScanOutcome::Detected {
            object,
            battery: self.battery,
        }
    }

    /// Shared battery drain for moves, deflections, and scans.
    ///
    /// Driving the level to 0 deactivates the rover permanently.
    fn consume(&mut self, amount: i32) {
        self.battery -= amount;
        if self.battery <= 0 {
            self.battery = 0;
            self.active = false;
            log::warn!("{} battery depleted", self.name);
        } else {
            log::info!("{} battery level: {}%", self.name, self.battery);
        }
    }
}

/// Keeps only alphanumeric, underscore, and space characters, preserving
/// order. Input that is blank before filtering yields the default name.
fn sanitize_name(raw: &str) -> String {
    if raw.trim().is_empty() {
        return DEFAULT_NAME.to_string();
    }
    raw.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | ' '))
        .collect()
}

const fn in_bounds(position: (i32, i32)) -> bool {
    let (x, y) = position;
    x >= -GRID_BOUND && x <= GRID_BOUND && y >= -GRID_BOUND && y <= GRID_BOUND
}
