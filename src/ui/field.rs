use crate::simulation::trail::{VisitGrid, GRID_CELLS};

/// Shading ramp for visit counts; index clamps to the last entry.
const CHARS: [char; 5] = [' ', '.', ':', '*', '#'];

/// Marker for the rover's current cell.
const AGENT_MARKER: char = 'O';

/// Renders the world box as character rows: visited cells shaded by
/// visit count, the rover overlaid on top.
#[must_use]
pub fn compute_field_grid(trail: &VisitGrid, agent_position: (i32, i32)) -> Vec<String> {
    let (agent_row, agent_col) = VisitGrid::cell_indices(agent_position);

    (0..GRID_CELLS)
        .map(|row| {
            let mut line = String::with_capacity(GRID_CELLS);
            for col in 0..GRID_CELLS {
                if (row, col) == (agent_row, agent_col) {
                    line.push(AGENT_MARKER);
                } else {
                    let visits = trail.count_at(row, col) as usize;
                    let idx = visits.min(CHARS.len() - 1); // Safety clamp
                    line.push(CHARS[idx]);
                }
            }
            line
        })
        .collect()
}
