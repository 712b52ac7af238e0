use rover_rust::simulation::trail::{VisitGrid, GRID_CELLS};
use rover_rust::ui::field::compute_field_grid;

#[test]
fn test_field_dimensions_cover_the_world_box() {
    let trail = VisitGrid::new();
    let grid = compute_field_grid(&trail, (0, 0));

    assert_eq!(grid.len(), GRID_CELLS);
    for line in &grid {
        assert_eq!(line.chars().count(), GRID_CELLS);
    }
}

#[test]
fn test_agent_marker_is_overlaid() {
    let trail = VisitGrid::new();

    let grid = compute_field_grid(&trail, (0, 0));
    let center = GRID_CELLS / 2;
    assert_eq!(grid[center].chars().nth(center), Some('O'));

    // Top-left corner of the rendered box is (-10, 10).
    let grid = compute_field_grid(&trail, (-10, 10));
    assert_eq!(grid[0].chars().next(), Some('O'));
}

#[test]
fn test_visited_cells_are_shaded() {
    let mut trail = VisitGrid::new();
    trail.visit((1, 0));

    // Render with the rover elsewhere so the visit marker shows through.
    let grid = compute_field_grid(&trail, (5, 5));
    let (row, col) = VisitGrid::cell_indices((1, 0));
    let shaded = grid[row].chars().nth(col).unwrap();
    assert_ne!(shaded, ' ');

    let (row, col) = VisitGrid::cell_indices((2, 0));
    assert_eq!(grid[row].chars().nth(col), Some(' '));
}
