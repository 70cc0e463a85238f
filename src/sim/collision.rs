//! Terminal-state detection
//!
//! Pure predicates over the post-step snake. The tick orchestrator owns the
//! Running -> GameOver transition these feed.

use crate::config::GridConfig;
use crate::sim::state::Cell;

/// True when the head has left the board
pub fn hits_wall(head: Cell, grid: &GridConfig) -> bool {
    head.x < 0 || head.x >= grid.board_width || head.y < 0 || head.y >= grid.board_height
}

/// True when the head occupies the same cell as any other segment
pub fn hits_self(snake: &[Cell]) -> bool {
    snake[1..].contains(&snake[0])
}

/// Terminal-state check, evaluated once per tick right after the step
///
/// `snake` is head-first and never empty.
pub fn check_game_over(snake: &[Cell], grid: &GridConfig) -> bool {
    hits_wall(snake[0], grid) || hits_self(snake)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridConfig {
        GridConfig::default()
    }

    #[test]
    fn test_wall_collision_each_side() {
        let grid = grid();
        assert!(hits_wall(Cell::new(-25, 100), &grid));
        assert!(hits_wall(Cell::new(500, 100), &grid));
        assert!(hits_wall(Cell::new(100, -25), &grid));
        assert!(hits_wall(Cell::new(100, 500), &grid));
    }

    #[test]
    fn test_edge_cells_are_inside() {
        let grid = grid();
        assert!(!hits_wall(Cell::new(0, 0), &grid));
        assert!(!hits_wall(Cell::new(475, 475), &grid));
    }

    #[test]
    fn test_self_collision_on_non_tail_segment() {
        // Head re-entered the third segment's cell
        let snake = [
            Cell::new(50, 0),
            Cell::new(25, 0),
            Cell::new(0, 0),
            Cell::new(25, 0),
        ];
        assert!(hits_self(&snake));
        assert!(check_game_over(&snake, &grid()));
    }

    #[test]
    fn test_straight_body_is_clear() {
        let snake = [
            Cell::new(100, 250),
            Cell::new(75, 250),
            Cell::new(50, 250),
        ];
        assert!(!hits_self(&snake));
        assert!(!check_game_over(&snake, &grid()));
    }

    #[test]
    fn test_single_segment_never_self_collides() {
        let snake = [Cell::new(250, 250)];
        assert!(!hits_self(&snake));
    }
}
