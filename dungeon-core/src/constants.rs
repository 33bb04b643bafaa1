use crate::types::{Direction, Point};

pub(crate) const GRID_WIDTH: i32 = 61;
pub(crate) const GRID_HEIGHT: i32 = 61;

pub(crate) const ROOM_TRIES: u32 = 10;
pub(crate) const ROOM_MIN_SIZE: Point = Point::new(5, 5);
pub(crate) const ROOM_MAX_SIZE: Point = Point::new(15, 15);

pub(crate) const LOOP_CONNECTION_CHANCE: f64 = 0.05;

// Connector candidates are only looked for this far away from the grid
// edge, matching the one-cell rock shell plus the flanking reads.
pub(crate) const CONNECTOR_MARGIN: i32 = 2;

// The scan order here fixes the order growth directions are considered
// in, which keeps seeded runs reproducible.
pub(crate) const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];
