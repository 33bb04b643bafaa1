use super::{DungeonBuilder, RoomParams};
use crate::types::{Point, Rect};

use rand::Rng;
use tracing::event;

impl DungeonBuilder {
    // Draws up to `max_tries` candidate rectangles and keeps each one
    // that lands fully inside `bounds` without overlapping an already
    // accepted room. Anchors are drawn odd and sizes as an even offset
    // on top of the odd minimum, so every accepted room sits on the
    // corridor lattice with rock left along the grid edge.
    pub(super) fn place_rooms(
        bounds: Rect,
        params: &RoomParams,
        max_tries: u32,
        rng: &mut impl Rng,
    ) -> Vec<Rect> {
        let mut rooms: Vec<Rect> = Vec::new();

        if bounds.max.x < 2 || bounds.max.y < 2 {
            event!(
                tracing::Level::WARN,
                "Skipping room placement, no odd anchor fits in {}",
                bounds
            );

            return rooms;
        }

        'drawing: for _ in 0..max_tries {
            let anchor = Point::new(
                rng.random_range(0..bounds.max.x / 2) * 2 + 1,
                rng.random_range(0..bounds.max.y / 2) * 2 + 1,
            );
            let size = Point::new(
                rng.random_range(0..params.max.x / 2) * 2 + params.min.x,
                rng.random_range(0..params.max.y / 2) * 2 + params.min.y,
            );

            let room = Rect::from_size(anchor, size);

            if !bounds.contains_rect(&room) {
                continue 'drawing;
            }

            for placed in rooms.iter() {
                if room.overlaps(placed) {
                    continue 'drawing;
                }
            }

            rooms.push(room);
        }

        rooms
    }
}
