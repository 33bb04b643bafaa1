use crate::{
    constants::{
        GRID_HEIGHT, GRID_WIDTH, LOOP_CONNECTION_CHANCE, ROOM_MAX_SIZE, ROOM_MIN_SIZE, ROOM_TRIES,
    },
    types::Point,
};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomParams {
    // The smallest width and height a room may be drawn with. Both
    // components must be odd so rooms stay aligned to the same lattice
    // the corridors grow on.
    pub min: Point,
    // The ceiling for the room size draw. Sizes are picked as an even
    // offset on top of `min`, which keeps them odd.
    pub max: Point,
}

impl Default for RoomParams {
    fn default() -> Self {
        RoomParams {
            min: ROOM_MIN_SIZE,
            max: ROOM_MAX_SIZE,
        }
    }
}

// Which cell leaves the active list once a growth pass finds it has no
// carvable direction left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EvictionPolicy {
    // Drop the cell that was just examined. Guarantees the pass only
    // retires cells that can no longer contribute.
    #[default]
    Examined,
    // Drop the oldest cell in the list, whichever cell was examined.
    // Gives up on old frontier cells earlier and branches differently.
    Oldest,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DungeonBuilderConfig {
    pub grid_size: Point,
    // How many candidate rectangles are drawn before room placement
    // stops. Placement is best effort, unlucky draws can reject all of
    // them.
    pub room_tries: u32,
    pub room_params: RoomParams,
    pub eviction_policy: EvictionPolicy,
    // Probability of carving a redundant connector as an extra door,
    // opening a navigation loop instead of a tree.
    pub loop_connection_chance: f64,
    // Pin this to make the whole build reproducible. When left empty a
    // fresh seed is drawn and logged.
    pub random_seed: Option<u64>,
}

impl Default for DungeonBuilderConfig {
    fn default() -> Self {
        DungeonBuilderConfig {
            grid_size: Point::new(GRID_WIDTH, GRID_HEIGHT),
            room_tries: ROOM_TRIES,
            room_params: RoomParams::default(),
            eviction_policy: EvictionPolicy::default(),
            loop_connection_chance: LOOP_CONNECTION_CHANCE,
            random_seed: None,
        }
    }
}
