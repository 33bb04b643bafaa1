mod dungeon_builder;

pub(crate) use dungeon_builder::DungeonBuilder;
pub use dungeon_builder::{DungeonBuilderConfig, EvictionPolicy, RoomParams};

pub(crate) struct RngHandler;

impl RngHandler {
    // Every random draw in a build goes through the generator returned
    // here, so pinning a seed replays the exact same dungeon. The
    // resolved seed is handed back so it can be logged when the caller
    // pinned nothing.
    pub fn seeded(seed: Option<u64>) -> (rand::rngs::StdRng, u64) {
        use rand::{Rng, SeedableRng};

        let seed = seed.unwrap_or_else(|| rand::rng().random());

        (rand::rngs::StdRng::seed_from_u64(seed), seed)
    }
}
