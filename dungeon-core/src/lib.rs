mod algos;
mod constants;
mod types;

use anyhow::Result;
use tracing::{Level, span};

pub use algos::{DungeonBuilderConfig, EvictionPolicy, RoomParams};
pub use types::{
    Connector, ConnectorSide, Direction, Dungeon, Grid, Material, Point, Rect, Region, Room,
};

// A whole dungeon from one config. The same config, seed included, always
// yields the same layout.
pub fn create_dungeon(config: &DungeonBuilderConfig) -> Result<Dungeon> {
    let span = span!(Level::DEBUG, "create_dungeon");
    let _guard = span.enter();

    let builder = algos::DungeonBuilder::new(config)?;

    Ok(builder.build(config))
}
