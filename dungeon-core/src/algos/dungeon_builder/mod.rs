use crate::{
    algos::RngHandler,
    types::{Dungeon, Grid, Material, Point, Rect, Region, Room},
};

use anyhow::Result;
use tracing::event;

mod builder_config;
mod find_connectors;
mod grow_maze;
mod join_regions;
mod place_rooms;

pub use builder_config::{DungeonBuilderConfig, EvictionPolicy, RoomParams};

pub(crate) struct DungeonBuilder {
    pub size: Point,
}

impl DungeonBuilder {
    pub fn new(config: &DungeonBuilderConfig) -> Result<Self> {
        let size = config.grid_size;

        if size.x <= 0 || size.y <= 0 {
            return Err(anyhow::anyhow!(
                "Grid dimensions must be greater than zero, got [{}x{}]",
                size.x,
                size.y
            ));
        }

        let params = &config.room_params;

        if params.min.x < 1 || params.min.y < 1 || params.min.x % 2 == 0 || params.min.y % 2 == 0 {
            return Err(anyhow::anyhow!(
                "Room minimum dimensions must be odd and positive, got [{}x{}]",
                params.min.x,
                params.min.y
            ));
        }

        if params.max.x < params.min.x || params.max.y < params.min.y {
            return Err(anyhow::anyhow!(
                "Room maximum dimensions [{}x{}] cannot be smaller than the minimum [{}x{}]",
                params.max.x,
                params.max.y,
                params.min.x,
                params.min.y
            ));
        }

        // The size draw spans half the maximum, so anything below two
        // leaves it with an empty range to pick from.
        if params.max.x < 2 || params.max.y < 2 {
            return Err(anyhow::anyhow!(
                "Room maximum dimensions must be at least [2x2], got [{}x{}]",
                params.max.x,
                params.max.y
            ));
        }

        Ok(DungeonBuilder { size })
    }

    pub fn build(&self, config: &DungeonBuilderConfig) -> Dungeon {
        let build_start = std::time::Instant::now();

        let (mut rng, seed) = RngHandler::seeded(config.random_seed);
        event!(
            tracing::Level::DEBUG,
            "Building a [{}x{}] dungeon from seed [{}]",
            self.size.x,
            self.size.y,
            seed
        );

        let mut grid = Grid::new(self.size);

        let rects = Self::place_rooms(
            grid.bounds(),
            &config.room_params,
            config.room_tries,
            &mut rng,
        );
        let rooms = Self::carve_rooms(&mut grid, &rects);

        let rooms_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Placed {} rooms in {:.2}ms",
            rooms.len(),
            rooms_time.duration_since(build_start).as_millis()
        );

        Self::grow_maze(&mut grid, config.eviction_policy, &mut rng);

        let maze_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Grew corridors across {} regions in {:.2}ms",
            grid.region_count(),
            maze_time.duration_since(rooms_time).as_millis()
        );

        let connectors = Self::find_connectors(&grid);

        let connectors_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Found {} connector candidates in {:.2}ms",
            connectors.len(),
            connectors_time.duration_since(maze_time).as_millis()
        );

        let doors = Self::join_regions(
            &mut grid,
            &connectors,
            config.loop_connection_chance,
            &mut rng,
        );

        let doors_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Joined regions through {} doors in {:.2}ms",
            doors.len(),
            doors_time.duration_since(connectors_time).as_millis()
        );

        event!(
            tracing::Level::DEBUG,
            "Built dungeon with {} rooms and {} doors in {:.2}ms total",
            rooms.len(),
            doors.len(),
            doors_time.duration_since(build_start).as_millis()
        );

        Dungeon {
            grid,
            rooms,
            connectors,
            doors,
        }
    }

    // Carves each accepted rectangle into the grid under a fresh region id.
    pub(super) fn carve_rooms(grid: &mut Grid, rects: &[Rect]) -> Vec<Room> {
        rects
            .iter()
            .map(|&rect| {
                let region = grid.new_region();

                for point in rect.points() {
                    Self::carve(grid, point, region);
                }

                Room { rect, region }
            })
            .collect()
    }

    // Carving pairs the material flip with the region label, so carved
    // cells always carry the id of the pass that opened them.
    pub(super) fn carve(grid: &mut Grid, point: Point, region: Region) {
        grid.set_material(point, Material::Carved);
        grid.set_region(point, region);
    }
}
