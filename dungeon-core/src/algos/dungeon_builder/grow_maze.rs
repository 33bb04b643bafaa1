use super::{DungeonBuilder, EvictionPolicy};
use crate::{
    constants::DIRECTIONS,
    types::{Direction, Grid, Material, Point, Region},
};

use std::collections::VecDeque;

use rand::Rng;

impl DungeonBuilder {
    // Fills the odd-coordinate lattice with corridors. Every growth pass
    // shares the single region id allocated here, so the whole corridor
    // web reads as one region no matter how many passes it took.
    pub(super) fn grow_maze(grid: &mut Grid, policy: EvictionPolicy, rng: &mut impl Rng) {
        let bounds = grid.bounds();
        let region = grid.new_region();

        for y in (bounds.min.y + 1..bounds.max.y).step_by(2) {
            for x in (bounds.min.x + 1..bounds.max.x).step_by(2) {
                let start = Point::new(x, y);

                if grid.at(start) != Material::Carved {
                    Self::grow(grid, start, region, policy, rng);
                }
            }
        }
    }

    // One growing-tree pass. Cells are picked from the active list
    // uniformly at random rather than newest-first, which trades long
    // winding corridors for more branching.
    fn grow(
        grid: &mut Grid,
        start: Point,
        region: Region,
        policy: EvictionPolicy,
        rng: &mut impl Rng,
    ) {
        let mut active = VecDeque::new();
        active.push_back(start);

        let mut open = Vec::with_capacity(DIRECTIONS.len());

        while !active.is_empty() {
            let picked = rng.random_range(0..active.len());
            let cell = active[picked];

            open.extend(
                DIRECTIONS
                    .iter()
                    .copied()
                    .filter(|direction| Self::can_carve(grid, cell, *direction)),
            );

            if open.is_empty() {
                match policy {
                    EvictionPolicy::Examined => {
                        let _ = active.swap_remove_back(picked);
                    }
                    EvictionPolicy::Oldest => {
                        let _ = active.pop_front();
                    }
                }
            } else {
                let direction = open[rng.random_range(0..open.len())];

                Self::carve(grid, cell + direction.delta(), region);
                Self::carve(grid, cell + direction.delta() * 2, region);

                active.push_back(cell + direction.delta() * 2);
            }

            open.clear();
        }
    }

    // A direction is carvable when the landing cell two steps out is
    // still rock and the cell one step further stays inside the grid.
    // The extra step keeps corridors off the outermost ring, leaving a
    // rock shell around the whole layout.
    fn can_carve(grid: &Grid, from: Point, direction: Direction) -> bool {
        let landing = from + direction.delta() * 2;
        let beyond = from + direction.delta() * 3;

        grid.bounds().contains(beyond) && grid.at(landing) == Material::Rock
    }
}
