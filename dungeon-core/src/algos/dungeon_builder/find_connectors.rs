use super::DungeonBuilder;
use crate::{
    constants::{CONNECTOR_MARGIN, DIRECTIONS},
    types::{Connector, ConnectorSide, Grid, Material, Point},
};

impl DungeonBuilder {
    // Scans the interior for rock cells whose two flanking cells along
    // an axis are carved into different regions. Records are emitted per
    // direction, so a cell separating two regions along one axis shows
    // up twice with mirrored sides. Callers that need unique cells have
    // to dedup by position.
    pub(super) fn find_connectors(grid: &Grid) -> Vec<Connector> {
        let bounds = grid.bounds();
        let mut connectors = Vec::new();

        for y in CONNECTOR_MARGIN..bounds.max.y - CONNECTOR_MARGIN {
            for x in CONNECTOR_MARGIN..bounds.max.x - CONNECTOR_MARGIN {
                let pos = Point::new(x, y);

                if grid.at(pos) != Material::Rock {
                    continue;
                }

                for direction in DIRECTIONS {
                    let ahead = pos + direction.delta();
                    let behind = pos + direction.reverse().delta();

                    if grid.at(ahead) == Material::Rock || grid.at(behind) == Material::Rock {
                        continue;
                    }

                    let ahead_region = grid.region_at(ahead);
                    let behind_region = grid.region_at(behind);

                    if ahead_region == behind_region {
                        continue;
                    }

                    connectors.push(Connector {
                        pos,
                        sides: [
                            ConnectorSide {
                                direction,
                                region: ahead_region,
                            },
                            ConnectorSide {
                                direction: direction.reverse(),
                                region: behind_region,
                            },
                        ],
                    });
                }
            }
        }

        connectors
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        algos::dungeon_builder::EvictionPolicy,
        types::{Direction, Rect, Region},
    };

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_room_beside_the_maze_produces_connectors() {
        let mut grid = Grid::new(Point::new(9, 9));
        let room = Rect::new(Point::new(1, 1), Point::new(4, 4));

        DungeonBuilder::carve_rooms(&mut grid, &[room]);

        let mut rng = StdRng::seed_from_u64(6);
        DungeonBuilder::grow_maze(&mut grid, EvictionPolicy::Examined, &mut rng);

        let connectors = DungeonBuilder::find_connectors(&grid);

        assert!(!connectors.is_empty());

        let mut bridging = 0;
        for connector in connectors.iter() {
            assert_eq!(grid.at(connector.pos), Material::Rock);

            let ahead = connector.pos + connector.sides[0].direction.delta();
            let behind = connector.pos + connector.sides[1].direction.delta();

            assert_eq!(grid.at(ahead), Material::Carved);
            assert_eq!(grid.at(behind), Material::Carved);
            assert_eq!(connector.sides[0].region, grid.region_at(ahead));
            assert_eq!(connector.sides[1].region, grid.region_at(behind));
            assert_ne!(connector.sides[0].region, connector.sides[1].region);

            assert!(connector.pos.x >= 2 && connector.pos.x <= 6);
            assert!(connector.pos.y >= 2 && connector.pos.y <= 6);

            let regions = [connector.sides[0].region, connector.sides[1].region];
            if regions.contains(&Region::Id(1)) && regions.contains(&Region::Id(2)) {
                bridging += 1;
            }
        }

        assert!(bridging > 0, "No connector bridges the room and the maze");
    }

    #[test]
    fn test_a_separating_cell_emits_mirrored_records() {
        let mut grid = Grid::new(Point::new(7, 7));

        let first = grid.new_region();
        let second = grid.new_region();
        DungeonBuilder::carve(&mut grid, Point::new(3, 3), first);
        DungeonBuilder::carve(&mut grid, Point::new(5, 3), second);

        let connectors = DungeonBuilder::find_connectors(&grid);

        let expected = vec![
            Connector {
                pos: Point::new(4, 3),
                sides: [
                    ConnectorSide {
                        direction: Direction::Right,
                        region: second,
                    },
                    ConnectorSide {
                        direction: Direction::Left,
                        region: first,
                    },
                ],
            },
            Connector {
                pos: Point::new(4, 3),
                sides: [
                    ConnectorSide {
                        direction: Direction::Left,
                        region: first,
                    },
                    ConnectorSide {
                        direction: Direction::Right,
                        region: second,
                    },
                ],
            },
        ];
        assert_eq!(connectors, expected);
    }

    #[test]
    fn test_cells_of_the_same_region_are_not_separated() {
        let mut grid = Grid::new(Point::new(7, 7));

        let region = grid.new_region();
        DungeonBuilder::carve(&mut grid, Point::new(3, 3), region);
        DungeonBuilder::carve(&mut grid, Point::new(5, 3), region);

        assert!(DungeonBuilder::find_connectors(&grid).is_empty());
    }

    #[test]
    fn test_the_outer_margin_is_never_scanned() {
        let mut grid = Grid::new(Point::new(9, 9));

        let first = grid.new_region();
        let second = grid.new_region();
        DungeonBuilder::carve(&mut grid, Point::new(1, 1), first);
        DungeonBuilder::carve(&mut grid, Point::new(1, 3), second);

        // (1, 2) separates the two regions but sits inside the margin.
        assert!(DungeonBuilder::find_connectors(&grid).is_empty());
    }

    #[test]
    fn test_an_uncarved_grid_has_no_connectors() {
        let grid = Grid::new(Point::new(9, 9));

        assert!(DungeonBuilder::find_connectors(&grid).is_empty());
    }
}
