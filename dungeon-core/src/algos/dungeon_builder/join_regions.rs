use super::DungeonBuilder;
use crate::types::{Connector, Grid, Material, Point, Region, RegionSet};

use rand::Rng;
use tracing::event;

impl DungeonBuilder {
    // Carves doors until every live region id has been folded into one.
    // Each round picks a joinable region at random, opens one of its
    // connectors and relabels the region on the far side. Candidates the
    // merge made redundant are dropped, with a small chance of being
    // carved first as an extra loop door. Flank regions are reread from
    // the grid every round so earlier merges are always honored.
    pub(super) fn join_regions(
        grid: &mut Grid,
        connectors: &[Connector],
        loop_connection_chance: f64,
        rng: &mut impl Rng,
    ) -> Vec<Point> {
        let mut candidates = connectors.to_vec();
        let mut doors = Vec::new();

        loop {
            // Regions that still have a usable connector.
            let mut joinable = RegionSet::new();
            for candidate in candidates.iter() {
                if let Some((ahead, behind)) = Self::flanking_regions(grid, candidate) {
                    if ahead == behind {
                        continue;
                    }

                    if let (Region::Id(a), Region::Id(b)) = (ahead, behind) {
                        joinable.insert(a as usize);
                        joinable.insert(b as usize);
                    }
                }
            }

            let mut joinable = joinable.iter().collect::<Vec<_>>();
            if joinable.is_empty() {
                break;
            }

            // The set iterates in an unspecified order, so the random
            // pick has to come from a sorted list to stay reproducible.
            joinable.sort_unstable();

            let target = Region::Id(joinable[rng.random_range(0..joinable.len())] as u32);

            let touching = candidates
                .iter()
                .filter_map(|candidate| {
                    let (ahead, behind) = Self::flanking_regions(grid, candidate)?;

                    if ahead == behind {
                        None
                    } else if ahead == target {
                        Some((*candidate, behind))
                    } else if behind == target {
                        Some((*candidate, ahead))
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>();

            let (connector, absorbed) = touching[rng.random_range(0..touching.len())];

            Self::carve(grid, connector.pos, target);
            doors.push(connector.pos);

            // Fold the absorbed region into the target id, cell by cell.
            for point in grid.bounds().points() {
                if grid.region_at(point) == absorbed {
                    grid.set_region(point, target);
                }
            }

            // Drop the candidates this merge spent or made redundant,
            // occasionally carving a redundant one as a loop door first.
            let mut kept = Vec::with_capacity(candidates.len());
            for candidate in candidates.drain(..) {
                if grid.at(candidate.pos) != Material::Rock {
                    continue;
                }

                match Self::flanking_regions(grid, &candidate) {
                    Some((ahead, behind)) if ahead != behind => kept.push(candidate),
                    Some((ahead, _)) => {
                        if rng.random_bool(loop_connection_chance) {
                            Self::carve(grid, candidate.pos, ahead);
                            doors.push(candidate.pos);
                        }
                    }
                    None => {}
                }
            }
            candidates = kept;
        }

        let mut live = RegionSet::new();
        for point in grid.bounds().points() {
            if let Region::Id(id) = grid.region_at(point) {
                live.insert(id as usize);
            }
        }

        if live.len() > 1 {
            event!(
                tracing::Level::WARN,
                "Joining stalled with {} regions still separated",
                live.len()
            );
        }

        doors
    }

    // The regions flanking `connector`, reread from the grid instead of
    // trusting the recorded sides. Returns nothing while a flank is
    // still rock, the record is unusable then.
    fn flanking_regions(grid: &Grid, connector: &Connector) -> Option<(Region, Region)> {
        let ahead = connector.pos + connector.sides[0].direction.delta();
        let behind = connector.pos + connector.sides[1].direction.delta();

        if grid.at(ahead) != Material::Carved || grid.at(behind) != Material::Carved {
            return None;
        }

        Some((grid.region_at(ahead), grid.region_at(behind)))
    }
}
