use crate::{rule::transition, world::World};

impl World {
    /// Advances the world by exactly one generation.
    ///
    /// The buffer roles are exchanged first: the grid that held the current
    /// generation becomes the read source for every neighbor lookup, and the
    /// other grid becomes the write target. Reads never touch the write
    /// target, so a cell written earlier in the same step can never leak into
    /// a neighbor count. When the sweep finishes the write target holds the
    /// new generation in full and is promoted to current.
    pub fn step(&mut self) {
        let (head, tail) = self.grids.split_at_mut(1);
        let (source, target) = if self.active == 0 {
            (&head[0], &mut tail[0])
        } else {
            (&tail[0], &mut head[0])
        };
        for y in 0..source.height() {
            for x in 0..source.width() {
                target[(x, y)] = transition(source[(x, y)], source.live_neighbors(x, y));
            }
        }
        self.active ^= 1;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_cells(width: usize, height: usize, cells: &[(usize, usize)]) -> World {
        let mut world = World::new(width, height).unwrap();
        for &(x, y) in cells {
            world.set_cell(x, y, true);
        }
        world
    }

    fn living_cells(world: &World) -> Vec<(usize, usize)> {
        world.live_cells().collect()
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut world = world_with_cells(5, 5, &block);
        for _ in 0..10 {
            world.step();
            assert_eq!(living_cells(&world), block);
        }
        assert_eq!(world.get_generation(), 10);
    }

    #[test]
    fn blinker_oscillates_with_period_2() {
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let vertical = [(2, 1), (2, 2), (2, 3)];
        let mut world = world_with_cells(5, 5, &horizontal);
        world.step();
        assert_eq!(living_cells(&world), vertical);
        world.step();
        assert_eq!(living_cells(&world), horizontal);
    }

    #[test]
    fn tromino_closes_into_a_block() {
        let mut world = world_with_cells(5, 5, &[(1, 1), (2, 1), (1, 2)]);
        world.step();
        assert_eq!(living_cells(&world), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn blinker_straddling_the_seam() {
        // A horizontal blinker whose middle cell sits on the left edge.
        let mut world = world_with_cells(5, 5, &[(4, 0), (0, 0), (1, 0)]);
        world.step();
        assert_eq!(living_cells(&world), vec![(0, 0), (0, 1), (0, 4)]);
        world.step();
        assert_eq!(living_cells(&world), vec![(0, 0), (1, 0), (4, 0)]);
    }

    #[test]
    fn lone_cell_dies() {
        let mut world = world_with_cells(4, 4, &[(2, 2)]);
        world.step();
        assert_eq!(world.population(), 0);
    }

    #[test]
    fn single_cell_world() {
        // On a 1x1 torus a live cell is its own 8 neighbors and dies of
        // overcrowding; a dead cell sees no live neighbors and stays dead.
        let mut world = world_with_cells(1, 1, &[(0, 0)]);
        world.step();
        assert_eq!(world.get_cell(0, 0), false);
        world.step();
        assert_eq!(world.get_cell(0, 0), false);
    }
}
