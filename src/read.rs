use crate::{error::Error, world::World};
use ca_formats::{rle::Rle, Input};
use rand::Rng;

impl World {
    /// Reseeds every cell of the world at random.
    ///
    /// Each cell draws a uniform integer in `[0, sparseness]` and lives iff
    /// the draw is 0, for a live probability of `1 / (sparseness + 1)`. A
    /// sparseness of 0 therefore fills the whole grid. The drawn value goes
    /// into both buffers, so no stale generation survives; this is also the
    /// reset operation, callable at any time.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, sparseness: u32) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let alive = rng.gen_range(0..=sparseness) == 0;
                self.grids[0][(x, y)] = alive;
                self.grids[1][(x, y)] = alive;
            }
        }
        self.generation = 0;
    }

    /// Builds a world the size of the pattern's bounding box, with the
    /// pattern translated so its top-left corner sits at the origin.
    ///
    /// An empty pattern has no size and fails with
    /// [`Error::NonPositiveSize`].
    pub fn from_rle<I: Input>(rle: Rle<I>) -> Result<Self, Error> {
        let mut cells = Vec::new();
        for cell in rle {
            cells.push(cell?.position);
        }
        let left = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let top = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let width = cells.iter().map(|&(x, _)| x - left + 1).max().unwrap_or(0);
        let height = cells.iter().map(|&(_, y)| y - top + 1).max().unwrap_or(0);
        let mut world = Self::new(width as usize, height as usize)?;
        for (x, y) in cells {
            world.set_cell((x - left) as usize, (y - top) as usize, true);
        }
        Ok(world)
    }
}
