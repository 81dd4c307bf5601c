use crate::world::World;

impl World {
    /// Iterates over the coordinates of the live cells of the current
    /// generation, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let grid = self.current();
        (0..grid.height())
            .flat_map(move |y| (0..grid.width()).map(move |x| (x, y)))
            .filter(move |&cell| grid[cell])
    }

    /// Calls `f` with the coordinates of every live cell of the current
    /// generation, in row-major order.
    pub fn for_living_cells<F>(&self, f: F)
    where
        F: FnMut(usize, usize),
    {
        let mut f = f;
        for (x, y) in self.live_cells() {
            f(x, y);
        }
    }
}
