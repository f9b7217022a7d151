//! Grid module for the Game of Life simulation
//!
//! A `Grid` is a fixed-size, row-major array of boolean cells whose edges wrap
//! around (a torus). Coordinates passed in from callers are checked, never clamped.

use rand::Rng;

use crate::error::GridError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| GridError::TooLarge { width, height })?;
        cells.resize(size, false);
        Ok(Self { width, height, cells })
    }

    /// Build a grid with the given cells alive.
    pub fn with_live_cells(
        width: usize,
        height: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for &(x, y) in live {
            grid.set(x, y, true)?;
        }
        Ok(grid)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.index_unchecked(x, y)]
    }

    /// Flip the cell at `(x, y)` and return its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Set every cell alive with probability `density`, independently, in row-major order.
    ///
    /// The grid is left untouched when `density` is not a probability.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(density);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = false);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Map any signed coordinate onto the torus.
    pub fn wrap(&self, x: isize, y: isize) -> (usize, usize) {
        (
            x.rem_euclid(self.width as isize) as usize,
            y.rem_euclid(self.height as isize) as usize,
        )
    }

    pub(crate) fn index_unchecked(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(self.index_unchecked(x, y))
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.live_count(), 0);
        assert!(grid.cells().iter().all(|&c| !c));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::ZeroDimension { width: 0, height: 5 })
        );
        assert!(matches!(Grid::new(5, 0), Err(GridError::ZeroDimension { .. })));
    }

    #[test]
    fn overflowing_area_is_rejected() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unallocatable_area_is_rejected() {
        // 2^62 cells fit in usize but not in any address space
        let side = 1usize << 31;
        assert_eq!(
            Grid::new(side, side),
            Err(GridError::TooLarge { width: side, height: side })
        );
    }

    #[test]
    fn toggle_twice_restores_cell() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.toggle(2, 1), Ok(true));
        assert!(grid.is_alive(2, 1));
        assert_eq!(grid.toggle(2, 1), Ok(false));
        assert!(!grid.is_alive(2, 1));
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let mut grid = Grid::new(3, 2).unwrap();
        assert_eq!(
            grid.toggle(3, 0),
            Err(GridError::OutOfBounds { x: 3, y: 0, width: 3, height: 2 })
        );
        assert!(grid.toggle(0, 2).is_err());
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn is_alive_out_of_range_panics() {
        let grid = Grid::new(2, 2).unwrap();
        grid.is_alive(2, 0);
    }

    #[test]
    fn randomize_is_reproducible_with_same_seed() {
        let mut a = Grid::new(16, 9).unwrap();
        let mut b = Grid::new(16, 9).unwrap();
        a.randomize(&mut StdRng::seed_from_u64(42), 0.3).unwrap();
        b.randomize(&mut StdRng::seed_from_u64(42), 0.3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn randomize_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(8, 8).unwrap();
        grid.randomize(&mut rng, 1.0).unwrap();
        assert_eq!(grid.live_count(), 64);
        grid.randomize(&mut rng, 0.0).unwrap();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn randomize_rejects_bad_density() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::with_live_cells(3, 3, &[(1, 1)]).unwrap();
        assert!(matches!(
            grid.randomize(&mut rng, 1.5),
            Err(GridError::InvalidDensity(_))
        ));
        assert!(grid.randomize(&mut rng, f64::NAN).is_err());
        assert!(grid.randomize(&mut rng, -0.1).is_err());
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn wrap_handles_negative_and_overflowing_coordinates() {
        let grid = Grid::new(5, 4).unwrap();
        assert_eq!(grid.wrap(-1, -1), (4, 3));
        assert_eq!(grid.wrap(5, 4), (0, 0));
        assert_eq!(grid.wrap(12, -9), (2, 3));
    }

    #[test]
    fn live_cells_are_row_major() {
        let grid = Grid::with_live_cells(4, 4, &[(3, 0), (0, 2), (1, 0)]).unwrap();
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(1, 0), (3, 0), (0, 2)]
        );
    }
}
