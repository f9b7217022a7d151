//! Rules module for Conway's Game of Life simulation
//!
//! This module contains the neighbour count on the torus and the generation step,
//! plus the preset patterns used to seed a grid.
//!
//! Game of Life standard rules (B3/S23):
//! 1. Any live cell with fewer than two live neighbors dies (underpopulation)
//! 2. Any live cell with two or three live neighbors lives (survival)
//! 3. Any live cell with more than three live neighbors dies (overpopulation)
//! 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)

pub mod patterns;

use crate::grid::Grid;

pub use patterns::Pattern;

/// Number of live neighbors a dead cell needs to become alive
pub const BIRTH_COUNT: u8 = 3;
/// Minimum neighbors for a live cell to survive
pub const SURVIVAL_MIN: u8 = 2;
/// Maximum neighbors for a live cell to survive
pub const SURVIVAL_MAX: u8 = 3;

/// The B3/S23 transition for a single cell.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        (SURVIVAL_MIN..=SURVIVAL_MAX).contains(&neighbors)
    } else {
        neighbors == BIRTH_COUNT
    }
}

/// Given a grid position, count the number of live neighbors using wrapping boundaries
///
/// # Panics
///
/// Panics if `(x, y)` lies outside the grid.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (width, height) = grid.dimensions();
    assert!(
        x < width && y < height,
        "cell ({x}, {y}) is outside the {width}x{height} grid"
    );
    let cells = grid.cells();
    let mut count = 0;

    for dy in 0..3 {
        for dx in 0..3 {
            // Skip the cell itself
            if dx == 1 && dy == 1 {
                continue;
            }

            // Adding width/height before subtracting keeps the sum unsigned
            let nx = (x + width + dx - 1) % width;
            let ny = (y + height + dy - 1) % height;

            if cells[grid.index_unchecked(nx, ny)] {
                count += 1;
            }
        }
    }

    count
}

/// Apply Game of Life rules to `input` for one generation, writing into `output`.
///
/// # Panics
///
/// Panics if the two grids differ in size.
pub fn step_into(input: &Grid, output: &mut Grid) {
    assert_eq!(
        input.dimensions(),
        output.dimensions(),
        "step buffers must have the same dimensions"
    );
    let (width, height) = input.dimensions();

    for y in 0..height {
        for x in 0..width {
            let idx = input.index_unchecked(x, y);
            let neighbors = count_live_neighbors(input, x, y);
            output.cells_mut()[idx] = next_state(input.cells()[idx], neighbors);
        }
    }
}

/// Compute the next generation. The input grid is never modified.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    step_into(grid, &mut next);
    next
}
