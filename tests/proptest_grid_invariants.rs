//! Property-based invariant tests for the toroidal grid.
//!
//! 1. Neighbour counts stay within [0, 8] everywhere, corners included.
//! 2. Neighbour counts agree with a direct count over wrapped offsets.
//! 3. `step` never modifies its input and is deterministic.
//! 4. `toggle` is self-inverse.
//! 5. Out-of-range toggles are rejected without touching the grid.
//! 6. Translating a pattern on the torus commutes with `step`.

use life_toy::{count_live_neighbors, step, Grid, GridError};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..=12, 1usize..=12).prop_flat_map(|(w, h)| {
        proptest::collection::vec(any::<bool>(), w * h).prop_map(move |cells| {
            let live: Vec<_> = cells
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(|(i, _)| (i % w, i / w))
                .collect();
            Grid::with_live_cells(w, h, &live).unwrap()
        })
    })
}

fn shifted(grid: &Grid, dx: isize, dy: isize) -> Grid {
    let (w, h) = grid.dimensions();
    let live: Vec<_> = grid
        .live_cells()
        .map(|(x, y)| grid.wrap(x as isize + dx, y as isize + dy))
        .collect();
    Grid::with_live_cells(w, h, &live).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Neighbour counts
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn neighbor_count_in_range(grid in grid_strategy()) {
        let (w, h) = grid.dimensions();
        for y in 0..h {
            for x in 0..w {
                let n = count_live_neighbors(&grid, x, y);
                prop_assert!(n <= 8, "count {} at ({}, {})", n, x, y);
            }
        }
    }

    #[test]
    fn neighbor_count_matches_wrapped_offsets(grid in grid_strategy()) {
        let (w, h) = grid.dimensions();
        for y in 0..h {
            for x in 0..w {
                let mut expected = 0u8;
                for dy in -1isize..=1 {
                    for dx in -1isize..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let (nx, ny) = grid.wrap(x as isize + dx, y as isize + dy);
                        if grid.is_alive(nx, ny) {
                            expected += 1;
                        }
                    }
                }
                prop_assert_eq!(count_live_neighbors(&grid, x, y), expected);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Step purity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn step_is_pure(grid in grid_strategy()) {
        let before = grid.clone();
        let a = step(&grid);
        let b = step(&grid);
        prop_assert_eq!(&grid, &before);
        prop_assert_eq!(a.dimensions(), grid.dimensions());
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Toggle
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn toggle_is_self_inverse(grid in grid_strategy(), px in any::<usize>(), py in any::<usize>()) {
        let (w, h) = grid.dimensions();
        let (x, y) = (px % w, py % h);
        let mut toggled = grid.clone();
        let first = toggled.toggle(x, y).unwrap();
        prop_assert_eq!(first, !grid.is_alive(x, y));
        toggled.toggle(x, y).unwrap();
        prop_assert_eq!(toggled, grid);
    }

    #[test]
    fn toggle_out_of_range_rejected(grid in grid_strategy(), extra in 0usize..100) {
        let (w, h) = grid.dimensions();
        let mut target = grid.clone();
        let err = target.toggle(w + extra, 0).unwrap_err();
        prop_assert_eq!(err, GridError::OutOfBounds { x: w + extra, y: 0, width: w, height: h });
        prop_assert!(target.toggle(0, h + extra).is_err());
        prop_assert_eq!(target, grid);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Translation symmetry of the torus
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn step_commutes_with_translation(grid in grid_strategy(), dx in -20isize..20, dy in -20isize..20) {
        prop_assert_eq!(step(&shifted(&grid, dx, dy)), shifted(&step(&grid), dx, dy));
    }
}
