//! Generation-step behaviour on literal fixtures.

use life_toy::{count_live_neighbors, step, Grid, Pattern};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn grid(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
    Grid::with_live_cells(width, height, live).unwrap()
}

fn sorted_live(grid: &Grid) -> Vec<(usize, usize)> {
    let mut live: Vec<_> = grid.live_cells().collect();
    live.sort();
    live
}

#[test]
fn block_is_a_still_life() {
    let block = grid(5, 5, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
    let next = step(&block);
    assert_eq!(next, block);
    assert_eq!(step(&next), block);
}

#[test]
fn blinker_oscillates_with_period_two() {
    // Horizontal line through the middle of a 5x5 torus
    let horizontal = grid(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let vertical = step(&horizontal);
    assert_eq!(sorted_live(&vertical), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(step(&vertical), horizontal);
}

#[test]
fn vertical_blinker_end_to_end() {
    let mut g = Grid::new(5, 5).unwrap();
    for (x, y) in [(1, 1), (1, 2), (1, 3)] {
        g.toggle(x, y).unwrap();
    }
    let next = step(&g);
    assert_eq!(sorted_live(&next), vec![(0, 2), (1, 2), (2, 2)]);
    assert_eq!(next.live_count(), 3);
}

#[test]
fn dead_cell_is_born_with_exactly_three_neighbors() {
    let three = grid(6, 6, &[(1, 1), (2, 1), (3, 1)]);
    assert_eq!(count_live_neighbors(&three, 2, 2), 3);
    assert!(step(&three).is_alive(2, 2));

    let two = grid(6, 6, &[(1, 1), (3, 1)]);
    assert_eq!(count_live_neighbors(&two, 2, 2), 2);
    assert!(!step(&two).is_alive(2, 2));

    let four = grid(6, 6, &[(1, 1), (2, 1), (3, 1), (1, 3)]);
    assert_eq!(count_live_neighbors(&four, 2, 2), 4);
    assert!(!step(&four).is_alive(2, 2));
}

#[test]
fn live_cell_survives_only_with_two_or_three_neighbors() {
    let neighbors = [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3)];
    for n in 0..=neighbors.len() {
        let mut live = vec![(2, 2)];
        live.extend_from_slice(&neighbors[..n]);
        let g = grid(7, 7, &live);
        assert_eq!(count_live_neighbors(&g, 2, 2) as usize, n);
        assert_eq!(
            step(&g).is_alive(2, 2),
            n == 2 || n == 3,
            "live cell with {n} neighbors"
        );
    }
}

#[test]
fn neighbors_of_origin_wrap_to_far_edges() {
    let (w, h) = (7, 5);
    let far = [(w - 1, h - 1), (w - 1, 0), (0, h - 1), (1, h - 1), (w - 1, 1)];
    for &cell in &far {
        let g = grid(w, h, &[cell]);
        assert_eq!(count_live_neighbors(&g, 0, 0), 1, "{cell:?} should neighbour (0, 0)");
    }
    let g = grid(w, h, &far);
    assert_eq!(count_live_neighbors(&g, 0, 0), 5);
}

#[test]
fn blinker_across_the_seam_still_oscillates() {
    // Horizontal line split over the left/right edge
    let g = grid(6, 6, &[(5, 3), (0, 3), (1, 3)]);
    let next = step(&g);
    assert_eq!(sorted_live(&next), vec![(0, 2), (0, 3), (0, 4)]);
    assert_eq!(step(&next), g);
}

#[test]
fn glider_travels_around_the_torus() {
    let mut g = Grid::new(8, 8).unwrap();
    g.place(Pattern::Glider, 0, 0).unwrap();
    let start = g.clone();

    // Four generations move a glider one cell down and right
    let mut moved = g;
    for _ in 0..4 {
        moved = step(&moved);
    }
    let mut expected = Grid::new(8, 8).unwrap();
    expected.place(Pattern::Glider, 1, 1).unwrap();
    assert_eq!(moved, expected);

    // After 4 * 8 generations it is back where it started
    for _ in 0..28 {
        moved = step(&moved);
    }
    assert_eq!(moved, start);
}

#[test]
fn step_is_deterministic() {
    let mut g = Grid::new(32, 24).unwrap();
    g.randomize(&mut StdRng::seed_from_u64(2024), 0.35).unwrap();
    assert_eq!(step(&g), step(&g));
}

#[test]
fn randomize_reproducible_under_fixed_seed() {
    let mut a = Grid::new(20, 20).unwrap();
    let mut b = Grid::new(20, 20).unwrap();
    a.randomize(&mut StdRng::seed_from_u64(5), 0.3).unwrap();
    b.randomize(&mut StdRng::seed_from_u64(5), 0.3).unwrap();
    assert_eq!(a, b);

    let mut c = Grid::new(20, 20).unwrap();
    c.randomize(&mut StdRng::seed_from_u64(6), 0.3).unwrap();
    assert_ne!(a, c);
}
