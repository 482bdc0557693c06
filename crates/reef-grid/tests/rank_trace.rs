use std::collections::BTreeMap;

use proptest::prelude::*;
use reef_core::RngHandle;
use reef_grid::{
    flatten_sectors, generate_grid, is_ranked, rank_sectors, Grid, GridSize, Sector, TraceCaps,
};

fn sector(row: usize, col: usize, health: u8) -> Sector {
    Sector { row, col, health }
}

fn multiset(sectors: &[Sector]) -> BTreeMap<(usize, usize, u8), usize> {
    let mut counts = BTreeMap::new();
    for s in sectors {
        *counts.entry((s.row, s.col, s.health)).or_insert(0) += 1;
    }
    counts
}

#[test]
fn small_grid_trace_matches_bubble_sort() {
    let grid = Grid::from_rows(vec![vec![10, 50], vec![90, 30]]).unwrap();
    let outcome = rank_sectors(&grid, &TraceCaps::default());

    assert_eq!(
        outcome.sectors,
        vec![sector(0, 0, 10), sector(1, 1, 30), sector(0, 1, 50), sector(1, 0, 90)]
    );
    assert_eq!(outcome.passes, 3);
    assert!(outcome.converged);

    let compared: Vec<_> = outcome
        .trace
        .iter()
        .map(|step| (step.comparing, step.swapped))
        .collect();
    assert_eq!(
        compared,
        vec![
            ((0, 1), false),
            ((1, 2), false),
            ((2, 3), true),
            ((0, 1), false),
            ((1, 2), true),
            ((0, 1), false),
        ]
    );
    // Snapshots are taken after the comparison.
    assert_eq!(outcome.trace[2].array[3], sector(1, 0, 90));
}

#[test]
fn equal_healths_keep_row_major_order() {
    let grid = Grid::from_rows(vec![vec![40, 20], vec![40, 20]]).unwrap();
    let outcome = rank_sectors(&grid, &TraceCaps::default());
    assert_eq!(
        outcome.sectors,
        vec![sector(0, 1, 20), sector(1, 1, 20), sector(0, 0, 40), sector(1, 0, 40)]
    );
}

#[test]
fn sorted_input_exits_after_one_pass() {
    let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
    let outcome = rank_sectors(&grid, &TraceCaps::default());
    assert_eq!(outcome.passes, 1);
    assert_eq!(outcome.trace.len(), 8);
    assert!(outcome.trace.iter().all(|step| !step.swapped));
    assert_eq!(outcome.sectors, flatten_sectors(&grid));
}

#[test]
fn empty_and_single_cell_grids() {
    let outcome = rank_sectors(&Grid::empty(), &TraceCaps::default());
    assert!(outcome.sectors.is_empty());
    assert!(outcome.trace.is_empty());
    assert_eq!(outcome.passes, 0);

    let single = Grid::from_rows(vec![vec![42]]).unwrap();
    let outcome = rank_sectors(&single, &TraceCaps::default());
    assert_eq!(outcome.sectors, vec![sector(0, 0, 42)]);
    assert_eq!(outcome.passes, 0);
    assert!(outcome.converged);
}

#[test]
fn custom_caps_bound_the_trace() {
    let mut rng = RngHandle::from_seed(21);
    let grid = generate_grid(GridSize::Ten, &mut rng);
    let caps = TraceCaps {
        max_steps: 5,
        snapshot_len: 3,
        max_passes: 200,
    };
    let outcome = rank_sectors(&grid, &caps);
    assert_eq!(outcome.trace.len(), 5);
    assert!(outcome.trace.iter().all(|step| step.array.len() == 3));
    assert!(outcome.converged);
}

#[test]
fn raised_pass_cap_fully_orders_large_grids() {
    let mut rng = RngHandle::from_seed(4);
    let grid = generate_grid(GridSize::Twenty, &mut rng);
    let caps = TraceCaps {
        max_passes: 399,
        ..TraceCaps::default()
    };
    let outcome = rank_sectors(&grid, &caps);
    assert!(outcome.converged);
    assert!(is_ranked(&outcome.sectors));
}

proptest! {
    #[test]
    fn ten_by_ten_rankings_are_fully_sorted(seed in any::<u64>()) {
        let mut rng = RngHandle::from_seed(seed);
        let grid = generate_grid(GridSize::Ten, &mut rng);
        let outcome = rank_sectors(&grid, &TraceCaps::default());
        prop_assert!(outcome.converged);
        prop_assert!(is_ranked(&outcome.sectors));
        prop_assert!(outcome.passes <= 99);
        prop_assert_eq!(multiset(&outcome.sectors), multiset(&flatten_sectors(&grid)));
    }

    #[test]
    fn capped_rankings_settle_their_tail(seed in any::<u64>()) {
        let mut rng = RngHandle::from_seed(seed);
        let grid = generate_grid(GridSize::Twenty, &mut rng);
        let outcome = rank_sectors(&grid, &TraceCaps::default());
        prop_assert!(outcome.passes <= 200);
        prop_assert!(outcome.trace.len() <= 50);
        prop_assert!(outcome.trace.iter().all(|step| step.array.len() <= 20));
        prop_assert_eq!(outcome.sectors.len(), 400);
        prop_assert_eq!(multiset(&outcome.sectors), multiset(&flatten_sectors(&grid)));

        // Each completed pass settles one more maximum at the end.
        let split = outcome.sectors.len() - outcome.passes;
        let (head, tail) = outcome.sectors.split_at(split);
        prop_assert!(is_ranked(tail));
        if let (Some(head_max), Some(tail_min)) =
            (head.iter().map(|s| s.health).max(), tail.first().map(|s| s.health))
        {
            prop_assert!(head_max <= tail_min);
        }
        prop_assert_eq!(outcome.converged, is_ranked(&outcome.sectors));
    }
}
