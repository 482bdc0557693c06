use reef_core::RngHandle;
use reef_grid::{
    export_health_map, export_priority_csv, generate_grid, health_map_text, priority_csv,
    rank_sectors, Grid, GridSize, Sector, TraceCaps, HEALTH_MAP_FILE, PRIORITY_CSV_FILE,
};

#[test]
fn health_map_layout_is_fixed_width() {
    let grid = Grid::from_rows(vec![vec![10, 50], vec![100, 3]]).unwrap();
    let text = health_map_text(&grid).unwrap();
    let expected = format!("Reef Health Map\n{}\n\n  10  50\n 100   3\n", "=".repeat(40));
    assert_eq!(text, expected);
}

#[test]
fn health_map_has_one_line_per_row() {
    let mut rng = RngHandle::from_seed(13);
    for size in GridSize::ALL {
        let grid = generate_grid(size, &mut rng);
        let text = health_map_text(&grid).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 + size.dimension());
        assert_eq!(lines[1].len(), 40);
        assert!(lines[2].is_empty());
        for line in &lines[3..] {
            assert_eq!(line.len(), 4 * size.dimension());
        }
    }
}

#[test]
fn priority_csv_lists_ranked_sectors() {
    let grid = Grid::from_rows(vec![vec![10, 50], vec![90, 30]]).unwrap();
    let outcome = rank_sectors(&grid, &TraceCaps::default());
    let csv = priority_csv(&outcome.sectors).unwrap().unwrap();
    assert_eq!(
        csv,
        "Rank,Row,Col,Health Score\n1,0,0,10\n2,1,1,30\n3,0,1,50\n4,1,0,90\n"
    );
}

#[test]
fn priority_csv_ranks_increase_from_one() {
    let mut rng = RngHandle::from_seed(17);
    let grid = generate_grid(GridSize::Twenty, &mut rng);
    let outcome = rank_sectors(&grid, &TraceCaps::default());
    let csv = priority_csv(&outcome.sectors).unwrap().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 401);
    for (idx, line) in lines.iter().skip(1).enumerate() {
        let rank: usize = line.split(',').next().unwrap().parse().unwrap();
        assert_eq!(rank, idx + 1);
    }
}

#[test]
fn empty_sources_produce_nothing() {
    assert!(health_map_text(&Grid::empty()).is_none());
    assert!(export_health_map(&Grid::empty()).is_none());
    let no_sectors: Vec<Sector> = Vec::new();
    assert!(priority_csv(&no_sectors).unwrap().is_none());
    assert!(export_priority_csv(&no_sectors).unwrap().is_none());
}

#[test]
fn artifacts_carry_conventional_names() {
    let grid = Grid::filled(10, 55);
    assert_eq!(export_health_map(&grid).unwrap().file_name, HEALTH_MAP_FILE);
    let sectors = rank_sectors(&grid, &TraceCaps::default()).sectors;
    let artifact = export_priority_csv(&sectors).unwrap().unwrap();
    assert_eq!(artifact.file_name, PRIORITY_CSV_FILE);
    assert_eq!(artifact.contents.lines().count(), 101);
}
