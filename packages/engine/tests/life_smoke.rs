use life_engine::Life;

#[test]
fn life_smoke_toggle_and_step() {
    let life = Life::new(10).expect("10x10 board");
    assert_eq!(life.size(), 10);
    assert_eq!(life.tick_ms(), 100);

    for col in 3..6 {
        assert_eq!(life.toggle_cell(4, col), Some(1));
    }
    assert_eq!(life.population(), 3);
    assert_eq!(life.toggle_cell(10, 0), None);

    life.step();
    assert_eq!(life.generation(), 1);
    assert_eq!(life.population(), 3);
    assert_eq!(life.cell(3, 4), Some(1));
    assert_eq!(life.cell(4, 3), Some(0));
    assert_eq!(life.changed_len(), 4);

    let stats = life.get_step_stats();
    assert_eq!(stats.births(), 2);
    assert_eq!(stats.deaths(), 2);

    life.clear();
    assert_eq!(life.generation(), 0);
    assert_eq!(life.population(), 0);
    assert!(!life.running());
    assert!(life.cells().iter().all(|&c| c == 0));
}

#[test]
fn life_load_cells_replaces_board() {
    let life = Life::new(3).expect("3x3 board");
    let cells = vec![1, 1, 0, 1, 1, 0, 0, 0, 0];
    life.load_cells(cells.clone()).expect("valid cells");
    assert_eq!(life.cells(), cells);
    assert_eq!(life.population(), 4);

    // Block is a still life
    life.step();
    assert_eq!(life.cells(), cells);
}
