use life_engine::cell::Cell;
use life_engine::grid::Grid;
use life_engine::simulation::{live_neighbors, next_generation, LifeCore};

fn grid(text: &str) -> Grid {
    Grid::from_ascii(text).expect("test board should parse")
}

#[test]
fn all_dead_stays_dead() {
    for size in [1, 3, 10, 40] {
        let empty = Grid::new(size);
        assert_eq!(next_generation(&empty), empty);
    }
}

#[test]
fn block_is_a_still_life() {
    let block = grid(
        "
        ......
        ......
        ..##..
        ..##..
        ......
        ......
        ",
    );
    assert_eq!(next_generation(&block), block);
    assert_eq!(next_generation(&next_generation(&block)), block);
}

#[test]
fn block_in_corner_is_still_stable() {
    let block = grid(
        "
        ##..
        ##..
        ....
        ....
        ",
    );
    assert_eq!(next_generation(&block), block);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = grid(
        "
        .....
        .....
        .###.
        .....
        .....
        ",
    );
    let vertical = grid(
        "
        .....
        ..#..
        ..#..
        ..#..
        .....
        ",
    );

    let once = next_generation(&horizontal);
    assert_eq!(once, vertical);
    assert_ne!(once, horizontal);
    assert_eq!(next_generation(&once), horizontal);
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    let start = grid(
        "
        .#......
        ..#.....
        ###.....
        ........
        ........
        ........
        ........
        ........
        ",
    );
    let shifted = grid(
        "
        ........
        ..#.....
        ...#....
        .###....
        ........
        ........
        ........
        ........
        ",
    );

    let mut g = start;
    for _ in 0..4 {
        g = next_generation(&g);
    }
    assert_eq!(g, shifted);
}

#[test]
fn corner_neighbors_ignore_positions_off_the_board() {
    let board = grid(
        "
        .#.
        .#.
        ...
        ",
    );
    assert_eq!(live_neighbors(&board, 0, 0), 2);
    // The opposite corner would see (0,0) if the board wrapped
    assert_eq!(live_neighbors(&board, 2, 2), 1);
}

#[test]
fn no_wraparound_at_edges() {
    // Three live cells along the left edge: on a torus the right edge
    // cells would be born, here they must stay dead
    let edge = grid(
        "
        .....
        #....
        #....
        #....
        .....
        ",
    );
    let next = next_generation(&edge);
    for row in 0..5 {
        assert_eq!(next.get(row, 4), Cell::Dead, "row {row}");
    }
    assert_eq!(next.get(2, 0), Cell::Live);
    assert_eq!(next.get(2, 1), Cell::Live);
    assert_eq!(next.live_count(), 2);
}

#[test]
fn neighbor_counts_use_the_pre_step_snapshot() {
    // If births were visible mid-pass, the L-tromino would not settle into a block
    let tromino = grid(
        "
        ....
        .##.
        .#..
        ....
        ",
    );
    let block = grid(
        "
        ....
        .##.
        .##.
        ....
        ",
    );
    assert_eq!(next_generation(&tromino), block);
}

#[test]
fn core_step_matches_pure_step() {
    let seed = grid(
        "
        ..........
        ...##.....
        ..##......
        ...#......
        ..........
        ..........
        ......#...
        .......#..
        .....###..
        ..........
        ",
    );

    let mut core = LifeCore::new(seed.size());
    core.replace(seed.clone()).unwrap();

    let mut expected = seed;
    for _ in 0..12 {
        core.step();
        expected = next_generation(&expected);
        assert_eq!(core.grid(), &expected);
        assert_eq!(core.population(), expected.live_count());
    }
    assert_eq!(core.generation(), 12);
}
