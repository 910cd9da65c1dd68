use std::collections::HashSet;

use battleship_mc::strategy::random::random_volley;
use battleship_mc::{
    create_board, run_random, run_smart, Board, CellState, Orientation, Placement, ShotOutcome,
    SmartGame, GRID, GRID_CELLS, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn random_never_fires_twice(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = create_board(&mut rng).unwrap();
        let fired = random_volley(&board, &mut rng).unwrap();
        let unique: HashSet<_> = fired.iter().copied().collect();
        prop_assert_eq!(unique.len(), fired.len());
    }

    #[test]
    fn shot_counts_stay_in_bounds(seed in any::<u64>()) {
        let random = run_random(&mut SmallRng::seed_from_u64(seed)).unwrap() as usize;
        let smart = run_smart(&mut SmallRng::seed_from_u64(seed)).unwrap() as usize;
        for shots in [random, smart] {
            prop_assert!((TOTAL_SHIP_CELLS..=GRID_CELLS).contains(&shots), "shots = {}", shots);
        }
    }

    #[test]
    fn sunk_ships_are_fenced_in_before_hunting(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = create_board(&mut rng).unwrap();
        let mut game = SmartGame::new(&board);
        while let Some(shot) = game.fire_next(&mut rng).unwrap() {
            let ShotOutcome::Sunk(length) = shot.outcome else {
                continue;
            };
            prop_assert_eq!(game.pending_targets().count(), 0);
            let knowledge = game.knowledge();
            let sunk = knowledge.hits() & board.cells_of_length(length);
            for (row, col) in sunk.iter_set_bits() {
                for r in row.saturating_sub(1)..=(row + 1).min(GRID - 1) {
                    for c in col.saturating_sub(1)..=(col + 1).min(GRID - 1) {
                        let state = knowledge.state((r, c));
                        prop_assert_ne!(state, CellState::Unknown, "({}, {}) next to sunk ship", r, c);
                        if !board.is_occupied((r, c)) {
                            prop_assert_eq!(state, CellState::Miss);
                        }
                    }
                }
            }
        }
        prop_assert_eq!(game.hits(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn smart_never_fires_twice(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = create_board(&mut rng).unwrap();
        let mut game = SmartGame::new(&board);
        let mut fired = HashSet::new();
        while let Some(shot) = game.fire_next(&mut rng).unwrap() {
            prop_assert!(fired.insert(shot.coord), "{:?} fired twice", shot.coord);
        }
        prop_assert_eq!(fired.len() as u32, game.shots());
    }
}

/// Every placement of a lone five-cell hull, played out in full.
fn single_carrier_games() -> Vec<(Placement, u32, u32)> {
    let mut games = Vec::new();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for row in 0..GRID {
            for col in 0..GRID {
                let placement = Placement::new(5, orientation, row, col);
                let Ok(board) = Board::from_placements(&[placement]) else {
                    continue;
                };
                let mut rng = SmallRng::seed_from_u64(0);
                let mut game = SmartGame::new(&board);
                let mut first_hit = None;
                while let Some(shot) = game.fire_next(&mut rng).unwrap() {
                    if shot.outcome != ShotOutcome::Miss && first_hit.is_none() {
                        first_hit = Some(game.shots());
                    }
                }
                let first_hit = first_hit.unwrap();
                games.push((placement, game.shots(), game.shots() - first_hit + 1));
            }
        }
    }
    games
}

#[test]
fn single_carrier_is_finished_quickly_once_found() {
    let games = single_carrier_games();
    assert_eq!(games.len(), 120);
    for (placement, total, targeting) in games {
        assert!(targeting <= 14, "{:?}: {} shots after first hit", placement, targeting);
        assert!(total <= 60, "{:?}: {} shots", placement, total);
    }
}

#[test]
fn smart_beats_random_on_the_same_boards() {
    let games = 400u64;
    let mut random = 0u64;
    let mut smart = 0u64;
    for seed in 0..games {
        random += run_random(&mut SmallRng::seed_from_u64(seed)).unwrap() as u64;
        smart += run_smart(&mut SmallRng::seed_from_u64(seed)).unwrap() as u64;
    }
    let (random, smart) = (random as f64 / games as f64, smart as f64 / games as f64);
    assert!(random > 85.0, "random avg {}", random);
    assert!(smart + 20.0 < random, "smart avg {} vs random {}", smart, random);
}
