use bricks::{
    GeneratorConfig, GreedyLayout, LayoutGenerator, PuzzleEngine, PuzzleError,
    assemble::assemble,
    connectivity::{is_connected, is_connected_cells},
};
use std::collections::HashSet;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn crossing_names_become_bricks() {
    let list = words(&["matej", "anet"]);
    let cells = assemble(&GreedyLayout.generate(&list));
    assert!(is_connected(&cells));
    assert_eq!(cells.len(), 8);

    for seed in 0..100 {
        let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), GreedyLayout, seed);
        let state = engine.generate(&list, "").unwrap();

        assert_eq!(state.cell_count(), cells.len());
        assert!(state.bricks.len() > 1);
        for brick in &state.bricks {
            assert!(brick.len() > 1, "seed {seed}: single-cell brick");
            assert!(is_connected_cells(&brick.cells), "seed {seed}: {brick}");
        }

        let mut letters: Vec<char> = state
            .bricks
            .iter()
            .flat_map(|b| b.cells.iter().map(|c| c.letter))
            .collect();
        let mut expected: Vec<char> = cells.iter().map(|c| c.letter).collect();
        letters.sort_unstable();
        expected.sort_unstable();
        assert_eq!(letters, expected);

        let coords: HashSet<_> = state
            .bricks
            .iter()
            .flat_map(|b| b.cells.iter().map(|c| c.coord()))
            .collect();
        assert_eq!(coords.len(), cells.len(), "seed {seed}: overlapping bricks");
    }
}

#[test]
fn reordering_fixes_greedy_dead_end() {
    // "xyz" shares nothing with "abc" but crosses "zebra", so only orders
    // with "zebra" before "xyz" connect.
    let list = words(&["abc", "xyz", "zebra"]);
    let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), GreedyLayout, 21);
    let cells = engine.build_cells(&list).unwrap();
    assert!(is_connected(&cells));
}

#[test]
fn unrelated_words_are_reported() {
    let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), GreedyLayout, 0);
    let err = engine.generate(&words(&["abc", "xyz"]), "").unwrap_err();
    assert_eq!(err, PuzzleError::LayoutDisconnected { attempts: 10 });
}

#[test]
fn output_serializes_for_the_game() {
    let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), GreedyLayout, 3);
    let state = engine.generate(&words(&["matej", "anet"]), "who?").unwrap();
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["hint"], "who?");
    assert_eq!(json["bricks"].as_array().map(Vec::len), Some(state.bricks.len()));
}
