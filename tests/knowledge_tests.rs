//! Knowledge base integration tests.
//!
//! These drive the inference engine with counts from real boards and check
//! that every conclusion it reaches matches the board's ground truth.

use minesweeper_ai::core::{BoardConfig, Cell, GameRng};
use minesweeper_ai::games::minesweeper::Board;
use minesweeper_ai::knowledge::{KnowledgeBase, MineRule, Sentence};
use minesweeper_ai::rules::BoardOracle;

/// Reveal safe moves until none remain. Returns the number of reveals.
fn reveal_safe_moves(kb: &mut KnowledgeBase, board: &Board, rng: &mut GameRng) -> usize {
    let mut reveals = 0;
    while let Some(cell) = kb.make_safe_move(rng) {
        assert!(!board.is_mine(cell), "Safe move {} is a mine", cell);
        kb.add_knowledge(cell, board.nearby_mines(cell));
        reveals += 1;
    }
    reveals
}

fn assert_sound(kb: &KnowledgeBase, board: &Board) {
    for cell in kb.safes() {
        assert!(!board.is_mine(*cell), "{} marked safe but is a mine", cell);
    }
    for cell in kb.mines() {
        assert!(board.is_mine(*cell), "{} marked mine but is safe", cell);
    }
    for sentence in kb.knowledge() {
        assert!(sentence.count() >= 0);
        assert!(sentence.count() as usize <= sentence.len());
        for cell in sentence.cells() {
            assert!(!kb.is_known(*cell), "{} is known but still in {}", cell, sentence);
        }
    }
}

// =============================================================================
// Cascades
// =============================================================================

/// Revealing a zero region marks the whole region safe without guessing.
#[test]
fn test_zero_region_becomes_safe() {
    // Mine in the bottom-right corner; everything else is reachable from (0, 0)
    let board = Board::with_mines(5, 5, [Cell::new(4, 4)]);
    let mut kb = KnowledgeBase::new(5, 5);
    let mut rng = GameRng::new(42);

    kb.add_knowledge(Cell::new(0, 0), board.nearby_mines(Cell::new(0, 0)));
    reveal_safe_moves(&mut kb, &board, &mut rng);

    assert_eq!(kb.safes().len(), 24);
    assert_eq!(kb.moves_made().len(), 24);
    assert!(kb.mines().contains(&Cell::new(4, 4)));
    assert!(kb.knowledge().is_empty());
}

/// A zero region walled off by mines stops at the wall.
#[test]
fn test_zero_region_stops_at_numbers() {
    // . . 2 X
    // . . 3 X
    // . . 2 X
    let mines = [Cell::new(0, 3), Cell::new(1, 3), Cell::new(2, 3)];
    let board = Board::with_mines(3, 4, mines);
    let mut kb = KnowledgeBase::new(3, 4);
    let mut rng = GameRng::new(1);

    kb.add_knowledge(Cell::new(1, 0), 0);
    reveal_safe_moves(&mut kb, &board, &mut rng);

    assert_eq!(kb.moves_made().len(), 9);
    for mine in mines {
        assert!(kb.mines().contains(&mine));
    }
    assert_sound(&kb, &board);
}

// =============================================================================
// Mine deduction
// =============================================================================

/// A count equal to the number of unknown neighbors marks them all as mines.
#[test]
fn test_full_count_marks_mines() {
    let mut kb = KnowledgeBase::new(8, 8);
    kb.add_knowledge(Cell::new(0, 7), 3);

    let expected = [Cell::new(0, 6), Cell::new(1, 6), Cell::new(1, 7)];
    assert_eq!(kb.mines().len(), 3);
    for cell in expected {
        assert!(kb.mines().contains(&cell));
    }
}

/// The classic 1-2-1 pattern pins both mines and the safe middle cell.
#[test]
fn test_one_two_one_pattern() {
    // Row 0 is hidden: X . X
    // Row 1 shows:     1 2 1
    let board = Board::with_mines(2, 3, [Cell::new(0, 0), Cell::new(0, 2)]);
    let mut kb = KnowledgeBase::new(2, 3);

    for col in 0..3 {
        let cell = Cell::new(1, col);
        kb.add_knowledge(cell, board.nearby_mines(cell));
    }

    assert!(kb.mines().contains(&Cell::new(0, 0)));
    assert!(kb.mines().contains(&Cell::new(0, 2)));
    assert!(kb.safes().contains(&Cell::new(0, 1)));
    assert!(kb.knowledge().is_empty());
}

/// A neighbor already known to be a mine is subtracted from a new count.
#[test]
fn test_known_mine_reduces_count() {
    let mut kb = KnowledgeBase::new(3, 3);
    kb.add_sentence(Sentence::new([Cell::new(0, 0)], 1));
    assert!(kb.mines().contains(&Cell::new(0, 0)));

    // (1, 1) sees the known mine and nothing else
    kb.add_knowledge(Cell::new(1, 1), 1);

    assert_eq!(kb.safes().len(), 8);
    assert_eq!(kb.mines().len(), 1);
}

// =============================================================================
// Subset inference
// =============================================================================

#[test]
fn test_subset_difference_is_derived() {
    let a = Cell::new(0, 0);
    let b = Cell::new(0, 1);
    let c = Cell::new(0, 2);
    let d = Cell::new(0, 3);

    let mut kb = KnowledgeBase::new(1, 4);
    kb.add_sentence(Sentence::new([a, b, c, d], 2));
    kb.add_sentence(Sentence::new([a, b], 1));

    assert!(kb.knowledge().contains(&Sentence::new([c, d], 1)));
}

#[test]
fn test_derived_sentences_are_not_duplicated() {
    let mut kb = KnowledgeBase::new(4, 4);
    let small = Sentence::new([Cell::new(0, 0), Cell::new(0, 1)], 1);
    let large = Sentence::new(
        [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 3)],
        2,
    );

    kb.add_sentence(small.clone());
    kb.add_sentence(large.clone());
    kb.add_sentence(small);
    kb.add_sentence(large);

    let sentences = kb.knowledge();
    for (i, s1) in sentences.iter().enumerate() {
        for s2 in &sentences[i + 1..] {
            assert_ne!(s1, s2);
        }
    }
    assert_eq!(sentences.len(), 3);
}

// =============================================================================
// Move selection
// =============================================================================

#[test]
fn test_safe_move_is_read_only() {
    let mut kb = KnowledgeBase::new(8, 8);
    kb.add_knowledge(Cell::new(4, 4), 0);
    kb.add_knowledge(Cell::new(0, 0), 1);

    let safes = kb.safes().clone();
    let mines = kb.mines().clone();
    let moves = kb.moves_made().clone();
    let knowledge = kb.knowledge().to_vec();

    let mut rng = GameRng::new(42);
    for _ in 0..50 {
        let cell = kb.make_safe_move(&mut rng).unwrap();
        assert!(!moves.contains(&cell));
    }

    assert_eq!(kb.safes(), &safes);
    assert_eq!(kb.mines(), &mines);
    assert_eq!(kb.moves_made(), &moves);
    assert_eq!(kb.knowledge(), knowledge.as_slice());
}

#[test]
fn test_first_random_move_in_bounds() {
    let kb = KnowledgeBase::new(8, 8);

    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        let cell = kb.make_random_move(8, &mut rng).unwrap();

        assert!(cell.in_bounds(8, 8));
        assert!(!kb.moves_made().contains(&cell));
        assert!(!kb.mines().contains(&cell));
    }
}

#[test]
fn test_random_move_avoids_known_mines() {
    let mut kb = KnowledgeBase::new(2, 2);
    kb.add_knowledge(Cell::new(0, 0), 2);

    // Two of three neighbors are mines; no certainty, but never a known mine
    let mut rng = GameRng::new(42);
    let cell = kb.make_random_move(2, &mut rng).unwrap();
    assert!(!kb.mines().contains(&cell));
    assert!(!kb.moves_made().contains(&cell));
}

// =============================================================================
// Whole boards
// =============================================================================

/// Inference from true counts never contradicts the board.
#[test]
fn test_inference_is_sound_on_random_boards() {
    let config = BoardConfig::new(9, 9, 10);

    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        let board = Board::new(config, &mut rng);
        let mut kb = KnowledgeBase::new(config.height, config.width);

        // Probe every safe cell that is not yet known, like a perfect guesser
        for cell in config.cells() {
            if board.is_mine(cell) || kb.moves_made().contains(&cell) {
                continue;
            }
            kb.add_knowledge(cell, board.nearby_mines(cell));
            reveal_safe_moves(&mut kb, &board, &mut rng);
            assert_sound(&kb, &board);
        }

        // With every safe cell revealed, every mine next to a safe cell is pinned down
        for mine in board.mines() {
            let touches_safe = mine
                .neighbors(config.height, config.width)
                .into_iter()
                .any(|n| !board.is_mine(n));
            assert_eq!(kb.mines().contains(mine), touches_safe);
        }
    }
}

/// The over-asserting rule can flag safe cells; the exact rule never does.
#[test]
fn test_legacy_rule_can_be_wrong() {
    // Row 0 hidden: X . .   (0, 0) is the only mine
    let board = Board::with_mines(2, 3, [Cell::new(0, 0)]);
    let probe = Cell::new(1, 1);
    let count = board.nearby_mines(probe);

    let mut legacy = KnowledgeBase::new(2, 3).with_mine_rule(MineRule::AnyNonZero);
    legacy.add_knowledge(probe, count);
    assert!(legacy.mines().iter().any(|&cell| !board.is_mine(cell)));

    let mut exact = KnowledgeBase::new(2, 3);
    exact.add_knowledge(probe, count);
    assert!(exact.mines().is_empty());
    assert_sound(&exact, &board);
}
