//! The knowledge base: everything the player has proven about the board.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use super::sentence::{MineRule, Sentence};
use super::stats::InferenceStats;
use crate::core::{Cell, GameRng};

/// A probabilistic move chosen when no safe move is certain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guess {
    /// The cell to probe.
    pub cell: Cell,
    /// Estimated mine probability, `None` when nothing was known yet and the
    /// cell was drawn uniformly.
    pub probability: Option<f64>,
}

/// Propositional knowledge about one game.
///
/// ## Invariants
///
/// - `safes` and `mines` never shrink, and no cell is in both
/// - No live sentence mentions a cell in `safes` or `mines`
/// - `moves_made` is a subset of `safes`
///
/// Every mutation runs inference to a fixed point before returning, so
/// queries always see the full set of conclusions.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    height: usize,
    width: usize,

    /// Cells already probed.
    moves_made: FxHashSet<Cell>,

    /// Cells proven mine-free.
    safes: FxHashSet<Cell>,

    /// Cells proven to hold a mine.
    mines: FxHashSet<Cell>,

    /// Live sentences in insertion order.
    knowledge: Vec<Sentence>,

    mine_rule: MineRule,

    stats: InferenceStats,
}

impl KnowledgeBase {
    /// Create an empty knowledge base for a `height` x `width` board.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            moves_made: FxHashSet::default(),
            safes: FxHashSet::default(),
            mines: FxHashSet::default(),
            knowledge: Vec::new(),
            mine_rule: MineRule::default(),
            stats: InferenceStats::default(),
        }
    }

    /// Set the rule used to read mines off sentences.
    #[must_use]
    pub fn with_mine_rule(mut self, rule: MineRule) -> Self {
        self.mine_rule = rule;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn mine_rule(&self) -> MineRule {
        self.mine_rule
    }

    #[must_use]
    pub fn moves_made(&self) -> &FxHashSet<Cell> {
        &self.moves_made
    }

    #[must_use]
    pub fn safes(&self) -> &FxHashSet<Cell> {
        &self.safes
    }

    #[must_use]
    pub fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    /// Live sentences.
    #[must_use]
    pub fn knowledge(&self) -> &[Sentence] {
        &self.knowledge
    }

    #[must_use]
    pub fn stats(&self) -> &InferenceStats {
        &self.stats
    }

    /// Check if a cell has been proven safe or a mine.
    #[must_use]
    pub fn is_known(&self, cell: Cell) -> bool {
        self.safes.contains(&cell) || self.mines.contains(&cell)
    }

    // === Facts ===

    /// Record a cell as a mine and remove it from every sentence.
    pub fn mark_mine(&mut self, cell: Cell) {
        self.mines.insert(cell);
        for sentence in &mut self.knowledge {
            sentence.mark_mine(cell);
        }
    }

    /// Record a cell as safe and remove it from every sentence.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.safes.insert(cell);
        for sentence in &mut self.knowledge {
            sentence.mark_safe(cell);
        }
    }

    /// Ingest a revealed cell and the number of mines around it.
    ///
    /// The cell is recorded as a move and as safe, its unknown neighbors
    /// become a new sentence, and inference runs to a fixed point.
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) {
        self.stats.observations += 1;

        self.moves_made.insert(cell);
        self.mark_safe(cell);

        let mut count = count as i64;
        let mut cells = FxHashSet::default();

        for neighbor in cell.neighbors(self.height, self.width) {
            if self.safes.contains(&neighbor) {
                continue;
            }
            if self.mines.contains(&neighbor) {
                count -= 1;
                continue;
            }
            cells.insert(neighbor);
        }

        let sentence = Sentence::new(cells, count);
        debug!(%cell, %sentence, "observed");

        self.knowledge.push(sentence);
        self.update_knowledge();
    }

    /// Assert an externally known sentence and run inference.
    ///
    /// Cells already proven safe or mines are resolved out of the sentence
    /// first, so the base never holds stale cells.
    pub fn add_sentence(&mut self, mut sentence: Sentence) {
        for &cell in &self.safes {
            sentence.mark_safe(cell);
        }
        for &cell in &self.mines {
            sentence.mark_mine(cell);
        }

        self.knowledge.push(sentence);
        self.update_knowledge();
    }

    /// Run inference until a full pass makes no progress.
    ///
    /// Each pass:
    /// 1. Marks every cell some sentence proves safe or a mine
    /// 2. Derives `B - A` from every pair of sentences with `A ⊆ B`
    /// 3. Adds derived sentences that are new and non-empty
    /// 4. Drops sentences with no cells left, and repeats
    pub fn update_knowledge(&mut self) {
        loop {
            self.stats.passes += 1;
            let mut updated = false;

            let mut safes = FxHashSet::default();
            let mut mines = FxHashSet::default();
            for sentence in &self.knowledge {
                safes.extend(sentence.known_safes());
                mines.extend(sentence.known_mines_with(self.mine_rule));
            }

            let new_safes = sorted_unknown(&safes, &self.safes);
            if !new_safes.is_empty() {
                trace!(count = new_safes.len(), "inferred safe cells");
            }
            for cell in new_safes {
                self.mark_safe(cell);
                self.stats.safes_inferred += 1;
                updated = true;
            }

            let new_mines = sorted_unknown(&mines, &self.mines);
            if !new_mines.is_empty() {
                debug!(mines = ?new_mines, "inferred mines");
            }
            for cell in new_mines {
                self.mark_mine(cell);
                self.stats.mines_inferred += 1;
                updated = true;
            }

            for sentence in self.infer_from_subsets() {
                if !sentence.is_empty() && !self.knowledge.contains(&sentence) {
                    trace!(%sentence, "derived");
                    self.knowledge.push(sentence);
                    self.stats.sentences_derived += 1;
                    updated = true;
                }
            }

            self.prune();

            if !updated {
                break;
            }
        }

        debug!(
            sentences = self.knowledge.len(),
            safes = self.safes.len(),
            mines = self.mines.len(),
            "knowledge at fixed point"
        );
    }

    /// Drop empty sentences and duplicates left behind by marking.
    fn prune(&mut self) {
        let mut live: Vec<Sentence> = Vec::with_capacity(self.knowledge.len());
        for sentence in self.knowledge.drain(..) {
            if !sentence.is_empty() && !live.contains(&sentence) {
                live.push(sentence);
            }
        }
        self.knowledge = live;
    }

    /// Apply subset inference to every pair of distinct sentences.
    fn infer_from_subsets(&self) -> Vec<Sentence> {
        let mut inferred = Vec::new();

        for (i, s1) in self.knowledge.iter().enumerate() {
            for s2 in &self.knowledge[i + 1..] {
                if s1 == s2 {
                    continue;
                }
                if let Some(sentence) = s2.subtract(s1) {
                    inferred.push(sentence);
                }
                if let Some(sentence) = s1.subtract(s2) {
                    inferred.push(sentence);
                }
            }
        }

        inferred
    }

    // === Move selection ===

    /// Pick a cell proven safe that has not been probed yet.
    ///
    /// Returns `None` when no certain move is available.
    pub fn make_safe_move(&self, rng: &mut GameRng) -> Option<Cell> {
        let mut moves: Vec<Cell> = self.safes.difference(&self.moves_made).copied().collect();
        moves.sort_unstable();
        rng.choose(&moves).copied()
    }

    /// Pick the unprobed, non-mine cell least likely to be a mine.
    ///
    /// Returns `None` when every cell is either probed or a known mine.
    pub fn make_random_move(&self, total_mines: usize, rng: &mut GameRng) -> Option<Cell> {
        self.best_guess(total_mines, rng).map(|guess| guess.cell)
    }

    /// Like `make_random_move`, also reporting the estimate behind the choice.
    pub fn best_guess(&self, total_mines: usize, rng: &mut GameRng) -> Option<Guess> {
        let candidates = self.candidates();
        if candidates.is_empty() {
            return None;
        }

        if self.knowledge.is_empty() {
            return rng.choose(&candidates).map(|&cell| Guess {
                cell,
                probability: None,
            });
        }

        // Strict comparison keeps the first candidate on ties
        let mut best: Option<(Cell, f64)> = None;
        for (cell, probability) in self.estimate(candidates, total_mines) {
            if best.map_or(true, |(_, lowest)| probability < lowest) {
                best = Some((cell, probability));
            }
        }

        best.map(|(cell, probability)| Guess {
            cell,
            probability: Some(probability),
        })
    }

    /// Estimated mine probability of every unprobed, non-mine cell.
    ///
    /// Starts from the uniform density of unfound mines over unexplored
    /// cells, then lowers each cell to the density of any sentence that
    /// covers it when that is smaller. Cells come back in row-major order.
    #[must_use]
    pub fn mine_probabilities(&self, total_mines: usize) -> Vec<(Cell, f64)> {
        self.estimate(self.candidates(), total_mines)
    }

    fn estimate(&self, candidates: Vec<Cell>, total_mines: usize) -> Vec<(Cell, f64)> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let remaining = total_mines.saturating_sub(self.mines.len());
        let baseline = remaining as f64 / candidates.len() as f64;

        let index: FxHashMap<Cell, usize> =
            candidates.iter().enumerate().map(|(i, &cell)| (cell, i)).collect();
        let mut estimates: Vec<(Cell, f64)> =
            candidates.into_iter().map(|cell| (cell, baseline)).collect();

        for sentence in &self.knowledge {
            if sentence.is_empty() {
                continue;
            }
            let density = sentence.count() as f64 / sentence.len() as f64;

            for cell in sentence.cells() {
                if let Some(&i) = index.get(cell) {
                    if estimates[i].1 > density {
                        estimates[i].1 = density;
                    }
                }
            }
        }

        estimates
    }

    /// Cells neither probed nor known to be mines, row-major.
    #[must_use]
    pub fn candidates(&self) -> Vec<Cell> {
        let mut out = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                if !self.moves_made.contains(&cell) && !self.mines.contains(&cell) {
                    out.push(cell);
                }
            }
        }
        out
    }
}

/// Cells of `found` not yet in `known`, sorted for a stable marking order.
fn sorted_unknown(found: &FxHashSet<Cell>, known: &FxHashSet<Cell>) -> Vec<Cell> {
    let mut cells: Vec<Cell> = found.difference(known).copied().collect();
    cells.sort_unstable();
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Cell = Cell::new(0, 0);
    const B: Cell = Cell::new(0, 1);
    const C: Cell = Cell::new(1, 0);
    const D: Cell = Cell::new(1, 1);

    #[test]
    fn test_new_is_empty() {
        let kb = KnowledgeBase::new(8, 8);

        assert!(kb.moves_made().is_empty());
        assert!(kb.safes().is_empty());
        assert!(kb.mines().is_empty());
        assert!(kb.knowledge().is_empty());
        assert_eq!(kb.mine_rule(), MineRule::Exact);
    }

    #[test]
    fn test_mark_mine_propagates() {
        let mut kb = KnowledgeBase::new(4, 4);
        kb.knowledge.push(Sentence::new([A, B, C], 2));
        kb.knowledge.push(Sentence::new([B, D], 1));

        kb.mark_mine(B);

        assert!(kb.mines().contains(&B));
        assert_eq!(kb.knowledge[0], Sentence::new([A, C], 1));
        assert_eq!(kb.knowledge[1], Sentence::new([D], 0));

        // Idempotent
        kb.mark_mine(B);
        assert_eq!(kb.knowledge[0], Sentence::new([A, C], 1));
    }

    #[test]
    fn test_mark_safe_propagates() {
        let mut kb = KnowledgeBase::new(4, 4);
        kb.knowledge.push(Sentence::new([A, B, C], 2));

        kb.mark_safe(A);

        assert!(kb.safes().contains(&A));
        assert_eq!(kb.knowledge[0], Sentence::new([B, C], 2));
    }

    #[test]
    fn test_zero_sentence_marks_safes_and_is_pruned() {
        let mut kb = KnowledgeBase::new(4, 4);
        kb.add_sentence(Sentence::new([A, B], 0));

        assert!(kb.safes().contains(&A));
        assert!(kb.safes().contains(&B));
        assert!(kb.knowledge().is_empty());
    }

    #[test]
    fn test_single_cell_sentence_marks_mine() {
        let mut kb = KnowledgeBase::new(4, 4);
        kb.add_sentence(Sentence::new([A], 1));

        assert!(kb.mines().contains(&A));
        assert!(kb.knowledge().is_empty());
    }

    #[test]
    fn test_subset_inference() {
        let mut kb = KnowledgeBase::new(4, 4);
        kb.add_sentence(Sentence::new([A, B], 1));
        kb.add_sentence(Sentence::new([A, B, C, D], 2));

        assert!(kb.knowledge().contains(&Sentence::new([C, D], 1)));
        assert_eq!(kb.stats().sentences_derived, 1);
        assert!(kb.safes().is_empty());
        assert!(kb.mines().is_empty());
    }

    #[test]
    fn test_subset_inference_resolves_cells() {
        let mut kb = KnowledgeBase::new(4, 4);
        kb.add_sentence(Sentence::new([A, B], 1));
        kb.add_sentence(Sentence::new([A, B, C], 1));

        // {C} = 0 is derived, then C is marked safe
        assert!(kb.safes().contains(&C));
        assert_eq!(kb.knowledge(), &[Sentence::new([A, B], 1)]);
    }

    #[test]
    fn test_add_knowledge_marks_all_mines() {
        let mut kb = KnowledgeBase::new(3, 3);
        kb.add_knowledge(A, 3);

        assert!(kb.moves_made().contains(&A));
        assert!(kb.safes().contains(&A));
        assert_eq!(kb.mines().len(), 3);
        for cell in [B, C, D] {
            assert!(kb.mines().contains(&cell));
        }
        assert!(kb.knowledge().is_empty());
    }

    #[test]
    fn test_add_knowledge_zero_marks_neighbors_safe() {
        let mut kb = KnowledgeBase::new(3, 3);
        kb.add_knowledge(Cell::new(1, 1), 0);

        assert_eq!(kb.safes().len(), 9);
        assert!(kb.knowledge().is_empty());
    }

    #[test]
    fn test_add_knowledge_skips_known_neighbors() {
        let mut kb = KnowledgeBase::new(3, 3);
        kb.mark_mine(B);
        kb.mark_safe(C);

        kb.add_knowledge(A, 2);

        // B accounts for one mine, C is dropped, D must be the other
        assert!(kb.mines().contains(&D));
        assert!(kb.knowledge().is_empty());
    }

    #[test]
    fn test_add_knowledge_twice_is_stable() {
        let mut kb = KnowledgeBase::new(3, 3);
        kb.add_knowledge(A, 1);
        let safes = kb.safes().clone();
        let mines = kb.mines().clone();

        kb.add_knowledge(A, 1);

        assert_eq!(kb.safes(), &safes);
        assert_eq!(kb.mines(), &mines);
        assert!(kb.knowledge().iter().all(|s| s.count() >= 0));
        assert!(kb.knowledge().iter().all(|s| s.count() as usize <= s.len()));
    }

    #[test]
    fn test_any_nonzero_rule_over_asserts() {
        let mut kb = KnowledgeBase::new(2, 2).with_mine_rule(MineRule::AnyNonZero);
        kb.add_knowledge(A, 1);

        assert_eq!(kb.mines().len(), 3);

        let mut exact = KnowledgeBase::new(2, 2);
        exact.add_knowledge(A, 1);
        assert!(exact.mines().is_empty());
        assert_eq!(exact.knowledge(), &[Sentence::new([B, C, D], 1)]);
    }

    #[test]
    fn test_make_safe_move() {
        let mut kb = KnowledgeBase::new(3, 3);
        let mut rng = GameRng::new(42);
        assert_eq!(kb.make_safe_move(&mut rng), None);

        kb.add_knowledge(A, 0);

        let before = kb.clone();
        for _ in 0..20 {
            let cell = kb.make_safe_move(&mut rng).unwrap();
            assert!(!kb.moves_made().contains(&cell));
            assert!(kb.safes().contains(&cell));
        }

        assert_eq!(kb.safes(), before.safes());
        assert_eq!(kb.mines(), before.mines());
        assert_eq!(kb.moves_made(), before.moves_made());
        assert_eq!(kb.knowledge(), before.knowledge());
    }

    #[test]
    fn test_random_move_first_move() {
        let kb = KnowledgeBase::new(8, 8);
        let mut rng = GameRng::new(42);

        let guess = kb.best_guess(8, &mut rng).unwrap();
        assert!(guess.cell.in_bounds(8, 8));
        assert_eq!(guess.probability, None);
    }

    #[test]
    fn test_random_move_prefers_low_density() {
        // One row: . ? 1 ? . .
        let mut kb = KnowledgeBase::new(1, 6);
        kb.add_knowledge(Cell::new(0, 2), 1);

        let probabilities = kb.mine_probabilities(3);
        assert_eq!(probabilities.len(), 5);
        assert_eq!(probabilities[0], (Cell::new(0, 0), 0.6));
        assert_eq!(probabilities[1], (Cell::new(0, 1), 0.5));
        assert_eq!(probabilities[2], (Cell::new(0, 3), 0.5));

        let mut rng = GameRng::new(1);
        let guess = kb.best_guess(3, &mut rng).unwrap();
        assert_eq!(guess.cell, Cell::new(0, 1));
        assert_eq!(guess.probability, Some(0.5));
    }

    #[test]
    fn test_random_move_exhausted() {
        let mut kb = KnowledgeBase::new(1, 2);
        kb.add_knowledge(Cell::new(0, 0), 1);

        let mut rng = GameRng::new(42);
        assert!(kb.mines().contains(&Cell::new(0, 1)));
        assert_eq!(kb.make_random_move(1, &mut rng), None);
    }
}
