//! Minesweeper board implementation.

use rustc_hash::FxHashSet;

use crate::core::{BoardConfig, Cell, GameRng};
use crate::rules::BoardOracle;

/// Ground-truth Minesweeper board.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    /// Row-major mine grid.
    grid: Vec<bool>,
    mines: FxHashSet<Cell>,
    /// Cells the player has flagged as mines.
    mines_found: FxHashSet<Cell>,
    /// Safe cells the player has probed.
    revealed: FxHashSet<Cell>,
}

impl Board {
    /// Create a board with `config.mine_count` mines placed uniformly at random.
    ///
    /// Panics if the configuration is invalid.
    pub fn new(config: BoardConfig, rng: &mut GameRng) -> Self {
        config.validate();
        let mut board = Self::empty(config);

        while board.mines.len() != config.mine_count {
            let row = rng.gen_range_usize(0..config.height);
            let col = rng.gen_range_usize(0..config.width);
            board.place_mine(Cell::new(row, col));
        }

        board
    }

    /// Create a board with a fixed mine layout.
    ///
    /// Panics if a mine lies outside the board or if the layout fills it.
    pub fn with_mines(height: usize, width: usize, mines: impl IntoIterator<Item = Cell>) -> Self {
        let mines: FxHashSet<Cell> = mines.into_iter().collect();
        let config = BoardConfig::new(height, width, mines.len());

        let mut board = Self::empty(config);
        for cell in mines {
            assert!(cell.in_bounds(height, width), "Mine {} is off the board", cell);
            board.place_mine(cell);
        }

        board
    }

    fn empty(config: BoardConfig) -> Self {
        Self {
            config,
            grid: vec![false; config.cell_count()],
            mines: FxHashSet::default(),
            mines_found: FxHashSet::default(),
            revealed: FxHashSet::default(),
        }
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.config.width + cell.col
    }

    fn place_mine(&mut self, cell: Cell) {
        let index = self.index(cell);
        if !self.grid[index] {
            self.grid[index] = true;
            self.mines.insert(cell);
        }
    }

    /// Get the board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The true mine locations.
    #[must_use]
    pub fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    /// Cells flagged so far.
    #[must_use]
    pub fn mines_found(&self) -> &FxHashSet<Cell> {
        &self.mines_found
    }

    /// Safe cells revealed so far.
    #[must_use]
    pub fn revealed(&self) -> &FxHashSet<Cell> {
        &self.revealed
    }
}

impl BoardOracle for Board {
    fn height(&self) -> usize {
        self.config.height
    }

    fn width(&self) -> usize {
        self.config.width
    }

    fn mine_count(&self) -> usize {
        self.config.mine_count
    }

    fn is_mine(&self, cell: Cell) -> bool {
        self.grid[self.index(cell)]
    }

    fn nearby_mines(&self, cell: Cell) -> usize {
        cell.neighbors(self.config.height, self.config.width)
            .into_iter()
            .filter(|&n| self.is_mine(n))
            .count()
    }

    fn flag(&mut self, cell: Cell) {
        self.mines_found.insert(cell);
    }

    fn reveal(&mut self, cell: Cell) {
        if !self.is_mine(cell) {
            self.revealed.insert(cell);
        }
    }

    fn won(&self) -> bool {
        self.mines_found == self.mines
    }

    fn cleared(&self) -> bool {
        self.revealed.len() + self.mines.len() == self.config.cell_count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = "--".repeat(self.config.width) + "-";

        for row in 0..self.config.height {
            writeln!(f, "{}", separator)?;
            for col in 0..self.config.width {
                let mark = if self.is_mine(Cell::new(row, col)) { "|X" } else { "| " };
                f.write_str(mark)?;
            }
            writeln!(f, "|")?;
        }

        write!(f, "{}", separator)
    }
}
