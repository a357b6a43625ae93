//! Snake game data structures.
//!
//! One snake, one piece of food, one square grid. Everything the tick engine
//! mutates lives in [`SnakeGame`].

use crate::constants::{GRID_SIZE, INITIAL_SNAKE_LENGTH};
use crate::settings::Settings;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Difficulty levels. Each maps to a base tick interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Base movement interval in milliseconds (lower = faster).
    pub fn base_interval_ms(&self) -> u64 {
        match self {
            Self::Easy => 180,
            Self::Normal => 140,
            Self::Hard => 110,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    /// Parse a command-line value (`easy`, `normal`, `hard`).
    pub fn from_arg(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "normal" => Some(Self::Normal),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Coarse game lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Start,
    Running,
    Paused,
    GameOver,
    Win,
}

impl GamePhase {
    /// GameOver and Win: no further ticks until a restart.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::Win)
    }
}

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction. Y grows downward.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`, without any bounds handling.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square grid of `size` x `size` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub size: i16,
}

impl Default for Grid {
    fn default() -> Self {
        Self { size: GRID_SIZE }
    }
}

impl Grid {
    /// Create a grid. Sizes too small to hold a centred starting snake are
    /// bumped up.
    pub fn new(size: i16) -> Self {
        Self {
            size: size.max(INITIAL_SNAKE_LENGTH * 2),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.size && cell.y >= 0 && cell.y < self.size
    }

    /// Map a cell into `[0, size)` on both axes, for either sign.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell {
            x: cell.x.rem_euclid(self.size),
            y: cell.y.rem_euclid(self.size),
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Cell { x, y }))
    }

    /// Snake laid out for a new game: centred, head first, facing right.
    pub fn initial_snake(&self) -> VecDeque<Cell> {
        let mid = self.size / 2;
        (1..=INITIAL_SNAKE_LENGTH)
            .map(|offset| Cell::new(mid - offset, mid))
            .collect()
    }
}

/// Main game state. Owned by the caller and mutated only through the
/// command methods in [`super::logic`].
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub grid: Grid,
    pub settings: Settings,
    pub phase: GamePhase,

    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Cell>,
    /// Current movement direction.
    pub direction: Direction,
    /// Direction change accepted since the last tick. At most one per tick.
    pub pending_direction: Option<Direction>,

    /// `None` once the grid is full.
    pub food: Option<Cell>,

    pub score: u32,
    /// Best score seen on this device, reconciled once per tick.
    pub high_score: u32,

    /// Current tick interval in milliseconds (derived, see [`super::speed`]).
    pub tick_interval_ms: u64,
    /// Unconsumed frame time (milliseconds).
    pub accumulated_ms: u64,
    /// Total ticks since the last reset.
    pub tick_count: u64,
}

impl SnakeGame {
    /// Create a new game waiting in [`GamePhase::Start`].
    pub fn new<R: Rng>(grid: Grid, settings: Settings, high_score: u32, rng: &mut R) -> Self {
        let mut game = Self {
            grid,
            settings,
            phase: GamePhase::Start,
            snake: VecDeque::new(),
            direction: Direction::Right,
            pending_direction: None,
            food: None,
            score: 0,
            high_score,
            tick_interval_ms: settings.difficulty.base_interval_ms(),
            accumulated_ms: 0,
            tick_count: 0,
        };
        game.reset(rng);
        game
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn tail(&self) -> Cell {
        self.snake[self.snake.len() - 1]
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    /// Read-only view handed to the renderer once per frame.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid_size: self.grid.size,
            snake: &self.snake,
            head: self.snake.front().copied(),
            food: self.food,
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            tick_interval_ms: self.tick_interval_ms,
            tick_count: self.tick_count,
            settings: self.settings,
        }
    }
}

/// Everything the renderer needs, borrowed from a settled game state.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid_size: i16,
    pub snake: &'a VecDeque<Cell>,
    pub head: Option<Cell>,
    pub food: Option<Cell>,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub tick_interval_ms: u64,
    pub tick_count: u64,
    pub settings: Settings,
}

/// Pick a uniformly random cell not covered by `snake`, or `None` if the
/// snake fills the grid.
pub fn spawn_food<R: Rng>(grid: &Grid, snake: &VecDeque<Cell>, rng: &mut R) -> Option<Cell> {
    if snake.len() >= grid.cell_count() {
        return None;
    }
    let empty: Vec<Cell> = grid.cells().filter(|cell| !snake.contains(cell)).collect();
    empty.choose(rng).copied()
}
