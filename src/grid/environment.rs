//! Maze environment: parsing, queries, and the transition function

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    grid::{Action, CellKind},
    types::Coordinate,
};

/// Tunable reward constants for the transition function.
///
/// These are configuration, not behavior: the environment's semantic
/// contract is the four-way shaping itself (out-of-bounds vs blocked vs
/// progress vs goal), and callers may tune the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardTable {
    /// Reward for attempting to leave the grid domain.
    pub out_of_bounds: f64,
    /// Reward for attempting to enter a wall or the start cell.
    pub blocked: f64,
    /// Reward for entering the goal cell.
    pub goal: f64,
    /// Reward for entering open floor.
    pub step: f64,
}

impl Default for RewardTable {
    // Step reward is mildly negative, not zero: a zero step reward lets
    // open cells tie at 0.0 forever and the greedy agent can cycle between
    // two of them without ever finding the goal.
    fn default() -> Self {
        Self {
            out_of_bounds: -5.0,
            blocked: -2.0,
            goal: 10.0,
            step: -0.1,
        }
    }
}

/// Outcome of attempting an action from a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Position after the attempt. Unchanged when the move was rejected.
    pub position: Coordinate,
    /// Reward received for the attempt.
    pub reward: f64,
    /// Whether the agent actually moved.
    pub moved: bool,
}

/// A deterministic grid-world maze.
///
/// Owns the immutable mapping from coordinates to cell kinds, the unique
/// start and goal coordinates, and the reward constants. Constructed once
/// from maze text and never mutated.
///
/// # Examples
///
/// ```
/// use qmaze::{Action, GridEnvironment};
///
/// let environment = GridEnvironment::parse("#.##\n#  #\n#  *\n####")?;
///
/// let transition = environment.attempt(environment.start(), Action::Down);
/// assert!(transition.moved);
/// # Ok::<(), qmaze::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridEnvironment {
    cells: HashMap<Coordinate, CellKind>,
    start: Coordinate,
    goal: Coordinate,
    rows: usize,
    cols: usize,
    rewards: RewardTable,
}

impl GridEnvironment {
    /// Parse maze text with the default reward constants.
    ///
    /// # Errors
    ///
    /// Returns an error if the maze does not contain exactly one start and
    /// exactly one goal symbol.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_rewards(text, RewardTable::default())
    }

    /// Parse maze text with explicit reward constants.
    ///
    /// Each non-blank line contributes one grid row; leading and trailing
    /// whitespace per line is trimmed before classification, and blank
    /// lines are treated as absent. Rows may be ragged; coordinates past a
    /// short row's end are simply outside the grid domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStart`], [`Error::DuplicateStart`],
    /// [`Error::MissingGoal`], or [`Error::DuplicateGoal`] when the start
    /// and goal symbols are not unique.
    pub fn parse_with_rewards(text: &str, rewards: RewardTable) -> Result<Self> {
        let mut cells = HashMap::new();
        let mut start = None;
        let mut goal = None;
        let mut cols = 0;

        let lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
        let mut rows = 0;
        for (row, line) in lines.enumerate() {
            rows = row + 1;
            for (col, symbol) in line.chars().enumerate() {
                let coordinate = Coordinate::new(row, col);
                let kind = CellKind::from_symbol(symbol);
                match kind {
                    CellKind::Start => match start {
                        None => start = Some(coordinate),
                        Some(first) => {
                            return Err(Error::DuplicateStart {
                                first,
                                second: coordinate,
                            });
                        }
                    },
                    CellKind::Goal => match goal {
                        None => goal = Some(coordinate),
                        Some(first) => {
                            return Err(Error::DuplicateGoal {
                                first,
                                second: coordinate,
                            });
                        }
                    },
                    CellKind::Wall | CellKind::Open => {}
                }
                cells.insert(coordinate, kind);
                cols = cols.max(col + 1);
            }
        }

        let start = start.ok_or(Error::MissingStart)?;
        let goal = goal.ok_or(Error::MissingGoal)?;

        Ok(Self {
            cells,
            start,
            goal,
            rows,
            cols,
            rewards,
        })
    }

    /// The unique start coordinate.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The unique goal coordinate.
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    /// The reward constants in effect.
    pub fn rewards(&self) -> RewardTable {
        self.rewards
    }

    /// Whether a coordinate belongs to the grid domain.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.cells.contains_key(&coordinate)
    }

    /// The kind of the cell at a coordinate, if it is in the domain.
    pub fn cell(&self, coordinate: Coordinate) -> Option<CellKind> {
        self.cells.get(&coordinate).copied()
    }

    /// Iterate over the grid domain (no particular order).
    pub fn states(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }

    /// Number of coordinates in the grid domain.
    pub fn state_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounding (rows, columns) of the parsed grid, for rendering.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Attempt an action from a position.
    ///
    /// Pure function: no side effects, identical inputs yield identical
    /// outputs. The target cell one step in the action's direction decides
    /// the outcome:
    ///
    /// - outside the grid domain: position unchanged, out-of-bounds reward
    /// - wall or start cell: position unchanged, blocked reward
    /// - goal: move, goal reward
    /// - open floor: move, step reward
    pub fn attempt(&self, position: Coordinate, action: Action) -> Transition {
        let rejected = |reward| Transition {
            position,
            reward,
            moved: false,
        };

        let Some(target) = action.apply_to(position) else {
            return rejected(self.rewards.out_of_bounds);
        };

        match self.cells.get(&target) {
            None => rejected(self.rewards.out_of_bounds),
            Some(CellKind::Wall) | Some(CellKind::Start) => rejected(self.rewards.blocked),
            Some(CellKind::Goal) => Transition {
                position: target,
                reward: self.rewards.goal,
                moved: true,
            },
            Some(CellKind::Open) => Transition {
                position: target,
                reward: self.rewards.step,
                moved: true,
            },
        }
    }
}
