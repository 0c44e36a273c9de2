use log::{info, warn};
use thiserror::Error;

use crate::best_first::{best_first, BestFirstFailure};
use crate::grid::{Cell, Direction, Maze};
use core::fmt;
use std::str::FromStr;

/// The frontier ordering policy. This is the only difference between the two
/// search strategies; the expansion loop is shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Orders the frontier purely by heuristic estimate to the goal. Fast in
    /// practice, no optimality guarantee.
    Greedy,
    /// Orders the frontier by accumulated cost plus heuristic estimate.
    AStar,
}

impl Strategy {
    fn priority(self, cost: i32, heuristic: i32) -> i32 {
        match self {
            Strategy::Greedy => heuristic,
            Strategy::AStar => cost + heuristic,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Strategy::Greedy),
            "astar" => Ok(Strategy::AStar),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown strategy {0:?}, expected \"greedy\" or \"astar\"")]
pub struct UnknownStrategy(pub String);

/// Why a search ended without a path.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The goal is not reachable from the start given the wall layout. A
    /// legitimate outcome, not a defect.
    #[error("no path from start to goal")]
    NoPathFound,
    /// The expansion budget of [search_bounded] ran out first.
    #[error("search budget exhausted before reaching the goal")]
    BudgetExceeded,
}

/// A complete path from start to goal: the visited cells in order, both
/// endpoints included, and the direction of each step between them. This is
/// what a renderer overlays on the maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
    moves: Vec<Direction>,
}

impl Path {
    /// The cells from start to goal inclusive.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The step taken between each consecutive pair of cells; one entry
    /// fewer than [cells](Self::cells).
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    /// Accumulated path cost: the number of unit steps.
    pub fn cost(&self) -> usize {
        self.moves.len()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

/// Searches the maze with the given strategy and no expansion bound.
///
/// Cells are marked as explored when first discovered rather than when
/// expanded, so a cheaper route to an already-discovered cell is discarded.
/// With [Strategy::AStar] this can occasionally yield a slightly
/// longer-than-shortest path; see the crate documentation.
pub fn search(maze: &Maze, strategy: Strategy) -> Result<Path, SearchError> {
    run(maze, strategy, None)
}

/// Like [search], but gives up with [SearchError::BudgetExceeded] once
/// `budget` non-goal nodes have been expanded. A budget of `rows * cols` can
/// never be exceeded, as no cell is expanded twice.
pub fn search_bounded(maze: &Maze, strategy: Strategy, budget: usize) -> Result<Path, SearchError> {
    run(maze, strategy, Some(budget))
}

fn run(maze: &Maze, strategy: Strategy, budget: Option<usize>) -> Result<Path, SearchError> {
    let start = maze.start();
    let goal = maze.goal();
    if maze.unreachable(start, goal) {
        info!("goal {} is not reachable from start {}", goal, start);
        return Err(SearchError::NoPathFound);
    }
    let result = best_first(
        &start,
        |&cell| {
            maze.steps(cell)
                .into_iter()
                .map(|(dir, next)| (dir, next, 1))
                .collect::<Vec<_>>()
        },
        |cost, &cell| strategy.priority(cost, maze.heuristic(cell)),
        |&cell| cell == goal,
        budget,
    );
    match result {
        Ok((cells, moves, _cost)) => Ok(Path { cells, moves }),
        Err(BestFirstFailure::BudgetExceeded) => Err(SearchError::BudgetExceeded),
        Err(BestFirstFailure::Exhausted) => {
            // The component precheck said the goal was reachable.
            warn!("frontier exhausted although {} and {} share a component", start, goal);
            Err(SearchError::NoPathFound)
        }
    }
}
