//! # maze_pathfinding
//!
//! A maze solving system for 4-connected unit-cost grids. Implements
//! [Greedy Best-First Search](https://en.wikipedia.org/wiki/Best-first_search)
//! and [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on top of one
//! shared priority-queue frontier, using the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to
//! the goal as heuristic. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! Mazes are built from the rectangular text form (`'#'` wall, `'A'` start,
//! `'B'` goal) or programmatically, and are immutable once constructed:
//!
//! ```
//! use maze_pathfinding::{search, Maze, Strategy};
//!
//! let maze: Maze = "A..\n.#.\n..B".parse().unwrap();
//! let path = search(&maze, Strategy::AStar).unwrap();
//! assert_eq!(path.cost(), 4);
//! print!("{}", maze.render_with_path(path.cells()));
//! ```
//!
//! ## Known limitation
//!
//! Cells are marked as explored when they are first discovered, not when
//! they are expanded. A cheaper route to an already-discovered cell found
//! later is dropped, so [Strategy::AStar] can occasionally return a path
//! slightly longer than the true shortest one. Both strategies are fully
//! deterministic: neighbours are generated north, south, west, east, and
//! equal frontier priorities are broken in insertion order.

mod best_first;
pub mod grid;
pub mod search;

pub use grid::{Cell, Direction, MalformedGridError, Maze, DIRECTIONS};
pub use search::{search, search_bounded, Path, SearchError, Strategy, UnknownStrategy};
