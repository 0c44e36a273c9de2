use grid_util::grid::{BoolGrid, Grid};
use log::info;
use petgraph::unionfind::UnionFind;

use core::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A position in the maze as a (row, column) pair. Row 0 is the top row,
/// column 0 the leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One orthogonal step between adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// The (row, column) offset of a single step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        write!(f, "{}", name)
    }
}

/// Neighbour enumeration order. This order decides frontier insertion order
/// and therefore which of several equally good paths is returned, so it is
/// part of the contract rather than an implementation detail.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

/// A structural defect in maze input, reported at construction. A maze that
/// constructs successfully always has exactly one start, exactly one goal,
/// both open and in bounds, and rectangular dimensions of at least 1x1.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MalformedGridError {
    #[error("maze has zero width or zero height")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("no start marker 'A' in maze")]
    MissingStart,
    #[error("no goal marker 'B' in maze")]
    MissingGoal,
    #[error("second start marker 'A' at {cell}")]
    DuplicateStart { cell: Cell },
    #[error("second goal marker 'B' at {cell}")]
    DuplicateGoal { cell: Cell },
    #[error("cell {cell} lies outside the maze")]
    OutOfBounds { cell: Cell },
    #[error("marker at {cell} is placed on a wall")]
    WalledMarker { cell: Cell },
    #[error("start and goal both at {cell}")]
    StartIsGoal { cell: Cell },
}

/// [Maze] is an immutable 4-connected grid with designated start and goal
/// cells. Walls are kept in a [BoolGrid] ([true] meaning blocked), and
/// connected components over the open cells are pre-computed with a
/// [UnionFind] structure so that searches for unreachable goals can fail
/// fast instead of flood-filling.
#[derive(Clone, Debug)]
pub struct Maze {
    walls: BoolGrid,
    start: Cell,
    goal: Cell,
    components: UnionFind<usize>,
}

impl Maze {
    /// Builds a maze from explicit dimensions, markers and wall cells.
    /// The same invariants hold as for [parse](Self::parse): in-bounds
    /// walls and markers, open markers, start distinct from goal.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        start: Cell,
        goal: Cell,
        walls: impl IntoIterator<Item = Cell>,
    ) -> Result<Maze, MalformedGridError> {
        if rows == 0 || cols == 0 {
            return Err(MalformedGridError::Empty);
        }
        let mut wall_grid = BoolGrid::new(cols, rows, false);
        let in_bounds = |cell: Cell| {
            cell.row >= 0
                && cell.col >= 0
                && (cell.row as usize) < rows
                && (cell.col as usize) < cols
        };
        for wall in walls {
            if !in_bounds(wall) {
                return Err(MalformedGridError::OutOfBounds { cell: wall });
            }
            wall_grid.set(wall.col as usize, wall.row as usize, true);
        }
        for marker in [start, goal] {
            if !in_bounds(marker) {
                return Err(MalformedGridError::OutOfBounds { cell: marker });
            }
            if wall_grid.get(marker.col as usize, marker.row as usize) {
                return Err(MalformedGridError::WalledMarker { cell: marker });
            }
        }
        if start == goal {
            return Err(MalformedGridError::StartIsGoal { cell: start });
        }
        let mut maze = Maze {
            walls: wall_grid,
            start,
            goal,
            components: UnionFind::new(rows * cols),
        };
        maze.generate_components();
        Ok(maze)
    }

    /// Parses the rectangular text form of a maze: `'#'` is a wall, `'A'`
    /// the unique start, `'B'` the unique goal and any other character an
    /// open cell. Every row must be as wide as the first.
    pub fn parse(input: &str) -> Result<Maze, MalformedGridError> {
        let mut rows = 0usize;
        let mut cols = 0usize;
        let mut start = None;
        let mut goal = None;
        let mut walls = Vec::new();
        for (r, line) in input.lines().enumerate() {
            let width = line.chars().count();
            if r == 0 {
                cols = width;
            } else if width != cols {
                return Err(MalformedGridError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: width,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::new(r as i32, c as i32);
                match ch {
                    '#' => walls.push(cell),
                    'A' => {
                        if start.replace(cell).is_some() {
                            return Err(MalformedGridError::DuplicateStart { cell });
                        }
                    }
                    'B' => {
                        if goal.replace(cell).is_some() {
                            return Err(MalformedGridError::DuplicateGoal { cell });
                        }
                    }
                    _ => {}
                }
            }
            rows += 1;
        }
        if rows == 0 || cols == 0 {
            return Err(MalformedGridError::Empty);
        }
        let start = start.ok_or(MalformedGridError::MissingStart)?;
        let goal = goal.ok_or(MalformedGridError::MissingGoal)?;
        Maze::from_parts(rows, cols, start, goal, walls)
    }

    pub fn rows(&self) -> usize {
        self.walls.height()
    }

    pub fn cols(&self) -> usize {
        self.walls.width()
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows()
            && (cell.col as usize) < self.cols()
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.walls.get(cell.col as usize, cell.row as usize)
    }

    fn open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.walls.get(cell.col as usize, cell.row as usize)
    }

    /// The in-bounds, non-wall cells one orthogonal step away, in the fixed
    /// order given by [DIRECTIONS].
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        self.steps(cell).into_iter().map(|(_, n)| n).collect()
    }

    /// Like [neighbors](Self::neighbors) but carrying the step taken;
    /// consumed by the search engine to record actions along the path.
    pub(crate) fn steps(&self, cell: Cell) -> Vec<(Direction, Cell)> {
        DIRECTIONS
            .iter()
            .map(|&dir| {
                let (dr, dc) = dir.delta();
                (dir, Cell::new(cell.row + dr, cell.col + dc))
            })
            .filter(|&(_, n)| self.open(n))
            .collect()
    }

    /// Manhattan distance from `cell` to the goal. Admissible and consistent
    /// for 4-directional unit-cost movement.
    pub fn heuristic(&self, cell: Cell) -> i32 {
        (cell.row - self.goal.row).abs() + (cell.col - self.goal.col).abs()
    }

    fn cell_ix(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols() + cell.col as usize
    }

    /// Checks if two cells are on the same connected component.
    pub fn reachable(&self, a: Cell, b: Cell) -> bool {
        !self.unreachable(a, b)
    }

    /// Checks if two cells are not on the same connected component. Walls
    /// and out-of-bounds cells are unreachable from everywhere.
    pub fn unreachable(&self, a: Cell, b: Cell) -> bool {
        if self.open(a) && self.open(b) {
            let a_ix = self.cell_ix(a);
            let b_ix = self.cell_ix(b);
            if self.components.equiv(a_ix, b_ix) {
                false
            } else {
                info!("{} and {} are on different components", a, b);
                true
            }
        } else {
            true
        }
    }

    /// Links up open grid neighbours into the same components. Unioning each
    /// open cell with its south and east neighbours covers all four
    /// adjacencies over the full sweep.
    fn generate_components(&mut self) {
        for r in 0..self.rows() as i32 {
            for c in 0..self.cols() as i32 {
                let cell = Cell::new(r, c);
                if !self.open(cell) {
                    continue;
                }
                for next in [Cell::new(r + 1, c), Cell::new(r, c + 1)] {
                    if self.open(next) {
                        self.components
                            .union(self.cell_ix(cell), self.cell_ix(next));
                    }
                }
            }
        }
    }

    fn glyph(&self, cell: Cell) -> char {
        if cell == self.start {
            'A'
        } else if cell == self.goal {
            'B'
        } else if self.is_wall(cell) {
            '#'
        } else {
            '.'
        }
    }

    /// Renders the maze with the cells of `path` overlaid as `'*'`. The
    /// start and goal keep their markers.
    pub fn render_with_path(&self, path: &[Cell]) -> String {
        let mut out = String::new();
        for r in 0..self.rows() as i32 {
            for c in 0..self.cols() as i32 {
                let cell = Cell::new(r, c);
                if path.contains(&cell) && cell != self.start && cell != self.goal {
                    out.push('*');
                } else {
                    out.push(self.glyph(cell));
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..self.rows() as i32 {
            for c in 0..self.cols() as i32 {
                write!(f, "{}", self.glyph(Cell::new(r, c)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Maze {
    type Err = MalformedGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s)
    }
}
