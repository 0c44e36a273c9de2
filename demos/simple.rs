use maze_pathfinding::{search, Maze, Strategy};

// In this example a path is found on a 3x3 maze with shape
//  ___
// |A  |
// | # |
// |  B|
//  ___
// where
// - # marks a wall
// - A marks the start
// - B marks the goal

fn main() {
    let maze: Maze = "A..\n.#.\n..B".parse().unwrap();
    println!("{}", maze);
    let path = search(&maze, Strategy::AStar).unwrap();
    println!("Path:");
    for cell in path.cells() {
        println!("{}", cell);
    }
    println!();
    print!("{}", maze.render_with_path(path.cells()));
}
