use maze_pathfinding::{search, Maze, Strategy};

// Solves the same maze with both strategies and renders both results. The
// decoy corridor heading towards the goal draws both searches away from the
// shorter route around the left side; see the crate documentation on the
// explored-on-discovery behaviour.

const MAZE: &str = "\
..A.
.##.
....
.###
..B.";

fn main() {
    let maze: Maze = MAZE.parse().unwrap();
    println!("{}", maze);
    for strategy in [Strategy::Greedy, Strategy::AStar] {
        match search(&maze, strategy) {
            Ok(path) => {
                println!("{} path, {} steps:", strategy, path.cost());
                print!("{}", maze.render_with_path(path.cells()));
            }
            Err(err) => println!("{}: {}", strategy, err),
        }
        println!();
    }
}
