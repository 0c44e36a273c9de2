use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{search, Cell, Maze, Strategy};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_MAZES: usize = 32;
const WALL_RATE: f64 = 0.3;

fn random_maze(n: usize, rng: &mut StdRng) -> Maze {
    let start = Cell::new(0, 0);
    let goal = Cell::new(n as i32 - 1, n as i32 - 1);
    let mut walls = Vec::new();
    for r in 0..n as i32 {
        for c in 0..n as i32 {
            let cell = Cell::new(r, c);
            if cell != start && cell != goal && rng.gen_bool(WALL_RATE) {
                walls.push(cell);
            }
        }
    }
    Maze::from_parts(n, n, start, goal, walls).unwrap()
}

fn strategy_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mazes: Vec<Maze> = (0..N_MAZES).map(|_| random_maze(N, &mut rng)).collect();
    for strategy in [Strategy::Greedy, Strategy::AStar] {
        c.bench_function(format!("{N}x{N} random mazes, {strategy}").as_str(), |b| {
            b.iter(|| {
                for maze in &mazes {
                    black_box(search(maze, strategy).ok());
                }
            })
        });
    }
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
