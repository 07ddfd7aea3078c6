//! Example: a breadth-first search and a letter tally built from the shared containers
//!
//! Run with: cargo run -p aoc-collections --example bfs_with_containers

use aoc_collections::{Counter, CycleCursor, Queue, Set};

/// Tiny maze: `#` is a wall, `S` the start, `E` the end.
const MAZE: &str = "\
S..#....
.#.#.##.
.#...#..
.####.#.
......#E";

fn shortest_path(maze: &[&[u8]]) -> Option<usize> {
    let rows = maze.len();
    let cols = maze.first()?.len();
    let find = |target: u8| {
        (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .find(|&(r, c)| maze[r][c] == target)
    };
    let start = find(b'S')?;
    let end = find(b'E')?;

    let mut seen = Set::new();
    let mut queue = Queue::new();
    seen.add(start);
    queue.enqueue((start, 0));

    while let Some(((r, c), steps)) = queue.dequeue() {
        if (r, c) == end {
            return Some(steps);
        }
        let neighbors = [
            (r.wrapping_sub(1), c),
            (r + 1, c),
            (r, c.wrapping_sub(1)),
            (r, c + 1),
        ];
        for (nr, nc) in neighbors {
            if nr < rows && nc < cols && maze[nr][nc] != b'#' && seen.add((nr, nc)) {
                queue.enqueue(((nr, nc), steps + 1));
            }
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let maze: Vec<&[u8]> = MAZE.lines().map(str::as_bytes).collect();
    let steps = shortest_path(&maze).ok_or_else(|| anyhow::anyhow!("maze has no path"))?;
    println!("Shortest path: {} steps", steps);

    let tally: Counter<char> = MAZE.chars().filter(|c| !c.is_whitespace()).collect();
    println!("Tiles: {}", tally);
    if let Some(tile) = tally.most_common() {
        println!("Most common tile: {:?} ({} times)", tile, tally.get(tile));
    }

    // Walk a repeating instruction list, as in puzzles with looping directions.
    let instructions = ['L', 'R', 'R'];
    let walked: String = CycleCursor::new(&instructions).take(8).collect();
    println!("First 8 instructions: {}", walked);

    Ok(())
}
