//! Example: walking a guard around a grid and measuring the visited area
//!
//! Run with: cargo run -p aoc-grid --example grid_walk

use std::collections::HashSet;

use aoc_grid::{BoundingBox2D, Dense, Direction, Point2D};

const MAP: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

fn main() -> anyhow::Result<()> {
    let grid = Dense::from_rows(MAP.lines().map(str::chars))?;
    let (rows, cols) = grid.dims();
    println!("Map is {rows}x{cols}");

    let (start_row, start_col) = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .find(|&(r, c)| grid[(r, c)] == '^')
        .ok_or_else(|| anyhow::anyhow!("no guard on the map"))?;
    let bounds = BoundingBox2D::new(0, cols as i64 - 1, 0, rows as i64 - 1);

    let mut pos = Point2D::new(start_col as i64, start_row as i64);
    let mut heading: Direction = "^".parse()?;
    let mut visited = HashSet::from([pos]);

    loop {
        let next = pos + heading.delta();
        if !bounds.contains_point(&next) {
            break;
        }
        if grid[(next.y as usize, next.x as usize)] == '#' {
            heading = heading.clockwise();
            continue;
        }
        pos = next;
        visited.insert(pos);
    }

    println!("Guard left the map heading {heading} from {pos}");
    println!("Visited {} distinct cells", visited.len());

    let walked = BoundingBox2D::from_points(visited.iter().copied())
        .ok_or_else(|| anyhow::anyhow!("guard never moved"))?;
    println!(
        "Patrol area covers {}x{} = {} cells",
        walked.width(),
        walked.height(),
        walked.area()
    );

    let open_around_start = grid
        .cardinal_neighbors(start_row, start_col)
        .filter(|&(r, c)| grid[(r, c)] != '#')
        .count();
    println!("Open cells next to the start: {open_around_start}");

    Ok(())
}
