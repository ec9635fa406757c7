use crate::grid::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// Clockwise quarter turns that bring this edge to the top.
    fn quarter_turns(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::West => 1,
            Direction::South => 2,
            Direction::East => 3,
        }
    }
}

/// Rolls every movable cell towards row 0 until it hits the boundary, a fixed
/// cell or a movable cell that has already come to rest.
pub fn tilt(mut grid: Grid) -> Grid {
    for col in 0..grid.number_of_columns() {
        let mut next_free = 0;

        for row in 0..grid.number_of_rows() {
            match grid.at((col, row)).copied() {
                Some(Cell::Fixed) => next_free = row + 1,
                Some(Cell::Movable) => {
                    if next_free != row {
                        grid.replace((col, row), Cell::Empty);
                        grid.replace((col, next_free), Cell::Movable);
                    }
                    next_free += 1;
                }
                _ => {}
            }
        }
    }

    grid
}

fn rotate_times(mut grid: Grid, turns: usize) -> Grid {
    for _ in 0..turns {
        grid = grid.rotate_clockwise();
    }
    grid
}

pub fn tilt_towards(grid: Grid, direction: Direction) -> Grid {
    let turns = direction.quarter_turns();
    let tilted = tilt(rotate_times(grid, turns));
    rotate_times(tilted, (4 - turns) % 4)
}

/// One spin cycle: tilt north, west, south and east, returning the grid in
/// its original orientation.
pub fn cycle_step(grid: Grid) -> Grid {
    let mut grid = tilt(grid);
    for _ in 0..3 {
        grid = tilt(grid.rotate_clockwise());
    }
    grid.rotate_clockwise()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests::{random_grid, EXAMPLE_INPUT};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    type Result<T> = std::result::Result<T, anyhow::Error>;

    const AFTER_ONE_CYCLE: &str = ".....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....";

    const AFTER_TWO_CYCLES: &str = ".....#....
....#...O#
.....##...
..O#......
.....OOO#.
.O#...O#.#
....O#...O
.......OOO
#..OO###..
#.OOO#...O";

    const AFTER_THREE_CYCLES: &str = ".....#....
....#...O#
.....##...
..O#......
.....OOO#.
.O#...O#.#
....O#...O
.......OOO
#...O###.O
#.OOO#...O";

    #[test]
    fn tilts_example_north() -> Result<()> {
        let tilted = tilt(Grid::from_string(EXAMPLE_INPUT)?);
        let expected = Grid::from_string(
            "OOOO.#.O..
OO..#....#
OO..O##..O
O..#.OO...
........#.
..#....#.#
..O..#.O.O
..O.......
#....###..
#....#....",
        )?;
        assert_eq!(tilted, expected);
        assert_eq!(tilted.north_load(), 136);
        Ok(())
    }

    #[test]
    fn open_column_compacts_to_the_edge() -> Result<()> {
        let tilted = tilt(Grid::from_string(".\nO\n.\nO\nO")?);
        assert_eq!(tilted, Grid::from_string("O\nO\nO\n.\n.")?);

        let blocked = tilt(Grid::from_string("O\n.\n#\n.\nO\n.")?);
        assert_eq!(blocked, Grid::from_string("O\n.\n#\nO\n.\n.")?);

        let empty = Grid::from_string("..\n..")?;
        assert_eq!(tilt(empty.clone()), empty);
        Ok(())
    }

    #[test]
    fn tilts_in_each_direction() -> Result<()> {
        let grid = Grid::from_string(".O.\n...\n#.O")?;
        assert_eq!(
            tilt_towards(grid.clone(), Direction::North),
            Grid::from_string(".OO\n...\n#..")?
        );
        assert_eq!(
            tilt_towards(grid.clone(), Direction::West),
            Grid::from_string("O..\n...\n#O.")?
        );
        assert_eq!(
            tilt_towards(grid.clone(), Direction::South),
            Grid::from_string("...\n...\n#OO")?
        );
        assert_eq!(
            tilt_towards(grid, Direction::East),
            Grid::from_string("..O\n...\n#.O")?
        );
        Ok(())
    }

    #[test]
    fn cycles_example() -> Result<()> {
        let grid = Grid::from_string(EXAMPLE_INPUT)?;
        let one = cycle_step(grid);
        assert_eq!(one, Grid::from_string(AFTER_ONE_CYCLE)?);
        let two = cycle_step(one);
        assert_eq!(two, Grid::from_string(AFTER_TWO_CYCLES)?);
        let three = cycle_step(two);
        assert_eq!(three, Grid::from_string(AFTER_THREE_CYCLES)?);
        Ok(())
    }

    #[test]
    fn cycle_step_is_four_directional_tilts() {
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..50 {
            let rows = rng.gen_range(1..8);
            let cols = rng.gen_range(1..8);
            let grid = random_grid(&mut rng, rows, cols);
            let by_direction = [
                Direction::North,
                Direction::West,
                Direction::South,
                Direction::East,
            ]
            .into_iter()
            .fold(grid.clone(), tilt_towards);
            assert_eq!(cycle_step(grid), by_direction);
        }
    }

    #[test]
    fn grid_without_movable_cells_is_a_fixed_point() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);
        for rows in 1..6 {
            for cols in 1..6 {
                let text = random_grid(&mut rng, rows, cols).show(|cell| match cell {
                    Cell::Fixed => '#',
                    _ => '.',
                });
                let grid = Grid::from_string(&text)?;
                assert_eq!(cycle_step(grid.clone()), grid);
            }
        }
        Ok(())
    }

    #[test]
    fn tilting_twice_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(2023);
        for _ in 0..100 {
            let rows = rng.gen_range(1..10);
            let cols = rng.gen_range(1..10);
            let once = tilt(random_grid(&mut rng, rows, cols));
            assert_eq!(tilt(once.clone()), once);
        }
    }

    #[test]
    fn cell_counts_are_conserved() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let rows = rng.gen_range(1..10);
            let cols = rng.gen_range(1..10);
            let grid = random_grid(&mut rng, rows, cols);
            let movable = grid.count(Cell::Movable);
            let fixed = grid.count(Cell::Fixed);

            let results = [
                tilt(grid.clone()),
                grid.rotate_clockwise(),
                cycle_step(grid.clone()),
            ];
            for result in results {
                assert_eq!(result.count(Cell::Movable), movable);
                assert_eq!(result.count(Cell::Fixed), fixed);
            }
        }
    }
}
