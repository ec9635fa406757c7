use std::fmt;

use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    Empty,
    Movable,
    Fixed,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'O' => Some(Cell::Movable),
            '#' => Some(Cell::Fixed),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Movable => 'O',
            Cell::Fixed => '#',
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has length {found}, expected {expected}")]
    UnequalRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid character {found:?} at row {row}, column {column}")]
    InvalidChar {
        row: usize,
        column: usize,
        found: char,
    },
}

/// Rectangular row-major storage. Every row has `number_of_columns` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<T> {
    number_of_rows: usize,
    number_of_columns: usize,
    row_data: Vec<Vec<T>>,
}

pub type Grid = Map<Cell>;

impl Map<Cell> {
    pub fn from_string(s: &str) -> Result<Grid, ParseGridError> {
        let rows: Vec<&str> = s.trim().lines().map(|line| line.trim()).collect();
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ParseGridError::Empty);
        }

        let number_of_columns = rows[0].chars().count();

        let row_data = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                let cells = line
                    .chars()
                    .enumerate()
                    .map(|(column, c)| {
                        Cell::from_char(c).ok_or(ParseGridError::InvalidChar {
                            row,
                            column,
                            found: c,
                        })
                    })
                    .collect::<Result<Vec<Cell>, _>>()?;
                if cells.len() != number_of_columns {
                    return Err(ParseGridError::UnequalRowLength {
                        row,
                        expected: number_of_columns,
                        found: cells.len(),
                    });
                }
                Ok(cells)
            })
            .collect::<Result<Vec<Vec<Cell>>, _>>()?;

        Ok(Map {
            number_of_rows: rows.len(),
            number_of_columns,
            row_data,
        })
    }

    pub fn count(&self, needle: Cell) -> usize {
        self.row_data
            .iter()
            .flatten()
            .filter(|cell| **cell == needle)
            .count()
    }

    /// Sum of `number_of_rows - row` over every movable cell.
    pub fn north_load(&self) -> usize {
        self.row_data
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let movable = cells.iter().filter(|c| **c == Cell::Movable).count();
                movable * (self.number_of_rows - row)
            })
            .sum()
    }
}

impl<T> Map<T>
where
    T: Clone,
{
    pub fn number_of_rows(&self) -> usize {
        self.number_of_rows
    }

    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    pub fn at(&self, (col, row): (usize, usize)) -> Option<&T> {
        self.row_data.get(row).and_then(|cells| cells.get(col))
    }

    pub fn at_mut(&mut self, (col, row): (usize, usize)) -> Option<&mut T> {
        self.row_data.get_mut(row).and_then(|cells| cells.get_mut(col))
    }

    /// Overwrites a cell, returning the previous value if `(col, row)` is in bounds.
    pub fn replace(&mut self, position: (usize, usize), value: T) -> Option<T> {
        self.at_mut(position).map(|cell| std::mem::replace(cell, value))
    }

    /// Rotates 90 degrees clockwise: the left column becomes the top row.
    pub fn rotate_clockwise(&self) -> Map<T> {
        let row_data = (0..self.number_of_columns)
            .map(|col| {
                self.row_data
                    .iter()
                    .rev()
                    .map(|cells| cells[col].clone())
                    .collect()
            })
            .collect();
        Map {
            number_of_rows: self.number_of_columns,
            number_of_columns: self.number_of_rows,
            row_data,
        }
    }

    pub fn show<F>(&self, format_cell: F) -> String
    where
        F: Fn(&T) -> char,
    {
        self.row_data
            .iter()
            .map(|cells| cells.iter().map(&format_cell).collect::<String>())
            .join("\n")
    }

    pub fn values(&self) -> Vec<T> {
        self.row_data.iter().flatten().cloned().collect()
    }
}

impl<T> Default for Map<T> {
    fn default() -> Self {
        Map {
            number_of_rows: 0,
            number_of_columns: 0,
            row_data: Vec::new(),
        }
    }
}

impl fmt::Display for Map<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.show(Cell::as_char))
    }
}
