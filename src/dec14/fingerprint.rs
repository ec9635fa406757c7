use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::grid::{Cell, Grid};

/// Full structural key for a grid: dimensions plus every cell in row-major
/// order. Two fingerprints are equal exactly when the grids are.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint {
    number_of_rows: usize,
    number_of_columns: usize,
    cells: Vec<Cell>,
}

impl Fingerprint {
    pub fn of(grid: &Grid) -> Fingerprint {
        Fingerprint {
            number_of_rows: grid.number_of_rows(),
            number_of_columns: grid.number_of_columns(),
            cells: grid.values(),
        }
    }
}

/// Step index of the first occurrence of every fingerprint seen so far.
#[derive(Debug, Default)]
pub struct History {
    first_seen: HashMap<Fingerprint, usize>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Records `fingerprint` at `step`. If it was already recorded at an
    /// earlier step, returns that step and leaves the history unchanged.
    pub fn record(&mut self, step: usize, fingerprint: Fingerprint) -> Option<usize> {
        match self.first_seen.entry(fingerprint) {
            Entry::Occupied(entry) => Some(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(step);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.first_seen.len()
    }
}
