use log::{debug, info};

use crate::error::EngineError;
use crate::fingerprint::{Fingerprint, History};
use crate::grid::Grid;
use crate::tilt::cycle_step;

/// A repeated grid state: the grid after `second_seen_at` cycles equals the
/// grid after `first_seen_at` cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopDescriptor {
    first_seen_at: usize,
    second_seen_at: usize,
    grid_at_second_seen: Grid,
}

impl LoopDescriptor {
    pub fn new(
        first_seen_at: usize,
        second_seen_at: usize,
        grid_at_second_seen: Grid,
    ) -> Result<LoopDescriptor, EngineError> {
        if second_seen_at <= first_seen_at {
            return Err(EngineError::InvalidLoopDescriptor {
                first_seen_at,
                second_seen_at,
            });
        }
        Ok(LoopDescriptor {
            first_seen_at,
            second_seen_at,
            grid_at_second_seen,
        })
    }

    pub fn first_seen_at(&self) -> usize {
        self.first_seen_at
    }

    pub fn second_seen_at(&self) -> usize {
        self.second_seen_at
    }

    pub fn grid_at_second_seen(&self) -> &Grid {
        &self.grid_at_second_seen
    }

    pub fn cycle_length(&self) -> usize {
        self.second_seen_at - self.first_seen_at
    }

    /// The step in `[first_seen_at, second_seen_at)` whose grid equals the
    /// grid after `target` cycles.
    pub fn landing_index(&self, target: usize) -> Result<usize, EngineError> {
        Ok(self.first_seen_at + self.steps_past_loop(target)?)
    }

    fn steps_past_loop(&self, target: usize) -> Result<usize, EngineError> {
        if target < self.second_seen_at {
            return Err(EngineError::TargetBeforeLoop {
                target,
                second_seen_at: self.second_seen_at,
            });
        }
        (target - self.second_seen_at)
            .checked_rem(self.cycle_length())
            .ok_or(EngineError::InvalidLoopDescriptor {
                first_seen_at: self.first_seen_at,
                second_seen_at: self.second_seen_at,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectorState {
    Running,
    Found(LoopDescriptor),
    ExhaustedWithoutCycle,
}

/// Applies cycle steps one at a time, remembering the fingerprint of every
/// grid it produces. Step 0 is the initial grid and is not recorded.
#[derive(Debug)]
pub struct CycleDetector {
    grid: Grid,
    step: usize,
    max_steps: usize,
    history: History,
}

impl CycleDetector {
    pub fn new(grid: Grid, max_steps: usize) -> CycleDetector {
        CycleDetector {
            grid,
            step: 0,
            max_steps,
            history: History::new(),
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn advance(&mut self) -> Result<DetectorState, EngineError> {
        if self.step >= self.max_steps {
            return Ok(DetectorState::ExhaustedWithoutCycle);
        }

        self.grid = cycle_step(std::mem::take(&mut self.grid));
        self.step += 1;

        let fingerprint = Fingerprint::of(&self.grid);
        match self.history.record(self.step, fingerprint) {
            Some(first_seen_at) => {
                let descriptor = LoopDescriptor::new(first_seen_at, self.step, self.grid.clone())?;
                Ok(DetectorState::Found(descriptor))
            }
            None => {
                debug!(
                    "cycle {} is new, {} states recorded",
                    self.step,
                    self.history.len()
                );
                Ok(DetectorState::Running)
            }
        }
    }

    pub fn run(mut self) -> Result<LoopDescriptor, EngineError> {
        loop {
            match self.advance()? {
                DetectorState::Running => {}
                DetectorState::Found(descriptor) => return Ok(descriptor),
                DetectorState::ExhaustedWithoutCycle => {
                    return Err(EngineError::CycleNotFound {
                        max_steps: self.max_steps,
                    })
                }
            }
        }
    }
}

/// Produces the grid after `target` cycles by continuing from the loop point
/// for only the remainder of `target` modulo the cycle length.
pub fn extrapolate(descriptor: LoopDescriptor, target: usize) -> Result<Grid, EngineError> {
    let remaining = descriptor.steps_past_loop(target)?;
    debug!(
        "target {} lands on cycle {}, {} more cycles to run",
        target,
        descriptor.landing_index(target)?,
        remaining
    );

    let mut grid = descriptor.grid_at_second_seen;
    for _ in 0..remaining {
        grid = cycle_step(grid);
    }
    Ok(grid)
}

/// Grid after exactly `target` cycle steps. Targets reached before any
/// repeat are simulated directly.
pub fn fast_forward(grid: Grid, target: usize, max_steps: usize) -> Result<Grid, EngineError> {
    info!("Searching for a loop...");
    let mut detector = CycleDetector::new(grid, max_steps);

    loop {
        if detector.step() == target {
            info!("Reached cycle {} before any repeat", target);
            return Ok(detector.into_grid());
        }

        match detector.advance()? {
            DetectorState::Running => {}
            DetectorState::Found(descriptor) => {
                info!(
                    "Loop found: cycle {} repeats cycle {} (length {})",
                    descriptor.second_seen_at(),
                    descriptor.first_seen_at(),
                    descriptor.cycle_length()
                );
                return extrapolate(descriptor, target);
            }
            DetectorState::ExhaustedWithoutCycle => {
                return Err(EngineError::CycleNotFound { max_steps })
            }
        }
    }
}
