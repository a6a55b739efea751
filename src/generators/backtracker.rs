use crate::generators::{Generator, StepOutcome};
use crate::grids::wall_grid::WallGrid;
use crate::grids::Position;
use log::{debug, trace};
use rand::prelude::*;

const START: Position = (0, 0);

/// Randomized depth-first search carving one passage (or taking one step
/// back) per call.
pub struct RecursiveBacktracker<R: Rng> {
    grid: WallGrid,
    stack: Vec<Position>,
    current: Position,
    rng: R,
}

impl RecursiveBacktracker<ThreadRng> {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self::with_rng(columns, rows, rand::thread_rng())
    }
}

impl<R: Rng> RecursiveBacktracker<R> {
    pub fn with_rng(columns: usize, rows: usize, rng: R) -> Self {
        assert!(columns > 0 && rows > 0, "maze needs at least one cell");

        let mut grid = WallGrid::with_dims(columns, rows);
        grid.visit_cell(START.0, START.1);

        Self {
            grid,
            stack: vec![START],
            current: START,
            rng,
        }
    }

    /// Path from the start to the active cell.
    pub fn stack(&self) -> &[Position] {
        &self.stack
    }
}

impl<R: Rng> Generator for RecursiveBacktracker<R> {
    fn step_generation(&mut self) -> StepOutcome {
        if self.stack.is_empty() {
            return StepOutcome::Idle;
        }

        let (x, y) = self.current;
        let neighbors = self.grid.unvisited_neighbors_of(x, y);

        if !neighbors.is_empty() {
            let pick: usize = self.rng.gen_range(0, neighbors.len());
            let next = neighbors[pick];
            self.grid.clear_wall_between(self.current, next);
            self.grid.visit_cell(next.0, next.1);
            self.stack.push(next);
            self.current = next;
            trace!("carved {:?} -> {:?}", (x, y), next);
            return StepOutcome::Carved(next);
        }

        self.stack.pop();
        match self.stack.last() {
            Some(&top) => {
                self.current = top;
                trace!("backtracked {:?} -> {:?}", (x, y), top);
                StepOutcome::Backtracked(top)
            }
            None => {
                // current stays frozen on the start cell
                debug!(
                    "maze complete, {} cells visited",
                    self.grid.visited_count()
                );
                StepOutcome::Finished
            }
        }
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn current(&self) -> Position {
        self.current
    }
}
