pub mod backtracker;

use crate::grids::wall_grid::WallGrid;
use crate::grids::Position;

/// What a single call to `step_generation` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// opened a passage into a fresh cell
    Carved(Position),
    /// dead end, focus moved back to the given cell
    Backtracked(Position),
    /// the last pop, the stack is now empty
    Finished,
    /// called after generation was already complete
    Idle,
}

impl StepOutcome {
    pub fn carved(&self) -> bool {
        matches!(self, StepOutcome::Carved(_))
    }
}

pub trait Generator {
    fn step_generation(&mut self) -> StepOutcome;
    fn is_done(&self) -> bool;
    fn grid(&self) -> &WallGrid;
    fn current(&self) -> Position;

    /// Steps until done, returns how many steps it took.
    fn generate_maze(&mut self) -> usize {
        let mut steps = 0;
        while !self.is_done() {
            self.step_generation();
            steps += 1;
        }
        steps
    }
}
