use log::info;
use rand::prelude::*;

mod config;

#[allow(dead_code)]
mod generators;

#[allow(dead_code)]
mod grids;

mod renderer;

use config::Settings;
use generators::backtracker::RecursiveBacktracker;
use generators::{Generator, StepOutcome};
use renderer::TextRenderer;

pub struct State {
    pub maze_generator: Box<dyn Generator>,
    pub step_delay: u32,

    frame: u32,
    pub steps: usize,
    pub carved: usize,
}

impl State {
    fn new(maze_generator: Box<dyn Generator>, step_delay: u32) -> Self {
        Self {
            maze_generator,
            step_delay,
            frame: 0,
            steps: 0,
            carved: 0,
        }
    }

    /// Advances one frame; the generator only moves every `step_delay` frames.
    fn update(&mut self) -> Option<StepOutcome> {
        self.frame += 1;
        if self.frame < self.step_delay {
            return None;
        }
        self.frame = 0;

        let outcome = self.maze_generator.step_generation();
        if outcome != StepOutcome::Idle {
            self.steps += 1;
        }
        if outcome.carved() {
            self.carved += 1;
        }
        Some(outcome)
    }

    fn is_done(&self) -> bool {
        self.maze_generator.is_done()
    }
}

fn new_generator(settings: &Settings) -> Box<dyn Generator> {
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Box::new(RecursiveBacktracker::with_rng(
        settings.grid_width(),
        settings.grid_height(),
        rng,
    ))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_args(std::env::args().skip(1))?;
    info!(
        "generating {}x{} maze ({:?})",
        settings.grid_width(),
        settings.grid_height(),
        settings
    );

    let mut state = State::new(new_generator(&settings), settings.step_delay);
    let mut renderer = TextRenderer::new();
    let frame_time = std::time::Duration::from_millis(settings.frame_ms);

    while !state.is_done() {
        let stepped = state.update().is_some();

        if settings.animate && stepped {
            // clear screen, cursor home
            print!("\x1b[2J\x1b[H");
            println!("{}", renderer.render_generator(state.maze_generator.as_ref()));
            if settings.frame_ms > 0 {
                std::thread::sleep(frame_time);
            }
        }
    }

    println!("{}", renderer.render_generator(state.maze_generator.as_ref()));

    let grid = state.maze_generator.grid();
    info!(
        "done after {} steps: {} cells carved, {} passages",
        state.steps,
        grid.visited_count(),
        grid.open_wall_count()
    );

    Ok(())
}
