use anyhow::{anyhow, bail, Context, Result};

pub const SCREEN_WIDTH: usize = 800;
pub const SCREEN_HEIGHT: usize = 800;
pub const CELL_SIZE: usize = 40;
pub const STEP_DELAY: u32 = 1;
/// Largest grid the generator will be asked to build.
pub const MAX_CELLS: usize = 1 << 20;

const USAGE: &str = "usage: dfs-maze [--width N] [--height N] [--cell-size N] \
[--step-delay N] [--frame-ms N] [--seed N] [--animate]";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub screen_width: usize,
    pub screen_height: usize,
    pub cell_size: usize,
    /// frames between two generator steps
    pub step_delay: u32,
    pub frame_ms: u64,
    pub animate: bool,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            step_delay: STEP_DELAY,
            frame_ms: 0,
            animate: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Parses flags, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut settings = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--width" => settings.screen_width = parse_value(&flag, args.next())?,
                "--height" => settings.screen_height = parse_value(&flag, args.next())?,
                "--cell-size" => settings.cell_size = parse_value(&flag, args.next())?,
                "--step-delay" => settings.step_delay = parse_value(&flag, args.next())?,
                "--frame-ms" => settings.frame_ms = parse_value(&flag, args.next())?,
                "--seed" => settings.seed = Some(parse_value(&flag, args.next())?),
                "--animate" => settings.animate = true,
                other => bail!("unknown argument `{}`\n{}", other, USAGE),
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            bail!("cell size must be positive");
        }
        if self.step_delay == 0 {
            bail!("step delay must be at least one frame");
        }
        if self.screen_width < self.cell_size || self.screen_height < self.cell_size {
            bail!(
                "a {}x{} canvas cannot hold a single {} cell",
                self.screen_width,
                self.screen_height,
                self.cell_size
            );
        }
        match self.grid_width().checked_mul(self.grid_height()) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => bail!(
                "a {}x{} grid exceeds the limit of {} cells",
                self.grid_width(),
                self.grid_height(),
                MAX_CELLS
            ),
        }
        if self.frame_ms > 0 && !self.animate {
            bail!("`--frame-ms` only applies together with `--animate`");
        }
        Ok(())
    }

    pub fn grid_width(&self) -> usize {
        self.screen_width / self.cell_size
    }

    pub fn grid_height(&self) -> usize {
        self.screen_height / self.cell_size
    }
}

fn parse_value<T>(flag: &str, value: Option<String>) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.ok_or_else(|| anyhow!("`{}` needs a value\n{}", flag, USAGE))?;
    value
        .parse()
        .with_context(|| format!("invalid value `{}` for `{}`", value, flag))
}
