use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Direction, Position};

const CORNER: char = '+';
const H_WALL: &str = "---";
const V_WALL: char = '|';
const OPEN_H: &str = "   ";
const OPEN_V: char = ' ';

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum CellKind {
    Unvisited,
    Visited,
    Current,
}

impl From<CellKind> for &'static str {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Unvisited => ":::",
            CellKind::Visited => "   ",
            CellKind::Current => " @ ",
        }
    }
}

/// Draws the maze as text. Reads the grid, never touches it.
pub struct TextRenderer {
    buffer: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Renders the generator's grid with the active cell highlighted while
    /// generation is still running.
    pub fn render_generator(&mut self, generator: &dyn Generator) -> &str {
        let cursor = if generator.is_done() {
            None
        } else {
            Some(generator.current())
        };
        self.render(generator.grid(), cursor)
    }

    pub fn render(&mut self, grid: &WallGrid, cursor: Option<Position>) -> &str {
        self.buffer.clear();
        let dims = grid.dims;
        if dims.area() == 0 {
            return &self.buffer;
        }

        self.horizontal_line(grid, 0, Direction::North);
        for y in 0..dims.rows {
            for x in 0..dims.columns {
                self.buffer
                    .push(wall_char(grid.has_wall(x, y, Direction::West)));

                let kind = if cursor == Some((x, y)) {
                    CellKind::Current
                } else if grid.is_visited(x, y) {
                    CellKind::Visited
                } else {
                    CellKind::Unvisited
                };
                let glyph: &str = kind.into();
                self.buffer.push_str(glyph);
            }
            let last = dims.columns - 1;
            self.buffer
                .push(wall_char(grid.has_wall(last, y, Direction::East)));
            self.buffer.push('\n');

            self.horizontal_line(grid, y, Direction::South);
        }

        &self.buffer
    }

    fn horizontal_line(&mut self, grid: &WallGrid, y: usize, side: Direction) {
        for x in 0..grid.dims.columns {
            self.buffer.push(CORNER);
            self.buffer.push_str(if grid.has_wall(x, y, side) {
                H_WALL
            } else {
                OPEN_H
            });
        }
        self.buffer.push(CORNER);
        self.buffer.push('\n');
    }
}

#[inline(always)]
fn wall_char(standing: bool) -> char {
    if standing {
        V_WALL
    } else {
        OPEN_V
    }
}
