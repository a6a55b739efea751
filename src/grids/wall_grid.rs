use crate::grids::{Dimensions, Direction, Neighborhood, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub visited: bool,
    /// indexed by `Direction`, `true` while the wall on that side stands
    pub walls: [bool; 4],
}

impl Cell {
    pub fn new() -> Self {
        Self {
            visited: false,
            walls: [true; 4],
        }
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![Cell::new(); columns * rows],
            dims: Dimensions { columns, rows },
        }
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.dims.contains(x, y), "({}, {}) is off the grid", x, y);
        (self.dims.columns * y) + x
    }

    #[inline]
    pub fn get_cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index_of(x, y)]
    }

    #[inline]
    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.get_cell(x, y).visited
    }

    #[inline]
    pub fn has_wall(&self, x: usize, y: usize, dir: Direction) -> bool {
        self.get_cell(x, y).has_wall(dir)
    }

    /// Marks the cell visited, returns the previous flag.
    pub fn visit_cell(&mut self, x: usize, y: usize) -> bool {
        let index = self.index_of(x, y);
        let prev = self.cells[index].visited;
        self.cells[index].visited = true;
        prev
    }

    pub fn get_neighborhood_of(&self, x: usize, y: usize) -> Neighborhood {
        Neighborhood::of((x, y), &self.dims)
    }

    pub fn unvisited_neighbors_of(&self, x: usize, y: usize) -> Vec<Position> {
        self.get_neighborhood_of(x, y)
            .filter(|&((nx, ny), _)| !self.is_visited(nx, ny))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Opens the shared side of two adjacent cells on both of them.
    /// This is the only place walls ever change.
    pub fn clear_wall_between(&mut self, one: Position, two: Position) {
        let (x1, y1) = (one.0 as isize, one.1 as isize);
        let (x2, y2) = (two.0 as isize, two.1 as isize);

        let dir = match (x1 - x2, y1 - y2) {
            (1, 0) => Direction::West,
            (-1, 0) => Direction::East,
            (0, 1) => Direction::North,
            (0, -1) => Direction::South,
            _ => {
                debug_assert!(false, "{:?} and {:?} are not adjacent", one, two);
                return;
            }
        };

        let index_one = self.index_of(one.0, one.1);
        let index_two = self.index_of(two.0, two.1);
        self.cells[index_one].walls[dir.index()] = false;
        self.cells[index_two].walls[(-dir).index()] = false;
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    /// Number of open passages; each is counted once.
    pub fn open_wall_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.dims.rows {
            for x in 0..self.dims.columns {
                let cell = self.get_cell(x, y);
                if x + 1 < self.dims.columns && !cell.has_wall(Direction::East) {
                    count += 1;
                }
                if y + 1 < self.dims.rows && !cell.has_wall(Direction::South) {
                    count += 1;
                }
            }
        }
        count
    }

    /// `true` when every pair of neighbours agrees on the wall between them.
    pub fn walls_are_paired(&self) -> bool {
        for y in 0..self.dims.rows {
            for x in 0..self.dims.columns {
                for ((nx, ny), dir) in self.get_neighborhood_of(x, y) {
                    if self.has_wall(x, y, dir) != self.has_wall(nx, ny, -dir) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod test_wall_grid {
    use super::*;

    #[test]
    fn starts_unvisited_and_walled() {
        let grid = WallGrid::with_dims(4, 3);

        assert_eq!(grid.visited_count(), 0);
        assert_eq!(grid.open_wall_count(), 0);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(*grid.get_cell(x, y), Cell::new());
            }
        }
    }

    #[test]
    fn clears_matching_pairs() {
        let mut grid = WallGrid::with_dims(3, 3);

        // west neighbour
        grid.clear_wall_between((1, 1), (0, 1));
        assert!(!grid.has_wall(1, 1, Direction::West));
        assert!(!grid.has_wall(0, 1, Direction::East));

        // east neighbour
        grid.clear_wall_between((1, 1), (2, 1));
        assert!(!grid.has_wall(1, 1, Direction::East));
        assert!(!grid.has_wall(2, 1, Direction::West));

        // north neighbour
        grid.clear_wall_between((1, 1), (1, 0));
        assert!(!grid.has_wall(1, 1, Direction::North));
        assert!(!grid.has_wall(1, 0, Direction::South));

        // south neighbour
        grid.clear_wall_between((1, 1), (1, 2));
        assert!(!grid.has_wall(1, 1, Direction::South));
        assert!(!grid.has_wall(1, 2, Direction::North));

        assert_eq!(grid.open_wall_count(), 4);
        assert!(grid.walls_are_paired());

        // untouched sides stay closed
        assert!(grid.has_wall(0, 1, Direction::West));
        assert!(grid.has_wall(1, 0, Direction::North));
    }

    #[test]
    fn visit_reports_previous_flag() {
        let mut grid = WallGrid::with_dims(2, 2);

        assert!(!grid.visit_cell(1, 0));
        assert!(grid.visit_cell(1, 0));
        assert!(grid.is_visited(1, 0));
        assert_eq!(grid.visited_count(), 1);
    }

    #[test]
    fn unvisited_neighbors_skip_visited() {
        let mut grid = WallGrid::with_dims(3, 3);
        grid.visit_cell(1, 0);
        grid.visit_cell(0, 1);

        assert_eq!(grid.unvisited_neighbors_of(1, 1), vec![(2, 1), (1, 2)]);
        assert!(grid.unvisited_neighbors_of(0, 0).is_empty());
    }
}
