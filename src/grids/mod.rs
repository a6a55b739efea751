pub mod wall_grid;

/// Grid coordinate as `(x, y)`, x grows east and y grows south.
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

impl Dimensions {
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns && y < self.rows
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.columns * self.rows
    }
}

/// Discriminants double as indices into a cell's wall array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Coordinates one step in this direction, or `None` when that would
    /// leave the grid.
    pub fn step_from(self, (x, y): Position, dims: &Dimensions) -> Option<Position> {
        let (nx, ny) = match self {
            Direction::North => (Some(x), y.checked_sub(1)),
            Direction::East => (x.checked_add(1), Some(y)),
            Direction::South => (Some(x), y.checked_add(1)),
            Direction::West => (x.checked_sub(1), Some(y)),
        };

        match (nx, ny) {
            (Some(nx), Some(ny)) if dims.contains(nx, ny) => Some((nx, ny)),
            _ => None,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            3 => Direction::West,
            _ => unreachable!(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub north: Option<Position>,
    pub east: Option<Position>,
    pub south: Option<Position>,
    pub west: Option<Position>,

    counter: usize,
}

impl Neighborhood {
    /// Every in-bounds neighbour of `pos`; out-of-bounds sides stay `None`.
    pub fn of(pos: Position, dims: &Dimensions) -> Self {
        Self {
            north: Direction::North.step_from(pos, dims),
            east: Direction::East.step_from(pos, dims),
            south: Direction::South.step_from(pos, dims),
            west: Direction::West.step_from(pos, dims),
            counter: 0,
        }
    }

    pub fn get(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = (Position, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let dir = Direction::from(self.counter);
            self.counter += 1;
            if let Some(pos) = self.get(dir) {
                return Some((pos, dir));
            }
        }

        None
    }
}
