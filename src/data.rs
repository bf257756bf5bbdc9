use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Box,
    BoxOnTarget,
    Target,
    Player,
    PlayerOnTarget,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' => Some(Cell::Empty),
            '#' => Some(Cell::Wall),
            '$' => Some(Cell::Box),
            '*' => Some(Cell::BoxOnTarget),
            '.' => Some(Cell::Target),
            '@' => Some(Cell::Player),
            '+' => Some(Cell::PlayerOnTarget),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Box => '$',
            Cell::BoxOnTarget => '*',
            Cell::Target => '.',
            Cell::Player => '@',
            Cell::PlayerOnTarget => '+',
        }
    }

    pub fn is_target(self) -> bool {
        match self {
            Cell::Target | Cell::BoxOnTarget | Cell::PlayerOnTarget => true,
            _ => false,
        }
    }

    pub fn has_box(self) -> bool {
        self == Cell::Box || self == Cell::BoxOnTarget
    }

    pub fn has_player(self) -> bool {
        self == Cell::Player || self == Cell::PlayerOnTarget
    }

    /// What remains when the occupant leaves.
    pub(crate) fn vacated(self) -> Cell {
        if self.is_target() {
            Cell::Target
        } else {
            Cell::Empty
        }
    }

    /// Cell after the player steps in, keeping the target marking.
    pub(crate) fn with_player(self) -> Cell {
        if self.is_target() {
            Cell::PlayerOnTarget
        } else {
            Cell::Player
        }
    }

    /// Cell after a box is pushed in, keeping the target marking.
    pub(crate) fn with_box(self) -> Cell {
        if self.is_target() {
            Cell::BoxOnTarget
        } else {
            Cell::Box
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirErr {
    InvalidVector(i32, i32),
    InvalidChar(char),
}

impl Display for DirErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            DirErr::InvalidVector(dr, dc) => {
                write!(f, "Not a cardinal unit vector: ({}, {})", dr, dc)
            }
            DirErr::InvalidChar(c) => write!(f, "Not a direction: '{}'", c),
        }
    }
}

impl Error for DirErr {}

impl Dir {
    /// Only the four cardinal unit vectors are directions, diagonals and zero are not.
    pub fn from_vector(dr: i32, dc: i32) -> Result<Dir, DirErr> {
        match (dr, dc) {
            (-1, 0) => Ok(Dir::Up),
            (0, 1) => Ok(Dir::Right),
            (1, 0) => Ok(Dir::Down),
            (0, -1) => Ok(Dir::Left),
            _ => Err(DirErr::InvalidVector(dr, dc)),
        }
    }

    /// Accepts both cases since pushes are written in uppercase.
    pub fn from_lurd(c: char) -> Result<Dir, DirErr> {
        match c {
            'u' | 'U' => Ok(Dir::Up),
            'r' | 'R' => Ok(Dir::Right),
            'd' | 'D' => Ok(Dir::Down),
            'l' | 'L' => Ok(Dir::Left),
            _ => Err(DirErr::InvalidChar(c)),
        }
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Up => 'u',
            Dir::Right => 'r',
            Dir::Down => 'd',
            Dir::Left => 'l',
        };
        write!(f, "{}", c)
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_round_trip() {
        for &c in &[' ', '#', '$', '*', '.', '@', '+'] {
            assert_eq!(Cell::from_char(c).unwrap().to_char(), c);
        }
        assert_eq!(Cell::from_char('X'), None);
        assert_eq!(Cell::from_char('-'), None);
    }

    #[test]
    fn only_cardinal_vectors() {
        for &dir in DIRECTIONS.iter() {
            let (dr, dc) = dir.offset();
            assert_eq!(Dir::from_vector(dr, dc), Ok(dir));
        }
        assert_eq!(Dir::from_vector(1, 1), Err(DirErr::InvalidVector(1, 1)));
        assert_eq!(Dir::from_vector(0, 0), Err(DirErr::InvalidVector(0, 0)));
        assert_eq!(Dir::from_vector(0, 2), Err(DirErr::InvalidVector(0, 2)));
    }

    #[test]
    fn target_marking_survives_occupants() {
        assert_eq!(Cell::Target.with_box(), Cell::BoxOnTarget);
        assert_eq!(Cell::Empty.with_box(), Cell::Box);
        assert_eq!(Cell::Target.with_player(), Cell::PlayerOnTarget);
        assert_eq!(Cell::BoxOnTarget.with_player(), Cell::PlayerOnTarget);
        assert_eq!(Cell::Box.with_player(), Cell::Player);
        assert_eq!(Cell::PlayerOnTarget.vacated(), Cell::Target);
        assert_eq!(Cell::Player.vacated(), Cell::Empty);
    }

    #[test]
    fn stepping() {
        let pos = Pos::new(1, 1);
        assert_eq!(pos + Dir::Up, Pos::new(0, 1));
        assert_eq!(pos + Dir::Right, Pos::new(1, 2));
        assert_eq!(pos + Dir::Down, Pos::new(2, 1));
        assert_eq!(pos + Dir::Left, Pos::new(1, 0));
        assert_eq!(Pos::new(0, 0) + Dir::Left, Pos::new(0, -1));
    }
}
