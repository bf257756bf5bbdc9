use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dir, DirErr};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())?;
        } else {
            write!(f, "{}", self.dir)?;
        }
        Ok(())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Applied moves of one attempt at a level, written in LURD notation.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    #[cfg(test)]
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    /// Directions of a LURD string, case only marks pushes so it's ignored.
    pub fn parse_lurd(lurd: &str) -> Result<Vec<Dir>, DirErr> {
        lurd.chars()
            .filter(|c| !c.is_whitespace())
            .map(Dir::from_lurd)
            .collect()
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![
            Move::new(Dir::Up, false),
            Move::new(Dir::Right, false),
            Move::new(Dir::Down, false),
            Move::new(Dir::Left, false),
            Move::new(Dir::Up, true),
            Move::new(Dir::Right, true),
            Move::new(Dir::Down, true),
            Move::new(Dir::Left, true),
        ]);
        assert_eq!(moves.to_string(), "urdlURDL");
        assert_eq!(moves.move_cnt(), 8);
        assert_eq!(moves.push_cnt(), 4);
    }

    #[test]
    fn adding_and_clearing() {
        let mut moves = Moves::default();
        moves.add(Move::new(Dir::Left, true));
        moves.add(Move::new(Dir::Left, false));
        assert_eq!(moves.to_string(), "Ll");
        assert_eq!((&moves).into_iter().count(), 2);
        assert_eq!(moves.push_cnt(), 1);

        moves.clear();
        assert_eq!(moves.move_cnt(), 0);
        assert_eq!(moves.to_string(), "");
    }

    #[test]
    fn parsing_lurd() {
        assert_eq!(
            Moves::parse_lurd("uR dL\n").unwrap(),
            vec![Dir::Up, Dir::Right, Dir::Down, Dir::Left]
        );
        assert_eq!(Moves::parse_lurd("ux"), Err(DirErr::InvalidChar('x')));
    }
}
