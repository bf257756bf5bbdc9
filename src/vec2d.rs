use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    /// All rows must have the same length, the parser checks that beforehand.
    pub(crate) fn new(grid: Vec<Vec<T>>) -> Self {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            debug_assert_eq!(row.len(), cols);
            data.extend(row);
        }
        Vec2d { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub(crate) fn row_chunks(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on 0
        self.data.chunks(self.cols.max(1))
    }

    fn offset(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{} out of bounds", pos);
        pos.r as usize * self.cols + pos.c as usize
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.row_chunks() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.offset(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let grid = Vec2d::new(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Pos::new(1, 2)), Some(&6));
        assert_eq!(grid.get(Pos::new(2, 0)), None);
        assert_eq!(grid.get(Pos::new(0, 3)), None);
        assert_eq!(grid.get(Pos::new(-1, 0)), None);
        assert_eq!(grid.get(Pos::new(0, -1)), None);
    }

    #[test]
    fn storage_is_row_major() {
        let grid = Vec2d::new(vec![vec!['a', 'b'], vec!['c', 'd']]);
        let seen: Vec<_> = grid.iter().cloned().collect();
        assert_eq!(seen, vec!['a', 'b', 'c', 'd']);
        assert_eq!(grid[Pos::new(1, 0)], 'c');
        assert_eq!(grid.to_string(), "ab\ncd\n");
    }
}
