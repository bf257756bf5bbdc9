use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Cell, Pos};
use crate::level::LevelDefinition;
use crate::parser::{self, ParserErr};
use crate::vec2d::Vec2d;

/// Cell counts of a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    /// Boxes anywhere, on a target or not
    pub boxes: usize,
    pub boxes_on_targets: usize,
    /// Targets whether free or occupied
    pub targets: usize,
    pub players: usize,
}

/// A level being played: the cells, where the player is and how many moves were made.
#[derive(Clone, PartialEq, Eq)]
pub struct GridState {
    pub(crate) cells: Vec2d<Cell>,
    pub(crate) player_pos: Pos,
    pub(crate) move_cnt: u32,
}

impl GridState {
    pub fn parse(level: &LevelDefinition) -> Result<GridState, ParserErr> {
        let (cells, player_pos) = parser::parse(level)?;
        Ok(GridState {
            cells,
            player_pos,
            move_cnt: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// `None` outside the grid.
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.cells.get(pos).cloned()
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn move_cnt(&self) -> u32 {
        self.move_cnt
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for &cell in self.cells.iter() {
            if cell.has_box() {
                census.boxes += 1;
            }
            if cell == Cell::BoxOnTarget {
                census.boxes_on_targets += 1;
            }
            if cell.is_target() {
                census.targets += 1;
            }
            if cell.has_player() {
                census.players += 1;
            }
        }
        census
    }

    /// The grid encoded as level rows, for renderers.
    pub fn snapshot(&self) -> Vec<String> {
        self.cells
            .row_chunks()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect::<String>())
            .collect()
    }
}

impl Display for GridState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cells)
    }
}

impl Debug for GridState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "player: {}, moves: {}", self.player_pos, self.move_cnt)?;
        write!(f, "{}", self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_finds_player_first() {
        let level = LevelDefinition::new(vec![
            "  ####  ", "###  ###", "#  $   #", "#   @# #", "### $  #", "  #..###", "  ####  ",
        ]);
        let grid = GridState::parse(&level).unwrap();
        assert_eq!(grid.player_pos(), Pos::new(3, 4));
        assert_eq!(grid.move_cnt(), 0);
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.cols(), 8);
        assert_eq!(grid.snapshot(), level.rows());
        assert_eq!(grid.to_string(), level.to_string());
    }

    #[test]
    fn census_counts() {
        let level = LevelDefinition::new(vec!["#######", "#+*$  #", "#######"]);
        let grid = GridState::parse(&level).unwrap();
        assert_eq!(
            grid.census(),
            Census {
                boxes: 2,
                boxes_on_targets: 1,
                targets: 2,
                players: 1,
            }
        );
        assert_eq!(grid.cell(Pos::new(1, 2)), Some(Cell::BoxOnTarget));
        assert_eq!(grid.cell(Pos::new(1, 3)), Some(Cell::Box));
    }

    #[test]
    fn cells_outside_are_none() {
        // no boxes and no targets is still balanced
        let grid = GridState::parse(&LevelDefinition::new(vec!["@"])).unwrap();
        assert_eq!(grid.cell(Pos::new(0, 0)), Some(Cell::Player));
        assert_eq!(grid.cell(Pos::new(0, 1)), None);
        assert_eq!(grid.cell(Pos::new(-1, 0)), None);
    }
}
