use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::data::{Cell, Pos};
use crate::level::LevelDefinition;
use crate::vec2d::Vec2d;

/// Why a level definition can't be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    /// Invalid character at row, column
    Pos(usize, usize),
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    Parity {
        boxes: usize,
        targets: usize,
    },
    NoPlayer,
    MultiplePlayers,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Level has no cells"),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::Jagged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, expected {} like the first row",
                row, found, expected
            ),
            ParserErr::Parity { boxes, targets } => {
                write!(f, "{} boxes but {} targets", boxes, targets)
            }
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
        }
    }
}

impl Error for ParserErr {}

/// Decodes and validates the grid, returns it with the player's position.
pub(crate) fn parse(level: &LevelDefinition) -> Result<(Vec2d<Cell>, Pos), ParserErr> {
    let rows = level.rows();
    let width = match rows.first() {
        Some(first) => first.chars().count(),
        None => return Err(ParserErr::Empty),
    };
    if width == 0 {
        return Err(ParserErr::Empty);
    }

    let mut grid = Vec::with_capacity(rows.len());
    let mut player_pos = None;
    let mut boxes = 0;
    let mut targets = 0;

    for (r, line) in rows.iter().enumerate() {
        let mut line_cells = Vec::with_capacity(width);
        for (c, cur_char) in line.chars().enumerate() {
            let cell = Cell::from_char(cur_char).ok_or(ParserErr::Pos(r, c))?;
            if cell.has_player() {
                if player_pos.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player_pos = Some(Pos::new(r as i32, c as i32));
            }
            if cell.has_box() {
                boxes += 1;
            }
            if cell.is_target() {
                targets += 1;
            }
            line_cells.push(cell);
        }
        if line_cells.len() != width {
            return Err(ParserErr::Jagged {
                row: r,
                expected: width,
                found: line_cells.len(),
            });
        }
        grid.push(line_cells);
    }

    if boxes != targets {
        return Err(ParserErr::Parity { boxes, targets });
    }
    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;

    Ok((Vec2d::new(grid), player_pos))
}
