use std::error::Error;
use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::grid::GridState;
use crate::level::LevelDefinition;
use crate::parser::ParserErr;

/// The three stock levels.
const BUILTIN: [&[&str]; 3] = [
    &[
        "  ####  ",
        "###  ###",
        "#  $   #",
        "#   @# #",
        "### $  #",
        "  #..###",
        "  ####  ",
    ],
    &[
        "  ####### ",
        "  #     # ",
        "  # $ $ # ",
        "  # . . # ",
        "  # $ $ # ",
        "  # . . # ",
        "  #  @  # ",
        "  ####### ",
    ],
    &[
        "############",
        "#          #",
        "# $ $ $ $  #",
        "#          #",
        "# ........ #",
        "# $ $ $ $  #",
        "#     @    #",
        "############",
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErr {
    Empty,
    InvalidLevel { index: usize, err: ParserErr },
    OutOfRange { index: usize, count: usize },
}

impl Display for CatalogErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            CatalogErr::Empty => write!(f, "No levels"),
            CatalogErr::InvalidLevel { index, ref err } => {
                write!(f, "Invalid level {} (index {}): {}", index + 1, index, err)
            }
            CatalogErr::OutOfRange { index, count } => {
                write!(f, "Level index {} out of range, there are {} levels", index, count)
            }
        }
    }
}

impl Error for CatalogErr {}

/// An ordered list of levels, all of them known to be playable.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

impl LevelCatalog {
    /// Checks every level up front so a session never starts a broken one.
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self, CatalogErr> {
        if levels.is_empty() {
            return Err(CatalogErr::Empty);
        }
        for (index, level) in levels.iter().enumerate() {
            GridState::parse(level).map_err(|err| CatalogErr::InvalidLevel { index, err })?;
        }
        debug!("Catalog with {} levels", levels.len());
        Ok(LevelCatalog { levels })
    }

    pub fn builtin() -> Self {
        let levels = BUILTIN.iter().map(|&rows| LevelDefinition::from(rows)).collect();
        match LevelCatalog::new(levels) {
            Ok(catalog) => catalog,
            Err(err) => unreachable!("Stock levels are broken: {}", err),
        }
    }

    /// Parses a collection of levels in the XSB format.
    ///
    /// Levels are separated by empty lines, lines starting with `;` are comments.
    /// Editors tend to strip trailing whitespace so short rows are padded with empty cells.
    pub fn from_text(text: &str) -> Result<Self, CatalogErr> {
        let mut levels = Vec::new();
        let mut rows: Vec<&str> = Vec::new();

        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim_start().starts_with(';') {
                continue;
            }
            if line.trim().is_empty() {
                if !rows.is_empty() {
                    levels.push(padded(&rows));
                    rows.clear();
                }
            } else {
                rows.push(line);
            }
        }
        if !rows.is_empty() {
            levels.push(padded(&rows));
        }

        LevelCatalog::new(levels)
    }

    pub fn get(&self, index: usize) -> Result<&LevelDefinition, CatalogErr> {
        self.levels.get(index).ok_or(CatalogErr::OutOfRange {
            index,
            count: self.levels.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.levels.iter()
    }
}

fn padded(rows: &[&str]) -> LevelDefinition {
    let rows: Vec<&str> = rows.iter().map(|row| row.trim_end()).collect();
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    LevelDefinition::new(
        rows.iter()
            .map(|row| format!("{:<width$}", row, width = width))
            .collect::<Vec<_>>(),
    )
}
