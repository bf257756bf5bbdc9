// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod catalog;
pub mod config;
pub mod data;
pub mod formatter;
pub mod grid;
pub mod level;
pub mod moves;
pub mod parser;
pub mod resolver;
pub mod session;
pub mod win;

mod vec2d;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::catalog::LevelCatalog;

pub trait LoadCatalog {
    fn load_catalog(&self) -> Result<LevelCatalog, Box<dyn Error>>;
}

impl<P: AsRef<Path> + ?Sized> LoadCatalog for P {
    fn load_catalog(&self) -> Result<LevelCatalog, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        Ok(LevelCatalog::from_text(&text)?)
    }
}
