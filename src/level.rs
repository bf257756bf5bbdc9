use std::fmt::{self, Debug, Display, Formatter};

/// One level as rows of characters, see `Cell::from_char` for the encoding.
///
/// Nothing is checked here, `LevelCatalog` validates definitions when it's built.
#[derive(Clone, PartialEq, Eq)]
pub struct LevelDefinition {
    rows: Vec<String>,
}

impl LevelDefinition {
    pub fn new<S: Into<String>>(rows: Vec<S>) -> Self {
        LevelDefinition {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl<'a> From<&'a [&'a str]> for LevelDefinition {
    fn from(rows: &'a [&'a str]) -> Self {
        LevelDefinition::new(rows.to_vec())
    }
}

impl Display for LevelDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl Debug for LevelDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_definition() {
        let level = LevelDefinition::new(vec!["#####", "#@$.#", "#####"]);
        assert_eq!(level.rows().len(), 3);
        assert_eq!(level.to_string(), "#####\n#@$.#\n#####\n");
        assert_eq!(format!("{:?}", level), level.to_string());
    }
}
