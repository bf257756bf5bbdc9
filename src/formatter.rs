use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::session::{Phase, Session};

/// Status line followed by the grid, what a terminal shows after each input.
pub struct SessionFormatter<'a> {
    session: &'a Session,
}

impl<'a> SessionFormatter<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl Display for SessionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let session = self.session;
        write!(
            f,
            "Level: {}/{}  Moves: {}  Pushes: {}",
            session.current_level_number(),
            session.level_count(),
            u64::from(session.current_move_count()).separated_string(),
            (session.history().push_cnt() as u64).separated_string(),
        )?;
        if let Phase::Transitioning { .. } = session.phase() {
            write!(f, "  (solved)")?;
        }
        writeln!(f)?;
        write!(f, "{}", session.current_grid())
    }
}

impl Debug for SessionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::catalog::LevelCatalog;
    use crate::config::Config;
    use crate::data::Dir;
    use crate::level::LevelDefinition;

    #[test]
    fn formatting_session() {
        let catalog = LevelCatalog::new(vec![LevelDefinition::new(vec!["#####", "#@$.#", "#####"])]).unwrap();
        let mut session = Session::new(catalog, Config::default());
        assert_eq!(
            SessionFormatter::new(&session).to_string(),
            "Level: 1/1  Moves: 0  Pushes: 0\n#####\n#@$.#\n#####\n"
        );

        session.move_player(Dir::Right, Instant::now());
        assert_eq!(
            format!("{:?}", SessionFormatter::new(&session)),
            "Level: 1/1  Moves: 1  Pushes: 1  (solved)\n#####\n# @*#\n#####\n"
        );
    }
}
