use std::time::Instant;

use log::{debug, info, trace};

use crate::catalog::LevelCatalog;
use crate::config::Config;
use crate::data::Dir;
use crate::grid::GridState;
use crate::moves::{Move, Moves};
use crate::resolver::{self, MoveOutcome};
use crate::win;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// The level is solved, the next one loads once `deadline` passes.
    Transitioning { deadline: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Index of the completed level, counted from 0
    LevelComplete { level: usize },
    /// The last level was completed, play continues from the first one.
    AllLevelsComplete,
}

/// What the session did with an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Outcome(MoveOutcome),
    /// The push solved the level.
    Completed(Event),
    Restarted,
    /// A level transition is pending, nothing changed.
    Ignored,
}

/// One player going through a catalog of levels.
///
/// Time is passed in by the caller, `tick` has to be called for a pending transition to happen.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: LevelCatalog,
    config: Config,
    level_index: usize,
    grid: GridState,
    history: Moves,
    phase: Phase,
}

impl Session {
    pub fn new(catalog: LevelCatalog, config: Config) -> Self {
        let grid = load(&catalog, 0);
        info!("Starting level 1 of {}", catalog.count());
        Session {
            catalog,
            config,
            level_index: 0,
            grid,
            history: Moves::default(),
            phase: Phase::Playing,
        }
    }

    pub fn move_player(&mut self, dir: Dir, now: Instant) -> Response {
        if let Phase::Transitioning { .. } = self.phase {
            trace!("Ignoring {} during transition", dir);
            return Response::Ignored;
        }

        let outcome = resolver::attempt_move(&mut self.grid, dir);
        match outcome {
            MoveOutcome::Moved => self.history.add(Move::new(dir, false)),
            MoveOutcome::Pushed => {
                self.history.add(Move::new(dir, true));
                if win::is_complete(&self.grid) {
                    return Response::Completed(self.complete(now));
                }
            }
            MoveOutcome::Rejected(_) => {}
        }
        Response::Outcome(outcome)
    }

    /// Reloads the current level, not available while transitioning.
    pub fn restart(&mut self) -> Response {
        if let Phase::Transitioning { .. } = self.phase {
            debug!("Restart rejected during transition");
            return Response::Ignored;
        }
        debug!("Restarting level {}", self.current_level_number());
        self.start_level(self.level_index);
        Response::Restarted
    }

    /// Back to the first level, dropping any pending transition.
    pub fn reset(&mut self) {
        debug!("Resetting session");
        self.start_level(0);
    }

    /// Finishes a pending transition once its deadline has passed.
    ///
    /// Returns the index of the level that was loaded.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        match self.phase {
            Phase::Transitioning { deadline } if now >= deadline => self.finish_transition(),
            _ => None,
        }
    }

    /// Finishes a pending transition without waiting.
    pub fn finish_transition(&mut self) -> Option<usize> {
        if self.phase == Phase::Playing {
            return None;
        }
        let next = (self.level_index + 1) % self.catalog.count();
        self.start_level(next);
        info!("Starting level {} of {}", next + 1, self.catalog.count());
        Some(next)
    }

    pub fn current_grid(&self) -> &GridState {
        &self.grid
    }

    /// Counted from 1.
    pub fn current_level_number(&self) -> usize {
        self.level_index + 1
    }

    pub fn current_move_count(&self) -> u32 {
        self.grid.move_cnt()
    }

    pub fn level_count(&self) -> usize {
        self.catalog.count()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &Moves {
        &self.history
    }

    fn complete(&mut self, now: Instant) -> Event {
        let event = if self.level_index + 1 == self.catalog.count() {
            Event::AllLevelsComplete
        } else {
            Event::LevelComplete {
                level: self.level_index,
            }
        };
        info!(
            "Level {} complete in {} moves: {}",
            self.current_level_number(),
            self.grid.move_cnt(),
            self.history
        );
        self.phase = Phase::Transitioning {
            deadline: now + self.config.transition_pause,
        };
        event
    }

    fn start_level(&mut self, index: usize) {
        self.grid = load(&self.catalog, index);
        self.level_index = index;
        self.history.clear();
        self.phase = Phase::Playing;
    }
}

/// Every level in a catalog was parsed when it was built, the session keeps its index in range.
fn load(catalog: &LevelCatalog, index: usize) -> GridState {
    let level = match catalog.get(index) {
        Ok(level) => level,
        Err(err) => unreachable!("{}", err),
    };
    match GridState::parse(level) {
        Ok(grid) => grid,
        Err(err) => unreachable!("Level {} passed validation but: {}", index + 1, err),
    }
}
