use std::fmt::{self, Display, Formatter};

use log::trace;

use crate::data::{Cell, Dir};
use crate::grid::GridState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Pushed,
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_applied(self) -> bool {
        match self {
            MoveOutcome::Moved | MoveOutcome::Pushed => true,
            MoveOutcome::Rejected(_) => false,
        }
    }
}

impl Display for MoveOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MoveOutcome::Moved => write!(f, "moved"),
            MoveOutcome::Pushed => write!(f, "pushed"),
            MoveOutcome::Rejected(Rejection::OutOfBounds) => write!(f, "rejected: out of bounds"),
            MoveOutcome::Rejected(Rejection::Blocked) => write!(f, "rejected: blocked"),
        }
    }
}

/// Moves the player one cell, pushing a box if there is one in the way.
///
/// A rejected move leaves `state` untouched.
pub fn attempt_move(state: &mut GridState, dir: Dir) -> MoveOutcome {
    let old_pos = state.player_pos;
    let new_pos = old_pos + dir;

    let dest = match state.cells.get(new_pos) {
        Some(&cell) => cell,
        None => {
            trace!("{} from {}: out of bounds", dir, old_pos);
            return MoveOutcome::Rejected(Rejection::OutOfBounds);
        }
    };

    let outcome = match dest {
        Cell::Wall => {
            trace!("{} from {}: wall at {}", dir, old_pos, new_pos);
            return MoveOutcome::Rejected(Rejection::Blocked);
        }
        Cell::Box | Cell::BoxOnTarget => {
            let box_pos = new_pos + dir;
            let beyond = match state.cells.get(box_pos) {
                Some(&cell) if cell == Cell::Empty || cell == Cell::Target => cell,
                _ => {
                    trace!("{} from {}: box at {} can't move", dir, old_pos, new_pos);
                    return MoveOutcome::Rejected(Rejection::Blocked);
                }
            };
            state.cells[box_pos] = beyond.with_box();
            MoveOutcome::Pushed
        }
        // the player is the only other occupant and it's at old_pos
        Cell::Empty | Cell::Target | Cell::Player | Cell::PlayerOnTarget => MoveOutcome::Moved,
    };

    state.cells[new_pos] = dest.with_player();
    state.cells[old_pos] = state.cells[old_pos].vacated();
    state.player_pos = new_pos;
    state.move_cnt += 1;
    outcome
}
