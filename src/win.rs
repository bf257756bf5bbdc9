use crate::data::Cell;
use crate::grid::GridState;

/// Every box sits on a target.
///
/// Only a push can change this so callers only need to check after `MoveOutcome::Pushed`.
pub fn is_complete(state: &GridState) -> bool {
    state.cells.iter().all(|&cell| cell != Cell::Box)
}
