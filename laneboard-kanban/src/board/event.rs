//! Change notifications emitted by the board

use crate::types::{Card, CardId, ColumnId};
use serde::Serialize;

/// A successful, persisted mutation of the card sequence.
///
/// Listeners typically respond by re-rendering every column from
/// [`BoardState::cards`](super::BoardState::cards).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    Added { card: Card },
    Deleted { id: CardId },
    Moved {
        id: CardId,
        from: ColumnId,
        to: ColumnId,
        index: usize,
    },
}

/// Callback registered through [`BoardState::on_change`](super::BoardState::on_change)
pub type ChangeListener = Box<dyn FnMut(&BoardEvent)>;
