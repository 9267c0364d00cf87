//! Pointer input as seen by the drag controller

use crate::types::{CardId, Point};

/// What was under the pointer when it was pressed
#[derive(Debug, Clone, PartialEq)]
pub enum PressTarget {
    /// The surface of a card
    Card(CardId),
    /// A card's delete control; never starts a drag
    DeleteControl(CardId),
    /// Anything else
    Background,
}

/// One pointer event, in viewport coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Press { position: Point, target: PressTarget },
    Move { position: Point },
    /// Some input sources release without a position; the controller then
    /// falls back to the last position it saw.
    Release { position: Option<Point> },
}

impl PointerEvent {
    pub fn press_card(id: impl Into<CardId>, position: Point) -> Self {
        Self::Press {
            position,
            target: PressTarget::Card(id.into()),
        }
    }

    pub fn move_to(position: Point) -> Self {
        Self::Move { position }
    }

    pub fn release_at(position: Point) -> Self {
        Self::Release {
            position: Some(position),
        }
    }
}
