//! Core types for the board engine

mod card;
mod geometry;
mod ids;

pub use card::Card;
pub use geometry::{Point, Rect};
pub use ids::{CardId, ColumnId};
