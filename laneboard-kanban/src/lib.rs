//! Kanban board engine with blob-backed persistence and drag reordering
//!
//! This crate holds the logic of a simple kanban board: named columns of text
//! cards that are reordered by dragging them with a pointer.
//!
//! ## Overview
//!
//! - **One sequence** - All cards live in a single ordered list; a card's
//!   column is just a label on it
//! - **Per-column order** - Only the relative order of cards sharing a
//!   column is meaningful, it is their top-to-bottom order on screen
//! - **Whole-board writes** - Every mutation saves the full list as one JSON
//!   blob through a [`BlobStore`]
//! - **Rendering-agnostic drag** - [`DragController`] reads rendered geometry
//!   through [`BoardLayout`] and never draws anything itself
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use laneboard_kanban::{BoardState, CardStorage, FileBlobStore};
//!
//! # fn example() -> laneboard_kanban::Result<()> {
//! let storage = CardStorage::new(FileBlobStore::new(".laneboard"));
//! let mut board = BoardState::load(storage);
//!
//! let card = board.add_card("Write docs", "todo")?;
//! board.move_card(&card.id, "done", 0)?;
//!
//! for card in board.column_cards(&"done".into()) {
//!     println!("{}: {}", card.id, card.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Format
//!
//! ```text
//! [{"id": "01HV...", "text": "Write docs", "column": "done"}, ...]
//! ```
//!
//! Anything stored under the key that does not parse as that array is
//! treated as an empty board.

pub mod board;
pub mod drag;
mod error;
pub mod layout;
pub mod storage;
pub mod types;

pub use board::{BoardEvent, BoardState};
pub use drag::{
    drop_target, DragController, DragOutcome, DragState, DropIndicator, DropTarget, PointerEvent,
    PressTarget,
};
pub use error::{KanbanError, Result};
pub use layout::{BoardLayout, LayoutMetrics, StackedLayout};
pub use storage::{BlobStore, CardStorage, FileBlobStore, MemoryBlobStore, DEFAULT_STORAGE_KEY};

// Re-export commonly used types
pub use types::{Card, CardId, ColumnId, Point, Rect};
