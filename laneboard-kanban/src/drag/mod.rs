//! Pointer-driven drag reordering
//!
//! [`DragController`] is a two-state machine (`Idle`, `Dragging`) driven by
//! [`PointerEvent`]s. While dragging it tracks where the lifted card is drawn
//! and which (column, index) it would land on; on release it asks the board
//! to move the card there.
//!
//! ```rust
//! use laneboard_kanban::{
//!     BoardLayout, BoardState, CardStorage, ColumnId, DragController, LayoutMetrics,
//!     MemoryBlobStore, Point, PointerEvent, StackedLayout,
//! };
//!
//! let mut board = BoardState::load(CardStorage::new(MemoryBlobStore::new()));
//! let a = board.add_card("a", "todo").unwrap();
//! board.add_card("b", "todo").unwrap();
//!
//! let columns = vec![ColumnId::from("todo"), ColumnId::from("done")];
//! let layout = StackedLayout::for_board(&board, &columns, &LayoutMetrics::default());
//! let grab = layout.locate(&a.id).unwrap().bounds.center();
//!
//! let mut drag = DragController::new();
//! drag.handle(PointerEvent::press_card(a.id.clone(), grab), &mut board, &layout).unwrap();
//! drag.handle(PointerEvent::release_at(Point::new(400.0, 100.0)), &mut board, &layout).unwrap();
//!
//! assert_eq!(board.position_of(&a.id), Some(("done".into(), 0)));
//! ```

mod drop_target;
mod pointer;

pub use drop_target::{drop_target, DropTarget};
pub use pointer::{PointerEvent, PressTarget};

use crate::board::BoardState;
use crate::error::Result;
use crate::layout::BoardLayout;
use crate::storage::BlobStore;
use crate::types::{CardId, ColumnId, Point};
use std::fmt;

/// Placeholder height when the dragged card's height is unknown
pub const DEFAULT_PLACEHOLDER_HEIGHT: f64 = 40.0;

/// Transient state of the gesture in progress
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    pub card: CardId,
    pub origin_column: ColumnId,
    pub origin_index: usize,
    /// Pointer position relative to the card's top-left corner at press time
    pub pointer_offset: Point,
    /// Rendered height of the card at press time
    pub card_height: Option<f64>,
    /// Where the lifted card's top-left corner is drawn
    pub position: Point,
    pub last_pointer: Option<Point>,
    pub drop_target: Option<DropTarget>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Where to draw the drop placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndicator {
    pub column: ColumnId,
    pub index: usize,
    pub height: f64,
}

/// Result of feeding one event to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Event did not apply in the current state
    Ignored,
    Started { card: CardId },
    Dragged { target: Option<DropTarget> },
    /// Released over a target and the board moved the card
    Moved { card: CardId, target: DropTarget },
    /// Released but nothing moved: no target, or the board rejected the move
    Dropped { card: CardId, target: Option<DropTarget> },
}

type MoveListener = Box<dyn FnMut(&CardId, &DropTarget)>;

/// Drag gesture state machine. One gesture at a time.
#[derive(Default)]
pub struct DragController {
    state: DragState,
    on_card_moved: Option<MoveListener>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener called after a release that actually moved a card
    pub fn on_card_moved(
        mut self,
        listener: impl FnMut(&CardId, &DropTarget) + 'static,
    ) -> Self {
        self.on_card_moved = Some(Box::new(listener));
        self
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The gesture in progress, if any
    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(active) => Some(active),
            DragState::Idle => None,
        }
    }

    /// The placeholder to show, `None` when idle or not over a column
    pub fn indicator(&self) -> Option<DropIndicator> {
        let active = self.active()?;
        let target = active.drop_target.as_ref()?;
        Some(DropIndicator {
            column: target.column.clone(),
            index: target.index,
            height: active.card_height.unwrap_or(DEFAULT_PLACEHOLDER_HEIGHT),
        })
    }

    /// Dispatch one pointer event
    pub fn handle<S: BlobStore>(
        &mut self,
        event: PointerEvent,
        board: &mut BoardState<S>,
        layout: &dyn BoardLayout,
    ) -> Result<DragOutcome> {
        match event {
            PointerEvent::Press { position, target } => Ok(self.press(position, &target, layout)),
            PointerEvent::Move { position } => Ok(self.drag(position, layout)),
            PointerEvent::Release { position } => self.release(position, board, layout),
        }
    }

    /// Start dragging when a card surface is pressed
    pub fn press(
        &mut self,
        position: Point,
        target: &PressTarget,
        layout: &dyn BoardLayout,
    ) -> DragOutcome {
        if self.is_dragging() {
            tracing::trace!("press ignored, drag already active");
            return DragOutcome::Ignored;
        }
        let PressTarget::Card(card) = target else {
            return DragOutcome::Ignored;
        };
        let Some(location) = layout.locate(card) else {
            tracing::debug!(%card, "press on a card that is not rendered");
            return DragOutcome::Ignored;
        };

        let pointer_offset = position - location.bounds.top_left();
        tracing::debug!(
            %card,
            column = %location.column,
            index = location.index,
            "drag started"
        );

        self.state = DragState::Dragging(ActiveDrag {
            card: card.clone(),
            origin_column: location.column,
            origin_index: location.index,
            pointer_offset,
            card_height: Some(location.bounds.height),
            position: position - pointer_offset,
            last_pointer: Some(position),
            drop_target: None,
        });
        DragOutcome::Started { card: card.clone() }
    }

    /// Track the pointer while dragging
    pub fn drag(&mut self, position: Point, layout: &dyn BoardLayout) -> DragOutcome {
        let DragState::Dragging(active) = &mut self.state else {
            return DragOutcome::Ignored;
        };

        active.position = position - active.pointer_offset;
        active.last_pointer = Some(position);
        active.drop_target = drop_target(layout, position, Some(&active.card));

        DragOutcome::Dragged {
            target: active.drop_target.clone(),
        }
    }

    /// Finish the gesture: move the card if released over a target.
    ///
    /// Drag state is cleared whatever happens, including a failed write.
    pub fn release<S: BlobStore>(
        &mut self,
        position: Option<Point>,
        board: &mut BoardState<S>,
        layout: &dyn BoardLayout,
    ) -> Result<DragOutcome> {
        let DragState::Dragging(active) = std::mem::take(&mut self.state) else {
            return Ok(DragOutcome::Ignored);
        };

        let Some(pointer) = position.or(active.last_pointer) else {
            tracing::debug!(card = %active.card, "drag cancelled, no pointer position");
            return Ok(DragOutcome::Dropped {
                card: active.card,
                target: None,
            });
        };

        let Some(target) = drop_target(layout, pointer, Some(&active.card)) else {
            tracing::debug!(card = %active.card, "released outside every column");
            return Ok(DragOutcome::Dropped {
                card: active.card,
                target: None,
            });
        };

        let index = i64::try_from(target.index).unwrap_or(i64::MAX);
        if !board.move_card(&active.card, target.column.clone(), index)? {
            return Ok(DragOutcome::Dropped {
                card: active.card,
                target: Some(target),
            });
        }

        if let Some(listener) = self.on_card_moved.as_mut() {
            listener(&active.card, &target);
        }
        Ok(DragOutcome::Moved {
            card: active.card,
            target,
        })
    }
}

impl fmt::Debug for DragController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("state", &self.state)
            .field("on_card_moved", &self.on_card_moved.is_some())
            .finish()
    }
}
