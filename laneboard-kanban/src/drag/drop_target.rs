//! Resolving a pointer position to a (column, index) drop target

use crate::layout::{BoardLayout, ItemKind};
use crate::types::{CardId, ColumnId, Point};
use serde::Serialize;

/// Where a dragged card would land if released now
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropTarget {
    pub column: ColumnId,
    pub index: usize,
}

/// Find the drop target under `pointer`.
///
/// The first column (in rendered order) containing the pointer wins. Within
/// it, the dragged card and placeholders are ignored; the index is that of
/// the first remaining card whose vertical center lies below the pointer, or
/// the number of cards when there is none. Columns without a card container
/// are skipped.
pub fn drop_target(
    layout: &dyn BoardLayout,
    pointer: Point,
    dragged: Option<&CardId>,
) -> Option<DropTarget> {
    for column in layout.columns() {
        if !column.bounds.contains(pointer) {
            continue;
        }
        let Some(container) = column.container else {
            continue;
        };

        let centers: Vec<f64> = container
            .children
            .iter()
            .filter(|item| match &item.kind {
                ItemKind::Card(id) => Some(id) != dragged,
                ItemKind::Placeholder => false,
            })
            .map(|item| item.bounds.center_y())
            .collect();

        let index = centers
            .iter()
            .position(|&center| pointer.y < center)
            .unwrap_or(centers.len());

        return Some(DropTarget {
            column: column.id,
            index,
        });
    }

    None
}
