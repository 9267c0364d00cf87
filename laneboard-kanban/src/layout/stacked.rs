//! A grid renderer: columns side by side, cards stacked top to bottom

use super::{BoardLayout, ColumnGeometry, ContainerGeometry, RenderedItem};
use crate::board::BoardState;
use crate::storage::BlobStore;
use crate::types::{Card, ColumnId, Rect};
use serde::{Deserialize, Serialize};

/// Pixel sizes used by [`StackedLayout`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub column_width: f64,
    pub column_gap: f64,
    pub header_height: f64,
    pub card_height: f64,
    pub card_gap: f64,
    /// Columns never render shorter than this
    pub min_column_height: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            column_width: 272.0,
            column_gap: 16.0,
            header_height: 48.0,
            card_height: 40.0,
            card_gap: 8.0,
            min_column_height: 480.0,
        }
    }
}

/// Geometry snapshot of a board rendered as a grid.
///
/// Column `i` starts at `x = i * (column_width + column_gap)`. Inside a
/// column the header comes first, then the card container whose children
/// are the column's cards in visual order, `card_gap` apart.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedLayout {
    columns: Vec<ColumnGeometry>,
}

impl StackedLayout {
    /// Render `cards` into the given columns. Cards whose column is not
    /// listed are not rendered.
    pub fn compute(columns: &[ColumnId], cards: &[Card], metrics: &LayoutMetrics) -> Self {
        let stacked: Vec<Vec<&Card>> = columns
            .iter()
            .map(|column| cards.iter().filter(|c| c.is_in(column)).collect())
            .collect();

        let tallest = stacked.iter().map(Vec::len).max().unwrap_or(0);
        let height = (metrics.header_height + stack_height(tallest, metrics))
            .max(metrics.min_column_height);

        let columns = columns
            .iter()
            .zip(stacked)
            .enumerate()
            .map(|(i, (id, column_cards))| {
                let left = i as f64 * (metrics.column_width + metrics.column_gap);
                let container_top = metrics.header_height;

                let children = column_cards
                    .iter()
                    .enumerate()
                    .map(|(row, card)| {
                        let top = container_top
                            + metrics.card_gap
                            + row as f64 * (metrics.card_height + metrics.card_gap);
                        RenderedItem::card(
                            card.id.clone(),
                            Rect::new(left, top, metrics.column_width, metrics.card_height),
                        )
                    })
                    .collect();

                ColumnGeometry {
                    id: id.clone(),
                    bounds: Rect::new(left, 0.0, metrics.column_width, height),
                    container: Some(ContainerGeometry {
                        bounds: Rect::new(
                            left,
                            container_top,
                            metrics.column_width,
                            height - container_top,
                        ),
                        children,
                    }),
                }
            })
            .collect();

        Self { columns }
    }

    /// Render the current state of a board
    pub fn for_board<S: BlobStore>(
        board: &BoardState<S>,
        columns: &[ColumnId],
        metrics: &LayoutMetrics,
    ) -> Self {
        Self::compute(columns, board.cards(), metrics)
    }
}

fn stack_height(count: usize, metrics: &LayoutMetrics) -> f64 {
    metrics.card_gap + count as f64 * (metrics.card_height + metrics.card_gap)
}

impl BoardLayout for StackedLayout {
    fn columns(&self) -> Vec<ColumnGeometry> {
        self.columns.clone()
    }
}
