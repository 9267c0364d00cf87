//! Rendered geometry consumed by the drag controller
//!
//! The board does not render anything. Whatever draws the columns reports
//! back, through [`BoardLayout`], where each column and each of its children
//! currently sit on screen. [`StackedLayout`] is a self-contained renderer
//! that computes that geometry for a plain grid of columns.

mod stacked;

pub use stacked::{LayoutMetrics, StackedLayout};

use crate::types::{CardId, ColumnId, Point, Rect};

/// What a rendered child of a card container is
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    /// A rendered card carrying its id for event correlation
    Card(CardId),
    /// A transient drop marker
    Placeholder,
}

/// One rendered child of a card container
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem {
    pub kind: ItemKind,
    pub bounds: Rect,
}

impl RenderedItem {
    pub fn card(id: impl Into<CardId>, bounds: Rect) -> Self {
        Self {
            kind: ItemKind::Card(id.into()),
            bounds,
        }
    }

    pub fn placeholder(bounds: Rect) -> Self {
        Self {
            kind: ItemKind::Placeholder,
            bounds,
        }
    }

    /// The card id, `None` for placeholders
    pub fn card_id(&self) -> Option<&CardId> {
        match &self.kind {
            ItemKind::Card(id) => Some(id),
            ItemKind::Placeholder => None,
        }
    }
}

/// The area holding a column's cards, children in visual order
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerGeometry {
    pub bounds: Rect,
    pub children: Vec<RenderedItem>,
}

/// A rendered column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGeometry {
    pub id: ColumnId,
    pub bounds: Rect,
    /// `None` when the column has no card container rendered
    pub container: Option<ContainerGeometry>,
}

/// Where a card currently sits on screen
#[derive(Debug, Clone, PartialEq)]
pub struct CardLocation {
    pub column: ColumnId,
    /// Position among all children of the container
    pub index: usize,
    pub bounds: Rect,
}

/// Read access to the rendered board
pub trait BoardLayout {
    /// Columns in rendered order
    fn columns(&self) -> Vec<ColumnGeometry>;

    /// Find a rendered card by id
    fn locate(&self, id: &CardId) -> Option<CardLocation> {
        self.columns().into_iter().find_map(|column| {
            let container = column.container?;
            container
                .children
                .iter()
                .position(|item| item.card_id() == Some(id))
                .map(|index| CardLocation {
                    column: column.id.clone(),
                    index,
                    bounds: container.children[index].bounds,
                })
        })
    }

    /// First column whose bounds contain `point`
    fn column_at(&self, point: Point) -> Option<ColumnGeometry> {
        self.columns()
            .into_iter()
            .find(|column| column.bounds.contains(point))
    }
}

impl BoardLayout for Vec<ColumnGeometry> {
    fn columns(&self) -> Vec<ColumnGeometry> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<ColumnGeometry> {
        vec![
            ColumnGeometry {
                id: "todo".into(),
                bounds: Rect::new(0.0, 0.0, 100.0, 400.0),
                container: Some(ContainerGeometry {
                    bounds: Rect::new(0.0, 40.0, 100.0, 360.0),
                    children: vec![
                        RenderedItem::card("a", Rect::new(0.0, 40.0, 100.0, 40.0)),
                        RenderedItem::placeholder(Rect::new(0.0, 80.0, 100.0, 40.0)),
                        RenderedItem::card("b", Rect::new(0.0, 120.0, 100.0, 40.0)),
                    ],
                }),
            },
            ColumnGeometry {
                id: "done".into(),
                bounds: Rect::new(120.0, 0.0, 100.0, 400.0),
                container: None,
            },
        ]
    }

    #[test]
    fn test_locate_counts_all_children() {
        let location = layout().locate(&"b".into()).unwrap();
        assert_eq!(location.column, "todo");
        assert_eq!(location.index, 2);
        assert_eq!(location.bounds.top, 120.0);
        assert!(layout().locate(&"zzz".into()).is_none());
    }

    #[test]
    fn test_column_at() {
        let layout = layout();
        assert_eq!(layout.column_at(Point::new(150.0, 10.0)).unwrap().id, "done");
        assert!(layout.column_at(Point::new(110.0, 10.0)).is_none());
    }
}
