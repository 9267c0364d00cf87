//! Moving a card to a column and index

use super::{BoardEvent, BoardState};
use crate::error::Result;
use crate::storage::BlobStore;
use crate::types::{Card, CardId, ColumnId};

/// Relocate a card within `cards`.
///
/// The card ends up at `clamp(index, 0, n)` of the target column, where `n`
/// is the number of other cards already in that column. The rebuilt sequence
/// is every card outside the target column, in its previous order, followed
/// by the target column. Returns the card's previous column and its final
/// index, or `None` when the id is unknown (sequence untouched).
pub fn reorder(
    cards: &mut Vec<Card>,
    id: &CardId,
    column: &ColumnId,
    index: i64,
) -> Option<(ColumnId, usize)> {
    let at = cards.iter().position(|c| &c.id == id)?;
    let mut card = cards.remove(at);
    let from = std::mem::replace(&mut card.column, column.clone());

    let (mut target, rest): (Vec<Card>, Vec<Card>) =
        std::mem::take(cards).into_iter().partition(|c| c.is_in(column));

    let insert_at = usize::try_from(index.max(0))
        .unwrap_or(usize::MAX)
        .min(target.len());
    target.insert(insert_at, card);

    *cards = rest;
    cards.extend(target);

    Some((from, insert_at))
}

impl<S: BlobStore> BoardState<S> {
    /// Move a card so it sits at `index` among the cards of `column`.
    ///
    /// Out-of-range indices clamp (negative to the top, too large to the
    /// bottom). Returns `Ok(false)` without persisting when the id is unknown.
    pub fn move_card(
        &mut self,
        id: &CardId,
        column: impl Into<ColumnId>,
        index: i64,
    ) -> Result<bool> {
        let column = column.into();
        let Some((from, placed)) = reorder(&mut self.cards, id, &column, index) else {
            tracing::debug!(%id, "move ignored, unknown card");
            return Ok(false);
        };

        tracing::debug!(%id, %from, to = %column, requested = index, index = placed, "move card");
        self.persist()?;
        self.notify(&BoardEvent::Moved {
            id: id.clone(),
            from,
            to: column,
            index: placed,
        });
        Ok(true)
    }
}
