//! Board state: the single ordered card sequence
//!
//! Only the per-column relative order of cards carries meaning. Cards of
//! different columns may interleave freely in the underlying sequence.
//! Every mutation writes the whole sequence back through [`CardStorage`].

mod event;
mod mv;

pub use event::{BoardEvent, ChangeListener};
pub use mv::reorder;

use crate::error::Result;
use crate::storage::{BlobStore, CardStorage};
use crate::types::{Card, CardId, ColumnId};
use std::fmt;

/// Owns the live card sequence and its persistence
pub struct BoardState<S: BlobStore> {
    cards: Vec<Card>,
    storage: CardStorage<S>,
    listeners: Vec<ChangeListener>,
}

impl<S: BlobStore> BoardState<S> {
    /// Create the board from whatever the storage holds (empty if nothing)
    pub fn load(storage: CardStorage<S>) -> Self {
        let cards = storage.load();
        tracing::debug!(count = cards.len(), "board loaded");
        Self {
            cards,
            storage,
            listeners: Vec::new(),
        }
    }

    /// Register a "cards changed" listener
    pub fn on_change(&mut self, listener: impl FnMut(&BoardEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Append a new card to the end of the sequence.
    ///
    /// Neither text nor column is validated; see [`submit_card`](Self::submit_card)
    /// for the form-input variant.
    pub fn add_card(
        &mut self,
        text: impl Into<String>,
        column: impl Into<ColumnId>,
    ) -> Result<Card> {
        let card = Card::new(text, column);
        tracing::debug!(id = %card.id, column = %card.column, "add card");
        self.cards.push(card.clone());
        self.persist()?;
        self.notify(&BoardEvent::Added { card: card.clone() });
        Ok(card)
    }

    /// Add a card from raw user input: trimmed, and skipped when blank
    pub fn submit_card(
        &mut self,
        input: &str,
        column: impl Into<ColumnId>,
    ) -> Result<Option<Card>> {
        let text = input.trim();
        if text.is_empty() {
            tracing::trace!("ignoring blank card input");
            return Ok(None);
        }
        self.add_card(text, column).map(Some)
    }

    /// Remove the card with this id. Unknown ids are ignored but the sequence
    /// is still written back.
    pub fn delete_card(&mut self, id: &CardId) -> Result<()> {
        let before = self.cards.len();
        self.cards.retain(|c| &c.id != id);
        let removed = self.cards.len() != before;
        tracing::debug!(%id, removed, "delete card");

        self.persist()?;
        if removed {
            self.notify(&BoardEvent::Deleted { id: id.clone() });
        }
        Ok(())
    }

    /// The live sequence
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Cards of one column in visual (top-to-bottom) order
    pub fn column_cards(&self, column: &ColumnId) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.is_in(column)).collect()
    }

    /// Column and visual index of a card
    pub fn position_of(&self, id: &CardId) -> Option<(ColumnId, usize)> {
        let card = self.card(id)?;
        let index = self
            .cards
            .iter()
            .filter(|c| c.column == card.column)
            .position(|c| &c.id == id)?;
        Some((card.column.clone(), index))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn storage(&self) -> &CardStorage<S> {
        &self.storage
    }

    fn persist(&mut self) -> Result<()> {
        self.storage.save(&self.cards).inspect_err(|e| {
            tracing::error!(error = %e, key = self.storage.key(), "failed to persist cards");
        })
    }

    fn notify(&mut self, event: &BoardEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl<S: BlobStore> fmt::Debug for BoardState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardState")
            .field("cards", &self.cards)
            .field("key", &self.storage.key())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
