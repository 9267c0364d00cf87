//! The card record

use super::ids::{CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// A single text card on the board.
///
/// Serialized as `{"id": .., "text": .., "column": ..}`, which is also the
/// persisted blob format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
    pub column: ColumnId,
}

impl Card {
    /// Create a card with a freshly generated id
    pub fn new(text: impl Into<String>, column: impl Into<ColumnId>) -> Self {
        Self {
            id: CardId::new(),
            text: text.into(),
            column: column.into(),
        }
    }

    /// Create a card with a known id (loading, tests)
    pub fn with_id(
        id: impl Into<CardId>,
        text: impl Into<String>,
        column: impl Into<ColumnId>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            column: column.into(),
        }
    }

    /// Check whether this card sits in the given column
    pub fn is_in(&self, column: &ColumnId) -> bool {
        &self.column == column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_wire_format() {
        let card = Card::with_id("1", "a", "todo");
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "1", "text": "a", "column": "todo"})
        );
    }

    #[test]
    fn test_card_rejects_missing_fields() {
        let result: Result<Card, _> = serde_json::from_str(r#"{"id":"1","text":"a"}"#);
        assert!(result.is_err());
    }
}
