use chrono::{DateTime, Utc};
use leptos::logging::log;
use thiserror::Error;

use crate::core::config::{is_fixed_board, CARDS_KEY};
use crate::core::models::{Card, CardDraft};
use crate::core::services::{load_stored_or_empty, save_stored, KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum CardError {
    #[error("card title must not be empty")]
    EmptyTitle,
    #[error("board `{0}` is not one of the fixed boards")]
    UnknownBoard(String),
    #[error("card `{0}` was not found in storage")]
    CardNotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What the open dialog is acting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub board_id: String,
    /// `None` while creating a card.
    pub card_id: Option<String>,
}

impl EditSession {
    pub fn create(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            card_id: None,
        }
    }

    pub fn edit(board_id: impl Into<String>, card_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            card_id: Some(card_id.into()),
        }
    }
}

/// Create or update the card the session points at and persist the whole
/// collection. Returns the stored record.
pub fn save_card<S: KeyValueStore + ?Sized>(
    store: &S,
    session: &EditSession,
    draft: CardDraft,
    now: DateTime<Utc>,
) -> Result<Card, CardError> {
    let title = draft.title.trim().to_string();
    if title.is_empty() {
        return Err(CardError::EmptyTitle);
    }

    let mut cards = load_stored_or_empty::<Card, _>(store, CARDS_KEY);

    let saved = match &session.card_id {
        Some(card_id) => {
            let card = cards
                .find_mut(|c| &c.id == card_id)
                .ok_or_else(|| CardError::CardNotFound(card_id.clone()))?;
            card.update_details(title, draft.description, now);
            card.clone()
        }
        None => {
            if !is_fixed_board(&session.board_id) {
                return Err(CardError::UnknownBoard(session.board_id.clone()));
            }
            let card = Card::new(session.board_id.clone(), title, draft.description, now);
            cards.push(card.clone());
            card
        }
    };

    save_stored(store, CARDS_KEY, &cards)?;
    log!("Saved card {} on {}", saved.id, saved.board_id);
    Ok(saved)
}

/// Remove one card by id. `Ok(None)` (and no write) when it doesn't exist.
pub fn delete_card<S: KeyValueStore + ?Sized>(
    store: &S,
    card_id: &str,
) -> Result<Option<Card>, CardError> {
    let mut cards = load_stored_or_empty::<Card, _>(store, CARDS_KEY);
    let Some(removed) = cards.remove_first(|c| c.id == card_id) else {
        return Ok(None);
    };

    save_stored(store, CARDS_KEY, &cards)?;
    log!("Deleted card {} from {}", removed.id, removed.board_id);
    Ok(Some(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{fixed_boards, BOARDS_KEY};
    use crate::core::services::{load_collection, MemoryStore};
    use crate::features::kanban::services::{board_cards, initialize_fixed_boards};
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn draft(title: &str, description: &str) -> CardDraft {
        CardDraft {
            title: title.into(),
            description: description.into(),
        }
    }

    fn stored_cards(store: &MemoryStore) -> Vec<Card> {
        load_collection(store, CARDS_KEY).unwrap()
    }

    #[test]
    fn creates_card_on_session_board() {
        let store = MemoryStore::new();
        initialize_fixed_boards(&store);

        let card = save_card(&store, &EditSession::create("board-todo"), draft("  Write spec ", "a\nb"), at(100)).unwrap();

        let cards = stored_cards(&store);
        assert_eq!(cards, vec![card.clone()]);
        assert_eq!(card.title, "Write spec");
        assert_eq!(card.description, "a\nb");
        assert_eq!(card.board_id, "board-todo");
        assert_eq!(card.order, at(100).timestamp_millis());
        assert_eq!(card.created_at, at(100));
        assert_eq!(card.updated_at, Some(at(100)));
    }

    #[test]
    fn whitespace_title_is_rejected_without_writing() {
        let store = MemoryStore::new();
        save_card(&store, &EditSession::create("board-todo"), draft("Keep", ""), at(1)).unwrap();
        let before = stored_cards(&store);
        let writes = store.writes();

        let err = save_card(&store, &EditSession::create("board-todo"), draft(" \t\n ", "x"), at(2)).unwrap_err();

        assert!(matches!(err, CardError::EmptyTitle));
        assert_eq!(store.writes(), writes);
        assert_eq!(stored_cards(&store), before);
    }

    #[test]
    fn creating_on_unknown_board_is_rejected() {
        let store = MemoryStore::new();
        let err = save_card(&store, &EditSession::create("board-archive"), draft("A", ""), at(1)).unwrap_err();
        assert!(matches!(err, CardError::UnknownBoard(ref id) if id == "board-archive"));
        assert!(stored_cards(&store).is_empty());
    }

    #[test]
    fn edit_keeps_identity_and_placement() {
        let store = MemoryStore::new();
        let created = save_card(&store, &EditSession::create("board-inprogress"), draft("Old", "old"), at(10)).unwrap();

        let edited = save_card(
            &store,
            &EditSession::edit("board-inprogress", created.id.clone()),
            draft("New", "new\ntext"),
            at(20),
        )
        .unwrap();

        assert_eq!(edited.id, created.id);
        assert_eq!(edited.board_id, created.board_id);
        assert_eq!(edited.order, created.order);
        assert_eq!(edited.created_at, created.created_at);
        assert_eq!(edited.title, "New");
        assert_eq!(edited.description, "new\ntext");
        assert_eq!(edited.updated_at, Some(at(20)));
        assert_eq!(stored_cards(&store), vec![edited]);
    }

    #[test]
    fn editing_a_vanished_card_does_not_write() {
        let store = MemoryStore::new();
        let writes = store.writes();
        let err = save_card(&store, &EditSession::edit("board-todo", "card_gone"), draft("A", ""), at(1)).unwrap_err();
        assert!(matches!(err, CardError::CardNotFound(_)));
        assert_eq!(store.writes(), writes);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let store = MemoryStore::new();
        let a = save_card(&store, &EditSession::create("board-todo"), draft("A", ""), at(1)).unwrap();
        let b = save_card(&store, &EditSession::create("board-todo"), draft("B", ""), at(2)).unwrap();

        let removed = delete_card(&store, &a.id).unwrap();

        assert_eq!(removed.map(|c| c.id), Some(a.id));
        assert_eq!(stored_cards(&store), vec![b]);
    }

    #[test]
    fn deleting_unknown_id_is_a_no_op() {
        let store = MemoryStore::new();
        save_card(&store, &EditSession::create("board-todo"), draft("A", ""), at(1)).unwrap();
        let before = stored_cards(&store);
        let writes = store.writes();

        assert!(delete_card(&store, "card_missing").unwrap().is_none());
        assert_eq!(store.writes(), writes);
        assert_eq!(stored_cards(&store), before);
    }

    const ODD_CARDS: &str = r#"[
        {"id":"keep","boardId":"board-todo","title":"Old","description":"","order":null,"createdAt":"2024-03-01T10:00:00Z"},
        {"id":"legacy","boardId":"board-todo","title":"No date","order":3}
    ]"#;

    fn raw_ids(store: &MemoryStore) -> Vec<String> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(&store.get_item(CARDS_KEY).unwrap().unwrap()).unwrap();
        raw.iter()
            .map(|v| v["id"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn unrelated_save_keeps_odd_stored_records() {
        let store = MemoryStore::new();
        store.set_item(CARDS_KEY, ODD_CARDS).unwrap();

        let created = save_card(&store, &EditSession::create("board-done"), draft("New", ""), at(5)).unwrap();

        assert_eq!(raw_ids(&store), vec!["keep".to_string(), "legacy".to_string(), created.id]);
        let keep = stored_cards(&store).into_iter().find(|c| c.id == "keep").unwrap();
        assert_eq!(keep.order, 0);
        assert_eq!(keep.title, "Old");
    }

    #[test]
    fn delete_keeps_odd_stored_records() {
        let store = MemoryStore::new();
        store.set_item(CARDS_KEY, ODD_CARDS).unwrap();

        let removed = delete_card(&store, "keep").unwrap();

        assert_eq!(removed.map(|c| c.id), Some("keep".to_string()));
        assert_eq!(raw_ids(&store), vec!["legacy".to_string()]);
        assert!(delete_card(&store, "legacy").unwrap().is_none());
    }

    #[test]
    fn every_card_stays_on_a_fixed_board() {
        let store = MemoryStore::new();
        initialize_fixed_boards(&store);
        let boards = fixed_boards();

        let mut ids = Vec::new();
        for (i, board) in boards.iter().cycle().take(9).enumerate() {
            let card = save_card(&store, &EditSession::create(board.id.clone()), draft(&format!("Card {i}"), ""), at(i as i64)).unwrap();
            ids.push((board.id.clone(), card.id));
        }
        let _ = save_card(&store, &EditSession::create("nowhere"), draft("Lost", ""), at(50));
        for (board_id, card_id) in ids.iter().step_by(2) {
            save_card(&store, &EditSession::edit(board_id.clone(), card_id.clone()), draft("Edited", ""), at(60)).unwrap();
        }
        for (_, card_id) in ids.iter().skip(1).step_by(3) {
            delete_card(&store, card_id).unwrap();
        }

        let stored = stored_cards(&store);
        assert_eq!(stored.len(), 6);
        assert!(stored.iter().all(|c| is_fixed_board(&c.board_id)));
        let total: usize = boards.iter().map(|b| board_cards(&store, &b.id).len()).sum();
        assert_eq!(total, stored.len());
        assert!(store.get_item(BOARDS_KEY).unwrap().is_some());
    }
}
