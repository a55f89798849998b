use leptos::logging::{error, log};

use crate::core::config::{fixed_boards, BOARDS_KEY, CARDS_KEY};
use crate::core::models::{Board, Card};
use crate::core::services::{load_collection_or_empty, save_collection, KeyValueStore};

/// Load the stored boards, re-seeding the canonical three when the stored
/// ids aren't exactly them, in order.
pub fn initialize_fixed_boards<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Board> {
    let canonical = fixed_boards();
    let stored: Vec<Board> = load_collection_or_empty(store, BOARDS_KEY);

    let matches_canonical = stored.len() == canonical.len()
        && stored.iter().zip(&canonical).all(|(s, c)| s.id == c.id);

    if matches_canonical {
        return stored;
    }

    log!("Seeding fixed boards ({} stored board(s) did not match)", stored.len());
    if let Err(e) = save_collection(store, BOARDS_KEY, &canonical) {
        error!("Failed to persist fixed boards: {}", e);
    }
    canonical
}

/// Cards of one board in display order. Ties keep their stored order.
pub fn board_cards<S: KeyValueStore + ?Sized>(store: &S, board_id: &str) -> Vec<Card> {
    let mut cards: Vec<Card> = load_collection_or_empty::<Card, _>(store, CARDS_KEY)
        .into_iter()
        .filter(|c| c.board_id == board_id)
        .collect();
    cards.sort_by_key(|c| c.order);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{load_collection, MemoryStore};
    use chrono::{TimeZone, Utc};

    fn card(id: &str, board: &str, order: i64) -> Card {
        let mut c = Card::new(board.into(), id.into(), String::new(), Utc.timestamp_opt(1, 0).unwrap());
        c.id = id.into();
        c.order = order;
        c
    }

    #[test]
    fn empty_storage_is_seeded_with_canonical_boards() {
        let store = MemoryStore::new();
        let boards = initialize_fixed_boards(&store);

        let stored: Vec<Board> = load_collection(&store, BOARDS_KEY).unwrap();
        assert_eq!(stored, boards);
        let ids: Vec<&str> = stored.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["board-todo", "board-inprogress", "board-done"]);
    }

    #[test]
    fn canonical_boards_are_not_rewritten() {
        let store = MemoryStore::new();
        initialize_fixed_boards(&store);
        save_collection(&store, CARDS_KEY, &[card("c1", "board-done", 0)]).unwrap();
        let writes = store.writes();

        let boards = initialize_fixed_boards(&store);

        assert_eq!(store.writes(), writes);
        assert_eq!(boards.len(), 3);
        assert_eq!(board_cards(&store, "board-done").len(), 1);
    }

    #[test]
    fn stored_names_are_kept_when_ids_match() {
        let store = MemoryStore::new();
        let renamed = vec![
            Board::new("board-todo", "Backlog"),
            Board::new("board-inprogress", "Doing"),
            Board::new("board-done", "Shipped"),
        ];
        save_collection(&store, BOARDS_KEY, &renamed).unwrap();
        assert_eq!(initialize_fixed_boards(&store), renamed);
    }

    #[test]
    fn mismatched_boards_are_reset() {
        let store = MemoryStore::new();
        let reordered = vec![
            Board::new("board-done", "Done"),
            Board::new("board-todo", "To Do"),
            Board::new("board-inprogress", "In Progress"),
        ];
        save_collection(&store, BOARDS_KEY, &reordered).unwrap();
        assert_eq!(initialize_fixed_boards(&store), fixed_boards());

        save_collection(&store, BOARDS_KEY, &[Board::new("board-todo", "To Do")]).unwrap();
        assert_eq!(initialize_fixed_boards(&store), fixed_boards());

        store.set_item(BOARDS_KEY, "garbage").unwrap();
        assert_eq!(initialize_fixed_boards(&store), fixed_boards());
        let stored: Vec<Board> = load_collection(&store, BOARDS_KEY).unwrap();
        assert_eq!(stored, fixed_boards());
    }

    #[test]
    fn board_cards_filters_and_sorts_by_order() {
        let store = MemoryStore::new();
        save_collection(
            &store,
            CARDS_KEY,
            &[
                card("late", "board-todo", 30),
                card("other", "board-done", 0),
                card("early", "board-todo", 10),
                card("tie-a", "board-todo", 20),
                card("tie-b", "board-todo", 20),
            ],
        )
        .unwrap();

        let ids: Vec<String> = board_cards(&store, "board-todo").into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["early", "tie-a", "tie-b", "late"]);
    }

    #[test]
    fn missing_order_sorts_first() {
        let store = MemoryStore::new();
        store
            .set_item(
                CARDS_KEY,
                r#"[{"id":"b","boardId":"board-todo","title":"B","order":5,"createdAt":"2024-01-01T00:00:00Z"},
                    {"id":"a","boardId":"board-todo","title":"A","createdAt":"2024-01-01T00:00:00Z"}]"#,
            )
            .unwrap();
        let ids: Vec<String> = board_cards(&store, "board-todo").into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
