use leptos::logging::log;

use crate::core::config::{is_fixed_board, CARDS_KEY};
use crate::core::models::Card;
use crate::core::services::{load_stored_or_empty, save_stored, KeyValueStore};

use super::card_operations::CardError;

/// Result of moving a card to another board.
#[derive(Debug, Clone, PartialEq)]
pub struct MovedCard {
    pub card: Card,
    pub origin_board_id: String,
}

/// Put a card on another board, after everything already there (`order_key`
/// should be a fresh time-based key).
pub fn move_card_to_board<S: KeyValueStore + ?Sized>(
    store: &S,
    card_id: &str,
    target_board_id: &str,
    order_key: i64,
) -> Result<MovedCard, CardError> {
    if !is_fixed_board(target_board_id) {
        return Err(CardError::UnknownBoard(target_board_id.to_string()));
    }

    let mut cards = load_stored_or_empty::<Card, _>(store, CARDS_KEY);
    let card = cards
        .find_mut(|c| c.id == card_id)
        .ok_or_else(|| CardError::CardNotFound(card_id.to_string()))?;

    let origin_board_id = card.board_id.clone();
    card.move_to(target_board_id.to_string(), order_key);
    let moved = card.clone();

    save_stored(store, CARDS_KEY, &cards)?;
    log!("Moved card {} from {} to {}", card_id, origin_board_id, target_board_id);
    Ok(MovedCard {
        card: moved,
        origin_board_id,
    })
}

/// Persist a board's new visual order: each listed card gets its zero-based
/// position as `order`. Fails without writing if `dragged_id` is gone.
pub fn reorder_board<S: KeyValueStore + ?Sized>(
    store: &S,
    dragged_id: &str,
    ordered_ids: &[String],
) -> Result<(), CardError> {
    let mut cards = load_stored_or_empty::<Card, _>(store, CARDS_KEY);
    if !cards.records().any(|c| c.id == dragged_id) {
        return Err(CardError::CardNotFound(dragged_id.to_string()));
    }

    for (index, id) in ordered_ids.iter().enumerate() {
        if let Some(card) = cards.find_mut(|c| &c.id == id) {
            card.order = index as i64;
        }
    }

    save_stored(store, CARDS_KEY, &cards)?;
    Ok(())
}

/// Insertion index for a drop at `cursor_y`, given the vertical midpoints of
/// the other cards in the column (top to bottom).
pub fn insertion_index(midpoints: &[f64], cursor_y: f64) -> usize {
    midpoints.iter().take_while(|mid| **mid < cursor_y).count()
}

/// `ids` with `dragged_id` taken out and re-inserted at `index` (counted
/// among the remaining ids, clamped to the end).
pub fn reorder_ids(ids: &[String], dragged_id: &str, index: usize) -> Vec<String> {
    let mut rest: Vec<String> = ids.iter().filter(|id| *id != dragged_id).cloned().collect();
    let index = index.min(rest.len());
    rest.insert(index, dragged_id.to_string());
    rest
}

/// Rearrange an in-memory column to `ordered_ids`, giving each card its
/// position as `order`. Cards missing from the list keep their relative
/// order after the listed ones.
pub fn apply_visual_order(cards: &mut [Card], ordered_ids: &[String]) {
    let position = |card: &Card| {
        ordered_ids
            .iter()
            .position(|id| *id == card.id)
            .unwrap_or(ordered_ids.len())
    };
    cards.sort_by_key(|c| position(c));
    for (index, card) in cards.iter_mut().enumerate() {
        card.order = index as i64;
    }
}
