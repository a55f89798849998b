//! Fixed configuration for the board: storage keys, the canonical columns,
//! DOM anchors and the prompts shown to the user.

use super::models::Board;

/// localStorage key holding the active theme (`light` / `dark`).
pub const THEME_KEY: &str = "theme";
/// localStorage key holding the JSON array of boards.
pub const BOARDS_KEY: &str = "boards";
/// localStorage key holding the JSON array of cards.
pub const CARDS_KEY: &str = "cards";

/// The three columns every board starts with, in display order.
pub const FIXED_BOARDS: [(&str, &str); 3] = [
    ("board-todo", "To Do"),
    ("board-inprogress", "In Progress"),
    ("board-done", "Done"),
];

// DOM ids
pub const BOARD_CONTAINER_ID: &str = "kanbanContainer";
pub const CARD_DIALOG_ID: &str = "cardModal";
pub const CARD_DIALOG_TITLE_ID: &str = "cardModalTitle";
pub const CARD_TITLE_INPUT_ID: &str = "cardTitleInput";
pub const CARD_DESCRIPTION_INPUT_ID: &str = "cardDescriptionInput";
pub const SAVE_CARD_BUTTON_ID: &str = "saveCardBtn";
pub const THEME_TOGGLE_ID: &str = "themeToggleBtn";
pub const THEME_ICON_ID: &str = "themeIcon";

/// Attribute set on `<html>` with the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Class of the element that holds a column's cards.
pub const CARDS_CONTAINER_CLASS: &str = "cards-container";

pub const ADD_CARD_HEADING: &str = "Add New Card";
pub const EDIT_CARD_HEADING: &str = "Edit Card";
pub const EMPTY_TITLE_MESSAGE: &str = "Please enter a title for the card.";

/// Canonical boards as records.
pub fn fixed_boards() -> Vec<Board> {
    FIXED_BOARDS
        .iter()
        .map(|(id, name)| Board::new(*id, *name))
        .collect()
}

pub fn is_fixed_board(board_id: &str) -> bool {
    FIXED_BOARDS.iter().any(|(id, _)| *id == board_id)
}

/// Confirmation prompt shown before a card is deleted.
pub fn delete_confirmation(title: &str) -> String {
    format!("Are you sure you want to delete the card \"{}\"?", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_boards_keep_canonical_order() {
        let ids: Vec<String> = fixed_boards().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["board-todo", "board-inprogress", "board-done"]);
    }

    #[test]
    fn only_canonical_ids_are_fixed_boards() {
        assert!(is_fixed_board("board-done"));
        assert!(!is_fixed_board("board-archive"));
        assert!(!is_fixed_board(""));
    }

    #[test]
    fn delete_confirmation_embeds_title() {
        assert_eq!(
            delete_confirmation("Write spec"),
            "Are you sure you want to delete the card \"Write spec\"?"
        );
    }
}
