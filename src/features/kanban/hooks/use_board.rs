use crate::core::models::Board;
use crate::core::services::WebStorage;
use crate::features::kanban::services;

use super::use_cards::CardSynchronizer;
use super::use_columns::Columns;

/// Renders the fixed columns and hands card listing to the synchronizer.
#[derive(Clone, Copy)]
pub struct BoardRenderer {
    store: WebStorage,
    columns: Columns,
    cards: CardSynchronizer,
}

impl BoardRenderer {
    pub fn new(store: WebStorage, columns: Columns, cards: CardSynchronizer) -> Self {
        Self { store, columns, cards }
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    /// Drop every rendered column, seed/load the fixed boards and render them in order.
    pub fn initialize_fixed_boards(&self) {
        self.columns.clear();
        let boards = services::initialize_fixed_boards(&self.store);
        for board in boards {
            self.render_board(board);
        }
        web_sys::console::log_1(&"Fixed boards initialized".into());
    }

    /// Idempotent: an existing column for this id is reused, its cards reloaded.
    pub fn render_board(&self, board: Board) {
        let board_id = board.id.clone();
        self.columns.upsert(board);
        self.cards.listen_for_card_changes(&board_id);
    }

    pub fn render_board_by_id(&self, board_id: &str) {
        match self.columns.board(board_id) {
            Some(board) => self.render_board(board),
            None => {
                web_sys::console::error_1(&format!("Cannot render unknown board {}", board_id).into());
            }
        }
    }
}
