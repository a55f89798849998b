use leptos::prelude::*;

use crate::core::models::{Board, Card};

/// One rendered column: the board record and its cards in display order.
#[derive(Debug, Clone)]
pub struct BoardColumn {
    pub board: Board,
    pub cards: RwSignal<Vec<Card>>,
}

/// The rendered columns, in the order they were first rendered.
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    columns: RwSignal<Vec<BoardColumn>>,
}

impl Columns {
    pub fn new() -> Self {
        Self {
            columns: RwSignal::new(Vec::new()),
        }
    }

    /// Tracked snapshot for the view.
    pub fn list(&self) -> Vec<BoardColumn> {
        self.columns.get()
    }

    pub fn clear(&self) {
        self.columns.set(Vec::new());
    }

    pub fn board(&self, board_id: &str) -> Option<Board> {
        self.columns.with_untracked(|columns| {
            columns
                .iter()
                .find(|c| c.board.id == board_id)
                .map(|c| c.board.clone())
        })
    }

    pub fn cards_of(&self, board_id: &str) -> Option<RwSignal<Vec<Card>>> {
        self.columns.with_untracked(|columns| {
            columns
                .iter()
                .find(|c| c.board.id == board_id)
                .map(|c| c.cards)
        })
    }

    /// Reuse the column for `board.id` (refreshing its header data) or
    /// append a new, empty one.
    pub fn upsert(&self, board: Board) -> RwSignal<Vec<Card>> {
        if let Some(cards) = self.cards_of(&board.id) {
            let unchanged = self.board(&board.id).as_ref() == Some(&board);
            if !unchanged {
                self.columns.update(|columns| {
                    if let Some(column) = columns.iter_mut().find(|c| c.board.id == board.id) {
                        column.board = board;
                    }
                });
            }
            return cards;
        }

        let cards = RwSignal::new(Vec::new());
        self.columns.update(|columns| columns.push(BoardColumn { board, cards }));
        cards
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::new()
    }
}
