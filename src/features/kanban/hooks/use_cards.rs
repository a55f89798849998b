use leptos::prelude::*;

use crate::core::config::{delete_confirmation, ADD_CARD_HEADING, EDIT_CARD_HEADING, EMPTY_TITLE_MESSAGE};
use crate::core::models::{Card, CardDraft};
use crate::core::services::{now, WebStorage};
use crate::features::kanban::services::{board_cards, delete_card, save_card, CardError, EditSession};

use super::use_card_modal::ModalController;
use super::use_columns::Columns;

/// Card create/edit/delete, and the refresh that re-derives a column from storage.
#[derive(Clone, Copy)]
pub struct CardSynchronizer {
    store: WebStorage,
    columns: Columns,
    modal: ModalController,
}

impl CardSynchronizer {
    pub fn new(store: WebStorage, columns: Columns, modal: ModalController) -> Self {
        Self { store, columns, modal }
    }

    /// One-shot refresh of a column from storage (not a subscription).
    pub fn listen_for_card_changes(&self, board_id: &str) {
        let Some(column) = self.columns.cards_of(board_id) else {
            web_sys::console::error_1(&format!("No rendered column for board {}", board_id).into());
            return;
        };

        let cards = board_cards(&self.store, board_id);
        web_sys::console::log_1(&format!("Showing {} card(s) on board {}", cards.len(), board_id).into());
        column.set(cards);
    }

    pub fn open_modal_for_card(&self, board_id: &str, card: Option<&Card>) {
        match card {
            Some(card) => self.modal.open(
                EditSession::edit(board_id, card.id.clone()),
                EDIT_CARD_HEADING,
                card.title.clone(),
                card.description.clone(),
            ),
            None => self.modal.open(
                EditSession::create(board_id),
                ADD_CARD_HEADING,
                String::new(),
                String::new(),
            ),
        }
    }

    /// Submit handler for the card dialog.
    pub fn save_card(&self) {
        if !self.modal.begin_save() {
            return;
        }

        let Some(session) = self.modal.session() else {
            web_sys::console::error_1(&"Save requested without an open edit session".into());
            self.modal.end_save();
            return;
        };

        let draft = CardDraft {
            title: self.modal.title().get_untracked(),
            description: self.modal.description().get_untracked(),
        };

        match save_card(&self.store, &session, draft, now()) {
            Ok(_) => {
                self.listen_for_card_changes(&session.board_id);
                self.modal.close();
            }
            Err(CardError::EmptyTitle) => {
                alert(EMPTY_TITLE_MESSAGE);
                self.modal.end_save();
            }
            Err(e @ CardError::CardNotFound(_)) => {
                web_sys::console::error_1(&format!("{}; discarding edit", e).into());
                self.listen_for_card_changes(&session.board_id);
                self.modal.close();
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to save card: {}", e).into());
                self.modal.end_save();
            }
        }
    }

    /// Delete after confirmation; declining changes nothing.
    pub fn delete_card(&self, card_id: &str, title: &str) {
        if !confirm(&delete_confirmation(title)) {
            return;
        }

        match delete_card(&self.store, card_id) {
            Ok(Some(removed)) => {
                if let Some(column) = self.columns.cards_of(&removed.board_id) {
                    column.update(|cards| cards.retain(|c| c.id != removed.id));
                }
                self.listen_for_card_changes(&removed.board_id);
            }
            Ok(None) => {}
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to delete card {}: {}", card_id, e).into());
            }
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
