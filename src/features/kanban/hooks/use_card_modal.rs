use leptos::html::Dialog;
use leptos::logging::{error, warn};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDialogElement, MouseEvent};

use crate::core::config::CARD_DIALOG_ID;
use crate::features::kanban::services::EditSession;

/// The shared card dialog and the edit session it is acting on.
#[derive(Clone, Copy)]
pub struct ModalController {
    pub dialog_ref: NodeRef<Dialog>,
    heading: RwSignal<String>,
    title: RwSignal<String>,
    description: RwSignal<String>,
    session: RwSignal<Option<EditSession>>,
    saving: RwSignal<bool>,
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            dialog_ref: NodeRef::new(),
            heading: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            session: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn heading(&self) -> RwSignal<String> {
        self.heading
    }

    pub fn title(&self) -> RwSignal<String> {
        self.title
    }

    pub fn description(&self) -> RwSignal<String> {
        self.description
    }

    pub fn session(&self) -> Option<EditSession> {
        self.session.get_untracked()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.get()
    }

    /// Claim the in-flight save slot. `false` if a save is already running.
    pub fn begin_save(&self) -> bool {
        if self.saving.get_untracked() {
            return false;
        }
        self.saving.set(true);
        true
    }

    pub fn end_save(&self) {
        self.saving.set(false);
    }

    pub fn open(&self, session: EditSession, heading: &str, title: String, description: String) {
        let Some(dialog) = self.dialog_ref.get() else {
            error!("Card dialog is not mounted; cannot open it");
            return;
        };

        self.prepare(session, heading, title, description);
        if let Err(e) = dialog.show_modal() {
            error!("Failed to open card dialog: {:?}", e);
        }
    }

    /// Fill the form and start the edit session, without touching the DOM.
    fn prepare(&self, session: EditSession, heading: &str, title: String, description: String) {
        self.heading.set(heading.to_string());
        self.title.set(title);
        self.description.set(description);
        self.session.set(Some(session));
    }

    /// Hide the dialog and reset everything the edit session touched. The
    /// reset happens even when the dialog isn't mounted.
    pub fn close(&self) {
        match self.dialog_ref.get() {
            Some(dialog) => dialog.close(),
            None => warn!("Card dialog is not mounted; resetting its state only"),
        }
        self.reset();
    }

    fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.session.set(None);
        self.saving.set(false);
    }

    /// Close/cancel controls: the dialog named by `data-modal-id`, else the
    /// enclosing `<dialog>`.
    pub fn close_from(&self, ev: &MouseEvent) {
        let Some(trigger) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let control = trigger
            .closest(".close-btn, .cancel-btn")
            .ok()
            .flatten()
            .unwrap_or(trigger);

        let dialog = match control.get_attribute("data-modal-id") {
            Some(id) => web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&id)),
            None => control.closest("dialog").ok().flatten(),
        };

        match dialog {
            Some(dialog) if dialog.id() == CARD_DIALOG_ID => self.close(),
            Some(dialog) => {
                if let Ok(dialog) = dialog.dyn_into::<HtmlDialogElement>() {
                    dialog.close();
                }
            }
            None => {
                error!("No dialog found for close control");
            }
        }
    }

    /// Clicks that land on the dialog element itself hit the backdrop.
    pub fn handle_backdrop_click(&self, ev: &MouseEvent) {
        if ev.target().is_some() && ev.target() == ev.current_target() {
            self.close();
        }
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_modal(test: impl FnOnce(ModalController)) {
        let owner = Owner::new();
        owner.with(|| test(ModalController::new()));
    }

    #[test]
    fn second_save_is_refused_while_one_is_pending() {
        with_modal(|modal| {
            assert!(modal.begin_save());
            assert!(modal.saving.get_untracked());
            assert!(!modal.begin_save());

            modal.end_save();
            assert!(!modal.saving.get_untracked());
            assert!(modal.begin_save());
        });
    }

    #[test]
    fn failed_save_keeps_the_session_open() {
        with_modal(|modal| {
            let session = EditSession::edit("board-todo", "card_1");
            modal.prepare(session.clone(), "Edit Card", "  ".into(), "desc".into());

            assert!(modal.begin_save());
            modal.end_save();

            assert_eq!(modal.session(), Some(session));
            assert_eq!(modal.description().get_untracked(), "desc");
            assert!(modal.begin_save());
        });
    }

    #[test]
    fn close_without_a_mounted_dialog_still_resets() {
        with_modal(|modal| {
            modal.prepare(EditSession::create("board-done"), "Add New Card", "Title".into(), "Body".into());
            assert!(modal.begin_save());

            modal.close();

            assert_eq!(modal.session(), None);
            assert!(!modal.saving.get_untracked());
            assert_eq!(modal.title().get_untracked(), "");
            assert_eq!(modal.description().get_untracked(), "");
            assert_eq!(modal.heading().get_untracked(), "Add New Card");
        });
    }
}
