use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;

use crate::core::config::{
    CARD_DESCRIPTION_INPUT_ID, CARD_DIALOG_ID, CARD_DIALOG_TITLE_ID, CARD_TITLE_INPUT_ID, SAVE_CARD_BUTTON_ID,
};
use crate::features::kanban::hooks::{CardSynchronizer, ModalController};

/// The shared create/edit dialog.
#[component]
pub fn CardModal(modal: ModalController, cards: CardSynchronizer) -> impl IntoView {
    let dialog_ref = modal.dialog_ref;
    let heading = modal.heading();
    let title = modal.title();
    let description = modal.description();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        cards.save_card();
    };

    view! {
        <dialog
            node_ref=dialog_ref
            id=CARD_DIALOG_ID
            class="modal task-modal"
            on:click=move |ev| modal.handle_backdrop_click(&ev)
            on:cancel=move |ev: Event| {
                // Escape key; route through close() so the session is cleared.
                ev.prevent_default();
                modal.close();
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3 id=CARD_DIALOG_TITLE_ID>{move || heading.get()}</h3>
                    <button
                        type="button"
                        class="close-btn modal-close"
                        data-modal-id=CARD_DIALOG_ID
                        on:click=move |ev| modal.close_from(&ev)
                    >
                        "×"
                    </button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for=CARD_TITLE_INPUT_ID>"Title"</label>
                        <input
                            id=CARD_TITLE_INPUT_ID
                            type="text"
                            placeholder="Card title..."
                            on:input=move |ev| title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for=CARD_DESCRIPTION_INPUT_ID>"Description"</label>
                        <textarea
                            id=CARD_DESCRIPTION_INPUT_ID
                            placeholder="Card description..."
                            rows="4"
                            on:input=move |ev| description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="cancel-btn btn-secondary"
                            data-modal-id=CARD_DIALOG_ID
                            on:click=move |ev| modal.close_from(&ev)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            id=SAVE_CARD_BUTTON_ID
                            class="btn-primary"
                            prop:disabled=move || modal.is_saving()
                        >
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
