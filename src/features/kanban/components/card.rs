use leptos::prelude::*;

use crate::core::models::Card;
use crate::core::services::format_timestamp;
use crate::features::kanban::hooks::{CardSynchronizer, DragDropCoordinator};

#[component]
pub fn CardView(card: Card, cards: CardSynchronizer, drag: DragDropCoordinator) -> impl IntoView {
    let timestamp = format_timestamp(&card.display_timestamp());
    let lines: Vec<String> = card.description_lines().into_iter().map(String::from).collect();

    let on_drag_start = {
        let card_id = card.id.clone();
        let board_id = card.board_id.clone();
        move |ev: leptos::ev::DragEvent| drag.handle_drag_start(&ev, card_id.clone(), board_id.clone())
    };

    let on_edit = {
        let card = card.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            cards.open_modal_for_card(&card.board_id, Some(&card));
        }
    };

    let on_delete = {
        let card_id = card.id.clone();
        let title = card.title.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            cards.delete_card(&card_id, &title);
        }
    };

    let is_marked = {
        let card_id = card.id.clone();
        move || drag.is_marked(&card_id)
    };

    view! {
        <div
            class="card"
            class:dragging=is_marked
            draggable="true"
            data-card-id=card.id.clone()
            data-original-board-id=card.board_id.clone()
            on:dragstart=on_drag_start
            on:dragend=move |_| drag.handle_drag_end()
        >
            <div class="card-header">
                <h3 class="card-title-text">{card.title.clone()}</h3>
                <div class="card-actions">
                    <button class="edit-card-btn" aria-label="Edit card" on:click=on_edit>"✏️"</button>
                    <button class="delete-card-btn" aria-label="Delete card" on:click=on_delete>"🗑️"</button>
                </div>
            </div>
            <p class="card-description-text">
                {lines
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| view! { <>{(i > 0).then(|| view! { <br /> })}{line}</> })
                    .collect_view()}
            </p>
            <span class="card-timestamp">{timestamp}</span>
        </div>
    }
}
