use leptos::prelude::*;

use crate::core::models::Card;
use crate::features::kanban::hooks::{BoardColumn, CardSynchronizer, DragDropCoordinator};

use super::card::CardView;

/// One board: header, its drop-enabled card list and the "add card" control.
#[component]
pub fn KanbanColumn(
    column: BoardColumn,
    cards: CardSynchronizer,
    drag: DragDropCoordinator,
) -> impl IntoView {
    let board_id = column.board.id.clone();
    let column_cards = column.cards;

    view! {
        <div class="board kanban-column" data-board-id=board_id.clone()>
            <div class="board-header column-header">
                <h2 class="board-title">{column.board.name.clone()}</h2>
                <span class="task-count">{move || column_cards.with(|cards| cards.len())}</span>
            </div>
            <div
                class="cards-container"
                class:drag-over={
                    let board_id = board_id.clone();
                    move || drag.is_hovered(&board_id)
                }
                on:dragover=move |ev| drag.handle_drag_over(&ev)
                on:dragenter={
                    let board_id = board_id.clone();
                    move |ev| drag.handle_drag_enter(&ev, &board_id)
                }
                on:dragleave={
                    let board_id = board_id.clone();
                    move |ev| drag.handle_drag_leave(&ev, &board_id)
                }
                on:drop={
                    let board_id = board_id.clone();
                    move |ev| drag.handle_drop(&ev, &board_id)
                }
            >
                <For
                    each=move || column_cards.get()
                    key=|card: &Card| (card.id.clone(), card.updated_at)
                    children=move |card: Card| view! { <CardView card=card cards=cards drag=drag /> }
                />
            </div>
            <button
                class="add-card-btn"
                on:click={
                    let board_id = board_id.clone();
                    move |_| cards.open_modal_for_card(&board_id, None)
                }
            >
                "+ Add Card"
            </button>
        </div>
    }
}
