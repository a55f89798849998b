use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element};

use crate::core::config::CARDS_CONTAINER_CLASS;
use crate::core::services::{now, order_key, WebStorage};
use crate::features::kanban::services::{
    apply_visual_order, insertion_index, move_card_to_board, reorder_board, reorder_ids,
};

use super::use_board::BoardRenderer;

/// The card under the pointer during one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraggedCard {
    pub card_id: String,
    /// Board the card was rendered on when the drag started.
    pub origin_board_id: String,
}

#[derive(Clone, Copy)]
pub struct DragDropCoordinator {
    store: WebStorage,
    boards: BoardRenderer,
    dragged: RwSignal<Option<DraggedCard>>,
    marked: RwSignal<Option<String>>,
    hovered_board: RwSignal<Option<String>>,
}

fn event_element(ev: &DragEvent) -> Option<Element> {
    ev.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Drag events bubble up from the cards; only the container itself counts.
fn targets_container(ev: &DragEvent) -> bool {
    event_element(ev)
        .map(|el| el.class_name().split_whitespace().any(|c| c == CARDS_CONTAINER_CLASS))
        .unwrap_or(false)
}

/// Vertical midpoints of the cards in `container`, skipping the dragged one.
fn card_midpoints(container: &Element, dragged_id: &str) -> Vec<f64> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|el| {
            el.get_attribute("data-card-id")
                .map(|id| id != dragged_id)
                .unwrap_or(false)
        })
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            rect.top() + rect.height() / 2.0
        })
        .collect()
}

impl DragDropCoordinator {
    pub fn new(store: WebStorage, boards: BoardRenderer) -> Self {
        Self {
            store,
            boards,
            dragged: RwSignal::new(None),
            marked: RwSignal::new(None),
            hovered_board: RwSignal::new(None),
        }
    }

    pub fn is_marked(&self, card_id: &str) -> bool {
        self.marked.with(|m| m.as_deref() == Some(card_id))
    }

    pub fn is_hovered(&self, board_id: &str) -> bool {
        self.hovered_board.with(|h| h.as_deref() == Some(board_id))
    }

    pub fn handle_drag_start(&self, ev: &DragEvent, card_id: String, origin_board_id: String) {
        let is_card = event_element(ev)
            .map(|el| el.class_name().split_whitespace().any(|c| c == "card"))
            .unwrap_or(false);
        if !is_card {
            return;
        }

        if let Some(transfer) = ev.data_transfer() {
            if let Err(e) = transfer.set_data("text/plain", &card_id) {
                web_sys::console::error_1(&format!("Failed to set drag data: {:?}", e).into());
            }
            transfer.set_effect_allowed("move");
        }

        self.dragged.set(Some(DraggedCard {
            card_id: card_id.clone(),
            origin_board_id,
        }));

        // Next tick, so the drag image is captured without the marker.
        let dragged = self.dragged;
        let marked = self.marked;
        Timeout::new(0, move || {
            let still_dragging = dragged.with_untracked(|d| {
                d.as_ref().map(|d| d.card_id == card_id).unwrap_or(false)
            });
            if still_dragging {
                marked.set(Some(card_id));
            }
        })
        .forget();
    }

    pub fn handle_drag_end(&self) {
        self.marked.set(None);
        self.dragged.set(None);
    }

    pub fn handle_drag_over(&self, ev: &DragEvent) {
        ev.prevent_default();
    }

    pub fn handle_drag_enter(&self, ev: &DragEvent, board_id: &str) {
        ev.prevent_default();
        if targets_container(ev) {
            self.hovered_board.set(Some(board_id.to_string()));
        }
    }

    pub fn handle_drag_leave(&self, ev: &DragEvent, board_id: &str) {
        if targets_container(ev) && self.is_hovered_untracked(board_id) {
            self.hovered_board.set(None);
        }
    }

    pub fn handle_drop(&self, ev: &DragEvent, target_board_id: &str) {
        ev.prevent_default();

        let container = event_element(ev)
            .and_then(|el| el.closest(&format!(".{}", CARDS_CONTAINER_CLASS)).ok().flatten());
        let (Some(container), Some(dragged)) = (container, self.dragged.get_untracked()) else {
            return;
        };

        self.hovered_board.set(None);

        if dragged.origin_board_id != target_board_id {
            self.move_across(&dragged, target_board_id);
        } else {
            let midpoints = card_midpoints(&container, &dragged.card_id);
            let index = insertion_index(&midpoints, f64::from(ev.client_y()));
            self.reorder_within(&dragged, target_board_id, index);
        }

        // A card moved to another column loses its node, and with it the dragend event.
        self.handle_drag_end();
    }

    fn is_hovered_untracked(&self, board_id: &str) -> bool {
        self.hovered_board.with_untracked(|h| h.as_deref() == Some(board_id))
    }

    fn move_across(&self, dragged: &DraggedCard, target_board_id: &str) {
        match move_card_to_board(&self.store, &dragged.card_id, target_board_id, order_key(now())) {
            Ok(_) => {
                self.boards.render_board_by_id(&dragged.origin_board_id);
                self.boards.render_board_by_id(target_board_id);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Drop aborted: {}", e).into());
            }
        }
    }

    /// Same-column drop: reorder the column's list in place and persist dense orders.
    fn reorder_within(&self, dragged: &DraggedCard, board_id: &str, index: usize) {
        let Some(column) = self.boards.columns().cards_of(board_id) else {
            web_sys::console::error_1(&format!("No rendered column for board {}", board_id).into());
            return;
        };

        let current: Vec<String> = column.with_untracked(|cards| cards.iter().map(|c| c.id.clone()).collect());
        let ordered = reorder_ids(&current, &dragged.card_id, index);

        match reorder_board(&self.store, &dragged.card_id, &ordered) {
            Ok(()) => column.update(|cards| apply_visual_order(cards, &ordered)),
            Err(e) => {
                web_sys::console::error_1(&format!("Drop aborted: {}", e).into());
            }
        }
    }
}
