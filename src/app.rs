use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::core::config::BOARD_CONTAINER_ID;
use crate::core::services::WebStorage;
use crate::features::kanban::components::{CardModal, KanbanBoard, KanbanHeader};
use crate::features::kanban::hooks::{
    BoardRenderer, CardSynchronizer, Columns, DragDropCoordinator, ModalController, ThemeController,
};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("no browser document is available")]
    NoDocument,
    #[error("CRITICAL: #{0} element not found in DOM! Boards cannot be rendered.")]
    MissingContainer(&'static str),
    #[error("#{0} is not an HTML element")]
    InvalidContainer(&'static str),
}

/// Find the board container and mount the app into it.
pub fn start() -> Result<(), BootstrapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BootstrapError::NoDocument)?;

    let container = document
        .get_element_by_id(BOARD_CONTAINER_ID)
        .ok_or(BootstrapError::MissingContainer(BOARD_CONTAINER_ID))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| BootstrapError::InvalidContainer(BOARD_CONTAINER_ID))?;

    web_sys::console::log_1(&"Initializing task board...".into());
    leptos::mount::mount_to(container, App).forget();
    Ok(())
}

#[component]
pub fn App() -> impl IntoView {
    // Leaf-first: each component gets its collaborators handed in.
    let store = WebStorage;
    let theme = ThemeController::new(store);
    theme.init();

    let modal = ModalController::new();
    let columns = Columns::new();
    let cards = CardSynchronizer::new(store, columns, modal);
    let boards = BoardRenderer::new(store, columns, cards);
    let drag = DragDropCoordinator::new(store, boards);

    boards.initialize_fixed_boards();

    view! {
        <main class="app">
            <KanbanHeader theme=theme />
            <KanbanBoard boards=boards cards=cards drag=drag />
            <CardModal modal=modal cards=cards />
        </main>
    }
}
