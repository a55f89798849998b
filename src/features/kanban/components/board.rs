use leptos::prelude::*;

use crate::features::kanban::hooks::{BoardColumn, BoardRenderer, CardSynchronizer, DragDropCoordinator};

use super::column::KanbanColumn;

#[component]
pub fn KanbanBoard(
    boards: BoardRenderer,
    cards: CardSynchronizer,
    drag: DragDropCoordinator,
) -> impl IntoView {
    let columns = boards.columns();

    view! {
        <div class="kanban-board">
            <For
                each=move || columns.list()
                key=|column: &BoardColumn| (column.board.id.clone(), column.board.name.clone())
                children=move |column: BoardColumn| {
                    view! { <KanbanColumn column=column cards=cards drag=drag /> }
                }
            />
        </div>
    }
}
