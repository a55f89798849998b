use leptos::prelude::*;

use crate::core::config::{THEME_ICON_ID, THEME_TOGGLE_ID};
use crate::features::kanban::hooks::ThemeController;

#[component]
pub fn KanbanHeader(theme: ThemeController) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <h1>"Task Board"</h1>
            <div class="kanban-actions">
                <button
                    id=THEME_TOGGLE_ID
                    class="btn-secondary kanban-header-btn"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    <span id=THEME_ICON_ID>{move || theme.icon()}</span>
                </button>
            </div>
        </header>
    }
}
