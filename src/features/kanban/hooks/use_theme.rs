use leptos::prelude::*;

use crate::core::config::{THEME_ATTRIBUTE, THEME_KEY};
use crate::core::models::Theme;
use crate::core::services::{KeyValueStore, WebStorage};

#[derive(Debug, Clone, Copy)]
pub struct ThemeController {
    store: WebStorage,
    current: RwSignal<Theme>,
}

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

impl ThemeController {
    pub fn new(store: WebStorage) -> Self {
        Self {
            store,
            current: RwSignal::new(Theme::default()),
        }
    }

    /// Apply the stored theme, light if none.
    pub fn init(&self) {
        let stored = self.store.get_item(THEME_KEY).unwrap_or_else(|e| {
            web_sys::console::error_1(&format!("Failed to read theme: {}", e).into());
            None
        });
        self.apply(Theme::parse(stored.as_deref()));
    }

    /// Flip whatever is currently applied to the document, then persist it.
    pub fn toggle(&self) {
        let applied = root_element().and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
        let next = Theme::parse(applied.as_deref()).toggled();
        self.apply(next);
        if let Err(e) = self.store.set_item(THEME_KEY, next.as_str()) {
            web_sys::console::error_1(&format!("Failed to persist theme: {}", e).into());
        }
    }

    pub fn icon(&self) -> &'static str {
        self.current.get().icon()
    }

    fn apply(&self, theme: Theme) {
        match root_element() {
            Some(root) => {
                if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                    web_sys::console::error_1(&format!("Failed to apply theme: {:?}", e).into());
                }
            }
            None => web_sys::console::error_1(&"No document element to apply theme to".into()),
        }
        self.current.set(theme);
    }
}
