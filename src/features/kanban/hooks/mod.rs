pub mod use_board;
pub mod use_card_modal;
pub mod use_cards;
pub mod use_columns;
pub mod use_drag_drop;
pub mod use_theme;

pub use use_board::*;
pub use use_card_modal::*;
pub use use_cards::*;
pub use use_columns::*;
pub use use_drag_drop::*;
pub use use_theme::*;
