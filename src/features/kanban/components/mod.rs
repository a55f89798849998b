pub mod board;
pub mod card;
pub mod card_modal;
pub mod column;
pub mod header;

pub use board::KanbanBoard;
pub use card::CardView;
pub use card_modal::CardModal;
pub use column::KanbanColumn;
pub use header::KanbanHeader;
