pub mod board_operations;
pub mod card_operations;
pub mod drag_operations;

pub use board_operations::*;
pub use card_operations::*;
pub use drag_operations::*;
