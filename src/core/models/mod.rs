pub mod board;
pub mod card;
pub mod theme;

pub use board::*;
pub use card::*;
pub use theme::*;
