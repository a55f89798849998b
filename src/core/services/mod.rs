pub mod storage;
pub mod time;

pub use storage::*;
pub use time::*;
