pub mod channel;
pub mod search;

pub use channel::*;
pub use search::*;
