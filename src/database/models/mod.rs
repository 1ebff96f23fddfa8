pub mod beer;
pub mod chat;
pub mod duel;
pub mod quote;
pub mod wakeup;

pub use beer::*;
pub use chat::*;
pub use duel::*;
pub use quote::*;
pub use wakeup::*;
