pub mod error;
pub mod kind;
pub mod messages;
pub mod state;
