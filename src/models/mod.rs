//! Data models

pub mod assessment;
pub mod chat;

pub use assessment::*;
pub use chat::*;
