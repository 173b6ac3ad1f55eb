//! HTTP handlers

pub mod assess;
pub mod chat;
pub mod health;
pub mod status;
