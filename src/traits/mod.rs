//! Capability traits implemented by entities and transports.

pub mod entity;

pub use entity::Entity;
pub use crate::execution::transport::Transport;
