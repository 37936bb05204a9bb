//! Network layer: REST wrappers, wire DTOs, and the chat transport.

pub mod api;
pub mod chat_client;
pub mod stomp;
pub mod types;
