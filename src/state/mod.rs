//! Application state containers provided as context signals by `app::App`.

pub mod auth;
pub mod categories;
pub mod chat;
pub mod feed;
pub mod ui;
