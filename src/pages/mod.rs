//! Route components.

pub mod admin;
pub mod chat_room;
pub mod conversations;
pub mod feed;
pub mod login;
pub mod post_detail;
pub mod post_edit;
pub mod post_new;
pub mod profile;
