pub mod api_error;
pub mod chat;
pub mod grid;
