// src/models/mod.rs

pub mod task;
pub mod category;
pub mod response;
pub mod store_text;

pub use category::Category;
pub use response::{ErrorResponse, MessageResponse};
pub use store_text::StoreText;
pub use task::Task;
