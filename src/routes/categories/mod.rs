pub mod categories_handlers;
pub mod categories_models;
