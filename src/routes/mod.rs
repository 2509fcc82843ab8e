pub mod routes;
pub mod tasks;
pub mod categories;
pub mod health;
