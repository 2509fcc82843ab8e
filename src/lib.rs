use actix_web::web;

pub mod body;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

/// Body limits plus every route; shared by the binary and the tests.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    body::configure(cfg);
    routes::routes::configure(cfg);
}
