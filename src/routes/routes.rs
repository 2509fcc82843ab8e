use actix_web::web;

use super::categories::categories_handlers;
use super::health::health_handlers;
use super::tasks::tasks_handlers;

pub fn health_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health_handlers::health_get));
}

pub fn tasks_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .route("", web::get().to(tasks_handlers::list_tasks))
            .route("/", web::get().to(tasks_handlers::list_tasks))
            .route("", web::post().to(tasks_handlers::create_task))
            .route("/", web::post().to(tasks_handlers::create_task))
            .route("/{id}", web::get().to(tasks_handlers::get_task))
            .route("/{id}", web::put().to(tasks_handlers::update_task))
            .route("/{id}", web::delete().to(tasks_handlers::delete_task))
            .route("/{id}/ranking", web::patch().to(tasks_handlers::adjust_ranking))
    );
}

pub fn categories_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(categories_handlers::list_categories))
            .route("/", web::get().to(categories_handlers::list_categories))
            .route("", web::post().to(categories_handlers::create_category))
            .route("/", web::post().to(categories_handlers::create_category))
    );
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    health_configure(cfg);
    tasks_configure(cfg);
    categories_configure(cfg);
}
