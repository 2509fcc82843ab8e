use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;

use task_board_backend::config::Config;
use task_board_backend::configure_app;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    // The pool exists before the listener accepts anything and lives until shutdown.
    let pool = config.pool().map_err(|e| {
        error!("Failed to create pool: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let server_address = config.server_address();
    let server_pool = pool.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(server_pool.clone()))
            .configure(configure_app)
    })
    .bind(&server_address)?;

    info!("Features listening at http://localhost:{}", config.port);
    let result = server.run().await;

    info!("Server stopped, closing database pool");
    pool.close().await;
    result
}
