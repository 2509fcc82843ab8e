//! PostgreSQL for the end-to-end tests.
//!
//! Each `TestDatabase` starts its own Postgres container and applies
//! `fixtures/schema.sql`. The container is stopped and removed on drop.
//! Set `TEST_DATABASE_URL` to run against an existing server instead.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

pub struct TestDatabase {
    _container: Option<ContainerAsync<Postgres>>,
    pub pool: PgPool,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let (container, url) = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => (None, url),
            Err(_) => {
                let container = Postgres::default()
                    .with_tag("16-alpine")
                    .start()
                    .await
                    .expect("Failed to start Postgres container");
                let host = container.get_host().await.expect("Failed to get host");
                let port = container
                    .get_host_port_ipv4(5432)
                    .await
                    .expect("Failed to get host port");
                let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);
                (Some(container), url)
            }
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("Failed to connect to test database");

        for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .expect("Failed to apply test schema");
        }

        TestDatabase {
            _container: container,
            pool,
        }
    }
}
