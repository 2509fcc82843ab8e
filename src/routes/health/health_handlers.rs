use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::ApiError;

// Store errors are not caught here: they leave as a bare 500 with no message.
pub async fn health_get(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
        .fetch_one(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!(
            "Hey, the server is up and the time from the DB is {}",
            now
        )))
}
