use actix_web::{web, HttpResponse};
use log::info;
use sqlx::PgPool;

use super::categories_models::CreateCategoryRequest;
use crate::error::ApiError;
use crate::models::Category;

const CREATE_FAILED: &str = "Error al crear la categoría";
const LIST_FAILED: &str = "Error al obtener las categorías";

// Create a category; answers 200, not 201
pub async fn create_category(
    pool: web::Data<PgPool>,
    request: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
    )
    .bind(request.name.into_inner())
    .fetch_one(pool.get_ref())
    .await
    .map_err(ApiError::store(CREATE_FAILED))?;

    info!("Created category {}", category.id);
    Ok(HttpResponse::Ok().json(category))
}

pub async fn list_categories(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
        .fetch_all(pool.get_ref())
        .await
        .map_err(ApiError::store(LIST_FAILED))?;

    Ok(HttpResponse::Ok().json(categories))
}
