use actix_web::{web, HttpResponse};
use log::info;
use sqlx::PgPool;

use super::tasks_models::{AdjustRankingRequest, CreateTaskRequest, UpdateTaskRequest};
use crate::error::ApiError;
use crate::models::{MessageResponse, Task};

pub const TASK_NOT_FOUND: &str = "Tarea no encontrada";
pub const TASK_DELETED: &str = "Tarea eliminada correctamente";

const LIST_FAILED: &str = "Error al obtener las tareas";
const GET_FAILED: &str = "Error al obtener la tarea";
const CREATE_FAILED: &str = "Error al crear la tarea";
const UPDATE_FAILED: &str = "Error al actualizar la tarea";
const DELETE_FAILED: &str = "Error al eliminar la tarea";
const RANKING_FAILED: &str = "Error al actualizar el ranking de la tarea";

// Ids and body values are bound as text and cast by each statement; a value
// the store cannot convert fails the statement like any other store error.

// Get all tasks
pub async fn list_tasks(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, name, description, author, category_id, ranking FROM tasks",
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::store(LIST_FAILED))?;

    Ok(HttpResponse::Ok().json(tasks))
}

// Get one task by id
pub async fn get_task(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let task = sqlx::query_as::<_, Task>(
        "
        SELECT id, name, description, author, category_id, ranking
        FROM tasks
        WHERE id = $1::integer
        ",
    )
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(ApiError::store(GET_FAILED))?;

    found(&id, task).map(|task| HttpResponse::Ok().json(task))
}

pub async fn create_task(
    pool: web::Data<PgPool>,
    request: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    let task = sqlx::query_as::<_, Task>(
        "
        INSERT INTO tasks (name, description, author, category_id)
        VALUES ($1, $2, $3, $4::integer)
        RETURNING id, name, description, author, category_id, ranking
        ",
    )
    .bind(request.name.into_inner())
    .bind(request.description.into_inner())
    .bind(request.author.into_inner())
    .bind(request.category_id.into_inner())
    .fetch_one(pool.get_ref())
    .await
    .map_err(ApiError::store(CREATE_FAILED))?;

    info!("Created task {}", task.id);
    Ok(HttpResponse::Created().json(task))
}

// Overwrites name, description, author and ranking
pub async fn update_task(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    request: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let request = request.into_inner();
    let task = sqlx::query_as::<_, Task>(
        "
        UPDATE tasks SET name = $1, description = $2, author = $3, ranking = $4::integer
        WHERE id = $5::integer
        RETURNING id, name, description, author, category_id, ranking
        ",
    )
    .bind(request.name.into_inner())
    .bind(request.description.into_inner())
    .bind(request.author.into_inner())
    .bind(request.ranking.into_inner())
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(ApiError::store(UPDATE_FAILED))?;

    found(&id, task).map(|task| HttpResponse::Ok().json(task))
}

pub async fn delete_task(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let deleted = sqlx::query_as::<_, Task>(
        "
        DELETE FROM tasks
        WHERE id = $1::integer
        RETURNING id, name, description, author, category_id, ranking
        ",
    )
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(ApiError::store(DELETE_FAILED))?;

    found(&id, deleted)?;
    info!("Deleted task {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: TASK_DELETED.to_string(),
    }))
}

// Add (or subtract, with negative points) to the task's ranking
pub async fn adjust_ranking(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    request: web::Json<AdjustRankingRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let points = request.into_inner().points.into_inner();
    // Delta is applied in SQL, never read-modify-write.
    let task = sqlx::query_as::<_, Task>(
        "
        UPDATE tasks SET ranking = ranking + $1::integer
        WHERE id = $2::integer
        RETURNING id, name, description, author, category_id, ranking
        ",
    )
    .bind(points)
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(ApiError::store(RANKING_FAILED))?;

    found(&id, task).map(|task| HttpResponse::Ok().json(task))
}

fn found(id: &str, task: Option<Task>) -> Result<Task, ApiError> {
    task.ok_or_else(|| {
        info!("Task not found: {}", id);
        ApiError::NotFound(TASK_NOT_FOUND)
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::json;

    use crate::configure_app;
    use crate::models::ErrorResponse;
    use crate::test_support::unreachable_pool;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(unreachable_pool()))
                    .configure(configure_app),
            )
            .await
        };
    }

    async fn assert_store_error(req: test::TestRequest, expected: &str) {
        let app = app!();
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, expected);
    }

    #[actix_web::test]
    async fn list_reports_store_failure() {
        let req = test::TestRequest::get().uri("/tasks");
        assert_store_error(req, "Error al obtener las tareas").await;
    }

    #[actix_web::test]
    async fn get_reports_store_failure() {
        let req = test::TestRequest::get().uri("/tasks/7");
        assert_store_error(req, "Error al obtener la tarea").await;
    }

    #[actix_web::test]
    async fn create_reports_store_failure() {
        let req = test::TestRequest::post().uri("/tasks").set_json(json!({
            "name": "A",
            "description": "B",
            "author": "C",
            "category_id": 1
        }));
        assert_store_error(req, "Error al crear la tarea").await;
    }

    #[actix_web::test]
    async fn update_reports_store_failure() {
        let req = test::TestRequest::put().uri("/tasks/7").set_json(json!({
            "name": "A",
            "description": "B",
            "author": "C",
            "ranking": 4
        }));
        assert_store_error(req, "Error al actualizar la tarea").await;
    }

    #[actix_web::test]
    async fn delete_reports_store_failure() {
        let req = test::TestRequest::delete().uri("/tasks/7");
        assert_store_error(req, "Error al eliminar la tarea").await;
    }

    #[actix_web::test]
    async fn ranking_reports_store_failure() {
        let req = test::TestRequest::patch()
            .uri("/tasks/7/ranking")
            .set_json(json!({ "points": -2 }));
        assert_store_error(req, "Error al actualizar el ranking de la tarea").await;
    }

    #[actix_web::test]
    async fn missing_body_fields_still_reach_the_store() {
        // No validation: an empty object is forwarded as NULLs.
        let req = test::TestRequest::post().uri("/tasks").set_json(json!({}));
        assert_store_error(req, "Error al crear la tarea").await;
    }

    #[actix_web::test]
    async fn non_numeric_id_is_left_to_the_store() {
        let req = test::TestRequest::get().uri("/tasks/abc");
        assert_store_error(req, "Error al obtener la tarea").await;

        let req = test::TestRequest::delete().uri("/tasks/abc");
        assert_store_error(req, "Error al eliminar la tarea").await;
    }

    #[actix_web::test]
    async fn out_of_range_id_is_left_to_the_store() {
        let req = test::TestRequest::get().uri("/tasks/99999999999");
        assert_store_error(req, "Error al obtener la tarea").await;
    }

    #[actix_web::test]
    async fn string_numbers_in_body_are_not_rejected() {
        let req = test::TestRequest::post().uri("/tasks").set_json(json!({
            "name": "A",
            "description": "B",
            "author": "C",
            "category_id": "1"
        }));
        assert_store_error(req, "Error al crear la tarea").await;

        let req = test::TestRequest::put().uri("/tasks/7").set_json(json!({
            "name": "A",
            "description": "B",
            "author": "C",
            "ranking": "4"
        }));
        assert_store_error(req, "Error al actualizar la tarea").await;

        let req = test::TestRequest::patch()
            .uri("/tasks/7/ranking")
            .set_json(json!({ "points": "2" }));
        assert_store_error(req, "Error al actualizar el ranking de la tarea").await;
    }

    #[actix_web::test]
    async fn malformed_json_is_rejected() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/tasks")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_method_is_not_routed() {
        let app = app!();
        let req = test::TestRequest::post().uri("/tasks/7").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
