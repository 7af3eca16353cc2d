//! Route handlers for `/books`.
//!
//! Store calls block on file I/O, so each one runs on the blocking pool.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::application::error::AppError;
use crate::application::service::BookService;
use crate::domain::error::DomainError;
use crate::domain::model::book::Book;
use crate::infra::json_store::JsonBookRepository;

use super::error::{ApiError, ApiResult};

pub type SharedService = Arc<BookService<JsonBookRepository>>;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub async fn health() -> &'static str {
    "ok"
}

/// `GET /books` — full array without paging parameters, otherwise one page.
pub async fn list_books(
    State(svc): State<SharedService>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = query.map_err(invalid_query)?;
    if params.page.is_none() && params.limit.is_none() {
        let books = blocking(&svc, |svc| svc.list_all()).await?;
        return Ok(Json(books).into_response());
    }
    let page = parse_paging_param("page", params.page.as_deref())?;
    let limit = parse_paging_param("limit", params.limit.as_deref())?;
    let page = blocking(&svc, move |svc| svc.paginate(page, limit)).await?;
    Ok(Json(page).into_response())
}

pub async fn get_book(
    State(svc): State<SharedService>,
    Path(id): Path<String>,
) -> ApiResult<Json<Book>> {
    let book = blocking(&svc, move |svc| svc.get(&id)).await?;
    Ok(Json(book))
}

pub async fn search_books(
    State(svc): State<SharedService>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Query(params) = query.map_err(invalid_query)?;
    let keyword = params.q.unwrap_or_default();
    let found = blocking(&svc, move |svc| svc.search(&keyword)).await?;
    Ok(Json(found))
}

pub async fn create_book(
    State(svc): State<SharedService>,
    payload: Result<Json<Book>, JsonRejection>,
) -> ApiResult<(StatusCode, &'static str)> {
    let Json(book) = payload.map_err(invalid_body)?;
    blocking(&svc, move |svc| svc.create(book)).await?;
    Ok((StatusCode::CREATED, "Book added successfully"))
}

/// Answers 202 whether or not a record matched; see `BookService::update`.
pub async fn update_book(
    State(svc): State<SharedService>,
    Path(id): Path<String>,
    payload: Result<Json<Book>, JsonRejection>,
) -> ApiResult<(StatusCode, &'static str)> {
    let Json(book) = payload.map_err(invalid_body)?;
    blocking(&svc, move |svc| svc.update(&id, book)).await?;
    Ok((StatusCode::ACCEPTED, "Book updated successfully"))
}

pub async fn delete_book(
    State(svc): State<SharedService>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, &'static str)> {
    blocking(&svc, move |svc| svc.delete(&id)).await?;
    Ok((StatusCode::OK, "Book deleted successfully"))
}

/// `/books/` with no id segment.
pub async fn missing_id() -> ApiError {
    AppError::from(DomainError::InvalidArgument("book id must not be empty".into())).into()
}

// --- private ---

async fn blocking<T, F>(svc: &SharedService, f: F) -> ApiResult<T>
where
    F: FnOnce(&BookService<JsonBookRepository>) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let svc = Arc::clone(svc);
    let out = tokio::task::spawn_blocking(move || f(&svc)).await??;
    Ok(out)
}

fn invalid_body(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(format!("invalid JSON body: {}", rejection.body_text()))
}

fn invalid_query(rejection: QueryRejection) -> ApiError {
    ApiError::BadRequest(format!("invalid query string: {}", rejection.body_text()))
}

fn parse_paging_param(name: &str, raw: Option<&str>) -> Result<i64, ApiError> {
    let invalid = || {
        ApiError::from(AppError::from(DomainError::InvalidArgument(
            "page and limit must be integers greater than zero".into(),
        )))
    };
    let value = raw.ok_or_else(invalid)?.trim().parse::<i64>().map_err(|_| {
        tracing::debug!(param = name, raw = ?raw, "unparseable paging parameter");
        invalid()
    })?;
    Ok(value)
}
