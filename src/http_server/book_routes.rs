//! Book HTTP Routes
//!
//! CRUD endpoints over the shared book store.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::storage::{Book, BookPatch, BookStore, NewBook};

use super::errors::{ApiError, ApiResult};
use super::response::{ListResponse, SingleResponse};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
///
/// Readers share the lock; every mutation takes it exclusively.
pub struct BookState {
    store: RwLock<BookStore>,
}

impl BookState {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Number of stored books
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}

impl Default for BookState {
    fn default() -> Self {
        Self::new(BookStore::new())
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_books_handler(
    State(state): State<Arc<BookState>>,
) -> Json<ListResponse<Book>> {
    let store = state.store.read().await;
    Json(ListResponse::new(store.get_all().to_vec()))
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SingleResponse<Book>>> {
    let store = state.store.read().await;
    let book = store.get_by_id(&id)?.clone();
    Ok(Json(SingleResponse::new(book)))
}

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SingleResponse<Book>>)> {
    let Json(new_book) = payload?;
    new_book.validate().map_err(ApiError::InvalidBody)?;

    let book = new_book.into_book(Uuid::new_v4().to_string());
    state.store.write().await.add(book.clone())?;

    info!(id = %book.id, isbn = %book.isbn, "book created");
    Ok((StatusCode::CREATED, Json(SingleResponse::new(book))))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
    payload: Result<Json<BookPatch>, JsonRejection>,
) -> ApiResult<Json<SingleResponse<Book>>> {
    let Json(patch) = payload?;

    // Read and write under one guard so no other writer lands in between.
    let mut store = state.store.write().await;
    let merged = store.get_by_id(&id)?.merged(patch);
    store.update_by_id(&id, merged.clone())?;

    info!(id = %id, "book updated");
    Ok(Json(SingleResponse::new(merged)))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.write().await.delete_by_id(&id)?;

    info!(id = %id, "book deleted");
    Ok(StatusCode::OK)
}
