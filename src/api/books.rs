//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, BookShort, NewBook},
};

/// Success envelope wrapping every catalog response
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Outcome token, always "success" on this path
    pub status: String,
    /// Human-readable outcome description
    pub message: String,
    /// Operation-specific payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn success(message: &str, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data,
        }
    }
}

/// Identifier of a freshly added book
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookCreated {
    pub book_id: String,
}

/// Listing payload of book projections
#[derive(Serialize, ToSchema)]
pub struct BookListing {
    pub books: Vec<BookShort>,
}

/// Single full record payload
#[derive(Serialize, ToSchema)]
pub struct BookDetail {
    pub book: Book,
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book added", body = ApiResponse<BookCreated>),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<NewBook>,
) -> AppResult<(StatusCode, Json<ApiResponse<BookCreated>>)> {
    let book = state.services.catalog.add_book(data)?;

    let response = ApiResponse::success("Book added successfully", BookCreated { book_id: book.id });
    Ok((StatusCode::CREATED, Json(response)))
}

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Book listing", body = ApiResponse<BookListing>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ApiResponse<BookListing>>> {
    let books = state.services.catalog.list_books(&query)?;

    Ok(Json(ApiResponse::success(
        "Books retrieved successfully",
        BookListing { books },
    )))
}

/// Get full book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = ApiResponse<BookDetail>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<BookDetail>>> {
    let book = state.services.catalog.get_book(&id)?;

    Ok(Json(ApiResponse::success(
        "Book retrieved successfully",
        BookDetail { book },
    )))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = NewBook,
    responses(
        (status = 200, description = "Book updated", body = ApiResponse<Book>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<NewBook>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.services.catalog.update_book(&id, data)?;

    Ok(Json(ApiResponse::success("Book updated successfully", book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    state.services.catalog.delete_book(&id)?;

    // Deletion succeeds with an explicitly null payload.
    Ok(Json(ApiResponse::success(
        "Book deleted successfully",
        serde_json::Value::Null,
    )))
}
