//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::book::{Book, BookFilter, NewBook, Page, PageRequest},
};

/// Create/update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub isbn: String,
}

impl From<BookRequest> for NewBook {
    fn from(request: BookRequest) -> Self {
        Self {
            title: request.title,
            author: request.author,
            isbn: request.isbn,
        }
    }
}

/// Book search query parameters
#[derive(Debug, Deserialize)]
pub struct BookListQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Zero-based page number (default: 0)
    pub page: Option<i64>,
    /// Page size (default: 20)
    pub size: Option<i64>,
}

/// Paginated book response
#[derive(Serialize, ToSchema)]
pub struct BookPageResponse {
    pub items: Vec<Book>,
    pub total: i64,
    pub page_number: i64,
    pub page_size: i64,
}

impl From<Page<Book>> for BookPageResponse {
    fn from(page: Page<Book>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page_number: page.page_number,
            page_size: page.page_size,
        }
    }
}

fn book_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book with id {} not found", id))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Validation failure or isbn already registered", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BookRequest>,
) -> AppResult<(StatusCode, Json<Book>)> {
    request.validate()?;

    let created = state.services.books.save(request.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List books with optional filters and pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("title" = Option<String>, Query, description = "Filter on title (substring, case-insensitive)"),
        ("author" = Option<String>, Query, description = "Filter on author (substring, case-insensitive)"),
        ("page" = Option<i64>, Query, description = "Zero-based page number (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 20)")
    ),
    responses(
        (status = 200, description = "One page of matching books", body = BookPageResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookListQuery>,
) -> AppResult<Json<BookPageResponse>> {
    let filter = BookFilter {
        title: query.title,
        author: query.author,
    };
    let page = PageRequest {
        page: query.page.unwrap_or(0),
        size: query.size.unwrap_or(20),
    };

    let result = state.services.books.find(filter, page).await?;
    Ok(Json(result.into()))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state
        .services
        .books
        .get_by_id(id)
        .await?
        .ok_or_else(|| book_not_found(id))?;
    Ok(Json(book))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(request): Json<BookRequest>,
) -> AppResult<Json<Book>> {
    request.validate()?;

    let mut book = state
        .services
        .books
        .get_by_id(id)
        .await?
        .ok_or_else(|| book_not_found(id))?;

    book.title = request.title;
    book.author = request.author;
    book.isbn = request.isbn;

    let updated = state.services.books.update(book).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let book = state
        .services
        .books
        .get_by_id(id)
        .await?
        .ok_or_else(|| book_not_found(id))?;

    state.services.books.delete(book).await?;
    Ok(StatusCode::NO_CONTENT)
}
