//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, NewBook},
};

/// Persistence contract for books.
///
/// The service layer only talks to the store through this trait so tests can
/// substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool>;

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Insert a new book, returning it with its assigned id.
    ///
    /// A unique-constraint rejection on the isbn column is translated to
    /// `AppError::DuplicateIsbn`.
    async fn insert(&self, book: &NewBook) -> AppResult<Book>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    /// Replace title/author/isbn of an existing book.
    /// Fails with `NotFound` when the id no longer exists.
    async fn update(&self, book: &Book) -> AppResult<Book>;

    /// Delete a book. Fails with `NotFound` when no row was deleted.
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Fetch books matching the filter, restricted to the given window,
    /// plus the total matching count.
    async fn query(
        &self,
        filter: &BookFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Book>, i64)>;
}

/// Translates the rejection of the unique index on isbn into the business
/// error. Everything else stays an infrastructure failure.
fn map_unique_violation(e: sqlx::Error) -> AppError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => AppError::DuplicateIsbn,
        _ => AppError::Database(e),
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, isbn FROM books WHERE isbn = $1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, isbn
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, isbn FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $2, author = $3, isbn = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, author, isbn
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_violation)?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book.id)))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    async fn query(
        &self,
        filter: &BookFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Book>, i64)> {
        // Absent filter fields stay NULL so the corresponding condition
        // matches everything; filtering on an empty string is a different
        // (all-matching) pattern, not the same code path.
        let title = filter.title.as_ref().map(|t| format!("%{}%", t.to_lowercase()));
        let author = filter.author.as_ref().map(|a| format!("%{}%", a.to_lowercase()));

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM books
            WHERE ($1::text IS NULL OR LOWER(title) LIKE $1)
              AND ($2::text IS NULL OR LOWER(author) LIKE $2)
            "#,
        )
        .bind(&title)
        .bind(&author)
        .fetch_one(&self.pool)
        .await?;

        let items = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, isbn FROM books
            WHERE ($1::text IS NULL OR LOWER(title) LIKE $1)
              AND ($2::text IS NULL OR LOWER(author) LIKE $2)
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&title)
        .bind(&author)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((items, total))
    }
}
