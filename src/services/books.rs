//! Book management service
//!
//! Owns create/update/delete/find/get logic and the isbn-uniqueness rule.
//! All mutations of the books table go through here; callers never touch the
//! store directly.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, NewBook, Page, PageRequest},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Persist a new book, rejecting an isbn that is already registered.
    ///
    /// The existence check is a fast path; the unique index on isbn backs it,
    /// so a concurrent save racing past the check still comes back as
    /// `DuplicateIsbn` from the insert instead of admitting a duplicate.
    pub async fn save(&self, book: NewBook) -> AppResult<Book> {
        if self.store.exists_by_isbn(&book.isbn).await? {
            return Err(AppError::DuplicateIsbn);
        }

        let saved = self.store.insert(&book).await?;
        tracing::info!(book_id = saved.id, isbn = %saved.isbn, "book created");
        Ok(saved)
    }

    /// Pure lookup; absence is a valid empty result, not an error
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        self.store.find_by_id(id).await
    }

    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        self.store.find_by_isbn(isbn).await
    }

    /// Replace title/author/isbn of an already-resolved book.
    ///
    /// The isbn is not re-checked against other records here; the unique
    /// index still rejects an actual collision at write time.
    pub async fn update(&self, book: Book) -> AppResult<Book> {
        if book.id == 0 {
            return Err(AppError::Validation(vec![
                "id: book id is required for update".to_string(),
            ]));
        }
        self.store.update(&book).await
    }

    /// Delete a previously-resolved book. Never silently succeeds when the
    /// identity is absent.
    pub async fn delete(&self, book: Book) -> AppResult<()> {
        if book.id == 0 {
            return Err(AppError::Validation(vec![
                "id: book id is required for delete".to_string(),
            ]));
        }
        self.store.delete(book.id).await
    }

    /// Fetch one page of books matching the optional filters
    pub async fn find(&self, filter: BookFilter, page: PageRequest) -> AppResult<Page<Book>> {
        let offset = page.page * page.size;
        let (items, total) = self.store.query(&filter, offset, page.size).await?;

        Ok(Page {
            items,
            total,
            page_number: page.page,
            page_size: page.size,
        })
    }
}
