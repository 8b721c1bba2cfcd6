//! Loan management service
//!
//! Issues loans against books resolved by isbn at request time. No rule
//! prevents several open loans against the same book; see DESIGN.md.

use std::sync::Arc;

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::loan::{Loan, NewLoan},
    repository::LoanStore,
    services::books::BookService,
};

#[derive(Clone)]
pub struct LoanService {
    books: BookService,
    store: Arc<dyn LoanStore>,
}

impl LoanService {
    pub fn new(books: BookService, store: Arc<dyn LoanStore>) -> Self {
        Self { books, store }
    }

    /// Issue a loan for the book carrying the given isbn.
    ///
    /// Fails with `BookNotFound` when no such book exists; nothing is
    /// persisted in that case. The loan date is today's date at call time.
    pub async fn create(&self, isbn: &str, customer: &str) -> AppResult<Loan> {
        let book = self
            .books
            .get_by_isbn(isbn)
            .await?
            .ok_or(AppError::BookNotFound)?;

        let loan = NewLoan {
            book_id: book.id,
            customer: customer.to_string(),
            loan_date: Utc::now().date_naive(),
        };

        let saved = self.store.insert(&loan).await?;
        tracing::info!(loan_id = saved.id, book_id = book.id, "loan created");
        Ok(saved)
    }
}
