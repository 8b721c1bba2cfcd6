//! Business logic services

pub mod books;
pub mod loans;

use std::sync::Arc;

use crate::repository::{BookStore, LoanStore, Repository};

pub use books::BookService;
pub use loans::LoanService;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: BookService,
    pub loans: LoanService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let book_store: Arc<dyn BookStore> = Arc::new(repository.books.clone());
        let loan_store: Arc<dyn LoanStore> = Arc::new(repository.loans);

        let books = BookService::new(book_store);
        let loans = LoanService::new(books.clone(), loan_store);

        Self { books, loans }
    }
}
