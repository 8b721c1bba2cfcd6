//! Repository layer for database operations

pub mod books;
pub mod loans;

use sqlx::{Pool, Postgres};

pub use books::{BookStore, BooksRepository};
pub use loans::{LoanStore, LoansRepository};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: BooksRepository,
    pub loans: LoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: BooksRepository::new(pool.clone()),
            loans: LoansRepository::new(pool.clone()),
            pool,
        }
    }
}
