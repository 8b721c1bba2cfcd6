//! Loans repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::loan::{Loan, NewLoan},
};

/// Persistence contract for loans
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Insert a new loan, returning it with its assigned id
    async fn insert(&self, loan: &NewLoan) -> AppResult<Loan>;
}

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanStore for LoansRepository {
    async fn insert(&self, loan: &NewLoan) -> AppResult<Loan> {
        let saved = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (book_id, customer, loan_date)
            VALUES ($1, $2, $3)
            RETURNING id, book_id, customer, loan_date
            "#,
        )
        .bind(loan.book_id)
        .bind(&loan.customer)
        .bind(loan.loan_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }
}
