//! Loan (borrow) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan record from the database.
///
/// References a book by id only; book fields are never copied into the loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i64,
    pub book_id: i64,
    pub customer: String,
    pub loan_date: NaiveDate,
}

/// Fields for a loan that has not been persisted yet.
///
/// The loan date is set server-side at creation time, never client-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoan {
    pub book_id: i64,
    pub customer: String,
    pub loan_date: NaiveDate,
}
