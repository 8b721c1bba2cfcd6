//! Loan management endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppResult, ErrorResponse};

/// Create loan request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLoanRequest {
    /// Isbn of the book being borrowed
    #[validate(length(min = 1, message = "must not be empty"))]
    pub isbn: String,
    /// Name of the borrowing customer
    #[validate(length(min = 1, message = "must not be empty"))]
    pub customer: String,
}

/// Create a new loan (borrow a book)
///
/// Returns the assigned loan id as a plain identifier.
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoanRequest,
    responses(
        (status = 201, description = "Loan created, body is the loan id", body = i64),
        (status = 400, description = "Validation failure or no book for the passed isbn", body = ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateLoanRequest>,
) -> AppResult<(StatusCode, Json<i64>)> {
    request.validate()?;

    let loan = state
        .services
        .loans
        .create(&request.isbn, &request.customer)
        .await?;

    Ok((StatusCode::CREATED, Json(loan.id)))
}
