//! Data models for the library API

pub mod book;
pub mod loan;

// Re-export commonly used types
pub use book::{Book, BookFilter, NewBook, Page, PageRequest};
pub use loan::{Loan, NewLoan};
